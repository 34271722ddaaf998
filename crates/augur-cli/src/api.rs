//! Augur API Client

use anyhow::{bail, Context, Result};
use reqwest::Client;
use serde::Deserialize;
use uuid::Uuid;

/// API Client for Augur
pub struct AugurClient {
    client: Client,
    base_url: String,
}

// ============================================
// API Response Types
// ============================================

#[derive(Debug, Deserialize)]
pub struct StartGameResponse {
    pub session_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct QuestionPayload {
    pub id: i64,
    pub question: String,
}

#[derive(Debug, Deserialize)]
struct QuestionResponse {
    question: Option<QuestionPayload>,
}

#[derive(Debug, Deserialize)]
struct GuessResponse {
    guess: String,
}

/// Outcome of ending a game
#[derive(Debug)]
pub enum GuessOutcome {
    /// The server deduced a unique character
    Guessed(String),
    /// Zero or multiple characters matched; the server gives up
    Unresolved(String),
}

impl AugurClient {
    /// Create a new API client
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Test connection with health check
    pub async fn health(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);
        let resp = self.client.get(&url).send().await?;
        Ok(resp.status().is_success())
    }

    /// Start a game session
    pub async fn start(&self) -> Result<Uuid> {
        let url = format!("{}/game/start", self.base_url);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to connect to Augur API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        let started: StartGameResponse = resp.json().await.context("Failed to parse response")?;

        Ok(started.session_id)
    }

    /// Fetch the next unanswered question; None once all are answered
    pub async fn next_question(&self, session_id: Uuid) -> Result<Option<QuestionPayload>> {
        let url = format!("{}/game/{}/question", self.base_url, session_id);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to connect to Augur API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        let next: QuestionResponse = resp.json().await.context("Failed to parse response")?;

        Ok(next.question)
    }

    /// Submit a yes/no answer
    pub async fn answer(&self, session_id: Uuid, question_id: i64, answer: bool) -> Result<()> {
        let url = format!("{}/game/{}/answer", self.base_url, session_id);
        let resp = self
            .client
            .post(&url)
            .json(&serde_json::json!({
                "question_id": question_id,
                "answer": answer,
            }))
            .send()
            .await
            .context("Failed to connect to Augur API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        Ok(())
    }

    /// End the game and receive the guess
    pub async fn end(&self, session_id: Uuid) -> Result<GuessOutcome> {
        let url = format!("{}/game/{}/end", self.base_url, session_id);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to connect to Augur API")?;

        let status = resp.status();

        // 404 carries the could-not-guess body, every other non-success is an error
        if status.is_success() || status == reqwest::StatusCode::NOT_FOUND {
            let ended: GuessResponse = resp.json().await.context("Failed to parse response")?;
            if status.is_success() {
                Ok(GuessOutcome::Guessed(ended.guess))
            } else {
                Ok(GuessOutcome::Unresolved(ended.guess))
            }
        } else {
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }
    }
}
