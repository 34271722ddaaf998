//! Augur CLI - play the guessing game from a terminal
//!
//! Thin client over the Augur HTTP API: think of a character, answer the
//! questions, see whether the server deduces it.

mod api;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::Confirm;

use api::{AugurClient, GuessOutcome};

const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(Parser)]
#[command(name = "augur")]
#[command(about = "Augur CLI - character guessing game client", long_about = None)]
#[command(version)]
struct Cli {
    /// Server base URL (falls back to AUGUR_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a full game interactively
    Play {
        /// Stop asking after this many questions and guess
        #[arg(short, long, default_value_t = 20)]
        max_questions: usize,
    },

    /// Check that the server is reachable
    Health,
}

fn base_url(cli: &Cli) -> String {
    cli.base_url
        .clone()
        .or_else(|| std::env::var("AUGUR_BASE_URL").ok())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let client = AugurClient::new(&base_url(&cli));

    match cli.command {
        Commands::Play { max_questions } => play(&client, max_questions).await,
        Commands::Health => health(&client).await,
    }
}

async fn play(client: &AugurClient, max_questions: usize) -> Result<()> {
    let session_id = client.start().await?;

    println!("{}", "Think of a character. I will try to guess it.".cyan());
    println!();

    let mut asked = 0;
    while asked < max_questions {
        let Some(question) = client.next_question(session_id).await? else {
            println!("{}", "I have no questions left.".yellow());
            break;
        };

        let answer = Confirm::new()
            .with_prompt(format!("{} {}", format!("[{}]", asked + 1).dimmed(), question.question))
            .interact()?;

        client.answer(session_id, question.id, answer).await?;
        asked += 1;
    }

    println!();
    match client.end(session_id).await? {
        GuessOutcome::Guessed(name) => {
            println!("{} {}", "My guess:".green().bold(), name.bold());
        }
        GuessOutcome::Unresolved(message) => {
            println!("{}", message.yellow());
        }
    }

    Ok(())
}

async fn health(client: &AugurClient) -> Result<()> {
    if client.health().await.unwrap_or(false) {
        println!("{}", "Server is up".green());
    } else {
        println!("{}", "Server is unreachable".red());
    }
    Ok(())
}
