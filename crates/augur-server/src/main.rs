use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use sqlx::postgres::PgPoolOptions;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod models;
mod routes;
mod services;

use adapters::PgAnswerStore;
use application::GameService;
use augur::SessionRegistry;
use services::sweeper;

/// Type alias for the application service with the concrete store implementation
pub type AppGameService = GameService<PgAnswerStore>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub game_service: Arc<AppGameService>,
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Augur API is running - think of a character".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Augur API initializing...");

    let database_url =
        std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool_size: u32 = env_or("AUGUR_DB_POOL_SIZE", 5);

    let pool = PgPoolOptions::new()
        .max_connections(pool_size)
        .connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    // Schema bootstrap is idempotent; a failure here is fatal
    sqlx::migrate!()
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!("Database migrations completed");

    // Initialize the application service
    let registry = Arc::new(SessionRegistry::new());
    let store = Arc::new(PgAnswerStore::new(pool));
    let game_service = Arc::new(GameService::new(registry.clone(), store));

    // Abandoned sessions are evicted after an idle TTL (0 disables)
    let ttl_secs: u64 = env_or("AUGUR_SESSION_TTL_SECS", 1800);
    if sweeper::maybe_start_sweeper(registry, ttl_secs).is_some() {
        tracing::info!("Session sweeper started");
    } else {
        tracing::warn!("Session eviction disabled - abandoned sessions accumulate");
    }

    let state = AppState { game_service };

    // OpenAPI documentation
    let openapi = routes::swagger::ApiDoc::openapi();

    // Build router with shared state
    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::game::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = std::env::var("AUGUR_LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Swagger UI: /swagger-ui");
    tracing::info!("Augur API ready on {}", addr);

    axum::serve(listener, router)
        .await
        .context("Server error")?;

    Ok(())
}
