//! Parrot application composition root
//!
//! Composes the domain routers into a single application and runs the
//! explicit bootstrap steps (default-user seeding) that used to be
//! start-time side effects.

use std::sync::Arc;

use axum::Router;
use sqlx::SqlitePool;

use parrot_chat::{ChatRepositories, ChatService, ChatState};
use parrot_common::Config;
use parrot_replies::CannedReplyService;

/// Create the main application router with all routes
pub async fn create_app(config: &Config, pool: SqlitePool) -> Result<Router, anyhow::Error> {
    // Create repositories
    let repos = ChatRepositories::new(pool);

    // Bootstrap: provision the default user once, idempotently
    let user = repos.users.seed_if_empty(&config.seed_user_name).await?;
    tracing::info!(user_id = user.id, name = %user.name, "primary user ready");

    // Create Chat domain state
    let service = ChatService::new(repos, Arc::new(CannedReplyService::new()))
        .with_legacy_history_404(config.legacy_history_404);
    let chat_state = ChatState { service };

    // Build router — compose domain routers with shared infrastructure routes
    let app = Router::new()
        .route("/health", axum::routing::get(health_check))
        .route("/", axum::routing::get(|| async { "Parrot API v0.1.0" }))
        .merge(parrot_chat::routes().with_state(chat_state));

    Ok(app)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
