//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config. Every variable has a
//! local-development default, so the server starts with no .env at all.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Database connection URL (SQLite)
    pub database_url: String,

    /// Display name for the seeded default user
    pub seed_user_name: String,

    /// Single allowed cross-origin front-end origin
    pub cors_allowed_origin: String,

    /// When true, listing messages for a chat with no messages yet
    /// returns 404 instead of an empty array (pre-redesign contract)
    pub legacy_history_404: bool,

    /// Runtime configuration
    pub rust_log: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        let config = Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://parrot.db".to_string()),

            seed_user_name: env::var("SEED_USER_NAME").unwrap_or_else(|_| "Alice".to_string()),

            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),

            legacy_history_404: env::var("LEGACY_HISTORY_404")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),

            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "parrot=debug".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .unwrap_or(8000),
        };

        Ok(config)
    }
}
