//! Shared utilities, configuration, and error handling for Parrot
//!
//! This crate provides common functionality used across the Parrot application:
//! - Configuration management following 12-factor principles
//! - Error types and handling
//! - Database pool setup and migrations
//! - Custom axum extractors

pub mod config;
pub mod db;
pub mod error;
pub mod extractors;

pub use config::Config;
pub use error::{Error, Result};
pub use extractors::ValidatedJson;
