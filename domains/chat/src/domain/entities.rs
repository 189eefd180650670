//! Domain entities for the Chat domain
//!
//! Identity is store-assigned (integer autoincrement), so entities here are
//! read models hydrated from rows; creation goes through the repository
//! transaction helpers. Validation of caller-supplied attributes lives on
//! the entity types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use parrot_common::{Error, Result};

/// Maximum display name length (varchar-style cap, 30)
const MAX_NAME_LENGTH: usize = 30;

/// Message sender tag — a closed two-value enumeration. Any other wire value
/// is rejected at deserialization time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Sender {
    User,
    Bot,
}

impl std::fmt::Display for Sender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sender::User => write!(f, "USER"),
            Sender::Bot => write!(f, "BOT"),
        }
    }
}

/// User entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
}

impl User {
    /// Validate a display name (non-empty, at most 30 characters)
    pub fn validate_name(name: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(Error::Validation(
                "Display name cannot be empty".to_string(),
            ));
        }
        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(Error::Validation(format!(
                "Display name must be at most {} characters",
                MAX_NAME_LENGTH
            )));
        }
        Ok(())
    }
}

/// Chat entity: a conversation thread owned by one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Chat {
    pub chat_id: i64,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Message entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Message {
    pub message_id: i64,
    pub chat_id: i64,
    pub sender: Sender,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// Validate a message body (non-empty, whitespace-only rejected)
    pub fn validate_text(text: &str) -> Result<()> {
        if text.trim().is_empty() {
            return Err(Error::Validation(
                "Message text cannot be empty or whitespace-only".to_string(),
            ));
        }
        Ok(())
    }
}

/// The atomic unit produced by one send-message call: the persisted user
/// message plus its synthesized bot reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessagePair {
    pub user_message: Message,
    pub bot_message: Message,
}
