//! Transaction helpers for the Chat domain
//!
//! Multi-row writes (start chat, message pair) run inside one store
//! transaction so their rows become visible atomically; a failure before
//! commit leaves zero rows behind. Helpers here operate on a borrowed
//! transaction and let the caller decide when to commit.

use chrono::{DateTime, Utc};
use sqlx::{Sqlite, Transaction};

use crate::domain::entities::{Chat, Message, Sender, User};

/// Look up a user within a transaction
pub async fn find_user_tx(
    tx: &mut Transaction<'_, Sqlite>,
    user_id: i64,
) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>("SELECT id, name FROM users WHERE id = ?1")
        .bind(user_id)
        .fetch_optional(&mut **tx)
        .await?;
    Ok(user)
}

/// Look up a chat within a transaction
pub async fn find_chat_tx(
    tx: &mut Transaction<'_, Sqlite>,
    chat_id: i64,
) -> Result<Option<Chat>, sqlx::Error> {
    let chat = sqlx::query_as::<_, Chat>(
        "SELECT chat_id, user_id, created_at FROM chats WHERE chat_id = ?1",
    )
    .bind(chat_id)
    .fetch_optional(&mut **tx)
    .await?;
    Ok(chat)
}

/// Create a chat within a transaction, returning the stored row with its
/// assigned id
pub async fn create_chat_tx(
    tx: &mut Transaction<'_, Sqlite>,
    user_id: i64,
    created_at: DateTime<Utc>,
) -> Result<Chat, sqlx::Error> {
    let chat = sqlx::query_as::<_, Chat>(
        r#"
        INSERT INTO chats (user_id, created_at)
        VALUES (?1, ?2)
        RETURNING chat_id, user_id, created_at
        "#,
    )
    .bind(user_id)
    .bind(created_at)
    .fetch_one(&mut **tx)
    .await?;
    Ok(chat)
}

/// Create a message within a transaction, returning the stored row with its
/// assigned id
pub async fn create_message_tx(
    tx: &mut Transaction<'_, Sqlite>,
    chat_id: i64,
    sender: Sender,
    text: &str,
    timestamp: DateTime<Utc>,
) -> Result<Message, sqlx::Error> {
    let message = sqlx::query_as::<_, Message>(
        r#"
        INSERT INTO messages (chat_id, sender, text, timestamp)
        VALUES (?1, ?2, ?3, ?4)
        RETURNING message_id, chat_id, sender, text, timestamp
        "#,
    )
    .bind(chat_id)
    .bind(sender)
    .bind(text)
    .bind(timestamp)
    .fetch_one(&mut **tx)
    .await?;
    Ok(message)
}
