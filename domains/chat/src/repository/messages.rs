//! Message repository

use crate::domain::entities::Message;
use parrot_common::Result;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct MessageRepository {
    pool: SqlitePool,
}

impl MessageRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List messages for a chat, ordered by timestamp ascending with
    /// insertion id as tiebreak
    pub async fn list_by_chat(&self, chat_id: i64) -> Result<Vec<Message>> {
        let messages = sqlx::query_as::<_, Message>(
            r#"
            SELECT message_id, chat_id, sender, text, timestamp
            FROM messages
            WHERE chat_id = ?1
            ORDER BY timestamp ASC, message_id ASC
            "#,
        )
        .bind(chat_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(messages)
    }
}
