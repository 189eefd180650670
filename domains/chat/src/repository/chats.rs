//! Chat repository

use crate::domain::entities::Chat;
use parrot_common::Result;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct ChatRepository {
    pool: SqlitePool,
}

impl ChatRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find chat by ID
    pub async fn find(&self, chat_id: i64) -> Result<Option<Chat>> {
        let chat = sqlx::query_as::<_, Chat>(
            r#"
            SELECT chat_id, user_id, created_at
            FROM chats
            WHERE chat_id = ?1
            "#,
        )
        .bind(chat_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(chat)
    }

    /// List chats for a user, ordered by creation time ascending.
    /// Insertion id breaks ties between chats created within the same
    /// clock tick.
    pub async fn list_by_user(&self, user_id: i64) -> Result<Vec<Chat>> {
        let chats = sqlx::query_as::<_, Chat>(
            r#"
            SELECT chat_id, user_id, created_at
            FROM chats
            WHERE user_id = ?1
            ORDER BY created_at ASC, chat_id ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(chats)
    }
}
