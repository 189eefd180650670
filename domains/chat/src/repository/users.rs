//! User repository

use crate::domain::entities::User;
use parrot_common::Result;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get user by ID
    pub async fn find(&self, id: i64) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name
            FROM users
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Get the first user by insertion order (the primary user in a
    /// single-tenant deployment)
    pub async fn find_first(&self) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name
            FROM users
            ORDER BY id ASC
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Create a new user with a store-assigned id
    pub async fn create(&self, name: &str) -> Result<User> {
        User::validate_name(name)?;

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name)
            VALUES (?1)
            RETURNING id, name
            "#,
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    /// Idempotent bootstrap: provision the default user unless one already
    /// exists. Called once by the process entry point, never on import.
    pub async fn seed_if_empty(&self, name: &str) -> Result<User> {
        if let Some(existing) = self.find_first().await? {
            return Ok(existing);
        }
        tracing::info!(name, "seeding default user");
        self.create(name).await
    }
}
