//! Repository implementations for the Chat domain

pub mod chats;
pub mod messages;
pub mod transactions;
pub mod users;

use sqlx::SqlitePool;

pub use chats::ChatRepository;
pub use messages::MessageRepository;
pub use users::UserRepository;

/// Combined repository access for the Chat domain
#[derive(Clone)]
pub struct ChatRepositories {
    pool: SqlitePool,
    pub users: UserRepository,
    pub chats: ChatRepository,
    pub messages: MessageRepository,
}

impl ChatRepositories {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            chats: ChatRepository::new(pool.clone()),
            messages: MessageRepository::new(pool.clone()),
            pool,
        }
    }

    /// Get a reference to the underlying pool (for multi-row transactions)
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
