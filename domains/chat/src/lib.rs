//! Chat domain: users, chat threads, message exchange

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{Chat, Message, MessagePair, Sender, User};
pub use domain::service::ChatService;

// Re-export repository types
pub use repository::{ChatRepositories, ChatRepository, MessageRepository, UserRepository};

// Re-export API types
pub use api::routes;
pub use api::ChatState;
