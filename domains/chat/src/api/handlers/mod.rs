//! Request handlers for the Chat domain API

pub mod chats;
pub mod messages;
pub mod users;
