//! Route definitions for the Chat domain API
//!
//! Paths keep their trailing slashes to match the front-end contract.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{chats, messages, users};
use super::state::ChatState;

/// Create user routes
fn user_routes() -> Router<ChatState> {
    Router::new()
        .route("/users/me", get(users::get_my_user))
        .route("/users/{user_id}/chats/", get(chats::list_user_chats))
}

/// Create chat routes
fn chat_routes() -> Router<ChatState> {
    Router::new()
        .route("/chats/", post(chats::start_chat))
        .route(
            "/chats/{chat_id}/messages/",
            get(messages::list_chat_messages),
        )
}

/// Create message routes
fn message_routes() -> Router<ChatState> {
    Router::new().route("/messages/", post(messages::send_message))
}

/// Create all Chat domain API routes
pub fn routes() -> Router<ChatState> {
    Router::new()
        .merge(user_routes())
        .merge(chat_routes())
        .merge(message_routes())
}
