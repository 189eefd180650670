//! Chat API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use parrot_common::{Result, ValidatedJson};

use crate::api::state::ChatState;
use crate::domain::entities::Chat;

/// Request for starting a chat
#[derive(Debug, Deserialize, Validate)]
pub struct StartChatRequest {
    /// Owner of the new chat
    #[validate(range(min = 1))]
    pub user_id: i64,
}

/// Chat response DTO
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub chat_id: i64,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Chat> for ChatResponse {
    fn from(c: Chat) -> Self {
        Self {
            chat_id: c.chat_id,
            user_id: c.user_id,
            created_at: c.created_at,
        }
    }
}

/// Start a new chat for a user
pub async fn start_chat(
    State(state): State<ChatState>,
    ValidatedJson(req): ValidatedJson<StartChatRequest>,
) -> Result<(StatusCode, Json<ChatResponse>)> {
    let chat = state.service.start_chat(req.user_id).await?;
    Ok((StatusCode::CREATED, Json(chat.into())))
}

/// List chats for a user, oldest first
pub async fn list_user_chats(
    State(state): State<ChatState>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<ChatResponse>>> {
    let chats = state.service.list_chats(user_id).await?;
    let responses: Vec<ChatResponse> = chats.into_iter().map(Into::into).collect();
    Ok(Json(responses))
}
