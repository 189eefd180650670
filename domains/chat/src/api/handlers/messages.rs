//! Message API handlers

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
use crate::domain::entities::{Message, MessagePair, Sender};

/// Request for sending a message.
///
/// `sender` deserializes into the closed `Sender` enumeration, so any tag
/// outside {USER, BOT} is rejected with 400 before the service runs.
#[derive(Debug, Deserialize, Validate)]
pub struct SendMessageRequest {
    #[validate(range(min = 1))]
    pub chat_id: i64,
    pub sender: Sender,
    #[validate(length(min = 1))]
    pub text: String,
}

/// Message response DTO
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message_id: i64,
    pub chat_id: i64,
    pub sender: Sender,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl From<Message> for MessageResponse {
    fn from(m: Message) -> Self {
        Self {
            message_id: m.message_id,
            chat_id: m.chat_id,
            sender: m.sender,
            text: m.text,
            timestamp: m.timestamp,
        }
    }
}

/// Response for send message (includes both halves of the message pair)
#[derive(Debug, Serialize)]
pub struct SendMessageResponse {
    pub user_message: MessageResponse,
    pub bot_message: MessageResponse,
}

impl From<MessagePair> for SendMessageResponse {
    fn from(pair: MessagePair) -> Self {
        Self {
            user_message: pair.user_message.into(),
            bot_message: pair.bot_message.into(),
        }
    }
}

/// Send a message to a chat and receive the synthesized bot reply
pub async fn send_message(
    State(state): State<ChatState>,
    ValidatedJson(req): ValidatedJson<SendMessageRequest>,
) -> Result<(StatusCode, Json<SendMessageResponse>)> {
    let pair = state
        .service
        .send_message(req.chat_id, req.sender, &req.text)
        .await?;
    Ok((StatusCode::CREATED, Json(pair.into())))
}

/// List messages for a chat, oldest first
pub async fn list_chat_messages(
    State(state): State<ChatState>,
    Path(chat_id): Path<i64>,
) -> Result<Json<Vec<MessageResponse>>> {
    let messages = state.service.list_messages(chat_id).await?;
    let responses: Vec<MessageResponse> = messages.into_iter().map(Into::into).collect();
    Ok(Json(responses))
}
