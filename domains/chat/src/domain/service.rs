//! Conversation service
//!
//! Orchestrates the transactional operations of the Chat domain against the
//! store. The service holds no cross-request state: every operation re-reads
//! what it needs inside its own transaction boundary, and a transaction
//! dropped before commit rolls back, so a failed operation leaves zero rows
//! behind.

use std::sync::Arc;

use chrono::Utc;

use parrot_common::{Error, Result};
use parrot_replies::ReplyService;

use crate::domain::entities::{Chat, Message, MessagePair, Sender, User};
use crate::repository::{transactions, ChatRepositories};

/// Conversation service for the Chat domain.
///
/// Constructed with an explicit store handle and an injectable reply
/// strategy; tests substitute a deterministic `ReplyService`.
#[derive(Clone)]
pub struct ChatService {
    repos: ChatRepositories,
    replies: Arc<dyn ReplyService>,
    legacy_history_404: bool,
}

impl ChatService {
    pub fn new(repos: ChatRepositories, replies: Arc<dyn ReplyService>) -> Self {
        Self {
            repos,
            replies,
            legacy_history_404: false,
        }
    }

    /// Restore the pre-redesign history contract: listing messages for a
    /// chat with no messages returns `NotFound`, and the chat row itself is
    /// never consulted.
    pub fn with_legacy_history_404(mut self, enabled: bool) -> Self {
        self.legacy_history_404 = enabled;
        self
    }

    /// Return the first user in the store — the system models exactly one
    /// human user per deployment.
    pub async fn primary_user(&self) -> Result<User> {
        self.repos
            .users
            .find_first()
            .await?
            .ok_or_else(|| Error::NotFound("User not found".to_string()))
    }

    /// Atomically create a new chat owned by `user_id` with a
    /// server-assigned creation timestamp.
    pub async fn start_chat(&self, user_id: i64) -> Result<Chat> {
        let mut tx = self.repos.pool().begin().await?;

        if transactions::find_user_tx(&mut tx, user_id).await?.is_none() {
            return Err(Error::NotFound("User not found".to_string()));
        }

        let chat = transactions::create_chat_tx(&mut tx, user_id, Utc::now()).await?;
        tx.commit().await?;

        tracing::debug!(chat_id = chat.chat_id, user_id, "chat started");
        Ok(chat)
    }

    /// Persist a user message and its synthesized bot reply as one atomic
    /// transaction. A concurrent reader never observes the user message
    /// without its paired reply once this returns success.
    pub async fn send_message(
        &self,
        chat_id: i64,
        sender: Sender,
        text: &str,
    ) -> Result<MessagePair> {
        Message::validate_text(text)?;

        let mut tx = self.repos.pool().begin().await?;

        if transactions::find_chat_tx(&mut tx, chat_id).await?.is_none() {
            return Err(Error::NotFound("Chat not found".to_string()));
        }

        let user_message =
            transactions::create_message_tx(&mut tx, chat_id, sender, text, Utc::now()).await?;

        // Reply selection is pure and never suspends; the store-bound steps
        // are the only suspension points in this operation.
        let reply = self.replies.reply();
        let bot_message =
            transactions::create_message_tx(&mut tx, chat_id, Sender::Bot, &reply, Utc::now())
                .await?;

        tx.commit().await?;

        tracing::debug!(
            chat_id,
            user_message_id = user_message.message_id,
            bot_message_id = bot_message.message_id,
            "message pair persisted"
        );

        Ok(MessagePair {
            user_message,
            bot_message,
        })
    }

    /// List all messages for a chat ordered by timestamp ascending (ties
    /// broken by insertion id).
    ///
    /// Default contract: `NotFound` only when the chat itself is absent; a
    /// chat with no messages yet yields an empty sequence. The legacy flag
    /// restores the original conflated behavior (zero messages ⇒
    /// `NotFound`).
    pub async fn list_messages(&self, chat_id: i64) -> Result<Vec<Message>> {
        if self.legacy_history_404 {
            let messages = self.repos.messages.list_by_chat(chat_id).await?;
            if messages.is_empty() {
                return Err(Error::NotFound(
                    "No messages found for this chat".to_string(),
                ));
            }
            return Ok(messages);
        }

        if self.repos.chats.find(chat_id).await?.is_none() {
            return Err(Error::NotFound("Chat not found".to_string()));
        }
        self.repos.messages.list_by_chat(chat_id).await
    }

    /// List all chats for a user ordered by creation timestamp ascending.
    /// A user with no chats yields an empty sequence, not an error.
    pub async fn list_chats(&self, user_id: i64) -> Result<Vec<Chat>> {
        self.repos.chats.list_by_user(user_id).await
    }
}
