//! Chat domain API state

use crate::domain::service::ChatService;

/// Application state for the Chat domain routers
#[derive(Clone)]
pub struct ChatState {
    pub service: ChatService,
}
