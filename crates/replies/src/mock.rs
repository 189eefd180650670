//! Mock reply service
//!
//! Returns a fixed string so tests can assert on exact message bodies.

use crate::ReplyService;

/// Deterministic reply service for testing.
#[derive(Debug, Clone)]
pub struct MockReplyService {
    reply: String,
}

impl MockReplyService {
    /// Create a mock that always answers with `reply`.
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }
}

impl Default for MockReplyService {
    fn default() -> Self {
        Self::new("mock reply")
    }
}

impl ReplyService for MockReplyService {
    fn reply(&self) -> String {
        self.reply.clone()
    }
}
