//! Canned reply service
//!
//! Selects one member of a fixed reply set uniformly at random. Deliberately
//! unseeded: repeated calls may yield any member with equal probability.

use rand::seq::SliceRandom;

use crate::ReplyService;

/// The built-in reply set.
pub const DEFAULT_REPLIES: [&str; 5] = [
    "Hello!",
    "How can I help?",
    "That's interesting!",
    "Tell me more!",
    "I'm here to chat!",
];

/// Production reply service backed by a closed set of canned strings.
#[derive(Debug, Clone)]
pub struct CannedReplyService {
    replies: Vec<String>,
}

impl CannedReplyService {
    /// Create a service over the built-in reply set.
    pub fn new() -> Self {
        Self {
            replies: DEFAULT_REPLIES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Create a service over a custom reply set. An empty set falls back to
    /// the built-ins so `reply` always has a member to draw.
    pub fn with_replies(replies: Vec<String>) -> Self {
        if replies.is_empty() {
            tracing::warn!("empty canned reply set supplied, using built-in replies");
            return Self::new();
        }
        Self { replies }
    }

    /// The reply set this service draws from.
    pub fn replies(&self) -> &[String] {
        &self.replies
    }
}

impl Default for CannedReplyService {
    fn default() -> Self {
        Self::new()
    }
}

impl ReplyService for CannedReplyService {
    fn reply(&self) -> String {
        // Constructors guarantee a non-empty set
        self.replies
            .choose(&mut rand::thread_rng())
            .cloned()
            .unwrap_or_else(|| DEFAULT_REPLIES[0].to_string())
    }
}
