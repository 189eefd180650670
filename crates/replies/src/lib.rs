//! Parrot reply service
//!
//! Synthesizes the bot side of a message exchange. The production
//! implementation draws uniformly at random from a fixed set of canned
//! strings; a deterministic mock is provided for tests. The service is a
//! pure selection function: stateless, infallible, no I/O, and it never
//! consults conversation history.

pub mod canned;
pub mod mock;

pub use canned::CannedReplyService;
pub use mock::MockReplyService;

/// Strategy for synthesizing a bot reply to an incoming user message.
///
/// Implementations must be cheap and non-blocking; `reply` is called inside
/// the message-exchange transaction.
pub trait ReplyService: Send + Sync {
    /// Produce one reply string.
    fn reply(&self) -> String;
}
