//! Conversation session for the weather companion.
//!
//! [`ConversationSession`] owns a bounded message history and
//! coordinates the reply path: one attempt against the configured
//! [`chat_core::ChatBackend`], then the local fallback responder on any
//! failure. The caller always receives a reply; backend errors never
//! escape this crate.

mod session;

pub use session::{ConversationSession, CONTEXT_WINDOW, DEFAULT_MAX_HISTORY};
