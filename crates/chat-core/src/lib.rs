//! Core traits and types for the weather companion chat layer.
//!
//! This crate provides the shared interface between the conversation
//! session and the chat backends that produce replies. It defines:
//!
//! - [`ChatBackend`] - The trait a remote (or test) backend implements
//! - [`ChatMessage`] / [`Role`] - Conversation history entries
//! - [`ChatReply`] / [`Mood`] - Tagged replies shown to the user
//! - [`ChatBackendError`] - Error types for backend failures
//! - [`detect_mood`] - Coarse sentiment tagging for reply text
//!
//! # Example
//!
//! ```rust
//! use chat_core::{BackendReply, ChatBackend, ChatBackendError, ChatMessage};
//! use async_trait::async_trait;
//!
//! struct CannedBackend;
//!
//! #[async_trait]
//! impl ChatBackend for CannedBackend {
//!     async fn send_chat(
//!         &self,
//!         _message: &str,
//!         _context: &[ChatMessage],
//!     ) -> Result<BackendReply, ChatBackendError> {
//!         Ok(BackendReply::new("Hello!"))
//!     }
//!
//!     fn name(&self) -> &str {
//!         "CannedBackend"
//!     }
//! }
//! ```

mod error;
mod message;
mod mood;
mod trait_def;

pub use error::ChatBackendError;
pub use message::{ChatMessage, ChatReply, Role};
pub use mood::{detect_mood, Mood};
pub use trait_def::{BackendReply, ChatBackend};

// Re-export async_trait for convenience
pub use async_trait::async_trait;
