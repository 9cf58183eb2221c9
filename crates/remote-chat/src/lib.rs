//! HTTP client for the remote companion chat backend.
//!
//! [`RemoteChatBackend`] implements [`chat_core::ChatBackend`] against a
//! backend exposing `POST /chat`. One attempt is made per call under a
//! bounded timeout; every failure mode maps onto
//! [`chat_core::ChatBackendError`] so the conversation session can fall
//! back to canned replies.

mod api_types;
mod backend;
mod config;

pub use backend::RemoteChatBackend;
pub use config::RemoteChatConfig;
