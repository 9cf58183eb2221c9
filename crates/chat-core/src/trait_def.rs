//! The ChatBackend trait definition.

use async_trait::async_trait;

use crate::error::ChatBackendError;
use crate::message::ChatMessage;

/// The raw reply a backend produced, before mood tagging.
#[derive(Debug, Clone)]
pub struct BackendReply {
    /// Reply text.
    pub text: String,
    /// Backend-reported confidence, if the payload carried one.
    pub confidence: Option<f32>,
}

impl BackendReply {
    /// Create a reply with no confidence value.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            confidence: None,
        }
    }

    /// Create a reply with a backend-reported confidence.
    pub fn with_confidence(text: impl Into<String>, confidence: f32) -> Self {
        Self {
            text: text.into(),
            confidence: Some(confidence),
        }
    }
}

/// A trait for producing chat replies from a user message.
///
/// Implementations range from an HTTP client against the remote
/// companion backend to in-process test doubles. The trait is
/// object-safe and can be used with `Box<dyn ChatBackend>`.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Produce a reply for `message`.
    ///
    /// `context` carries the most recent history entries (at most a
    /// handful) so the backend can answer in context. Exactly one
    /// attempt is made per call; retrying is the caller's decision.
    async fn send_chat(
        &self,
        message: &str,
        context: &[ChatMessage],
    ) -> Result<BackendReply, ChatBackendError>;

    /// Get a human-readable name for this backend implementation.
    fn name(&self) -> &str;
}
