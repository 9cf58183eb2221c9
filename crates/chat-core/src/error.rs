//! Error types for chat backend operations.

use thiserror::Error;

/// Errors that can occur when talking to a chat backend.
///
/// None of these escape the conversation session; every variant is
/// converted into a fallback reply.
#[derive(Debug, Error)]
pub enum ChatBackendError {
    /// The request did not complete within the configured timeout.
    #[error("chat backend timed out")]
    Timeout,

    /// The request failed at the transport level.
    #[error("chat backend unreachable: {0}")]
    Network(String),

    /// The backend answered, but the payload could not be used.
    #[error("malformed backend response: {0}")]
    MalformedResponse(String),
}
