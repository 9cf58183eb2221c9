//! Wire types for the companion chat API.

use chat_core::{ChatMessage, Role};
use serde::{Deserialize, Serialize};

/// A history entry as sent over the wire.
#[derive(Debug, Clone, Serialize)]
pub struct WireMessage {
    pub role: &'static str,
    pub content: String,
}

impl From<&ChatMessage> for WireMessage {
    fn from(msg: &ChatMessage) -> Self {
        Self {
            role: match msg.role {
                Role::User => "user",
                Role::Assistant => "assistant",
            },
            content: msg.content.clone(),
        }
    }
}

/// Request body for `POST /chat`.
#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
    pub history: Vec<WireMessage>,
}

/// Response body from `POST /chat`.
///
/// The backend has answered with either a `response` or a `message`
/// field over its lifetime; accept both.
#[derive(Debug, Deserialize)]
pub struct ChatApiResponse {
    pub response: Option<String>,
    pub message: Option<String>,
    pub confidence: Option<f32>,
}

impl ChatApiResponse {
    /// Extract the reply text, preferring the `response` field.
    pub fn into_reply_text(self) -> Option<String> {
        self.response.or(self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_message_roles() {
        let wire = WireMessage::from(&ChatMessage::user("hi"));
        assert_eq!(wire.role, "user");

        let wire = WireMessage::from(&ChatMessage::assistant("hello"));
        assert_eq!(wire.role, "assistant");
    }

    #[test]
    fn test_response_field_preferred() {
        let payload: ChatApiResponse =
            serde_json::from_str(r#"{"response": "a", "message": "b"}"#).unwrap();
        assert_eq!(payload.into_reply_text().unwrap(), "a");
    }

    #[test]
    fn test_message_field_accepted() {
        let payload: ChatApiResponse =
            serde_json::from_str(r#"{"message": "b", "confidence": 0.5}"#).unwrap();
        assert_eq!(payload.confidence, Some(0.5));
        assert_eq!(payload.into_reply_text().unwrap(), "b");
    }

    #[test]
    fn test_empty_payload_has_no_reply() {
        let payload: ChatApiResponse = serde_json::from_str("{}").unwrap();
        assert!(payload.into_reply_text().is_none());
    }
}
