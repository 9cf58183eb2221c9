//! RemoteChatBackend implementation.

use chat_core::{
    async_trait, BackendReply, ChatBackend, ChatBackendError, ChatMessage,
};
use reqwest::Client;
use tracing::{debug, warn};

use crate::api_types::{ChatApiResponse, ChatRequest, WireMessage};
use crate::config::RemoteChatConfig;

/// A [`ChatBackend`] that talks to the companion backend over HTTP.
///
/// The endpoint can be reconfigured between requests; in-flight
/// requests keep the endpoint they were started with.
#[derive(Debug, Clone)]
pub struct RemoteChatBackend {
    client: Client,
    config: RemoteChatConfig,
}

impl RemoteChatBackend {
    /// Create a new backend client with the given configuration.
    pub fn new(config: RemoteChatConfig) -> Result<Self, ChatBackendError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                ChatBackendError::Network(format!("failed to create HTTP client: {}", e))
            })?;

        Ok(Self { client, config })
    }

    /// Create a backend client from environment variables.
    ///
    /// See [`RemoteChatConfig::from_env`] for the variables read.
    pub fn from_env() -> Result<Self, ChatBackendError> {
        Self::new(RemoteChatConfig::from_env())
    }

    /// Get the configured endpoint.
    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    /// Point subsequent requests at a different endpoint.
    pub fn set_endpoint(&mut self, endpoint: impl Into<String>) {
        self.config.endpoint = endpoint.into();
    }
}

#[async_trait]
impl ChatBackend for RemoteChatBackend {
    async fn send_chat(
        &self,
        message: &str,
        context: &[ChatMessage],
    ) -> Result<BackendReply, ChatBackendError> {
        let url = format!("{}/chat", self.config.endpoint);
        let request = ChatRequest {
            message,
            history: context.iter().map(WireMessage::from).collect(),
        };

        debug!(url = %url, history_len = request.history.len(), "sending chat request");

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ChatBackendError::Timeout
                } else {
                    ChatBackendError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ChatBackendError::Network(format!(
                "backend returned status {}",
                status.as_u16()
            )));
        }

        let payload: ChatApiResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                ChatBackendError::Timeout
            } else {
                ChatBackendError::MalformedResponse(e.to_string())
            }
        })?;

        let confidence = payload.confidence;
        let text = payload.into_reply_text().ok_or_else(|| {
            warn!("backend payload carried no reply text");
            ChatBackendError::MalformedResponse("no reply text in payload".to_string())
        })?;

        Ok(BackendReply { text, confidence })
    }

    fn name(&self) -> &str {
        "RemoteChatBackend"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_name() {
        let backend = RemoteChatBackend::new(RemoteChatConfig::default()).unwrap();
        assert_eq!(backend.name(), "RemoteChatBackend");
    }

    #[test]
    fn test_set_endpoint() {
        let mut backend = RemoteChatBackend::new(RemoteChatConfig::default()).unwrap();
        backend.set_endpoint("http://other:9000");
        assert_eq!(backend.endpoint(), "http://other:9000");
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_network_error() {
        // Port 9 (discard) with nothing listening; connection is refused.
        let config = RemoteChatConfig::builder()
            .endpoint("http://127.0.0.1:9")
            .timeout(std::time::Duration::from_secs(1))
            .build();
        let backend = RemoteChatBackend::new(config).unwrap();

        let err = backend.send_chat("hi", &[]).await.unwrap_err();
        assert!(matches!(
            err,
            ChatBackendError::Network(_) | ChatBackendError::Timeout
        ));
    }
}
