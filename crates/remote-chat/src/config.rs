//! Configuration for the remote chat backend client.

use std::env;
use std::time::Duration;

/// Default backend endpoint.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for [`crate::RemoteChatBackend`].
#[derive(Debug, Clone)]
pub struct RemoteChatConfig {
    /// Base URL of the chat backend (no trailing slash).
    pub endpoint: String,

    /// Per-request timeout. A timeout is treated like any other
    /// backend failure by the session.
    pub timeout: Duration,
}

impl Default for RemoteChatConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl RemoteChatConfig {
    /// Create configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CHAT_BACKEND_URL` - Backend base URL (default: http://localhost:5000)
    /// - `CHAT_TIMEOUT_SECS` - Request timeout in seconds (default: 10)
    pub fn from_env() -> Self {
        let endpoint =
            env::var("CHAT_BACKEND_URL").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());

        let timeout_secs = env::var("CHAT_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            endpoint,
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// Create a new config builder.
    pub fn builder() -> RemoteChatConfigBuilder {
        RemoteChatConfigBuilder::default()
    }
}

/// Builder for RemoteChatConfig.
#[derive(Debug, Default)]
pub struct RemoteChatConfigBuilder {
    config: RemoteChatConfig,
}

impl RemoteChatConfigBuilder {
    /// Set the backend endpoint.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config.endpoint = endpoint.into();
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> RemoteChatConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RemoteChatConfig::default();
        assert_eq!(config.endpoint, "http://localhost:5000");
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_builder() {
        let config = RemoteChatConfig::builder()
            .endpoint("http://chat.example.com")
            .timeout(Duration::from_secs(3))
            .build();

        assert_eq!(config.endpoint, "http://chat.example.com");
        assert_eq!(config.timeout, Duration::from_secs(3));
    }
}
