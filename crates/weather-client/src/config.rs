//! Configuration for the OpenWeatherMap client.

use std::env;
use std::time::Duration;

use crate::error::WeatherError;

/// Default current-weather endpoint.
pub const DEFAULT_API_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Default upstream request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Configuration for [`crate::OpenWeatherClient`].
#[derive(Debug, Clone)]
pub struct WeatherConfig {
    /// Current-weather endpoint URL.
    pub api_url: String,

    /// API key for the upstream service.
    pub api_key: String,

    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: String::new(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl WeatherConfig {
    /// Create configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `OPENWEATHER_API_KEY` - API key for authentication
    ///
    /// Optional environment variables:
    /// - `OPENWEATHER_API_URL` - Endpoint URL (default: OpenWeatherMap current weather)
    /// - `OPENWEATHER_TIMEOUT_SECS` - Request timeout in seconds (default: 5)
    pub fn from_env() -> Result<Self, WeatherError> {
        let api_key = env::var("OPENWEATHER_API_KEY")
            .map_err(|_| WeatherError::Configuration("OPENWEATHER_API_KEY not set".to_string()))?;

        let api_url =
            env::var("OPENWEATHER_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let timeout_secs = env::var("OPENWEATHER_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(Self {
            api_url,
            api_key,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Create a new config builder.
    pub fn builder() -> WeatherConfigBuilder {
        WeatherConfigBuilder::default()
    }
}

/// Builder for WeatherConfig.
#[derive(Debug, Default)]
pub struct WeatherConfigBuilder {
    config: WeatherConfig,
}

impl WeatherConfigBuilder {
    /// Set the API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = key.into();
        self
    }

    /// Set the endpoint URL.
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.config.api_url = url.into();
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> WeatherConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WeatherConfig::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert!(config.api_key.is_empty());
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_builder() {
        let config = WeatherConfig::builder()
            .api_key("k")
            .api_url("http://localhost:8080/weather")
            .timeout(Duration::from_secs(2))
            .build();

        assert_eq!(config.api_key, "k");
        assert_eq!(config.api_url, "http://localhost:8080/weather");
        assert_eq!(config.timeout, Duration::from_secs(2));
    }
}
