//! WeatherProvider trait and the OpenWeatherMap implementation.

use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::WeatherConfig;
use crate::error::WeatherError;
use crate::types::WeatherObservation;

/// A source of weather observations.
///
/// Object-safe so the notifier can hold `Arc<dyn WeatherProvider>` or a
/// concrete client interchangeably.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Fetch a fresh observation for `location`.
    async fn fetch(&self, location: &str) -> Result<WeatherObservation, WeatherError>;
}

/// OpenWeatherMap current-weather payload, reduced to the fields used.
#[derive(Debug, Deserialize)]
struct ApiPayload {
    name: String,
    sys: ApiSys,
    main: ApiMain,
    weather: Vec<ApiCondition>,
    wind: ApiWind,
}

#[derive(Debug, Deserialize)]
struct ApiSys {
    #[serde(default)]
    country: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct ApiCondition {
    main: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ApiWind {
    speed: f64,
}

/// [`WeatherProvider`] backed by the OpenWeatherMap current-weather API.
///
/// Requests use imperial units so temperatures arrive in Fahrenheit and
/// wind speeds in mph, matching what the advisor rules expect.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    client: Client,
    config: WeatherConfig,
}

impl OpenWeatherClient {
    /// Create a new client with the given configuration.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                WeatherError::Configuration(format!("failed to create HTTP client: {}", e))
            })?;

        Ok(Self { client, config })
    }

    /// Create a client from environment variables.
    ///
    /// See [`WeatherConfig::from_env`] for the variables read.
    pub fn from_env() -> Result<Self, WeatherError> {
        Self::new(WeatherConfig::from_env()?)
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn fetch(&self, location: &str) -> Result<WeatherObservation, WeatherError> {
        debug!(location = location, "fetching current weather");

        let response = self
            .client
            .get(&self.config.api_url)
            .query(&[
                ("q", location),
                ("appid", self.config.api_key.as_str()),
                ("units", "imperial"),
            ])
            .send()
            .await
            .map_err(|source| WeatherError::Network {
                location: location.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(location = location, status = status.as_u16(), "upstream rejected request");
            return Err(WeatherError::UpstreamStatus {
                location: location.to_string(),
                status: status.as_u16(),
            });
        }

        let payload: ApiPayload = response.json().await.map_err(|e| WeatherError::Parse {
            location: location.to_string(),
            detail: e.to_string(),
        })?;

        let condition = payload
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| WeatherError::Parse {
                location: location.to_string(),
                detail: "payload carried no weather conditions".to_string(),
            })?;

        Ok(WeatherObservation {
            location: payload.name,
            country: payload.sys.country.unwrap_or_default(),
            temperature_f: payload.main.temp,
            feels_like_f: payload.main.feels_like,
            condition: condition.main,
            description: condition.description,
            humidity_pct: payload.main.humidity,
            wind_mph: payload.wind.speed,
            observed_at: Utc::now(),
        })
    }
}
