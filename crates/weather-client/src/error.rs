//! Error types for weather fetches.

use thiserror::Error;

/// Errors that can occur fetching a weather observation.
///
/// Every variant carries the location the fetch was for, so callers
/// can report which lookup failed.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The HTTP request failed at the transport level.
    #[error("weather request for {location} failed: {source}")]
    Network {
        location: String,
        #[source]
        source: reqwest::Error,
    },

    /// The upstream answered with a non-success status.
    #[error("weather service returned status {status} for {location}")]
    UpstreamStatus { location: String, status: u16 },

    /// The upstream payload could not be parsed into an observation.
    #[error("weather payload for {location} could not be parsed: {detail}")]
    Parse { location: String, detail: String },

    /// The client itself could not be constructed.
    #[error("invalid weather client configuration: {0}")]
    Configuration(String),
}
