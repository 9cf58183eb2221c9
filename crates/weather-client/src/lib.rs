//! Weather data access for the companion.
//!
//! Defines the [`WeatherProvider`] trait consumed by the notifier and
//! the advisor, the [`WeatherObservation`] it yields, and
//! [`OpenWeatherClient`], an implementation against the OpenWeatherMap
//! current-weather endpoint (imperial units).
//!
//! Observations are produced fresh on every fetch and never cached.

mod config;
mod error;
mod provider;
mod types;

pub use config::WeatherConfig;
pub use error::WeatherError;
pub use provider::{OpenWeatherClient, WeatherProvider};
pub use types::WeatherObservation;

// Re-export async_trait for implementors
pub use async_trait::async_trait;
