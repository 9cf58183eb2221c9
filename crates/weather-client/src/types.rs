//! Weather observation type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single structured weather reading for a location and time.
///
/// Immutable once constructed; produced fresh on every fetch. The
/// `condition` is the upstream free-form category ("Rain", "Clear",
/// "Clouds") and `description` its longer lowercase form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherObservation {
    pub location: String,
    pub country: String,
    pub temperature_f: f64,
    pub feels_like_f: f64,
    pub condition: String,
    pub description: String,
    pub humidity_pct: u8,
    pub wind_mph: f64,
    pub observed_at: DateTime<Utc>,
}
