//! Recommendation rules for weather observations.
//!
//! Pure functions mapping a [`weather_client::WeatherObservation`] to
//! display text: a personalized greeting, condition/temperature/wind
//! reminders, a composed notification body, and a coarse icon for the
//! condition. Everything here is deterministic given the observation
//! and the local hour of day, which keeps it directly testable.

mod compose;
mod icon;
mod rules;

pub use compose::{compose, format_alert};
pub use icon::condition_icon;
pub use rules::{classify, greeting};
