//! Composing classified lines into display text.

use weather_client::WeatherObservation;

use crate::icon::condition_icon;
use crate::rules::classify;

/// Compose the recommendation text for an observation.
///
/// Joins the classified lines with a blank line between them. Output is
/// never empty and is stable for identical inputs and hour-of-day.
pub fn compose(observation: &WeatherObservation, hour: u32, user_name: &str) -> String {
    classify(observation, hour, user_name).join("\n\n")
}

/// Render the full notification body for an observation.
///
/// Header with location and current conditions, then the recommendation
/// block produced by [`compose`].
pub fn format_alert(observation: &WeatherObservation, recommendations: &str) -> String {
    format!(
        "🌤️ Weather for {location}, {country}\n\
         \n\
         🌡️ {temp:.0}°F (feels like {feels_like:.0}°F)\n\
         {icon} {description}\n\
         💧 Humidity: {humidity}%\n\
         💨 Wind: {wind:.0} mph\n\
         \n\
         {recommendations}",
        location = observation.location,
        country = observation.country,
        temp = observation.temperature_f,
        feels_like = observation.feels_like_f,
        icon = condition_icon(&observation.condition),
        description = observation.description,
        humidity = observation.humidity_pct,
        wind = observation.wind_mph,
        recommendations = recommendations,
    )
}
