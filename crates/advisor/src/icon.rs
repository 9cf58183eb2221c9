//! Condition to icon mapping.

/// Keyword to icon pairs, checked in order.
const ICONS: &[(&str, &str)] = &[
    ("clear", "☀️"),
    ("sunny", "☀️"),
    ("cloud", "☁️"),
    ("drizzle", "🌦️"),
    ("rain", "🌧️"),
    ("snow", "❄️"),
    ("storm", "⛈️"),
    ("thunder", "⛈️"),
    ("fog", "🌫️"),
    ("mist", "🌫️"),
];

/// Default icon for conditions no keyword matches.
const DEFAULT_ICON: &str = "🌤️";

/// Coarse icon for a free-form condition string.
///
/// Case-insensitive first-match keyword lookup; unknown conditions get
/// a neutral default.
pub fn condition_icon(condition: &str) -> &'static str {
    let lower = condition.to_lowercase();
    ICONS
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|(_, icon)| *icon)
        .unwrap_or(DEFAULT_ICON)
}
