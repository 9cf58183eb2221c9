//! Classification rules.

use weather_client::WeatherObservation;

/// One condition-keyword category.
///
/// Categories are mutually exclusive: the first whose keyword appears
/// in the lowercased condition contributes its lines, the rest are
/// skipped even if their keywords also appear.
struct ConditionRule {
    keywords: &'static [&'static str],
    lines: &'static [&'static str],
}

/// Condition categories in priority order.
const CONDITION_RULES: &[ConditionRule] = &[
    ConditionRule {
        keywords: &["rain", "drizzle"],
        lines: &[
            "Don't forget to bring an umbrella! ☂️",
            "Don't forget to hang off the clothes from outside! 👕",
            "Roads might be slippery, drive carefully! 🚗",
        ],
    },
    ConditionRule {
        keywords: &["snow"],
        lines: &[
            "It's snowing! Bundle up warm! ❄️",
            "Wear waterproof boots today! 🥾",
            "Don't forget your gloves and scarf! 🧤",
        ],
    },
    ConditionRule {
        keywords: &["clear", "sunny"],
        lines: &[
            "Beautiful sunny day! Don't forget sunscreen! ☀️",
            "Great day to dry your clothes outside! 👕",
            "Stay hydrated in the sun! 💧",
        ],
    },
    ConditionRule {
        keywords: &["cloud"],
        lines: &["Cloudy but nice! Perfect for outdoor activities! ☁️"],
    },
    ConditionRule {
        keywords: &["storm", "thunder"],
        lines: &[
            "Severe weather alert! Stay indoors if possible and avoid travel! ⚡",
            "Keep your phone charged in case of emergency! 📱",
        ],
    },
    ConditionRule {
        keywords: &["fog", "mist"],
        lines: &["Low visibility out there. Drive slowly and use headlights! 🌫️"],
    },
];

const FREEZING_MAX_F: f64 = 32.0;
const CHILLY_MAX_F: f64 = 50.0;
const HOT_MIN_F: f64 = 85.0;

const FREEZING_LINE: &str = "It's freezing! Wear warm layers! 🧥";
const CHILLY_LINE: &str = "Chilly weather! Bring a jacket! 🧥";
const HOT_LINE: &str = "It's hot! Stay hydrated and wear light clothing! 👕";

const WIND_CAUTION_MPH: f64 = 20.0;
const WIND_LINE: &str = "High winds today! Secure loose objects outside! 💨";

/// Shown when no condition, temperature, or wind rule fired.
const GENERIC_LINE: &str = "Have a great day! Stay safe out there! 🌤️";

/// Time-of-day salutation.
pub fn greeting(hour: u32, user_name: &str) -> String {
    if hour < 12 {
        format!("Good morning, {}! ☀️", user_name)
    } else if hour < 18 {
        format!("Good afternoon, {}! 🌤️", user_name)
    } else {
        format!("Good evening, {}! 🌙", user_name)
    }
}

/// Temperature band line, if the temperature falls in a band.
///
/// Bands are non-overlapping: below 32 is freezing, 32 to 50 is
/// chilly, above 85 is hot, anything between 50 and 85 gets no line.
fn temperature_line(temp_f: f64) -> Option<&'static str> {
    if temp_f < FREEZING_MAX_F {
        Some(FREEZING_LINE)
    } else if temp_f <= CHILLY_MAX_F {
        Some(CHILLY_LINE)
    } else if temp_f > HOT_MIN_F {
        Some(HOT_LINE)
    } else {
        None
    }
}

/// Map an observation to its ordered recommendation lines.
///
/// Output order is greeting first, condition lines, temperature line,
/// wind line. The set is deduplicated and never empty; when nothing
/// beyond the greeting fired, a generic line is appended so a
/// notification always says something useful.
pub fn classify(observation: &WeatherObservation, hour: u32, user_name: &str) -> Vec<String> {
    let mut lines = vec![greeting(hour, user_name)];
    let condition = observation.condition.to_lowercase();

    if let Some(rule) = CONDITION_RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|k| condition.contains(k)))
    {
        lines.extend(rule.lines.iter().map(|line| line.to_string()));
    }

    if let Some(line) = temperature_line(observation.temperature_f) {
        lines.push(line.to_string());
    }

    if observation.wind_mph > WIND_CAUTION_MPH {
        lines.push(WIND_LINE.to_string());
    }

    if lines.len() == 1 {
        lines.push(GENERIC_LINE.to_string());
    }

    dedup_in_order(lines)
}

/// Drop repeated lines, keeping first occurrences in order.
fn dedup_in_order(lines: Vec<String>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::with_capacity(lines.len());
    for line in lines {
        if !seen.contains(&line) {
            seen.push(line);
        }
    }
    seen
}
