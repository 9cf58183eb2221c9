//! Notifier configuration.

use std::env;

use thiserror::Error;

use crate::entry::{default_entries, ScheduleEntry};

/// Configuration errors, reported upward at startup and never retried.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required setting is missing.
    #[error("{0} not set")]
    Missing(&'static str),

    /// A schedule time could not be parsed or is out of range.
    #[error("invalid schedule time: {0}")]
    InvalidTime(String),
}

/// Configuration for [`crate::DailyScheduler`].
#[derive(Debug, Clone)]
pub struct NotifierConfig {
    /// Location to fetch weather for.
    pub location: String,

    /// Display name used in greetings.
    pub user_name: String,

    /// Daily fire times.
    pub entries: Vec<ScheduleEntry>,
}

impl NotifierConfig {
    /// Create a config with the stock three-times-daily schedule.
    pub fn new(location: impl Into<String>, user_name: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            user_name: user_name.into(),
            entries: default_entries(),
        }
    }

    /// Replace the schedule.
    pub fn with_entries(mut self, entries: Vec<ScheduleEntry>) -> Self {
        self.entries = entries;
        self
    }

    /// Create configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `COMPANION_LOCATION` - Location to fetch weather for
    /// - `COMPANION_NAME` - Display name used in greetings
    ///
    /// Optional environment variables:
    /// - `COMPANION_NOTIFY_TIMES` - Comma-separated `HH:MM` list
    ///   (default: 08:00,14:00,20:00)
    pub fn from_env() -> Result<Self, ConfigError> {
        let location = env::var("COMPANION_LOCATION")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("COMPANION_LOCATION"))?;

        let user_name = env::var("COMPANION_NAME")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("COMPANION_NAME"))?;

        let entries = match env::var("COMPANION_NOTIFY_TIMES") {
            Ok(raw) => raw
                .split(',')
                .map(|part| ScheduleEntry::parse(part.trim()))
                .collect::<Result<Vec<_>, _>>()?,
            Err(_) => default_entries(),
        };

        Ok(Self {
            location,
            user_name,
            entries,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_default_schedule() {
        let config = NotifierConfig::new("London", "Sam");
        assert_eq!(config.location, "London");
        assert_eq!(config.user_name, "Sam");
        assert_eq!(config.entries.len(), 3);
    }

    #[test]
    fn test_with_entries() {
        let entry = ScheduleEntry::new(7, 15).unwrap();
        let config = NotifierConfig::new("London", "Sam").with_entries(vec![entry]);
        assert_eq!(config.entries, vec![entry]);
    }

    // Environment-based tests are combined into a single test to avoid
    // race conditions when tests run in parallel (env vars are process-global).
    #[test]
    fn test_from_env_scenarios() {
        use std::sync::Mutex;
        static ENV_LOCK: Mutex<()> = Mutex::new(());
        let _guard = ENV_LOCK.lock().unwrap();

        fn clear_vars() {
            std::env::remove_var("COMPANION_LOCATION");
            std::env::remove_var("COMPANION_NAME");
            std::env::remove_var("COMPANION_NOTIFY_TIMES");
        }

        // Missing location should error.
        clear_vars();
        assert!(matches!(
            NotifierConfig::from_env(),
            Err(ConfigError::Missing("COMPANION_LOCATION"))
        ));

        // Missing name should error.
        clear_vars();
        std::env::set_var("COMPANION_LOCATION", "London");
        assert!(matches!(
            NotifierConfig::from_env(),
            Err(ConfigError::Missing("COMPANION_NAME"))
        ));

        // Both set, default schedule.
        clear_vars();
        std::env::set_var("COMPANION_LOCATION", "London");
        std::env::set_var("COMPANION_NAME", "Sam");
        let config = NotifierConfig::from_env().unwrap();
        assert_eq!(config.entries.len(), 3);

        // Custom schedule.
        std::env::set_var("COMPANION_NOTIFY_TIMES", "07:30, 19:00");
        let config = NotifierConfig::from_env().unwrap();
        assert_eq!(config.entries.len(), 2);
        assert_eq!(config.entries[0].hour(), 7);
        assert_eq!(config.entries[1].hour(), 19);

        // Malformed schedule errors.
        std::env::set_var("COMPANION_NOTIFY_TIMES", "late");
        assert!(matches!(
            NotifierConfig::from_env(),
            Err(ConfigError::InvalidTime(_))
        ));

        clear_vars();
    }
}
