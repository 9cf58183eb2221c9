//! Schedule entries and next-fire arithmetic.

use std::time::Duration;

use chrono::{NaiveDateTime, NaiveTime, Timelike};

use crate::config::ConfigError;

/// One recurring daily fire time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleEntry {
    time: NaiveTime,
}

impl ScheduleEntry {
    /// Create an entry for `hour:minute` (24h clock).
    pub fn new(hour: u32, minute: u32) -> Result<Self, ConfigError> {
        let time = NaiveTime::from_hms_opt(hour, minute, 0)
            .ok_or_else(|| ConfigError::InvalidTime(format!("{:02}:{:02}", hour, minute)))?;
        Ok(Self { time })
    }

    /// Parse an entry from `"HH:MM"`.
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        let (hour, minute) = value
            .split_once(':')
            .ok_or_else(|| ConfigError::InvalidTime(value.to_string()))?;
        let hour: u32 = hour
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidTime(value.to_string()))?;
        let minute: u32 = minute
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidTime(value.to_string()))?;
        Self::new(hour, minute)
    }

    pub fn hour(&self) -> u32 {
        self.time.hour()
    }

    pub fn minute(&self) -> u32 {
        self.time.minute()
    }

    /// The next occurrence of this entry strictly after `now`.
    ///
    /// Today's occurrence if it is still ahead, otherwise the same time
    /// tomorrow. Recomputing from the current wall clock on every rearm
    /// is what keeps the schedule drift-free; timer granularity errors
    /// never accumulate.
    pub fn next_fire_from(&self, now: NaiveDateTime) -> NaiveDateTime {
        let today = now.date().and_time(self.time);
        if today > now {
            today
        } else {
            today + chrono::Duration::days(1)
        }
    }

    /// Time to sleep from `now` until the next fire.
    pub fn delay_from(&self, now: NaiveDateTime) -> Duration {
        (self.next_fire_from(now) - now).to_std().unwrap_or_default()
    }
}

impl std::fmt::Display for ScheduleEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// The stock schedule: morning, afternoon, evening.
pub fn default_entries() -> Vec<ScheduleEntry> {
    [(8, 0), (14, 0), (20, 0)]
        .iter()
        .map(|&(h, m)| ScheduleEntry { time: NaiveTime::from_hms_opt(h, m, 0).unwrap_or_default() })
        .collect()
}
