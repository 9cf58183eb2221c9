//! Drift-free daily weather notifications.
//!
//! [`DailyScheduler`] owns a set of recurring wall-clock fire times
//! (default 08:00, 14:00, 20:00). Each entry runs as its own task:
//! sleep until the next occurrence, fetch a fresh observation, compose
//! a recommendation, hand the notification to the
//! [`NotificationSink`], then re-arm for the next day from the current
//! wall clock. A failed fetch skips one notification and never cancels
//! future ones. `stop()` cancels every pending timer.
//!
//! The on-demand path lives in [`alert_now`], which propagates fetch
//! errors to the caller instead of swallowing them.

mod config;
mod entry;
mod scheduler;
mod sink;

pub use config::{ConfigError, NotifierConfig};
pub use entry::{default_entries, ScheduleEntry};
pub use scheduler::{alert_now, DailyScheduler};
pub use sink::{Notification, NotificationSink};

// Re-export async_trait for sink implementors
pub use async_trait::async_trait;
