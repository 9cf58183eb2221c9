//! The daily notification scheduler.

use std::sync::Arc;

use chrono::{Local, Timelike};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use weather_client::{WeatherError, WeatherProvider};

use crate::config::NotifierConfig;
use crate::sink::{Notification, NotificationSink};

/// Recurring daily weather notifications.
///
/// Each schedule entry runs as an independent task cycling through
/// arm, sleep, fire, rearm. Entries share no mutable state; stopping
/// aborts every pending timer at once. In-flight fires are not
/// interrupted, but nothing new is scheduled after `stop()`.
pub struct DailyScheduler<P, S> {
    provider: Arc<P>,
    sink: Arc<S>,
    config: NotifierConfig,
    handles: Vec<JoinHandle<()>>,
}

impl<P, S> DailyScheduler<P, S>
where
    P: WeatherProvider + 'static,
    S: NotificationSink + 'static,
{
    /// Create a scheduler; entries stay idle until [`start`](Self::start).
    pub fn new(provider: P, sink: S, config: NotifierConfig) -> Self {
        Self {
            provider: Arc::new(provider),
            sink: Arc::new(sink),
            config,
            handles: Vec::new(),
        }
    }

    /// Arm every schedule entry.
    ///
    /// Calling `start` on a running scheduler stops it first, so a
    /// restart always re-arms from scratch against the current clock.
    pub fn start(&mut self) {
        if self.is_running() {
            self.stop();
        }

        for entry in self.config.entries.clone() {
            let provider = Arc::clone(&self.provider);
            let sink = Arc::clone(&self.sink);
            let location = self.config.location.clone();
            let user_name = self.config.user_name.clone();

            let handle = tokio::spawn(async move {
                loop {
                    // Recompute from the wall clock on every cycle; a
                    // fire at or past the target lands on tomorrow's
                    // occurrence, never in the past.
                    let delay = entry.delay_from(Local::now().naive_local());
                    debug!(entry = %entry, delay_secs = delay.as_secs(), "entry armed");
                    tokio::time::sleep(delay).await;

                    fire(provider.as_ref(), sink.as_ref(), &location, &user_name).await;
                }
            });
            self.handles.push(handle);
        }

        info!(
            location = %self.config.location,
            entries = self.handles.len(),
            "daily weather notifications armed"
        );
    }

    /// Cancel every pending timer.
    pub fn stop(&mut self) {
        for handle in self.handles.drain(..) {
            handle.abort();
        }
        info!("daily weather notifications stopped");
    }

    /// Whether any entry is currently armed.
    pub fn is_running(&self) -> bool {
        !self.handles.is_empty()
    }
}

/// One scheduled fire.
///
/// A provider failure is logged and swallowed here so the entry loop
/// re-arms regardless; a single failed fetch skips one notification
/// and never cancels future ones.
async fn fire<P, S>(provider: &P, sink: &S, location: &str, user_name: &str)
where
    P: WeatherProvider + ?Sized,
    S: NotificationSink + ?Sized,
{
    match alert_now(provider, location, user_name).await {
        Ok(notification) => {
            debug!(location = location, "delivering scheduled weather notification");
            sink.notify(notification).await;
        }
        Err(err) => {
            warn!(
                location = location,
                "weather fetch failed, skipping this notification: {}", err
            );
        }
    }
}

/// Build a weather notification on demand.
///
/// Unlike scheduled fires, errors propagate so the caller can surface
/// them (the "weather now" path).
pub async fn alert_now<P>(
    provider: &P,
    location: &str,
    user_name: &str,
) -> Result<Notification, WeatherError>
where
    P: WeatherProvider + ?Sized,
{
    let observation = provider.fetch(location).await?;

    let hour = Local::now().hour();
    let recommendations = advisor::compose(&observation, hour, user_name);
    let body = advisor::format_alert(&observation, &recommendations);
    let icon = advisor::condition_icon(&observation.condition);
    let title = format!(
        "{} {:.0}°F - {}",
        icon, observation.temperature_f, observation.condition
    );

    Ok(Notification { title, body, icon })
}
