//! Notification sink trait.

use async_trait::async_trait;

/// A notification ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Short status-bar style summary.
    pub title: String,
    /// Full alert body with recommendations.
    pub body: String,
    /// Coarse icon for the current condition.
    pub icon: &'static str,
}

/// Trait for delivering notifications to the presentation layer.
///
/// Abstracted to support different frontends (terminal, tests, an
/// editor view). Delivery problems are the sink's own concern; the
/// scheduler treats `notify` as best-effort and never crashes over it.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    /// Deliver one notification.
    async fn notify(&self, notification: Notification);
}
