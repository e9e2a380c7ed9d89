use crate::constants::DEFAULT_ALERT_DURATION_MS;
use std::time::{Duration, Instant};
use tracing::{error, info, warn};

/// Severity of a user-facing notification, matching the Bootstrap contextual
/// classes the rendered markup uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    Info,
    Success,
    Warning,
    Danger,
}

impl AlertLevel {
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

/// An ephemeral notification: created, then auto-removed after its duration
/// elapses. `duration: None` means the alert stays until dismissed.
#[derive(Debug, Clone)]
pub struct Alert {
    pub level: AlertLevel,
    pub message: String,
    pub duration: Option<Duration>,
}

impl Alert {
    pub fn new(level: AlertLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            duration: Some(Duration::from_millis(DEFAULT_ALERT_DURATION_MS)),
        }
    }

    pub fn with_duration(mut self, duration: Option<Duration>) -> Self {
        self.duration = duration;
        self
    }
}

/// Collected alerts for the current action, oldest first.
///
/// Every push is also emitted as a tracing event at the matching level, so a
/// failure is visible on the terminal even when nobody looks at the rendered
/// fragment.
#[derive(Debug, Default)]
pub struct AlertStack {
    entries: Vec<(Alert, Instant)>,
}

impl AlertStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, alert: Alert) {
        match alert.level {
            AlertLevel::Danger => error!(message = %alert.message, "Alert"),
            AlertLevel::Warning => warn!(message = %alert.message, "Alert"),
            _ => info!(message = %alert.message, "Alert"),
        }
        self.push_at(alert, Instant::now());
    }

    fn push_at(&mut self, alert: Alert, created: Instant) {
        self.entries.push((alert, created));
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(Alert::new(AlertLevel::Info, message));
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(Alert::new(AlertLevel::Success, message));
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.push(Alert::new(AlertLevel::Warning, message));
    }

    pub fn danger(&mut self, message: impl Into<String>) {
        self.push(Alert::new(AlertLevel::Danger, message));
    }

    /// Drops alerts whose duration has elapsed as of `now`. Sticky alerts
    /// (no duration) are kept.
    pub fn prune_expired(&mut self, now: Instant) {
        self.entries.retain(|(alert, created)| match alert.duration {
            Some(duration) => now.saturating_duration_since(*created) < duration,
            None => true,
        });
    }

    pub fn iter(&self) -> impl Iterator<Item = &Alert> {
        self.entries.iter().map(|(alert, _)| alert)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
