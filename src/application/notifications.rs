//! Transient user notifications
//!
//! At most one notification of each kind is visible. Showing another of the
//! same kind replaces it; each expires after the configured TTL.

use serde::Serialize;
use std::time::Duration;
use tokio::time::Instant;

/// Default time a notification stays visible
pub const DEFAULT_NOTIFICATION_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Error,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }
}

#[derive(Debug)]
struct Visible {
    notification: Notification,
    expires_at: Instant,
}

/// Tracks the visible error and success notifications
#[derive(Debug)]
pub struct NotificationCenter {
    ttl: Duration,
    error: Option<Visible>,
    success: Option<Visible>,
}

impl NotificationCenter {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            error: None,
            success: None,
        }
    }

    fn slot(&mut self, kind: NotificationKind) -> &mut Option<Visible> {
        match kind {
            NotificationKind::Error => &mut self.error,
            NotificationKind::Success => &mut self.success,
        }
    }

    /// Shows a notification; returns the one it replaced, if any
    pub fn show(&mut self, notification: Notification, now: Instant) -> Option<Notification> {
        let expires_at = now + self.ttl;
        self.slot(notification.kind)
            .replace(Visible {
                notification,
                expires_at,
            })
            .map(|v| v.notification)
    }

    /// Removes the visible notification of `kind`
    pub fn dismiss(&mut self, kind: NotificationKind) -> Option<Notification> {
        self.slot(kind).take().map(|v| v.notification)
    }

    /// Removes every notification whose TTL has elapsed
    pub fn expire(&mut self, now: Instant) -> Vec<Notification> {
        let mut expired = Vec::new();
        for slot in [&mut self.error, &mut self.success] {
            if slot.as_ref().is_some_and(|v| v.expires_at <= now) {
                if let Some(v) = slot.take() {
                    expired.push(v.notification);
                }
            }
        }
        expired
    }

    /// Earliest pending expiry
    pub fn next_deadline(&self) -> Option<Instant> {
        [&self.error, &self.success]
            .into_iter()
            .flatten()
            .map(|v| v.expires_at)
            .min()
    }

    pub fn visible(&self) -> Vec<Notification> {
        [&self.error, &self.success]
            .into_iter()
            .flatten()
            .map(|v| v.notification.clone())
            .collect()
    }
}
