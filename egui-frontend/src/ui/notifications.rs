//! Transient user notifications.
//!
//! Fire-and-forget messages with a severity tag, auto-dismissed after a fixed
//! interval. The app pushes notifications as outcomes arrive and prunes
//! expired ones every frame.

use std::time::{Duration, Instant};

/// How long a notification stays on screen
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(3);

/// Severity of a notification, driving its color and icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Error,
}

/// One transient message
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    created_at: Instant,
}

impl Notification {
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind,
            created_at: Instant::now(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Error, message)
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= NOTIFICATION_TTL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_notifications_are_not_expired() {
        assert!(!Notification::success("Financial summary updated!").is_expired());
    }

    #[test]
    fn constructors_tag_the_right_kind() {
        assert_eq!(Notification::info("a").kind, NotificationKind::Info);
        assert_eq!(Notification::success("b").kind, NotificationKind::Success);
        assert_eq!(Notification::error("c").kind, NotificationKind::Error);
    }
}
