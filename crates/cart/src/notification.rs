//! Transient user-facing notifications.

use std::time::Duration;

use avant_core::NotificationId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How long a notification stays up before it is removed automatically.
pub const NOTIFICATION_TTL: Duration = Duration::from_millis(3000);

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    #[default]
    Success,
    Info,
    Error,
}

impl NotificationKind {
    /// Stable lowercase label, used for CSS hooks in templates.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Error => "error",
        }
    }
}

/// A short-lived message surfaced to the user.
///
/// Created by cart mutations (and anything else that wants to inform the
/// user), destroyed automatically after [`NOTIFICATION_TTL`] unless dismissed
/// earlier. Removal is idempotent, so a manual dismissal racing the expiry
/// timer is harmless.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Unique id generated at creation time.
    pub id: NotificationId,
    /// Free-text message.
    pub message: String,
    /// Severity.
    pub kind: NotificationKind,
}

impl Notification {
    /// Create a notification with a fresh unique id.
    #[must_use]
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            id: NotificationId::new(Uuid::new_v4().to_string()),
            message: message.into(),
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_ids_are_unique() {
        let a = Notification::new("Added to cart", NotificationKind::Success);
        let b = Notification::new("Added to cart", NotificationKind::Success);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_kind_defaults_to_success() {
        assert_eq!(NotificationKind::default(), NotificationKind::Success);
        assert_eq!(NotificationKind::Success.as_str(), "success");
    }
}
