//! User-visible error notices.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// How long a notice stays visible unless superseded or dismissed.
pub const NOTICE_TTL: std::time::Duration = std::time::Duration::from_millis(5000);

/// A banner message with its creation time.
///
/// At most one notice is visible at a time; a newer notice supersedes
/// the visible one and restarts its expiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorNotice {
    /// The user-facing message.
    pub message: String,
    /// When the notice was created.
    pub created_at: DateTime<Utc>,
}

impl ErrorNotice {
    /// Creates a notice stamped at `now`.
    #[must_use]
    pub fn new(message: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            message: message.into(),
            created_at: now,
        }
    }

    /// Returns true once the notice has outlived its TTL.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        let ttl = Duration::from_std(NOTICE_TTL).unwrap_or_else(|_| Duration::zero());
        now - self.created_at >= ttl
    }
}
