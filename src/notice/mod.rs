//! Transient notices shown to the viewer.
//!
//! Only the latest notice is kept. Posting replaces the current one and
//! restarts its countdown.

use std::time::Duration as StdDuration;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::config::DEFAULT_NOTICE_TTL_MS;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub message: String,
    pub posted_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NoticeBoard {
    ttl: Duration,
    current: Option<Notice>,
}

impl NoticeBoard {
    pub fn new(ttl: StdDuration) -> Self {
        let ttl = Duration::from_std(ttl).unwrap_or_else(|_| {
            tracing::warn!("Notice lifetime out of range, using default");
            Duration::milliseconds(DEFAULT_NOTICE_TTL_MS as i64)
        });
        Self { ttl, current: None }
    }

    pub fn post(&mut self, message: impl Into<String>, at: DateTime<Utc>) {
        let message = message.into();
        tracing::debug!(%message, "notice posted");
        self.current = Some(Notice {
            message,
            posted_at: at,
            expires_at: at + self.ttl,
        });
    }

    /// The current notice if it has not yet expired at `now`.
    pub fn active(&self, now: DateTime<Utc>) -> Option<&Notice> {
        self.current.as_ref().filter(|n| now < n.expires_at)
    }
}
