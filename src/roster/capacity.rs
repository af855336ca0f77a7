//! Advisory capacity status. Never blocks a join.

use std::fmt;

use serde::Serialize;

/// Seats left, or how far the roster has overflowed into a waitlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum CapacityStatus {
    Open { remaining: u32, capacity: u32 },
    Full,
    Waitlisted { count: u32 },
}

impl CapacityStatus {
    pub fn derive(capacity: u32, participant_count: usize) -> Self {
        let remaining = i64::from(capacity) - participant_count as i64;
        match remaining {
            r if r > 0 => CapacityStatus::Open {
                remaining: r as u32,
                capacity,
            },
            0 => CapacityStatus::Full,
            r => CapacityStatus::Waitlisted {
                count: u32::try_from(r.unsigned_abs()).unwrap_or(u32::MAX),
            },
        }
    }

    pub fn has_room(&self) -> bool {
        matches!(self, CapacityStatus::Open { .. })
    }
}

impl fmt::Display for CapacityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CapacityStatus::Open {
                remaining,
                capacity,
            } => write!(f, "remaining {} of {}", remaining, capacity),
            CapacityStatus::Full => f.write_str("full, waitlisted"),
            CapacityStatus::Waitlisted { count } => write!(f, "waitlisted {}", count),
        }
    }
}
