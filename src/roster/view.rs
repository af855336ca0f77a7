//! Display projection of an event for the current viewer.

use serde::Serialize;

use super::CapacityStatus;
use crate::models::EventRecord;

const WEEKDAYS_KO: [&str; 7] = ["일", "월", "화", "수", "목", "금", "토"];

/// What the join button does for this viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewerAction {
    Join,
    Waitlist,
    Leave,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventView {
    #[serde(flatten)]
    pub event: EventRecord,
    pub capacity_status: CapacityStatus,
    pub capacity_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_label: Option<String>,
    pub viewer_action: ViewerAction,
}

impl EventView {
    pub fn new(event: EventRecord, viewer: &str) -> Self {
        let status = CapacityStatus::derive(event.capacity, event.participants().len());
        let viewer_action = if !viewer.is_empty() && event.participants().contains(viewer) {
            ViewerAction::Leave
        } else if status.has_room() {
            ViewerAction::Join
        } else {
            ViewerAction::Waitlist
        };

        Self {
            date_label: date_label(&event),
            capacity_label: status.to_string(),
            capacity_status: status,
            viewer_action,
            event,
        }
    }
}

/// `2025.09.01(월) 20:00`
pub fn date_label(event: &EventRecord) -> Option<String> {
    let date = event.civil_date()?;
    let weekday = WEEKDAYS_KO[event.weekday_from_sunday()? as usize];
    Some(format!(
        "{}({}) {}",
        date.format("%Y.%m.%d"),
        weekday,
        event.time
    ))
}
