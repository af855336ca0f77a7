//! Event roster: the ordered list of runs and the operations that read or
//! change it.

mod capacity;
mod create;
mod filter;
mod sample;
mod view;

pub use capacity::*;
pub use create::*;
pub use filter::*;
pub use sample::*;
pub use view::*;

use chrono::NaiveDateTime;

use crate::errors::AppError;
use crate::models::{CreateEventRequest, EventFilter, EventRecord, Participation};

/// Runs in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    events: Vec<EventRecord>,
}

impl Roster {
    pub fn new(events: Vec<EventRecord>) -> Self {
        Self { events }
    }

    pub fn sample() -> Self {
        Self::new(sample_events())
    }

    pub fn events(&self) -> &[EventRecord] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// First event carrying `id`.
    pub fn get(&self, id: &str) -> Option<&EventRecord> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn view(&self, filter: &EventFilter, now: NaiveDateTime) -> Vec<EventRecord> {
        filter_events(&self.events, filter, now)
    }

    /// Join or leave the event `id` as `viewer`. Capacity is not checked;
    /// joining a full event puts the viewer on the waitlist.
    ///
    /// When ids collide only the first matching event is changed.
    pub fn toggle_participation(
        &mut self,
        id: &str,
        viewer: &str,
    ) -> Result<(&EventRecord, Participation), AppError> {
        let viewer = viewer.trim();
        if viewer.is_empty() {
            return Err(AppError::Validation(
                "먼저 상단에서 이름을 입력하세요".to_string(),
            ));
        }

        let event = self
            .events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Event {} not found", id)))?;
        let outcome = event.toggle_participant(viewer);
        Ok((&*event, outcome))
    }

    /// Validate `request` and append the new event at the end.
    pub fn create(
        &mut self,
        request: &CreateEventRequest,
        viewer: &str,
    ) -> Result<&EventRecord, AppError> {
        let event = build_event(request, viewer)?;
        if self.get(&event.id).is_some() {
            tracing::warn!("Event id {} already exists; keeping both", event.id);
        }
        self.events.push(event);
        let last = self.events.len() - 1;
        Ok(&self.events[last])
    }
}
