//! Roster view pipeline: horizon, text, pace and weekday filters, then
//! chronological order.

use chrono::{Duration, NaiveDateTime};

use crate::models::{EventFilter, EventRecord};

/// How long after its start an event stays listed.
pub fn horizon() -> Duration {
    Duration::hours(24)
}

/// Return the events relevant to `filter` as of `now`, sorted by start.
///
/// The source slice is left untouched.
pub fn filter_events(
    events: &[EventRecord],
    filter: &EventFilter,
    now: NaiveDateTime,
) -> Vec<EventRecord> {
    let cutoff = now - horizon();
    let needle = filter.text.to_lowercase();

    let mut view: Vec<EventRecord> = events
        .iter()
        .filter(|e| e.starts_at().is_some_and(|start| start >= cutoff))
        .filter(|e| needle.is_empty() || matches_text(e, &needle))
        .filter(|e| filter.pace.map_or(true, |pace| e.pace_band == pace))
        .filter(|e| {
            filter
                .weekday
                .map_or(true, |day| e.weekday_from_sunday() == Some(day))
        })
        .cloned()
        .collect();

    view.sort_by_cached_key(EventRecord::sort_key);
    view
}

fn matches_text(event: &EventRecord, needle: &str) -> bool {
    format!("{}{}{}", event.title, event.course, event.note)
        .to_lowercase()
        .contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PaceBand, Participants};
    use crate::roster::sample_events;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|date| date.and_hms_opt(h, min, 0))
            .unwrap()
    }

    fn event(id: &str, date: &str, time: &str) -> EventRecord {
        EventRecord::new(
            id.to_string(),
            format!("Run {}", id),
            date.to_string(),
            time.to_string(),
            "교내 트랙".to_string(),
            None,
            PaceBand::From500To530,
            "호스트".to_string(),
            10,
            String::new(),
            Participants::new(),
        )
    }

    #[test]
    fn test_no_filters_yields_horizon_subset_in_chronological_order() {
        let events = vec![
            event("c", "2025-09-06", "09:00"),
            event("old", "2025-08-30", "07:00"),
            event("a", "2025-09-01", "20:00"),
            event("b", "2025-09-01", "06:00"),
        ];
        let now = at(2025, 9, 1, 12, 0);

        let view = filter_events(&events, &EventFilter::default(), now);
        let ids: Vec<&str> = view.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["b", "a", "c"]);
    }

    #[test]
    fn test_horizon_keeps_runs_started_within_a_day() {
        let events = vec![
            event("edge", "2025-08-31", "12:00"),
            event("gone", "2025-08-31", "11:59"),
        ];
        let now = at(2025, 9, 1, 12, 0);

        let view = filter_events(&events, &EventFilter::default(), now);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, "edge");
    }

    #[test]
    fn test_unparseable_start_is_dropped() {
        let events = vec![event("bad", "someday", "20:00")];
        let view = filter_events(&events, &EventFilter::default(), at(2020, 1, 1, 0, 0));
        assert!(view.is_empty());
    }

    #[test]
    fn test_text_filter_is_case_insensitive_over_title_course_and_note() {
        let mut events = sample_events();
        events[1].note = "Bring SPIKES".to_string();
        let now = at(2025, 8, 1, 0, 0);

        let by_course = filter_events(&events, &EventFilter::default().text("정릉"), now);
        assert_eq!(by_course.len(), 2);

        let by_note = filter_events(&events, &EventFilter::default().text("spikes"), now);
        assert_eq!(by_note.len(), 1);
        assert_eq!(by_note[0].id, "E-250903-0600");

        let none = filter_events(&events, &EventFilter::default().text("한강"), now);
        assert!(none.is_empty());
    }

    #[test]
    fn test_pace_filter_matches_exactly() {
        let events = sample_events();
        let now = at(2025, 8, 1, 0, 0);

        let view = filter_events(
            &events,
            &EventFilter::default().pace(PaceBand::From430To500),
            now,
        );
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].pace_band, PaceBand::From430To500);
    }

    #[test]
    fn test_sunday_filter_ignores_time_of_day() {
        let events = vec![
            event("sun-early", "2025-09-07", "00:05"),
            event("sun-late", "2025-09-07", "23:55"),
            event("sat", "2025-09-06", "23:55"),
            event("mon", "2025-09-08", "00:05"),
        ];
        let now = at(2025, 9, 1, 0, 0);

        let view = filter_events(&events, &EventFilter::default().weekday(0), now);
        let ids: Vec<&str> = view.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["sun-early", "sun-late"]);
    }

    #[test]
    fn test_filters_commute_and_leave_source_untouched() {
        let events = sample_events();
        let before = events.clone();
        let now = at(2025, 8, 1, 0, 0);

        let both = EventFilter::default()
            .text("정릉")
            .pace(PaceBand::From600To630);
        let view = filter_events(&events, &both, now);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, "E-250906-0900");

        let pace_only = filter_events(
            &events,
            &EventFilter::default().pace(PaceBand::From600To630),
            now,
        );
        let text_then_pace = filter_events(&pace_only, &EventFilter::default().text("정릉"), now);
        assert_eq!(view, text_then_pace);
        assert_eq!(events, before);
    }
}
