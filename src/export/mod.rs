//! Share links and calendar files for a single run.

use crate::errors::AppError;
use crate::models::EventRecord;

/// A downloadable calendar file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarFile {
    pub file_name: String,
    pub body: String,
}

/// Page location with the event id as fragment.
pub fn share_link(public_url: &str, event_id: &str) -> String {
    format!("{}#{}", public_url, event_id)
}

/// Single-event iCalendar file. Start and end are the same floating local
/// instant.
pub fn calendar_file(event: &EventRecord) -> Result<CalendarFile, AppError> {
    let start = event.starts_at().ok_or_else(|| {
        AppError::BadRequest(format!("Event {} has no valid start time", event.id))
    })?;
    let stamp = start.format("%Y%m%dT%H%M%S").to_string();

    let lines = [
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        "BEGIN:VEVENT".to_string(),
        format!("SUMMARY:{}", escape_text(&event.title)),
        format!("DTSTART:{}", stamp),
        format!("DTEND:{}", stamp),
        "END:VEVENT".to_string(),
        "END:VCALENDAR".to_string(),
    ];

    Ok(CalendarFile {
        file_name: format!("{}.ics", event.id),
        body: lines.join("\r\n"),
    })
}

// RFC 5545 TEXT escaping
fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            ';' => out.push_str("\\;"),
            ',' => out.push_str("\\,"),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::sample_events;

    #[test]
    fn test_share_link() {
        assert_eq!(
            share_link("http://localhost:8080/", "E-250901-2000"),
            "http://localhost:8080/#E-250901-2000"
        );
    }

    #[test]
    fn test_calendar_file() {
        let event = sample_events().remove(0);
        let file = calendar_file(&event).unwrap();

        assert_eq!(file.file_name, "E-250901-2000.ics");
        assert_eq!(
            file.body,
            "BEGIN:VCALENDAR\r\nVERSION:2.0\r\nBEGIN:VEVENT\r\n\
             SUMMARY:정릉천 8km · 6:00\r\n\
             DTSTART:20250901T200000\r\nDTEND:20250901T200000\r\n\
             END:VEVENT\r\nEND:VCALENDAR"
        );
    }

    #[test]
    fn test_summary_is_escaped() {
        let mut event = sample_events().remove(1);
        event.title = "Hills; then, tempo".to_string();
        let file = calendar_file(&event).unwrap();
        assert!(file.body.contains("SUMMARY:Hills\\; then\\, tempo\r\n"));
    }
}
