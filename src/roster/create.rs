//! Building new event records from the creation form.

use chrono::{NaiveDate, NaiveTime};

use crate::errors::AppError;
use crate::models::{
    capacity_or_default, parse_date, parse_time, CreateEventRequest, EventRecord, PaceBand,
    Participants, DATE_FORMAT, TIME_FORMAT,
};

/// Host name used when neither the form nor the viewer supplies one.
pub const HOST_PLACEHOLDER: &str = "호스트";

const ID_PREFIX: &str = "E";

/// Derive the event id from its start, e.g. `E-250901-2000`.
///
/// Two runs starting in the same minute get the same id.
pub fn derive_event_id(date: NaiveDate, time: NaiveTime) -> String {
    format!(
        "{}-{}-{}",
        ID_PREFIX,
        date.format("%y%m%d"),
        time.format("%H%M")
    )
}

/// Title used when the form does not provide one: course, optional distance,
/// then the pace band's lower bound.
pub fn derive_title(course: &str, distance_km: Option<f64>, pace: PaceBand) -> String {
    match distance_km {
        Some(km) => format!("{} {}km · {}", course, km, pace.lower_bound()),
        None => format!("{} · {}", course, pace.lower_bound()),
    }
}

/// Validate the form and build a record owned by `viewer`.
pub fn build_event(request: &CreateEventRequest, viewer: &str) -> Result<EventRecord, AppError> {
    let course = request.course.trim();
    if [&request.date, &request.time, &request.course, &request.pace_band]
        .iter()
        .any(|field| field.trim().is_empty())
    {
        return Err(AppError::Validation(
            "날짜/시간/코스/페이스는 필수입니다".to_string(),
        ));
    }

    let date = parse_date(&request.date).ok_or_else(|| {
        AppError::Validation(format!("Date must look like YYYY-MM-DD: {}", request.date))
    })?;
    let time = parse_time(&request.time)
        .ok_or_else(|| AppError::Validation(format!("Time must look like HH:MM: {}", request.time)))?;
    let pace_band = request
        .pace_band
        .trim()
        .parse::<PaceBand>()
        .map_err(AppError::Validation)?;

    let distance_km = match request.distance_km {
        Some(km) if km.is_finite() && km > 0.0 => Some(km),
        Some(km) => {
            return Err(AppError::Validation(format!(
                "Distance must be a positive number of kilometres: {}",
                km
            )))
        }
        None => None,
    };

    let title = match request.title.as_deref().map(str::trim) {
        Some(title) if !title.is_empty() => title.to_string(),
        _ => derive_title(course, distance_km, pace_band),
    };

    let viewer = viewer.trim();
    let host = [request.host.as_deref().unwrap_or_default().trim(), viewer]
        .into_iter()
        .find(|name| !name.is_empty())
        .unwrap_or(HOST_PLACEHOLDER)
        .to_string();

    let participants = if viewer.is_empty() {
        Participants::new()
    } else {
        [viewer].into_iter().collect()
    };

    Ok(EventRecord::new(
        derive_event_id(date, time),
        title,
        date.format(DATE_FORMAT).to_string(),
        time.format(TIME_FORMAT).to_string(),
        course.to_string(),
        distance_km,
        pace_band,
        host,
        capacity_or_default(request.capacity),
        request.note.clone().unwrap_or_default(),
        participants,
    ))
}
