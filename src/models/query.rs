//! Roster view query parameters.

use chrono::NaiveDateTime;
use serde::Deserialize;

use super::PaceBand;
use crate::errors::AppError;

/// Raw query string for `GET /api/events`. Empty values mean "no filter".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventQueryParams {
    /// Free-text search over title, course and note.
    #[serde(default)]
    pub q: Option<String>,
    /// Pace band label, e.g. `5:30~6:00`.
    #[serde(default)]
    pub pace: Option<String>,
    /// Weekday, 0 = Sunday through 6 = Saturday.
    #[serde(default)]
    pub day: Option<String>,
    /// Reference instant as a local ISO date-time; defaults to the current time.
    #[serde(default)]
    pub now: Option<String>,
}

impl EventQueryParams {
    pub fn reference_time(&self) -> Result<Option<NaiveDateTime>, AppError> {
        let Some(raw) = non_empty(&self.now) else {
            return Ok(None);
        };
        ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"]
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
            .map(Some)
            .ok_or_else(|| AppError::BadRequest(format!("Invalid reference time: {}", raw)))
    }
}

/// Typed filters applied by the roster view pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFilter {
    pub text: String,
    pub pace: Option<PaceBand>,
    /// 0 = Sunday through 6 = Saturday.
    pub weekday: Option<u32>,
}

#[cfg(test)]
impl EventFilter {
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn pace(mut self, pace: PaceBand) -> Self {
        self.pace = Some(pace);
        self
    }

    pub fn weekday(mut self, weekday: u32) -> Self {
        self.weekday = Some(weekday);
        self
    }
}

impl TryFrom<&EventQueryParams> for EventFilter {
    type Error = AppError;

    fn try_from(params: &EventQueryParams) -> Result<Self, Self::Error> {
        let pace = non_empty(&params.pace)
            .map(|raw| raw.parse::<PaceBand>().map_err(AppError::BadRequest))
            .transpose()?;

        let weekday = non_empty(&params.day)
            .map(|raw| match raw.parse::<u32>() {
                Ok(day) if day <= 6 => Ok(day),
                _ => Err(AppError::BadRequest(format!(
                    "Weekday must be between 0 (Sunday) and 6 (Saturday), got {}",
                    raw
                ))),
            })
            .transpose()?;

        Ok(Self {
            text: params.q.clone().unwrap_or_default(),
            pace,
            weekday,
        })
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
