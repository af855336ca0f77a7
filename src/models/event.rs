//! Event record model.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize};

use super::{Participants, Participation};

/// Calendar date layout used in stored records.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Wall-clock layout used in stored records.
pub const TIME_FORMAT: &str = "%H:%M";

/// Capacity used when none is given or the given one is below one seat.
pub const DEFAULT_CAPACITY: u32 = 10;

/// Expected running pace, in minutes per kilometre.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaceBand {
    #[serde(rename = "4:00~4:30")]
    From400To430,
    #[serde(rename = "4:30~5:00")]
    From430To500,
    #[serde(rename = "5:00~5:30")]
    From500To530,
    #[serde(rename = "5:30~6:00")]
    From530To600,
    #[serde(rename = "6:00~6:30")]
    From600To630,
    #[serde(rename = "6:30+")]
    Over630,
}

impl PaceBand {
    pub const ALL: [PaceBand; 6] = [
        PaceBand::From400To430,
        PaceBand::From430To500,
        PaceBand::From500To530,
        PaceBand::From530To600,
        PaceBand::From600To630,
        PaceBand::Over630,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaceBand::From400To430 => "4:00~4:30",
            PaceBand::From430To500 => "4:30~5:00",
            PaceBand::From500To530 => "5:00~5:30",
            PaceBand::From530To600 => "5:30~6:00",
            PaceBand::From600To630 => "6:00~6:30",
            PaceBand::Over630 => "6:30+",
        }
    }

    /// Text before the `~` separator; the open-ended band has none and is
    /// returned whole.
    pub fn lower_bound(&self) -> &'static str {
        let s = self.as_str();
        s.split('~').next().unwrap_or(s)
    }
}

impl fmt::Display for PaceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaceBand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaceBand::ALL
            .into_iter()
            .find(|band| band.as_str() == s)
            .ok_or_else(|| format!("Unknown pace band: {}", s))
    }
}

/// A single meetup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    pub id: String,
    pub title: String,
    pub date: String,
    pub time: String,
    pub course: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    pub pace_band: PaceBand,
    pub host: String,
    #[serde(default = "default_capacity", deserialize_with = "lenient_capacity")]
    pub capacity: u32,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    participants: Participants,
}

impl EventRecord {
    /// Build a record. Participants are the only part that changes afterwards.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: String,
        title: String,
        date: String,
        time: String,
        course: String,
        distance_km: Option<f64>,
        pace_band: PaceBand,
        host: String,
        capacity: u32,
        note: String,
        participants: Participants,
    ) -> Self {
        Self {
            id,
            title,
            date,
            time,
            course,
            distance_km,
            pace_band,
            host,
            capacity,
            note,
            participants,
        }
    }

    pub fn participants(&self) -> &Participants {
        &self.participants
    }

    pub fn toggle_participant(&mut self, name: &str) -> Participation {
        self.participants.toggle(name)
    }

    pub fn civil_date(&self) -> Option<NaiveDate> {
        parse_date(&self.date)
    }

    /// Local start time, or `None` when the stored date or time is malformed.
    pub fn starts_at(&self) -> Option<NaiveDateTime> {
        Some(self.civil_date()?.and_time(parse_time(&self.time)?))
    }

    /// Weekday of the date with Sunday as 0.
    pub fn weekday_from_sunday(&self) -> Option<u32> {
        self.civil_date()
            .map(|d| d.weekday().num_days_from_sunday())
    }

    /// Key that orders records chronologically for ISO dates and times.
    pub fn sort_key(&self) -> String {
        format!("{}{}", self.date, self.time)
    }
}

/// Whole seats from a possibly fractional number, rounding down. Anything
/// below one seat, or not a number, becomes [`DEFAULT_CAPACITY`].
pub fn capacity_or_default(raw: Option<f64>) -> u32 {
    match raw {
        Some(c) if c.is_finite() && c >= 1.0 => c.min(f64::from(u32::MAX)) as u32,
        _ => DEFAULT_CAPACITY,
    }
}

fn default_capacity() -> u32 {
    DEFAULT_CAPACITY
}

// Older rosters may hold fractional or zero capacities.
fn lenient_capacity<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<f64>::deserialize(deserializer).map(capacity_or_default)
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}

/// Accepts `HH:MM`, and `HH:MM:SS` as some time inputs emit seconds.
pub fn parse_time(s: &str) -> Option<NaiveTime> {
    let s = s.trim();
    NaiveTime::parse_from_str(s, TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .ok()
}
