//! Time-of-day windows and start-time classification.
//!
//! Each window covers whole hours, `[start:00, end:59]`.

use chrono::{DateTime, NaiveDateTime, NaiveTime, Timelike};

use crate::filters::TimeOfDay;

/// Inclusive hour range of a time-of-day window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourRange {
    pub start: u32,
    pub end: u32,
}

impl HourRange {
    pub fn contains_hour(self, hour: u32) -> bool {
        (self.start..=self.end).contains(&hour)
    }

    /// `HH:00` of the first hour.
    pub fn begin_time(self) -> String {
        format!("{:02}:00", self.start)
    }

    /// `HH:59` of the last hour.
    pub fn end_time(self) -> String {
        format!("{:02}:59", self.end)
    }

    pub fn hours(self) -> u32 {
        self.end - self.start + 1
    }
}

pub const TIME_OF_DAY_RANGES: [(TimeOfDay, HourRange); 3] = [
    (TimeOfDay::Mornings, HourRange { start: 6, end: 11 }),
    (TimeOfDay::Afternoons, HourRange { start: 12, end: 16 }),
    (TimeOfDay::Evenings, HourRange { start: 17, end: 21 }),
];

impl TimeOfDay {
    pub fn range(self) -> HourRange {
        match self {
            TimeOfDay::Mornings => TIME_OF_DAY_RANGES[0].1,
            TimeOfDay::Afternoons => TIME_OF_DAY_RANGES[1].1,
            TimeOfDay::Evenings => TIME_OF_DAY_RANGES[2].1,
        }
    }
}

const TIME_FORMATS: &[&str] = &["%H:%M", "%H:%M:%S"];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parse the wall-clock time out of a bare time or a datetime string.
///
/// Offsets are not converted: `14:30+02:00` is 14:30.
pub fn parse_wall_clock(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Some(t) = TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(value, fmt).ok())
    {
        return Some(t);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local().time());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|dt| dt.time())
}

/// Classify an event start time. `None` for late-night hours (22:00-05:59)
/// and for anything that does not carry a time.
pub fn time_of_day(value: &str) -> Option<TimeOfDay> {
    let hour = parse_wall_clock(value)?.hour();
    TIME_OF_DAY_RANGES
        .iter()
        .find(|(_, range)| range.contains_hour(hour))
        .map(|(slot, _)| *slot)
}
