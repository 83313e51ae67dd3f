//! Events listing: the event model, filter translation, and client-side
//! narrowing of over-fetched results.

pub mod narrowing;
pub mod query;
pub mod time_of_day;
pub mod translation;

pub use narrowing::{matches_filters, narrow_events};
pub use query::QueryParams;
pub use time_of_day::{time_of_day, HourRange, TIME_OF_DAY_RANGES};
pub use translation::{needs_post_filter, plan_availability, translate, AvailabilityPlan};

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::filters::{EventCategory, TimeOfDay};
use crate::types::{EventId, OrganizationId};

/// An event as listed by `GET /api/events`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub category: Option<EventCategory>,
    /// `YYYY-MM-DD`, possibly followed by a time part.
    pub date: String,
    /// Start time, `HH:MM` or a full datetime.
    pub time: String,
    #[serde(default)]
    pub time_zone: String,
    pub organization_id: OrganizationId,
    #[serde(default)]
    pub signup_count: u32,
    #[serde(default)]
    pub user_signed_up: bool,
}

impl Event {
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        let day = self.date.get(..10)?;
        NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
    }

    /// `None` when the date does not parse.
    pub fn is_weekend(&self) -> Option<bool> {
        self.calendar_date()
            .map(|d| matches!(d.weekday(), Weekday::Sat | Weekday::Sun))
    }

    pub fn time_of_day(&self) -> Option<TimeOfDay> {
        time_of_day(&self.time)
    }
}
