//! Closed enumerations shared by filters, roles, and events.
//!
//! Wire names match the API and the filter UI exactly. Availability and
//! category tokens the client does not recognize deserialize to `Unknown`
//! instead of failing, so a newer UI never breaks an older translator.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which organizations' events the caller wants to see. Unrecognized
/// tokens read as `All`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Scope {
    MyOrgs,
    Admin,
    #[default]
    #[serde(other)]
    All,
}

/// Availability option offered by the filter UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Availability {
    Mornings,
    Afternoons,
    Evenings,
    Weekends,
    Flexible,
    #[serde(other)]
    Unknown,
}

impl Availability {
    /// The daily time-of-day slot this option stands for, if any.
    pub fn time_of_day(self) -> Option<TimeOfDay> {
        match self {
            Availability::Mornings => Some(TimeOfDay::Mornings),
            Availability::Afternoons => Some(TimeOfDay::Afternoons),
            Availability::Evenings => Some(TimeOfDay::Evenings),
            _ => None,
        }
    }

    pub fn is_recognized(self) -> bool {
        self != Availability::Unknown
    }
}

/// Daily time window. The hour table lives in `events::time_of_day`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TimeOfDay {
    Mornings,
    Afternoons,
    Evenings,
}

impl From<TimeOfDay> for Availability {
    fn from(slot: TimeOfDay) -> Self {
        match slot {
            TimeOfDay::Mornings => Availability::Mornings,
            TimeOfDay::Afternoons => Availability::Afternoons,
            TimeOfDay::Evenings => Availability::Evenings,
        }
    }
}

/// Event category (organization sector).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    Education,
    Health,
    Environment,
    Social,
    Animals,
    Cultural,
    Sports,
    Other,
    #[serde(other)]
    Unknown,
}

impl EventCategory {
    pub const ALL: [EventCategory; 8] = [
        EventCategory::Education,
        EventCategory::Health,
        EventCategory::Environment,
        EventCategory::Social,
        EventCategory::Animals,
        EventCategory::Cultural,
        EventCategory::Sports,
        EventCategory::Other,
    ];

    /// Query-string value, `None` for unrecognized categories.
    pub fn as_param(self) -> Option<&'static str> {
        match self {
            EventCategory::Education => Some("Education"),
            EventCategory::Health => Some("Health"),
            EventCategory::Environment => Some("Environment"),
            EventCategory::Social => Some("Social"),
            EventCategory::Animals => Some("Animals"),
            EventCategory::Cultural => Some("Cultural"),
            EventCategory::Sports => Some("Sports"),
            EventCategory::Other => Some("Other"),
            EventCategory::Unknown => None,
        }
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param().unwrap_or("Unknown"))
    }
}

/// A member's permission level within one organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionLevel {
    Volunteer,
    Admin,
    /// Any level this client does not know; never treated as admin.
    #[serde(other)]
    Unknown,
}

impl PermissionLevel {
    pub fn is_admin(self) -> bool {
        matches!(self, PermissionLevel::Admin)
    }
}
