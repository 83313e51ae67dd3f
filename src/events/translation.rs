//! Filter translation: events page filter state → `/api/events` query params.
//!
//! Pure deterministic mapping. The API ANDs every parameter it receives while
//! the availability options are OR'd from the user's point of view, so some
//! selections cannot be expressed server-side at all.
//!
//! Translation rules:
//!   scope myOrgs / admin   → organization_id per matching role
//!   category               → category per selected category
//!   location               → location (raw text)
//!   availability           → see `plan_availability`
//!
//! Whenever availability cannot be expressed exactly, the server is asked for
//! a superset and the caller narrows the response with `narrow_events`.

use crate::events::query::QueryParams;
use crate::events::time_of_day::HourRange;
use crate::filters::{Availability, Filters, Role, Scope, TimeOfDay};

/// How an availability selection maps onto the AND-only API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvailabilityPlan {
    /// Nothing to send and nothing to narrow (empty, `Flexible`, or only
    /// unrecognized tokens).
    Unrestricted,
    /// Weekends OR'd with a time-of-day slot: not expressible, send nothing.
    ClientSideOnly,
    /// `is_weekday=false`.
    WeekendsOnly,
    /// Broadest covering window over the selected slots. `exact` is false
    /// when the slots leave a gap inside the window.
    TimeWindow { window: HourRange, exact: bool },
}

impl AvailabilityPlan {
    /// Whether the server response can contain events the user excluded.
    pub fn needs_post_filter(&self) -> bool {
        match self {
            AvailabilityPlan::ClientSideOnly => true,
            AvailabilityPlan::TimeWindow { exact, .. } => !exact,
            AvailabilityPlan::Unrestricted | AvailabilityPlan::WeekendsOnly => false,
        }
    }
}

/// Decide how to send an availability selection.
pub fn plan_availability(selected: &[Availability]) -> AvailabilityPlan {
    if selected.is_empty() || selected.contains(&Availability::Flexible) {
        return AvailabilityPlan::Unrestricted;
    }

    let mut slots: Vec<TimeOfDay> = selected.iter().filter_map(|a| a.time_of_day()).collect();
    slots.sort();
    slots.dedup();

    let weekends = selected.contains(&Availability::Weekends);
    match (weekends, slots.is_empty()) {
        (true, false) => AvailabilityPlan::ClientSideOnly,
        (true, true) => AvailabilityPlan::WeekendsOnly,
        (false, true) => AvailabilityPlan::Unrestricted,
        (false, false) => {
            let ranges: Vec<HourRange> = slots.iter().map(|s| s.range()).collect();
            let start = ranges.iter().map(|r| r.start).min().unwrap_or_default();
            let end = ranges.iter().map(|r| r.end).max().unwrap_or_default();
            let window = HourRange { start, end };
            let covered: u32 = ranges.iter().map(|r| r.hours()).sum();
            AvailabilityPlan::TimeWindow {
                window,
                exact: covered == window.hours(),
            }
        }
    }
}

/// Translate filter state into query parameters for `GET /api/events`.
pub fn translate(filters: &Filters, roles: &[Role]) -> QueryParams {
    let mut params = QueryParams::new();

    for org in filters.effective_scope().organization_ids(roles) {
        params.append("organization_id", org.to_string());
    }

    for category in filters.categories().iter().filter_map(|c| c.as_param()) {
        params.append("category", category);
    }

    if let Some(location) = filters.location() {
        params.append("location", location);
    }

    match plan_availability(filters.availability()) {
        AvailabilityPlan::Unrestricted => {}
        AvailabilityPlan::ClientSideOnly => {
            tracing::debug!(
                availability = ?filters.availability(),
                "availability_not_expressible: narrowing client-side"
            );
        }
        AvailabilityPlan::WeekendsOnly => {
            params.set("is_weekday", "false");
        }
        AvailabilityPlan::TimeWindow { window, exact } => {
            if !exact {
                tracing::debug!(
                    begin = %window.begin_time(),
                    end = %window.end_time(),
                    "availability_window_overfetch"
                );
            }
            params.set("begin_time", window.begin_time());
            params.set("end_time", window.end_time());
        }
    }

    params
}

/// Whether a response fetched with `translate(filters, roles)` still has to
/// go through `narrow_events`.
///
/// A restricted scope that resolves to no organizations sends no
/// `organization_id` at all, so the server answer is unscoped and must be
/// narrowed down to nothing here.
pub fn needs_post_filter(filters: &Filters, roles: &[Role]) -> bool {
    let scope = filters.effective_scope();
    let unscoped_restriction =
        scope != Scope::All && scope.organization_ids(roles).is_empty();
    unscoped_restriction || plan_availability(filters.availability()).needs_post_filter()
}
