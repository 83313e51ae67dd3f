//! Client-side narrowing of an events listing.
//!
//! Applies the filters with their real semantics, including OR across
//! availability options, which the API cannot express. Running this over a
//! response that the server already filtered exactly is a no-op.

use crate::events::Event;
use crate::filters::{Availability, Filters, Role, Scope};

/// Keep the events that satisfy every filter dimension.
pub fn narrow_events(
    events: impl IntoIterator<Item = Event>,
    filters: &Filters,
    roles: &[Role],
) -> Vec<Event> {
    events
        .into_iter()
        .filter(|event| matches_filters(event, filters, roles))
        .collect()
}

pub fn matches_filters(event: &Event, filters: &Filters, roles: &[Role]) -> bool {
    in_scope(event, filters.effective_scope(), roles)
        && matches_category(event, filters)
        && matches_location(event, filters)
        && matches_availability(event, filters.availability())
}

fn in_scope(event: &Event, scope: Scope, roles: &[Role]) -> bool {
    match scope {
        Scope::All => true,
        _ => scope
            .organization_ids(roles)
            .contains(&event.organization_id),
    }
}

fn matches_category(event: &Event, filters: &Filters) -> bool {
    let selected: Vec<_> = filters
        .categories()
        .iter()
        .filter(|c| c.as_param().is_some())
        .collect();
    if selected.is_empty() {
        return true;
    }
    event
        .category
        .is_some_and(|category| selected.contains(&&category))
}

fn matches_location(event: &Event, filters: &Filters) -> bool {
    match filters.location() {
        None => true,
        Some(needle) => event
            .location
            .to_lowercase()
            .contains(&needle.to_lowercase()),
    }
}

// OR across the recognized options; a selection with none recognized does
// not restrict.
fn matches_availability(event: &Event, selected: &[Availability]) -> bool {
    let mut recognized = selected.iter().filter(|a| a.is_recognized()).peekable();
    if recognized.peek().is_none() {
        return true;
    }
    recognized.any(|option| match option {
        Availability::Flexible => true,
        Availability::Weekends => event.is_weekend() == Some(true),
        other => other.time_of_day().is_some() && event.time_of_day() == other.time_of_day(),
    })
}
