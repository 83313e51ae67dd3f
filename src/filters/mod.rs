//! Filter UI state and the caller's organization roles.
//!
//! `Filters` is what the events page holds while the user toggles options.
//! It is a plain value: translation and narrowing borrow it and never mutate.

pub mod enums;

pub use enums::{Availability, EventCategory, PermissionLevel, Scope, TimeOfDay};

use crate::types::{OrganizationId, UserId};
use serde::{Deserialize, Deserializer, Serialize};

/// Current filter selection on the events page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filters {
    /// `None` behaves as `Scope::All`.
    #[serde(default)]
    pub scope: Option<Scope>,

    /// Accepts `null`, a single option, or a list of options.
    #[serde(default, deserialize_with = "one_or_many")]
    pub availability: Option<Vec<Availability>>,

    #[serde(default)]
    pub category: Option<Vec<EventCategory>>,

    /// Free-text substring matched against the event location.
    #[serde(default)]
    pub location: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(Availability),
    Many(Vec<Availability>),
}

// The filter model once stored a single nullable availability; the list form
// replaced it but older saved states still carry a bare string.
fn one_or_many<'de, D>(deserializer: D) -> Result<Option<Vec<Availability>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<OneOrMany>::deserialize(deserializer)?;
    Ok(raw.map(|value| match value {
        OneOrMany::One(a) => vec![a],
        OneOrMany::Many(list) => list,
    }))
}

impl Filters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = Some(scope);
        self
    }

    pub fn with_availability(mut self, availability: impl IntoIterator<Item = Availability>) -> Self {
        self.availability = Some(availability.into_iter().collect());
        self
    }

    pub fn with_categories(mut self, categories: impl IntoIterator<Item = EventCategory>) -> Self {
        self.category = Some(categories.into_iter().collect());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn effective_scope(&self) -> Scope {
        self.scope.unwrap_or_default()
    }

    /// Selected availability options; empty when unset.
    pub fn availability(&self) -> &[Availability] {
        self.availability.as_deref().unwrap_or(&[])
    }

    /// Selected categories; empty when unset.
    pub fn categories(&self) -> &[EventCategory] {
        self.category.as_deref().unwrap_or(&[])
    }

    /// Location text, `None` when unset or empty.
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref().filter(|l| !l.is_empty())
    }
}

/// One filter dimension, as shown in the active-filters bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterKey {
    Scope,
    Category,
    Availability,
    Location,
}

/// Number of filter dimensions currently restricting results.
pub fn active_filter_count(filters: &Filters) -> usize {
    [
        filters.effective_scope() != Scope::All,
        !filters.categories().is_empty(),
        !filters.availability().is_empty(),
        filters.location().is_some(),
    ]
    .into_iter()
    .filter(|active| *active)
    .count()
}

/// Copy of `filters` with one dimension reset. Scope resets to `All`.
pub fn clear_filter(filters: &Filters, key: FilterKey) -> Filters {
    let mut next = filters.clone();
    match key {
        FilterKey::Scope => next.scope = Some(Scope::All),
        FilterKey::Category => next.category = None,
        FilterKey::Availability => next.availability = None,
        FilterKey::Location => next.location = None,
    }
    next
}

/// A caller's membership in one organization, as returned by `GET /api/roles`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub user_id: UserId,
    pub organization_id: OrganizationId,
    pub permission_level: PermissionLevel,
}

impl Role {
    pub fn new(user_id: i64, organization_id: i64, permission_level: PermissionLevel) -> Self {
        Self {
            user_id: UserId::new(user_id),
            organization_id: OrganizationId::new(organization_id),
            permission_level,
        }
    }
}

impl Scope {
    /// Organizations this scope resolves to, in role order.
    ///
    /// `All` resolves to nothing: it places no restriction at all, which is
    /// different from a restricted scope that happens to match no roles.
    pub fn organization_ids(self, roles: &[Role]) -> Vec<OrganizationId> {
        match self {
            Scope::All => Vec::new(),
            Scope::MyOrgs => roles.iter().map(|r| r.organization_id).collect(),
            Scope::Admin => roles
                .iter()
                .filter(|r| r.permission_level.is_admin())
                .map(|r| r.organization_id)
                .collect(),
        }
    }
}
