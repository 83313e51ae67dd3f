//! # Volunteer Core - client-side core of the volunteer coordination app
//!
//! Provides:
//! - Translation of the events page filter state into `/api/events` query
//!   parameters for an API that ANDs everything it receives
//! - Client-side narrowing for the selections the API cannot express
//! - Session hydration from the `session` cookie (decode only, never verify)
//! - A small events API client tying the two together
//!
//! ## Architecture
//!
//! ```text
//!   Filters + Roles ──► translate ──► QueryParams ──► GET /api/events
//!                                                         │
//!                         narrow_events ◄── Vec<Event> ◄──┘
//!
//!   Cookie header ──► resolve_session ──► SessionPayload { user_id }
//! ```
//!
//! The translator and the session decoder are pure and total; neither
//! depends on the other.

// Enforce strict safety at compile time
#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

pub mod api;
pub mod events;
pub mod filters;
pub mod session;
pub mod types;

// Internal utilities
pub mod observability;
pub mod validation;

pub use api::EventsApi;
pub use events::{narrow_events, translate, Event, QueryParams};
pub use filters::{Availability, EventCategory, Filters, PermissionLevel, Role, Scope};
pub use session::{decode_payload, resolve_session, SessionPayload};
pub use types::{Config, Error, Result};
