//! Core types for volunteer-core.
//!
//! This module provides foundational types used throughout the crate:
//! - **IDs**: Strongly-typed integer identifiers (UserId, OrganizationId, EventId)
//! - **Errors**: Application error types with thiserror derives
//! - **Config**: Configuration structures for the API client, session, and logging

mod config;
mod errors;
mod ids;

pub use config::{ApiConfig, Config, ObservabilityConfig, SessionConfig};
pub use errors::{Error, Result};
pub use ids::{EventId, OrganizationId, UserId};
