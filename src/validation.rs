//! Input validation utilities.

use serde::de::DeserializeOwned;

use crate::types::{Error, Result};

/// Validate that a string is not blank.
pub fn validate_non_empty(s: &str, field: &str) -> Result<()> {
    if s.trim().is_empty() {
        return Err(Error::validation(format!("{} cannot be empty", field)));
    }
    Ok(())
}

/// Parse a JSON argument, naming the offending field on failure.
pub fn parse_json_arg<T: DeserializeOwned>(raw: &str, field: &str) -> Result<T> {
    serde_json::from_str(raw).map_err(|e| Error::validation(format!("{}: {}", field, e)))
}
