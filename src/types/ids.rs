//! Strongly-typed identifiers.
//!
//! The API uses integer primary keys everywhere; these newtypes keep a user
//! id from being passed where an organization id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to define an integer ID newtype wrapper.
///
/// Generates: struct, `new()`, `get()`, Display, From<i64>, transparent serde.
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_id!(UserId);
define_id!(OrganizationId);
define_id!(EventId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_serializes_as_bare_integer() {
        let id = OrganizationId::new(20);
        assert_eq!(serde_json::to_string(&id).unwrap(), "20");
        let back: OrganizationId = serde_json::from_str("20").unwrap();
        assert_eq!(back, id);
        assert_eq!(id.to_string(), "20");
    }
}
