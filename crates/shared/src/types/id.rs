//! Typed IDs for type-safe entity references.
//!
//! Source tables key their rows by plain integers. Wrapping them keeps a
//! `UserId` from being joined against the hierarchy table by accident.

use serde::{Deserialize, Serialize};

/// Macro to generate typed ID wrappers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            /// Creates an ID from its raw integer value.
            #[must_use]
            pub const fn new(raw: i64) -> Self {
                Self(raw)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

typed_id!(HierarchyId, "Unique identifier for a business hierarchy unit (department).");
typed_id!(TransactionId, "Unique identifier for a loan origination case.");
typed_id!(UserId, "Unique identifier for a user.");

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
