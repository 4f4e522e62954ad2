//! # Error Types
//!
//! Errors raised when a string does not belong to one of the closed value
//! sets in [`crate::enums`].

use thiserror::Error;

/// A value was rejected by a closed value set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueSetError {
    /// The string is not one of the enumerated wire values.
    #[error("{value} is not a valid {kind}")]
    UnknownVariant {
        /// Name of the value set, e.g. `"Status"`.
        kind: &'static str,
        /// The rejected input.
        value: String,
    },
}
