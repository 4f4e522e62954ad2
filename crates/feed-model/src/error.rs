//! # Error Types: The Element Contract's Error Taxonomy
//!
//! Every failure of `validate_and_marshal` / `validate_and_unmarshal` is one
//! of the variants of [`FeedError`]. Callers match on the variant (or on
//! [`FeedError::kind`]) to decide how to present it; the contract itself
//! never logs or retries.

use feed_schema::{SchemaError, Violations};
use thiserror::Error;

use crate::link::LinkError;

/// Errors returned by the element contract.
#[derive(Error, Debug)]
pub enum FeedError {
    /// The document does not conform to the bound schema. Carries every
    /// violation found, not just the first.
    #[error("{} schema violation(s) against {schema_id}:\n{violations}", .violations.len())]
    SchemaViolation {
        /// The schema that was violated.
        schema_id: String,
        /// Every violation found in one pass.
        violations: Violations,
    },

    /// The document passed schema validation but could not be decoded into
    /// the target type. Indicates drift between a schema and its Rust type.
    #[error("decoding a document valid against {schema_id} failed: {source}")]
    Decode {
        /// The schema the document was validated against.
        schema_id: String,
        /// Underlying decoder error.
        #[source]
        source: serde_json::Error,
    },

    /// The in-memory value could not be serialized.
    #[error("encoding a value for {schema_id} failed: {source}")]
    Encode {
        /// The schema the value is bound to.
        schema_id: String,
        /// Underlying encoder error.
        #[source]
        source: serde_json::Error,
    },

    /// A type-specific rule the schema cannot express was broken.
    #[error("semantic validation failed: {0}")]
    SemanticValidation(#[from] LinkError),

    /// The schema identifier does not resolve to a schema document.
    #[error("schema not found: {0}")]
    SchemaNotFound(String),

    /// The input bytes are not JSON.
    #[error("input is not valid JSON (expected a document for {schema_id}): {reason}")]
    InvalidJson {
        /// The schema the input was to be validated against.
        schema_id: String,
        /// Parser error message.
        reason: String,
    },

    /// A schema could not be loaded or compiled.
    #[error("schema error: {0}")]
    Schema(SchemaError),
}

/// Coarse classification of a [`FeedError`], for adapters that translate
/// errors into another protocol's shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    SchemaViolation,
    Decode,
    Encode,
    SemanticValidation,
    SchemaNotFound,
    InvalidJson,
    Schema,
}

impl FeedError {
    /// Returns the classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::SchemaViolation { .. } => ErrorKind::SchemaViolation,
            Self::Decode { .. } => ErrorKind::Decode,
            Self::Encode { .. } => ErrorKind::Encode,
            Self::SemanticValidation(_) => ErrorKind::SemanticValidation,
            Self::SchemaNotFound(_) => ErrorKind::SchemaNotFound,
            Self::InvalidJson { .. } => ErrorKind::InvalidJson,
            Self::Schema(_) => ErrorKind::Schema,
        }
    }

    /// True for errors the caller can fix by changing the input; false for
    /// configuration defects (missing or broken schemas, schema/type drift).
    pub fn is_caller_correctable(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::SchemaViolation | ErrorKind::SemanticValidation | ErrorKind::InvalidJson
        )
    }

    /// Returns the schema violations, if this is a schema violation.
    pub fn violations(&self) -> Option<&Violations> {
        match self {
            Self::SchemaViolation { violations, .. } => Some(violations),
            _ => None,
        }
    }
}

impl From<SchemaError> for FeedError {
    fn from(err: SchemaError) -> Self {
        match err {
            SchemaError::ValidationFailed {
                schema_id,
                violations,
            } => Self::SchemaViolation {
                schema_id,
                violations,
            },
            SchemaError::NotFound(id) => Self::SchemaNotFound(id),
            SchemaError::InvalidJson { schema_id, reason } => {
                Self::InvalidJson { schema_id, reason }
            }
            other => Self::Schema(other),
        }
    }
}
