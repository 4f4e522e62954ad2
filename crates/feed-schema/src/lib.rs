//! # feed-schema: Schema Sources & Validation
//!
//! Runtime JSON Schema validation for the feed's domain values.
//!
//! ## Responsibilities
//!
//! - **Schema sources** ([`source`]): read-only lookup of a schema document by
//!   identifier. The documents in `schemas/` are embedded in the binary; a
//!   directory on disk can be used instead.
//! - **Validation** ([`validate`]): compile a schema once per identifier,
//!   validate documents against it, and report every violation with its
//!   instance path.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `feed-*` crates.
//! - Schema `$id`s are `https://schemas.feedlib.dev/v1/<file name>`; `$ref`s
//!   are resolved from the schema source only, never fetched.
//! - Errors are returned, never logged and swallowed.

pub mod source;
pub mod validate;

// Re-export primary types.
pub use source::{DirectorySchemaSource, EmbeddedSchemaSource, SchemaSource, SCHEMA_URI_PREFIX};
pub use validate::{SchemaError, SchemaValidator, Violation, Violations};
