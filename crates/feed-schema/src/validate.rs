//! # Runtime Schema Validation
//!
//! Validates JSON documents against the feed's JSON Schema (Draft 2020-12)
//! definitions. Schema documents come from a [`SchemaSource`]; cross-schema
//! `$ref`s (`link.schema.json`, `common.schema.json#/$defs/status`, ...) are
//! resolved from the same source, never from the network.
//!
//! ## Design
//!
//! [`SchemaValidator`] compiles a schema on first use and caches the compiled
//! validator by identifier. Reads go through a `parking_lot::RwLock`; the
//! compile-on-miss path is serialized by a separate fill lock and re-checks
//! the cache after acquiring it, so under concurrent first use each schema is
//! compiled exactly once.
//!
//! Validation reports *every* violation found in a single pass, each with the
//! JSON Pointer of the offending instance location, the schema location that
//! rejected it, and a human-readable message.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use jsonschema::Validator;
use parking_lot::{Mutex, RwLock};
use serde_json::Value;
use thiserror::Error;

use crate::source::{schema_id_from_uri, EmbeddedSchemaSource, SchemaSource};

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors returned by schema loading, compilation and validation.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// The identifier does not resolve to any schema document.
    #[error("schema not found: {0}")]
    NotFound(String),

    /// The schema document exists but could not be read or parsed.
    #[error("failed to load schema {schema_id}: {reason}")]
    Load {
        /// Identifier (or directory) that failed to load.
        schema_id: String,
        /// Human-readable reason for the failure.
        reason: String,
    },

    /// The schema could not be compiled into a validator.
    #[error("failed to compile schema {schema_id}: {reason}")]
    Compile {
        /// The schema identifier.
        schema_id: String,
        /// Human-readable reason.
        reason: String,
    },

    /// The document handed in for validation is not JSON at all.
    #[error("document is not valid JSON (validating against {schema_id}): {reason}")]
    InvalidJson {
        /// The schema the document was to be validated against.
        schema_id: String,
        /// Parser error message.
        reason: String,
    },

    /// The document failed validation against its schema.
    #[error("{} violation(s) against {schema_id}:\n{violations}", .violations.len())]
    ValidationFailed {
        /// The schema that was violated.
        schema_id: String,
        /// Every violation found.
        violations: Violations,
    },

    /// I/O error while reading schema files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A single schema violation with structured context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// JSON Pointer to the violating location in the document.
    pub instance_path: String,
    /// JSON Pointer to the schema keyword that rejected it.
    pub schema_path: String,
    /// Human-readable description of the violation.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "  (root): {}", self.message)
        } else {
            write!(f, "  {}: {}", self.instance_path, self.message)
        }
    }
}

/// The ordered, non-empty list of violations reported for one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violations {
    violations: Vec<Violation>,
}

impl Violations {
    /// Returns the number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns true if there are no violations.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns a slice of all violations.
    pub fn as_slice(&self) -> &[Violation] {
        &self.violations
    }

    /// Iterates over the violations in report order.
    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.violations.iter()
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<Violation> {
        self.violations
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}

// ---------------------------------------------------------------------------
// Schema retriever for $ref resolution
// ---------------------------------------------------------------------------

/// Resolves `$ref` URIs against the validator's schema source.
///
/// Unknown URIs are an error: a reference to a schema the source does not
/// carry is a packaging defect and must fail compilation.
struct SourceRetriever {
    source: Arc<dyn SchemaSource>,
}

impl jsonschema::Retrieve for SourceRetriever {
    fn retrieve(
        &self,
        uri: &jsonschema::Uri<&str>,
    ) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
        let schema_id = schema_id_from_uri(uri.as_str());
        let text = self.source.load(schema_id)?;
        Ok(serde_json::from_str(&text)?)
    }
}

// ---------------------------------------------------------------------------
// SchemaValidator
// ---------------------------------------------------------------------------

/// Compiles and caches feed schemas, and validates documents against them.
///
/// `SchemaValidator` is `Send + Sync`; share one instance (or use
/// [`SchemaValidator::embedded`] through the model crate's default) across
/// threads.
pub struct SchemaValidator {
    source: Arc<dyn SchemaSource>,
    compiled: RwLock<HashMap<String, Arc<Validator>>>,
    fill: Mutex<()>,
    compilations: AtomicUsize,
}

impl fmt::Debug for SchemaValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaValidator")
            .field("source", &self.source)
            .field("cached", &self.compiled.read().len())
            .finish()
    }
}

impl SchemaValidator {
    /// Create a validator over the given schema source. Nothing is compiled
    /// until first use (or [`SchemaValidator::preload`]).
    pub fn new(source: impl SchemaSource + 'static) -> Self {
        Self::from_shared(Arc::new(source))
    }

    /// Create a validator over an already shared schema source.
    pub fn from_shared(source: Arc<dyn SchemaSource>) -> Self {
        Self {
            source,
            compiled: RwLock::new(HashMap::new()),
            fill: Mutex::new(()),
            compilations: AtomicUsize::new(0),
        }
    }

    /// Create a validator over the schemas embedded in the binary.
    pub fn embedded() -> Self {
        Self::new(EmbeddedSchemaSource)
    }

    /// Returns the schema source backing this validator.
    pub fn source(&self) -> &dyn SchemaSource {
        self.source.as_ref()
    }

    /// Number of compiled schemas currently cached.
    pub fn cached_count(&self) -> usize {
        self.compiled.read().len()
    }

    /// Number of schema compilations performed since construction.
    pub fn compilation_count(&self) -> usize {
        self.compilations.load(Ordering::Relaxed)
    }

    /// Returns the compiled validator for `schema_id`, compiling it on miss.
    ///
    /// # Errors
    ///
    /// [`SchemaError::NotFound`] if the source has no such schema,
    /// [`SchemaError::Load`] if it is not JSON, [`SchemaError::Compile`] if it
    /// is not a valid schema or references a schema the source lacks.
    pub fn compiled(&self, schema_id: &str) -> Result<Arc<Validator>, SchemaError> {
        if let Some(hit) = self.compiled.read().get(schema_id) {
            tracing::trace!(schema_id, "schema cache hit");
            return Ok(Arc::clone(hit));
        }

        let _fill = self.fill.lock();
        // Another caller may have filled the entry while we waited.
        if let Some(hit) = self.compiled.read().get(schema_id) {
            return Ok(Arc::clone(hit));
        }

        let validator = Arc::new(self.compile(schema_id)?);
        self.compiled
            .write()
            .insert(schema_id.to_string(), Arc::clone(&validator));
        Ok(validator)
    }

    /// Compile every schema in `schema_ids` up front.
    ///
    /// Intended for startup: a missing or broken schema surfaces here rather
    /// than on the first request that needs it.
    pub fn preload<I, S>(&self, schema_ids: I) -> Result<(), SchemaError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for id in schema_ids {
            self.compiled(id.as_ref())?;
        }
        Ok(())
    }

    /// Validate a parsed JSON value against the schema `schema_id`.
    ///
    /// Returns `Ok(())` if the value is valid, or
    /// [`SchemaError::ValidationFailed`] carrying every violation.
    pub fn validate_value(&self, value: &Value, schema_id: &str) -> Result<(), SchemaError> {
        let validator = self.compiled(schema_id)?;

        let violations: Vec<Violation> = validator
            .iter_errors(value)
            .map(|err| Violation {
                instance_path: err.instance_path.to_string(),
                schema_path: err.schema_path.to_string(),
                message: err.to_string(),
            })
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed {
                schema_id: schema_id.to_string(),
                violations: Violations { violations },
            })
        }
    }

    /// Parse `bytes` as JSON and validate them against `schema_id`.
    ///
    /// On success returns the parsed document so callers can decode it
    /// without parsing twice.
    pub fn validate_bytes(&self, bytes: &[u8], schema_id: &str) -> Result<Value, SchemaError> {
        // Resolve the schema first so a bad identifier is reported as such,
        // whatever the input looks like.
        self.compiled(schema_id)?;

        let value: Value =
            serde_json::from_slice(bytes).map_err(|e| SchemaError::InvalidJson {
                schema_id: schema_id.to_string(),
                reason: e.to_string(),
            })?;
        self.validate_value(&value, schema_id)?;
        Ok(value)
    }

    fn compile(&self, schema_id: &str) -> Result<Validator, SchemaError> {
        let text = self.source.load(schema_id)?;
        let schema: Value = serde_json::from_str(&text).map_err(|e| SchemaError::Load {
            schema_id: schema_id.to_string(),
            reason: format!("invalid JSON: {e}"),
        })?;

        let retriever = SourceRetriever {
            source: Arc::clone(&self.source),
        };

        let validator = jsonschema::options()
            .with_draft(jsonschema::Draft::Draft202012)
            .should_validate_formats(true)
            .with_retriever(retriever)
            .build(&schema)
            .map_err(|e| SchemaError::Compile {
                schema_id: schema_id.to_string(),
                reason: e.to_string(),
            })?;

        self.compilations.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(schema_id, "compiled schema");
        Ok(validator)
    }
}
