//! # The Element Contract
//!
//! Every domain type implements [`Element`]: it is bound to one schema
//! document and can only cross the JSON boundary through
//! [`Element::validate_and_unmarshal`] and [`Element::validate_and_marshal`].
//!
//! ## Unmarshal
//!
//! 1. Resolve the compiled schema (compiled once, then cached).
//! 2. Parse the bytes. Non-JSON input is [`FeedError::InvalidJson`].
//! 3. Validate against the schema, collecting every violation.
//! 4. Decode into a fresh value.
//! 5. Run the type's semantic checks.
//! 6. Only then overwrite the target.
//!
//! A failure at any step leaves the target exactly as it was.
//!
//! ## Marshal
//!
//! Serialize, validate the produced bytes against the schema, run the
//! semantic checks, and hand back the bytes. The default (zero) value of
//! every type with required fields fails here, so an unpopulated value
//! never reaches the wire.
//!
//! The free functions take the schema identifier explicitly and accept any
//! element, so a value can be checked against a schema other than its own
//! binding. The `*_with` variants take an explicit [`SchemaValidator`]; the
//! rest share one process-wide validator over the embedded schemas.

use std::sync::OnceLock;

use feed_schema::SchemaValidator;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::FeedError;
use crate::kind::ElementKind;

/// A domain value bound to a JSON Schema.
pub trait Element: Serialize + DeserializeOwned {
    /// Identifier of the schema this type is bound to.
    const SCHEMA_ID: &'static str;

    /// Rules the schema cannot express. Runs after schema validation on
    /// both directions. The default has none.
    fn check_semantics(&self) -> Result<(), FeedError> {
        Ok(())
    }

    /// Validate `bytes` against this type's schema and, if everything
    /// passes, replace `self` with the decoded value.
    fn validate_and_unmarshal(&mut self, bytes: &[u8]) -> Result<(), FeedError> {
        validate_and_unmarshal(Self::SCHEMA_ID, bytes, self)
    }

    /// Serialize `self` and validate the result against this type's schema.
    fn validate_and_marshal(&self) -> Result<Vec<u8>, FeedError> {
        validate_and_marshal(Self::SCHEMA_ID, self)
    }

    /// Decode a new value from `bytes`, with the same checks as
    /// [`Element::validate_and_unmarshal`].
    fn from_validated_json(bytes: &[u8]) -> Result<Self, FeedError> {
        decode_validated(default_validator(), Self::SCHEMA_ID, bytes)
    }
}

/// The process-wide validator over the embedded schemas. Built on first use.
pub fn default_validator() -> &'static SchemaValidator {
    static DEFAULT: OnceLock<SchemaValidator> = OnceLock::new();
    DEFAULT.get_or_init(SchemaValidator::embedded)
}

/// Validate `bytes` against `schema_id` and decode them into `target`.
///
/// `target` is untouched unless every check passes.
pub fn validate_and_unmarshal<T: Element>(
    schema_id: &str,
    bytes: &[u8],
    target: &mut T,
) -> Result<(), FeedError> {
    validate_and_unmarshal_with(default_validator(), schema_id, bytes, target)
}

/// [`validate_and_unmarshal`] against an explicit validator.
pub fn validate_and_unmarshal_with<T: Element>(
    validator: &SchemaValidator,
    schema_id: &str,
    bytes: &[u8],
    target: &mut T,
) -> Result<(), FeedError> {
    *target = decode_validated(validator, schema_id, bytes)?;
    Ok(())
}

/// Serialize `element` and validate the bytes against `schema_id`.
pub fn validate_and_marshal<T: Element>(schema_id: &str, element: &T) -> Result<Vec<u8>, FeedError> {
    validate_and_marshal_with(default_validator(), schema_id, element)
}

/// [`validate_and_marshal`] against an explicit validator.
pub fn validate_and_marshal_with<T: Element>(
    validator: &SchemaValidator,
    schema_id: &str,
    element: &T,
) -> Result<Vec<u8>, FeedError> {
    let bytes = serde_json::to_vec(element).map_err(|source| FeedError::Encode {
        schema_id: schema_id.to_string(),
        source,
    })?;
    validator.validate_bytes(&bytes, schema_id)?;
    element.check_semantics()?;
    Ok(bytes)
}

/// Validate `bytes` against `schema_id`, decode them, and run the semantic
/// checks of `T`.
pub fn decode_validated<T: Element>(
    validator: &SchemaValidator,
    schema_id: &str,
    bytes: &[u8],
) -> Result<T, FeedError> {
    let document = validator.validate_bytes(bytes, schema_id)?;
    let value: T = serde_json::from_value(document).map_err(|source| FeedError::Decode {
        schema_id: schema_id.to_string(),
        source,
    })?;
    value.check_semantics()?;
    Ok(value)
}

/// Compile the schema of every element kind.
///
/// Run at startup to turn a missing or broken schema into an immediate
/// error rather than a failure on first use.
pub fn verify_bindings(validator: &SchemaValidator) -> Result<(), FeedError> {
    validator.preload(ElementKind::all().iter().map(|kind| kind.schema_id()))?;
    tracing::debug!(
        count = ElementKind::all().len(),
        "element schema bindings verified"
    );
    Ok(())
}
