//! # Schema Sources
//!
//! A [`SchemaSource`] maps a schema identifier (the schema's file name, e.g.
//! `item.schema.json`) to the raw JSON Schema document. Sources are read-only
//! once constructed; the validator never writes to them.
//!
//! Two implementations ship with the crate:
//!
//! - [`EmbeddedSchemaSource`]: the documents in the repository's `schemas/`
//!   directory, compiled into the binary. This is what the process-wide
//!   default validator uses.
//! - [`DirectorySchemaSource`]: every `*.schema.json` file of a directory,
//!   read once at construction. Useful for shipping schema updates without a
//!   rebuild.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::validate::SchemaError;

/// URI prefix of every feed schema `$id`.
pub const SCHEMA_URI_PREFIX: &str = "https://schemas.feedlib.dev/v1/";

/// Read-only lookup of schema documents by identifier.
pub trait SchemaSource: Send + Sync + fmt::Debug {
    /// Returns the JSON text of the schema named `schema_id`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::NotFound`] if the source has no such schema.
    fn load(&self, schema_id: &str) -> Result<String, SchemaError>;

    /// Returns every identifier this source can resolve, sorted.
    fn schema_ids(&self) -> Vec<String>;
}

const EMBEDDED_SCHEMAS: &[(&str, &str)] = &[
    (
        "action.schema.json",
        include_str!("../../../schemas/action.schema.json"),
    ),
    (
        "common.schema.json",
        include_str!("../../../schemas/common.schema.json"),
    ),
    (
        "context.schema.json",
        include_str!("../../../schemas/context.schema.json"),
    ),
    (
        "event.schema.json",
        include_str!("../../../schemas/event.schema.json"),
    ),
    (
        "item.schema.json",
        include_str!("../../../schemas/item.schema.json"),
    ),
    (
        "link.schema.json",
        include_str!("../../../schemas/link.schema.json"),
    ),
    (
        "message.schema.json",
        include_str!("../../../schemas/message.schema.json"),
    ),
    (
        "notification_body.schema.json",
        include_str!("../../../schemas/notification_body.schema.json"),
    ),
    (
        "nudge.schema.json",
        include_str!("../../../schemas/nudge.schema.json"),
    ),
    (
        "payload.schema.json",
        include_str!("../../../schemas/payload.schema.json"),
    ),
];

/// Schemas compiled into the binary from the repository's `schemas/` directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSchemaSource;

impl SchemaSource for EmbeddedSchemaSource {
    fn load(&self, schema_id: &str) -> Result<String, SchemaError> {
        EMBEDDED_SCHEMAS
            .iter()
            .find(|(name, _)| *name == schema_id)
            .map(|(_, text)| (*text).to_string())
            .ok_or_else(|| SchemaError::NotFound(schema_id.to_string()))
    }

    fn schema_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = EMBEDDED_SCHEMAS
            .iter()
            .map(|(name, _)| (*name).to_string())
            .collect();
        ids.sort();
        ids
    }
}

/// Schemas read from a directory on disk.
///
/// All `*.schema.json` files directly inside the directory are read and
/// checked to be well-formed JSON at construction time, so a broken schema
/// file is reported at startup instead of at first use.
pub struct DirectorySchemaSource {
    dir: PathBuf,
    schemas: HashMap<String, String>,
}

impl fmt::Debug for DirectorySchemaSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectorySchemaSource")
            .field("dir", &self.dir)
            .field("schema_count", &self.schemas.len())
            .finish()
    }
}

impl DirectorySchemaSource {
    /// Load every `*.schema.json` file in `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Load`] if the directory cannot be read or any
    /// schema file is not valid JSON.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, SchemaError> {
        let dir = dir.into();
        let entries = std::fs::read_dir(&dir).map_err(|e| SchemaError::Load {
            schema_id: dir.display().to_string(),
            reason: format!("cannot read schema directory: {e}"),
        })?;

        let mut schemas = HashMap::new();
        for entry in entries {
            let path = entry?.path();
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if !name.ends_with(".schema.json") || !path.is_file() {
                continue;
            }

            let content = std::fs::read_to_string(&path)?;
            serde_json::from_str::<serde_json::Value>(&content).map_err(|e| {
                SchemaError::Load {
                    schema_id: name.to_string(),
                    reason: format!("invalid JSON: {e}"),
                }
            })?;
            schemas.insert(name.to_string(), content);
        }

        Ok(Self { dir, schemas })
    }

    /// Returns the directory the schemas were read from.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl SchemaSource for DirectorySchemaSource {
    fn load(&self, schema_id: &str) -> Result<String, SchemaError> {
        self.schemas
            .get(schema_id)
            .cloned()
            .ok_or_else(|| SchemaError::NotFound(schema_id.to_string()))
    }

    fn schema_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.schemas.keys().cloned().collect();
        ids.sort();
        ids
    }
}

/// Maps a `$ref` URI back to the schema identifier it names.
///
/// `https://schemas.feedlib.dev/v1/link.schema.json#/$defs/x` and
/// `link.schema.json` both map to `link.schema.json`.
pub(crate) fn schema_id_from_uri(uri: &str) -> &str {
    let without_fragment = uri.split('#').next().unwrap_or(uri);
    let trimmed = without_fragment
        .strip_prefix(SCHEMA_URI_PREFIX)
        .unwrap_or(without_fragment);
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}
