//! # feed-cli: Command-Line Front End for the Feed Model
//!
//! Provides the `feedctl` binary.
//!
//! ## Subcommands
//!
//! - `feedctl validate --kind <kind> <FILE>...`: Validate JSON or YAML
//!   documents as a given element kind (schema and semantic checks).
//! - `feedctl check-schemas`: Compile every schema and verify every element
//!   type is bound to one.
//! - `feedctl link --link-type <TAG> <URL>`: Check a URL against a link type.
//! - `feedctl schemas`: List the available schema identifiers.
//!
//! ```bash
//! feedctl validate --kind item fixtures/item.yaml
//! FEED_SCHEMA_DIR=./schemas feedctl check-schemas
//! ```
//!
//! ## Exit Codes
//!
//! `0` on success, `1` when an input fails validation, `2` on an operational
//! error (unreadable file, missing or broken schema, bad configuration).
//!
//! ## Crate Policy
//!
//! - Argument parsing lives in `main.rs`; handlers take parsed arguments and
//!   an output writer so they can be tested without a process.
//! - Handlers delegate to `feed-model`; no validation logic here.

pub mod config;
pub mod link;
pub mod schemas;
pub mod validate;

use anyhow::{Context, Result};
use feed_schema::{DirectorySchemaSource, SchemaValidator};

use crate::config::CliConfig;

/// Exit code: everything passed.
pub const EXIT_OK: u8 = 0;
/// Exit code: at least one input failed validation.
pub const EXIT_INVALID: u8 = 1;
/// Exit code: the command could not do its job.
pub const EXIT_OPERATIONAL: u8 = 2;

/// Build the schema validator the configuration asks for.
pub fn build_validator(config: &CliConfig) -> Result<SchemaValidator> {
    match &config.schema_dir {
        Some(dir) => {
            let source = DirectorySchemaSource::new(dir)
                .with_context(|| format!("failed to load schemas from {}", dir.display()))?;
            tracing::info!(
                dir = %dir.display(),
                schema_count = feed_schema::SchemaSource::schema_ids(&source).len(),
                "using schema directory"
            );
            Ok(SchemaValidator::new(source))
        }
        None => {
            tracing::debug!("using embedded schemas");
            Ok(SchemaValidator::embedded())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use feed_schema::SchemaSource;

    #[test]
    fn embedded_by_default() {
        let validator = build_validator(&CliConfig::default()).unwrap();
        assert!(validator
            .source()
            .schema_ids()
            .contains(&"item.schema.json".to_string()));
    }

    #[test]
    fn schema_dir_is_used() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("only.schema.json"), r#"{"type":"object"}"#).unwrap();
        let config = CliConfig {
            schema_dir: Some(dir.path().to_path_buf()),
            ..CliConfig::default()
        };
        let validator = build_validator(&config).unwrap();
        assert_eq!(validator.source().schema_ids(), vec!["only.schema.json".to_string()]);
    }

    #[test]
    fn missing_schema_dir_is_an_error() {
        let config = CliConfig {
            schema_dir: Some("/definitely/not/here".into()),
            ..CliConfig::default()
        };
        let err = build_validator(&config).unwrap_err();
        assert!(format!("{err:#}").contains("/definitely/not/here"));
    }
}
