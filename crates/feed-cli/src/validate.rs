//! # Validate Subcommand
//!
//! Runs the full unmarshal checks of an element kind over documents on
//! disk. Files ending in `.yaml` or `.yml` are read as YAML and converted to
//! JSON first; everything else is read as JSON bytes unchanged.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use feed_model::{ElementKind, FeedError};
use feed_schema::SchemaValidator;

use crate::{EXIT_INVALID, EXIT_OK, EXIT_OPERATIONAL};

/// Arguments for the `feedctl validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Element kind of the documents: item, nudge, action, link, message,
    /// context, payload, event or notification_body.
    #[arg(long, short)]
    pub kind: ElementKind,

    /// Documents to validate.
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,
}

/// Outcome of validating one file.
#[derive(Debug)]
pub enum FileOutcome {
    Valid,
    /// The document was read and rejected.
    Invalid(FeedError),
    /// The document could not be checked at all.
    Error(anyhow::Error),
}

/// Execute the validate subcommand, writing one line per file to `out`.
pub fn run_validate(
    args: &ValidateArgs,
    validator: &SchemaValidator,
    out: &mut impl Write,
) -> Result<u8> {
    let mut invalid = 0usize;
    let mut errors = 0usize;

    for path in &args.files {
        match validate_file(validator, args.kind, path) {
            FileOutcome::Valid => writeln!(out, "OK: {}", path.display())?,
            FileOutcome::Invalid(e) => {
                invalid += 1;
                writeln!(out, "FAIL: {}: {e}", path.display())?;
            }
            FileOutcome::Error(e) => {
                errors += 1;
                writeln!(out, "ERROR: {}: {e:#}", path.display())?;
            }
        }
    }

    let total = args.files.len();
    writeln!(
        out,
        "{}: {}/{} passed",
        args.kind,
        total - invalid - errors,
        total
    )?;
    tracing::info!(kind = %args.kind, total, invalid, errors, "validation finished");

    Ok(if errors > 0 {
        EXIT_OPERATIONAL
    } else if invalid > 0 {
        EXIT_INVALID
    } else {
        EXIT_OK
    })
}

/// Validate the document at `path` as `kind`.
pub fn validate_file(validator: &SchemaValidator, kind: ElementKind, path: &Path) -> FileOutcome {
    let bytes = match read_document(path) {
        Ok(bytes) => bytes,
        Err(e) => return FileOutcome::Error(e),
    };
    match kind.check(validator, &bytes) {
        Ok(()) => FileOutcome::Valid,
        Err(e) if e.is_caller_correctable() => FileOutcome::Invalid(e),
        Err(e) => FileOutcome::Error(e.into()),
    }
}

/// Read a document, converting YAML to JSON bytes.
pub fn read_document(path: &Path) -> Result<Vec<u8>> {
    let raw = std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    if !is_yaml(path) {
        return Ok(raw);
    }
    let value: serde_json::Value = serde_yaml::from_slice(&raw)
        .with_context(|| format!("{} is not valid YAML", path.display()))?;
    Ok(serde_json::to_vec(&value)?)
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"))
}
