//! # Schema Subcommands
//!
//! `feedctl schemas` lists what the configured source carries;
//! `feedctl check-schemas` compiles all of it.

use std::io::Write;

use anyhow::Result;

use feed_model::{verify_bindings, ElementKind};
use feed_schema::SchemaValidator;

use crate::{EXIT_OK, EXIT_OPERATIONAL};

/// List every schema identifier, marking the ones bound to an element kind.
pub fn run_schemas(validator: &SchemaValidator, out: &mut impl Write) -> Result<u8> {
    for id in validator.source().schema_ids() {
        match ElementKind::all().iter().find(|k| k.schema_id() == id) {
            Some(kind) => writeln!(out, "{id}\t{kind}")?,
            None => writeln!(out, "{id}")?,
        }
    }
    Ok(EXIT_OK)
}

/// Compile every schema of the source, then check that every element kind
/// resolves to one.
pub fn run_check_schemas(validator: &SchemaValidator, out: &mut impl Write) -> Result<u8> {
    let ids = validator.source().schema_ids();
    let mut compiled = 0usize;

    for id in &ids {
        match validator.compiled(id) {
            Ok(_) => {
                compiled += 1;
                writeln!(out, "OK: {id}")?;
            }
            Err(e) => writeln!(out, "FAIL: {id}: {e}")?,
        }
    }

    let bindings_ok = match verify_bindings(validator) {
        Ok(()) => true,
        Err(e) => {
            writeln!(out, "FAIL: element bindings: {e}")?;
            false
        }
    };

    writeln!(out, "Schemas: {compiled}/{} compiled", ids.len())?;
    Ok(if compiled == ids.len() && bindings_ok {
        EXIT_OK
    } else {
        EXIT_OPERATIONAL
    })
}
