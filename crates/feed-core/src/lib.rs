//! # feed-core: Foundational Types for the Feed Domain Model
//!
//! Defines the closed, string-backed value sets that the feed's domain values
//! carry (action types, handling modes, statuses, visibility, channels,
//! flavours, text types, link types, and the filter helpers).
//!
//! ## Key Design Principles
//!
//! 1. **Closed enums, not bare strings.** Every value set is a Rust enum with
//!    an explicit finite list of variants. Membership is tested at the
//!    boundary through `FromStr` and serde, never deep in business logic.
//!
//! 2. **Wire strings are fixed.** `as_str()`, `Display`, `FromStr` and serde
//!    all agree on the same string for each variant. The JSON schemas in
//!    `schemas/common.schema.json` list exactly these strings.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `feed-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod enums;
pub mod error;

pub use enums::{
    ActionType, BooleanFilter, Channel, Flavour, Handling, Keys, LinkType, Status, TextType,
    Visibility,
};
pub use error::ValueSetError;
