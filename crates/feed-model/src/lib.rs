//! # feed-model: Feed Domain Values and the Element Contract
//!
//! The nine values exchanged by the feed: [`Item`], [`Nudge`], [`Action`],
//! [`Link`], [`Message`], [`Context`], [`Payload`], [`Event`] and
//! [`NotificationBody`]. Each is bound to a JSON Schema in `schemas/` and
//! implements [`Element`], the only sanctioned way in and out of JSON.
//!
//! ## Key Design Principles
//!
//! 1. **Validate at the boundary.** Decoding validates the raw document
//!    against the schema before touching the target; encoding validates the
//!    produced bytes before returning them. An unpopulated value cannot be
//!    marshalled.
//!
//! 2. **Schema first, then semantics.** Rules JSON Schema cannot express
//!    (a link URL must match its link type) run as code after the schema
//!    check. See [`link`].
//!
//! 3. **Report everything.** Schema failures carry every violation with its
//!    JSON path, so a caller can fix a document in one round.
//!
//! ## Crate Policy
//!
//! - Depends on `feed-core` (value sets) and `feed-schema` (validation).
//! - No `panic!()` or `.unwrap()` outside tests.
//! - No I/O beyond what the schema source does.

pub mod action;
pub mod element;
pub mod error;
pub mod event;
pub mod item;
pub mod kind;
pub mod link;
pub mod message;
pub mod notification;
pub mod nudge;
mod sequence;

pub use action::Action;
pub use element::{
    decode_validated, default_validator, validate_and_marshal, validate_and_marshal_with,
    validate_and_unmarshal, validate_and_unmarshal_with, verify_bindings, Element,
};
pub use error::{ErrorKind, FeedError};
pub use event::{Context, Event, Payload};
pub use item::Item;
pub use kind::ElementKind;
pub use link::{
    validate_link_tag, validate_link_url, Link, LinkError, BLANK_IMAGE_URL, LOGO_URL,
    SAMPLE_VIDEO_URL,
};
pub use message::Message;
pub use notification::NotificationBody;
pub use nudge::Nudge;
