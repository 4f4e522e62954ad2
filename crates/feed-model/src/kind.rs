//! Runtime names for the element types, for callers (the CLI, adapters)
//! that pick the type from a string.

use std::fmt;
use std::str::FromStr;

use feed_core::ValueSetError;
use feed_schema::SchemaValidator;

use crate::element::{decode_validated, Element};
use crate::error::FeedError;
use crate::{Action, Context, Event, Item, Link, Message, NotificationBody, Nudge, Payload};

/// One of the nine element types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Item,
    Nudge,
    Action,
    Link,
    Message,
    Context,
    Payload,
    Event,
    NotificationBody,
}

impl ElementKind {
    /// Returns every element kind.
    pub fn all() -> &'static [ElementKind] {
        &[
            Self::Item,
            Self::Nudge,
            Self::Action,
            Self::Link,
            Self::Message,
            Self::Context,
            Self::Payload,
            Self::Event,
            Self::NotificationBody,
        ]
    }

    /// Returns the snake_case name used on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Item => "item",
            Self::Nudge => "nudge",
            Self::Action => "action",
            Self::Link => "link",
            Self::Message => "message",
            Self::Context => "context",
            Self::Payload => "payload",
            Self::Event => "event",
            Self::NotificationBody => "notification_body",
        }
    }

    /// Returns the identifier of the schema this kind is bound to.
    pub fn schema_id(&self) -> &'static str {
        match self {
            Self::Item => Item::SCHEMA_ID,
            Self::Nudge => Nudge::SCHEMA_ID,
            Self::Action => Action::SCHEMA_ID,
            Self::Link => Link::SCHEMA_ID,
            Self::Message => Message::SCHEMA_ID,
            Self::Context => Context::SCHEMA_ID,
            Self::Payload => Payload::SCHEMA_ID,
            Self::Event => Event::SCHEMA_ID,
            Self::NotificationBody => NotificationBody::SCHEMA_ID,
        }
    }

    /// Run the full unmarshal checks of this kind over `bytes`, discarding
    /// the decoded value.
    pub fn check(&self, validator: &SchemaValidator, bytes: &[u8]) -> Result<(), FeedError> {
        let id = self.schema_id();
        match self {
            Self::Item => decode_validated::<Item>(validator, id, bytes).map(drop),
            Self::Nudge => decode_validated::<Nudge>(validator, id, bytes).map(drop),
            Self::Action => decode_validated::<Action>(validator, id, bytes).map(drop),
            Self::Link => decode_validated::<Link>(validator, id, bytes).map(drop),
            Self::Message => decode_validated::<Message>(validator, id, bytes).map(drop),
            Self::Context => decode_validated::<Context>(validator, id, bytes).map(drop),
            Self::Payload => decode_validated::<Payload>(validator, id, bytes).map(drop),
            Self::Event => decode_validated::<Event>(validator, id, bytes).map(drop),
            Self::NotificationBody => {
                decode_validated::<NotificationBody>(validator, id, bytes).map(drop)
            }
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementKind {
    type Err = ValueSetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .find(|kind| kind.as_str() == s)
            .copied()
            .ok_or_else(|| ValueSetError::UnknownVariant {
                kind: "ElementKind",
                value: s.to_string(),
            })
    }
}
