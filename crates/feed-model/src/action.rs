//! # Actions
//!
//! Something a user can do with an item or nudge: open a page, book an
//! appointment, dismiss. Rendered as an icon plus a name.

use feed_core::{ActionType, Handling};
use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::error::FeedError;
use crate::link::Link;

/// Something a user can do with an item or nudge.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Action {
    pub id: String,
    /// Ordering among sibling actions.
    #[serde(deserialize_with = "crate::sequence::deserialize")]
    pub sequence_number: i64,
    /// Label shown to the user.
    pub name: String,
    /// Icon rendered for the action. Its URL must match its link type.
    pub icon: Link,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_type: Option<ActionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handling: Option<Handling>,
    /// Whether a signed-out user may invoke the action.
    pub allow_anonymous: bool,
}

impl Element for Action {
    const SCHEMA_ID: &'static str = "action.schema.json";

    fn check_semantics(&self) -> Result<(), FeedError> {
        Ok(self.icon.validate_url()?)
    }
}
