//! # Feed Items
//!
//! An [`Item`] is one card in a user's feed. Besides its own text it carries
//! links, actions and a conversation, each of which must be valid on its own
//! terms: the schema checks their shape, and [`Element::check_semantics`]
//! checks every link URL against its link type.

use chrono::{DateTime, Utc};
use feed_core::{Channel, Status, TextType, Visibility};
use serde::{Deserialize, Serialize};

use crate::action::Action;
use crate::element::Element;
use crate::error::FeedError;
use crate::link::Link;
use crate::message::Message;

/// A feed item: one card in a user's feed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    /// Position of the item in the feed.
    #[serde(deserialize_with = "crate::sequence::deserialize")]
    pub sequence_number: i64,
    /// When the item drops out of the feed.
    pub expiry: DateTime<Utc>,
    /// Persistent items stay in the feed after they are acted on.
    pub persistent: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
    pub icon: Link,
    pub author: String,
    pub tagline: String,
    pub label: String,
    /// When the item was created.
    pub timestamp: DateTime<Utc>,
    pub summary: String,
    /// Body text, in the markup named by `text_type`.
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_type: Option<TextType>,
    pub links: Vec<Link>,
    pub actions: Vec<Action>,
    pub conversations: Vec<Message>,
    /// Ids of the users the item is addressed to.
    pub users: Vec<String>,
    /// Ids of the groups the item is addressed to.
    pub groups: Vec<String>,
    /// Channels to notify on. No duplicates.
    pub notification_channels: Vec<Channel>,
}

impl Element for Item {
    const SCHEMA_ID: &'static str = "item.schema.json";

    fn check_semantics(&self) -> Result<(), FeedError> {
        self.icon.validate_url()?;
        for link in &self.links {
            link.validate_url()?;
        }
        for action in &self.actions {
            action.check_semantics()?;
        }
        Ok(())
    }
}
