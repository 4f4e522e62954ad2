//! Nudges: prompts that ask the user to do something.

use chrono::{DateTime, Utc};
use feed_core::{Channel, Status, Visibility};
use serde::{Deserialize, Serialize};

use crate::action::Action;
use crate::element::Element;
use crate::error::FeedError;
use crate::link::Link;
use crate::notification::NotificationBody;

/// A prompt that asks the user to do something and offers actions to do it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Nudge {
    pub id: String,
    /// Position of the nudge among the user's nudges.
    #[serde(deserialize_with = "crate::sequence::deserialize")]
    pub sequence_number: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    /// When the nudge lapses. `None` never expires.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry: Option<DateTime<Utc>>,
    pub title: String,
    pub links: Vec<Link>,
    pub text: String,
    pub actions: Vec<Action>,
    /// Ids of the groups the nudge is addressed to.
    pub groups: Vec<String>,
    /// Ids of the users the nudge is addressed to.
    pub users: Vec<String>,
    /// Channels to notify on. No duplicates.
    pub notification_channels: Vec<Channel>,
    pub notification_body: NotificationBody,
}

impl Element for Nudge {
    const SCHEMA_ID: &'static str = "nudge.schema.json";

    fn check_semantics(&self) -> Result<(), FeedError> {
        for link in &self.links {
            link.validate_url()?;
        }
        for action in &self.actions {
            action.check_semantics()?;
        }
        Ok(())
    }
}
