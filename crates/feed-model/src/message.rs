//! Conversation messages attached to feed items.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::element::Element;

/// A message in the conversation attached to an item.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    /// Position of the message in its conversation.
    #[serde(deserialize_with = "crate::sequence::deserialize")]
    pub sequence_number: i64,
    pub text: String,
    /// Id of the message this one replies to. Empty for a new thread.
    pub reply_to: String,
    /// Id of the author.
    #[serde(rename = "postedByUID")]
    pub posted_by_uid: String,
    /// Display name of the author at posting time.
    pub posted_by_name: String,
    pub timestamp: DateTime<Utc>,
}

impl Element for Message {
    const SCHEMA_ID: &'static str = "message.schema.json";
}
