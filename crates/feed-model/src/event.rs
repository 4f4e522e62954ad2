//! Feed events: something happened, to whom, and with what data.

use chrono::{DateTime, Utc};
use feed_core::Flavour;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::element::Element;

/// Who raised an event, where, and when.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Context {
    /// Id of the user the event concerns.
    #[serde(rename = "userID")]
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flavour: Option<Flavour>,
    #[serde(rename = "organizationID")]
    pub organization_id: String,
    #[serde(rename = "locationID")]
    pub location_id: String,
    pub timestamp: DateTime<Utc>,
}

impl Element for Context {
    const SCHEMA_ID: &'static str = "context.schema.json";
}

/// Free-form event data. Must carry at least one entry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Payload {
    pub data: Map<String, Value>,
}

impl Payload {
    /// A payload holding a single entry.
    pub fn with_entry(key: impl Into<String>, value: impl Into<Value>) -> Self {
        let mut data = Map::new();
        data.insert(key.into(), value.into());
        Self { data }
    }
}

impl Element for Payload {
    const SCHEMA_ID: &'static str = "payload.schema.json";
}

/// A named occurrence in the feed, with its context and data.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Event {
    pub id: String,
    /// Event name, e.g. `ITEM_VIEWED`.
    pub name: String,
    pub context: Context,
    pub payload: Payload,
}

impl Element for Event {
    const SCHEMA_ID: &'static str = "event.schema.json";
}
