//! Per-state notification texts of a nudge.

use serde::{Deserialize, Serialize};

use crate::element::Element;

/// Messages sent to a nudge's audience as the nudge changes state.
///
/// Every message is optional, so the default value is valid. An empty
/// message means no notification is sent for that transition.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NotificationBody {
    /// Sent when the nudge is published.
    pub publish_message: String,
    /// Sent when the nudge is deleted.
    pub delete_message: String,
    /// Sent when the nudge is marked done.
    pub resolve_message: String,
    /// Sent when a done nudge is reopened.
    pub unresolve_message: String,
    /// Sent when the nudge is shown again.
    pub show_message: String,
    /// Sent when the nudge is hidden.
    pub hide_message: String,
}

impl Element for NotificationBody {
    const SCHEMA_ID: &'static str = "notification_body.schema.json";
}
