use serde::{Deserialize, Serialize};
use strum::AsRefStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FeedKind {
    Violation,
    Vaccination,
}

///
/// One unified feed item. Derived on every load, never persisted
/// in this shape.
///
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedNotification {
    ///
    /// Hex id of the source document
    ///
    pub id: String,
    pub kind: FeedKind,
    pub pet_id: String,
    ///
    /// Resolved at aggregation time, never absent;
    /// falls back to a fixed "unknown" placeholder
    ///
    pub pet_name: String,
    pub is_read: bool,
    #[serde(flatten)]
    pub details: FeedNotificationDetails,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FeedNotificationDetails {
    Violation {
        description: String,
        location: String,
        time: String,
        notes: String,
        attachments: Vec<String>,
    },
    Vaccination {
        vaccine_type: String,
        location: String,
        time_from: String,
        time_to: String,
        cost: Option<f64>,
        notes: String,
    },
}
