use bson::oid::ObjectId;
use serde::Deserialize;

///
/// Stored field names follow the registry data, a malformed or
/// missing field defaults instead of failing the whole find.
///
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Violation {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(rename = "ownerId", default)]
    pub owner_id: String,
    #[serde(rename = "petId", default)]
    pub pet_id: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "violationLocation", default)]
    pub location: String,
    #[serde(rename = "violationTime", default)]
    pub time: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub attachments: Vec<String>,
    #[serde(rename = "isRead", default)]
    pub is_read: bool,
    #[serde(default)]
    pub status: String,
}
