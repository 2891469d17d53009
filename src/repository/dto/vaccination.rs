use bson::{oid::ObjectId, Document};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Vaccination {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(rename = "vaccineType", default)]
    pub vaccine_type: String,
    #[serde(rename = "vaccineLocation", default)]
    pub location: String,
    #[serde(rename = "timeFrom", default)]
    pub time_from: String,
    #[serde(rename = "timeTo", default)]
    pub time_to: String,
    #[serde(default)]
    pub cost: Option<f64>,
    #[serde(default)]
    pub notes: String,
    #[serde(rename = "senderTo", default)]
    pub recipients: Vec<VaccinationRecipient>,
}

///
/// One senderTo entry. userId is the composite key "{ownerId}|{petId}".
/// Fields this service does not model are kept in `extra` so that
/// replacing the whole array does not drop them.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaccinationRecipient {
    #[serde(rename = "userId", default)]
    pub user_id: String,
    #[serde(default)]
    pub status: String,
    #[serde(rename = "isRead", default)]
    pub is_read: bool,
    #[serde(flatten)]
    pub extra: Document,
}
