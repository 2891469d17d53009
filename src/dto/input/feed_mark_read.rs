use crate::dto::output::FeedKind;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct FeedMarkRead {
    pub email: String,
    pub kind: FeedKind,
    ///
    /// Required for vaccination notifications to address
    /// a single recipient entry. Ignored for violations.
    ///
    #[serde(default)]
    pub pet_id: String,
}
