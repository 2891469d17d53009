use super::FeedFilter;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct FeedQuery {
    pub email: String,
    #[serde(default)]
    pub filter: FeedFilter,
}
