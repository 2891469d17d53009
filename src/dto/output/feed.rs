use super::FeedNotification;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Feed {
    ///
    /// Count of unread items in the whole feed,
    /// computed before the active filter is applied
    ///
    pub pending_count: usize,
    pub notifications: Vec<FeedNotification>,
}
