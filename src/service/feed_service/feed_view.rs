use crate::dto::{
    input::FeedFilter,
    output::{FeedKind, FeedNotification},
};

pub fn filter_notifications(notifications: &mut Vec<FeedNotification>, filter: FeedFilter) {
    notifications.retain(|notification| match filter {
        FeedFilter::All => true,
        FeedFilter::Violation => notification.kind == FeedKind::Violation,
        FeedFilter::Vaccine => notification.kind == FeedKind::Vaccination,
        FeedFilter::Unread => !notification.is_read,
        FeedFilter::Read => notification.is_read,
    });
}

///
/// Unread first. The sort is stable so relative order
/// within each group is preserved.
///
pub fn sort_for_display(notifications: &mut [FeedNotification]) {
    notifications.sort_by_key(|notification| notification.is_read);
}

pub fn pending_count(notifications: &[FeedNotification]) -> usize {
    notifications
        .iter()
        .filter(|notification| !notification.is_read)
        .count()
}
