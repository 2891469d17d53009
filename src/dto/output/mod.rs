mod feed;
mod feed_notification;

pub use feed::*;
pub use feed_notification::*;
