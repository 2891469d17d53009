mod feed_filter;
mod feed_mark_read;
mod feed_query;

pub use feed_filter::*;
pub use feed_mark_read::*;
pub use feed_query::*;
