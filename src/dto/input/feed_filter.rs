use serde::Deserialize;

///
/// Feed filters are mutually exclusive, exactly one is active at a time.
///
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedFilter {
    #[default]
    All,
    Violation,
    Vaccine,
    Unread,
    Read,
}
