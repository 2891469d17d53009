use crate::repository;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("owner not exist")]
    OwnerNotExist,

    #[error("notification not exist")]
    NotificationNotExist,

    ///
    /// Any fetch failure while building the feed.
    /// The whole load is aborted, no partial feed is returned.
    ///
    #[error("unable to load feed: {0}")]
    FeedUnavailable(#[source] repository::Error),

    #[error("unable to update read state: {0}")]
    Persistence(#[source] repository::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::warn!(err = %self);

        match self {
            Error::OwnerNotExist => StatusCode::NOT_FOUND,
            Error::NotificationNotExist => StatusCode::NOT_FOUND,
            Error::FeedUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
        .into_response()
    }
}
