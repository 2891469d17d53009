use crate::{
    dto::{input, output},
    error::Error,
};
use axum::async_trait;
use bson::oid::ObjectId;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeedService: Send + Sync {
    ///
    /// Resolve owner document id from the account email.
    ///
    /// ### Errors
    /// - [Error::OwnerNotExist] when no owner matches the email
    ///
    async fn resolve_owner(&self, email: &str) -> Result<String, Error>;

    ///
    /// Build the notification feed of the owner.
    ///
    /// The feed is rebuilt from the store on every call, nothing is cached
    /// between calls. Items are filtered with `filter` and sorted unread
    /// first; `pending_count` is computed before filtering.
    ///
    /// ### Errors
    /// - [Error::FeedUnavailable] when any fetch fails,
    ///   no partial feed is returned
    ///
    async fn load_feed(
        &self,
        owner_id: &str,
        filter: input::FeedFilter,
    ) -> Result<output::Feed, Error>;

    ///
    /// Mark a single feed item as read.
    ///
    /// Violations flip a single field and are idempotent. Vaccinations
    /// rewrite the whole recipient list of the document.
    ///
    /// ### Errors
    /// - [Error::NotificationNotExist] when
    ///     - the source document does not exist
    ///     - no recipient entry matches the owner-pet pair
    /// - [Error::Persistence] when the store write fails
    ///
    async fn mark_read(
        &self,
        owner_id: &str,
        id: ObjectId,
        kind: output::FeedKind,
        pet_id: &str,
    ) -> Result<(), Error>;
}
