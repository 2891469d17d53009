use super::{
    dto::{Pet, Vaccination, VaccinationRecipient, Violation},
    error::Error,
};
use axum::async_trait;
use bson::oid::ObjectId;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeedRepository: Send + Sync {
    ///
    /// Finds id of the owner document with matching email.
    ///
    async fn find_owner_id(&self, email: &str) -> Result<Option<String>, Error>;

    ///
    /// Finds all pets belonging to the owner.
    ///
    async fn find_pets(&self, owner_id: &str) -> Result<Vec<Pet>, Error>;

    ///
    /// Finds all violation records of the owner,
    /// regardless of their status.
    ///
    async fn find_violations(&self, owner_id: &str) -> Result<Vec<Violation>, Error>;

    ///
    /// Finds vaccinations with at least one recipient entry still pending.
    /// Per-recipient eligibility is the caller's concern.
    ///
    async fn find_pending_vaccinations(&self) -> Result<Vec<Vaccination>, Error>;

    async fn find_vaccination(&self, id: ObjectId) -> Result<Option<Vaccination>, Error>;

    ///
    /// Sets isRead of the violation to true.
    ///
    /// ### Errors
    /// - [Error::NoDocumentUpdated] when violation does not exist
    ///
    async fn update_violation_read(&self, id: ObjectId) -> Result<(), Error>;

    ///
    /// Replaces the whole senderTo array of the vaccination.
    ///
    /// ### Errors
    /// - [Error::NoDocumentUpdated] when vaccination does not exist
    ///
    async fn replace_vaccination_recipients(
        &self,
        id: ObjectId,
        recipients: &[VaccinationRecipient],
    ) -> Result<(), Error>;
}
