use super::{
    dto::{Pet, Vaccination, VaccinationRecipient, Violation},
    Error, FeedRepository,
};
use axum::async_trait;
use bson::{doc, oid::ObjectId, Document};
use futures_util::TryStreamExt;
use mongodb::{options::IndexOptions, Collection, Database, IndexModel};

const OWNERS: &str = "owners";
const PETS: &str = "pets";
const VIOLATIONS: &str = "violations";
const VACCINATIONS: &str = "vaccinations";

const INDEX_NAME_OWNER_EMAIL: &str = "index_owner_email";
const INDEX_NAME_PET_OWNER_ID: &str = "index_pet_owner_id";
const INDEX_NAME_VIOLATION_OWNER_ID: &str = "index_violation_owner_id";

const PENDING: &str = "Pending";

pub struct FeedRepositoryImpl {
    database: Database,
}

impl FeedRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        database.create_collection(OWNERS).await?;
        database.create_collection(PETS).await?;
        database.create_collection(VIOLATIONS).await?;
        database.create_collection(VACCINATIONS).await?;

        let owners = database.collection::<Document>(OWNERS);
        if !owners
            .list_index_names()
            .await?
            .contains(&INDEX_NAME_OWNER_EMAIL.to_string())
        {
            Self::create_index(&owners, INDEX_NAME_OWNER_EMAIL, doc! { "email": 1 }).await?;
            tracing::debug!("created index {OWNERS}.{INDEX_NAME_OWNER_EMAIL}");
        }

        let pets = database.collection::<Document>(PETS);
        if !pets
            .list_index_names()
            .await?
            .contains(&INDEX_NAME_PET_OWNER_ID.to_string())
        {
            Self::create_index(&pets, INDEX_NAME_PET_OWNER_ID, doc! { "ownerId": 1 }).await?;
            tracing::debug!("created index {PETS}.{INDEX_NAME_PET_OWNER_ID}");
        }

        let violations = database.collection::<Document>(VIOLATIONS);
        if !violations
            .list_index_names()
            .await?
            .contains(&INDEX_NAME_VIOLATION_OWNER_ID.to_string())
        {
            Self::create_index(
                &violations,
                INDEX_NAME_VIOLATION_OWNER_ID,
                doc! { "ownerId": 1 },
            )
            .await?;
            tracing::debug!("created index {VIOLATIONS}.{INDEX_NAME_VIOLATION_OWNER_ID}");
        }

        Ok(Self { database })
    }

    async fn create_index(
        collection: &Collection<Document>,
        name: &str,
        keys: Document,
    ) -> Result<(), mongodb::error::Error> {
        let index = IndexModel::builder()
            .keys(keys)
            .options(IndexOptions::builder().name(name.to_string()).build())
            .build();

        collection.create_index(index).await?;

        Ok(())
    }
}

#[async_trait]
impl FeedRepository for FeedRepositoryImpl {
    async fn find_owner_id(&self, email: &str) -> Result<Option<String>, Error> {
        let owner = self
            .database
            .collection::<Document>(OWNERS)
            .find_one(doc! { "email": email })
            .await?;

        let owner_id = owner
            .and_then(|owner| owner.get_object_id("_id").ok())
            .map(|id| id.to_hex());

        Ok(owner_id)
    }

    async fn find_pets(&self, owner_id: &str) -> Result<Vec<Pet>, Error> {
        let pets = self
            .database
            .collection::<Pet>(PETS)
            .find(doc! { "ownerId": owner_id })
            .await?
            .try_collect()
            .await?;

        Ok(pets)
    }

    async fn find_violations(&self, owner_id: &str) -> Result<Vec<Violation>, Error> {
        let violations = self
            .database
            .collection::<Violation>(VIOLATIONS)
            .find(doc! { "ownerId": owner_id })
            .await?
            .try_collect()
            .await?;

        Ok(violations)
    }

    async fn find_pending_vaccinations(&self) -> Result<Vec<Vaccination>, Error> {
        let vaccinations = self
            .database
            .collection::<Vaccination>(VACCINATIONS)
            .find(doc! {
                "senderTo": {
                    "$elemMatch": {
                        "status": PENDING,
                    }
                }
            })
            .await?
            .try_collect()
            .await?;

        Ok(vaccinations)
    }

    async fn find_vaccination(&self, id: ObjectId) -> Result<Option<Vaccination>, Error> {
        let vaccination = self
            .database
            .collection::<Vaccination>(VACCINATIONS)
            .find_one(doc! { "_id": id })
            .await?;

        Ok(vaccination)
    }

    async fn update_violation_read(&self, id: ObjectId) -> Result<(), Error> {
        let update_result = self
            .database
            .collection::<Document>(VIOLATIONS)
            .update_one(
                doc! { "_id": id },
                doc! {
                    "$set": {
                        "isRead": true,
                    }
                },
            )
            .await?;

        // matched_count instead of modified_count because replacing
        // true with true doesn't count as modification
        match update_result.matched_count == 1 {
            true => Ok(()),
            false => Err(Error::NoDocumentUpdated),
        }
    }

    async fn replace_vaccination_recipients(
        &self,
        id: ObjectId,
        recipients: &[VaccinationRecipient],
    ) -> Result<(), Error> {
        let recipients = bson::to_bson(&recipients)?;

        let update_result = self
            .database
            .collection::<Document>(VACCINATIONS)
            .update_one(
                doc! { "_id": id },
                doc! {
                    "$set": {
                        "senderTo": recipients,
                    }
                },
            )
            .await?;

        match update_result.matched_count == 1 {
            true => Ok(()),
            false => Err(Error::NoDocumentUpdated),
        }
    }
}
