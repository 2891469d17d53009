use super::{feed_view, FeedService};
use crate::{
    dto::{input, output},
    error::Error,
    repository::{self, FeedRepository},
};
use axum::async_trait;
use bson::oid::ObjectId;
use std::{collections::HashMap, sync::Arc};

const PENDING: &str = "Pending";
const UNKNOWN_PET_NAME: &str = "unknown";

pub struct FeedServiceImpl {
    repository: Arc<dyn FeedRepository>,
}

impl FeedServiceImpl {
    pub fn new(repository: Arc<dyn FeedRepository>) -> Self {
        Self { repository }
    }

    fn pet_name(pet_names: &HashMap<String, String>, pet_id: &str) -> String {
        pet_names
            .get(pet_id)
            .cloned()
            .unwrap_or_else(|| UNKNOWN_PET_NAME.to_string())
    }

    fn violation_notification(
        violation: repository::Violation,
        pet_names: &HashMap<String, String>,
    ) -> output::FeedNotification {
        output::FeedNotification {
            id: violation.id.to_hex(),
            kind: output::FeedKind::Violation,
            pet_name: Self::pet_name(pet_names, &violation.pet_id),
            pet_id: violation.pet_id,
            is_read: violation.is_read,
            details: output::FeedNotificationDetails::Violation {
                description: violation.description,
                location: violation.location,
                time: violation.time,
                notes: violation.notes,
                attachments: violation.attachments,
            },
        }
    }

    fn vaccination_notifications(
        owner_id: &str,
        vaccination: &repository::Vaccination,
        pet_names: &HashMap<String, String>,
    ) -> Vec<output::FeedNotification> {
        vaccination
            .recipients
            .iter()
            .filter(|recipient| recipient.status == PENDING)
            .filter_map(|recipient| {
                // Composite key "{ownerId}|{petId}". The owner part must
                // match exactly, a bare string prefix is not enough.
                let (recipient_owner_id, pet_id) = recipient.user_id.split_once('|')?;
                if recipient_owner_id != owner_id {
                    return None;
                }

                Some(output::FeedNotification {
                    id: vaccination.id.to_hex(),
                    kind: output::FeedKind::Vaccination,
                    pet_id: pet_id.to_string(),
                    pet_name: Self::pet_name(pet_names, pet_id),
                    is_read: recipient.is_read,
                    details: output::FeedNotificationDetails::Vaccination {
                        vaccine_type: vaccination.vaccine_type.clone(),
                        location: vaccination.location.clone(),
                        time_from: vaccination.time_from.clone(),
                        time_to: vaccination.time_to.clone(),
                        cost: vaccination.cost,
                        notes: vaccination.notes.clone(),
                    },
                })
            })
            .collect()
    }
}

#[async_trait]
impl FeedService for FeedServiceImpl {
    async fn resolve_owner(&self, email: &str) -> Result<String, Error> {
        tracing::info!("resolving owner");

        let owner_id = self
            .repository
            .find_owner_id(email)
            .await
            .map_err(Error::FeedUnavailable)?
            .ok_or(Error::OwnerNotExist)?;

        tracing::info!(owner_id, "resolved owner");

        Ok(owner_id)
    }

    async fn load_feed(
        &self,
        owner_id: &str,
        filter: input::FeedFilter,
    ) -> Result<output::Feed, Error> {
        tracing::info!("loading feed");
        tracing::trace!(?filter);

        let pets = self
            .repository
            .find_pets(owner_id)
            .await
            .map_err(Error::FeedUnavailable)?;
        let pet_names = pets
            .into_iter()
            .map(|pet| {
                let name = pet.name.unwrap_or_else(|| UNKNOWN_PET_NAME.to_string());
                (pet.id.to_hex(), name)
            })
            .collect::<HashMap<_, _>>();

        // Both fetches depend only on the owner, not on each other
        let (violations, vaccinations) = tokio::try_join!(
            self.repository.find_violations(owner_id),
            self.repository.find_pending_vaccinations(),
        )
        .map_err(Error::FeedUnavailable)?;

        let mut notifications = violations
            .into_iter()
            .filter(|violation| violation.owner_id == owner_id && violation.status == PENDING)
            .map(|violation| Self::violation_notification(violation, &pet_names))
            .collect::<Vec<_>>();
        for vaccination in &vaccinations {
            notifications.extend(Self::vaccination_notifications(
                owner_id,
                vaccination,
                &pet_names,
            ));
        }

        let pending_count = feed_view::pending_count(&notifications);
        feed_view::filter_notifications(&mut notifications, filter);
        feed_view::sort_for_display(&mut notifications);

        tracing::info!(count = notifications.len(), pending_count, "loaded feed");

        Ok(output::Feed {
            pending_count,
            notifications,
        })
    }

    async fn mark_read(
        &self,
        owner_id: &str,
        id: ObjectId,
        kind: output::FeedKind,
        pet_id: &str,
    ) -> Result<(), Error> {
        tracing::info!(kind = kind.as_ref(), "marking notification read");

        match kind {
            output::FeedKind::Violation => {
                self.repository
                    .update_violation_read(id)
                    .await
                    .map_err(|err| match err {
                        repository::Error::NoDocumentUpdated => Error::NotificationNotExist,
                        err => Error::Persistence(err),
                    })?;
            }
            output::FeedKind::Vaccination => {
                let vaccination = self
                    .repository
                    .find_vaccination(id)
                    .await
                    .map_err(Error::Persistence)?
                    .ok_or(Error::NotificationNotExist)?;

                let user_id = format!("{owner_id}|{pet_id}");
                let mut recipients = vaccination.recipients;
                let recipient = recipients
                    .iter_mut()
                    .find(|recipient| recipient.user_id == user_id)
                    .ok_or(Error::NotificationNotExist)?;
                recipient.is_read = true;

                // Whole-array replace: concurrent calls on other entries of
                // the same document race, last writer wins on the list.
                self.repository
                    .replace_vaccination_recipients(id, &recipients)
                    .await
                    .map_err(|err| match err {
                        repository::Error::NoDocumentUpdated => Error::NotificationNotExist,
                        err => Error::Persistence(err),
                    })?;
            }
        }

        tracing::info!("marked notification read");

        Ok(())
    }
}
