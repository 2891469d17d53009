use super::ApplicationEnv;
use crate::{
    repository::FeedRepositoryImpl,
    service::feed_service::{FeedService, FeedServiceImpl},
};
use axum::extract::FromRef;
use mongodb::{options::ClientOptions, Client};
use std::sync::Arc;

#[derive(Clone, FromRef)]
pub struct ApplicationState {
    pub feed_service: Arc<dyn FeedService>,
}

pub struct ApplicationStateToClose {
    pub db_client: Client,
}

pub async fn create_state(
    env: &ApplicationEnv,
) -> anyhow::Result<(ApplicationState, ApplicationStateToClose)> {
    tracing::info!("connecting to database");
    let db_client_options = ClientOptions::parse(&env.db_connection_string).await?;
    let db_client = Client::with_options(db_client_options)?;
    let db = db_client.database(&env.db_name);

    tracing::info!("creating repositories");
    let feed_repository = FeedRepositoryImpl::new(db).await?;
    let feed_repository = Arc::new(feed_repository);

    tracing::info!("creating services");
    let feed_service = FeedServiceImpl::new(feed_repository);
    let feed_service: Arc<dyn FeedService> = Arc::new(feed_service);

    Ok((
        ApplicationState { feed_service },
        ApplicationStateToClose { db_client },
    ))
}
