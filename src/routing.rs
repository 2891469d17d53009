use crate::{
    application::ApplicationState,
    dto::{input, output},
    error::Error,
    service::feed_service::FeedService,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use bson::oid::ObjectId;
use std::sync::Arc;

pub fn routing() -> Router<ApplicationState> {
    Router::new()
        .route("/api/v1/feed", get(find_feed))
        .route("/api/v1/feed/:id/read", put(update_feed_read))
}

async fn find_feed(
    State(feed_service): State<Arc<dyn FeedService>>,
    Query(query): Query<input::FeedQuery>,
) -> Result<Json<output::Feed>, Error> {
    let owner_id = feed_service.resolve_owner(&query.email).await?;
    let feed = feed_service.load_feed(&owner_id, query.filter).await?;

    Ok(Json(feed))
}

async fn update_feed_read(
    State(feed_service): State<Arc<dyn FeedService>>,
    Path(id): Path<String>,
    Json(mark_read): Json<input::FeedMarkRead>,
) -> Result<StatusCode, Error> {
    let id = ObjectId::parse_str(&id).map_err(|_| Error::NotificationNotExist)?;

    let owner_id = feed_service.resolve_owner(&mark_read.email).await?;
    feed_service
        .mark_read(&owner_id, id, mark_read.kind, &mark_read.pet_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
