use actix_web::{web, HttpResponse};

use crate::domain::SubscriberId;
use crate::error::ApiError;
use crate::store::SubscriberStore;

const DATABASE_ERROR: &str = "Database Error";
const INVALID_NAME_URL: &str = "Invalid name Url";
// A malformed id and a missing subscriber are the same failure for the client
const NO_USER_EXIST: &str = "No user Exist";

/// The store injected by `startup::run`.
pub type StoreData = web::Data<dyn SubscriberStore>;

/// Retrieve a list of subscribers
///
/// Fetches all subscribers from the database, excluding the `__v` field.
#[utoipa::path(
    get,
    path = "/subscribers",
    responses(
        (status = 200, description = "A list of subscribers.", body = [crate::domain::Subscriber]),
        (status = 400, description = "Database Error.", body = crate::error::ErrorResponse,
            example = json!({ "error": "Database Error" }))
    ),
    tag = "Subscribers"
)]
#[tracing::instrument(name = "Listing all subscribers", skip(store))]
pub async fn list_subscribers(
    store: StoreData,
) -> Result<HttpResponse, ApiError> {
    let subscribers = store.find_all().await.map_err(|err| {
        tracing::error!("Failed to fetch subscribers: {:?}", err);
        ApiError::query(DATABASE_ERROR)(err)
    })?;

    Ok(HttpResponse::Ok().json(subscribers))
}

/// Retrieve subscriber names
///
/// Fetches a list of subscribers, excluding the `__v`, `_id`, and `subscribedDate` fields.
#[utoipa::path(
    get,
    path = "/subscribers/name",
    responses(
        (status = 200, description = "A list of subscribers with their names and subscribed channels.",
            body = [crate::domain::SubscriberSummary]),
        (status = 400, description = "Invalid URL or other error.", body = crate::error::ErrorResponse,
            example = json!({ "error": "Invalid name Url" }))
    ),
    tag = "Subscribers"
)]
#[tracing::instrument(name = "Listing subscriber names", skip(store))]
pub async fn list_subscriber_names(
    store: StoreData,
) -> Result<HttpResponse, ApiError> {
    let summaries = store.find_all_summaries().await.map_err(|err| {
        tracing::error!("Failed to fetch subscriber names: {:?}", err);
        ApiError::query(INVALID_NAME_URL)(err)
    })?;

    Ok(HttpResponse::Ok().json(summaries))
}

/// Retrieve subscriber details by ID
///
/// Fetches details of a subscriber based on the provided ID, excluding the `__v` field.
#[utoipa::path(
    get,
    path = "/subscribers/{id}",
    params(
        ("id" = String, Path, description = "The unique identifier of the subscriber.",
            example = "60b8d295f1b6c8a4d4e8f3e1")
    ),
    responses(
        (status = 200, description = "Subscriber details for the given ID.", body = crate::domain::Subscriber),
        (status = 400, description = "Invalid ID or other error.", body = crate::error::ErrorResponse,
            example = json!({ "error": "No user Exist" }))
    ),
    tag = "Subscribers"
)]
#[tracing::instrument(
    name = "Getting a subscriber by id",
    skip(store, path),
    fields(subscriber_id = %path.as_str())
)]
pub async fn get_subscriber_by_id(
    store: StoreData,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = SubscriberId::parse(path.into_inner()).map_err(|err| {
        tracing::warn!("Rejected subscriber id: {}", err);
        ApiError::NotFound(NO_USER_EXIST)
    })?;

    let subscriber = store
        .find_by_id(&id)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch subscriber {}: {:?}", id, err);
            ApiError::NotFound(NO_USER_EXIST)
        })?
        .ok_or(ApiError::NotFound(NO_USER_EXIST))?;

    Ok(HttpResponse::Ok().json(subscriber))
}
