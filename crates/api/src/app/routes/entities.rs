//! `/entities` CRUD handlers.
//!
//! Each handler validates its input, makes exactly one store call, and
//! returns either a success response or an [`ApiError`]. The store manages
//! its own locking; no guard is ever held here.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Extension, Path,
    },
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

use roster_infra::EntityStore;

use crate::app::errors::ApiError;
use crate::app::{dto, SharedStore};

pub fn router() -> Router {
    Router::new()
        .route("/entities", post(create_entity))
        .route("/entities/:id", get(get_entity).delete(delete_entity))
}

/// `POST /entities`
///
/// The id comes from the body. An existing entity with the same id is
/// replaced (last write wins).
pub async fn create_entity(
    Extension(store): Extension<SharedStore>,
    payload: Result<Json<dto::CreateEntityRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(body) = payload?;
    let entity = body.into_entity()?;
    let id = entity.id();

    store.create(entity)?;

    tracing::debug!(%id, "entity stored");
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /entities/:id`
pub async fn get_entity(
    Extension(store): Extension<SharedStore>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Response, ApiError> {
    let Path(raw_id) = path?;
    let id = dto::parse_entity_id(&raw_id)?;
    let entity = store.get(id)?;

    let body = serde_json::to_vec(&entity)?;
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response())
}

/// `DELETE /entities/:id`
pub async fn delete_entity(
    Extension(store): Extension<SharedStore>,
    path: Result<Path<String>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(raw_id) = path?;
    let id = dto::parse_entity_id(&raw_id)?;
    store.delete(id)?;

    tracing::debug!(%id, "entity deleted");
    Ok(StatusCode::NO_CONTENT)
}
