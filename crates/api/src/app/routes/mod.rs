use axum::{routing::get, Router};

pub mod entities;
pub mod system;

/// Router for every endpoint the service exposes.
pub fn router() -> Router {
    Router::new()
        .route("/", get(system::root))
        .route("/health", get(system::health))
        .merge(entities::router())
}
