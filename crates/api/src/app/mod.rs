//! HTTP API application wiring (Axum router + store injection).
//!
//! Layout:
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request DTOs and path parsing
//! - `errors.rs`: the single error-to-response mapping

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;

use roster_infra::EntityStore;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;

/// Store handle shared by every request task.
pub type SharedStore = Arc<dyn EntityStore>;

/// Build the full HTTP router around an injected store.
pub fn build_app(store: SharedStore) -> Router {
    routes::router()
        .layer(Extension(store))
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::trace_requests)),
        )
}
