//! Application wiring: store, services, router.

use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, routing::get, Router};

use sweetshop_infra::{InMemorySweetStore, SweetStore};

use crate::app::services::AppServices;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the application router with the default in-memory store.
pub fn build_app() -> Router {
    build_app_with_store(Arc::new(InMemorySweetStore::new()))
}

/// Build the application router against a caller-supplied store
/// (tests, or a persistent backend).
pub fn build_app_with_store(store: Arc<dyn SweetStore>) -> Router {
    let services = Arc::new(AppServices::new(store));

    Router::new()
        .route("/health", get(health))
        .nest("/api/sweets", routes::sweets::router())
        .layer(Extension(services))
}

async fn health() -> StatusCode {
    StatusCode::OK
}
