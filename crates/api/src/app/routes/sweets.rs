use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};

use sweetshop_core::SweetId;
use sweetshop_inventory::MovementKind;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", post(add_sweet).get(get_all_sweets))
        .route("/search", get(search_sweets))
        .route("/:id", delete(delete_sweet))
        .route("/:id/purchase", post(purchase_sweet))
        .route("/:id/restock", post(restock_sweet))
}

pub async fn add_sweet(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<serde_json::Value>,
) -> axum::response::Response {
    let input = match dto::parse_create(&body) {
        Ok(input) => input,
        Err(e) => return errors::domain_error_to_response(&e),
    };

    match services.create_sweet(input) {
        Ok(sweet) => errors::json_ok(
            StatusCode::CREATED,
            "Sweet added successfully.",
            Some(dto::sweet_to_json(&sweet)),
        ),
        Err(e) => errors::op_error_to_response(e),
    }
}

pub async fn get_all_sweets(
    Extension(services): Extension<Arc<AppServices>>,
    Query(params): Query<dto::ListParams>,
) -> axum::response::Response {
    let sort = match dto::parse_sort(params.sort_by.as_deref(), params.order.as_deref()) {
        Ok(sort) => sort,
        Err(e) => return errors::domain_error_to_response(&e),
    };

    match services.list_sweets(sort) {
        Ok(sweets) => errors::json_ok(
            StatusCode::OK,
            "Fetched all sweets successfully.",
            Some(sweets.iter().map(dto::sweet_to_json).collect()),
        ),
        Err(e) => errors::op_error_to_response(e),
    }
}

pub async fn search_sweets(
    Extension(services): Extension<Arc<AppServices>>,
    Query(params): Query<dto::SearchParams>,
) -> axum::response::Response {
    let (filter, sort) = match dto::parse_search(&params) {
        Ok(parsed) => parsed,
        Err(e) => return errors::domain_error_to_response(&e),
    };

    match services.search_sweets(&filter, sort) {
        Ok(sweets) => errors::json_ok(
            StatusCode::OK,
            "Search results fetched successfully.",
            Some(sweets.iter().map(dto::sweet_to_json).collect()),
        ),
        Err(e) => errors::op_error_to_response(e),
    }
}

pub async fn delete_sweet(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: SweetId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(&e),
    };

    match services.delete_sweet(id) {
        Ok(()) => errors::json_ok(StatusCode::OK, "Sweet deleted successfully.", None),
        Err(e) => errors::op_error_to_response(e),
    }
}

pub async fn purchase_sweet(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<serde_json::Value>,
) -> axum::response::Response {
    adjust_sweet(services, id, body, MovementKind::Purchase).await
}

pub async fn restock_sweet(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<serde_json::Value>,
) -> axum::response::Response {
    adjust_sweet(services, id, body, MovementKind::Restock).await
}

/// Purchase and restock differ only in movement direction and the success
/// message; everything else is the same handler.
async fn adjust_sweet(
    services: Arc<AppServices>,
    id: String,
    body: serde_json::Value,
    kind: MovementKind,
) -> axum::response::Response {
    let id: SweetId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(&e),
    };

    let movement = match dto::parse_movement(&body, kind) {
        Ok(m) => m,
        Err(e) => return errors::domain_error_to_response(&e),
    };

    let message = match kind {
        MovementKind::Purchase => "Sweet purchased successfully.",
        MovementKind::Restock => "Sweet restocked successfully.",
    };

    match services.adjust_stock(id, movement) {
        Ok(sweet) => errors::json_ok(StatusCode::OK, message, Some(dto::sweet_to_json(&sweet))),
        Err(e) => errors::op_error_to_response(e),
    }
}
