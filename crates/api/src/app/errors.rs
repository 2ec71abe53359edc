//! Mapping from domain/infrastructure failures to the response envelope.
//!
//! Every response, success or failure, carries the same envelope:
//! `{ success, message, data?, error? }`.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use sweetshop_core::DomainError;
use sweetshop_infra::StoreError;

use crate::app::services::OpError;

pub fn json_ok(
    status: StatusCode,
    message: impl Into<String>,
    data: Option<serde_json::Value>,
) -> axum::response::Response {
    let mut body = json!({
        "success": true,
        "message": message.into(),
    });
    if let Some(data) = data {
        body["data"] = data;
    }
    (status, axum::Json(body)).into_response()
}

pub fn json_fail(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "success": false,
            "message": message.into(),
        })),
    )
        .into_response()
}

pub fn domain_error_to_response(err: &DomainError) -> axum::response::Response {
    let status = match err {
        DomainError::MissingFields(_)
        | DomainError::Validation(_)
        | DomainError::InvalidField(_)
        | DomainError::EmptyQuery
        | DomainError::InvalidId(_)
        | DomainError::InsufficientStock => StatusCode::BAD_REQUEST,
        // Semantically out of bounds rather than malformed.
        DomainError::OutOfRange(_) => StatusCode::UNPROCESSABLE_ENTITY,
        DomainError::NotFound => StatusCode::NOT_FOUND,
    };
    json_fail(status, err.to_string())
}

/// Store failures are never retried; they surface as an internal error
/// with the underlying message attached for diagnostics.
pub fn store_error_to_response(err: &StoreError) -> axum::response::Response {
    tracing::error!("store failure: {err}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        axum::Json(json!({
            "success": false,
            "message": "Internal Server Error",
            "error": err.to_string(),
        })),
    )
        .into_response()
}

pub fn op_error_to_response(err: OpError) -> axum::response::Response {
    match err {
        OpError::Domain(e) => domain_error_to_response(&e),
        OpError::Store(e) => store_error_to_response(&e),
    }
}
