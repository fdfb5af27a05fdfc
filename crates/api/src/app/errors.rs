use axum::http::StatusCode;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::response::IntoResponse;
use serde_json::json;

use finapi_core::DomainError;

/// Map a ledger failure onto the wire contract.
///
/// Every business failure is a 400; only internal faults become a 500.
pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::NotFound => json_error(
            StatusCode::BAD_REQUEST,
            "customer_not_found",
            err.to_string(),
        ),
        DomainError::Conflict(msg) => json_error(StatusCode::BAD_REQUEST, "customer_exists", msg),
        DomainError::InsufficientFunds { .. } => json_error(
            StatusCode::BAD_REQUEST,
            "insufficient_funds",
            err.to_string(),
        ),
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::Internal(msg) => {
            tracing::error!("internal error: {msg}");
            internal_error()
        }
    }
}

pub fn json_rejection_to_response(rejection: JsonRejection) -> axum::response::Response {
    json_error(StatusCode::BAD_REQUEST, "validation_error", rejection.body_text())
}

pub fn query_rejection_to_response(rejection: QueryRejection) -> axum::response::Response {
    json_error(StatusCode::BAD_REQUEST, "validation_error", rejection.body_text())
}

pub fn internal_error() -> axum::response::Response {
    json_error(
        StatusCode::INTERNAL_SERVER_ERROR,
        "internal_error",
        "internal server error",
    )
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
