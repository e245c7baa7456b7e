use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use botdesk_auth::AuthError;
use botdesk_core::DomainError;

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

/// Map pipeline failures to HTTP statuses.
///
/// `InvalidToken` is a transport-level rejection (401). Missing identity or
/// email happen *after* the token verified, so they are authorization
/// failures (403). `PolicyNotFound` is checked at boot and cannot occur here
/// in a correctly started process.
pub fn auth_error_to_response(err: AuthError) -> axum::response::Response {
    match err {
        AuthError::InvalidToken => {
            json_error(StatusCode::UNAUTHORIZED, "invalid_token", err.to_string())
        }
        AuthError::MissingIdentity => {
            json_error(StatusCode::FORBIDDEN, "missing_identity", err.to_string())
        }
        AuthError::MissingEmail => {
            json_error(StatusCode::FORBIDDEN, "missing_email", err.to_string())
        }
        AuthError::PolicyNotFound(_) => json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "policy_not_found",
            err.to_string(),
        ),
    }
}

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "not found"),
        DomainError::Unauthorized => {
            json_error(StatusCode::FORBIDDEN, "unauthorized", "unauthorized")
        }
    }
}

/// 501 for service seams the hosting deployment has not wired.
pub fn not_wired(service: &'static str) -> axum::response::Response {
    json_error(
        StatusCode::NOT_IMPLEMENTED,
        "not_implemented",
        format!("the {service} service is not wired in this deployment"),
    )
}
