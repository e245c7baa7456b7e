use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};

use botdesk_auth::{PolicyEngine, REQUIRE_USER_ROLE};

use crate::authz;
use crate::context::IdentityContext;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// GET /whoami - echo the resolved identity of the caller.
pub async fn whoami(
    Extension(engine): Extension<Arc<PolicyEngine>>,
    Extension(identity): Extension<IdentityContext>,
) -> axum::response::Response {
    if let Err(e) = authz::require_policy(&engine, &identity, REQUIRE_USER_ROLE) {
        return e;
    }

    Json(serde_json::json!({
        "user_id": identity.user_id().to_string(),
        "email": identity.email(),
        "role": identity.role(),
    }))
    .into_response()
}
