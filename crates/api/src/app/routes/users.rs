use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
    Json, Router,
};

use botdesk_auth::{PolicyEngine, REQUIRE_ADMIN_ROLE};
use botdesk_core::UserId;
use botdesk_users::UpdateRoleRequest;

use crate::app::{errors, services::AppServices};
use crate::authz;
use crate::context::IdentityContext;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_users))
        .route("/:id/role", put(update_role))
}

/// GET /users - list all user accounts (admin tier).
pub async fn list_users(
    Extension(services): Extension<AppServices>,
    Extension(engine): Extension<Arc<PolicyEngine>>,
    Extension(identity): Extension<IdentityContext>,
) -> axum::response::Response {
    if let Err(e) = authz::require_policy(&engine, &identity, REQUIRE_ADMIN_ROLE) {
        return e;
    }

    let Some(users) = services.users.as_ref() else {
        return errors::not_wired("users");
    };

    match users.list().await {
        Ok(profiles) => (StatusCode::OK, Json(profiles)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

/// PUT /users/:id/role - change a user's role (admin tier).
pub async fn update_role(
    Extension(services): Extension<AppServices>,
    Extension(engine): Extension<Arc<PolicyEngine>>,
    Extension(identity): Extension<IdentityContext>,
    Path(id): Path<String>,
    Json(request): Json<UpdateRoleRequest>,
) -> axum::response::Response {
    if let Err(e) = authz::require_policy(&engine, &identity, REQUIRE_ADMIN_ROLE) {
        return e;
    }

    let user_id: UserId = match id.parse() {
        Ok(id) => id,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid user id"),
    };

    let Some(users) = services.users.as_ref() else {
        return errors::not_wired("users");
    };

    match users.update_role(user_id, request).await {
        Ok(profile) => (StatusCode::OK, Json(profile)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
