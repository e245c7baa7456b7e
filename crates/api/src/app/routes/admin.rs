//! Admin probes for the access-control configuration.
//!
//! These answer "which roles may do what" and "is this deployment running on
//! the insecure development key" without reaching into business services.

use std::sync::Arc;

use axum::{
    extract::Extension, http::StatusCode, response::IntoResponse, routing::get, Json, Router,
};

use botdesk_auth::{Policy, PolicyEngine, REQUIRE_ADMIN_ROLE, REQUIRE_SUPER_ADMIN_ROLE};

use crate::authz;
use crate::config::RuntimeFlags;
use crate::context::IdentityContext;

pub fn router() -> Router {
    Router::new()
        .route("/policies", get(list_policies))
        .route("/config", get(show_config))
}

/// GET /admin/policies - list the policy registry (admin tier).
pub async fn list_policies(
    Extension(engine): Extension<Arc<PolicyEngine>>,
    Extension(identity): Extension<IdentityContext>,
) -> axum::response::Response {
    if let Err(e) = authz::require_policy(&engine, &identity, REQUIRE_ADMIN_ROLE) {
        return e;
    }

    let mut policies: Vec<&Policy> = engine.policies().collect();
    policies.sort_by_key(|p| p.name);

    (
        StatusCode::OK,
        Json(serde_json::json!({ "policies": policies })),
    )
        .into_response()
}

/// GET /admin/config - report security-relevant startup facts (super admin
/// only).
pub async fn show_config(
    Extension(engine): Extension<Arc<PolicyEngine>>,
    Extension(identity): Extension<IdentityContext>,
    Extension(flags): Extension<RuntimeFlags>,
) -> axum::response::Response {
    if let Err(e) = authz::require_policy(&engine, &identity, REQUIRE_SUPER_ADMIN_ROLE) {
        return e;
    }

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "default_signing_key_in_use": flags.default_signing_key,
        })),
    )
        .into_response()
}
