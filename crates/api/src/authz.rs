//! Handler-side policy guards.
//!
//! Handlers call [`require_policy`] before doing any work. The policy names
//! the router references are listed in [`REQUIRED_POLICIES`] and checked
//! against the engine at boot, so an unknown name can never surface during a
//! request.

use axum::http::StatusCode;
use axum::response::Response;

use botdesk_auth::{
    Decision, PolicyEngine, REQUIRE_ADMIN_ROLE, REQUIRE_SUPER_ADMIN_ROLE, REQUIRE_USER_ROLE,
};

use crate::app::errors;
use crate::context::IdentityContext;

/// Every policy name used by the router.
pub const REQUIRED_POLICIES: &[&str] = &[
    REQUIRE_USER_ROLE,
    REQUIRE_ADMIN_ROLE,
    REQUIRE_SUPER_ADMIN_ROLE,
];

/// Evaluate a named policy against the request identity.
///
/// Returns the ready-to-send error response on deny, so handlers can
/// early-return it.
pub fn require_policy(
    engine: &PolicyEngine,
    identity: &IdentityContext,
    policy_name: &str,
) -> Result<(), Response> {
    match engine.authorize(identity.role(), policy_name) {
        Ok(Decision::Allow) => Ok(()),
        Ok(Decision::Deny) => Err(errors::json_error(
            StatusCode::FORBIDDEN,
            "forbidden",
            format!(
                "role '{}' is not permitted by policy '{}'",
                identity.role(),
                policy_name
            ),
        )),
        Err(e) => Err(errors::auth_error_to_response(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use botdesk_auth::ResolvedIdentity;
    use botdesk_core::UserId;

    fn identity(role: &str) -> IdentityContext {
        IdentityContext::new(ResolvedIdentity {
            user_id: UserId::new(),
            email: "a@b.com".to_string(),
            role: role.to_string(),
        })
    }

    #[test]
    fn guards_follow_policy_membership() {
        let engine = PolicyEngine::new();

        assert!(require_policy(&engine, &identity("Admin"), REQUIRE_ADMIN_ROLE).is_ok());
        assert!(require_policy(&engine, &identity("User"), REQUIRE_ADMIN_ROLE).is_err());
        assert!(require_policy(&engine, &identity("SuperAdmin"), REQUIRE_USER_ROLE).is_ok());
    }

    #[test]
    fn required_policies_all_registered() {
        PolicyEngine::new().verify(REQUIRED_POLICIES).unwrap();
    }
}
