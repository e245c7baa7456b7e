//! Role-based policy evaluation.
//!
//! Policies are process-wide configuration: created once at startup,
//! read-only thereafter, safe to share across concurrent requests.

use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

use crate::error::AuthError;

pub const REQUIRE_ADMIN_ROLE: &str = "RequireAdminRole";
pub const REQUIRE_SUPER_ADMIN_ROLE: &str = "RequireSuperAdminRole";
pub const REQUIRE_USER_ROLE: &str = "RequireUserRole";

/// Outcome of a policy evaluation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny,
}

impl Decision {
    pub fn is_allow(&self) -> bool {
        matches!(self, Decision::Allow)
    }
}

/// A named, fixed set of roles permitted to perform an operation.
///
/// Each policy enumerates its full allowed set explicitly; there is no role
/// hierarchy or inheritance between policies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Policy {
    pub name: &'static str,
    pub allowed_roles: BTreeSet<&'static str>,
}

impl Policy {
    fn new(name: &'static str, allowed_roles: impl IntoIterator<Item = &'static str>) -> Self {
        Self {
            name,
            allowed_roles: allowed_roles.into_iter().collect(),
        }
    }

    /// Exact string match against the allowed set; no case folding.
    pub fn allows(&self, role: &str) -> Decision {
        if self.allowed_roles.contains(role) {
            Decision::Allow
        } else {
            Decision::Deny
        }
    }
}

/// Closed registry of named policies.
#[derive(Debug, Clone)]
pub struct PolicyEngine {
    policies: HashMap<&'static str, Policy>,
}

impl PolicyEngine {
    /// Build the registry. The set of policies is fixed here; nothing is
    /// registered after construction.
    pub fn new() -> Self {
        let policies = [
            Policy::new(REQUIRE_ADMIN_ROLE, ["SuperAdmin", "Admin"]),
            Policy::new(REQUIRE_SUPER_ADMIN_ROLE, ["SuperAdmin"]),
            Policy::new(REQUIRE_USER_ROLE, ["User", "Admin", "SuperAdmin"]),
        ];

        Self {
            policies: policies.into_iter().map(|p| (p.name, p)).collect(),
        }
    }

    /// Startup-time check that every referenced policy name exists.
    ///
    /// Callers run this before serving any request, so
    /// [`AuthError::PolicyNotFound`] is boot-fatal and never reaches the
    /// request path.
    pub fn verify(&self, names: &[&str]) -> Result<(), AuthError> {
        for name in names {
            if !self.policies.contains_key(name) {
                return Err(AuthError::PolicyNotFound((*name).to_string()));
            }
        }
        Ok(())
    }

    /// Evaluate a named policy against a resolved role.
    pub fn authorize(&self, role: &str, policy_name: &str) -> Result<Decision, AuthError> {
        let policy = self
            .policies
            .get(policy_name)
            .ok_or_else(|| AuthError::PolicyNotFound(policy_name.to_string()))?;
        Ok(policy.allows(role))
    }

    pub fn policies(&self) -> impl Iterator<Item = &Policy> {
        self.policies.values()
    }
}

impl Default for PolicyEngine {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enumerated_memberships() {
        let engine = PolicyEngine::new();

        assert_eq!(
            engine.authorize("SuperAdmin", REQUIRE_USER_ROLE).unwrap(),
            Decision::Allow
        );
        assert_eq!(
            engine.authorize("User", REQUIRE_SUPER_ADMIN_ROLE).unwrap(),
            Decision::Deny
        );
        assert_eq!(
            engine.authorize("Admin", REQUIRE_ADMIN_ROLE).unwrap(),
            Decision::Allow
        );
    }

    #[test]
    fn admin_policy_excludes_plain_users() {
        let engine = PolicyEngine::new();

        assert_eq!(
            engine.authorize("User", REQUIRE_ADMIN_ROLE).unwrap(),
            Decision::Deny
        );
        assert_eq!(
            engine.authorize("Admin", REQUIRE_SUPER_ADMIN_ROLE).unwrap(),
            Decision::Deny
        );
    }

    #[test]
    fn role_match_is_case_sensitive() {
        let engine = PolicyEngine::new();

        assert_eq!(
            engine.authorize("superadmin", REQUIRE_USER_ROLE).unwrap(),
            Decision::Deny
        );
        assert_eq!(
            engine.authorize("admin", REQUIRE_ADMIN_ROLE).unwrap(),
            Decision::Deny
        );
    }

    #[test]
    fn unknown_policy_is_an_error() {
        let engine = PolicyEngine::new();

        assert_eq!(
            engine.authorize("Admin", "RequireManagerRole"),
            Err(AuthError::PolicyNotFound("RequireManagerRole".to_string()))
        );
    }

    #[test]
    fn verify_checks_every_name() {
        let engine = PolicyEngine::new();

        engine
            .verify(&[REQUIRE_USER_ROLE, REQUIRE_ADMIN_ROLE, REQUIRE_SUPER_ADMIN_ROLE])
            .unwrap();

        assert_eq!(
            engine.verify(&[REQUIRE_USER_ROLE, "RequireManagerRole"]),
            Err(AuthError::PolicyNotFound("RequireManagerRole".to_string()))
        );
    }

    #[test]
    fn unknown_role_lands_on_deny_everywhere() {
        let engine = PolicyEngine::new();

        for policy in [REQUIRE_USER_ROLE, REQUIRE_ADMIN_ROLE, REQUIRE_SUPER_ADMIN_ROLE] {
            assert_eq!(engine.authorize("Auditor", policy).unwrap(), Decision::Deny);
        }
    }
}
