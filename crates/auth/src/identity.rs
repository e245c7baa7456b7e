//! Resolution of a canonical identity from a verified claim set.
//!
//! Lookup precedence per field is a total order over recognized claim types:
//! the first present value wins, there is no merging across sources.

use serde::{Deserialize, Serialize};

use botdesk_core::UserId;

use crate::claims::{ClaimSet, ClaimType};
use crate::error::AuthError;

/// Role granted when a token carries no role claim at all.
///
/// This is the only silent fallback in identity resolution: a request is
/// never denied purely for lacking a role claim, it lands on the
/// least-privileged tier instead.
pub const DEFAULT_ROLE: &str = "User";

const USER_ID_PRECEDENCE: [ClaimType; 3] =
    [ClaimType::NameIdentifier, ClaimType::Uid, ClaimType::UserId];
const EMAIL_PRECEDENCE: [ClaimType; 2] = [ClaimType::Email, ClaimType::EmailShort];
const ROLE_PRECEDENCE: [ClaimType; 2] = [ClaimType::Role, ClaimType::RoleShort];

/// The canonical (user id, email, role) triple derived from a claim set.
///
/// Never partially constructed: `user_id` and `email` resolution must both
/// succeed, and a `ResolvedIdentity` only exists downstream of a successful
/// token validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedIdentity {
    pub user_id: UserId,
    pub email: String,
    pub role: String,
}

fn first_of<'a>(claims: &'a ClaimSet, precedence: &[ClaimType]) -> Option<&'a str> {
    precedence.iter().find_map(|ty| claims.get(*ty))
}

/// Resolve the user identifier.
///
/// Precedence: name-identifier → `uid` → `UserId`. The winning value must
/// parse as a UUID (canonical hex form, case-insensitive); absence or a parse
/// failure is [`AuthError::MissingIdentity`].
pub fn resolve_user(claims: &ClaimSet) -> Result<UserId, AuthError> {
    let raw = first_of(claims, &USER_ID_PRECEDENCE).ok_or(AuthError::MissingIdentity)?;
    raw.parse::<UserId>().map_err(|_| AuthError::MissingIdentity)
}

/// Resolve the email address.
///
/// Precedence: standard email claim → `email`. Absence is
/// [`AuthError::MissingEmail`].
pub fn resolve_email(claims: &ClaimSet) -> Result<String, AuthError> {
    first_of(claims, &EMAIL_PRECEDENCE)
        .map(str::to_owned)
        .ok_or(AuthError::MissingEmail)
}

/// Resolve the role. Precedence: standard role claim → `role`; defaults to
/// [`DEFAULT_ROLE`]. This never fails.
pub fn resolve_role(claims: &ClaimSet) -> String {
    first_of(claims, &ROLE_PRECEDENCE)
        .unwrap_or(DEFAULT_ROLE)
        .to_owned()
}

/// Resolve the full identity triple. No partial identity: any field failure
/// fails the whole resolution.
pub fn resolve_identity(claims: &ClaimSet) -> Result<ResolvedIdentity, AuthError> {
    Ok(ResolvedIdentity {
        user_id: resolve_user(claims)?,
        email: resolve_email(claims)?,
        role: resolve_role(claims),
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::claims::Claim;
    use proptest::prelude::*;

    const UUID_A: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";
    const UUID_B: &str = "0191f2a0-0000-7000-8000-000000000001";
    const UUID_C: &str = "0191f2a0-0000-7000-8000-000000000002";

    fn claim(ty: ClaimType, value: &str) -> Claim {
        Claim::new(ty.as_str(), value)
    }

    #[test]
    fn user_from_each_single_source() {
        for ty in [ClaimType::NameIdentifier, ClaimType::Uid, ClaimType::UserId] {
            let set = ClaimSet::new(vec![claim(ty, UUID_A)]);
            assert_eq!(resolve_user(&set).unwrap().to_string(), UUID_A);
        }
    }

    #[test]
    fn user_precedence_name_identifier_then_uid_then_user_id() {
        let set = ClaimSet::new(vec![
            claim(ClaimType::UserId, UUID_C),
            claim(ClaimType::Uid, UUID_B),
            claim(ClaimType::NameIdentifier, UUID_A),
        ]);
        assert_eq!(resolve_user(&set).unwrap().to_string(), UUID_A);

        let set = ClaimSet::new(vec![
            claim(ClaimType::UserId, UUID_C),
            claim(ClaimType::Uid, UUID_B),
        ]);
        assert_eq!(resolve_user(&set).unwrap().to_string(), UUID_B);
    }

    #[test]
    fn user_uuid_parse_is_case_insensitive() {
        let set = ClaimSet::new(vec![claim(
            ClaimType::Uid,
            "3FA85F64-5717-4562-B3FC-2C963F66AFA6",
        )]);
        assert_eq!(resolve_user(&set).unwrap().to_string(), UUID_A);
    }

    #[test]
    fn missing_or_unparsable_user_claim_fails() {
        let empty = ClaimSet::default();
        assert_eq!(resolve_user(&empty), Err(AuthError::MissingIdentity));

        let garbage = ClaimSet::new(vec![claim(ClaimType::NameIdentifier, "not-a-uuid")]);
        assert_eq!(resolve_user(&garbage), Err(AuthError::MissingIdentity));
    }

    #[test]
    fn unparsable_winner_is_not_rescued_by_lower_precedence() {
        // Precedence is a total order, not a merge: a bad name-identifier is a
        // hard failure even when a valid uid claim is present.
        let set = ClaimSet::new(vec![
            claim(ClaimType::NameIdentifier, "not-a-uuid"),
            claim(ClaimType::Uid, UUID_A),
        ]);
        assert_eq!(resolve_user(&set), Err(AuthError::MissingIdentity));
    }

    #[test]
    fn email_precedence_standard_then_short() {
        let set = ClaimSet::new(vec![
            claim(ClaimType::EmailShort, "short@b.com"),
            claim(ClaimType::Email, "standard@b.com"),
        ]);
        assert_eq!(resolve_email(&set).unwrap(), "standard@b.com");

        let set = ClaimSet::new(vec![claim(ClaimType::EmailShort, "short@b.com")]);
        assert_eq!(resolve_email(&set).unwrap(), "short@b.com");

        assert_eq!(
            resolve_email(&ClaimSet::default()),
            Err(AuthError::MissingEmail)
        );
    }

    #[test]
    fn role_defaults_and_never_fails() {
        assert_eq!(resolve_role(&ClaimSet::default()), DEFAULT_ROLE);

        let set = ClaimSet::new(vec![claim(ClaimType::RoleShort, "Admin")]);
        assert_eq!(resolve_role(&set), "Admin");

        let set = ClaimSet::new(vec![
            claim(ClaimType::RoleShort, "User"),
            claim(ClaimType::Role, "SuperAdmin"),
        ]);
        assert_eq!(resolve_role(&set), "SuperAdmin");
    }

    #[test]
    fn full_identity_round_trip() {
        let set = ClaimSet::new(vec![
            claim(ClaimType::NameIdentifier, UUID_A),
            claim(ClaimType::Email, "a@b.com"),
            claim(ClaimType::Role, "Admin"),
        ]);

        let identity = resolve_identity(&set).unwrap();
        assert_eq!(identity.user_id.to_string(), UUID_A);
        assert_eq!(identity.email, "a@b.com");
        assert_eq!(identity.role, "Admin");
    }

    #[test]
    fn no_partial_identity() {
        // Valid user claim, no email: the whole resolution fails.
        let set = ClaimSet::new(vec![claim(ClaimType::NameIdentifier, UUID_A)]);
        assert_eq!(resolve_identity(&set), Err(AuthError::MissingEmail));
    }

    proptest! {
        #[test]
        fn any_role_claim_value_resolves_verbatim(role in "[A-Za-z0-9_-]{1,32}") {
            let set = ClaimSet::new(vec![claim(ClaimType::Role, &role)]);
            prop_assert_eq!(resolve_role(&set), role);
        }

        #[test]
        fn name_identifier_always_wins(
            uid in proptest::sample::select(vec![UUID_B, UUID_C]),
        ) {
            let set = ClaimSet::new(vec![
                claim(ClaimType::Uid, uid),
                claim(ClaimType::NameIdentifier, UUID_A),
            ]);
            prop_assert_eq!(resolve_user(&set).unwrap().to_string(), UUID_A);
        }

        #[test]
        fn resolution_never_mutates_the_claim_set(
            email in "[a-z]{1,8}@[a-z]{1,8}\\.com",
        ) {
            let set = ClaimSet::new(vec![
                claim(ClaimType::NameIdentifier, UUID_A),
                claim(ClaimType::Email, &email),
            ]);
            let before = set.clone();
            let _ = resolve_identity(&set);
            let _ = resolve_role(&set);
            prop_assert_eq!(set, before);
        }
    }
}
