//! `botdesk-auth` — identity & access resolution (pure, transport-agnostic).
//!
//! The request pipeline is: raw bearer token → [`TokenAuthenticator`] →
//! [`ClaimSet`] → identity resolution → [`ResolvedIdentity`] →
//! [`PolicyEngine`] → allow/deny. This crate is intentionally decoupled from
//! HTTP and storage; the API layer hands it the extracted token string.

pub mod claims;
pub mod error;
pub mod identity;
pub mod policy;
pub mod token;

pub use claims::{Claim, ClaimSet, ClaimType};
pub use error::AuthError;
pub use identity::{
    resolve_email, resolve_identity, resolve_role, resolve_user, ResolvedIdentity, DEFAULT_ROLE,
};
pub use policy::{
    Decision, Policy, PolicyEngine, REQUIRE_ADMIN_ROLE, REQUIRE_SUPER_ADMIN_ROLE,
    REQUIRE_USER_ROLE,
};
pub use token::{SigningKey, TokenAuthenticator};
