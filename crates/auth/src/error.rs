//! Authentication/authorization error taxonomy.

use thiserror::Error;

/// Failure modes of the identity & access resolution pipeline.
///
/// All token/identity failures are local to a single request and surface to
/// the caller as an access-denied outcome; there is no retry and no partial
/// identity. `PolicyNotFound` is different: it is a configuration defect and
/// is checked at startup (see [`crate::PolicyEngine::verify`]).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Signature mismatch, malformed token structure, or expired token.
    #[error("invalid token")]
    InvalidToken,

    /// Token verified, but it carries no usable identity claim.
    #[error("no usable identity claim")]
    MissingIdentity,

    /// Token verified and identified, but it carries no usable email claim.
    #[error("no usable email claim")]
    MissingEmail,

    /// A policy name was referenced that was never registered.
    #[error("policy not found: {0}")]
    PolicyNotFound(String),
}
