use botdesk_auth::ResolvedIdentity;
use botdesk_core::UserId;

/// Authenticated identity for a request.
///
/// Inserted into request extensions by the auth middleware after token
/// validation and identity resolution succeed; immutable for the request's
/// lifetime. Handlers behind the middleware can rely on it being present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityContext {
    identity: ResolvedIdentity,
}

impl IdentityContext {
    pub fn new(identity: ResolvedIdentity) -> Self {
        Self { identity }
    }

    pub fn user_id(&self) -> UserId {
        self.identity.user_id
    }

    pub fn email(&self) -> &str {
        &self.identity.email
    }

    pub fn role(&self) -> &str {
        &self.identity.role
    }

    pub fn identity(&self) -> &ResolvedIdentity {
        &self.identity
    }
}
