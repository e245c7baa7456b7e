//! Bearer authentication middleware.
//!
//! Runs before every protected handler: extracts the bearer token, validates
//! it, resolves the identity, and stores an [`IdentityContext`] in request
//! extensions. Any failure ends the request here; no handler runs on an
//! unverified or unresolved identity.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, Request, StatusCode},
    middleware::Next,
    response::Response,
};

use botdesk_auth::{resolve_identity, TokenAuthenticator};

use crate::app::errors;
use crate::context::IdentityContext;

#[derive(Clone)]
pub struct AuthState {
    pub authenticator: Arc<TokenAuthenticator>,
}

pub async fn auth_middleware(
    State(state): State<AuthState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_bearer(req.headers())?;

    let claims = state
        .authenticator
        .validate(token)
        .map_err(errors::auth_error_to_response)?;

    let identity = resolve_identity(&claims).map_err(errors::auth_error_to_response)?;

    req.extensions_mut().insert(IdentityContext::new(identity));

    Ok(next.run(req).await)
}

fn extract_bearer(headers: &HeaderMap) -> Result<&str, Response> {
    let unauthorized = || {
        errors::json_error(
            StatusCode::UNAUTHORIZED,
            "unauthorized",
            "missing or malformed Authorization header",
        )
    };

    let header = headers
        .get(header::AUTHORIZATION)
        .ok_or_else(unauthorized)?;

    let header = header.to_str().map_err(|_| unauthorized())?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or_else(unauthorized)?
        .trim();

    if token.is_empty() {
        return Err(unauthorized());
    }

    Ok(token)
}
