//! HTTP API application wiring (Axum router + service wiring).
//!
//! Layout:
//! - `services.rs`: trait-object seams for the business services
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use botdesk_auth::{PolicyEngine, TokenAuthenticator};

use crate::{authz, config::Config, middleware};

pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
///
/// Fails when a route references an unregistered policy; that is a
/// configuration defect and must stop the boot, not a request.
pub fn build_app(config: &Config) -> anyhow::Result<Router> {
    let engine = Arc::new(PolicyEngine::new());
    engine.verify(authz::REQUIRED_POLICIES)?;

    let authenticator = Arc::new(TokenAuthenticator::new(&config.signing_key));
    let auth_state = middleware::AuthState { authenticator };

    let services = services::AppServices::unwired();

    // Protected routes: bearer auth + resolved identity required.
    let protected = routes::router()
        .layer(Extension(engine))
        .layer(Extension(services))
        .layer(Extension(config.flags()))
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            middleware::auth_middleware,
        ));

    Ok(Router::new()
        .route("/health", get(routes::system::health))
        .merge(protected)
        .layer(ServiceBuilder::new()))
}
