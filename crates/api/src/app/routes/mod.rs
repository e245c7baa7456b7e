use axum::{routing::get, Router};

pub mod admin;
pub mod dashboards;
pub mod data_sources;
pub mod system;
pub mod users;

/// Router for all authenticated endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/whoami", get(system::whoami))
        .nest("/dashboard", dashboards::router())
        .nest("/users", users::router())
        .merge(data_sources::router())
        .nest("/admin", admin::router())
}
