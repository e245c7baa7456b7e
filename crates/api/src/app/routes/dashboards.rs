use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use botdesk_auth::{PolicyEngine, REQUIRE_USER_ROLE};

use crate::app::{errors, services::AppServices};
use crate::authz;
use crate::context::IdentityContext;

#[derive(Debug, Deserialize)]
pub struct KpiQuery {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

pub fn router() -> Router {
    Router::new()
        .route("/summary", get(summary))
        .route("/kpis", get(kpis))
}

/// GET /dashboard/summary - headline numbers for the caller's bots.
pub async fn summary(
    Extension(services): Extension<AppServices>,
    Extension(engine): Extension<Arc<PolicyEngine>>,
    Extension(identity): Extension<IdentityContext>,
) -> axum::response::Response {
    if let Err(e) = authz::require_policy(&engine, &identity, REQUIRE_USER_ROLE) {
        return e;
    }

    let Some(dashboards) = services.dashboards.as_ref() else {
        return errors::not_wired("dashboards");
    };

    match dashboards.summary(identity.user_id()).await {
        Ok(summary) => (StatusCode::OK, Json(summary)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

/// GET /dashboard/kpis?from=..&to=.. - KPI report for a period.
pub async fn kpis(
    Extension(services): Extension<AppServices>,
    Extension(engine): Extension<Arc<PolicyEngine>>,
    Extension(identity): Extension<IdentityContext>,
    Query(query): Query<KpiQuery>,
) -> axum::response::Response {
    if let Err(e) = authz::require_policy(&engine, &identity, REQUIRE_USER_ROLE) {
        return e;
    }

    let Some(dashboards) = services.dashboards.as_ref() else {
        return errors::not_wired("dashboards");
    };

    match dashboards
        .kpis(identity.user_id(), query.from, query.to)
        .await
    {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
