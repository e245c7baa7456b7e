use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
    Json, Router,
};

use botdesk_ai::RegisterDataSourceRequest;
use botdesk_auth::{PolicyEngine, REQUIRE_USER_ROLE};
use botdesk_core::{BotId, DataSourceId};

use crate::app::{errors, services::AppServices};
use crate::authz;
use crate::context::IdentityContext;

pub fn router() -> Router {
    Router::new()
        .route("/bots/:bot_id/data-sources", get(list))
        .route("/data-sources", post(register))
        .route("/data-sources/:id", delete(remove))
}

/// GET /bots/:bot_id/data-sources - knowledge sources of one bot.
pub async fn list(
    Extension(services): Extension<AppServices>,
    Extension(engine): Extension<Arc<PolicyEngine>>,
    Extension(identity): Extension<IdentityContext>,
    Path(bot_id): Path<String>,
) -> axum::response::Response {
    if let Err(e) = authz::require_policy(&engine, &identity, REQUIRE_USER_ROLE) {
        return e;
    }

    let bot_id: BotId = match bot_id.parse() {
        Ok(id) => id,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid bot id"),
    };

    let Some(data_sources) = services.data_sources.as_ref() else {
        return errors::not_wired("data sources");
    };

    match data_sources.list(identity.user_id(), bot_id).await {
        Ok(sources) => (StatusCode::OK, Json(sources)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

/// POST /data-sources - register a knowledge source.
pub async fn register(
    Extension(services): Extension<AppServices>,
    Extension(engine): Extension<Arc<PolicyEngine>>,
    Extension(identity): Extension<IdentityContext>,
    Json(request): Json<RegisterDataSourceRequest>,
) -> axum::response::Response {
    if let Err(e) = authz::require_policy(&engine, &identity, REQUIRE_USER_ROLE) {
        return e;
    }

    let Some(data_sources) = services.data_sources.as_ref() else {
        return errors::not_wired("data sources");
    };

    match data_sources.register(identity.user_id(), request).await {
        Ok(source) => (StatusCode::CREATED, Json(source)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

/// DELETE /data-sources/:id - remove a knowledge source.
pub async fn remove(
    Extension(services): Extension<AppServices>,
    Extension(engine): Extension<Arc<PolicyEngine>>,
    Extension(identity): Extension<IdentityContext>,
    Path(id): Path<String>,
) -> axum::response::Response {
    if let Err(e) = authz::require_policy(&engine, &identity, REQUIRE_USER_ROLE) {
        return e;
    }

    let id: DataSourceId = match id.parse() {
        Ok(id) => id,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid data source id")
        }
    };

    let Some(data_sources) = services.data_sources.as_ref() else {
        return errors::not_wired("data sources");
    };

    match data_sources.remove(identity.user_id(), id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
