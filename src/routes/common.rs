//! Common routes: health, readiness, version, OpenAPI document.

use crate::handlers::common::{health, openapi, ready, version};
use crate::state::AppState;
use axum::{routing::get, Router};

/// GET /health, /ready (database check), /version, /openapi.json.
pub fn common_routes_with_ready(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .route("/openapi.json", get(openapi))
        .with_state(state)
}
