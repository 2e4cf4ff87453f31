//! Users resource routes.

use crate::handlers::users::{create_user, list_users};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn user_routes(state: AppState) -> Router {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .with_state(state)
}
