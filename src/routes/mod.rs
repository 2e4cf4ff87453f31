//! Router assembly.

mod common;
mod users;

pub use common::common_routes_with_ready;
pub use users::user_routes;

use crate::handlers::common::not_found;
use crate::state::AppState;
use axum::Router;

/// Full application router: users resource plus operational routes. Unknown paths get a JSON 404.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .merge(user_routes(state))
        .fallback(not_found)
}
