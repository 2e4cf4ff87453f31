//! The `users` row and the input needed to create one.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// One row of the `users` table. Name and email are nullable columns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct User {
    pub id: i32,
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Query parameters of `POST /users`. Both are required; values are stored as given.
#[derive(Clone, Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}
