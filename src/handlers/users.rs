//! `GET /users` and `POST /users`.

use crate::error::AppError;
use crate::extractors::Session;
use crate::model::{NewUser, User};
use crate::service::UserService;
use axum::{extract::Query, http::StatusCode, Json};

/// List all users.
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    responses(
        (status = 200, description = "All users, unordered", body = [User]),
        (status = 500, description = "Database error"),
    )
)]
pub async fn list_users(mut session: Session) -> Result<Json<Vec<User>>, AppError> {
    let users = UserService::list(&mut session).await?;
    Ok(Json(users))
}

/// Create a user from the `name` and `email` query parameters.
///
/// A missing parameter is rejected by the `Query` extractor before a session is checked out.
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    params(NewUser),
    responses(
        (status = 201, description = "Created user", body = User),
        (status = 400, description = "Missing or malformed query parameter"),
        (status = 500, description = "Database error"),
    )
)]
pub async fn create_user(
    Query(new_user): Query<NewUser>,
    mut session: Session,
) -> Result<(StatusCode, Json<User>), AppError> {
    let user = UserService::create(&mut session, &new_user).await?;
    Ok((StatusCode::CREATED, Json(user)))
}
