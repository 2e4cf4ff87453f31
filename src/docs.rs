//! OpenAPI description of the users endpoints, served at `/openapi.json`.

use crate::model::User;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "users-api"),
    paths(crate::handlers::users::list_users, crate::handlers::users::create_user),
    components(schemas(User)),
    tags((name = "users", description = "Users resource"))
)]
pub struct ApiDoc;
