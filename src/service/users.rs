//! List and insert users through a request session. No validation happens here;
//! whatever the database rejects comes back as `AppError::Db`.

use crate::error::AppError;
use crate::model::{NewUser, User};
use sqlx::{Connection, PgConnection};

pub struct UserService;

impl UserService {
    /// Every row of `users`. No ORDER BY: row order is whatever the planner returns.
    #[tracing::instrument(skip_all)]
    pub async fn list(conn: &mut PgConnection) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>("SELECT id, name, email FROM users")
            .fetch_all(&mut *conn)
            .await?;
        tracing::debug!(count = users.len(), "listed users");
        Ok(users)
    }

    /// Insert one row and return it with its generated id, after commit.
    #[tracing::instrument(skip_all)]
    pub async fn create(conn: &mut PgConnection, new_user: &NewUser) -> Result<User, AppError> {
        let mut tx = conn.begin().await?;
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (name, email) VALUES ($1, $2) RETURNING id, name, email",
        )
        .bind(&new_user.name)
        .bind(&new_user.email)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;
        tracing::debug!(user_id = user.id, "user created");
        Ok(user)
    }
}
