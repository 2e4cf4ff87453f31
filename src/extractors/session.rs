//! Request-scoped database session. Checked out of the pool when the handler is called and
//! returned to it when the guard drops, whether the handler succeeds, fails, or is cancelled.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use sqlx::pool::PoolConnection;
use sqlx::{PgConnection, PgPool, Postgres};
use std::ops::{Deref, DerefMut};

pub struct Session {
    conn: PoolConnection<Postgres>,
}

impl Session {
    pub async fn acquire(pool: &PgPool) -> Result<Self, AppError> {
        let conn = pool.acquire().await?;
        tracing::trace!("session acquired");
        Ok(Session { conn })
    }
}

impl Deref for Session {
    type Target = PgConnection;

    fn deref(&self) -> &PgConnection {
        &self.conn
    }
}

impl DerefMut for Session {
    fn deref_mut(&mut self) -> &mut PgConnection {
        &mut self.conn
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Session
where
    PgPool: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let pool = PgPool::from_ref(state);
        Session::acquire(&pool).await
    }
}
