//! Users API: a small REST service over a PostgreSQL `users` table.

pub mod config;
pub mod docs;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::{DatabaseConfig, ServerConfig, Settings};
pub use error::{AppError, ConfigError};
pub use extractors::Session;
pub use migration::{ensure_tables, SCHEMA};
pub use model::{NewUser, User};
pub use routes::{app, common_routes_with_ready, user_routes};
pub use service::UserService;
pub use state::AppState;
pub use store::connect;
