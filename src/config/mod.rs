//! Process configuration from environment variables (and `.env` when present).

pub mod database;
pub mod server;

pub use database::*;
pub use server::*;

use crate::error::ConfigError;

/// Everything the binary needs at startup, built once and passed down explicitly.
#[derive(Clone, Debug)]
pub struct Settings {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
}

impl Settings {
    /// Load `.env` if present, then read all settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Settings {
            database: DatabaseConfig::from_lookup(&lookup),
            server: ServerConfig::from_lookup(&lookup)?,
        })
    }
}
