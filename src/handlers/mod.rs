//! HTTP handlers for users and operational endpoints.

pub mod common;
pub mod users;
pub use users::*;
