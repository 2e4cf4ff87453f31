//! Data access for the `users` table.

mod users;
pub use users::UserService;
