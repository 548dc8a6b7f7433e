//! Application services for registration and login.

mod auth;

pub use auth::{AuthError, AuthResult, AuthService};
