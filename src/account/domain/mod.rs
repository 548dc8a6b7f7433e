//! Domain model for accounts and sessions.

mod account;
mod error;
mod ids;
mod registration;
mod session;

pub use account::{Account, AccountProfile};
pub use error::AccountDomainError;
pub use ids::UserId;
pub use registration::{RegisterRequest, ValidRegistration};
pub use session::{Session, SessionState, SessionToken};
