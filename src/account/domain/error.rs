//! Error types for account domain validation.

use crate::validation::FieldErrors;
use thiserror::Error;

/// Errors returned while constructing account domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccountDomainError {
    /// One or more registration fields failed validation.
    #[error("registration is invalid: {0}")]
    Validation(FieldErrors),

    /// A user identifier was empty after trimming.
    #[error("user identifier must not be empty")]
    EmptyUserId,

    /// A user identifier held characters unusable in a storage key.
    #[error("user identifier contains unsupported characters: {0}")]
    InvalidUserId(String),
}
