//! Identifier types for the account domain.

use super::AccountDomainError;
use crate::storage::is_valid_key;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque identifier of a registered user.
///
/// Identifiers are generated from random UUIDs but persisted and compared as
/// strings, so identifiers written by older clients remain valid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Creates a new random user identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Creates a user identifier from an existing token.
    ///
    /// The token names the user's task blob, so it is limited to ASCII
    /// letters, digits, `_` and `-`.
    ///
    /// # Errors
    ///
    /// Returns [`AccountDomainError::EmptyUserId`] when the token is blank,
    /// or [`AccountDomainError::InvalidUserId`] when it holds any other
    /// character.
    pub fn new(value: impl Into<String>) -> Result<Self, AccountDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AccountDomainError::EmptyUserId);
        }
        if !is_valid_key(trimmed) {
            return Err(AccountDomainError::InvalidUserId(trimmed.to_owned()));
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
