//! Repository port for account registration and lookup.

use crate::account::domain::Account;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for account repository operations.
pub type AccountRepositoryResult<T> = Result<T, AccountRepositoryError>;

/// Account persistence contract.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Stores a newly registered account.
    ///
    /// # Errors
    ///
    /// Returns [`AccountRepositoryError::AlreadyExists`] when another account
    /// already uses the same email or username.
    async fn insert(&self, account: &Account) -> AccountRepositoryResult<()>;

    /// Finds the account whose email or username equals `identifier`.
    ///
    /// Returns `None` when no account matches.
    async fn find_by_identifier(&self, identifier: &str)
    -> AccountRepositoryResult<Option<Account>>;
}

/// Errors returned by account repository implementations.
#[derive(Debug, Clone, Error)]
pub enum AccountRepositoryError {
    /// The email or username is already registered.
    #[error("an account already uses email '{email}' or username '{username}'")]
    AlreadyExists {
        /// Email of the rejected account.
        email: String,
        /// Username of the rejected account.
        username: String,
    },

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl AccountRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
