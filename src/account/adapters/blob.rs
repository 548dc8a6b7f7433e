//! Account repository over a JSON blob store.
//!
//! All accounts live in one JSON array under the [`ACCOUNTS_KEY`] key.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::account::{
    domain::Account,
    ports::{AccountRepository, AccountRepositoryError, AccountRepositoryResult},
};
use crate::storage::{BlobStore, read_records, write_records};

/// Storage key holding every registered account.
pub const ACCOUNTS_KEY: &str = "users";

/// Account repository persisting to a [`BlobStore`].
#[derive(Debug)]
pub struct BlobAccountRepository<S: BlobStore> {
    store: Arc<S>,
    write_lock: Mutex<()>,
}

impl<S: BlobStore> BlobAccountRepository<S> {
    /// Creates a repository over `store`.
    #[must_use]
    pub const fn new(store: Arc<S>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    fn load(&self) -> AccountRepositoryResult<Vec<Account>> {
        read_records(&*self.store, ACCOUNTS_KEY).map_err(AccountRepositoryError::persistence)
    }
}

#[async_trait]
impl<S: BlobStore> AccountRepository for BlobAccountRepository<S> {
    async fn insert(&self, account: &Account) -> AccountRepositoryResult<()> {
        let _guard = self.write_lock.lock().map_err(|err| {
            AccountRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let mut accounts = self.load()?;
        if accounts.iter().any(|existing| existing.collides_with(account)) {
            return Err(AccountRepositoryError::AlreadyExists {
                email: account.profile().email().to_owned(),
                username: account.profile().username().to_owned(),
            });
        }

        accounts.push(account.clone());
        write_records(&*self.store, ACCOUNTS_KEY, &accounts)
            .map_err(AccountRepositoryError::persistence)
    }

    async fn find_by_identifier(
        &self,
        identifier: &str,
    ) -> AccountRepositoryResult<Option<Account>> {
        Ok(self
            .load()?
            .into_iter()
            .find(|account| account.matches_identifier(identifier)))
    }
}
