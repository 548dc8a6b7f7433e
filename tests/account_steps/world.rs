//! Shared world state for account BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::account::{
    adapters::blob::BlobAccountRepository,
    domain::{Account, RegisterRequest},
    services::{AuthResult, AuthService},
};
use taskboard::app::Navigator;
use taskboard::config::AuthConfig;
use taskboard::storage::InMemoryBlobStore;

/// Authentication service used by the BDD world.
pub type TestAuth = AuthService<BlobAccountRepository<InMemoryBlobStore>, DefaultClock>;

/// Scenario world for account behaviour tests.
pub struct AccountWorld {
    pub auth: TestAuth,
    pub navigator: Navigator,
    pub last_registration: Option<AuthResult<Account>>,
    pub last_login: Option<AuthResult<()>>,
}

impl AccountWorld {
    /// Creates a world with no accounts and nobody signed in.
    #[must_use]
    pub fn new() -> Self {
        let auth = AuthService::with_config(
            Arc::new(BlobAccountRepository::new(Arc::new(InMemoryBlobStore::new()))),
            Arc::new(DefaultClock),
            AuthConfig::for_tests(),
        );

        Self {
            auth,
            navigator: Navigator::new(),
            last_registration: None,
            last_login: None,
        }
    }
}

impl Default for AccountWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a complete registration form.
#[must_use]
pub fn registration(username: &str, email: &str, password: &str) -> RegisterRequest {
    RegisterRequest::new("Ada Lovelace", username, email, password).with_confirmation(password)
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> AccountWorld {
    AccountWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
