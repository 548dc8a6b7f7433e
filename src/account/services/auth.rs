//! Service layer for account registration, login and logout.

use crate::account::{
    domain::{Account, AccountDomainError, RegisterRequest, Session, SessionState},
    ports::{AccountRepository, AccountRepositoryError},
};
use crate::config::AuthConfig;
use mockable::Clock;
use std::sync::{Arc, OnceLock};
use thiserror::Error;

/// Password hashed once per service so unknown identifiers cost a full
/// verification, like known ones.
const DUMMY_PASSWORD: &str = "taskboard-dummy-password";

/// Service-level errors for authentication flows.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Registration form validation failed.
    #[error(transparent)]
    Domain(#[from] AccountDomainError),

    /// The email or username is already registered.
    #[error("user already exists")]
    DuplicateAccount,

    /// The identifier or password did not match a stored account.
    ///
    /// Deliberately does not say which of the two was wrong.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Password hashing or verification failed.
    #[error("credential hashing failed: {0}")]
    Hashing(#[from] bcrypt::BcryptError),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(AccountRepositoryError),
}

impl From<AccountRepositoryError> for AuthError {
    fn from(err: AccountRepositoryError) -> Self {
        match err {
            AccountRepositoryError::AlreadyExists { .. } => Self::DuplicateAccount,
            other @ AccountRepositoryError::Persistence(_) => Self::Repository(other),
        }
    }
}

/// Result type for authentication service operations.
pub type AuthResult<T> = Result<T, AuthError>;

/// Registration and login orchestration service.
#[derive(Clone)]
pub struct AuthService<R, C>
where
    R: AccountRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    config: AuthConfig,
    dummy_hash: OnceLock<String>,
}

impl<R, C> AuthService<R, C>
where
    R: AccountRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new authentication service with default settings.
    #[must_use]
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self::with_config(repository, clock, AuthConfig::default())
    }

    /// Creates a new authentication service with custom settings.
    #[must_use]
    pub const fn with_config(repository: Arc<R>, clock: Arc<C>, config: AuthConfig) -> Self {
        Self {
            repository,
            clock,
            config,
            dummy_hash: OnceLock::new(),
        }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Registers a new account.
    ///
    /// The password is stored only as a bcrypt hash.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Domain`] when a form field is invalid,
    /// [`AuthError::DuplicateAccount`] when the email or username is taken,
    /// or another [`AuthError`] when hashing or persistence fails.
    pub async fn register(&self, request: RegisterRequest) -> AuthResult<Account> {
        let details = request.validate(&self.config)?;
        let password_hash = bcrypt::hash(details.password(), self.config.bcrypt_cost)?;
        let account = Account::register(&details, password_hash, &*self.clock);

        if let Err(err) = self.repository.insert(&account).await {
            tracing::warn!(username = details.username(), error = %err, "registration rejected");
            return Err(err.into());
        }
        tracing::info!(user_id = %account.id(), "account registered");
        Ok(account)
    }

    /// Checks `identifier` (email or username) and `password` and issues a
    /// session.
    ///
    /// An unknown identifier is verified against a dummy hash, and a stored
    /// hash bcrypt cannot parse counts as a mismatch, so every rejection
    /// looks the same to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] for an unknown identifier, a
    /// wrong password or an unreadable stored hash, and another
    /// [`AuthError`] when lookup fails.
    pub async fn login(&self, identifier: &str, password: &str) -> AuthResult<Session> {
        let found = self.repository.find_by_identifier(identifier.trim()).await?;
        let stored_hash = match &found {
            Some(account) => account.password_hash(),
            None => self.dummy_hash()?,
        };
        let verified = bcrypt::verify(password, stored_hash).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "stored password hash is unreadable");
            false
        });
        let Some(account) = found.filter(|_| verified) else {
            tracing::info!("login rejected");
            return Err(AuthError::InvalidCredentials);
        };

        let session = Session::issue(account.profile().clone(), self.clock.utc());
        tracing::info!(user_id = %account.id(), "login succeeded");
        Ok(session)
    }

    fn dummy_hash(&self) -> AuthResult<&str> {
        if let Some(hash) = self.dummy_hash.get() {
            return Ok(hash.as_str());
        }
        let hash = bcrypt::hash(DUMMY_PASSWORD, self.config.bcrypt_cost)?;
        Ok(self.dummy_hash.get_or_init(|| hash).as_str())
    }

    /// Logs in and installs the session into `state`.
    ///
    /// On failure `state` is left untouched.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Self::login`].
    pub async fn sign_in(
        &self,
        state: &mut SessionState,
        identifier: &str,
        password: &str,
    ) -> AuthResult<()> {
        let session = self.login(identifier, password).await?;
        state.sign_in(session);
        Ok(())
    }

    /// Destroys the session held in `state`, if any.
    pub fn logout(&self, state: &mut SessionState) -> Option<Session> {
        let ended = state.sign_out();
        if let Some(session) = &ended {
            tracing::info!(user_id = %session.user_id(), "logged out");
        }
        ended
    }
}
