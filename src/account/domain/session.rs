//! Authenticated sessions and the state that owns them.

use super::{AccountProfile, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use uuid::Uuid;

/// Opaque bearer token identifying a session.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(String);

impl SessionToken {
    /// Derives a fresh token for `user_id` issued at `issued_at`.
    ///
    /// The digest mixes in a random nonce so two logins in the same
    /// millisecond still receive distinct tokens.
    #[must_use]
    pub fn derive(user_id: &UserId, issued_at: DateTime<Utc>) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(user_id.as_str().as_bytes());
        hasher.update(b":");
        hasher.update(issued_at.timestamp_millis().to_string().as_bytes());
        hasher.update(b":");
        hasher.update(Uuid::new_v4().as_bytes());
        Self(format!("{:x}", hasher.finalize()))
    }

    /// Returns the token as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(<redacted>)")
    }
}

/// A logged-in user: the token plus the public profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    token: SessionToken,
    profile: AccountProfile,
    issued_at: DateTime<Utc>,
}

impl Session {
    /// Issues a session for `profile` at `issued_at`.
    #[must_use]
    pub fn issue(profile: AccountProfile, issued_at: DateTime<Utc>) -> Self {
        Self {
            token: SessionToken::derive(profile.id(), issued_at),
            profile,
            issued_at,
        }
    }

    /// Returns the session token.
    #[must_use]
    pub const fn token(&self) -> &SessionToken {
        &self.token
    }

    /// Returns the authenticated user's profile.
    #[must_use]
    pub const fn profile(&self) -> &AccountProfile {
        &self.profile
    }

    /// Returns the authenticated user's identifier.
    #[must_use]
    pub const fn user_id(&self) -> &UserId {
        self.profile.id()
    }

    /// Returns when the session was issued.
    #[must_use]
    pub const fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }
}

/// Explicitly owned holder of the current session, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    current: Option<Session>,
}

impl SessionState {
    /// Creates a signed-out state.
    #[must_use]
    pub const fn new() -> Self {
        Self { current: None }
    }

    /// Installs `session`, replacing any previous one.
    pub fn sign_in(&mut self, session: Session) {
        self.current = Some(session);
    }

    /// Destroys the current session and returns it.
    pub const fn sign_out(&mut self) -> Option<Session> {
        self.current.take()
    }

    /// Returns the current session.
    #[must_use]
    pub const fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    /// Returns `true` while a session is held.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }
}
