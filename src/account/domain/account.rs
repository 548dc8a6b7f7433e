//! Persisted account record and its public profile.

use super::{UserId, ValidRegistration};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Public view of an account, safe to hold in a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountProfile {
    id: UserId,
    name: String,
    username: String,
    email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    contact_number: Option<String>,
    created_at: DateTime<Utc>,
}

impl AccountProfile {
    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> &UserId {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the unique username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the unique email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the optional contact number.
    #[must_use]
    pub fn contact_number(&self) -> Option<&str> {
        self.contact_number.as_deref()
    }

    /// Returns the registration timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Stored account: the public profile plus the credential hash.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    #[serde(flatten)]
    profile: AccountProfile,
    password_hash: String,
}

impl Account {
    /// Creates a new account from validated registration details.
    ///
    /// `password_hash` must already be a credential hash; the cleartext
    /// password is never stored.
    #[must_use]
    pub fn register(
        details: &ValidRegistration,
        password_hash: String,
        clock: &impl Clock,
    ) -> Self {
        Self {
            profile: AccountProfile {
                id: UserId::generate(),
                name: details.name().to_owned(),
                username: details.username().to_owned(),
                email: details.email().to_owned(),
                contact_number: details.contact_number().map(str::to_owned),
                created_at: clock.utc(),
            },
            password_hash,
        }
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> &UserId {
        &self.profile.id
    }

    /// Returns the public profile.
    #[must_use]
    pub const fn profile(&self) -> &AccountProfile {
        &self.profile
    }

    /// Returns the stored credential hash.
    #[must_use]
    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    /// Returns `true` when `identifier` equals this account's email or
    /// username.
    #[must_use]
    pub fn matches_identifier(&self, identifier: &str) -> bool {
        self.profile.email == identifier || self.profile.username == identifier
    }

    /// Returns `true` when this account shares an email or username with
    /// `other`.
    #[must_use]
    pub fn collides_with(&self, other: &Self) -> bool {
        self.profile.email == other.profile.email || self.profile.username == other.profile.username
    }
}

impl std::fmt::Debug for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Account")
            .field("profile", &self.profile)
            .field("password_hash", &"<redacted>")
            .finish()
    }
}
