//! Registration form input and its field rules.

use super::AccountDomainError;
use crate::{config::AuthConfig, validation::FieldErrors};
use std::fmt;

const SPECIAL_CHARACTERS: &str = "!@#$%^&*";
const CONTACT_NUMBER_DIGITS: usize = 10;
const MIN_NAME_CHARS: usize = 2;
const MIN_USERNAME_CHARS: usize = 3;

/// Raw registration form submitted by a prospective user.
#[derive(Clone, PartialEq, Eq)]
pub struct RegisterRequest {
    name: String,
    username: String,
    email: String,
    contact_number: Option<String>,
    password: String,
    confirm_password: Option<String>,
}

impl RegisterRequest {
    /// Creates a request with the required form fields.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            username: username.into(),
            email: email.into(),
            contact_number: None,
            password: password.into(),
            confirm_password: None,
        }
    }

    /// Sets the optional contact number. Blank values count as absent.
    #[must_use]
    pub fn with_contact_number(mut self, contact_number: impl Into<String>) -> Self {
        self.contact_number = Some(contact_number.into());
        self
    }

    /// Sets the password confirmation field.
    #[must_use]
    pub fn with_confirmation(mut self, confirm_password: impl Into<String>) -> Self {
        self.confirm_password = Some(confirm_password.into());
        self
    }

    /// Validates every field, collecting all failures.
    ///
    /// # Errors
    ///
    /// Returns [`AccountDomainError::Validation`] listing each failing field.
    pub fn validate(self, config: &AuthConfig) -> Result<ValidRegistration, AccountDomainError> {
        let mut errors = FieldErrors::new();
        let name = self.name.trim();
        let username = self.username.trim();
        let email = self.email.trim();
        let contact_number = self
            .contact_number
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty());

        check_name(name, &mut errors);
        check_username(username, &mut errors);
        check_email(email, &mut errors);
        if let Some(number) = contact_number {
            check_contact_number(number, &mut errors);
        }
        check_password(&self.password, config.min_password_len, &mut errors);
        match self.confirm_password.as_deref() {
            None | Some("") => errors.add("confirmPassword", "Please confirm your password"),
            Some(confirmation) if confirmation != self.password => {
                errors.add("confirmPassword", "Passwords must match");
            }
            Some(_) => {}
        }

        errors.into_result().map_err(AccountDomainError::Validation)?;
        Ok(ValidRegistration {
            name: name.to_owned(),
            username: username.to_owned(),
            email: email.to_owned(),
            contact_number: contact_number.map(str::to_owned),
            password: self.password,
        })
    }
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("name", &self.name)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("contact_number", &self.contact_number)
            .finish_non_exhaustive()
    }
}

fn check_name(name: &str, errors: &mut FieldErrors) {
    if name.is_empty() {
        errors.add("name", "Name is required");
    } else if name.chars().count() < MIN_NAME_CHARS {
        errors.add("name", "Name must be at least 2 characters");
    }
}

fn check_username(username: &str, errors: &mut FieldErrors) {
    if username.is_empty() {
        errors.add("username", "Username is required");
    } else if username.chars().count() < MIN_USERNAME_CHARS {
        errors.add("username", "Username must be at least 3 characters");
    } else if !username
        .chars()
        .all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
    {
        errors.add(
            "username",
            "Username can only contain letters, numbers, and underscores",
        );
    }
}

fn check_email(email: &str, errors: &mut FieldErrors) {
    if email.is_empty() {
        errors.add("email", "Email is required");
    } else if !is_plausible_email(email) {
        errors.add("email", "Invalid email format");
    }
}

/// Accepts `local@domain.tld` shapes: one `@`, no whitespace, and a dot in
/// the domain with text on both sides.
fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(index, ch)| ch == '.' && index > 0 && index + 1 < domain.len())
}

fn check_contact_number(number: &str, errors: &mut FieldErrors) {
    let valid = number.len() == CONTACT_NUMBER_DIGITS && number.chars().all(|ch| ch.is_ascii_digit());
    if !valid {
        errors.add("contactNumber", "Contact number must be 10 digits");
    }
}

fn check_password(password: &str, min_len: usize, errors: &mut FieldErrors) {
    if password.is_empty() {
        errors.add("password", "Password is required");
    } else if password.chars().count() < min_len {
        errors.add(
            "password",
            format!("Password must be at least {min_len} characters"),
        );
    } else if !password.chars().any(|ch| ch.is_ascii_uppercase()) {
        errors.add(
            "password",
            "Password must contain at least one uppercase letter",
        );
    } else if !password.chars().any(|ch| ch.is_ascii_digit()) {
        errors.add("password", "Password must contain at least one number");
    } else if !password.chars().any(|ch| SPECIAL_CHARACTERS.contains(ch)) {
        errors.add(
            "password",
            "Password must contain at least one special character (!@#$%^&*)",
        );
    }
}

/// Registration details that passed every field rule.
#[derive(Clone, PartialEq, Eq)]
pub struct ValidRegistration {
    name: String,
    username: String,
    email: String,
    contact_number: Option<String>,
    password: String,
}

impl ValidRegistration {
    /// Returns the trimmed display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the trimmed username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the trimmed email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the contact number, if one was supplied.
    #[must_use]
    pub fn contact_number(&self) -> Option<&str> {
        self.contact_number.as_deref()
    }

    /// Returns the cleartext password for hashing.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for ValidRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidRegistration")
            .field("name", &self.name)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("contact_number", &self.contact_number)
            .finish_non_exhaustive()
    }
}
