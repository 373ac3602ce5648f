//! Credential service: registration, login, and admin login.
//!
//! Usernames are derived from the registrant's name and phone number and are
//! not checked for collisions. Passwords are random alphanumeric strings stored
//! and compared as plaintext.

use std::sync::Mutex;

use jiff::Timestamp;
use rand::{Rng, distributions::Alphanumeric};
use uuid::Uuid;

use crate::model::UserCredentials;
use crate::storage::{StorageError, UserRepository};

const PASSWORD_LEN: usize = 8;
const MIN_PHONE_DIGITS: usize = 10;
const USERNAME_PHONE_DIGITS: usize = 4;

/// Fixed login for the seeded demo account.
pub const DEMO_USERNAME: &str = "user_demo_9876543210";
pub const DEMO_PASSWORD: &str = "DemoUser@3210";

#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    #[error("{0}")]
    Validation(String),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

pub type Result<T> = core::result::Result<T, CredentialError>;

/// The single administrator account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

/// Name with all whitespace removed, followed by the last four digits of the phone.
///
/// `("John Doe", "9876543210")` gives `"JohnDoe3210"`.
pub fn generate_username(name: &str, phone: &str) -> String {
    let clean_name: String = name.chars().filter(|c| !c.is_whitespace()).collect();
    let digits = phone_digits(phone);
    let tail = &digits[digits.len().saturating_sub(USERNAME_PHONE_DIGITS)..];
    format!("{clean_name}{tail}")
}

/// Eight characters drawn uniformly from `[A-Za-z0-9]`.
pub fn generate_password() -> String {
    generate_password_with(&mut rand::thread_rng())
}

fn generate_password_with<R: Rng>(rng: &mut R) -> String {
    (0..PASSWORD_LEN)
        .map(|_| char::from(rng.sample(Alphanumeric)))
        .collect()
}

fn phone_digits(phone: &str) -> String {
    phone.chars().filter(char::is_ascii_digit).collect()
}

/// Checks the registration form: a name, an email with `@`, a phone with at
/// least ten digits once punctuation is stripped.
pub fn validate_registration(name: &str, phone: &str, email: &str) -> Result<()> {
    if name.trim().is_empty() || phone.trim().is_empty() || email.trim().is_empty() {
        return Err(CredentialError::Validation(
            "name, phone, and email are required".to_string(),
        ));
    }
    if !email.contains('@') {
        return Err(CredentialError::Validation(
            "please enter a valid email address".to_string(),
        ));
    }
    if phone_digits(phone).len() < MIN_PHONE_DIGITS {
        return Err(CredentialError::Validation(
            "please enter a valid 10-digit phone number".to_string(),
        ));
    }
    Ok(())
}

/// Registers and authenticates users against a [`UserRepository`].
pub struct CredentialService<'a, R> {
    users: &'a R,
    admin: AdminCredentials,
    lock: Mutex<()>,
}

impl<'a, R: UserRepository> CredentialService<'a, R> {
    pub fn new(users: &'a R, admin: AdminCredentials) -> Self {
        Self {
            users,
            admin,
            lock: Mutex::new(()),
        }
    }

    /// Validates the form, then stores a new user with generated credentials.
    pub fn register_user(&self, name: &str, phone: &str, email: &str) -> Result<UserCredentials> {
        validate_registration(name, phone, email)?;

        let user = UserCredentials {
            id: format!("user_{}", Uuid::new_v4().simple()),
            name: name.trim().to_string(),
            phone: phone.trim().to_string(),
            email: email.trim().to_string(),
            username: generate_username(name, phone),
            password: generate_password(),
            created_at: Timestamp::now(),
        };

        let _guard = self.lock.lock().map_err(|_| StorageError::LockPoisoned)?;
        self.users.append_user(&user)?;
        tracing::info!(user_id = %user.id, username = %user.username, "registered user");
        Ok(user)
    }

    /// Looks up `username` and compares the password exactly.
    ///
    /// Returns `Ok(None)` for an unknown user and for a wrong password alike.
    /// Only an empty username or password is an error.
    pub fn authenticate_user(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<UserCredentials>> {
        if username.is_empty() || password.is_empty() {
            return Err(CredentialError::Validation(
                "username and password are required".to_string(),
            ));
        }
        let user = self
            .users
            .find_user_by_username(username)
            .filter(|u| u.password == password);
        match &user {
            Some(u) => tracing::info!(user_id = %u.id, "user authenticated"),
            None => tracing::info!(username, "authentication failed"),
        }
        Ok(user)
    }

    /// Compares against the configured administrator account.
    pub fn authenticate_admin(&self, username: &str, password: &str) -> bool {
        let ok = !username.is_empty()
            && username == self.admin.username
            && password == self.admin.password;
        if !ok {
            tracing::info!(username, "admin authentication failed");
        }
        ok
    }

    /// Stores the demo account, logging in as [`DEMO_USERNAME`] /
    /// [`DEMO_PASSWORD`], when no user is registered yet.
    ///
    /// Returns whether the account was created.
    pub fn ensure_demo_user(&self) -> Result<bool> {
        let _guard = self.lock.lock().map_err(|_| StorageError::LockPoisoned)?;
        if !self.users.all_users().is_empty() {
            return Ok(false);
        }
        let user = UserCredentials {
            id: "user_demo".to_string(),
            name: "Demo User".to_string(),
            phone: "9876543210".to_string(),
            email: "demo@agro.com".to_string(),
            username: DEMO_USERNAME.to_string(),
            password: DEMO_PASSWORD.to_string(),
            created_at: Timestamp::now(),
        };
        self.users.append_user(&user)?;
        tracing::info!(username = %user.username, "seeded demo user");
        Ok(true)
    }
}
