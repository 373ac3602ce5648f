//! Registered users.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A registered user, including the generated login credentials.
///
/// Passwords are stored as plaintext. Records are never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCredentials {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub username: String,
    pub password: String,
    pub created_at: Timestamp,
}

/// What a successful login hands back: the user without the password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub username: String,
}

impl From<&UserCredentials> for UserProfile {
    fn from(user: &UserCredentials) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            username: user.username.clone(),
        }
    }
}
