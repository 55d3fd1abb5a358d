//! User account model.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// A registered account, as exposed by the API.
///
/// The password hash never leaves the storage layer through this type.
#[derive(Debug, Clone, Serialize, FromRow, PartialEq, Eq)]
pub struct User {
    /// Unique identifier for the user
    pub id: i64,

    /// Normalized (lowercased) email address
    pub email: String,

    /// When the account was created
    pub created_at: DateTime<Utc>,
}

/// Login-time view of a user row, carrying the stored password hash.
#[derive(Debug, Clone, FromRow)]
pub struct UserCredentials {
    /// Unique identifier for the user
    pub id: i64,

    /// Normalized (lowercased) email address
    pub email: String,

    /// bcrypt hash of the account password
    pub password_hash: String,
}
