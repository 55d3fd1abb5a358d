//! Authentication service layer.
//!
//! Registration, login, and current-user lookup. Credential validation and
//! the shaping of auth failures both live here, so handlers only translate
//! results into HTTP.

use crate::auth::{password, TokenIssuer};
use crate::domain::{EmailAddress, ValidationError};
use crate::error::{ApiError, ApiResult};
use crate::models::User;
use crate::repositories::UserRepository;
use async_trait::async_trait;
use std::sync::Arc;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Result of a successful registration or login.
#[derive(Debug, Clone)]
pub struct AuthSession {
    /// Fresh bearer token
    pub token: String,

    /// Id of the authenticated user
    pub user_id: i64,

    /// Normalized account email
    pub email: String,
}

/// Account operations.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Create an account and issue a fresh token.
    async fn register(&self, email: &str, password: &str) -> ApiResult<AuthSession>;

    /// Verify credentials and issue a fresh token.
    ///
    /// Unknown email and wrong password fail identically, so a caller cannot
    /// probe which addresses are registered.
    async fn login(&self, email: &str, password: &str) -> ApiResult<AuthSession>;

    /// Load the account a verified token refers to.
    async fn current_user(&self, user_id: i64) -> ApiResult<User>;
}

/// Default implementation of AuthService.
pub struct AuthServiceImpl {
    users: Arc<dyn UserRepository>,
    tokens: TokenIssuer,
    bcrypt_cost: u32,
}

impl AuthServiceImpl {
    /// Create a new auth service.
    pub fn new(users: Arc<dyn UserRepository>, tokens: TokenIssuer, bcrypt_cost: u32) -> Self {
        Self {
            users,
            tokens,
            bcrypt_cost,
        }
    }

    /// Validate and normalize a submitted email.
    fn normalize_email(email: &str) -> Result<EmailAddress, ValidationError> {
        Ok(EmailAddress::new(email.trim())?.normalized())
    }

    fn issue_session(&self, user_id: i64, email: String) -> ApiResult<AuthSession> {
        let token = self
            .tokens
            .issue(user_id)
            .map_err(|e| ApiError::internal("Server error during authentication", e))?;
        Ok(AuthSession {
            token,
            user_id,
            email,
        })
    }
}

#[async_trait]
impl AuthService for AuthServiceImpl {
    async fn register(&self, email: &str, password: &str) -> ApiResult<AuthSession> {
        let email = Self::normalize_email(email)?;
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort {
                min: MIN_PASSWORD_LEN,
            }
            .into());
        }

        let existing = self
            .users
            .find_by_email(email.as_str())
            .await
            .map_err(|e| ApiError::internal("Server error during registration", e))?;
        if existing.is_some() {
            return Err(ApiError::conflict("User already exists with this email"));
        }

        let hash = password::hash_password(password, self.bcrypt_cost)
            .map_err(|e| ApiError::internal("Server error during registration", e))?;

        let user = match self.users.create(email.as_str(), &hash).await {
            Ok(user) => user,
            // Lost a race against a concurrent registration for the same email
            Err(e) if is_unique_violation(&e) => {
                return Err(ApiError::conflict("User already exists with this email"));
            }
            Err(e) => return Err(ApiError::internal("Server error during registration", e)),
        };

        tracing::info!(user_id = user.id, "registered new user");
        self.issue_session(user.id, user.email)
    }

    async fn login(&self, email: &str, password: &str) -> ApiResult<AuthSession> {
        let email = Self::normalize_email(email)?;
        if password.is_empty() {
            return Err(ValidationError::Required("Password").into());
        }

        let credentials = self
            .users
            .find_by_email(email.as_str())
            .await
            .map_err(|e| ApiError::internal("Server error during login", e))?;
        let Some(credentials) = credentials else {
            return Err(ApiError::InvalidCredentials);
        };

        let matches = password::verify_password(password, &credentials.password_hash)
            .map_err(|e| ApiError::internal("Server error during login", e))?;
        if !matches {
            return Err(ApiError::InvalidCredentials);
        }

        self.issue_session(credentials.id, credentials.email)
    }

    async fn current_user(&self, user_id: i64) -> ApiResult<User> {
        let user = self
            .users
            .find_by_id(user_id)
            .await
            .map_err(|e| ApiError::internal("Server error while fetching user", e))?;
        user.ok_or(ApiError::NotFound("User"))
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(|db| db.is_unique_violation())
}
