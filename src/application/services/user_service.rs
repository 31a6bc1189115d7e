//! User registration and credential verification service.

use std::sync::Arc;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::utils::password::{dummy_hash, hash_password, verify_password};

/// Message returned for any credential failure. Unknown email and wrong
/// password are indistinguishable to the caller.
pub const LOGIN_FAILED: &str = "No active account found with the given credentials";

/// Service for account registration and login credential checks.
///
/// Hashing happens here so no plaintext password crosses the repository
/// boundary. Token issuance lives in
/// [`crate::application::services::TokenService`].
pub struct UserService<U: UserRepository> {
    user_repository: Arc<U>,
}

impl<U: UserRepository> UserService<U> {
    /// Creates a new user service.
    pub fn new(user_repository: Arc<U>) -> Self {
        Self { user_repository }
    }

    /// Registers a new account.
    ///
    /// The duplicate-email pre-check is best-effort; the unique constraint
    /// in storage catches the race and maps to the same error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] keyed by `email` if the email is
    /// already registered, [`AppError::Internal`] if hashing fails.
    pub async fn register(
        &self,
        name: String,
        email: String,
        password: String,
    ) -> Result<User, AppError> {
        if self.user_repository.email_exists(&email).await? {
            return Err(AppError::field_error("email", "Email already exists"));
        }

        let password_hash = hash_password(&password)
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;

        let user = self
            .user_repository
            .create(NewUser::registration(name, email, password_hash))
            .await?;

        tracing::info!(user_id = user.id, "User registered");

        Ok(user)
    }

    /// Verifies login credentials and returns the account.
    ///
    /// When the email is unknown, a verification against a dummy hash still
    /// runs so both failure paths take comparable time.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] with [`LOGIN_FAILED`] on unknown
    /// email or wrong password.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<User, AppError> {
        let Some(user) = self.user_repository.find_by_email(email).await? else {
            verify_password(password, dummy_hash());
            return Err(AppError::unauthorized(LOGIN_FAILED));
        };

        if !verify_password(password, &user.password_hash) {
            return Err(AppError::unauthorized(LOGIN_FAILED));
        }

        Ok(user)
    }
}
