//! DTOs for registration, login, and token refresh.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entities::User;

/// Request to register a new account.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(custom(function = validate_name))]
    pub name: String,

    #[validate(email(message = "Enter a valid email address."))]
    pub email: String,

    /// Write-only: accepted here, never serialized back.
    #[validate(length(min = 1, message = "This field may not be blank."))]
    pub password: String,
}

/// Non-blank, at most 50 characters.
fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::new("blank")
            .with_message(Cow::Borrowed("This field may not be blank.")));
    }
    if name.chars().count() > 50 {
        return Err(ValidationError::new("max_length").with_message(Cow::Borrowed(
            "Ensure this field has no more than 50 characters.",
        )));
    }
    Ok(())
}

/// Newly registered account. The password hash never leaves the server.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<User> for RegisterResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

/// Login credentials. Identity is keyed by email.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "This field may not be blank."))]
    pub email: String,

    #[validate(length(min = 1, message = "This field may not be blank."))]
    pub password: String,
}

/// Credential pair issued on successful login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access: String,
    pub refresh: String,
}

/// Request to exchange a refresh token for a new access token.
#[derive(Debug, Deserialize, Validate)]
pub struct RefreshRequest {
    #[validate(length(min = 1, message = "This field may not be blank."))]
    pub refresh: String,
}

/// Fresh access token.
#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    pub access: String,
}
