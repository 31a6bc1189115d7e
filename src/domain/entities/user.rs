//! User entity representing an authenticated account.

/// An account that can log in and own patient records.
///
/// The email is the login identity and is unique across users. The password
/// is stored only as an Argon2id PHC hash; the plaintext never reaches the
/// persistence layer.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub is_staff: bool,
    pub is_superuser: bool,
}

/// Input data for creating a new user.
///
/// `is_staff`/`is_superuser` are false for self-registration; the admin CLI
/// sets both when creating a superuser.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub is_staff: bool,
    pub is_superuser: bool,
}

impl NewUser {
    /// Input for a regular self-registered account.
    pub fn registration(name: String, email: String, password_hash: String) -> Self {
        Self {
            name,
            email,
            password_hash,
            is_staff: false,
            is_superuser: false,
        }
    }

    /// Input for an administrative account with both privilege flags set.
    pub fn superuser(name: String, email: String, password_hash: String) -> Self {
        Self {
            name,
            email,
            password_hash,
            is_staff: true,
            is_superuser: true,
        }
    }
}
