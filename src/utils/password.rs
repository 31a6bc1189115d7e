//! Password hashing with Argon2id.
//!
//! Passwords are stored as PHC-format strings, so parameters and salt
//! travel with the hash and can be upgraded without a migration.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use std::sync::LazyLock;

// Hash computed once at startup and verified against when login hits an
// unknown email, so the response time does not reveal whether the email
// exists.
static DUMMY_HASH: LazyLock<String> =
    LazyLock::new(|| hash_password("timing-equalizer").expect("hashing a constant cannot fail"));

/// Hashes a password with Argon2id and a fresh random salt.
///
/// # Errors
///
/// Returns an error if the hashing backend fails.
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Verifies a password against a stored PHC-format hash.
///
/// Returns `false` for a mismatch or an unparseable hash.
pub fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

/// Stored-format hash of a throwaway constant, for equalizing login timing
/// when the email does not match any user.
pub fn dummy_hash() -> &'static str {
    &DUMMY_HASH
}
