//! Helper functions used across the application:
//!
//! - [`db_error`] - Classification of database constraint violations
//! - [`password`] - Argon2id password hashing and verification

pub mod db_error;
pub mod password;
