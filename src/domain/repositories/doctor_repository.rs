//! Repository trait for doctor data access.

use crate::domain::entities::{Doctor, DoctorFields};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing doctor records.
///
/// Doctors are global: any authenticated caller sees the same set, so no
/// method takes an owner.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgDoctorRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DoctorRepository: Send + Sync {
    /// Creates a new doctor.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] keyed by `email` on a duplicate
    /// email, [`AppError::Internal`] on database errors.
    async fn create(&self, fields: DoctorFields) -> Result<Doctor, AppError>;

    /// Lists all doctors ordered by id.
    async fn list(&self) -> Result<Vec<Doctor>, AppError>;

    /// Finds a doctor by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Doctor>, AppError>;

    /// Replaces all fields of a doctor. Returns `Ok(None)` if no such id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] keyed by `email` on an email
    /// collision with a different doctor.
    async fn update(&self, id: i64, fields: DoctorFields) -> Result<Option<Doctor>, AppError>;

    /// Deletes a doctor, cascading its mappings. Returns `Ok(true)` if a
    /// row was deleted.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Returns whether a doctor with the given email exists, optionally
    /// excluding one record (self-exclusion during update).
    async fn email_exists(&self, email: &str, exclude_id: Option<i64>) -> Result<bool, AppError>;

    /// Finds a doctor by exact name, lowest id first. Used to resolve
    /// mapping references.
    async fn find_by_name(&self, name: &str) -> Result<Option<Doctor>, AppError>;
}
