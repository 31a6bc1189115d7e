//! Repository trait for patient data access.

use crate::domain::entities::{NewPatient, Patient, PatientFields};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing patient records.
///
/// Every single-record read and write is scoped by the owning user id in
/// the same query, so a patient owned by another user behaves exactly like
/// a missing one. Name lookup is the one exception: it resolves mapping
/// references and is deliberately global.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgPatientRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PatientRepository: Send + Sync {
    /// Creates a new patient owned by `new_patient.created_by`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] keyed by `email` if another patient
    /// already uses the email (storage-level unique constraint).
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_patient: NewPatient) -> Result<Patient, AppError>;

    /// Lists the patients created by `owner_id`, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_by_owner(&self, owner_id: i64) -> Result<Vec<Patient>, AppError>;

    /// Finds a patient by id, scoped to its owner.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Patient))` if the patient exists and is owned by `owner_id`
    /// - `Ok(None)` if missing or owned by someone else
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_owned(&self, id: i64, owner_id: i64) -> Result<Option<Patient>, AppError>;

    /// Replaces all mutable fields of an owned patient.
    ///
    /// Returns `Ok(None)` if the patient is missing or owned by someone
    /// else; ownership itself never changes.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] keyed by `email` on an email
    /// collision, [`AppError::Internal`] on database errors.
    async fn update_owned(
        &self,
        id: i64,
        owner_id: i64,
        fields: PatientFields,
    ) -> Result<Option<Patient>, AppError>;

    /// Deletes an owned patient, cascading its mappings.
    ///
    /// Returns `Ok(true)` if a row was deleted, `Ok(false)` if the patient
    /// was missing or owned by someone else.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_owned(&self, id: i64, owner_id: i64) -> Result<bool, AppError>;

    /// Returns whether a patient with the given email exists, optionally
    /// excluding one record (self-exclusion during update).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn email_exists(&self, email: &str, exclude_id: Option<i64>) -> Result<bool, AppError>;

    /// Finds a patient by exact name, lowest id first.
    ///
    /// Used to resolve mapping references; not owner-scoped.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_name(&self, name: &str) -> Result<Option<Patient>, AppError>;
}
