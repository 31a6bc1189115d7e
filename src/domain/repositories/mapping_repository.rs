//! Repository trait for patient-doctor mapping data access.

use crate::domain::entities::{Doctor, Mapping, MappingWithNames, NewMapping};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing patient-doctor mappings.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMappingRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Creates a new mapping with `mapped_at = now()`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the pair is already mapped
    /// (storage-level unique constraint), [`AppError::Internal`] on
    /// database errors.
    async fn create(&self, new_mapping: NewMapping) -> Result<Mapping, AppError>;

    /// Lists all mappings with patient and doctor names resolved, ordered
    /// by id.
    async fn list_with_names(&self) -> Result<Vec<MappingWithNames>, AppError>;

    /// Returns the doctors mapped to a patient, ordered by mapping id.
    ///
    /// An empty result does not distinguish "patient has no mappings" from
    /// "no such patient".
    async fn doctors_for_patient(&self, patient_id: i64) -> Result<Vec<Doctor>, AppError>;

    /// Returns whether a live mapping for the pair exists.
    ///
    /// Best-effort pre-check; the unique constraint is the authoritative
    /// guard.
    async fn pair_exists(&self, patient_id: i64, doctor_id: i64) -> Result<bool, AppError>;

    /// Deletes a mapping by id. Returns `Ok(true)` if a row was deleted.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
