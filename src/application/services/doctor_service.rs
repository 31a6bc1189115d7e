//! Global doctor CRUD service.

use std::sync::Arc;

use crate::domain::entities::{Doctor, DoctorFields};
use crate::domain::repositories::DoctorRepository;
use crate::error::AppError;

/// Service implementing the doctor resource semantics.
///
/// Doctors are visible to every authenticated caller, so no method takes an
/// owner; authentication itself is enforced upstream.
pub struct DoctorService<D: DoctorRepository> {
    doctor_repository: Arc<D>,
}

impl<D: DoctorRepository> DoctorService<D> {
    /// Creates a new doctor service.
    pub fn new(doctor_repository: Arc<D>) -> Self {
        Self { doctor_repository }
    }

    /// Lists all doctors, ordered by id.
    pub async fn list(&self) -> Result<Vec<Doctor>, AppError> {
        self.doctor_repository.list().await
    }

    /// Creates a doctor.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] keyed by `email` if a doctor with
    /// the same email already exists (exact match on the raw string).
    pub async fn create(&self, fields: DoctorFields) -> Result<Doctor, AppError> {
        if self
            .doctor_repository
            .email_exists(&fields.email, None)
            .await?
        {
            return Err(AppError::field_error("email", "Email already exists"));
        }

        self.doctor_repository.create(fields).await
    }

    /// Retrieves a doctor by id.
    pub async fn retrieve(&self, id: i64) -> Result<Doctor, AppError> {
        self.doctor_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Doctor not found"))
    }

    /// Replaces all fields of a doctor.
    ///
    /// The collision check excludes the doctor itself: updating a record to
    /// its own unchanged email is not a collision.
    pub async fn update(&self, id: i64, fields: DoctorFields) -> Result<Doctor, AppError> {
        if self
            .doctor_repository
            .email_exists(&fields.email, Some(id))
            .await?
        {
            return Err(AppError::field_error("email", "Email already exists"));
        }

        self.doctor_repository
            .update(id, fields)
            .await?
            .ok_or_else(|| AppError::not_found("Doctor not found"))
    }

    /// Deletes a doctor, cascading its mappings.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.doctor_repository.delete(id).await? {
            return Err(AppError::not_found("Doctor not found"));
        }

        tracing::info!(doctor_id = id, "Doctor deleted");

        Ok(())
    }
}
