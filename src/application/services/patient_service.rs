//! Owner-scoped patient CRUD service.

use std::sync::Arc;

use crate::domain::entities::{NewPatient, Patient, PatientFields};
use crate::domain::repositories::PatientRepository;
use crate::error::AppError;

/// Service implementing the patient resource semantics.
///
/// The caller's user id is an explicit argument on every method; there is
/// no ambient request identity. A patient owned by another user is reported
/// as [`AppError::NotFound`], the same as a missing one.
pub struct PatientService<P: PatientRepository> {
    patient_repository: Arc<P>,
}

impl<P: PatientRepository> PatientService<P> {
    /// Creates a new patient service.
    pub fn new(patient_repository: Arc<P>) -> Self {
        Self { patient_repository }
    }

    /// Lists the caller's patients, ordered by id.
    pub async fn list(&self, caller: i64) -> Result<Vec<Patient>, AppError> {
        self.patient_repository.list_by_owner(caller).await
    }

    /// Creates a patient owned by the caller.
    ///
    /// Ownership comes from `caller` alone; nothing in `fields` can set it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] keyed by `email` if another patient
    /// already uses the email.
    pub async fn create(&self, caller: i64, fields: PatientFields) -> Result<Patient, AppError> {
        if self
            .patient_repository
            .email_exists(&fields.email, None)
            .await?
        {
            return Err(AppError::field_error("email", "Email already exists"));
        }

        self.patient_repository
            .create(NewPatient::from_fields(fields, caller))
            .await
    }

    /// Retrieves one of the caller's patients.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the patient is missing or owned by
    /// someone else.
    pub async fn retrieve(&self, caller: i64, id: i64) -> Result<Patient, AppError> {
        self.patient_repository
            .find_owned(id, caller)
            .await?
            .ok_or_else(|| AppError::not_found("Patient not found"))
    }

    /// Replaces all fields of one of the caller's patients.
    ///
    /// The email collision check excludes the patient itself, so an update
    /// keeping the same email succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] keyed by `email` on a collision
    /// with a different patient, [`AppError::NotFound`] if missing or
    /// foreign.
    pub async fn update(
        &self,
        caller: i64,
        id: i64,
        fields: PatientFields,
    ) -> Result<Patient, AppError> {
        if self
            .patient_repository
            .email_exists(&fields.email, Some(id))
            .await?
        {
            return Err(AppError::field_error("email", "Email already exists"));
        }

        self.patient_repository
            .update_owned(id, caller, fields)
            .await?
            .ok_or_else(|| AppError::not_found("Patient not found"))
    }

    /// Deletes one of the caller's patients, cascading its mappings.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if missing or foreign.
    pub async fn delete(&self, caller: i64, id: i64) -> Result<(), AppError> {
        if !self.patient_repository.delete_owned(id, caller).await? {
            return Err(AppError::not_found("Patient not found"));
        }

        tracing::info!(patient_id = id, user_id = caller, "Patient deleted");

        Ok(())
    }
}
