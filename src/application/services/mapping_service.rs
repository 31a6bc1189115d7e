//! Patient-doctor mapping service.

use std::sync::Arc;

use crate::domain::entities::{Doctor, MappingWithNames, NewMapping};
use crate::domain::repositories::{DoctorRepository, MappingRepository, PatientRepository};
use crate::error::AppError;

/// Service implementing the mapping resource semantics.
///
/// Mapping creation resolves both ends by the `name` field rather than by
/// id; that is the external contract, not an accident. Resolution is global
/// (not owner-scoped) and a name shared by several records resolves to the
/// lowest id.
pub struct MappingService<P, D, M>
where
    P: PatientRepository,
    D: DoctorRepository,
    M: MappingRepository,
{
    patient_repository: Arc<P>,
    doctor_repository: Arc<D>,
    mapping_repository: Arc<M>,
}

impl<P, D, M> MappingService<P, D, M>
where
    P: PatientRepository,
    D: DoctorRepository,
    M: MappingRepository,
{
    /// Creates a new mapping service.
    pub fn new(
        patient_repository: Arc<P>,
        doctor_repository: Arc<D>,
        mapping_repository: Arc<M>,
    ) -> Self {
        Self {
            patient_repository,
            doctor_repository,
            mapping_repository,
        }
    }

    /// Maps a patient to a doctor, both referenced by name.
    ///
    /// The duplicate-pair pre-check is best-effort; the unique constraint
    /// in storage catches the race and maps to the same error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`]:
    /// - keyed by `patient`/`doctor` when a name resolves to nothing
    /// - unkeyed when the pair is already mapped
    pub async fn create(
        &self,
        patient_name: &str,
        doctor_name: &str,
    ) -> Result<MappingWithNames, AppError> {
        let patient = self
            .patient_repository
            .find_by_name(patient_name)
            .await?
            .ok_or_else(|| {
                AppError::field_error(
                    "patient",
                    format!("Object with name={patient_name} does not exist"),
                )
            })?;

        let doctor = self
            .doctor_repository
            .find_by_name(doctor_name)
            .await?
            .ok_or_else(|| {
                AppError::field_error(
                    "doctor",
                    format!("Object with name={doctor_name} does not exist"),
                )
            })?;

        if self
            .mapping_repository
            .pair_exists(patient.id, doctor.id)
            .await?
        {
            return Err(AppError::bad_request(
                "This patient is already mapped to this doctor",
            ));
        }

        let mapping = self
            .mapping_repository
            .create(NewMapping {
                patient_id: patient.id,
                doctor_id: doctor.id,
            })
            .await?;

        tracing::info!(
            mapping_id = mapping.id,
            patient_id = patient.id,
            doctor_id = doctor.id,
            "Mapping created"
        );

        Ok(MappingWithNames {
            id: mapping.id,
            patient: patient.name,
            doctor: doctor.name,
            mapped_at: mapping.mapped_at,
        })
    }

    /// Lists all mappings with names resolved, ordered by id.
    pub async fn list(&self) -> Result<Vec<MappingWithNames>, AppError> {
        self.mapping_repository.list_with_names().await
    }

    /// Returns the doctors mapped to a patient.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the patient has no mappings;
    /// a nonexistent patient id produces the same error.
    pub async fn doctors_for_patient(&self, patient_id: i64) -> Result<Vec<Doctor>, AppError> {
        let doctors = self
            .mapping_repository
            .doctors_for_patient(patient_id)
            .await?;

        if doctors.is_empty() {
            return Err(AppError::not_found("No mappings found for the patient"));
        }

        Ok(doctors)
    }

    /// Deletes a mapping by id. The pair becomes mappable again.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no such mapping exists.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.mapping_repository.delete(id).await? {
            return Err(AppError::not_found("Mapping not found"));
        }

        tracing::info!(mapping_id = id, "Mapping deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Mapping, Patient};
    use crate::domain::repositories::{
        MockDoctorRepository, MockMappingRepository, MockPatientRepository,
    };
    use bigdecimal::BigDecimal;
    use chrono::Utc;
    use std::str::FromStr;

    fn patient(id: i64, name: &str) -> Patient {
        Patient {
            id,
            name: name.to_string(),
            email: format!("patient{id}@clinic.test"),
            date_of_birth: None,
            address: None,
            phone_number: None,
            created_by: 1,
        }
    }

    fn doctor(id: i64, name: &str) -> Doctor {
        Doctor {
            id,
            name: name.to_string(),
            email: format!("doctor{id}@clinic.test"),
            specialization: None,
            phone_number: None,
            consultation_fee: BigDecimal::from_str("150.00").unwrap(),
        }
    }

    #[tokio::test]
    async fn test_create_resolves_names() {
        let mut patients = MockPatientRepository::new();
        let mut doctors = MockDoctorRepository::new();
        let mut mappings = MockMappingRepository::new();

        let p = patient(11, "P1");
        patients
            .expect_find_by_name()
            .withf(|name| name == "P1")
            .times(1)
            .returning(move |_| Ok(Some(p.clone())));

        let d = doctor(22, "D1");
        doctors
            .expect_find_by_name()
            .withf(|name| name == "D1")
            .times(1)
            .returning(move |_| Ok(Some(d.clone())));

        mappings
            .expect_pair_exists()
            .withf(|pid, did| *pid == 11 && *did == 22)
            .times(1)
            .returning(|_, _| Ok(false));

        mappings
            .expect_create()
            .withf(|new_mapping| new_mapping.patient_id == 11 && new_mapping.doctor_id == 22)
            .times(1)
            .returning(|new_mapping| {
                Ok(Mapping {
                    id: 5,
                    patient_id: new_mapping.patient_id,
                    doctor_id: new_mapping.doctor_id,
                    mapped_at: Utc::now(),
                })
            });

        let service =
            MappingService::new(Arc::new(patients), Arc::new(doctors), Arc::new(mappings));

        let created = service.create("P1", "D1").await.unwrap();

        assert_eq!(created.id, 5);
        assert_eq!(created.patient, "P1");
        assert_eq!(created.doctor, "D1");
    }

    #[tokio::test]
    async fn test_create_unknown_patient_name() {
        let mut patients = MockPatientRepository::new();
        let doctors = MockDoctorRepository::new();
        let mappings = MockMappingRepository::new();

        patients
            .expect_find_by_name()
            .times(1)
            .returning(|_| Ok(None));

        let service =
            MappingService::new(Arc::new(patients), Arc::new(doctors), Arc::new(mappings));

        let err = service.create("Ghost", "D1").await.unwrap_err();

        match err {
            AppError::Validation { field, message } => {
                assert_eq!(field.as_deref(), Some("patient"));
                assert_eq!(message, "Object with name=Ghost does not exist");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_unknown_doctor_name() {
        let mut patients = MockPatientRepository::new();
        let mut doctors = MockDoctorRepository::new();
        let mappings = MockMappingRepository::new();

        let p = patient(11, "P1");
        patients
            .expect_find_by_name()
            .times(1)
            .returning(move |_| Ok(Some(p.clone())));

        doctors
            .expect_find_by_name()
            .times(1)
            .returning(|_| Ok(None));

        let service =
            MappingService::new(Arc::new(patients), Arc::new(doctors), Arc::new(mappings));

        let err = service.create("P1", "Ghost").await.unwrap_err();

        match err {
            AppError::Validation { field, .. } => assert_eq!(field.as_deref(), Some("doctor")),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_duplicate_pair() {
        let mut patients = MockPatientRepository::new();
        let mut doctors = MockDoctorRepository::new();
        let mut mappings = MockMappingRepository::new();

        let p = patient(11, "P1");
        patients
            .expect_find_by_name()
            .times(1)
            .returning(move |_| Ok(Some(p.clone())));

        let d = doctor(22, "D1");
        doctors
            .expect_find_by_name()
            .times(1)
            .returning(move |_| Ok(Some(d.clone())));

        mappings
            .expect_pair_exists()
            .times(1)
            .returning(|_, _| Ok(true));

        mappings.expect_create().times(0);

        let service =
            MappingService::new(Arc::new(patients), Arc::new(doctors), Arc::new(mappings));

        let err = service.create("P1", "D1").await.unwrap_err();

        match err {
            AppError::Validation { field, message } => {
                assert!(field.is_none());
                assert_eq!(message, "This patient is already mapped to this doctor");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_doctors_for_patient_empty_is_not_found() {
        let patients = MockPatientRepository::new();
        let doctors = MockDoctorRepository::new();
        let mut mappings = MockMappingRepository::new();

        mappings
            .expect_doctors_for_patient()
            .times(1)
            .returning(|_| Ok(vec![]));

        let service =
            MappingService::new(Arc::new(patients), Arc::new(doctors), Arc::new(mappings));

        let err = service.doctors_for_patient(11).await.unwrap_err();

        match err {
            AppError::NotFound { message } => {
                assert_eq!(message, "No mappings found for the patient");
            }
            other => panic!("expected not found, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let patients = MockPatientRepository::new();
        let doctors = MockDoctorRepository::new();
        let mut mappings = MockMappingRepository::new();

        mappings.expect_delete().times(1).returning(|_| Ok(false));

        let service =
            MappingService::new(Arc::new(patients), Arc::new(doctors), Arc::new(mappings));

        let err = service.delete(99).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }
}
