//! PostgreSQL implementation of mapping repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Doctor, Mapping, MappingWithNames, NewMapping};
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;
use crate::utils::db_error::is_unique_violation;

/// PostgreSQL repository for patient-doctor mapping rows.
///
/// The `patient_doctor_mappings_pair_key` unique constraint backs the
/// already-mapped error when two creates race past the pre-check.
pub struct PgMappingRepository {
    pool: Arc<PgPool>,
}

impl PgMappingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MappingRepository for PgMappingRepository {
    async fn create(&self, new_mapping: NewMapping) -> Result<Mapping, AppError> {
        sqlx::query_as::<_, Mapping>(
            r#"
            INSERT INTO patient_doctor_mappings (patient_id, doctor_id)
            VALUES ($1, $2)
            RETURNING id, patient_id, doctor_id, mapped_at
            "#,
        )
        .bind(new_mapping.patient_id)
        .bind(new_mapping.doctor_id)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| {
            if is_unique_violation(&e, "patient_doctor_mappings_pair_key") {
                AppError::bad_request("This patient is already mapped to this doctor")
            } else {
                e.into()
            }
        })
    }

    async fn list_with_names(&self) -> Result<Vec<MappingWithNames>, AppError> {
        let mappings = sqlx::query_as::<_, MappingWithNames>(
            r#"
            SELECT m.id, p.name AS patient, d.name AS doctor, m.mapped_at
            FROM patient_doctor_mappings m
            JOIN patients p ON p.id = m.patient_id
            JOIN doctors d ON d.id = m.doctor_id
            ORDER BY m.id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(mappings)
    }

    async fn doctors_for_patient(&self, patient_id: i64) -> Result<Vec<Doctor>, AppError> {
        let doctors = sqlx::query_as::<_, Doctor>(
            r#"
            SELECT d.id, d.name, d.email, d.specialization, d.phone_number, d.consultation_fee
            FROM patient_doctor_mappings m
            JOIN doctors d ON d.id = m.doctor_id
            WHERE m.patient_id = $1
            ORDER BY m.id
            "#,
        )
        .bind(patient_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(doctors)
    }

    async fn pair_exists(&self, patient_id: i64, doctor_id: i64) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM patient_doctor_mappings
                WHERE patient_id = $1 AND doctor_id = $2
            )
            "#,
        )
        .bind(patient_id)
        .bind(doctor_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(exists)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM patient_doctor_mappings WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
