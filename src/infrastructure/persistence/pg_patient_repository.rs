//! PostgreSQL implementation of patient repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewPatient, Patient, PatientFields};
use crate::domain::repositories::PatientRepository;
use crate::error::AppError;
use crate::utils::db_error::is_unique_violation;

/// PostgreSQL repository for patient storage, scoped by the owning user.
///
/// Ownership is enforced inside each statement (`WHERE id = .. AND
/// created_by = ..`), never as a separate check, so a foreign patient and a
/// missing one produce the same empty result.
pub struct PgPatientRepository {
    pool: Arc<PgPool>,
}

impl PgPatientRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

fn map_email_collision(e: sqlx::Error) -> AppError {
    if is_unique_violation(&e, "patients_email_key") {
        AppError::field_error("email", "Email already exists")
    } else {
        e.into()
    }
}

#[async_trait]
impl PatientRepository for PgPatientRepository {
    async fn create(&self, new_patient: NewPatient) -> Result<Patient, AppError> {
        sqlx::query_as::<_, Patient>(
            r#"
            INSERT INTO patients (name, email, date_of_birth, address, phone_number, created_by)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, email, date_of_birth, address, phone_number, created_by
            "#,
        )
        .bind(&new_patient.name)
        .bind(&new_patient.email)
        .bind(new_patient.date_of_birth)
        .bind(&new_patient.address)
        .bind(&new_patient.phone_number)
        .bind(new_patient.created_by)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(map_email_collision)
    }

    async fn list_by_owner(&self, owner_id: i64) -> Result<Vec<Patient>, AppError> {
        let patients = sqlx::query_as::<_, Patient>(
            r#"
            SELECT id, name, email, date_of_birth, address, phone_number, created_by
            FROM patients
            WHERE created_by = $1
            ORDER BY id
            "#,
        )
        .bind(owner_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(patients)
    }

    async fn find_owned(&self, id: i64, owner_id: i64) -> Result<Option<Patient>, AppError> {
        let patient = sqlx::query_as::<_, Patient>(
            r#"
            SELECT id, name, email, date_of_birth, address, phone_number, created_by
            FROM patients
            WHERE id = $1 AND created_by = $2
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(patient)
    }

    async fn update_owned(
        &self,
        id: i64,
        owner_id: i64,
        fields: PatientFields,
    ) -> Result<Option<Patient>, AppError> {
        let patient = sqlx::query_as::<_, Patient>(
            r#"
            UPDATE patients
            SET name = $3, email = $4, date_of_birth = $5, address = $6, phone_number = $7
            WHERE id = $1 AND created_by = $2
            RETURNING id, name, email, date_of_birth, address, phone_number, created_by
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .bind(&fields.name)
        .bind(&fields.email)
        .bind(fields.date_of_birth)
        .bind(&fields.address)
        .bind(&fields.phone_number)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_email_collision)?;

        Ok(patient)
    }

    async fn delete_owned(&self, id: i64, owner_id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM patients WHERE id = $1 AND created_by = $2")
            .bind(id)
            .bind(owner_id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn email_exists(&self, email: &str, exclude_id: Option<i64>) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM patients
                WHERE email = $1 AND ($2::bigint IS NULL OR id <> $2)
            )
            "#,
        )
        .bind(email)
        .bind(exclude_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(exists)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Patient>, AppError> {
        let patient = sqlx::query_as::<_, Patient>(
            r#"
            SELECT id, name, email, date_of_birth, address, phone_number, created_by
            FROM patients
            WHERE name = $1
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(name)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(patient)
    }
}
