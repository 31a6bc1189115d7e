//! PostgreSQL implementation of doctor repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Doctor, DoctorFields};
use crate::domain::repositories::DoctorRepository;
use crate::error::AppError;
use crate::utils::db_error::is_unique_violation;

/// PostgreSQL repository for doctor storage.
pub struct PgDoctorRepository {
    pool: Arc<PgPool>,
}

impl PgDoctorRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

fn map_email_collision(e: sqlx::Error) -> AppError {
    if is_unique_violation(&e, "doctors_email_key") {
        AppError::field_error("email", "Email already exists")
    } else {
        e.into()
    }
}

#[async_trait]
impl DoctorRepository for PgDoctorRepository {
    async fn create(&self, fields: DoctorFields) -> Result<Doctor, AppError> {
        sqlx::query_as::<_, Doctor>(
            r#"
            INSERT INTO doctors (name, email, specialization, phone_number, consultation_fee)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, email, specialization, phone_number, consultation_fee
            "#,
        )
        .bind(&fields.name)
        .bind(&fields.email)
        .bind(&fields.specialization)
        .bind(&fields.phone_number)
        .bind(&fields.consultation_fee)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(map_email_collision)
    }

    async fn list(&self) -> Result<Vec<Doctor>, AppError> {
        let doctors = sqlx::query_as::<_, Doctor>(
            r#"
            SELECT id, name, email, specialization, phone_number, consultation_fee
            FROM doctors
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(doctors)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Doctor>, AppError> {
        let doctor = sqlx::query_as::<_, Doctor>(
            r#"
            SELECT id, name, email, specialization, phone_number, consultation_fee
            FROM doctors
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(doctor)
    }

    async fn update(&self, id: i64, fields: DoctorFields) -> Result<Option<Doctor>, AppError> {
        let doctor = sqlx::query_as::<_, Doctor>(
            r#"
            UPDATE doctors
            SET name = $2, email = $3, specialization = $4, phone_number = $5,
                consultation_fee = $6
            WHERE id = $1
            RETURNING id, name, email, specialization, phone_number, consultation_fee
            "#,
        )
        .bind(id)
        .bind(&fields.name)
        .bind(&fields.email)
        .bind(&fields.specialization)
        .bind(&fields.phone_number)
        .bind(&fields.consultation_fee)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_email_collision)?;

        Ok(doctor)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM doctors WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn email_exists(&self, email: &str, exclude_id: Option<i64>) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM doctors
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

    async fn find_by_name(&self, name: &str) -> Result<Option<Doctor>, AppError> {
        let doctor = sqlx::query_as::<_, Doctor>(
            r#"
            SELECT id, name, email, specialization, phone_number, consultation_fee
            FROM doctors
            WHERE name = $1
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(name)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(doctor)
    }
}
