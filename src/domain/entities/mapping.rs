//! Patient-doctor mapping entity.

use chrono::{DateTime, Utc};

/// An association row linking one patient to one doctor.
///
/// `mapped_at` is set at creation and immutable. No two live rows may share
/// the same `(patient_id, doctor_id)` pair.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Mapping {
    pub id: i64,
    pub patient_id: i64,
    pub doctor_id: i64,
    pub mapped_at: DateTime<Utc>,
}

/// Input data for creating a new mapping. References are already resolved
/// to ids by the service.
#[derive(Debug, Clone)]
pub struct NewMapping {
    pub patient_id: i64,
    pub doctor_id: i64,
}

/// A mapping joined with the names of both ends, the shape the API
/// serializes.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MappingWithNames {
    pub id: i64,
    pub patient: String,
    pub doctor: String,
    pub mapped_at: DateTime<Utc>,
}
