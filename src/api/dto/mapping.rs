//! DTOs for the patient-doctor mapping resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::MappingWithNames;

/// Request to map a patient to a doctor. Both sides are referenced by name,
/// not id; resolution errors are reported per field.
#[derive(Debug, Deserialize)]
pub struct CreateMappingRequest {
    pub patient: String,
    pub doctor: String,
}

/// Mapping as returned by the API, with both names resolved.
#[derive(Debug, Serialize)]
pub struct MappingResponse {
    pub id: i64,
    pub patient: String,
    pub doctor: String,
    pub mapped_at: DateTime<Utc>,
}

impl From<MappingWithNames> for MappingResponse {
    fn from(mapping: MappingWithNames) -> Self {
        Self {
            id: mapping.id,
            patient: mapping.patient,
            doctor: mapping.doctor,
            mapped_at: mapping.mapped_at,
        }
    }
}
