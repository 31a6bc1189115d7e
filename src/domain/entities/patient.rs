//! Patient entity owned by the user who created it.

use chrono::NaiveDate;

/// A patient record visible only to its creator.
///
/// `created_by` is the owning user's id. Every read and write in the patient
/// resource is scoped by it, so a patient belonging to another user is
/// indistinguishable from a nonexistent one.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Patient {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub date_of_birth: Option<NaiveDate>,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub created_by: i64,
}

/// The client-controlled fields of a patient.
///
/// Used both for creation and for full replacement on update; omitted
/// optional fields clear the stored value. Ownership never appears here.
#[derive(Debug, Clone)]
pub struct PatientFields {
    pub name: String,
    pub email: String,
    pub date_of_birth: Option<NaiveDate>,
    pub address: Option<String>,
    pub phone_number: Option<String>,
}

/// Insert shape for a new patient: client fields plus the owner.
///
/// `created_by` is always taken from the authenticated caller, never from
/// the request body.
#[derive(Debug, Clone)]
pub struct NewPatient {
    pub name: String,
    pub email: String,
    pub date_of_birth: Option<NaiveDate>,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub created_by: i64,
}

impl NewPatient {
    /// Combines client fields with the owning user.
    pub fn from_fields(fields: PatientFields, created_by: i64) -> Self {
        Self {
            name: fields.name,
            email: fields.email,
            date_of_birth: fields.date_of_birth,
            address: fields.address,
            phone_number: fields.phone_number,
            created_by,
        }
    }
}
