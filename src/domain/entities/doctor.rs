//! Doctor entity, globally visible to any authenticated caller.

use bigdecimal::BigDecimal;

/// A doctor record. Not owned by any user.
///
/// `consultation_fee` is a fixed-point decimal (two fraction digits, eight
/// significant digits at most) and maps to `NUMERIC(8,2)` in storage.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Doctor {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub specialization: Option<String>,
    pub phone_number: Option<String>,
    pub consultation_fee: BigDecimal,
}

/// The client-controlled fields of a doctor.
///
/// Doctors have no server-added columns beyond the id, so the same shape
/// serves creation and full replacement on update.
#[derive(Debug, Clone)]
pub struct DoctorFields {
    pub name: String,
    pub email: String,
    pub specialization: Option<String>,
    pub phone_number: Option<String>,
    pub consultation_fee: BigDecimal,
}
