//! DTOs for the doctor resource.

use std::borrow::Cow;

use bigdecimal::BigDecimal;
use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entities::{Doctor, DoctorFields};

/// Client-supplied doctor fields, shared by create and full update.
#[derive(Debug, Deserialize, Validate)]
pub struct DoctorRequest {
    #[validate(custom(function = validate_name))]
    pub name: String,

    #[validate(email(message = "Enter a valid email address."))]
    pub email: String,

    #[serde(default)]
    pub specialization: Option<String>,

    #[serde(default)]
    #[validate(length(
        max = 15,
        message = "Ensure this field has no more than 15 characters."
    ))]
    pub phone_number: Option<String>,

    #[serde(default)]
    #[validate(custom(function = validate_consultation_fee))]
    pub consultation_fee: FeeInput,
}

impl DoctorRequest {
    /// Callers validate first; a fee that failed to parse never reaches here.
    pub fn into_fields(self) -> DoctorFields {
        let consultation_fee = match self.consultation_fee.0 {
            FeeState::Parsed(value) => value,
            _ => BigDecimal::default(),
        };

        DoctorFields {
            name: self.name,
            email: self.email,
            specialization: self.specialization,
            phone_number: self.phone_number,
            consultation_fee,
        }
    }
}

/// Consultation fee as submitted.
///
/// Accepts a JSON number or a numeric string. Anything else is kept as
/// invalid rather than failing body deserialization, so the error is
/// reported against the field like every other validation failure.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FeeInput(FeeState);

#[derive(Debug, Clone, Default, Serialize)]
enum FeeState {
    #[default]
    Missing,
    Invalid,
    Parsed(BigDecimal),
}

impl<'de> Deserialize<'de> for FeeInput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        let parsed = match &value {
            serde_json::Value::String(s) => s.trim().parse::<BigDecimal>().ok(),
            serde_json::Value::Number(n) => n.to_string().parse::<BigDecimal>().ok(),
            _ => None,
        };

        Ok(Self(match parsed {
            Some(fee) => FeeState::Parsed(fee),
            None => FeeState::Invalid,
        }))
    }
}

/// Non-blank, at most 50 characters.
fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::new("blank")
            .with_message(Cow::Borrowed("This field may not be blank.")));
    }
    if name.chars().count() > 50 {
        return Err(ValidationError::new("max_length").with_message(Cow::Borrowed(
            "Ensure this field has no more than 50 characters.",
        )));
    }
    Ok(())
}

/// Fixed-point rules for `NUMERIC(8,2)`: at most 8 digits in total, at most
/// 2 of them after the decimal point.
fn validate_consultation_fee(fee: &FeeInput) -> Result<(), ValidationError> {
    let value = match &fee.0 {
        FeeState::Missing => return Err(fee_error("required", "This field is required.")),
        FeeState::Invalid => return Err(fee_error("invalid", "A valid number is required.")),
        FeeState::Parsed(value) => value,
    };

    let (_, exponent) = value.as_bigint_and_exponent();
    let decimals = exponent.max(0);
    let mut total = value.digits() as i64;
    if exponent < 0 {
        total -= exponent;
    }

    if total > 8 {
        return Err(fee_error(
            "max_digits",
            "Ensure that there are no more than 8 digits in total.",
        ));
    }
    if decimals > 2 {
        return Err(fee_error(
            "max_decimal_places",
            "Ensure that there are no more than 2 decimal places.",
        ));
    }
    if total - decimals > 6 {
        return Err(fee_error(
            "max_whole_digits",
            "Ensure that there are no more than 6 digits before the decimal point.",
        ));
    }
    Ok(())
}

fn fee_error(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

/// Doctor as returned by the API. The fee is rendered as a string with two
/// fraction digits ("150.00").
#[derive(Debug, Serialize)]
pub struct DoctorResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub specialization: Option<String>,
    pub phone_number: Option<String>,
    pub consultation_fee: String,
}

impl From<Doctor> for DoctorResponse {
    fn from(doctor: Doctor) -> Self {
        Self {
            id: doctor.id,
            name: doctor.name,
            email: doctor.email,
            specialization: doctor.specialization,
            phone_number: doctor.phone_number,
            consultation_fee: doctor.consultation_fee.with_scale(2).to_string(),
        }
    }
}
