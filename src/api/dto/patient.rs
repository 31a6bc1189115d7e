//! DTOs for the patient resource.

use std::borrow::Cow;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entities::{Patient, PatientFields};

/// Client-supplied patient fields, shared by create and full update.
#[derive(Debug, Deserialize, Validate)]
pub struct PatientRequest {
    #[validate(custom(function = validate_name))]
    pub name: String,

    #[validate(email(message = "Enter a valid email address."))]
    pub email: String,

    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,

    #[serde(default)]
    pub address: Option<String>,

    #[serde(default)]
    #[validate(length(
        max = 12,
        message = "Ensure this field has no more than 12 characters."
    ))]
    pub phone_number: Option<String>,
}

impl PatientRequest {
    pub fn into_fields(self) -> PatientFields {
        PatientFields {
            name: self.name,
            email: self.email,
            date_of_birth: self.date_of_birth,
            address: self.address,
            phone_number: self.phone_number,
        }
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

/// Patient as returned by the API, including the owning user id.
#[derive(Debug, Serialize)]
pub struct PatientResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub date_of_birth: Option<NaiveDate>,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub created_by: i64,
}

impl From<Patient> for PatientResponse {
    fn from(patient: Patient) -> Self {
        Self {
            id: patient.id,
            name: patient.name,
            email: patient.email,
            date_of_birth: patient.date_of_birth,
            address: patient.address,
            phone_number: patient.phone_number,
            created_by: patient.created_by,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_fields_default_to_none() {
        let request: PatientRequest = serde_json::from_value(serde_json::json!({
            "name": "Bob",
            "email": "bob@clinic.test"
        }))
        .unwrap();

        assert!(request.validate().is_ok());
        assert!(request.date_of_birth.is_none());
        assert!(request.address.is_none());
        assert!(request.phone_number.is_none());
    }

    #[test]
    fn test_blank_name_rejected() {
        let request = PatientRequest {
            name: String::new(),
            email: "bob@clinic.test".to_string(),
            date_of_birth: None,
            address: None,
            phone_number: None,
        };

        let errors = request.validate().unwrap_err();
        let name_errors = &errors.field_errors()["name"];
        assert_eq!(
            name_errors[0].message.as_deref(),
            Some("This field may not be blank.")
        );
    }

    #[test]
    fn test_name_over_fifty_chars_rejected() {
        let request = PatientRequest {
            name: "x".repeat(51),
            email: "bob@clinic.test".to_string(),
            date_of_birth: None,
            address: None,
            phone_number: None,
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_phone_number_over_twelve_chars_rejected() {
        let request = PatientRequest {
            name: "Bob".to_string(),
            email: "bob@clinic.test".to_string(),
            date_of_birth: None,
            address: None,
            phone_number: Some("1234567890123".to_string()),
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("phone_number"));
    }

    #[test]
    fn test_into_fields_preserves_values() {
        let request = PatientRequest {
            name: "Bob".to_string(),
            email: "bob@clinic.test".to_string(),
            date_of_birth: Some(NaiveDate::from_ymd_opt(1990, 4, 15).unwrap()),
            address: Some("12 Main St".to_string()),
            phone_number: Some("5550100".to_string()),
        };

        let fields = request.into_fields();

        assert_eq!(fields.name, "Bob");
        assert_eq!(
            fields.date_of_birth,
            Some(NaiveDate::from_ymd_opt(1990, 4, 15).unwrap())
        );
        assert_eq!(fields.phone_number.as_deref(), Some("5550100"));
    }
}
