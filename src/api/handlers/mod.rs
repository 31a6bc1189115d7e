//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod auth;
pub mod doctors;
pub mod health;
pub mod mappings;
pub mod patients;

pub use auth::{login_handler, refresh_handler, register_handler};
pub use doctors::{
    create_doctor_handler, delete_doctor_handler, doctor_detail_handler, doctor_list_handler,
    update_doctor_handler,
};
pub use health::health_handler;
pub use mappings::{
    create_mapping_handler, delete_mapping_handler, delete_mapping_missing_id_handler,
    mapping_list_handler, patient_mappings_handler,
};
pub use patients::{
    create_patient_handler, delete_patient_handler, patient_detail_handler, patient_list_handler,
    update_patient_handler,
};
