//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! validation, and business rules. Services consume repository traits and provide
//! a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::user_service::UserService`] - Registration and credential checks
//! - [`services::token_service::TokenService`] - JWT issuance and verification
//! - [`services::patient_service::PatientService`] - Owner-scoped patient CRUD
//! - [`services::doctor_service::DoctorService`] - Global doctor CRUD
//! - [`services::mapping_service::MappingService`] - Patient-doctor associations

pub mod services;
