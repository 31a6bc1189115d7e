//! Repository trait definitions for the domain layer.
//!
//! This module defines the repository interfaces (traits) that abstract data access
//! operations following the Repository pattern. These traits are implemented by
//! concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`UserRepository`] - Account storage and email lookup
//! - [`PatientRepository`] - Owner-scoped patient CRUD
//! - [`DoctorRepository`] - Global doctor CRUD
//! - [`MappingRepository`] - Patient-doctor association rows
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod doctor_repository;
pub mod mapping_repository;
pub mod patient_repository;
pub mod user_repository;

pub use doctor_repository::DoctorRepository;
pub use mapping_repository::MappingRepository;
pub use patient_repository::PatientRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use doctor_repository::MockDoctorRepository;
#[cfg(test)]
pub use mapping_repository::MockMappingRepository;
#[cfg(test)]
pub use patient_repository::MockPatientRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
