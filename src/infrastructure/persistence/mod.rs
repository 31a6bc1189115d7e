//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx prepared
//! statements.
//!
//! # Repositories
//!
//! - [`PgUserRepository`] - Account storage and email lookup
//! - [`PgPatientRepository`] - Owner-scoped patient storage
//! - [`PgDoctorRepository`] - Doctor storage
//! - [`PgMappingRepository`] - Patient-doctor association rows

pub mod pg_doctor_repository;
pub mod pg_mapping_repository;
pub mod pg_patient_repository;
pub mod pg_user_repository;

pub use pg_doctor_repository::PgDoctorRepository;
pub use pg_mapping_repository::PgMappingRepository;
pub use pg_patient_repository::PgPatientRepository;
pub use pg_user_repository::PgUserRepository;
