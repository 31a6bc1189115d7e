//! Core domain entities representing the business data model.
//!
//! This module contains the fundamental data structures that represent the core
//! concepts of the clinic service. Entities are plain data structures without
//! business logic.
//!
//! # Entity Types
//!
//! - [`User`] - An authenticated account that owns patient records
//! - [`Patient`] - A patient record scoped to its creator
//! - [`Doctor`] - A globally visible doctor record
//! - [`Mapping`] - An association between one patient and one doctor
//!
//! # Design Pattern
//!
//! Request-controlled fields live in `PatientFields`/`DoctorFields`, which
//! serve both creation and full replacement on PUT. Insert shapes with
//! server-added columns get their own structs (`NewUser`, `NewPatient`,
//! `NewMapping`).

pub mod doctor;
pub mod mapping;
pub mod patient;
pub mod user;

pub use doctor::{Doctor, DoctorFields};
pub use mapping::{Mapping, MappingWithNames, NewMapping};
pub use patient::{NewPatient, Patient, PatientFields};
pub use user::{NewUser, User};
