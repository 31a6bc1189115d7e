//! Business logic services for the application layer.

pub mod doctor_service;
pub mod mapping_service;
pub mod patient_service;
pub mod token_service;
pub mod user_service;

pub use doctor_service::DoctorService;
pub use mapping_service::MappingService;
pub use patient_service::PatientService;
pub use token_service::{Claims, TOKEN_INVALID, TokenPair, TokenService, TokenType};
pub use user_service::UserService;
