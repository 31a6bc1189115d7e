//! Shared application state injected into handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::application::services::{
    DoctorService, MappingService, PatientService, TokenService, UserService,
};
use crate::infrastructure::persistence::{
    PgDoctorRepository, PgMappingRepository, PgPatientRepository, PgUserRepository,
};

/// Service types as wired over the Postgres repositories.
pub type AppUserService = UserService<PgUserRepository>;
pub type AppPatientService = PatientService<PgPatientRepository>;
pub type AppDoctorService = DoctorService<PgDoctorRepository>;
pub type AppMappingService =
    MappingService<PgPatientRepository, PgDoctorRepository, PgMappingRepository>;

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<PgPool>,
    pub user_service: Arc<AppUserService>,
    pub token_service: Arc<TokenService>,
    pub patient_service: Arc<AppPatientService>,
    pub doctor_service: Arc<AppDoctorService>,
    pub mapping_service: Arc<AppMappingService>,
}

impl AppState {
    /// Wires every service over a shared connection pool.
    pub fn new(pool: Arc<PgPool>, token_service: TokenService) -> Self {
        let user_repository = Arc::new(PgUserRepository::new(pool.clone()));
        let patient_repository = Arc::new(PgPatientRepository::new(pool.clone()));
        let doctor_repository = Arc::new(PgDoctorRepository::new(pool.clone()));
        let mapping_repository = Arc::new(PgMappingRepository::new(pool.clone()));

        Self {
            db: pool,
            user_service: Arc::new(UserService::new(user_repository)),
            token_service: Arc::new(token_service),
            patient_service: Arc::new(PatientService::new(patient_repository.clone())),
            doctor_service: Arc::new(DoctorService::new(doctor_repository.clone())),
            mapping_service: Arc::new(MappingService::new(
                patient_repository,
                doctor_repository,
                mapping_repository,
            )),
        }
    }
}
