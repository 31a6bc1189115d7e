//! API route configuration.
//!
//! Resource endpoints require Bearer token authentication via
//! [`crate::api::middleware::auth`]; the `/auth/*` endpoints are public.

use crate::api::handlers::{
    create_doctor_handler, create_mapping_handler, create_patient_handler, delete_doctor_handler,
    delete_mapping_handler, delete_mapping_missing_id_handler, delete_patient_handler,
    doctor_detail_handler, doctor_list_handler, login_handler, mapping_list_handler,
    patient_detail_handler, patient_list_handler, patient_mappings_handler, refresh_handler,
    register_handler, update_doctor_handler, update_patient_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Public credential endpoints.
///
/// # Endpoints
///
/// - `POST /auth/register`      - Create an account
/// - `POST /auth/login`         - Obtain an access/refresh pair
/// - `POST /auth/token/refresh` - Exchange a refresh token for a new access token
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register_handler))
        .route("/auth/login", post(login_handler))
        .route("/auth/token/refresh", post(refresh_handler))
}

/// All resource routes, protected by Bearer token authentication.
///
/// # Endpoints
///
/// - `GET    /patients`               - List the caller's patients
/// - `POST   /patients`               - Create a patient owned by the caller
/// - `GET    /patients/{id}`          - Fetch one of the caller's patients
/// - `PUT    /patients/{id}`          - Replace one of the caller's patients
/// - `DELETE /patients/{id}`          - Delete one of the caller's patients
/// - `GET    /doctors`                - List all doctors
/// - `POST   /doctors`                - Create a doctor
/// - `GET    /doctors/{id}`           - Fetch a doctor
/// - `PUT    /doctors/{id}`           - Replace a doctor
/// - `DELETE /doctors/{id}`           - Delete a doctor
/// - `POST   /mappings`               - Map a patient to a doctor by name
/// - `GET    /mappings`               - List all mappings
/// - `GET    /mappings/{patient_id}`  - List the doctors mapped to a patient
/// - `DELETE /mappings/{id}`          - Delete a mapping
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/patients",
            get(patient_list_handler).post(create_patient_handler),
        )
        .route(
            "/patients/{id}",
            get(patient_detail_handler)
                .put(update_patient_handler)
                .delete(delete_patient_handler),
        )
        .route(
            "/doctors",
            get(doctor_list_handler).post(create_doctor_handler),
        )
        .route(
            "/doctors/{id}",
            get(doctor_detail_handler)
                .put(update_doctor_handler)
                .delete(delete_doctor_handler),
        )
        .route(
            "/mappings",
            get(mapping_list_handler)
                .post(create_mapping_handler)
                .delete(delete_mapping_missing_id_handler),
        )
        .route(
            "/mappings/{id}",
            get(patient_mappings_handler).delete(delete_mapping_handler),
        )
}
