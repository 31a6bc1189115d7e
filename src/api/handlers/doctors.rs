//! Handlers for the doctor resource.
//!
//! Doctors are global: any authenticated caller sees and manages the same
//! records.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::doctor::{DoctorRequest, DoctorResponse};
use crate::api::extract::AppJson;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all doctors.
///
/// # Endpoint
///
/// `GET /doctors`
pub async fn doctor_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<DoctorResponse>>, AppError> {
    let doctors = state.doctor_service.list().await?;

    Ok(Json(doctors.into_iter().map(DoctorResponse::from).collect()))
}

/// Creates a doctor.
///
/// # Endpoint
///
/// `POST /doctors`
///
/// # Errors
///
/// Returns 400 if a field fails validation or the email is already taken.
pub async fn create_doctor_handler(
    State(state): State<AppState>,
    AppJson(payload): AppJson<DoctorRequest>,
) -> Result<(StatusCode, Json<DoctorResponse>), AppError> {
    payload.validate()?;

    let doctor = state.doctor_service.create(payload.into_fields()).await?;

    Ok((StatusCode::CREATED, Json(DoctorResponse::from(doctor))))
}

/// Fetches a doctor.
///
/// # Endpoint
///
/// `GET /doctors/{id}`
///
/// # Errors
///
/// Returns 404 if no such doctor exists.
pub async fn doctor_detail_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<DoctorResponse>, AppError> {
    let doctor = state.doctor_service.retrieve(id).await?;

    Ok(Json(DoctorResponse::from(doctor)))
}

/// Replaces a doctor.
///
/// # Endpoint
///
/// `PUT /doctors/{id}`
///
/// The email-uniqueness check excludes the doctor being updated, so a
/// replacement carrying the unchanged email succeeds.
///
/// # Errors
///
/// Returns 400 if a field fails validation or the email belongs to a
/// different doctor. Returns 404 if no such doctor exists.
pub async fn update_doctor_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    AppJson(payload): AppJson<DoctorRequest>,
) -> Result<Json<DoctorResponse>, AppError> {
    payload.validate()?;

    let doctor = state
        .doctor_service
        .update(id, payload.into_fields())
        .await?;

    Ok(Json(DoctorResponse::from(doctor)))
}

/// Deletes a doctor.
///
/// # Endpoint
///
/// `DELETE /doctors/{id}`
///
/// Mappings referencing the doctor are deleted by the cascade.
///
/// # Errors
///
/// Returns 404 if no such doctor exists.
pub async fn delete_doctor_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.doctor_service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
