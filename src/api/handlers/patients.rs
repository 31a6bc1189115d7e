//! Handlers for the patient resource.
//!
//! Every operation is scoped to the authenticated caller: a patient created
//! by another user is indistinguishable from a nonexistent one.

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::patient::{PatientRequest, PatientResponse};
use crate::api::extract::AppJson;
use crate::api::middleware::auth::CurrentUser;
use crate::error::AppError;
use crate::state::AppState;

/// Lists the caller's patients.
///
/// # Endpoint
///
/// `GET /patients`
pub async fn patient_list_handler(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<Vec<PatientResponse>>, AppError> {
    let patients = state.patient_service.list(user.id).await?;

    Ok(Json(
        patients.into_iter().map(PatientResponse::from).collect(),
    ))
}

/// Creates a patient owned by the caller.
///
/// # Endpoint
///
/// `POST /patients`
///
/// `created_by` is always the caller; the request body carries no such
/// field and any client-supplied value is ignored.
///
/// # Errors
///
/// Returns 400 if a field fails validation or another patient already uses
/// the email.
pub async fn create_patient_handler(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    AppJson(payload): AppJson<PatientRequest>,
) -> Result<(StatusCode, Json<PatientResponse>), AppError> {
    payload.validate()?;

    let patient = state
        .patient_service
        .create(user.id, payload.into_fields())
        .await?;

    Ok((StatusCode::CREATED, Json(PatientResponse::from(patient))))
}

/// Fetches one of the caller's patients.
///
/// # Endpoint
///
/// `GET /patients/{id}`
///
/// # Errors
///
/// Returns 404 if the patient does not exist or belongs to another user.
pub async fn patient_detail_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<PatientResponse>, AppError> {
    let patient = state.patient_service.retrieve(user.id, id).await?;

    Ok(Json(PatientResponse::from(patient)))
}

/// Replaces one of the caller's patients.
///
/// # Endpoint
///
/// `PUT /patients/{id}`
///
/// Full update: omitted optional fields clear the stored values.
///
/// # Errors
///
/// Returns 400 if a field fails validation or the email collides with a
/// different patient. Returns 404 if the patient is missing or foreign.
pub async fn update_patient_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    AppJson(payload): AppJson<PatientRequest>,
) -> Result<Json<PatientResponse>, AppError> {
    payload.validate()?;

    let patient = state
        .patient_service
        .update(user.id, id, payload.into_fields())
        .await?;

    Ok(Json(PatientResponse::from(patient)))
}

/// Deletes one of the caller's patients.
///
/// # Endpoint
///
/// `DELETE /patients/{id}`
///
/// Mappings referencing the patient are deleted by the cascade.
///
/// # Errors
///
/// Returns 404 if the patient is missing or foreign.
pub async fn delete_patient_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<StatusCode, AppError> {
    state.patient_service.delete(user.id, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
