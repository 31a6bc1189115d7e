//! Handlers for the patient-doctor mapping resource.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::doctor::DoctorResponse;
use crate::api::dto::mapping::{CreateMappingRequest, MappingResponse};
use crate::api::extract::AppJson;
use crate::error::AppError;
use crate::state::AppState;

/// Maps a patient to a doctor, both referenced by name.
///
/// # Endpoint
///
/// `POST /mappings`
///
/// Name resolution is not owner-scoped: any authenticated caller may map
/// any patient. When several records share a name, the lowest id wins.
///
/// # Errors
///
/// Returns 400 if either name resolves to nothing, or the pair is already
/// mapped.
pub async fn create_mapping_handler(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateMappingRequest>,
) -> Result<(StatusCode, Json<MappingResponse>), AppError> {
    let mapping = state
        .mapping_service
        .create(&payload.patient, &payload.doctor)
        .await?;

    Ok((StatusCode::CREATED, Json(MappingResponse::from(mapping))))
}

/// Lists all mappings with both names resolved.
///
/// # Endpoint
///
/// `GET /mappings`
pub async fn mapping_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<MappingResponse>>, AppError> {
    let mappings = state.mapping_service.list().await?;

    Ok(Json(
        mappings.into_iter().map(MappingResponse::from).collect(),
    ))
}

/// Lists the doctors mapped to a patient.
///
/// # Endpoint
///
/// `GET /mappings/{patient_id}`
///
/// Returns Doctor records, not mappings; the shape difference from the
/// unfiltered list is part of the contract.
///
/// # Errors
///
/// Returns 404 when the patient has no mappings, whether or not the
/// patient itself exists.
pub async fn patient_mappings_handler(
    Path(patient_id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<Vec<DoctorResponse>>, AppError> {
    let doctors = state
        .mapping_service
        .doctors_for_patient(patient_id)
        .await?;

    Ok(Json(doctors.into_iter().map(DoctorResponse::from).collect()))
}

/// Deletes a mapping.
///
/// # Endpoint
///
/// `DELETE /mappings/{id}`
///
/// # Errors
///
/// Returns 404 if no such mapping exists.
pub async fn delete_mapping_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.mapping_service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Rejects a delete with no mapping id.
///
/// # Endpoint
///
/// `DELETE /mappings`
pub async fn delete_mapping_missing_id_handler() -> AppError {
    AppError::bad_request("Mapping ID not provided")
}
