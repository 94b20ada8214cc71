//! HTTP handlers for processing data endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::error::AppResult;
use crate::services::processing::{AddProcessingInput, ProcessingService};
use crate::AppState;
use shared::ProcessingData;

/// Add a processing stage
pub async fn add_processing(
    State(state): State<AppState>,
    Path(assessment_id): Path<Uuid>,
    Json(input): Json<AddProcessingInput>,
) -> AppResult<(StatusCode, Json<ProcessingData>)> {
    let service = ProcessingService::new(state.db);
    let processing = service.add_processing(assessment_id, input).await?;
    Ok((StatusCode::CREATED, Json(processing)))
}

/// List processing stages
pub async fn list_processing(
    State(state): State<AppState>,
    Path(assessment_id): Path<Uuid>,
) -> AppResult<Json<Vec<ProcessingData>>> {
    let service = ProcessingService::new(state.db);
    let processing = service.list_processing(assessment_id).await?;
    Ok(Json(processing))
}
