//! HTTP handlers for circularity endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::services::circularity::{CircularityService, CircularityView, UpsertCircularityInput};
use crate::AppState;

/// Record or replace circularity metrics
pub async fn upsert_circularity(
    State(state): State<AppState>,
    Path(assessment_id): Path<Uuid>,
    Json(input): Json<UpsertCircularityInput>,
) -> AppResult<Json<CircularityView>> {
    let service = CircularityService::new(state.db);
    let view = service.upsert_metrics(assessment_id, input).await?;
    Ok(Json(view))
}

/// Get circularity metrics with the composite score
pub async fn get_circularity(
    State(state): State<AppState>,
    Path(assessment_id): Path<Uuid>,
) -> AppResult<Json<CircularityView>> {
    let service = CircularityService::new(state.db);
    let view = service
        .get_view(assessment_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Circularity metrics".to_string()))?;
    Ok(Json(view))
}
