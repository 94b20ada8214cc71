//! HTTP handlers for environmental impact endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::services::impact::{ImpactService, UpsertImpactInput};
use crate::AppState;
use shared::{EnvironmentalImpact, NormalizedImpact};

/// Record or replace impact totals
pub async fn upsert_impact(
    State(state): State<AppState>,
    Path(assessment_id): Path<Uuid>,
    Json(input): Json<UpsertImpactInput>,
) -> AppResult<Json<EnvironmentalImpact>> {
    let service = ImpactService::new(state.db);
    let impact = service.upsert_impact(assessment_id, input).await?;
    Ok(Json(impact))
}

/// Get the live impact row
pub async fn get_impact(
    State(state): State<AppState>,
    Path(assessment_id): Path<Uuid>,
) -> AppResult<Json<EnvironmentalImpact>> {
    let service = ImpactService::new(state.db);
    let impact = service
        .get_impact(assessment_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Environmental impact".to_string()))?;
    Ok(Json(impact))
}

/// Benchmark comparison; `null` when data is insufficient
pub async fn get_impact_benchmark(
    State(state): State<AppState>,
    Path(assessment_id): Path<Uuid>,
) -> AppResult<Json<Option<NormalizedImpact>>> {
    let service = ImpactService::new(state.db);
    let normalized = service.get_benchmark_comparison(assessment_id).await?;
    Ok(Json(normalized))
}
