//! HTTP handler for the insight report

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::error::AppResult;
use crate::services::insights::InsightService;
use crate::AppState;
use shared::InsightReport;

/// Generate insights, overall score, priority actions and predictions
pub async fn get_insights(
    State(state): State<AppState>,
    Path(assessment_id): Path<Uuid>,
) -> AppResult<Json<InsightReport>> {
    let service = InsightService::new(state.db, state.config.scoring.insight_settings());
    let report = service.get_insights(assessment_id).await?;
    Ok(Json(report))
}
