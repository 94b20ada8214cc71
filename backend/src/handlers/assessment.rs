//! HTTP handlers for assessment endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::error::AppResult;
use crate::services::assessment::{
    AssessmentService, CreateAssessmentInput, UpdateAssessmentInput, UpdateStatusInput,
};
use crate::AppState;
use shared::Assessment;

/// Create an assessment
pub async fn create_assessment(
    State(state): State<AppState>,
    Json(input): Json<CreateAssessmentInput>,
) -> AppResult<(StatusCode, Json<Assessment>)> {
    let service = AssessmentService::new(state.db);
    let assessment = service.create_assessment(input).await?;
    Ok((StatusCode::CREATED, Json(assessment)))
}

/// List all assessments
pub async fn list_assessments(State(state): State<AppState>) -> AppResult<Json<Vec<Assessment>>> {
    let service = AssessmentService::new(state.db);
    let assessments = service.list_assessments().await?;
    Ok(Json(assessments))
}

/// Get assessment by ID
pub async fn get_assessment(
    State(state): State<AppState>,
    Path(assessment_id): Path<Uuid>,
) -> AppResult<Json<Assessment>> {
    let service = AssessmentService::new(state.db);
    let assessment = service.get_assessment(assessment_id).await?;
    Ok(Json(assessment))
}

/// Update assessment details
pub async fn update_assessment(
    State(state): State<AppState>,
    Path(assessment_id): Path<Uuid>,
    Json(input): Json<UpdateAssessmentInput>,
) -> AppResult<Json<Assessment>> {
    let service = AssessmentService::new(state.db);
    let assessment = service.update_assessment(assessment_id, input).await?;
    Ok(Json(assessment))
}

/// Change assessment status
pub async fn update_assessment_status(
    State(state): State<AppState>,
    Path(assessment_id): Path<Uuid>,
    Json(input): Json<UpdateStatusInput>,
) -> AppResult<Json<Assessment>> {
    let service = AssessmentService::new(state.db);
    let assessment = service.update_status(assessment_id, input).await?;
    Ok(Json(assessment))
}

/// Delete an assessment
pub async fn delete_assessment(
    State(state): State<AppState>,
    Path(assessment_id): Path<Uuid>,
) -> AppResult<StatusCode> {
    let service = AssessmentService::new(state.db);
    service.delete_assessment(assessment_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
