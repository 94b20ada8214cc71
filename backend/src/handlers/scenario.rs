//! HTTP handlers for scenario endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::error::AppResult;
use crate::services::scenario::{CreateScenarioInput, EvaluatedScenario, ScenarioService};
use crate::AppState;

/// Create a scenario
pub async fn create_scenario(
    State(state): State<AppState>,
    Path(assessment_id): Path<Uuid>,
    Json(input): Json<CreateScenarioInput>,
) -> AppResult<(StatusCode, Json<EvaluatedScenario>)> {
    let service = ScenarioService::new(state.db);
    let scenario = service.create_scenario(assessment_id, input).await?;
    Ok((StatusCode::CREATED, Json(scenario)))
}

/// List scenarios with feasibility and baseline comparison
pub async fn list_scenarios(
    State(state): State<AppState>,
    Path(assessment_id): Path<Uuid>,
) -> AppResult<Json<Vec<EvaluatedScenario>>> {
    let service = ScenarioService::new(state.db);
    let scenarios = service.list_scenarios(assessment_id).await?;
    Ok(Json(scenarios))
}

/// Get one scenario
pub async fn get_scenario(
    State(state): State<AppState>,
    Path(scenario_id): Path<Uuid>,
) -> AppResult<Json<EvaluatedScenario>> {
    let service = ScenarioService::new(state.db);
    let scenario = service.get_scenario(scenario_id).await?;
    Ok(Json(scenario))
}
