//! HTTP handlers for material data endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::error::AppResult;
use crate::services::material::{AddMaterialInput, MaterialList, MaterialService};
use crate::AppState;
use shared::MaterialData;

/// Add a material row
pub async fn add_material(
    State(state): State<AppState>,
    Path(assessment_id): Path<Uuid>,
    Json(input): Json<AddMaterialInput>,
) -> AppResult<(StatusCode, Json<MaterialData>)> {
    let service = MaterialService::new(state.db);
    let material = service.add_material(assessment_id, input).await?;
    Ok((StatusCode::CREATED, Json(material)))
}

/// List material rows with totals
pub async fn list_materials(
    State(state): State<AppState>,
    Path(assessment_id): Path<Uuid>,
) -> AppResult<Json<MaterialList>> {
    let service = MaterialService::new(state.db);
    let materials = service.list_materials(assessment_id).await?;
    Ok(Json(materials))
}
