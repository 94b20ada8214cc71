//! HTTP handlers for transportation data endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::error::AppResult;
use crate::services::transportation::{AddTransportationInput, TransportationService};
use crate::AppState;
use shared::TransportationData;

/// Add a transport leg
pub async fn add_transportation(
    State(state): State<AppState>,
    Path(assessment_id): Path<Uuid>,
    Json(input): Json<AddTransportationInput>,
) -> AppResult<(StatusCode, Json<TransportationData>)> {
    let service = TransportationService::new(state.db);
    let leg = service.add_transportation(assessment_id, input).await?;
    Ok((StatusCode::CREATED, Json(leg)))
}

/// List transport legs
pub async fn list_transportation(
    State(state): State<AppState>,
    Path(assessment_id): Path<Uuid>,
) -> AppResult<Json<Vec<TransportationData>>> {
    let service = TransportationService::new(state.db);
    let legs = service.list_transportation(assessment_id).await?;
    Ok(Json(legs))
}
