//! Processing data service

use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use super::assessment::ensure_assessment_exists;
use crate::error::{AppError, AppResult};
use shared::{efficiency_adjusted_energy, validate_name, ProcessingData};

/// Processing service for per-assessment processing stages
#[derive(Clone)]
pub struct ProcessingService {
    db: PgPool,
}

/// Database row for a processing record
#[derive(Debug, sqlx::FromRow)]
struct ProcessingRow {
    id: Uuid,
    assessment_id: Uuid,
    process_type: String,
    raw_energy_kwh: f64,
    equipment_efficiency_pct: Option<f64>,
    energy_consumption_kwh: f64,
    created_at: DateTime<Utc>,
}

impl From<ProcessingRow> for ProcessingData {
    fn from(row: ProcessingRow) -> Self {
        ProcessingData {
            id: row.id,
            assessment_id: row.assessment_id,
            process_type: row.process_type,
            raw_energy_kwh: row.raw_energy_kwh,
            equipment_efficiency_pct: row.equipment_efficiency_pct,
            energy_consumption_kwh: row.energy_consumption_kwh,
            created_at: row.created_at,
        }
    }
}

/// Input for adding a processing stage
#[derive(Debug, Deserialize, Validate)]
pub struct AddProcessingInput {
    pub process_type: String,
    #[validate(range(min = 0.0, message = "Energy consumption cannot be negative"))]
    pub energy_consumption_kwh: f64,
    #[validate(range(
        min = 0.1,
        max = 100.0,
        message = "Equipment efficiency must be between 0.1 and 100%"
    ))]
    pub equipment_efficiency_pct: Option<f64>,
}

impl ProcessingService {
    /// Create a new ProcessingService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Add a processing stage. Energy is stored efficiency-adjusted.
    pub async fn add_processing(
        &self,
        assessment_id: Uuid,
        input: AddProcessingInput,
    ) -> AppResult<ProcessingData> {
        input.validate()?;
        validate_name(&input.process_type)
            .map_err(|msg| AppError::validation("process_type", msg))?;

        ensure_assessment_exists(&self.db, assessment_id).await?;

        let adjusted =
            efficiency_adjusted_energy(input.energy_consumption_kwh, input.equipment_efficiency_pct);

        let row = sqlx::query_as::<_, ProcessingRow>(
            r#"
            INSERT INTO processing_data (
                assessment_id, process_type, raw_energy_kwh,
                equipment_efficiency_pct, energy_consumption_kwh
            )
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, assessment_id, process_type, raw_energy_kwh,
                      equipment_efficiency_pct, energy_consumption_kwh, created_at
            "#,
        )
        .bind(assessment_id)
        .bind(input.process_type.trim())
        .bind(input.energy_consumption_kwh)
        .bind(input.equipment_efficiency_pct)
        .bind(adjusted)
        .fetch_one(&self.db)
        .await?;

        tracing::debug!(
            assessment_id = %assessment_id,
            raw_kwh = input.energy_consumption_kwh,
            adjusted_kwh = adjusted,
            "Processing stage added"
        );

        Ok(row.into())
    }

    /// All processing stages of an assessment
    pub async fn list_processing(&self, assessment_id: Uuid) -> AppResult<Vec<ProcessingData>> {
        ensure_assessment_exists(&self.db, assessment_id).await?;

        let rows = sqlx::query_as::<_, ProcessingRow>(
            r#"
            SELECT id, assessment_id, process_type, raw_energy_kwh,
                   equipment_efficiency_pct, energy_consumption_kwh, created_at
            FROM processing_data
            WHERE assessment_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(assessment_id)
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }
}
