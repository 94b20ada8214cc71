//! Transportation data service

use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use super::assessment::ensure_assessment_exists;
use crate::error::{AppError, AppResult};
use shared::{ton_km, TransportMode, TransportationData};

/// Transportation service for per-assessment transport legs
#[derive(Clone)]
pub struct TransportationService {
    db: PgPool,
}

/// Database row for a transport leg
#[derive(Debug, sqlx::FromRow)]
struct TransportationRow {
    id: Uuid,
    assessment_id: Uuid,
    transport_mode: String,
    distance_km: f64,
    cargo_tons: f64,
    created_at: DateTime<Utc>,
}

impl TryFrom<TransportationRow> for TransportationData {
    type Error = AppError;

    fn try_from(row: TransportationRow) -> Result<Self, Self::Error> {
        let transport_mode = TransportMode::from_str(&row.transport_mode).ok_or_else(|| {
            AppError::Internal(format!("Unknown transport mode: {}", row.transport_mode))
        })?;

        Ok(TransportationData {
            id: row.id,
            assessment_id: row.assessment_id,
            transport_mode,
            distance_km: row.distance_km,
            cargo_tons: row.cargo_tons,
            ton_km: ton_km(row.distance_km, row.cargo_tons),
            created_at: row.created_at,
        })
    }
}

/// Input for adding a transport leg
#[derive(Debug, Deserialize, Validate)]
pub struct AddTransportationInput {
    pub transport_mode: TransportMode,
    #[validate(range(min = 0.0, message = "Distance cannot be negative"))]
    pub distance_km: f64,
    #[validate(range(min = 0.0, message = "Cargo cannot be negative"))]
    pub cargo_tons: f64,
}

impl TransportationService {
    /// Create a new TransportationService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Add a transport leg
    pub async fn add_transportation(
        &self,
        assessment_id: Uuid,
        input: AddTransportationInput,
    ) -> AppResult<TransportationData> {
        input.validate()?;
        ensure_assessment_exists(&self.db, assessment_id).await?;

        let row = sqlx::query_as::<_, TransportationRow>(
            r#"
            INSERT INTO transportation_data (assessment_id, transport_mode, distance_km, cargo_tons)
            VALUES ($1, $2, $3, $4)
            RETURNING id, assessment_id, transport_mode, distance_km, cargo_tons, created_at
            "#,
        )
        .bind(assessment_id)
        .bind(input.transport_mode.as_str())
        .bind(input.distance_km)
        .bind(input.cargo_tons)
        .fetch_one(&self.db)
        .await?;

        row.try_into()
    }

    /// All transport legs of an assessment
    pub async fn list_transportation(
        &self,
        assessment_id: Uuid,
    ) -> AppResult<Vec<TransportationData>> {
        ensure_assessment_exists(&self.db, assessment_id).await?;

        let rows = sqlx::query_as::<_, TransportationRow>(
            r#"
            SELECT id, assessment_id, transport_mode, distance_km, cargo_tons, created_at
            FROM transportation_data
            WHERE assessment_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(assessment_id)
        .fetch_all(&self.db)
        .await?;

        rows.into_iter().map(TransportationData::try_from).collect()
    }
}
