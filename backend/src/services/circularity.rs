//! Circularity metric service

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use super::assessment::ensure_assessment_exists;
use crate::error::AppResult;
use shared::{
    composite_circularity, validate_mci_score, validate_resource_efficiency, CircularityComposite,
    CircularityInputs, CircularityMetric,
};

/// Circularity service for the effective metric row of an assessment
#[derive(Clone)]
pub struct CircularityService {
    db: PgPool,
}

/// Database row for circularity metrics
#[derive(Debug, sqlx::FromRow)]
struct CircularityRow {
    id: Uuid,
    assessment_id: Uuid,
    mci_score: Option<f64>,
    recycling_potential_pct: Option<f64>,
    resource_efficiency_score: Option<f64>,
    extended_product_life_years: Option<f64>,
    reuse_potential_pct: Option<f64>,
    updated_at: DateTime<Utc>,
}

impl From<CircularityRow> for CircularityMetric {
    fn from(row: CircularityRow) -> Self {
        CircularityMetric {
            id: row.id,
            assessment_id: row.assessment_id,
            mci_score: row.mci_score,
            recycling_potential_pct: row.recycling_potential_pct,
            resource_efficiency_score: row.resource_efficiency_score,
            extended_product_life_years: row.extended_product_life_years,
            reuse_potential_pct: row.reuse_potential_pct,
            updated_at: row.updated_at,
        }
    }
}

/// Input for recording circularity metrics
#[derive(Debug, Deserialize, Validate)]
pub struct UpsertCircularityInput {
    pub mci_score: Option<f64>,
    #[validate(range(min = 0.0, max = 100.0, message = "Recycling potential must be between 0 and 100%"))]
    pub recycling_potential_pct: Option<f64>,
    pub resource_efficiency_score: Option<f64>,
    #[validate(range(min = 0.0, message = "Extended product life cannot be negative"))]
    pub extended_product_life_years: Option<f64>,
    #[validate(range(min = 0.0, max = 100.0, message = "Reuse potential must be between 0 and 100%"))]
    pub reuse_potential_pct: Option<f64>,
}

/// Stored metrics with the composite recomputed for this read
#[derive(Debug, Serialize)]
pub struct CircularityView {
    #[serde(flatten)]
    pub metric: CircularityMetric,
    pub composite: Option<CircularityComposite>,
}

impl From<CircularityMetric> for CircularityView {
    fn from(metric: CircularityMetric) -> Self {
        // Never cached: historic rows always reflect the current formula
        let composite = composite_circularity(&CircularityInputs::from(&metric)).ok();
        CircularityView { metric, composite }
    }
}

const CIRCULARITY_COLUMNS: &str = "id, assessment_id, mci_score, recycling_potential_pct, \
    resource_efficiency_score, extended_product_life_years, reuse_potential_pct, updated_at";

impl CircularityService {
    /// Create a new CircularityService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Insert or replace the metric row in one statement
    pub async fn upsert_metrics(
        &self,
        assessment_id: Uuid,
        input: UpsertCircularityInput,
    ) -> AppResult<CircularityView> {
        input.validate()?;
        if let Some(mci) = input.mci_score {
            validate_mci_score(mci)?;
        }
        if let Some(efficiency) = input.resource_efficiency_score {
            validate_resource_efficiency(efficiency)?;
        }

        ensure_assessment_exists(&self.db, assessment_id).await?;

        let row = sqlx::query_as::<_, CircularityRow>(&format!(
            r#"
            INSERT INTO circularity_metrics (
                assessment_id, mci_score, recycling_potential_pct, resource_efficiency_score,
                extended_product_life_years, reuse_potential_pct, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, NOW())
            ON CONFLICT (assessment_id) DO UPDATE
            SET mci_score = EXCLUDED.mci_score,
                recycling_potential_pct = EXCLUDED.recycling_potential_pct,
                resource_efficiency_score = EXCLUDED.resource_efficiency_score,
                extended_product_life_years = EXCLUDED.extended_product_life_years,
                reuse_potential_pct = EXCLUDED.reuse_potential_pct,
                updated_at = NOW()
            RETURNING {CIRCULARITY_COLUMNS}
            "#
        ))
        .bind(assessment_id)
        .bind(input.mci_score)
        .bind(input.recycling_potential_pct)
        .bind(input.resource_efficiency_score)
        .bind(input.extended_product_life_years)
        .bind(input.reuse_potential_pct)
        .fetch_one(&self.db)
        .await?;

        tracing::info!(assessment_id = %assessment_id, "Circularity metrics recorded");

        Ok(CircularityMetric::from(row).into())
    }

    /// The stored metric row, if any
    pub async fn get_metrics(&self, assessment_id: Uuid) -> AppResult<Option<CircularityMetric>> {
        let row = sqlx::query_as::<_, CircularityRow>(&format!(
            "SELECT {CIRCULARITY_COLUMNS} FROM circularity_metrics WHERE assessment_id = $1"
        ))
        .bind(assessment_id)
        .fetch_optional(&self.db)
        .await?;

        Ok(row.map(|r| r.into()))
    }

    /// Stored metrics with a freshly computed composite
    pub async fn get_view(&self, assessment_id: Uuid) -> AppResult<Option<CircularityView>> {
        ensure_assessment_exists(&self.db, assessment_id).await?;
        Ok(self.get_metrics(assessment_id).await?.map(CircularityView::from))
    }
}
