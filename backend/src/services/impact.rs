//! Environmental impact service
//!
//! Each assessment owns at most one live impact row. Writes go through a
//! single `INSERT ... ON CONFLICT (assessment_id)` statement backed by a
//! unique constraint, so concurrent submissions cannot create a second
//! row or lose an update.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use super::assessment::{ensure_assessment_exists, AssessmentService};
use super::material::MaterialService;
use crate::error::AppResult;
use shared::{
    normalize_impact, total_material_mass, EnvironmentalImpact, ImpactTotals, MaterialInputs,
    NormalizedImpact,
};

/// Impact service for the live impact totals of an assessment
#[derive(Clone)]
pub struct ImpactService {
    db: PgPool,
}

/// Database row for an impact record
#[derive(Debug, sqlx::FromRow)]
struct ImpactRow {
    id: Uuid,
    assessment_id: Uuid,
    co2_emissions_tons: f64,
    total_energy_kwh: f64,
    total_water_m3: Option<f64>,
    total_waste_tons: Option<f64>,
    calculated_at: DateTime<Utc>,
}

impl From<ImpactRow> for EnvironmentalImpact {
    fn from(row: ImpactRow) -> Self {
        EnvironmentalImpact {
            id: row.id,
            assessment_id: row.assessment_id,
            co2_emissions_tons: row.co2_emissions_tons,
            total_energy_kwh: row.total_energy_kwh,
            total_water_m3: row.total_water_m3,
            total_waste_tons: row.total_waste_tons,
            calculated_at: row.calculated_at,
        }
    }
}

/// Input for recording impact totals
#[derive(Debug, Deserialize, Validate)]
pub struct UpsertImpactInput {
    #[validate(range(min = 0.0, message = "CO2 emissions cannot be negative"))]
    pub co2_emissions_tons: f64,
    #[validate(range(min = 0.0, message = "Energy cannot be negative"))]
    pub total_energy_kwh: f64,
    #[validate(range(min = 0.0, message = "Water cannot be negative"))]
    pub total_water_m3: Option<f64>,
    #[validate(range(min = 0.0, message = "Waste cannot be negative"))]
    pub total_waste_tons: Option<f64>,
}

impl ImpactService {
    /// Create a new ImpactService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Insert or replace the live impact row in one statement
    pub async fn upsert_impact(
        &self,
        assessment_id: Uuid,
        input: UpsertImpactInput,
    ) -> AppResult<EnvironmentalImpact> {
        input.validate()?;
        ensure_assessment_exists(&self.db, assessment_id).await?;

        let row = sqlx::query_as::<_, ImpactRow>(
            r#"
            INSERT INTO environmental_impacts (
                assessment_id, co2_emissions_tons, total_energy_kwh,
                total_water_m3, total_waste_tons, calculated_at
            )
            VALUES ($1, $2, $3, $4, $5, NOW())
            ON CONFLICT (assessment_id) DO UPDATE
            SET co2_emissions_tons = EXCLUDED.co2_emissions_tons,
                total_energy_kwh = EXCLUDED.total_energy_kwh,
                total_water_m3 = EXCLUDED.total_water_m3,
                total_waste_tons = EXCLUDED.total_waste_tons,
                calculated_at = NOW()
            RETURNING id, assessment_id, co2_emissions_tons, total_energy_kwh,
                      total_water_m3, total_waste_tons, calculated_at
            "#,
        )
        .bind(assessment_id)
        .bind(input.co2_emissions_tons)
        .bind(input.total_energy_kwh)
        .bind(input.total_water_m3)
        .bind(input.total_waste_tons)
        .fetch_one(&self.db)
        .await?;

        tracing::info!(
            assessment_id = %assessment_id,
            co2_tons = input.co2_emissions_tons,
            "Environmental impact recorded"
        );

        Ok(row.into())
    }

    /// The live impact row, if one has been recorded
    pub async fn get_impact(&self, assessment_id: Uuid) -> AppResult<Option<EnvironmentalImpact>> {
        let row = sqlx::query_as::<_, ImpactRow>(
            r#"
            SELECT id, assessment_id, co2_emissions_tons, total_energy_kwh,
                   total_water_m3, total_waste_tons, calculated_at
            FROM environmental_impacts
            WHERE assessment_id = $1
            "#,
        )
        .bind(assessment_id)
        .fetch_optional(&self.db)
        .await?;

        Ok(row.map(|r| r.into()))
    }

    /// Per-ton figures rated against the benchmark.
    /// `None` when there is no impact row, no material mass, or no benchmark.
    pub async fn get_benchmark_comparison(
        &self,
        assessment_id: Uuid,
    ) -> AppResult<Option<NormalizedImpact>> {
        let assessment = AssessmentService::new(self.db.clone())
            .get_assessment(assessment_id)
            .await?;

        let Some(impact) = self.get_impact(assessment_id).await? else {
            tracing::debug!(assessment_id = %assessment_id, "No impact row to normalize");
            return Ok(None);
        };

        let materials = MaterialService::new(self.db.clone())
            .get_materials(assessment_id)
            .await?;
        let inputs: Vec<MaterialInputs> = materials.iter().map(MaterialInputs::from).collect();

        match normalize_impact(
            &ImpactTotals::from(&impact),
            total_material_mass(&inputs),
            assessment.metal_type,
        ) {
            Ok(normalized) => Ok(Some(normalized)),
            Err(err) if err.is_neutral() => {
                tracing::debug!(assessment_id = %assessment_id, reason = %err, "Impact not normalized");
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }
}
