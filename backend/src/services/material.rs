//! Material data service

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use super::assessment::ensure_assessment_exists;
use crate::error::{AppError, AppResult};
use shared::{
    average_recycled_content, round_to, total_material_mass, validate_name, validate_positive,
    virgin_material_pct, MaterialData, MaterialInputs, MaterialSummary,
};

/// Material service for per-assessment material feeds
#[derive(Clone)]
pub struct MaterialService {
    db: PgPool,
}

/// Database row for a material record
#[derive(Debug, sqlx::FromRow)]
struct MaterialRow {
    id: Uuid,
    assessment_id: Uuid,
    material_name: String,
    quantity_tons: f64,
    ore_grade_pct: Option<f64>,
    moisture_pct: Option<f64>,
    recycled_content_pct: f64,
    virgin_material_pct: f64,
    created_at: DateTime<Utc>,
}

impl From<MaterialRow> for MaterialData {
    fn from(row: MaterialRow) -> Self {
        MaterialData {
            id: row.id,
            assessment_id: row.assessment_id,
            material_name: row.material_name,
            quantity_tons: row.quantity_tons,
            ore_grade_pct: row.ore_grade_pct,
            moisture_pct: row.moisture_pct,
            recycled_content_pct: row.recycled_content_pct,
            virgin_material_pct: row.virgin_material_pct,
            created_at: row.created_at,
        }
    }
}

/// Input for adding a material row
#[derive(Debug, Deserialize, Validate)]
pub struct AddMaterialInput {
    pub material_name: String,
    pub quantity_tons: f64,
    #[validate(range(min = 0.0, max = 100.0, message = "Ore grade must be between 0 and 100%"))]
    pub ore_grade_pct: Option<f64>,
    #[validate(range(min = 0.0, max = 100.0, message = "Moisture must be between 0 and 100%"))]
    pub moisture_pct: Option<f64>,
    #[validate(range(
        min = 0.0,
        max = 100.0,
        message = "Recycled content must be between 0 and 100%"
    ))]
    pub recycled_content_pct: f64,
}

/// Material rows with their totals
#[derive(Debug, Serialize)]
pub struct MaterialList {
    pub materials: Vec<MaterialData>,
    pub summary: MaterialSummary,
}

impl MaterialService {
    /// Create a new MaterialService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Add a material row; the virgin share is derived and stored with it
    pub async fn add_material(
        &self,
        assessment_id: Uuid,
        input: AddMaterialInput,
    ) -> AppResult<MaterialData> {
        input.validate()?;
        validate_name(&input.material_name)
            .map_err(|msg| AppError::validation("material_name", msg))?;
        validate_positive("quantity_tons", input.quantity_tons)?;

        ensure_assessment_exists(&self.db, assessment_id).await?;

        let row = sqlx::query_as::<_, MaterialRow>(
            r#"
            INSERT INTO material_data (
                assessment_id, material_name, quantity_tons, ore_grade_pct,
                moisture_pct, recycled_content_pct, virgin_material_pct
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, assessment_id, material_name, quantity_tons, ore_grade_pct,
                      moisture_pct, recycled_content_pct, virgin_material_pct, created_at
            "#,
        )
        .bind(assessment_id)
        .bind(input.material_name.trim())
        .bind(input.quantity_tons)
        .bind(input.ore_grade_pct)
        .bind(input.moisture_pct)
        .bind(input.recycled_content_pct)
        .bind(virgin_material_pct(input.recycled_content_pct))
        .fetch_one(&self.db)
        .await?;

        tracing::info!(
            assessment_id = %assessment_id,
            quantity_tons = input.quantity_tons,
            "Material row added"
        );

        Ok(row.into())
    }

    /// All material rows of an assessment in insertion order
    pub async fn get_materials(&self, assessment_id: Uuid) -> AppResult<Vec<MaterialData>> {
        let rows = sqlx::query_as::<_, MaterialRow>(
            r#"
            SELECT id, assessment_id, material_name, quantity_tons, ore_grade_pct,
                   moisture_pct, recycled_content_pct, virgin_material_pct, created_at
            FROM material_data
            WHERE assessment_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(assessment_id)
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    /// Material rows plus total mass and average recycled content
    pub async fn list_materials(&self, assessment_id: Uuid) -> AppResult<MaterialList> {
        ensure_assessment_exists(&self.db, assessment_id).await?;
        let materials = self.get_materials(assessment_id).await?;
        let summary = summarize(&materials);
        Ok(MaterialList { materials, summary })
    }
}

/// Totals over a set of material rows
pub fn summarize(materials: &[MaterialData]) -> MaterialSummary {
    let inputs: Vec<MaterialInputs> = materials.iter().map(MaterialInputs::from).collect();
    MaterialSummary {
        row_count: materials.len(),
        total_quantity_tons: round_to(total_material_mass(&inputs), 3),
        average_recycled_content_pct: average_recycled_content(&inputs).map(|a| round_to(a, 2)),
    }
}
