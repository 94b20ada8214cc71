//! Material input records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Material feed for an assessment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialData {
    pub id: Uuid,
    pub assessment_id: Uuid,
    pub material_name: String,
    pub quantity_tons: f64,
    pub ore_grade_pct: Option<f64>,
    pub moisture_pct: Option<f64>,
    pub recycled_content_pct: f64,
    /// Always `100 - recycled_content_pct`, persisted alongside it
    pub virgin_material_pct: f64,
    pub created_at: DateTime<Utc>,
}

/// Virgin share implied by a recycled-content percentage
pub fn virgin_material_pct(recycled_content_pct: f64) -> f64 {
    100.0 - recycled_content_pct
}

/// Material totals reported next to the material rows
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MaterialSummary {
    pub row_count: usize,
    pub total_quantity_tons: f64,
    pub average_recycled_content_pct: Option<f64>,
}
