//! Circularity metric records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Raw circularity sub-metrics. The composite score is recomputed on
/// every read and never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CircularityMetric {
    pub id: Uuid,
    pub assessment_id: Uuid,
    /// Material Circularity Indicator, 0-1
    pub mci_score: Option<f64>,
    /// 0-100
    pub recycling_potential_pct: Option<f64>,
    /// 0-10
    pub resource_efficiency_score: Option<f64>,
    pub extended_product_life_years: Option<f64>,
    /// 0-100
    pub reuse_potential_pct: Option<f64>,
    pub updated_at: DateTime<Utc>,
}
