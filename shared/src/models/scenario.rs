//! Improvement scenario records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Scenario kind
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioType {
    Baseline,
    Circular,
    Optimized,
}

impl ScenarioType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScenarioType::Baseline => "baseline",
            ScenarioType::Circular => "circular",
            ScenarioType::Optimized => "optimized",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "baseline" => Some(ScenarioType::Baseline),
            "circular" => Some(ScenarioType::Circular),
            "optimized" => Some(ScenarioType::Optimized),
            _ => None,
        }
    }
}

/// Scenario record as stored
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub id: Uuid,
    pub assessment_id: Uuid,
    pub name: String,
    pub scenario_type: ScenarioType,
    pub description: Option<String>,
    /// 0-100
    pub co2_reduction_pct: Option<f64>,
    /// -100 to 1000
    pub cost_difference_pct: Option<f64>,
    pub created_at: DateTime<Utc>,
}
