//! Processing stage records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Processing stage for an assessment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingData {
    pub id: Uuid,
    pub assessment_id: Uuid,
    pub process_type: String,
    /// Metered energy before efficiency adjustment
    pub raw_energy_kwh: f64,
    pub equipment_efficiency_pct: Option<f64>,
    /// Efficiency-adjusted energy, computed at write time
    pub energy_consumption_kwh: f64,
    pub created_at: DateTime<Utc>,
}

/// Energy drawn once equipment losses are accounted for:
/// `raw / (efficiency / 100)`. A missing or non-positive efficiency
/// leaves the metered value unchanged.
pub fn efficiency_adjusted_energy(raw_energy_kwh: f64, equipment_efficiency_pct: Option<f64>) -> f64 {
    match equipment_efficiency_pct {
        Some(efficiency) if efficiency > 0.0 => raw_energy_kwh / (efficiency / 100.0),
        _ => raw_energy_kwh,
    }
}
