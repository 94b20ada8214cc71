//! Environmental impact totals

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The single live impact row of an assessment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentalImpact {
    pub id: Uuid,
    pub assessment_id: Uuid,
    pub co2_emissions_tons: f64,
    pub total_energy_kwh: f64,
    pub total_water_m3: Option<f64>,
    pub total_waste_tons: Option<f64>,
    pub calculated_at: DateTime<Utc>,
}
