//! Transportation leg records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Mode of a transport leg
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Truck,
    Rail,
    Ship,
    Air,
}

impl TransportMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportMode::Truck => "truck",
            TransportMode::Rail => "rail",
            TransportMode::Ship => "ship",
            TransportMode::Air => "air",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "truck" => Some(TransportMode::Truck),
            "rail" => Some(TransportMode::Rail),
            "ship" => Some(TransportMode::Ship),
            "air" => Some(TransportMode::Air),
            _ => None,
        }
    }
}

/// Transport leg for an assessment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransportationData {
    pub id: Uuid,
    pub assessment_id: Uuid,
    pub transport_mode: TransportMode,
    pub distance_km: f64,
    pub cargo_tons: f64,
    /// Derived on read
    pub ton_km: f64,
    pub created_at: DateTime<Utc>,
}

/// Freight work of a leg in ton-kilometres
pub fn ton_km(distance_km: f64, cargo_tons: f64) -> f64 {
    distance_km * cargo_tons
}
