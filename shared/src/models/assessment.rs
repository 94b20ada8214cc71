//! Life-cycle assessment header records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Metal under assessment; selects the benchmark row used for scoring
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MetalType {
    Aluminium,
    Copper,
    Steel,
    /// Any metal without a benchmark row
    #[serde(other)]
    Unknown,
}

impl MetalType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetalType::Aluminium => "aluminium",
            MetalType::Copper => "copper",
            MetalType::Steel => "steel",
            MetalType::Unknown => "unknown",
        }
    }

    /// Parse a stored metal name. Unrecognized names map to `Unknown`
    /// so downstream scoring can return a neutral result.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "aluminium" | "aluminum" => MetalType::Aluminium,
            "copper" => MetalType::Copper,
            "steel" => MetalType::Steel,
            _ => MetalType::Unknown,
        }
    }
}

impl std::fmt::Display for MetalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MetalType::Aluminium => write!(f, "Aluminium"),
            MetalType::Copper => write!(f, "Copper"),
            MetalType::Steel => write!(f, "Steel"),
            MetalType::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Assessment workflow status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentStatus {
    Draft,
    InProgress,
    Completed,
}

impl AssessmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssessmentStatus::Draft => "draft",
            AssessmentStatus::InProgress => "in_progress",
            AssessmentStatus::Completed => "completed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "draft" => Some(AssessmentStatus::Draft),
            "in_progress" => Some(AssessmentStatus::InProgress),
            "completed" => Some(AssessmentStatus::Completed),
            _ => None,
        }
    }

    fn order(&self) -> u8 {
        match self {
            AssessmentStatus::Draft => 0,
            AssessmentStatus::InProgress => 1,
            AssessmentStatus::Completed => 2,
        }
    }

    /// Status only moves forward; staying put is allowed
    pub fn can_transition_to(&self, next: AssessmentStatus) -> bool {
        next.order() >= self.order()
    }
}

/// Assessment record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assessment {
    pub id: Uuid,
    pub project_name: String,
    pub metal_type: MetalType,
    pub status: AssessmentStatus,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
