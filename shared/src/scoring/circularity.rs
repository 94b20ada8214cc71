//! Weighted circularity composite

use serde::{Deserialize, Serialize};

use super::error::ScoringError;
use crate::models::CircularityMetric;
use crate::types::round_to;

pub const MCI_WEIGHT: f64 = 0.40;
pub const RECYCLING_WEIGHT: f64 = 0.25;
pub const RESOURCE_EFFICIENCY_WEIGHT: f64 = 0.20;
pub const REUSE_WEIGHT: f64 = 0.15;

/// Circularity sub-metrics in their native scales
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct CircularityInputs {
    /// 0-1
    pub mci_score: Option<f64>,
    /// 0-100
    pub recycling_potential_pct: Option<f64>,
    /// 0-10
    pub resource_efficiency_score: Option<f64>,
    /// 0-100
    pub reuse_potential_pct: Option<f64>,
}

impl From<&CircularityMetric> for CircularityInputs {
    fn from(metric: &CircularityMetric) -> Self {
        CircularityInputs {
            mci_score: metric.mci_score,
            recycling_potential_pct: metric.recycling_potential_pct,
            resource_efficiency_score: metric.resource_efficiency_score,
            reuse_potential_pct: metric.reuse_potential_pct,
        }
    }
}

/// Sub-metric that took part in a composite
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CircularityComponent {
    Mci,
    Recycling,
    ResourceEfficiency,
    Reuse,
}

/// Letter-style circularity grade
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CircularityGrade {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl CircularityGrade {
    /// Excellent requires strictly more than 0.8
    pub fn from_score(score: f64) -> Self {
        if score > 0.8 {
            CircularityGrade::Excellent
        } else if score >= 0.6 {
            CircularityGrade::Good
        } else if score >= 0.4 {
            CircularityGrade::Fair
        } else {
            CircularityGrade::Poor
        }
    }
}

impl std::fmt::Display for CircularityGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CircularityGrade::Excellent => write!(f, "Excellent"),
            CircularityGrade::Good => write!(f, "Good"),
            CircularityGrade::Fair => write!(f, "Fair"),
            CircularityGrade::Poor => write!(f, "Poor"),
        }
    }
}

/// Composite circularity result
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CircularityComposite {
    /// 0-1, rounded to 3 decimals
    pub score: f64,
    pub grade: CircularityGrade,
    pub components: Vec<CircularityComponent>,
    pub weight_used: f64,
}

/// Combine the present sub-metrics into one 0-1 score.
///
/// Each sub-metric is scaled to 0-1 and weighted; the sum is divided by
/// the weights actually used so missing fields are not penalized. The
/// grade is taken from the rounded score.
pub fn composite_circularity(
    inputs: &CircularityInputs,
) -> Result<CircularityComposite, ScoringError> {
    let candidates = [
        (CircularityComponent::Mci, inputs.mci_score, 1.0, MCI_WEIGHT),
        (
            CircularityComponent::Recycling,
            inputs.recycling_potential_pct,
            100.0,
            RECYCLING_WEIGHT,
        ),
        (
            CircularityComponent::ResourceEfficiency,
            inputs.resource_efficiency_score,
            10.0,
            RESOURCE_EFFICIENCY_WEIGHT,
        ),
        (CircularityComponent::Reuse, inputs.reuse_potential_pct, 100.0, REUSE_WEIGHT),
    ];

    let mut weighted_sum = 0.0;
    let mut weight_used = 0.0;
    let mut components = Vec::with_capacity(candidates.len());

    for (component, value, scale, weight) in candidates {
        let Some(value) = value.filter(|v| v.is_finite()) else {
            continue;
        };
        weighted_sum += (value / scale).clamp(0.0, 1.0) * weight;
        weight_used += weight;
        components.push(component);
    }

    if components.is_empty() {
        return Err(ScoringError::insufficient("no circularity sub-metric present"));
    }

    let score = round_to((weighted_sum / weight_used).clamp(0.0, 1.0), 3);

    Ok(CircularityComposite {
        score,
        grade: CircularityGrade::from_score(score),
        components,
        weight_used: round_to(weight_used, 3),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_sum_to_one() {
        let total = MCI_WEIGHT + RECYCLING_WEIGHT + RESOURCE_EFFICIENCY_WEIGHT + REUSE_WEIGHT;
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_no_metrics_is_insufficient() {
        let result = composite_circularity(&CircularityInputs::default());
        assert!(matches!(result, Err(ScoringError::InsufficientData { .. })));
    }

    #[test]
    fn test_partial_metrics_are_not_penalized() {
        let inputs = CircularityInputs {
            mci_score: Some(0.9),
            ..Default::default()
        };
        let result = composite_circularity(&inputs).unwrap();
        assert_eq!(result.score, 0.9);
        assert_eq!(result.grade, CircularityGrade::Excellent);
        assert_eq!(result.components, vec![CircularityComponent::Mci]);
        assert_eq!(result.weight_used, 0.4);
    }

    #[test]
    fn test_grade_ladder() {
        assert_eq!(CircularityGrade::from_score(0.81), CircularityGrade::Excellent);
        assert_eq!(CircularityGrade::from_score(0.8), CircularityGrade::Good);
        assert_eq!(CircularityGrade::from_score(0.6), CircularityGrade::Good);
        assert_eq!(CircularityGrade::from_score(0.59), CircularityGrade::Fair);
        assert_eq!(CircularityGrade::from_score(0.4), CircularityGrade::Fair);
        assert_eq!(CircularityGrade::from_score(0.39), CircularityGrade::Poor);
    }
}
