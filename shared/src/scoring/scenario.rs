//! Scenario feasibility, complexity and baseline comparison

use serde::{Deserialize, Serialize};

use super::impact::ImpactTotals;
use crate::models::{Scenario, ScenarioType};
use crate::types::{round_to, Level};

/// The part of a scenario the evaluator reads
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ScenarioInputs {
    pub scenario_type: ScenarioType,
    pub co2_reduction_pct: Option<f64>,
    pub cost_difference_pct: Option<f64>,
}

impl From<&Scenario> for ScenarioInputs {
    fn from(scenario: &Scenario) -> Self {
        ScenarioInputs {
            scenario_type: scenario.scenario_type,
            co2_reduction_pct: scenario.co2_reduction_pct,
            cost_difference_pct: scenario.cost_difference_pct,
        }
    }
}

/// Differences against the assessment's baseline scenario
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BaselineComparison {
    pub co2_improvement_vs_baseline: Option<f64>,
    pub cost_difference_vs_baseline: Option<f64>,
}

/// Derived scenario fields, never persisted
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ScenarioEvaluation {
    /// 0-1, rounded to 3 decimals; `None` without a CO2 reduction figure
    pub feasibility_score: Option<f64>,
    pub implementation_complexity: Level,
    /// `None` for the baseline itself or when no baseline exists
    pub comparison: Option<BaselineComparison>,
    pub projected_co2_tons: Option<f64>,
}

/// Feasibility before cost adjustment
pub fn base_feasibility(co2_reduction_pct: f64) -> f64 {
    let r = co2_reduction_pct;
    if r < 0.0 {
        (0.3 + r / 100.0).max(0.0)
    } else if r <= 20.0 {
        0.6 + r / 100.0
    } else if r <= 50.0 {
        0.8 + (r - 20.0) / 150.0
    } else {
        (0.9 - (r - 50.0) / 200.0).max(0.4)
    }
}

/// Multiplier applied for the scenario's cost difference
pub fn cost_multiplier(cost_difference_pct: f64) -> f64 {
    if cost_difference_pct < -50.0 {
        0.6
    } else if cost_difference_pct < 0.0 {
        0.8
    } else if cost_difference_pct > 20.0 {
        1.2
    } else {
        1.0
    }
}

/// Final feasibility in [0, 1], rounded to 3 decimals.
/// A missing cost difference applies no adjustment.
pub fn feasibility_score(co2_reduction_pct: f64, cost_difference_pct: Option<f64>) -> f64 {
    let multiplier = cost_difference_pct.map(cost_multiplier).unwrap_or(1.0);
    round_to((base_feasibility(co2_reduction_pct) * multiplier).clamp(0.0, 1.0), 3)
}

/// Implementation complexity tier. A missing reduction reads as zero.
pub fn implementation_complexity(scenario_type: ScenarioType, co2_reduction_pct: Option<f64>) -> Level {
    let r = co2_reduction_pct.unwrap_or(0.0);
    match scenario_type {
        ScenarioType::Baseline => Level::Low,
        ScenarioType::Circular if r > 30.0 => Level::High,
        ScenarioType::Circular => Level::Medium,
        ScenarioType::Optimized if r > 50.0 => Level::High,
        ScenarioType::Optimized if r > 20.0 => Level::Medium,
        ScenarioType::Optimized => Level::Low,
    }
}

fn delta(value: Option<f64>, baseline: Option<f64>) -> Option<f64> {
    match (value, baseline) {
        (Some(v), Some(b)) => Some(round_to(v - b, 3)),
        _ => None,
    }
}

/// Evaluate one scenario, optionally against the baseline and the latest
/// impact totals
pub fn evaluate_scenario(
    scenario: &ScenarioInputs,
    baseline: Option<&ScenarioInputs>,
    impact: Option<&ImpactTotals>,
) -> ScenarioEvaluation {
    let comparison = match baseline {
        Some(base) if scenario.scenario_type != ScenarioType::Baseline => Some(BaselineComparison {
            co2_improvement_vs_baseline: delta(scenario.co2_reduction_pct, base.co2_reduction_pct),
            cost_difference_vs_baseline: delta(
                scenario.cost_difference_pct,
                base.cost_difference_pct,
            ),
        }),
        _ => None,
    };

    let projected_co2_tons = match (impact, scenario.co2_reduction_pct) {
        (Some(totals), Some(r)) => Some(round_to(totals.co2_tons * (1.0 - r / 100.0), 2)),
        _ => None,
    };

    ScenarioEvaluation {
        feasibility_score: scenario
            .co2_reduction_pct
            .map(|r| feasibility_score(r, scenario.cost_difference_pct)),
        implementation_complexity: implementation_complexity(
            scenario.scenario_type,
            scenario.co2_reduction_pct,
        ),
        comparison,
        projected_co2_tons,
    }
}

/// Evaluate every scenario of an assessment. The first baseline found
/// is the reference for all others.
pub fn evaluate_scenarios(
    scenarios: &[ScenarioInputs],
    impact: Option<&ImpactTotals>,
) -> Vec<ScenarioEvaluation> {
    let baseline = scenarios
        .iter()
        .find(|s| s.scenario_type == ScenarioType::Baseline);

    scenarios
        .iter()
        .map(|s| evaluate_scenario(s, baseline, impact))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario(kind: ScenarioType, r: Option<f64>, c: Option<f64>) -> ScenarioInputs {
        ScenarioInputs {
            scenario_type: kind,
            co2_reduction_pct: r,
            cost_difference_pct: c,
        }
    }

    #[test]
    fn test_base_curve_segments() {
        assert_eq!(base_feasibility(-50.0), 0.0);
        assert!((base_feasibility(-10.0) - 0.2).abs() < 1e-12);
        assert!((base_feasibility(0.0) - 0.6).abs() < 1e-12);
        assert!((base_feasibility(20.0) - 0.8).abs() < 1e-12);
        assert!((base_feasibility(50.0) - 1.0).abs() < 1e-12);
        assert!((base_feasibility(70.0) - 0.8).abs() < 1e-12);
        assert!((base_feasibility(100.0) - 0.65).abs() < 1e-12);
        assert_eq!(base_feasibility(250.0), 0.4);
    }

    #[test]
    fn test_cost_multiplier_bands() {
        assert_eq!(cost_multiplier(-75.0), 0.6);
        assert_eq!(cost_multiplier(-50.0), 0.8);
        assert_eq!(cost_multiplier(-0.5), 0.8);
        assert_eq!(cost_multiplier(0.0), 1.0);
        assert_eq!(cost_multiplier(20.0), 1.0);
        assert_eq!(cost_multiplier(20.5), 1.2);
    }

    #[test]
    fn test_feasibility_is_clamped() {
        // 1.0 * 1.2 would exceed 1
        assert_eq!(feasibility_score(50.0, Some(100.0)), 1.0);
    }

    #[test]
    fn test_complexity_tiers() {
        use ScenarioType::*;
        assert_eq!(implementation_complexity(Baseline, Some(90.0)), Level::Low);
        assert_eq!(implementation_complexity(Circular, Some(30.0)), Level::Medium);
        assert_eq!(implementation_complexity(Circular, Some(31.0)), Level::High);
        assert_eq!(implementation_complexity(Optimized, Some(20.0)), Level::Low);
        assert_eq!(implementation_complexity(Optimized, Some(35.0)), Level::Medium);
        assert_eq!(implementation_complexity(Optimized, Some(51.0)), Level::High);
        assert_eq!(implementation_complexity(Circular, None), Level::Medium);
    }

    #[test]
    fn test_baseline_has_no_comparison() {
        let base = scenario(ScenarioType::Baseline, Some(0.0), Some(0.0));
        let evaluation = evaluate_scenario(&base, Some(&base), None);
        assert!(evaluation.comparison.is_none());
    }

    #[test]
    fn test_comparison_is_null_safe() {
        let base = scenario(ScenarioType::Baseline, Some(5.0), None);
        let circular = scenario(ScenarioType::Circular, Some(35.0), Some(10.0));
        let comparison = evaluate_scenario(&circular, Some(&base), None).comparison.unwrap();
        assert_eq!(comparison.co2_improvement_vs_baseline, Some(30.0));
        assert_eq!(comparison.cost_difference_vs_baseline, None);
    }

    #[test]
    fn test_missing_reduction_has_no_feasibility() {
        let optimized = scenario(ScenarioType::Optimized, None, Some(5.0));
        let evaluation = evaluate_scenario(&optimized, None, None);
        assert_eq!(evaluation.feasibility_score, None);
        assert_eq!(evaluation.implementation_complexity, Level::Low);
    }

    #[test]
    fn test_projected_co2_uses_impact_totals() {
        let totals = ImpactTotals {
            co2_tons: 1000.0,
            ..Default::default()
        };
        let circular = scenario(ScenarioType::Circular, Some(25.0), None);
        let evaluation = evaluate_scenario(&circular, None, Some(&totals));
        assert_eq!(evaluation.projected_co2_tons, Some(750.0));
    }

    #[test]
    fn test_evaluate_scenarios_finds_baseline() {
        let scenarios = vec![
            scenario(ScenarioType::Circular, Some(40.0), Some(15.0)),
            scenario(ScenarioType::Baseline, Some(0.0), Some(0.0)),
            scenario(ScenarioType::Optimized, Some(22.5), Some(-5.0)),
        ];
        let evaluations = evaluate_scenarios(&scenarios, None);
        assert_eq!(evaluations.len(), 3);
        assert_eq!(
            evaluations[0].comparison.unwrap().co2_improvement_vs_baseline,
            Some(40.0)
        );
        assert!(evaluations[1].comparison.is_none());
        assert_eq!(
            evaluations[2].comparison.unwrap().cost_difference_vs_baseline,
            Some(-5.0)
        );
    }
}
