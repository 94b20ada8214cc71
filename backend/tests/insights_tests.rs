//! Insight generation tests
//!
//! Tests for the rule-based insight generator including:
//! - Aluminium CO2 insight severity and points
//! - Severity ordering of the insight list
//! - Idempotence apart from the generation timestamp
//! - Priority actions and predictions

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use shared::{
    generate_insights, generate_insights_at, CircularityInputs, ImpactTotals, InsightCategory,
    InsightReport, InsightRequest, InsightSettings, Level, MaterialInputs, MetalType,
    OverallGrade, ACTION_TIMELINE, AUDIT_TIMELINE,
};

fn aluminium_request() -> InsightRequest {
    InsightRequest {
        metal_type: MetalType::Aluminium,
        impact: Some(ImpactTotals {
            co2_tons: 1400.0,
            energy_kwh: 1_550_000.0,
            water_m3: None,
            waste_tons: None,
        }),
        circularity: Some(CircularityInputs {
            mci_score: Some(0.3),
            ..Default::default()
        }),
        materials: vec![
            MaterialInputs {
                quantity_tons: 60.0,
                recycled_content_pct: 30.0,
            },
            MaterialInputs {
                quantity_tons: 40.0,
                recycled_content_pct: 50.0,
            },
        ],
    }
}

fn steel_request(co2_tons: f64, energy_kwh: f64, mci: f64, recycled_pct: f64) -> InsightRequest {
    InsightRequest {
        metal_type: MetalType::Steel,
        impact: Some(ImpactTotals {
            co2_tons,
            energy_kwh,
            water_m3: None,
            waste_tons: None,
        }),
        circularity: Some(CircularityInputs {
            mci_score: Some(mci),
            ..Default::default()
        }),
        materials: vec![MaterialInputs {
            quantity_tons: 100.0,
            recycled_content_pct: recycled_pct,
        }],
    }
}

fn find(report: &InsightReport, category: InsightCategory) -> Option<&shared::Insight> {
    report.insights.iter().find(|i| i.category == category)
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_aluminium_co2_insight_is_high_severity() {
        let report = generate_insights(&aluminium_request(), &InsightSettings::default());
        let co2 = find(&report, InsightCategory::Co2Emissions).unwrap();

        assert_eq!(co2.severity, Level::High);
        assert_eq!(co2.impact, Level::High);
        assert_eq!(co2.points, 40);
        assert_eq!(co2.metric_value, 14.0);
        assert_eq!(co2.benchmark_value, 11.5);
        assert_eq!(co2.confidence, 0.92);
    }

    #[test]
    fn test_overall_score_averages_branches() {
        // CO2 40, energy 75, circularity 45, recycling 55
        let report = generate_insights(&aluminium_request(), &InsightSettings::default());
        assert_eq!(report.insights.len(), 4);
        assert_eq!(report.overall_score, Some(54));
        assert_eq!(report.grade, Some(OverallGrade::NeedsImprovement));
        assert_eq!(report.average_recycled_content_pct, Some(40.0));
    }

    #[test]
    fn test_high_severity_insights_become_priority_actions() {
        let report = generate_insights(&aluminium_request(), &InsightSettings::default());

        let categories: Vec<_> = report
            .priority_actions
            .iter()
            .filter_map(|a| a.category)
            .collect();
        assert_eq!(
            categories,
            vec![InsightCategory::Co2Emissions, InsightCategory::Circularity]
        );
        assert!(report
            .priority_actions
            .iter()
            .filter(|a| a.category.is_some())
            .all(|a| a.timeline == ACTION_TIMELINE));
    }

    #[test]
    fn test_low_score_adds_audit_action() {
        let report = generate_insights(&aluminium_request(), &InsightSettings::default());
        let audit = report.priority_actions.last().unwrap();
        assert!(audit.category.is_none());
        assert_eq!(audit.timeline, AUDIT_TIMELINE);
        assert_eq!(audit.complexity, Level::Medium);
        assert_eq!(audit.expected_impact, Level::High);
    }

    #[test]
    fn test_strong_result_has_no_actions() {
        let request = InsightRequest {
            metal_type: MetalType::Steel,
            impact: Some(ImpactTotals {
                co2_tons: 100.0,
                energy_kwh: 100_000.0,
                water_m3: None,
                waste_tons: None,
            }),
            circularity: Some(CircularityInputs {
                mci_score: Some(0.85),
                ..Default::default()
            }),
            materials: vec![MaterialInputs {
                quantity_tons: 100.0,
                recycled_content_pct: 80.0,
            }],
        };
        let report = generate_insights(&request, &InsightSettings::default());

        assert!(report.insights.iter().all(|i| i.severity == Level::Low));
        assert!(report.priority_actions.is_empty());
        // (90 + 75 + 95 + 92) / 4 = 88
        assert_eq!(report.overall_score, Some(88));
        assert_eq!(report.grade, Some(OverallGrade::Good));
    }

    #[test]
    fn test_predictions_for_weak_result() {
        let report = generate_insights(&aluminium_request(), &InsightSettings::default());
        let predictions = report.predictions;

        assert_eq!(predictions.next_quarter_co2_tons, Some(1372.0));
        assert_eq!(predictions.energy_savings_potential_kwh, Some(310_000.0));
        assert_eq!(predictions.circularity_improvement_potential, Some(0.45));
        let cost = predictions.cost_savings_estimate.unwrap();
        assert!((cost - 97_900.0).abs() < 0.01);
    }

    #[test]
    fn test_predictions_absent_without_inputs() {
        let request = InsightRequest {
            metal_type: MetalType::Copper,
            impact: None,
            circularity: None,
            materials: vec![MaterialInputs {
                quantity_tons: 10.0,
                recycled_content_pct: 20.0,
            }],
        };
        let report = generate_insights(&request, &InsightSettings::default());

        assert_eq!(report.insights.len(), 1);
        assert_eq!(report.predictions.next_quarter_co2_tons, None);
        assert_eq!(report.predictions.circularity_improvement_potential, None);
        assert_eq!(report.predictions.cost_savings_estimate, None);
    }

    #[test]
    fn test_zero_mass_skips_intensity_branches() {
        let mut request = aluminium_request();
        request.materials = vec![MaterialInputs {
            quantity_tons: 0.0,
            recycled_content_pct: 50.0,
        }];
        let report = generate_insights(&request, &InsightSettings::default());

        assert!(find(&report, InsightCategory::Co2Emissions).is_none());
        assert!(find(&report, InsightCategory::Energy).is_none());
        assert!(find(&report, InsightCategory::Recycling).is_some());
    }

    #[test]
    fn test_empty_inputs_give_neutral_report() {
        let request = InsightRequest {
            metal_type: MetalType::Steel,
            impact: None,
            circularity: None,
            materials: Vec::new(),
        };
        let report = generate_insights(&request, &InsightSettings::default());
        assert!(report.insights.is_empty());
        assert_eq!(report.overall_score, None);
        assert_eq!(report.grade, None);
        assert!(report.priority_actions.is_empty());
    }

    #[test]
    fn test_identical_inputs_identical_output() {
        let at = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        let settings = InsightSettings::default();
        let first = generate_insights_at(&aluminium_request(), &settings, at);
        let second = generate_insights_at(&aluminium_request(), &settings, at);
        assert_eq!(first, second);
    }

    #[test]
    fn test_only_timestamp_differs_between_calls() {
        let settings = InsightSettings::default();
        let first = generate_insights(&aluminium_request(), &settings);
        let mut second = generate_insights(&aluminium_request(), &settings);
        second.generated_at = first.generated_at;
        assert_eq!(first, second);
    }
}

// ============================================================================
// Branch Ladder Tests
// Steel benchmark: 2.3 t CO2/t, 2000 kWh/t, 70% recycled content
// ============================================================================

#[cfg(test)]
mod branch_ladders {
    use super::*;

    fn branch(request: &InsightRequest, category: InsightCategory) -> (Level, Level, u32) {
        let report = generate_insights(request, &InsightSettings::default());
        let insight = find(&report, category).unwrap();
        (insight.severity, insight.impact, insight.points)
    }

    #[test]
    fn co2_slightly_above_benchmark_is_medium() {
        // 2.5 t/t, ratio 1.087
        let request = steel_request(250.0, 200_000.0, 0.8, 70.0);
        assert_eq!(
            branch(&request, InsightCategory::Co2Emissions),
            (Level::Medium, Level::Medium, 65)
        );
    }

    #[test]
    fn co2_ratio_of_one_point_two_is_medium() {
        let request = steel_request(276.0, 200_000.0, 0.8, 70.0);
        assert_eq!(
            branch(&request, InsightCategory::Co2Emissions),
            (Level::Medium, Level::Medium, 65)
        );
    }

    #[test]
    fn co2_at_benchmark_is_low() {
        let request = steel_request(230.0, 200_000.0, 0.8, 70.0);
        assert_eq!(
            branch(&request, InsightCategory::Co2Emissions),
            (Level::Low, Level::Low, 90)
        );
    }

    #[test]
    fn energy_ratio_of_one_point_one_five_is_low() {
        let request = steel_request(230.0, 230_000.0, 0.8, 70.0);
        assert_eq!(branch(&request, InsightCategory::Energy), (Level::Low, Level::Low, 75));
    }

    #[test]
    fn energy_above_threshold_is_high_with_medium_impact() {
        // 2400 kWh/t, ratio 1.2
        let request = steel_request(230.0, 240_000.0, 0.8, 70.0);
        assert_eq!(
            branch(&request, InsightCategory::Energy),
            (Level::High, Level::Medium, 50)
        );
    }

    #[test]
    fn energy_action_has_low_complexity() {
        let request = steel_request(230.0, 240_000.0, 0.8, 70.0);
        let report = generate_insights(&request, &InsightSettings::default());
        let action = report
            .priority_actions
            .iter()
            .find(|a| a.category == Some(InsightCategory::Energy))
            .unwrap();
        assert_eq!(action.complexity, Level::Low);
        assert_eq!(action.expected_impact, Level::Medium);
        assert_eq!(action.timeline, ACTION_TIMELINE);
    }

    #[test]
    fn mci_of_one_half_is_medium() {
        let request = steel_request(230.0, 200_000.0, 0.5, 70.0);
        assert_eq!(
            branch(&request, InsightCategory::Circularity),
            (Level::Medium, Level::Medium, 70)
        );
    }

    #[test]
    fn mci_just_below_one_half_is_high() {
        let request = steel_request(230.0, 200_000.0, 0.49, 70.0);
        assert_eq!(
            branch(&request, InsightCategory::Circularity),
            (Level::High, Level::High, 45)
        );
    }

    #[test]
    fn mci_of_point_seven_is_low() {
        let request = steel_request(230.0, 200_000.0, 0.7, 70.0);
        assert_eq!(
            branch(&request, InsightCategory::Circularity),
            (Level::Low, Level::Low, 95)
        );
    }

    #[test]
    fn recycled_content_at_target_is_low() {
        let request = steel_request(230.0, 200_000.0, 0.8, 70.0);
        assert_eq!(
            branch(&request, InsightCategory::Recycling),
            (Level::Low, Level::Low, 92)
        );
    }

    #[test]
    fn recycled_content_below_target_is_medium() {
        let request = steel_request(230.0, 200_000.0, 0.8, 69.5);
        assert_eq!(
            branch(&request, InsightCategory::Recycling),
            (Level::Medium, Level::Medium, 55)
        );
    }

    #[test]
    fn mixed_ladder_score_triggers_audit() {
        // 65 + 50 + 70 + 92 = 277, mean 69.25
        let request = steel_request(276.0, 240_000.0, 0.5, 70.0);
        let report = generate_insights(&request, &InsightSettings::default());
        assert_eq!(report.overall_score, Some(69));
        assert_eq!(report.grade, Some(OverallGrade::Fair));
        let audit = report.priority_actions.last().unwrap();
        assert!(audit.category.is_none());
        assert_eq!(audit.timeline, AUDIT_TIMELINE);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    fn request_strategy() -> impl Strategy<Value = InsightRequest> {
        (
            prop::sample::select(vec![MetalType::Aluminium, MetalType::Copper, MetalType::Steel]),
            prop::option::of((0.0f64..5000.0, 0.0f64..5_000_000.0)),
            prop::option::of(0.0f64..=1.0),
            prop::collection::vec((0.0f64..500.0, 0.0f64..=100.0), 0..5),
        )
            .prop_map(|(metal_type, impact, mci, materials)| InsightRequest {
                metal_type,
                impact: impact.map(|(co2_tons, energy_kwh)| ImpactTotals {
                    co2_tons,
                    energy_kwh,
                    water_m3: None,
                    waste_tons: None,
                }),
                circularity: Some(CircularityInputs {
                    mci_score: mci,
                    ..Default::default()
                }),
                materials: materials
                    .into_iter()
                    .map(|(quantity_tons, recycled_content_pct)| MaterialInputs {
                        quantity_tons,
                        recycled_content_pct,
                    })
                    .collect(),
            })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// High severity entries precede medium, which precede low
        #[test]
        fn prop_insights_sorted_by_severity(request in request_strategy()) {
            let report = generate_insights(&request, &InsightSettings::default());
            let ranks: Vec<u8> = report.insights.iter().map(|i| i.severity.rank()).collect();
            prop_assert!(ranks.windows(2).all(|w| w[0] <= w[1]));
        }

        /// Same inputs and timestamp give the same report
        #[test]
        fn prop_generation_is_idempotent(request in request_strategy()) {
            let at = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
            let settings = InsightSettings::default();
            prop_assert_eq!(
                generate_insights_at(&request, &settings, at),
                generate_insights_at(&request, &settings, at)
            );
        }

        /// Score and grade are present exactly when some branch fired
        #[test]
        fn prop_score_presence_matches_insights(request in request_strategy()) {
            let report = generate_insights(&request, &InsightSettings::default());
            prop_assert_eq!(report.overall_score.is_some(), !report.insights.is_empty());
            prop_assert_eq!(report.grade.is_some(), !report.insights.is_empty());
            if let Some(score) = report.overall_score {
                prop_assert!(score <= 100);
            }
        }

        /// At most one insight per branch
        #[test]
        fn prop_one_insight_per_category(request in request_strategy()) {
            let report = generate_insights(&request, &InsightSettings::default());
            prop_assert!(report.insights.len() <= 4);
            for category in [
                InsightCategory::Co2Emissions,
                InsightCategory::Energy,
                InsightCategory::Circularity,
                InsightCategory::Recycling,
            ] {
                let count = report.insights.iter().filter(|i| i.category == category).count();
                prop_assert!(count <= 1);
            }
        }
    }
}
