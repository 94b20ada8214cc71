//! Impact normalization tests
//!
//! Covers benchmark comparison and rating including:
//! - Zero total mass never produces NaN or infinity
//! - Aluminium CO2 intensity above benchmark
//! - Rating ladder boundaries

use proptest::prelude::*;
use shared::{
    benchmark_for, normalize_impact, ImpactTotals, MetalType, Performance, ScoringError,
    SustainabilityRating,
};

const REGISTERED_METALS: [MetalType; 3] = [MetalType::Aluminium, MetalType::Copper, MetalType::Steel];

fn totals(co2_tons: f64, energy_kwh: f64) -> ImpactTotals {
    ImpactTotals {
        co2_tons,
        energy_kwh,
        water_m3: None,
        waste_tons: None,
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_aluminium_co2_above_benchmark() {
        // 1400 t over 100 t of material against an 11.5 t/t benchmark
        let result = normalize_impact(&totals(1400.0, 1_550_000.0), 100.0, MetalType::Aluminium)
            .unwrap();

        assert_eq!(result.co2.per_ton, 14.0);
        assert_eq!(result.co2.benchmark_per_ton, 11.5);
        assert_eq!(result.co2.ratio, 1.217);
        assert_eq!(result.co2.performance, Performance::Worse);
        assert_eq!(result.energy.ratio, 1.0);
        assert_eq!(result.energy.performance, Performance::Better);
    }

    #[test]
    fn test_rating_uses_co2_and_energy_only() {
        let input = ImpactTotals {
            co2_tons: 230.0,
            energy_kwh: 200_000.0,
            water_m3: Some(1_000_000.0),
            waste_tons: Some(1_000.0),
        };
        let result = normalize_impact(&input, 100.0, MetalType::Steel).unwrap();

        assert_eq!(result.water.unwrap().performance, Performance::Worse);
        assert_eq!(result.waste.unwrap().performance, Performance::Worse);
        assert_eq!(result.average_ratio, 1.0);
        assert_eq!(result.rating, SustainabilityRating::Average);
    }

    #[test]
    fn test_low_intensity_copper_is_excellent() {
        let result = normalize_impact(&totals(210.0, 190_000.0), 100.0, MetalType::Copper).unwrap();
        assert_eq!(result.co2.ratio, 0.5);
        assert_eq!(result.energy.ratio, 0.5);
        assert_eq!(result.rating, SustainabilityRating::Excellent);
    }

    #[test]
    fn test_zero_mass_for_every_registered_metal() {
        for metal in REGISTERED_METALS {
            let result = normalize_impact(&totals(500.0, 10_000.0), 0.0, metal);
            assert!(matches!(result, Err(ScoringError::InsufficientData { .. })));
        }
    }

    #[test]
    fn test_negative_and_nan_mass_are_insufficient() {
        for mass in [-5.0, f64::NAN, f64::INFINITY] {
            let result = normalize_impact(&totals(10.0, 10.0), mass, MetalType::Steel);
            assert!(result.unwrap_err().is_neutral());
        }
    }

    #[test]
    fn test_unknown_metal_is_unknown_benchmark() {
        let result = normalize_impact(&totals(10.0, 10.0), 10.0, MetalType::Unknown);
        assert_eq!(
            result,
            Err(ScoringError::UnknownBenchmark {
                metal: MetalType::Unknown
            })
        );
    }

    #[test]
    fn test_metal_aliases_resolve_to_benchmarks() {
        assert!(benchmark_for(MetalType::parse("aluminum")).is_some());
        assert!(benchmark_for(MetalType::parse("Steel")).is_some());
        assert!(benchmark_for(MetalType::parse("zinc")).is_none());
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    fn metal_strategy() -> impl Strategy<Value = MetalType> {
        prop::sample::select(REGISTERED_METALS.to_vec())
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Zero mass is always the neutral InsufficientData result
        #[test]
        fn prop_zero_mass_never_produces_numbers(
            metal in metal_strategy(),
            co2 in 0.0f64..1_000_000.0,
            energy in 0.0f64..1_000_000_000.0,
        ) {
            let result = normalize_impact(&totals(co2, energy), 0.0, metal);
            prop_assert!(
                matches!(result, Err(ScoringError::InsufficientData { .. })),
                "expected InsufficientData"
            );
        }

        /// Positive mass always yields finite figures
        #[test]
        fn prop_positive_mass_is_finite(
            metal in metal_strategy(),
            co2 in 0.0f64..1_000_000.0,
            energy in 0.0f64..1_000_000_000.0,
            mass in 0.001f64..100_000.0,
        ) {
            let result = normalize_impact(&totals(co2, energy), mass, metal).unwrap();
            prop_assert!(result.co2.per_ton.is_finite());
            prop_assert!(result.co2.ratio.is_finite());
            prop_assert!(result.energy.ratio.is_finite());
            prop_assert!(result.average_ratio.is_finite());
        }

        /// Performance agrees with the reported direction of the ratio
        #[test]
        fn prop_performance_matches_ratio(
            metal in metal_strategy(),
            co2 in 0.0f64..100_000.0,
            mass in 1.0f64..10_000.0,
        ) {
            let result = normalize_impact(&totals(co2, 0.0), mass, metal).unwrap();
            if result.co2.ratio < 1.0 {
                prop_assert_eq!(result.co2.performance, Performance::Better);
            }
            if result.co2.ratio > 1.001 {
                prop_assert_eq!(result.co2.performance, Performance::Worse);
            }
        }
    }
}
