//! Static per-metal benchmark registry

use serde::{Deserialize, Serialize};

use crate::models::MetalType;

/// Industry reference intensities for one metal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Benchmark {
    pub metal_type: MetalType,
    /// t CO2 per t of metal
    pub co2_tons_per_ton: f64,
    pub energy_kwh_per_ton: f64,
    pub water_m3_per_ton: f64,
    /// t waste per t of metal
    pub waste_tons_per_ton: f64,
    pub target_recycling_pct: f64,
}

static BENCHMARKS: [Benchmark; 3] = [
    Benchmark {
        metal_type: MetalType::Aluminium,
        co2_tons_per_ton: 11.5,
        energy_kwh_per_ton: 15500.0,
        water_m3_per_ton: 1500.0,
        waste_tons_per_ton: 0.15,
        target_recycling_pct: 65.0,
    },
    Benchmark {
        metal_type: MetalType::Copper,
        co2_tons_per_ton: 4.2,
        energy_kwh_per_ton: 3800.0,
        water_m3_per_ton: 350.0,
        waste_tons_per_ton: 1.0,
        target_recycling_pct: 55.0,
    },
    Benchmark {
        metal_type: MetalType::Steel,
        co2_tons_per_ton: 2.3,
        energy_kwh_per_ton: 2000.0,
        water_m3_per_ton: 100.0,
        waste_tons_per_ton: 0.4,
        target_recycling_pct: 70.0,
    },
];

/// Look up the benchmark row for a metal. `None` is a normal outcome.
pub fn benchmark_for(metal_type: MetalType) -> Option<&'static Benchmark> {
    BENCHMARKS.iter().find(|b| b.metal_type == metal_type)
}

/// All registered benchmark rows
pub fn all_benchmarks() -> &'static [Benchmark] {
    &BENCHMARKS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_known_metal_has_a_benchmark() {
        for metal in [MetalType::Aluminium, MetalType::Copper, MetalType::Steel] {
            let benchmark = benchmark_for(metal).unwrap();
            assert_eq!(benchmark.metal_type, metal);
        }
    }

    #[test]
    fn test_unknown_metal_has_no_benchmark() {
        assert!(benchmark_for(MetalType::Unknown).is_none());
    }

    #[test]
    fn test_benchmark_values() {
        let aluminium = benchmark_for(MetalType::Aluminium).unwrap();
        assert_eq!(aluminium.co2_tons_per_ton, 11.5);
        assert_eq!(aluminium.energy_kwh_per_ton, 15500.0);
        assert_eq!(aluminium.target_recycling_pct, 65.0);

        let copper = benchmark_for(MetalType::Copper).unwrap();
        assert_eq!(copper.co2_tons_per_ton, 4.2);
        assert_eq!(copper.waste_tons_per_ton, 1.0);

        let steel = benchmark_for(MetalType::Steel).unwrap();
        assert_eq!(steel.water_m3_per_ton, 100.0);
        assert_eq!(steel.target_recycling_pct, 70.0);

        assert_eq!(all_benchmarks().len(), 3);
    }
}
