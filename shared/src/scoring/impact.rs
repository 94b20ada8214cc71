//! Impact normalization against the benchmark registry

use serde::{Deserialize, Serialize};

use super::benchmark::benchmark_for;
use super::error::ScoringError;
use crate::models::{EnvironmentalImpact, MaterialData, MetalType};
use crate::types::round_to;

/// Absolute impact totals fed to the normalizer
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct ImpactTotals {
    pub co2_tons: f64,
    pub energy_kwh: f64,
    pub water_m3: Option<f64>,
    pub waste_tons: Option<f64>,
}

impl From<&EnvironmentalImpact> for ImpactTotals {
    fn from(impact: &EnvironmentalImpact) -> Self {
        ImpactTotals {
            co2_tons: impact.co2_emissions_tons,
            energy_kwh: impact.total_energy_kwh,
            water_m3: impact.total_water_m3,
            waste_tons: impact.total_waste_tons,
        }
    }
}

/// The part of a material row the engine reads
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MaterialInputs {
    pub quantity_tons: f64,
    pub recycled_content_pct: f64,
}

impl From<&MaterialData> for MaterialInputs {
    fn from(material: &MaterialData) -> Self {
        MaterialInputs {
            quantity_tons: material.quantity_tons,
            recycled_content_pct: material.recycled_content_pct,
        }
    }
}

/// Sum of material quantities, the denominator for per-ton figures
pub fn total_material_mass(materials: &[MaterialInputs]) -> f64 {
    materials.iter().map(|m| m.quantity_tons).sum()
}

/// Unweighted mean of recycled content across material rows
pub fn average_recycled_content(materials: &[MaterialInputs]) -> Option<f64> {
    if materials.is_empty() {
        return None;
    }
    let total: f64 = materials.iter().map(|m| m.recycled_content_pct).sum();
    Some(total / materials.len() as f64)
}

/// Better or worse than benchmark
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Performance {
    Better,
    Worse,
}

impl Performance {
    /// A ratio of exactly 1.0 counts as better
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio <= 1.0 {
            Performance::Better
        } else {
            Performance::Worse
        }
    }
}

/// Overall sustainability rating
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SustainabilityRating {
    Excellent,
    Good,
    Average,
    #[serde(rename = "Below Average")]
    BelowAverage,
    Poor,
}

impl SustainabilityRating {
    /// Rate the mean of the CO2 and energy benchmark ratios
    pub fn from_average_ratio(average_ratio: f64) -> Self {
        if average_ratio <= 0.7 {
            SustainabilityRating::Excellent
        } else if average_ratio <= 0.9 {
            SustainabilityRating::Good
        } else if average_ratio <= 1.1 {
            SustainabilityRating::Average
        } else if average_ratio <= 1.3 {
            SustainabilityRating::BelowAverage
        } else {
            SustainabilityRating::Poor
        }
    }
}

impl std::fmt::Display for SustainabilityRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SustainabilityRating::Excellent => write!(f, "Excellent"),
            SustainabilityRating::Good => write!(f, "Good"),
            SustainabilityRating::Average => write!(f, "Average"),
            SustainabilityRating::BelowAverage => write!(f, "Below Average"),
            SustainabilityRating::Poor => write!(f, "Poor"),
        }
    }
}

/// One metric compared against its benchmark
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BenchmarkComparison {
    pub per_ton: f64,
    pub benchmark_per_ton: f64,
    pub ratio: f64,
    pub performance: Performance,
}

impl BenchmarkComparison {
    /// Reported values are rounded; performance uses the exact ratio
    fn new(total: f64, mass_tons: f64, benchmark_per_ton: f64) -> (Self, f64) {
        let per_ton = total / mass_tons;
        let ratio = per_ton / benchmark_per_ton;
        let comparison = BenchmarkComparison {
            per_ton: round_to(per_ton, 3),
            benchmark_per_ton,
            ratio: round_to(ratio, 3),
            performance: Performance::from_ratio(ratio),
        };
        (comparison, ratio)
    }
}

/// Per-ton impact figures rated against the metal's benchmark
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NormalizedImpact {
    pub metal_type: MetalType,
    pub total_mass_tons: f64,
    pub co2: BenchmarkComparison,
    pub energy: BenchmarkComparison,
    pub water: Option<BenchmarkComparison>,
    pub waste: Option<BenchmarkComparison>,
    pub average_ratio: f64,
    pub rating: SustainabilityRating,
}

/// Convert raw totals into per-ton figures, benchmark ratios and a rating.
///
/// A zero, negative or non-finite mass yields `InsufficientData`; a metal
/// without a benchmark yields `UnknownBenchmark`. Neither ever produces
/// NaN or infinity in the output.
pub fn normalize_impact(
    totals: &ImpactTotals,
    total_mass_tons: f64,
    metal_type: MetalType,
) -> Result<NormalizedImpact, ScoringError> {
    if !total_mass_tons.is_finite() || total_mass_tons <= 0.0 {
        return Err(ScoringError::insufficient("total material mass must be positive"));
    }
    let benchmark = benchmark_for(metal_type)
        .ok_or(ScoringError::UnknownBenchmark { metal: metal_type })?;

    let (co2, co2_ratio) =
        BenchmarkComparison::new(totals.co2_tons, total_mass_tons, benchmark.co2_tons_per_ton);
    let (energy, energy_ratio) = BenchmarkComparison::new(
        totals.energy_kwh,
        total_mass_tons,
        benchmark.energy_kwh_per_ton,
    );
    let water = totals
        .water_m3
        .map(|w| BenchmarkComparison::new(w, total_mass_tons, benchmark.water_m3_per_ton).0);
    let waste = totals
        .waste_tons
        .map(|w| BenchmarkComparison::new(w, total_mass_tons, benchmark.waste_tons_per_ton).0);

    let average_ratio = (co2_ratio + energy_ratio) / 2.0;

    Ok(NormalizedImpact {
        metal_type,
        total_mass_tons,
        co2,
        energy,
        water,
        waste,
        average_ratio: round_to(average_ratio, 3),
        rating: SustainabilityRating::from_average_ratio(average_ratio),
    })
}
