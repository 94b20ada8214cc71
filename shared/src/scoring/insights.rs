//! Insight and recommendation generation
//!
//! Four independent rule branches (CO2, energy, circularity, recycling)
//! each emit at most one insight and a point contribution. The overall
//! score is the mean of the contributions of the branches that fired.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::benchmark::{benchmark_for, Benchmark};
use super::circularity::CircularityInputs;
use super::impact::{average_recycled_content, total_material_mass, ImpactTotals, MaterialInputs};
use crate::models::{Assessment, CircularityMetric, EnvironmentalImpact, MaterialData, MetalType};
use crate::types::{round_to, Level};

/// Fixed timeline attached to insight-driven actions
pub const ACTION_TIMELINE: &str = "3-6 months";
/// Timeline of the generic audit action
pub const AUDIT_TIMELINE: &str = "1-2 months";
/// Scores strictly above this use the lighter projection constants
pub const STRONG_SCORE_THRESHOLD: u32 = 70;
/// Scores below this add the process audit action
pub const AUDIT_SCORE_THRESHOLD: u32 = 70;

const ELECTRICITY_PRICE_PER_KWH: f64 = 0.12;
const ENERGY_SAVINGS_SHARE: f64 = 0.15;
const CARBON_PRICE_PER_TON: f64 = 50.0;

/// Per-branch confidence constants. Their derivation is not documented,
/// so they stay plain configuration values.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct InsightSettings {
    pub co2_confidence: f64,
    pub energy_confidence: f64,
    pub circularity_confidence: f64,
    pub recycling_confidence: f64,
}

impl Default for InsightSettings {
    fn default() -> Self {
        Self {
            co2_confidence: 0.92,
            energy_confidence: 0.88,
            circularity_confidence: 0.85,
            recycling_confidence: 0.95,
        }
    }
}

/// Everything the generator reads
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InsightRequest {
    pub metal_type: MetalType,
    pub impact: Option<ImpactTotals>,
    pub circularity: Option<CircularityInputs>,
    pub materials: Vec<MaterialInputs>,
}

impl InsightRequest {
    pub fn from_records(
        assessment: &Assessment,
        impact: Option<&EnvironmentalImpact>,
        circularity: Option<&CircularityMetric>,
        materials: &[MaterialData],
    ) -> Self {
        InsightRequest {
            metal_type: assessment.metal_type,
            impact: impact.map(ImpactTotals::from),
            circularity: circularity.map(CircularityInputs::from),
            materials: materials.iter().map(MaterialInputs::from).collect(),
        }
    }
}

/// Rule branch that produced an insight
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InsightCategory {
    Co2Emissions,
    Energy,
    Circularity,
    Recycling,
}

/// One generated insight
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Insight {
    pub category: InsightCategory,
    pub title: String,
    pub description: String,
    pub recommendation: String,
    pub severity: Level,
    pub impact: Level,
    pub confidence: f64,
    /// Points this branch contributes to the overall score
    pub points: u32,
    pub potential_savings: String,
    pub metric_value: f64,
    pub benchmark_value: f64,
}

/// Action item derived from the insights
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriorityAction {
    pub title: String,
    pub description: String,
    pub category: Option<InsightCategory>,
    pub timeline: String,
    pub complexity: Level,
    pub expected_impact: Level,
}

/// Short-horizon projections from fixed constants
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Predictions {
    pub next_quarter_co2_tons: Option<f64>,
    pub energy_savings_potential_kwh: Option<f64>,
    pub circularity_improvement_potential: Option<f64>,
    pub cost_savings_estimate: Option<f64>,
}

/// Overall assessment grade
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum OverallGrade {
    Excellent,
    Good,
    Fair,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
}

impl OverallGrade {
    pub fn from_score(score: u32) -> Self {
        if score >= 90 {
            OverallGrade::Excellent
        } else if score >= 75 {
            OverallGrade::Good
        } else if score >= 60 {
            OverallGrade::Fair
        } else {
            OverallGrade::NeedsImprovement
        }
    }
}

impl std::fmt::Display for OverallGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OverallGrade::Excellent => write!(f, "Excellent"),
            OverallGrade::Good => write!(f, "Good"),
            OverallGrade::Fair => write!(f, "Fair"),
            OverallGrade::NeedsImprovement => write!(f, "Needs Improvement"),
        }
    }
}

/// Full generator output
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InsightReport {
    pub metal_type: MetalType,
    /// Sorted high, medium, low
    pub insights: Vec<Insight>,
    pub overall_score: Option<u32>,
    pub grade: Option<OverallGrade>,
    pub priority_actions: Vec<PriorityAction>,
    pub predictions: Predictions,
    pub average_recycled_content_pct: Option<f64>,
    pub benchmark: Option<Benchmark>,
    /// Metadata only; not part of the scored result
    pub generated_at: DateTime<Utc>,
}

impl InsightReport {
    fn neutral(metal_type: MetalType, generated_at: DateTime<Utc>) -> Self {
        InsightReport {
            metal_type,
            insights: Vec::new(),
            overall_score: None,
            grade: None,
            priority_actions: Vec::new(),
            predictions: Predictions::default(),
            average_recycled_content_pct: None,
            benchmark: None,
            generated_at,
        }
    }
}

/// Generate insights stamped with the current time
pub fn generate_insights(request: &InsightRequest, settings: &InsightSettings) -> InsightReport {
    generate_insights_at(request, settings, Utc::now())
}

/// Generate insights with an explicit `generated_at`
pub fn generate_insights_at(
    request: &InsightRequest,
    settings: &InsightSettings,
    generated_at: DateTime<Utc>,
) -> InsightReport {
    let Some(benchmark) = benchmark_for(request.metal_type) else {
        return InsightReport::neutral(request.metal_type, generated_at);
    };

    let mass = total_material_mass(&request.materials);
    let average_recycled = average_recycled_content(&request.materials);
    let mci = request.circularity.and_then(|c| c.mci_score);

    let mut insights = Vec::new();
    if let Some(totals) = request.impact.as_ref().filter(|_| mass > 0.0) {
        insights.push(co2_insight(totals, mass, benchmark, settings));
        insights.push(energy_insight(totals, mass, benchmark, settings));
    }
    if let Some(mci) = mci {
        insights.push(circularity_insight(mci, settings));
    }
    if let Some(average) = average_recycled {
        insights.push(recycling_insight(average, benchmark, settings));
    }

    let overall_score = if insights.is_empty() {
        None
    } else {
        let total: u32 = insights.iter().map(|i| i.points).sum();
        Some((total as f64 / insights.len() as f64).round() as u32)
    };

    insights.sort_by_key(|i| i.severity.rank());

    let priority_actions = priority_actions(&insights, overall_score);
    let predictions = predictions(request.impact.as_ref(), mci, overall_score);

    InsightReport {
        metal_type: request.metal_type,
        insights,
        overall_score,
        grade: overall_score.map(OverallGrade::from_score),
        priority_actions,
        predictions,
        average_recycled_content_pct: average_recycled.map(|a| round_to(a, 2)),
        benchmark: Some(*benchmark),
        generated_at,
    }
}

fn co2_insight(
    totals: &ImpactTotals,
    mass: f64,
    benchmark: &Benchmark,
    settings: &InsightSettings,
) -> Insight {
    let per_ton = totals.co2_tons / mass;
    let target = benchmark.co2_tons_per_ton;
    let ratio = per_ton / target;
    let excess_tons = (per_ton - target) * mass;
    let metal = benchmark.metal_type;

    let (severity, impact, points, title, recommendation, potential_savings) = if ratio > 1.2 {
        (
            Level::High,
            Level::High,
            40,
            "CO₂ emissions well above benchmark",
            "Switch high-temperature stages to low-carbon power and recover process heat.",
            format!("{:.1} t CO₂ per assessment cycle", excess_tons),
        )
    } else if ratio > 1.0 {
        (
            Level::Medium,
            Level::Medium,
            65,
            "CO₂ emissions slightly above benchmark",
            "Target the most carbon-intensive process step for fuel switching.",
            format!("{:.1} t CO₂ per assessment cycle", excess_tons),
        )
    } else {
        (
            Level::Low,
            Level::Low,
            90,
            "CO₂ emissions within benchmark",
            "Keep monitoring emissions and document the practices behind this result.",
            format!("{:.1}% below benchmark", (1.0 - ratio) * 100.0),
        )
    };

    Insight {
        category: InsightCategory::Co2Emissions,
        title: title.to_string(),
        description: format!(
            "{} CO₂ intensity is {:.2} t/t against a benchmark of {:.1} t/t ({:.0}% of benchmark).",
            metal,
            per_ton,
            target,
            ratio * 100.0
        ),
        recommendation: recommendation.to_string(),
        severity,
        impact,
        confidence: settings.co2_confidence,
        points,
        potential_savings,
        metric_value: round_to(per_ton, 3),
        benchmark_value: target,
    }
}

fn energy_insight(
    totals: &ImpactTotals,
    mass: f64,
    benchmark: &Benchmark,
    settings: &InsightSettings,
) -> Insight {
    let per_ton = totals.energy_kwh / mass;
    let target = benchmark.energy_kwh_per_ton;
    let ratio = per_ton / target;

    let (severity, impact, points, title, recommendation, potential_savings) = if ratio > 1.15 {
        (
            Level::High,
            Level::Medium,
            50,
            "Energy intensity above benchmark",
            "Audit motors, furnaces and compressed air for efficiency upgrades.",
            format!("{:.0} kWh", (per_ton - target) * mass),
        )
    } else {
        (
            Level::Low,
            Level::Low,
            75,
            "Energy intensity near benchmark",
            "Maintain energy management and track consumption per ton monthly.",
            format!("{:.0} kWh through continuous optimisation", totals.energy_kwh * 0.05),
        )
    };

    Insight {
        category: InsightCategory::Energy,
        title: title.to_string(),
        description: format!(
            "Energy use is {:.0} kWh/t against a benchmark of {:.0} kWh/t ({:.0}% of benchmark).",
            per_ton,
            target,
            ratio * 100.0
        ),
        recommendation: recommendation.to_string(),
        severity,
        impact,
        confidence: settings.energy_confidence,
        points,
        potential_savings,
        metric_value: round_to(per_ton, 3),
        benchmark_value: target,
    }
}

fn circularity_insight(mci: f64, settings: &InsightSettings) -> Insight {
    const TARGET_MCI: f64 = 0.7;
    let gap_pct = (TARGET_MCI - mci).max(0.0) * 100.0;

    let (severity, impact, points, title, recommendation, potential_savings) = if mci < 0.5 {
        (
            Level::High,
            Level::High,
            45,
            "Low material circularity",
            "Increase scrap intake and set up closed-loop take-back with downstream users.",
            format!("{:.0} MCI points to reach {:.1}", gap_pct, TARGET_MCI),
        )
    } else if mci < TARGET_MCI {
        (
            Level::Medium,
            Level::Medium,
            70,
            "Moderate material circularity",
            "Extend product life and improve end-of-life sorting to lift the MCI.",
            format!("{:.0} MCI points to reach {:.1}", gap_pct, TARGET_MCI),
        )
    } else {
        (
            Level::Low,
            Level::Low,
            95,
            "Strong material circularity",
            "Share circular practices across sites and suppliers.",
            format!("MCI {:.2} already meets the {:.1} target", mci, TARGET_MCI),
        )
    };

    Insight {
        category: InsightCategory::Circularity,
        title: title.to_string(),
        description: format!("Material Circularity Indicator is {:.2}.", mci),
        recommendation: recommendation.to_string(),
        severity,
        impact,
        confidence: settings.circularity_confidence,
        points,
        potential_savings,
        metric_value: mci,
        benchmark_value: TARGET_MCI,
    }
}

fn recycling_insight(average: f64, benchmark: &Benchmark, settings: &InsightSettings) -> Insight {
    let target = benchmark.target_recycling_pct;

    let (severity, impact, points, title, recommendation, potential_savings) = if average < target {
        (
            Level::Medium,
            Level::Medium,
            55,
            "Recycled content below target",
            "Secure additional post-consumer scrap supply and qualify it for production.",
            format!("{:.1} percentage points to target", target - average),
        )
    } else {
        (
            Level::Low,
            Level::Low,
            92,
            "Recycled content meets target",
            "Keep scrap sourcing contracts in place and monitor scrap quality.",
            format!("{:.1} percentage points above target", average - target),
        )
    };

    Insight {
        category: InsightCategory::Recycling,
        title: title.to_string(),
        description: format!(
            "Average recycled content is {:.1}% against a {} target of {:.0}%.",
            average, benchmark.metal_type, target
        ),
        recommendation: recommendation.to_string(),
        severity,
        impact,
        confidence: settings.recycling_confidence,
        points,
        potential_savings,
        metric_value: round_to(average, 2),
        benchmark_value: target,
    }
}

fn action_title(category: InsightCategory) -> &'static str {
    match category {
        InsightCategory::Co2Emissions => "Reduce process CO₂ emissions",
        InsightCategory::Energy => "Cut energy intensity",
        InsightCategory::Circularity => "Raise material circularity",
        InsightCategory::Recycling => "Increase recycled content",
    }
}

fn priority_actions(insights: &[Insight], overall_score: Option<u32>) -> Vec<PriorityAction> {
    let mut actions: Vec<PriorityAction> = insights
        .iter()
        .filter(|i| i.severity == Level::High)
        .map(|i| PriorityAction {
            title: action_title(i.category).to_string(),
            description: i.recommendation.clone(),
            category: Some(i.category),
            timeline: ACTION_TIMELINE.to_string(),
            complexity: if i.impact == Level::High {
                Level::Medium
            } else {
                Level::Low
            },
            expected_impact: i.impact,
        })
        .collect();

    if matches!(overall_score, Some(score) if score < AUDIT_SCORE_THRESHOLD) {
        actions.push(PriorityAction {
            title: "Comprehensive process audit".to_string(),
            description: "Run a full audit of energy, emissions and material flows to find the largest improvement levers.".to_string(),
            category: None,
            timeline: AUDIT_TIMELINE.to_string(),
            complexity: Level::Medium,
            expected_impact: Level::High,
        });
    }

    actions
}

fn predictions(
    impact: Option<&ImpactTotals>,
    mci: Option<f64>,
    overall_score: Option<u32>,
) -> Predictions {
    let strong = matches!(overall_score, Some(score) if score > STRONG_SCORE_THRESHOLD);
    let (co2_cut, energy_share, circularity_step) = if strong {
        (0.05, 0.10, 0.05)
    } else {
        (0.02, 0.20, 0.15)
    };

    Predictions {
        next_quarter_co2_tons: impact.map(|t| round_to(t.co2_tons * (1.0 - co2_cut), 2)),
        energy_savings_potential_kwh: impact.map(|t| round_to(t.energy_kwh * energy_share, 2)),
        circularity_improvement_potential: mci.map(|m| round_to((m + circularity_step).min(1.0), 3)),
        cost_savings_estimate: impact.map(|t| {
            round_to(
                t.energy_kwh * ELECTRICITY_PRICE_PER_KWH * ENERGY_SAVINGS_SHARE
                    + t.co2_tons * CARBON_PRICE_PER_TON,
                2,
            )
        }),
    }
}
