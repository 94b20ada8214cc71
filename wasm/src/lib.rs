//! WebAssembly module for the Mineral LCA Platform
//!
//! Provides client-side computation for:
//! - Benchmark normalization of impact totals
//! - Circularity composite and grade
//! - Scenario feasibility
//! - Offline insight previews and input checks

use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::scoring::*;
pub use shared::types::*;
pub use shared::validation::*;

fn to_js_error(message: String) -> JsValue {
    let error = JsValue::from_str(&message);
    web_sys::console::warn_1(&error);
    error
}

/// Neutral scoring outcomes serialize as JSON `null`; only out-of-range
/// input is reported as an error.
fn scored_json<T: serde::Serialize>(result: Result<T, ScoringError>) -> Result<String, String> {
    match result {
        Ok(value) => serde_json::to_string(&value).map_err(|e| e.to_string()),
        Err(err) if err.is_neutral() => Ok("null".to_string()),
        Err(err) => Err(err.to_string()),
    }
}

fn normalize_impact_impl(totals_json: &str, mass_tons: f64, metal: &str) -> Result<String, String> {
    let totals: ImpactTotals =
        serde_json::from_str(totals_json).map_err(|e| format!("Invalid impact JSON: {}", e))?;
    scored_json(normalize_impact(&totals, mass_tons, MetalType::parse(metal)))
}

fn composite_circularity_impl(inputs_json: &str) -> Result<String, String> {
    let inputs: CircularityInputs = serde_json::from_str(inputs_json)
        .map_err(|e| format!("Invalid circularity JSON: {}", e))?;
    scored_json(composite_circularity(&inputs))
}

fn evaluate_scenarios_impl(scenarios_json: &str, impact_json: Option<String>) -> Result<String, String> {
    let scenarios: Vec<ScenarioInputs> = serde_json::from_str(scenarios_json)
        .map_err(|e| format!("Invalid scenarios JSON: {}", e))?;
    let impact: Option<ImpactTotals> = impact_json
        .as_deref()
        .map(serde_json::from_str)
        .transpose()
        .map_err(|e| format!("Invalid impact JSON: {}", e))?;
    let evaluations = evaluate_scenarios(&scenarios, impact.as_ref());
    serde_json::to_string(&evaluations).map_err(|e| e.to_string())
}

fn generate_insights_impl(request_json: &str) -> Result<String, String> {
    let request: InsightRequest = serde_json::from_str(request_json)
        .map_err(|e| format!("Invalid insight request JSON: {}", e))?;
    let report = generate_insights(&request, &InsightSettings::default());
    serde_json::to_string(&report).map_err(|e| e.to_string())
}

/// Normalize impact totals against the metal's benchmark; returns JSON,
/// `null` for zero mass or an unregistered metal
#[wasm_bindgen]
pub fn normalize_impact_json(totals_json: &str, mass_tons: f64, metal: &str) -> Result<String, JsValue> {
    normalize_impact_impl(totals_json, mass_tons, metal).map_err(to_js_error)
}

/// Compute the circularity composite; returns JSON, `null` without metrics
#[wasm_bindgen]
pub fn composite_circularity_json(inputs_json: &str) -> Result<String, JsValue> {
    composite_circularity_impl(inputs_json).map_err(to_js_error)
}

/// Evaluate a list of scenarios, optionally against impact totals; returns JSON
#[wasm_bindgen]
pub fn evaluate_scenarios_json(scenarios_json: &str, impact_json: Option<String>) -> Result<String, JsValue> {
    evaluate_scenarios_impl(scenarios_json, impact_json).map_err(to_js_error)
}

/// Preview the insight report with default confidence levels; returns JSON
#[wasm_bindgen]
pub fn generate_insights_json(request_json: &str) -> Result<String, JsValue> {
    generate_insights_impl(request_json).map_err(to_js_error)
}

/// Scenario feasibility in [0, 1]
#[wasm_bindgen]
pub fn calculate_feasibility(co2_reduction_pct: f64, cost_difference_pct: Option<f64>) -> f64 {
    feasibility_score(co2_reduction_pct, cost_difference_pct)
}

/// Circularity grade for a 0-1 composite score
#[wasm_bindgen]
pub fn classify_circularity(score: f64) -> String {
    CircularityGrade::from_score(round_to(score, 3)).to_string()
}

/// Sustainability rating for the mean of the CO2 and energy ratios
#[wasm_bindgen]
pub fn rate_sustainability(average_ratio: f64) -> String {
    SustainabilityRating::from_average_ratio(average_ratio).to_string()
}

/// Ton-kilometres for a transport leg
#[wasm_bindgen]
pub fn calculate_ton_km(distance_km: f64, cargo_tons: f64) -> f64 {
    ton_km(distance_km, cargo_tons)
}

/// Processing energy after equipment efficiency
#[wasm_bindgen]
pub fn calculate_adjusted_energy(raw_energy_kwh: f64, equipment_efficiency_pct: Option<f64>) -> f64 {
    efficiency_adjusted_energy(raw_energy_kwh, equipment_efficiency_pct)
}

/// Validate a percentage field (0-100)
#[wasm_bindgen]
pub fn is_valid_percentage(value: f64) -> bool {
    validate_percentage("value", value).is_ok()
}
