//! Route definitions for the Mineral LCA Platform

use axum::{
    routing::{get, put},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/assessments", assessment_routes())
        .nest("/scenarios", scenario_routes())
        .nest("/benchmarks", benchmark_routes())
}

/// Assessment routes, including the per-assessment data and scoring views
fn assessment_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_assessments).post(handlers::create_assessment),
        )
        .route(
            "/:assessment_id",
            get(handlers::get_assessment)
                .put(handlers::update_assessment)
                .delete(handlers::delete_assessment),
        )
        .route("/:assessment_id/status", put(handlers::update_assessment_status))
        // Inventory data
        .route(
            "/:assessment_id/materials",
            get(handlers::list_materials).post(handlers::add_material),
        )
        .route(
            "/:assessment_id/processing",
            get(handlers::list_processing).post(handlers::add_processing),
        )
        .route(
            "/:assessment_id/transportation",
            get(handlers::list_transportation).post(handlers::add_transportation),
        )
        // Impact and benchmarking
        .route(
            "/:assessment_id/impact",
            get(handlers::get_impact).put(handlers::upsert_impact),
        )
        .route("/:assessment_id/impact/benchmark", get(handlers::get_impact_benchmark))
        // Circularity
        .route(
            "/:assessment_id/circularity",
            get(handlers::get_circularity).put(handlers::upsert_circularity),
        )
        // Scenarios
        .route(
            "/:assessment_id/scenarios",
            get(handlers::list_scenarios).post(handlers::create_scenario),
        )
        // Insights
        .route("/:assessment_id/insights", get(handlers::get_insights))
}

fn scenario_routes() -> Router<AppState> {
    Router::new().route("/:scenario_id", get(handlers::get_scenario))
}

fn benchmark_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_benchmarks))
        .route("/:metal", get(handlers::get_benchmark))
}
