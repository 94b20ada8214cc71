//! HTTP handlers for the benchmark registry

use axum::{extract::Path, Json};

use crate::error::{AppError, AppResult};
use shared::{all_benchmarks, benchmark_for, Benchmark, MetalType};

/// List every benchmark row
pub async fn list_benchmarks() -> Json<Vec<Benchmark>> {
    Json(all_benchmarks().to_vec())
}

/// Benchmark for one metal
pub async fn get_benchmark(Path(metal): Path<String>) -> AppResult<Json<Benchmark>> {
    benchmark_for(MetalType::parse(&metal))
        .copied()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Benchmark for {}", metal)))
}
