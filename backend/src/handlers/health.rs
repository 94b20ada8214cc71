//! Service health handler

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;
use shared::all_benchmarks;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub environment: String,
    pub database: &'static str,
    pub benchmarks_loaded: usize,
}

impl HealthResponse {
    fn new(database_connected: bool, environment: String) -> Self {
        HealthResponse {
            status: if database_connected { "healthy" } else { "degraded" },
            version: env!("CARGO_PKG_VERSION"),
            environment,
            database: if database_connected { "connected" } else { "disconnected" },
            benchmarks_loaded: all_benchmarks().len(),
        }
    }
}

/// Liveness, database reachability and benchmark registry size
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let connected = match sqlx::query_scalar::<_, i32>("SELECT 1").fetch_one(&state.db).await {
        Ok(_) => true,
        Err(err) => {
            tracing::warn!(error = %err, "Database probe failed");
            false
        }
    };

    Json(HealthResponse::new(connected, state.config.environment.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reports_registered_benchmarks() {
        let health = HealthResponse::new(true, "development".to_string());
        assert_eq!(health.status, "healthy");
        assert_eq!(health.database, "connected");
        assert_eq!(health.benchmarks_loaded, 3);
    }

    #[test]
    fn test_unreachable_database_is_degraded() {
        let health = HealthResponse::new(false, "production".to_string());
        assert_eq!(health.status, "degraded");
        assert_eq!(health.database, "disconnected");
        assert_eq!(health.environment, "production");
    }
}
