//! Scenario service
//!
//! Feasibility, complexity and baseline comparison are derived on every
//! read from the sibling scenarios and the latest impact row.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use super::assessment::ensure_assessment_exists;
use super::impact::ImpactService;
use crate::error::{AppError, AppResult};
use shared::{
    evaluate_scenarios, validate_co2_reduction, validate_cost_difference, validate_name,
    ImpactTotals, Scenario, ScenarioEvaluation, ScenarioInputs, ScenarioType,
};

/// Scenario service for improvement scenarios
#[derive(Clone)]
pub struct ScenarioService {
    db: PgPool,
}

/// Database row for a scenario
#[derive(Debug, sqlx::FromRow)]
struct ScenarioRow {
    id: Uuid,
    assessment_id: Uuid,
    name: String,
    scenario_type: String,
    description: Option<String>,
    co2_reduction_pct: Option<f64>,
    cost_difference_pct: Option<f64>,
    created_at: DateTime<Utc>,
}

impl TryFrom<ScenarioRow> for Scenario {
    type Error = AppError;

    fn try_from(row: ScenarioRow) -> Result<Self, Self::Error> {
        let scenario_type = ScenarioType::from_str(&row.scenario_type).ok_or_else(|| {
            AppError::Internal(format!("Unknown scenario type: {}", row.scenario_type))
        })?;

        Ok(Scenario {
            id: row.id,
            assessment_id: row.assessment_id,
            name: row.name,
            scenario_type,
            description: row.description,
            co2_reduction_pct: row.co2_reduction_pct,
            cost_difference_pct: row.cost_difference_pct,
            created_at: row.created_at,
        })
    }
}

/// Input for creating a scenario
#[derive(Debug, Deserialize, Validate)]
pub struct CreateScenarioInput {
    #[validate(length(min = 1, max = 200, message = "Scenario name must be 1-200 characters"))]
    pub name: String,
    pub scenario_type: ScenarioType,
    pub description: Option<String>,
    pub co2_reduction_pct: Option<f64>,
    pub cost_difference_pct: Option<f64>,
}

/// Scenario with its derived fields
#[derive(Debug, Serialize)]
pub struct EvaluatedScenario {
    #[serde(flatten)]
    pub scenario: Scenario,
    #[serde(flatten)]
    pub evaluation: ScenarioEvaluation,
}

const SCENARIO_COLUMNS: &str = "id, assessment_id, name, scenario_type, description, \
    co2_reduction_pct, cost_difference_pct, created_at";

impl ScenarioService {
    /// Create a new ScenarioService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Create a scenario and return it evaluated against its siblings
    pub async fn create_scenario(
        &self,
        assessment_id: Uuid,
        input: CreateScenarioInput,
    ) -> AppResult<EvaluatedScenario> {
        input.validate()?;
        validate_name(&input.name).map_err(|msg| AppError::validation("name", msg))?;
        if let Some(reduction) = input.co2_reduction_pct {
            validate_co2_reduction(reduction)?;
        }
        if let Some(cost) = input.cost_difference_pct {
            validate_cost_difference(cost)?;
        }

        ensure_assessment_exists(&self.db, assessment_id).await?;

        let row = sqlx::query_as::<_, ScenarioRow>(&format!(
            r#"
            INSERT INTO scenarios (
                assessment_id, name, scenario_type, description,
                co2_reduction_pct, cost_difference_pct
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {SCENARIO_COLUMNS}
            "#
        ))
        .bind(assessment_id)
        .bind(input.name.trim())
        .bind(input.scenario_type.as_str())
        .bind(&input.description)
        .bind(input.co2_reduction_pct)
        .bind(input.cost_difference_pct)
        .fetch_one(&self.db)
        .await?;

        tracing::info!(
            assessment_id = %assessment_id,
            scenario_type = input.scenario_type.as_str(),
            "Scenario created"
        );

        let created = Scenario::try_from(row)?;
        self.evaluate(created).await
    }

    /// All scenarios of an assessment, evaluated
    pub async fn list_scenarios(&self, assessment_id: Uuid) -> AppResult<Vec<EvaluatedScenario>> {
        ensure_assessment_exists(&self.db, assessment_id).await?;

        let scenarios = self.get_scenarios(assessment_id).await?;
        let impact = self.latest_impact(assessment_id).await?;

        Ok(evaluate_all(scenarios, impact.as_ref()))
    }

    /// One scenario, evaluated against its siblings
    pub async fn get_scenario(&self, scenario_id: Uuid) -> AppResult<EvaluatedScenario> {
        let row = sqlx::query_as::<_, ScenarioRow>(&format!(
            "SELECT {SCENARIO_COLUMNS} FROM scenarios WHERE id = $1"
        ))
        .bind(scenario_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Scenario".to_string()))?;

        self.evaluate(Scenario::try_from(row)?).await
    }

    async fn evaluate(&self, scenario: Scenario) -> AppResult<EvaluatedScenario> {
        let siblings = self.get_scenarios(scenario.assessment_id).await?;
        let impact = self.latest_impact(scenario.assessment_id).await?;

        evaluate_all(siblings, impact.as_ref())
            .into_iter()
            .find(|evaluated| evaluated.scenario.id == scenario.id)
            .ok_or_else(|| AppError::NotFound("Scenario".to_string()))
    }

    async fn get_scenarios(&self, assessment_id: Uuid) -> AppResult<Vec<Scenario>> {
        let rows = sqlx::query_as::<_, ScenarioRow>(&format!(
            "SELECT {SCENARIO_COLUMNS} FROM scenarios WHERE assessment_id = $1 ORDER BY created_at ASC"
        ))
        .bind(assessment_id)
        .fetch_all(&self.db)
        .await?;

        rows.into_iter().map(Scenario::try_from).collect()
    }

    async fn latest_impact(&self, assessment_id: Uuid) -> AppResult<Option<ImpactTotals>> {
        let impact = ImpactService::new(self.db.clone())
            .get_impact(assessment_id)
            .await?;
        Ok(impact.as_ref().map(ImpactTotals::from))
    }
}

/// Evaluate an assessment's scenarios together, oldest first, so the
/// first baseline is the shared reference
fn evaluate_all(scenarios: Vec<Scenario>, impact: Option<&ImpactTotals>) -> Vec<EvaluatedScenario> {
    let inputs: Vec<ScenarioInputs> = scenarios.iter().map(ScenarioInputs::from).collect();
    scenarios
        .into_iter()
        .zip(evaluate_scenarios(&inputs, impact))
        .map(|(scenario, evaluation)| EvaluatedScenario {
            scenario,
            evaluation,
        })
        .collect()
}
