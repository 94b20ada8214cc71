//! Assessment management service

use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, AppResult};
use shared::{validate_name, Assessment, AssessmentStatus, MetalType};

/// Assessment service for the assessment header records
#[derive(Clone)]
pub struct AssessmentService {
    db: PgPool,
}

/// Database row for an assessment
#[derive(Debug, sqlx::FromRow)]
struct AssessmentRow {
    id: Uuid,
    project_name: String,
    metal_type: String,
    status: String,
    description: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<AssessmentRow> for Assessment {
    fn from(row: AssessmentRow) -> Self {
        Assessment {
            id: row.id,
            project_name: row.project_name,
            metal_type: MetalType::parse(&row.metal_type),
            status: AssessmentStatus::from_str(&row.status).unwrap_or(AssessmentStatus::Draft),
            description: row.description,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Input for creating an assessment
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAssessmentInput {
    #[validate(length(min = 1, max = 200, message = "Project name must be 1-200 characters"))]
    pub project_name: String,
    pub metal_type: MetalType,
    pub description: Option<String>,
}

/// Input for updating an assessment
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAssessmentInput {
    #[validate(length(min = 1, max = 200, message = "Project name must be 1-200 characters"))]
    pub project_name: Option<String>,
    pub description: Option<String>,
}

/// Input for a status change
#[derive(Debug, Deserialize)]
pub struct UpdateStatusInput {
    pub status: AssessmentStatus,
}

const ASSESSMENT_COLUMNS: &str =
    "id, project_name, metal_type, status, description, created_at, updated_at";

impl AssessmentService {
    /// Create a new AssessmentService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Create an assessment in draft status
    pub async fn create_assessment(&self, input: CreateAssessmentInput) -> AppResult<Assessment> {
        input.validate()?;
        validate_name(&input.project_name)
            .map_err(|msg| AppError::validation("project_name", msg))?;

        if input.metal_type == MetalType::Unknown {
            return Err(AppError::validation(
                "metal_type",
                "Metal type must be aluminium, copper or steel",
            ));
        }

        let row = sqlx::query_as::<_, AssessmentRow>(&format!(
            r#"
            INSERT INTO assessments (project_name, metal_type, status, description)
            VALUES ($1, $2, $3, $4)
            RETURNING {ASSESSMENT_COLUMNS}
            "#
        ))
        .bind(input.project_name.trim())
        .bind(input.metal_type.as_str())
        .bind(AssessmentStatus::Draft.as_str())
        .bind(&input.description)
        .fetch_one(&self.db)
        .await?;

        tracing::info!(assessment_id = %row.id, metal = %row.metal_type, "Assessment created");

        Ok(row.into())
    }

    /// Get assessment by ID
    pub async fn get_assessment(&self, assessment_id: Uuid) -> AppResult<Assessment> {
        let row = sqlx::query_as::<_, AssessmentRow>(&format!(
            "SELECT {ASSESSMENT_COLUMNS} FROM assessments WHERE id = $1"
        ))
        .bind(assessment_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Assessment".to_string()))?;

        Ok(row.into())
    }

    /// List all assessments, newest first
    pub async fn list_assessments(&self) -> AppResult<Vec<Assessment>> {
        let rows = sqlx::query_as::<_, AssessmentRow>(&format!(
            "SELECT {ASSESSMENT_COLUMNS} FROM assessments ORDER BY created_at DESC"
        ))
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    /// Update name and description
    pub async fn update_assessment(
        &self,
        assessment_id: Uuid,
        input: UpdateAssessmentInput,
    ) -> AppResult<Assessment> {
        input.validate()?;
        if let Some(name) = &input.project_name {
            validate_name(name).map_err(|msg| AppError::validation("project_name", msg))?;
        }

        let row = sqlx::query_as::<_, AssessmentRow>(&format!(
            r#"
            UPDATE assessments
            SET project_name = COALESCE($1, project_name),
                description = COALESCE($2, description),
                updated_at = NOW()
            WHERE id = $3
            RETURNING {ASSESSMENT_COLUMNS}
            "#
        ))
        .bind(input.project_name.as_deref().map(str::trim))
        .bind(&input.description)
        .bind(assessment_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Assessment".to_string()))?;

        Ok(row.into())
    }

    /// Move an assessment forward in its workflow
    pub async fn update_status(
        &self,
        assessment_id: Uuid,
        input: UpdateStatusInput,
    ) -> AppResult<Assessment> {
        let current = self.get_assessment(assessment_id).await?;

        if !current.status.can_transition_to(input.status) {
            return Err(AppError::InvalidStateTransition(format!(
                "Cannot move assessment from {} to {}",
                current.status.as_str(),
                input.status.as_str()
            )));
        }

        // Guard on the status we read so a concurrent change is not overwritten
        let row = sqlx::query_as::<_, AssessmentRow>(&format!(
            r#"
            UPDATE assessments
            SET status = $1, updated_at = NOW()
            WHERE id = $2 AND status = $3
            RETURNING {ASSESSMENT_COLUMNS}
            "#
        ))
        .bind(input.status.as_str())
        .bind(assessment_id)
        .bind(current.status.as_str())
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| {
            AppError::Conflict("Assessment status changed concurrently".to_string())
        })?;

        tracing::info!(
            assessment_id = %assessment_id,
            from = current.status.as_str(),
            to = input.status.as_str(),
            "Assessment status updated"
        );

        Ok(row.into())
    }

    /// Delete an assessment and all of its child rows
    pub async fn delete_assessment(&self, assessment_id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM assessments WHERE id = $1")
            .bind(assessment_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Assessment".to_string()));
        }

        tracing::info!(assessment_id = %assessment_id, "Assessment deleted");
        Ok(())
    }
}

/// Fail with NotFound unless the assessment exists
pub(crate) async fn ensure_assessment_exists(db: &PgPool, assessment_id: Uuid) -> AppResult<()> {
    sqlx::query_scalar::<_, Uuid>("SELECT id FROM assessments WHERE id = $1")
        .bind(assessment_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::NotFound("Assessment".to_string()))?;

    Ok(())
}
