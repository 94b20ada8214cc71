//! Insight service: gathers an assessment's records and runs the generator

use sqlx::PgPool;
use uuid::Uuid;

use super::assessment::AssessmentService;
use super::circularity::CircularityService;
use super::impact::ImpactService;
use super::material::MaterialService;
use crate::error::AppResult;
use shared::{generate_insights, InsightReport, InsightRequest, InsightSettings};

/// Insight service
#[derive(Clone)]
pub struct InsightService {
    db: PgPool,
    settings: InsightSettings,
}

impl InsightService {
    pub fn new(db: PgPool, settings: InsightSettings) -> Self {
        Self { db, settings }
    }

    /// Generate the insight report for an assessment
    pub async fn get_insights(&self, assessment_id: Uuid) -> AppResult<InsightReport> {
        let assessment = AssessmentService::new(self.db.clone())
            .get_assessment(assessment_id)
            .await?;
        let impact = ImpactService::new(self.db.clone())
            .get_impact(assessment_id)
            .await?;
        let circularity = CircularityService::new(self.db.clone())
            .get_metrics(assessment_id)
            .await?;
        let materials = MaterialService::new(self.db.clone())
            .get_materials(assessment_id)
            .await?;

        let request = InsightRequest::from_records(
            &assessment,
            impact.as_ref(),
            circularity.as_ref(),
            &materials,
        );
        let report = generate_insights(&request, &self.settings);

        tracing::debug!(
            assessment_id = %assessment_id,
            insights = report.insights.len(),
            overall_score = ?report.overall_score,
            "Insights generated"
        );

        Ok(report)
    }
}
