//! AssessFootprintHandler - Calculate, recommend, and record in one step.

use std::sync::Arc;

use tracing::info;

use crate::application::FactorSnapshot;
use crate::domain::footprint::{FootprintCalculator, FootprintInsights};
use crate::domain::recommendation::RecommendationEngine;
use crate::domain::submission::{SubmissionError, SubmissionRecord};
use crate::domain::survey::SurveyInput;
use crate::ports::SubmissionRepository;

/// Command to run a full assessment.
#[derive(Debug, Clone)]
pub struct AssessFootprintCommand {
    pub survey: SurveyInput,
}

/// The saved record plus presentation insights.
#[derive(Debug, Clone)]
pub struct AssessFootprintResult {
    pub record: SubmissionRecord,
    pub insights: FootprintInsights,
}

/// Handler for full assessments.
pub struct AssessFootprintHandler {
    factors: Arc<FactorSnapshot>,
    repository: Arc<dyn SubmissionRepository>,
}

impl AssessFootprintHandler {
    pub fn new(factors: Arc<FactorSnapshot>, repository: Arc<dyn SubmissionRepository>) -> Self {
        Self { factors, repository }
    }

    pub async fn handle(
        &self,
        cmd: AssessFootprintCommand,
    ) -> Result<AssessFootprintResult, SubmissionError> {
        cmd.survey.validate()?;

        let registry = self.factors.current();
        let result = FootprintCalculator::calculate(registry.as_ref(), &cmd.survey);
        let insights = FootprintInsights::compute(&result, &cmd.survey.location);
        let recommendations = RecommendationEngine::generate(&result, &cmd.survey);

        let record = SubmissionRecord::new(cmd.survey, result).with_recommendations(recommendations);
        self.repository.save(&record).await?;
        info!(
            submission_id = %record.id(),
            total = result.total_emissions,
            recommendations = record.recommendations().len(),
            "Assessment recorded"
        );

        Ok(AssessFootprintResult { record, insights })
    }
}
