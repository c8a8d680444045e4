//! CalculateFootprintHandler - Command handler for footprint calculations.

use std::sync::Arc;

use tracing::{debug, info};

use crate::application::FactorSnapshot;
use crate::domain::footprint::{FootprintCalculator, FootprintInsights, FootprintResult};
use crate::domain::foundation::SubmissionId;
use crate::domain::submission::{SubmissionError, SubmissionRecord};
use crate::domain::survey::SurveyInput;
use crate::ports::SubmissionRepository;

/// Command to calculate a footprint.
#[derive(Debug, Clone)]
pub struct CalculateFootprintCommand {
    pub survey: SurveyInput,
}

/// Result of a successful calculation.
#[derive(Debug, Clone)]
pub struct CalculateFootprintResult {
    pub submission_id: SubmissionId,
    pub result: FootprintResult,
    pub insights: FootprintInsights,
}

/// Handler for footprint calculations.
///
/// The calculation is recorded without recommendations; those are requested
/// separately.
pub struct CalculateFootprintHandler {
    factors: Arc<FactorSnapshot>,
    repository: Arc<dyn SubmissionRepository>,
}

impl CalculateFootprintHandler {
    pub fn new(factors: Arc<FactorSnapshot>, repository: Arc<dyn SubmissionRepository>) -> Self {
        Self { factors, repository }
    }

    pub async fn handle(
        &self,
        cmd: CalculateFootprintCommand,
    ) -> Result<CalculateFootprintResult, SubmissionError> {
        cmd.survey.validate()?;

        let registry = self.factors.current();
        let result = FootprintCalculator::calculate(registry.as_ref(), &cmd.survey);
        let insights = FootprintInsights::compute(&result, &cmd.survey.location);
        debug!(
            location = %cmd.survey.location,
            total = result.total_emissions,
            home = result.home_emissions,
            transport = result.transport_emissions,
            food = result.food_emissions,
            "Footprint calculated"
        );

        let record = SubmissionRecord::new(cmd.survey, result);
        self.repository.save(&record).await?;
        info!(submission_id = %record.id(), "Submission recorded");

        Ok(CalculateFootprintResult {
            submission_id: record.id(),
            result,
            insights,
        })
    }
}
