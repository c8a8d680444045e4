//! GenerateRecommendationsHandler - Query handler for reduction advice.

use tracing::debug;

use crate::domain::footprint::FootprintResult;
use crate::domain::recommendation::{Recommendation, RecommendationEngine};
use crate::domain::submission::SubmissionError;
use crate::domain::survey::SurveyInput;

/// Query for recommendations on an already-calculated footprint.
#[derive(Debug, Clone)]
pub struct GenerateRecommendationsQuery {
    pub result: FootprintResult,
    pub survey: SurveyInput,
}

/// Handler for recommendation generation. Stateless.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateRecommendationsHandler;

impl GenerateRecommendationsHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(
        &self,
        query: GenerateRecommendationsQuery,
    ) -> Result<Vec<Recommendation>, SubmissionError> {
        query.survey.validate()?;

        let recommendations = RecommendationEngine::generate(&query.result, &query.survey);
        debug!(count = recommendations.len(), "Recommendations generated");
        Ok(recommendations)
    }
}
