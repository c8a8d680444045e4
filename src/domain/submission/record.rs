//! Submission record - a survey, its footprint and optional recommendations.

use serde::{Deserialize, Serialize};

use crate::domain::footprint::FootprintResult;
use crate::domain::foundation::{SubmissionId, Timestamp};
use crate::domain::recommendation::Recommendation;
use crate::domain::survey::SurveyInput;

/// A completed calculation handed to storage.
///
/// Built once and never changed after it is saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    id: SubmissionId,
    survey: SurveyInput,
    result: FootprintResult,
    #[serde(default)]
    recommendations: Vec<Recommendation>,
    created_at: Timestamp,
}

impl SubmissionRecord {
    /// Creates a record with a fresh id and the current time.
    pub fn new(survey: SurveyInput, result: FootprintResult) -> Self {
        Self {
            id: SubmissionId::new(),
            survey,
            result,
            recommendations: Vec::new(),
            created_at: Timestamp::now(),
        }
    }

    /// Reconstitutes a record from storage.
    pub fn reconstitute(
        id: SubmissionId,
        survey: SurveyInput,
        result: FootprintResult,
        recommendations: Vec<Recommendation>,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            survey,
            result,
            recommendations,
            created_at,
        }
    }

    /// Attaches recommendations before the record is saved.
    pub fn with_recommendations(mut self, recommendations: Vec<Recommendation>) -> Self {
        self.recommendations = recommendations;
        self
    }

    pub fn id(&self) -> SubmissionId {
        self.id
    }

    pub fn survey(&self) -> &SurveyInput {
        &self.survey
    }

    pub fn result(&self) -> &FootprintResult {
        &self.result
    }

    pub fn recommendations(&self) -> &[Recommendation] {
        &self.recommendations
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recommendation::RecommendationEngine;

    #[test]
    fn new_record_has_no_recommendations() {
        let record = SubmissionRecord::new(SurveyInput::default(), FootprintResult::default());
        assert!(record.recommendations().is_empty());
        assert!(record.survey().location.is_global());
    }

    #[test]
    fn recommendations_can_be_attached() {
        let result = FootprintResult::new(1.7, 0.0, 0.0, 1.7);
        let survey = SurveyInput::default();
        let recs = RecommendationEngine::generate(&result, &survey);
        let record = SubmissionRecord::new(survey, result).with_recommendations(recs.clone());
        assert_eq!(record.recommendations(), recs.as_slice());
    }

    #[test]
    fn distinct_records_get_distinct_ids() {
        let a = SubmissionRecord::new(SurveyInput::default(), FootprintResult::default());
        let b = SubmissionRecord::new(SurveyInput::default(), FootprintResult::default());
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn serde_round_trip_preserves_record() {
        let record = SubmissionRecord::new(SurveyInput::default(), FootprintResult::new(1.7, 0.0, 0.0, 1.7));
        let json = serde_json::to_string(&record).unwrap();
        let back: SubmissionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
