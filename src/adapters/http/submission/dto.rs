//! HTTP DTOs for submission endpoints.

use serde::{Deserialize, Serialize};

use crate::adapters::http::footprint::SurveyPayload;
use crate::domain::footprint::{FootprintInsights, FootprintResult};
use crate::domain::recommendation::Recommendation;
use crate::domain::submission::SubmissionRecord;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Query parameters for listing submissions.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListSubmissionsParams {
    pub limit: Option<u32>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// A stored submission.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResponse {
    pub id: String,
    pub created_at: String,
    pub footprint_data: SurveyPayload,
    #[serde(flatten)]
    pub result: FootprintResult,
    pub recommendations: Vec<Recommendation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insights: Option<FootprintInsights>,
}

impl SubmissionResponse {
    pub fn with_insights(mut self, insights: FootprintInsights) -> Self {
        self.insights = Some(insights);
        self
    }
}

impl From<&SubmissionRecord> for SubmissionResponse {
    fn from(record: &SubmissionRecord) -> Self {
        Self {
            id: record.id().to_string(),
            created_at: record.created_at().to_rfc3339(),
            footprint_data: SurveyPayload::from(record.survey()),
            result: *record.result(),
            recommendations: record.recommendations().to_vec(),
            insights: None,
        }
    }
}

/// Recent submissions, newest first.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionListResponse {
    pub items: Vec<SubmissionResponse>,
    pub count: usize,
}

impl From<&[SubmissionRecord]> for SubmissionListResponse {
    fn from(records: &[SubmissionRecord]) -> Self {
        let items: Vec<SubmissionResponse> = records.iter().map(SubmissionResponse::from).collect();
        Self {
            count: items.len(),
            items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::survey::SurveyInput;

    #[test]
    fn submission_response_is_flat_camel_case() {
        let record = SubmissionRecord::new(SurveyInput::default(), FootprintResult::new(1.7, 0.0, 0.0, 1.7));
        let json = serde_json::to_value(SubmissionResponse::from(&record)).unwrap();
        assert_eq!(json["id"], record.id().to_string());
        assert_eq!(json["foodEmissions"], 1.7);
        assert_eq!(json["footprintData"]["location"], "global");
        assert!(json.get("insights").is_none());
    }

    #[test]
    fn list_response_counts_items() {
        let records = vec![
            SubmissionRecord::new(SurveyInput::default(), FootprintResult::default()),
            SubmissionRecord::new(SurveyInput::default(), FootprintResult::default()),
        ];
        let response = SubmissionListResponse::from(records.as_slice());
        assert_eq!(response.count, 2);
    }
}
