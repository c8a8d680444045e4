//! HTTP handlers for footprint endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{
    handle_json_rejection, handle_submission_error, handle_validation_error,
};
use crate::adapters::http::submission::SubmissionResponse;
use crate::application::handlers::footprint::{
    AssessFootprintCommand, AssessFootprintHandler, CalculateFootprintCommand,
    CalculateFootprintHandler, GenerateRecommendationsHandler, GenerateRecommendationsQuery,
};
use crate::domain::survey::SurveyInput;

use super::dto::{
    CalculateFootprintResponse, RecommendationsRequest, RecommendationsResponse, SurveyPayload,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct FootprintHandlers {
    calculate_handler: Arc<CalculateFootprintHandler>,
    recommendations_handler: Arc<GenerateRecommendationsHandler>,
    assess_handler: Arc<AssessFootprintHandler>,
}

impl FootprintHandlers {
    pub fn new(
        calculate_handler: Arc<CalculateFootprintHandler>,
        recommendations_handler: Arc<GenerateRecommendationsHandler>,
        assess_handler: Arc<AssessFootprintHandler>,
    ) -> Self {
        Self {
            calculate_handler,
            recommendations_handler,
            assess_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/calculate-footprint - Calculate and record a footprint
pub async fn calculate_footprint(
    State(handlers): State<FootprintHandlers>,
    payload: Result<Json<SurveyPayload>, JsonRejection>,
) -> Response {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return handle_json_rejection(rejection),
    };
    let survey = match SurveyInput::try_from(payload) {
        Ok(survey) => survey,
        Err(e) => return handle_validation_error(e),
    };

    match handlers
        .calculate_handler
        .handle(CalculateFootprintCommand { survey })
        .await
    {
        Ok(output) => {
            let response =
                CalculateFootprintResponse::new(output.submission_id, output.result, output.insights);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_submission_error(e),
    }
}

/// POST /api/recommendations - Recommendations for a calculated footprint
pub async fn generate_recommendations(
    State(handlers): State<FootprintHandlers>,
    payload: Result<Json<RecommendationsRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(req) => req,
        Err(rejection) => return handle_json_rejection(rejection),
    };
    let result = req.footprint();
    let survey = match SurveyInput::try_from(req.footprint_data) {
        Ok(survey) => survey,
        Err(e) => return handle_validation_error(e),
    };

    match handlers
        .recommendations_handler
        .handle(GenerateRecommendationsQuery { result, survey })
    {
        Ok(recommendations) => {
            (StatusCode::OK, Json(RecommendationsResponse { recommendations })).into_response()
        }
        Err(e) => handle_submission_error(e),
    }
}

/// POST /api/assessments - Calculate, recommend, and record in one call
pub async fn assess_footprint(
    State(handlers): State<FootprintHandlers>,
    payload: Result<Json<SurveyPayload>, JsonRejection>,
) -> Response {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return handle_json_rejection(rejection),
    };
    let survey = match SurveyInput::try_from(payload) {
        Ok(survey) => survey,
        Err(e) => return handle_validation_error(e),
    };

    match handlers
        .assess_handler
        .handle(AssessFootprintCommand { survey })
        .await
    {
        Ok(output) => {
            let response = SubmissionResponse::from(&output.record).with_insights(output.insights);
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_submission_error(e),
    }
}
