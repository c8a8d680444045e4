//! Top-level router assembly.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use super::country::{country_routes, CountryHandlers};
use super::factors::{factor_routes, FactorHandlers};
use super::footprint::{footprint_routes, FootprintHandlers};
use super::submission::{submission_routes, SubmissionHandlers};
use crate::application::{
    AssessFootprintHandler, CalculateFootprintHandler, FactorSnapshot,
    GenerateRecommendationsHandler, GetCountryHandler, GetSubmissionHandler,
    ListCountriesHandler, ListSubmissionsHandler,
};
use crate::ports::{CountryStore, EmissionFactorStore, SubmissionRepository};

/// Liveness payload for `GET /health`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub factor_count: usize,
}

async fn health(State(snapshot): State<Arc<FactorSnapshot>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        factor_count: snapshot.current().len(),
    })
}

/// Builds the full application router.
///
/// # Routes
/// - `GET /health`
/// - `POST /api/calculate-footprint`
/// - `POST /api/recommendations`
/// - `POST /api/assessments`
/// - `GET /api/submissions`
/// - `GET /api/submissions/:id`
/// - `GET /api/emission-factors`
/// - `POST /api/emission-factors/reload`
/// - `GET /api/countries`
/// - `GET /api/countries/:code`
///
/// Middleware (tracing, CORS, timeouts) is layered on by the binary.
pub fn app_router(
    snapshot: Arc<FactorSnapshot>,
    factor_store: Arc<dyn EmissionFactorStore>,
    repository: Arc<dyn SubmissionRepository>,
    country_store: Arc<dyn CountryStore>,
) -> Router {
    let footprint = FootprintHandlers::new(
        Arc::new(CalculateFootprintHandler::new(
            Arc::clone(&snapshot),
            Arc::clone(&repository),
        )),
        Arc::new(GenerateRecommendationsHandler::new()),
        Arc::new(AssessFootprintHandler::new(
            Arc::clone(&snapshot),
            Arc::clone(&repository),
        )),
    );
    let submissions = SubmissionHandlers::new(
        Arc::new(GetSubmissionHandler::new(Arc::clone(&repository))),
        Arc::new(ListSubmissionsHandler::new(repository)),
    );
    let factors = FactorHandlers::new(Arc::clone(&snapshot), factor_store);
    let countries = CountryHandlers::new(
        Arc::new(ListCountriesHandler::new(Arc::clone(&country_store))),
        Arc::new(GetCountryHandler::new(country_store)),
    );

    let api = Router::new()
        .merge(footprint_routes(footprint))
        .merge(submission_routes(submissions))
        .merge(factor_routes(factors))
        .merge(country_routes(countries));

    Router::new()
        .route("/health", get(health).with_state(snapshot))
        .nest("/api", api)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::factors::BuiltinFactorStore;
    use crate::adapters::storage::{BuiltinCountryStore, InMemorySubmissionRepository};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    async fn test_router() -> Router {
        let store: Arc<dyn EmissionFactorStore> = Arc::new(BuiltinFactorStore::new());
        let snapshot = Arc::new(FactorSnapshot::load(store.as_ref()).await.unwrap());
        app_router(
            snapshot,
            store,
            Arc::new(InMemorySubmissionRepository::new()),
            Arc::new(BuiltinCountryStore::new()),
        )
    }

    #[tokio::test]
    async fn health_reports_loaded_factor_count() {
        let response = test_router()
            .await
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
        assert!(body["factorCount"].as_u64().unwrap() > 0);
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let response = test_router()
            .await
            .oneshot(Request::get("/api/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
