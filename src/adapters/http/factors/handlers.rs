//! HTTP handlers for emission factor endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::adapters::http::error::handle_domain_error;
use crate::application::{FactorSnapshot, SnapshotSummary};
use crate::domain::emissions::{EmissionFactor, FactorCategory};
use crate::ports::EmissionFactorStore;

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct FactorHandlers {
    snapshot: Arc<FactorSnapshot>,
    store: Arc<dyn EmissionFactorStore>,
}

impl FactorHandlers {
    pub fn new(snapshot: Arc<FactorSnapshot>, store: Arc<dyn EmissionFactorStore>) -> Self {
        Self { snapshot, store }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorListResponse {
    pub count: usize,
    pub missing_global: Vec<FactorCategory>,
    pub factors: Vec<EmissionFactor>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReloadResponse {
    pub source: &'static str,
    pub factor_count: usize,
    pub missing_global: Vec<FactorCategory>,
}

impl From<SnapshotSummary> for ReloadResponse {
    fn from(summary: SnapshotSummary) -> Self {
        Self {
            source: summary.source,
            factor_count: summary.factor_count,
            missing_global: summary.missing_global,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/emission-factors - List the active factor snapshot
pub async fn list_factors(State(handlers): State<FactorHandlers>) -> Response {
    let registry = handlers.snapshot.current();
    let response = FactorListResponse {
        count: registry.len(),
        missing_global: registry.missing_global_categories(),
        factors: registry.factors().to_vec(),
    };
    (StatusCode::OK, Json(response)).into_response()
}

/// POST /api/emission-factors/reload - Rebuild the snapshot from its source
pub async fn reload_factors(State(handlers): State<FactorHandlers>) -> Response {
    match handlers.snapshot.reload(handlers.store.as_ref()).await {
        Ok(summary) => (StatusCode::OK, Json(ReloadResponse::from(summary))).into_response(),
        Err(e) => handle_domain_error(e),
    }
}
