//! Populate endpoints: `/populate-120-posts` and `/populate-smart-content`

use bytes::Bytes;
use http_body_util::Full;
use hyper::{Response, StatusCode};
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info};

use super::json_response;
use crate::reseed::{reseed, ReseedReport, SeedPlan};
use crate::server::AppState;
use crate::types::{FeedError, ReseedStage, Result};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopulateResponse {
    pub success: bool,
    pub message: String,
    pub plan: &'static str,
    #[serde(flatten)]
    pub report: ReseedReport,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopulateFailure {
    pub success: bool,
    pub error: String,
    pub plan: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<ReseedStage>,
}

impl PopulateResponse {
    pub fn new(plan: &SeedPlan, report: ReseedReport) -> Self {
        let message = match plan {
            SeedPlan::Frequency(_) => format!(
                "Successfully populated {} frequency-ranked posts",
                report.inserted_count
            ),
            SeedPlan::Curated => format!(
                "Successfully populated {} curated high-frequency posts",
                report.inserted_count
            ),
        };
        Self {
            success: true,
            message,
            plan: plan.name(),
            report,
        }
    }
}

impl PopulateFailure {
    pub fn new(plan: &SeedPlan, err: &FeedError) -> Self {
        Self {
            success: false,
            error: err.to_string(),
            plan: plan.name(),
            stage: err.stage(),
        }
    }
}

/// Handle a populate request with the given plan
pub async fn handle_populate(state: Arc<AppState>, plan: SeedPlan) -> Response<Full<Bytes>> {
    info!(plan = plan.name(), "Populate requested");
    match run(&state, &plan).await {
        Ok(report) => json_response(StatusCode::OK, &PopulateResponse::new(&plan, report)),
        Err(e) => {
            error!(plan = plan.name(), "Populate failed: {}", e);
            json_response(e.status_code(), &PopulateFailure::new(&plan, &e))
        }
    }
}

async fn run(state: &AppState, plan: &SeedPlan) -> Result<ReseedReport> {
    let store = state.connector.connect().await?;
    let mut rng = state.rng();
    let result = reseed(&*store, &state.catalog, plan, &mut rng).await;
    store.close().await;
    result
}
