//! Health check endpoints
//!
//! - /health - liveness probe, 200 whenever the process is serving
//! - /version - build information captured at compile time
//!
//! Liveness never touches the store; use /test-connection for that.

use bytes::Bytes;
use http_body_util::Full;
use hyper::{Response, StatusCode};
use serde::Serialize;
use std::sync::Arc;

use super::json_response;
use crate::server::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    /// Always true if the service is answering
    pub healthy: bool,
    pub version: &'static str,
    /// Whether a MongoDB URI is configured
    #[serde(rename = "configPresent")]
    pub config_present: bool,
    /// Database and collection served
    pub database: String,
    pub collection: String,
    /// Whether presentation hints and shuffles use a fixed seed
    pub seeded: bool,
    pub timestamp: String,
}

fn build_health_response(state: &AppState) -> HealthResponse {
    let args = &state.args;
    HealthResponse {
        healthy: true,
        version: env!("CARGO_PKG_VERSION"),
        config_present: state.connector.config_present(),
        database: args.mongodb_db.clone(),
        collection: args.collection.clone(),
        seeded: args.rng_seed.is_some(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    }
}

/// Handle liveness probe (/health)
pub fn health_check(state: Arc<AppState>) -> Response<Full<Bytes>> {
    json_response(StatusCode::OK, &build_health_response(&state))
}

/// Version information for deployment verification
#[derive(Serialize)]
pub struct VersionResponse {
    /// Cargo package version
    pub version: &'static str,
    /// Git commit hash (short)
    pub commit: &'static str,
    /// Git commit hash (full)
    pub commit_full: &'static str,
    /// Build timestamp
    pub build_time: &'static str,
    pub service: &'static str,
}

/// Handle version endpoint (/version)
pub fn version_info() -> Response<Full<Bytes>> {
    let response = VersionResponse {
        version: env!("CARGO_PKG_VERSION"),
        commit: option_env!("GIT_COMMIT_SHORT").unwrap_or("unknown"),
        commit_full: option_env!("GIT_COMMIT_FULL").unwrap_or("unknown"),
        build_time: option_env!("BUILD_TIMESTAMP").unwrap_or("unknown"),
        service: "nihongo-feed",
    };
    json_response(StatusCode::OK, &response)
}
