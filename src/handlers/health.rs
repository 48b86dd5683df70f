//! Health check handlers
//!
//! Provides application health status check endpoints. Neither endpoint calls a remote service.

use crate::handlers::AppState;
use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service name
    pub service: String,
    /// Version information
    pub version: String,
    /// Timestamp
    pub timestamp: String,
    /// Details (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HealthDetails>,
}

/// Check result
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthDetails {
    /// Translator credential status
    pub translator: String,
    /// Vision credential status
    pub vision: String,
    /// Uptime in seconds
    pub uptime_seconds: u64,
}

fn credential_status(configured: bool) -> String {
    if configured {
        "configured".to_string()
    } else {
        "missing_credentials".to_string()
    }
}

fn build_response(state: &AppState, status: &str) -> HealthResponse {
    HealthResponse {
        status: status.to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        details: Some(HealthDetails {
            translator: credential_status(state.translator.is_configured()),
            vision: credential_status(state.analyzer.is_configured()),
            uptime_seconds: state.started_at.elapsed().as_secs(),
        }),
    }
}

/// Basic health check
///
/// GET /health
/// Reports `degraded` when either remote service lacks credentials
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    debug!("Executing health check");

    let status = if state.translator.is_configured() && state.analyzer.is_configured() {
        "healthy"
    } else {
        "degraded"
    };

    Json(build_response(&state, status))
}

/// Liveness check
///
/// GET /health/live
pub async fn liveness_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    debug!("Executing liveness check");
    Json(build_response(&state, "alive"))
}
