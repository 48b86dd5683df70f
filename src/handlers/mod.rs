//! HTTP handlers module
//!
//! Contains all HTTP endpoint handling logic

pub mod health;
pub mod pages;
pub mod translate;
pub mod vision;

use crate::config::Settings;
use crate::middleware::logging::request_logging_middleware;
use crate::providers::{AzureImageAnalyzer, AzureTranslator, ImageAnalyzer, Translator};
use crate::utils::error::{helpers, AppError, AppResult};
use anyhow::Result;
use axum::{http::StatusCode, middleware, routing::get, Router};
use std::sync::Arc;
use std::time::Instant;
use tower::ServiceBuilder;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::info;

/// Application state
///
/// Built once at startup and shared read-only by every request.
#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub translator: Arc<dyn Translator>,
    pub analyzer: Arc<dyn ImageAnalyzer>,
    pub started_at: Instant,
}

impl AppState {
    /// Create state backed by the Azure providers
    pub fn new(settings: Settings) -> Result<Self> {
        let timeout = settings.request.timeout;
        let translator = Arc::new(AzureTranslator::new(settings.translator.clone(), timeout)?);
        let analyzer = Arc::new(AzureImageAnalyzer::new(settings.vision.clone(), timeout)?);

        Ok(Self::with_providers(settings, translator, analyzer))
    }

    /// Create state with explicit provider implementations
    pub fn with_providers(
        settings: Settings,
        translator: Arc<dyn Translator>,
        analyzer: Arc<dyn ImageAnalyzer>,
    ) -> Self {
        Self {
            settings,
            translator,
            analyzer,
            started_at: Instant::now(),
        }
    }

    /// HTTP status of a page whose remote call failed
    pub fn failure_status(&self, error: &AppError) -> StatusCode {
        if self.settings.pages.propagate_error_status {
            error.status_code()
        } else {
            StatusCode::OK
        }
    }
}

/// Create application router backed by the Azure providers
pub async fn create_router(settings: Settings) -> Result<Router> {
    let state = AppState::new(settings)?;
    info!(
        "Providers ready: {} (configured: {}), {} (configured: {})",
        state.translator.name(),
        state.translator.is_configured(),
        state.analyzer.name(),
        state.analyzer.is_configured()
    );
    Ok(build_router(Arc::new(state)))
}

/// Build the router around an existing state
pub fn build_router(app_state: Arc<AppState>) -> Router {
    let max_request_size = app_state.settings.request.max_request_size;

    // Create middleware stack
    let middleware_stack = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(RequestBodyLimitLayer::new(max_request_size));

    Router::new()
        .route("/", get(pages::index))
        .route("/translate", get(translate::show_form).post(translate::submit))
        .route("/vision", get(vision::show_form).post(vision::submit))
        .route("/health", get(health::health_check))
        .route("/health/live", get(health::liveness_check))
        .fallback(pages::not_found)
        .with_state(app_state)
        .layer(middleware_stack)
}

/// Value of a required form field, passed through as submitted
///
/// Whitespace-only values count as missing.
pub(crate) fn required_field(name: &str, value: Option<String>) -> AppResult<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(helpers::validation_error(format!("the '{}' field is required", name))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_field() {
        assert_eq!(required_field("text", Some("  Olá ".to_string())).unwrap(), "  Olá ");
        assert!(matches!(required_field("text", Some("   ".to_string())), Err(AppError::Validation(_))));

        let err = required_field("language", None).unwrap_err();
        assert_eq!(err.to_string(), "Request validation failed: the 'language' field is required");
    }
}
