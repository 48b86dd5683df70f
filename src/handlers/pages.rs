//! Static page handlers

use crate::utils::error::AppError;
use crate::views;
use axum::{http::Uri, response::Html};
use tracing::debug;

/// Landing page
///
/// GET /
pub async fn index() -> Html<String> {
    debug!("Rendering landing page");
    Html(views::render_index())
}

/// Fallback for unknown routes
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
