//! Vision page handlers
//!
//! GET renders the empty form, POST performs one remote image analysis

use super::{required_field, AppState};
use crate::models::{Outcome, VisionRequest};
use crate::services;
use crate::utils::error::{AppError, AppResult};
use crate::views::{render_vision, VisionPage};
use axum::{
    extract::{rejection::FormRejection, State},
    http::StatusCode,
    response::Html,
    Form,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, warn};

/// Submitted vision form
#[derive(Debug, Default, Deserialize)]
pub struct VisionForm {
    #[serde(default)]
    pub image_url: Option<String>,
}

impl VisionForm {
    pub fn into_request(self) -> AppResult<VisionRequest> {
        Ok(VisionRequest {
            image_url: required_field("image_url", self.image_url)?,
        })
    }
}

fn invalid_input(mut page: VisionPage, error: AppError) -> (StatusCode, Html<String>) {
    warn!("Invalid vision form: {}", error);
    let status = error.status_code();
    page.result = Some(Outcome::from_result(Err(error), "Invalid input"));
    (status, Html(render_vision(&page)))
}

/// Show the empty vision form
///
/// GET /vision
pub async fn show_form() -> Html<String> {
    Html(render_vision(&VisionPage::default()))
}

/// Analyze the submitted image URL
///
/// POST /vision
pub async fn submit(
    State(state): State<Arc<AppState>>,
    form: Result<Form<VisionForm>, FormRejection>,
) -> (StatusCode, Html<String>) {
    let mut page = VisionPage::default();

    let Form(form) = match form {
        Ok(form) => form,
        Err(rejection) => return invalid_input(page, AppError::Validation(rejection.body_text())),
    };

    page.image_url = form.image_url.clone().unwrap_or_default();

    let request = match form.into_request() {
        Ok(request) => request,
        Err(e) => return invalid_input(page, e),
    };

    debug!("Handling image analysis request");

    let result = services::analyze_image(
        state.analyzer.as_ref(),
        &request,
        state.settings.vision.gender_neutral_caption,
    )
    .await;

    let status = match &result {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            warn!("Image analysis failed: {}", e);
            state.failure_status(e)
        }
    };

    page.result = Some(Outcome::from_result(result, "Image analysis failed"));
    (status, Html(render_vision(&page)))
}
