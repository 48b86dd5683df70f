//! Translation page handlers
//!
//! GET renders the empty form, POST performs one remote translation

use super::{required_field, AppState};
use crate::models::{Outcome, TranslationRequest};
use crate::services;
use crate::utils::error::{AppError, AppResult};
use crate::views::{render_translate, TranslatePage};
use axum::{
    extract::{rejection::FormRejection, State},
    http::StatusCode,
    response::Html,
    Form,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, warn};

/// Submitted translation form
///
/// Fields are optional so a missing field becomes a validation message instead of a rejection.
#[derive(Debug, Default, Deserialize)]
pub struct TranslateForm {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
}

impl TranslateForm {
    pub fn into_request(self) -> AppResult<TranslationRequest> {
        Ok(TranslationRequest {
            text: required_field("text", self.text)?,
            target_language: required_field("language", self.language)?,
        })
    }
}

fn empty_page(state: &AppState) -> TranslatePage {
    TranslatePage {
        source_language: state.settings.translator.source_language.clone(),
        language: "en".to_string(),
        ..Default::default()
    }
}

fn invalid_input(mut page: TranslatePage, error: AppError) -> (StatusCode, Html<String>) {
    warn!("Invalid translation form: {}", error);
    let status = error.status_code();
    page.result = Some(Outcome::from_result(Err(error), "Invalid input"));
    (status, Html(render_translate(&page)))
}

/// Show the empty translation form
///
/// GET /translate
pub async fn show_form(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(render_translate(&empty_page(&state)))
}

/// Translate the submitted text
///
/// POST /translate
pub async fn submit(
    State(state): State<Arc<AppState>>,
    form: Result<Form<TranslateForm>, FormRejection>,
) -> (StatusCode, Html<String>) {
    let mut page = empty_page(&state);

    let Form(form) = match form {
        Ok(form) => form,
        Err(rejection) => return invalid_input(page, AppError::Validation(rejection.body_text())),
    };

    page.text = form.text.clone().unwrap_or_default();
    if let Some(language) = &form.language {
        page.language = language.clone();
    }

    let request = match form.into_request() {
        Ok(request) => request,
        Err(e) => return invalid_input(page, e),
    };

    debug!("Handling translation request to {}", request.target_language);

    let result = services::translate_text(
        state.translator.as_ref(),
        &request,
        &state.settings.translator.source_language,
    )
    .await;

    let status = match &result {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            warn!("Translation failed: {}", e);
            state.failure_status(e)
        }
    };

    page.result = Some(Outcome::from_result(result, "Translation failed"));
    (status, Html(render_translate(&page)))
}
