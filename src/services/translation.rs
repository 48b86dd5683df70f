//! Translation service
//!
//! Thin adapter between the translation page and the remote translator

use crate::models::translator::first_translation;
use crate::models::TranslationRequest;
use crate::providers::Translator;
use crate::utils::error::{helpers, AppResult};
use crate::utils::logging::truncate_content;
use tracing::{debug, info};

/// Translate one text into one target language
///
/// Returns the first translation of the first element of the response.
pub async fn translate_text(
    translator: &dyn Translator,
    request: &TranslationRequest,
    source_language: &str,
) -> AppResult<String> {
    debug!(
        "Translating '{}' from {} to {}",
        truncate_content(&request.text, 80),
        source_language,
        request.target_language
    );

    let items = translator
        .translate(
            std::slice::from_ref(&request.text),
            source_language,
            std::slice::from_ref(&request.target_language),
        )
        .await?;

    let translation = first_translation(&items)
        .ok_or_else(|| helpers::malformed_response("translation response contained no translations"))?;

    info!(
        "Translation completed via {} ({} -> {})",
        translator.name(),
        source_language,
        request.target_language
    );
    Ok(translation.text.clone())
}
