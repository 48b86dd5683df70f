//! Provider module
//!
//! Defines the remote service traits and their Azure implementations

pub mod azure_translator;
pub mod azure_vision;

use crate::models::translator::TranslateResponseItem;
use crate::models::vision::{ImageAnalysis, VisualFeature};
use crate::utils::error::AppResult;
use async_trait::async_trait;

/// Remote text translation service
#[async_trait]
pub trait Translator: Send + Sync {
    /// Get the provider name
    fn name(&self) -> &str;

    /// Whether credentials are present
    fn is_configured(&self) -> bool;

    /// Translate each of `texts` from `from` into every language in `to`
    async fn translate(
        &self,
        texts: &[String],
        from: &str,
        to: &[String],
    ) -> AppResult<Vec<TranslateResponseItem>>;
}

/// Remote image analysis service
#[async_trait]
pub trait ImageAnalyzer: Send + Sync {
    /// Get the provider name
    fn name(&self) -> &str;

    /// Whether credentials are present
    fn is_configured(&self) -> bool;

    /// Analyze the image at `image_url` for the requested features
    async fn analyze_from_url(
        &self,
        image_url: &str,
        features: &[VisualFeature],
        gender_neutral_caption: bool,
    ) -> AppResult<ImageAnalysis>;
}

pub use azure_translator::AzureTranslator;
pub use azure_vision::AzureImageAnalyzer;
