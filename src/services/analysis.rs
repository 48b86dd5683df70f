//! Image analysis service
//!
//! Thin adapter between the vision page and the remote image analyzer

use crate::models::vision::{ImageAnalysis, DEFAULT_FEATURES};
use crate::models::VisionRequest;
use crate::providers::ImageAnalyzer;
use crate::utils::error::AppResult;
use crate::utils::logging::truncate_content;
use tracing::{debug, info};

/// Analyze an image by URL for caption, tags and objects
pub async fn analyze_image(
    analyzer: &dyn ImageAnalyzer,
    request: &VisionRequest,
    gender_neutral_caption: bool,
) -> AppResult<ImageAnalysis> {
    debug!("Analyzing image {}", truncate_content(&request.image_url, 120));

    let analysis = analyzer
        .analyze_from_url(&request.image_url, &DEFAULT_FEATURES, gender_neutral_caption)
        .await?;

    info!(
        "Image analysis completed via {}: caption={}, {} tags, {} objects",
        analyzer.name(),
        analysis.caption().is_some(),
        analysis.tags().len(),
        analysis.objects().len()
    );
    Ok(analysis)
}
