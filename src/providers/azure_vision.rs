//! Azure AI Vision provider
//!
//! Calls the Image Analysis 4.0 REST API for images given by URL

use super::ImageAnalyzer;
use crate::config::VisionConfig;
use crate::models::vision::{AnalyzeUrlRequest, ImageAnalysis, VisualFeature};
use crate::utils::error::{helpers, AppError, AppResult};
use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error};

const API_VERSION: &str = "2023-10-01";

/// Azure Image Analysis provider
pub struct AzureImageAnalyzer {
    client: Client,
    config: VisionConfig,
}

impl AzureImageAnalyzer {
    /// Create a new analyzer with the given outbound timeout
    pub fn new(config: VisionConfig, timeout_secs: u64) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(concat!("azure-ai-web/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, config })
    }

    /// Build the request URL
    fn build_url(&self, endpoint: &str) -> String {
        let base_url = endpoint.trim_end_matches('/');
        format!("{}/computervision/imageanalysis:analyze", base_url)
    }

    fn credentials(&self) -> AppResult<(&str, &str)> {
        let key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| helpers::missing_setting("VISION_KEY"))?;
        let endpoint = self
            .config
            .endpoint
            .as_deref()
            .ok_or_else(|| helpers::missing_setting("VISION_ENDPOINT"))?;
        if !endpoint.starts_with("http") {
            return Err(helpers::invalid_endpoint("VISION_ENDPOINT", endpoint));
        }
        Ok((key, endpoint))
    }
}

/// Comma-separated feature list for the `features` query parameter
fn feature_list(features: &[VisualFeature]) -> String {
    features
        .iter()
        .map(VisualFeature::as_str)
        .collect::<Vec<_>>()
        .join(",")
}

#[async_trait]
impl ImageAnalyzer for AzureImageAnalyzer {
    fn name(&self) -> &str {
        "azure-vision"
    }

    fn is_configured(&self) -> bool {
        self.config.api_key.is_some() && self.config.endpoint.is_some()
    }

    async fn analyze_from_url(
        &self,
        image_url: &str,
        features: &[VisualFeature],
        gender_neutral_caption: bool,
    ) -> AppResult<ImageAnalysis> {
        if features.is_empty() {
            return Err(helpers::validation_error("at least one visual feature is required"));
        }

        let (key, endpoint) = self.credentials()?;
        let url = self.build_url(endpoint);
        let features = feature_list(features);
        let gender_neutral = gender_neutral_caption.to_string();

        debug!("Sending image analysis request to {} (features: {})", url, features);

        let response = self
            .client
            .post(&url)
            .query(&[
                ("api-version", API_VERSION),
                ("features", features.as_str()),
                ("gender-neutral-caption", gender_neutral.as_str()),
            ])
            .header("Ocp-Apim-Subscription-Key", key)
            .header("Content-Type", "application/json")
            .json(&AnalyzeUrlRequest {
                url: image_url.to_string(),
            })
            .send()
            .await
            .map_err(AppError::from_transport)?;

        let status = response.status();

        if status.is_success() {
            let text = response.text().await.map_err(AppError::from_transport)?;
            let analysis: ImageAnalysis = serde_json::from_str(&text)
                .map_err(|e| helpers::malformed_response(format!("invalid analysis response: {}", e)))?;

            debug!(
                "Image analysis completed: {} tags, {} objects",
                analysis.tags().len(),
                analysis.objects().len()
            );
            Ok(analysis)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            error!("Vision API request failed: {} - {}", status, error_text);
            Err(AppError::from_upstream_code(status.as_u16(), &error_text))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::vision::DEFAULT_FEATURES;

    fn config() -> VisionConfig {
        VisionConfig {
            api_key: None,
            endpoint: Some("https://my-vision.cognitiveservices.azure.com/".to_string()),
            gender_neutral_caption: true,
        }
    }

    #[test]
    fn test_build_url() {
        let analyzer = AzureImageAnalyzer::new(config(), 30).unwrap();
        assert_eq!(
            analyzer.build_url("https://my-vision.cognitiveservices.azure.com/"),
            "https://my-vision.cognitiveservices.azure.com/computervision/imageanalysis:analyze"
        );
    }

    #[test]
    fn test_feature_list() {
        assert_eq!(feature_list(&DEFAULT_FEATURES), "caption,tags,objects");
    }

    #[tokio::test]
    async fn test_missing_key_is_configuration_error() {
        let analyzer = AzureImageAnalyzer::new(config(), 30).unwrap();

        let err = analyzer
            .analyze_from_url("https://example.com/cat.jpg", &DEFAULT_FEATURES, true)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("VISION_KEY"));
    }

    #[tokio::test]
    async fn test_endpoint_without_scheme_is_configuration_error() {
        let analyzer = AzureImageAnalyzer::new(
            VisionConfig {
                api_key: Some("test_key".to_string()),
                endpoint: Some("my-vision.cognitiveservices.azure.com".to_string()),
                gender_neutral_caption: true,
            },
            30,
        )
        .unwrap();

        let err = analyzer
            .analyze_from_url("https://example.com/cat.jpg", &DEFAULT_FEATURES, true)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
        assert!(err.to_string().contains("VISION_ENDPOINT should start with 'http'"));
    }
}
