//! Azure AI Translator provider
//!
//! Calls the Translator v3.0 REST API with a subscription key

use super::Translator;
use crate::config::TranslatorConfig;
use crate::models::translator::{TranslateInput, TranslateResponseItem};
use crate::utils::error::{helpers, AppError, AppResult};
use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error};

const API_VERSION: &str = "3.0";

/// Azure Translator provider
pub struct AzureTranslator {
    client: Client,
    config: TranslatorConfig,
}

impl AzureTranslator {
    /// Create a new translator with the given outbound timeout
    pub fn new(config: TranslatorConfig, timeout_secs: u64) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(concat!("azure-ai-web/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, config })
    }

    /// Build the request URL
    ///
    /// Resource-specific endpoints expose the API under `/translator/text/v3.0`.
    fn build_url(&self, endpoint: &str) -> String {
        let base_url = endpoint.trim_end_matches('/');
        if base_url.contains(".cognitiveservices.azure.com") {
            format!("{}/translator/text/v{}/translate", base_url, API_VERSION)
        } else {
            format!("{}/translate", base_url)
        }
    }

    fn credentials(&self) -> AppResult<(&str, &str)> {
        let key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| helpers::missing_setting("TRANSLATOR_KEY"))?;
        let endpoint = self
            .config
            .endpoint
            .as_deref()
            .ok_or_else(|| helpers::missing_setting("TRANSLATOR_ENDPOINT"))?;
        if !endpoint.starts_with("http") {
            return Err(helpers::invalid_endpoint("TRANSLATOR_ENDPOINT", endpoint));
        }
        Ok((key, endpoint))
    }
}

#[async_trait]
impl Translator for AzureTranslator {
    fn name(&self) -> &str {
        "azure-translator"
    }

    fn is_configured(&self) -> bool {
        self.config.api_key.is_some() && self.config.endpoint.is_some()
    }

    async fn translate(
        &self,
        texts: &[String],
        from: &str,
        to: &[String],
    ) -> AppResult<Vec<TranslateResponseItem>> {
        let (key, endpoint) = self.credentials()?;
        let url = self.build_url(endpoint);

        let mut query: Vec<(&str, &str)> = vec![("api-version", API_VERSION), ("from", from)];
        query.extend(to.iter().map(|lang| ("to", lang.as_str())));

        let body: Vec<TranslateInput> = texts
            .iter()
            .map(|text| TranslateInput { text: text.clone() })
            .collect();

        debug!("Sending translate request to {} ({} -> {:?})", url, from, to);

        let mut request = self
            .client
            .post(&url)
            .query(&query)
            .header("Ocp-Apim-Subscription-Key", key)
            .header("Content-Type", "application/json")
            .json(&body);

        if let Some(region) = self.config.region.as_deref() {
            request = request.header("Ocp-Apim-Subscription-Region", region);
        }

        let response = request.send().await.map_err(AppError::from_transport)?;
        let status = response.status();

        if status.is_success() {
            let text = response.text().await.map_err(AppError::from_transport)?;
            let items: Vec<TranslateResponseItem> = serde_json::from_str(&text)
                .map_err(|e| helpers::malformed_response(format!("invalid translate response: {}", e)))?;

            debug!("Translate request completed with {} items", items.len());
            Ok(items)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            error!("Translator API request failed: {} - {}", status, error_text);
            Err(AppError::from_upstream_code(status.as_u16(), &error_text))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(endpoint: Option<&str>) -> TranslatorConfig {
        TranslatorConfig {
            api_key: Some("test_key".to_string()),
            endpoint: endpoint.map(str::to_string),
            region: Some("eastus".to_string()),
            source_language: "pt".to_string(),
        }
    }

    #[test]
    fn test_build_url() {
        let translator = AzureTranslator::new(config(None), 30).unwrap();

        assert_eq!(
            translator.build_url("https://api.cognitive.microsofttranslator.com/"),
            "https://api.cognitive.microsofttranslator.com/translate"
        );
        assert_eq!(
            translator.build_url("https://my-res.cognitiveservices.azure.com"),
            "https://my-res.cognitiveservices.azure.com/translator/text/v3.0/translate"
        );
    }

    #[tokio::test]
    async fn test_missing_endpoint_is_configuration_error() {
        let translator = AzureTranslator::new(config(None), 30).unwrap();
        assert!(!translator.is_configured());

        let err = translator
            .translate(&["Olá".to_string()], "pt", &["en".to_string()])
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
        assert!(err.to_string().contains("TRANSLATOR_ENDPOINT"));
    }
}
