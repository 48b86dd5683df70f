//! Application configuration settings
//!
//! Defines all configuration structures and loading logic. Settings are read
//! once at startup and shared read-only by every handler.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Server configuration
    pub server: ServerConfig,
    /// Azure AI Translator configuration
    pub translator: TranslatorConfig,
    /// Azure AI Vision configuration
    pub vision: VisionConfig,
    /// Outbound request configuration
    pub request: RequestConfig,
    /// Page rendering configuration
    pub pages: PageConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen host
    pub host: String,
    /// Listen port
    pub port: u16,
}

/// Azure AI Translator configuration
///
/// Credentials are optional here; a missing value is reported when the
/// translation page first tries to use it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslatorConfig {
    /// Subscription key
    pub api_key: Option<String>,
    /// Service endpoint
    pub endpoint: Option<String>,
    /// Resource region, sent as `Ocp-Apim-Subscription-Region`
    pub region: Option<String>,
    /// Fixed source language of submitted text
    pub source_language: String,
}

/// Azure AI Vision configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisionConfig {
    /// Subscription key
    pub api_key: Option<String>,
    /// Service endpoint
    pub endpoint: Option<String>,
    /// Ask the service for gender-neutral captions
    pub gender_neutral_caption: bool,
}

/// Outbound request configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestConfig {
    /// Maximum inbound request body size in bytes
    pub max_request_size: usize,
    /// Outbound request timeout in seconds
    pub timeout: u64,
}

/// Page rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    /// Return the error's own HTTP status when a remote call fails instead of 200
    pub propagate_error_status: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    pub level: String,
    /// Log format (text/json)
    pub format: String,
}

impl Settings {
    /// Create a new configuration instance from the process environment
    pub fn new() -> Result<Self> {
        // Load .env file if it exists
        dotenv::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get_or_default = |key: &str, default: &str| -> String {
            lookup(key).unwrap_or_else(|| default.to_string())
        };
        let get_optional = |key: &str| -> Option<String> {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let settings = Self {
            server: ServerConfig {
                host: get_or_default("SERVER_HOST", "127.0.0.1"),
                port: get_or_default("SERVER_PORT", "5000")
                    .parse()
                    .context("Invalid port number")?,
            },
            translator: TranslatorConfig {
                api_key: get_optional("TRANSLATOR_KEY"),
                endpoint: get_optional("TRANSLATOR_ENDPOINT"),
                region: get_optional("TRANSLATOR_REGION"),
                source_language: get_or_default("TRANSLATOR_SOURCE_LANGUAGE", "pt"),
            },
            vision: VisionConfig {
                api_key: get_optional("VISION_KEY"),
                endpoint: get_optional("VISION_ENDPOINT"),
                gender_neutral_caption: get_or_default("VISION_GENDER_NEUTRAL_CAPTION", "true")
                    .parse()
                    .context("Invalid gender neutral caption flag")?,
            },
            request: RequestConfig {
                max_request_size: get_or_default("MAX_REQUEST_SIZE", "1048576")
                    .parse()
                    .context("Invalid maximum request size")?,
                timeout: get_or_default("REQUEST_TIMEOUT", "30")
                    .parse()
                    .context("Invalid request timeout")?,
            },
            pages: PageConfig {
                propagate_error_status: get_or_default("PROPAGATE_ERROR_STATUS", "false")
                    .parse()
                    .context("Invalid propagate error status flag")?,
            },
            logging: LoggingConfig {
                level: get_or_default("RUST_LOG", "info"),
                format: get_or_default("LOG_FORMAT", "text"),
            },
        };

        settings.validate()?;
        settings.warn_missing_credentials();

        Ok(settings)
    }

    /// Validate configuration validity
    ///
    /// Remote service credentials and endpoints are checked when first used.
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            anyhow::bail!("Port number cannot be 0");
        }

        if self.request.timeout == 0 {
            anyhow::bail!("Timeout values cannot be 0");
        }

        if self.request.max_request_size == 0 {
            anyhow::bail!("Maximum request size cannot be 0");
        }

        if self.translator.source_language.trim().is_empty() {
            anyhow::bail!("Translator source language cannot be empty");
        }

        if let Err(e) = EnvFilter::try_new(&self.logging.level) {
            anyhow::bail!("Invalid log level: {} ({})", self.logging.level, e);
        }

        let valid_formats = ["text", "json"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            anyhow::bail!("Invalid log format: {}", self.logging.format);
        }

        Ok(())
    }

    /// Whether translator key and endpoint are both present
    pub fn translator_configured(&self) -> bool {
        self.translator.api_key.is_some() && self.translator.endpoint.is_some()
    }

    /// Whether vision key and endpoint are both present
    pub fn vision_configured(&self) -> bool {
        self.vision.api_key.is_some() && self.vision.endpoint.is_some()
    }

    fn warn_missing_credentials(&self) {
        if !self.translator_configured() {
            warn!("TRANSLATOR_KEY or TRANSLATOR_ENDPOINT not set, translation requests will fail");
        }
        if !self.vision_configured() {
            warn!("VISION_KEY or VISION_ENDPOINT not set, image analysis requests will fail");
        }
    }
}
