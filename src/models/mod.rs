//! Data models module
//!
//! Defines per-request page data and the wire structures of the remote services

use crate::utils::error::AppResult;
use serde::{Deserialize, Serialize};

pub mod translator;
pub mod vision;

/// Result of one remote call as shown on a page
///
/// Exactly one of data or message is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Outcome<T> {
    Success { data: T },
    Error { message: String },
}

impl<T> Outcome<T> {
    /// Convert a call result, prefixing failures with `context`
    pub fn from_result(result: AppResult<T>, context: &str) -> Self {
        match result {
            Ok(data) => Outcome::Success { data },
            Err(e) => Outcome::Error {
                message: format!("{}: {}", context, e),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Outcome::Success { data } => Some(data),
            Outcome::Error { .. } => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Outcome::Success { .. } => None,
            Outcome::Error { message } => Some(message),
        }
    }
}

/// Text translation request built from the form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub text: String,
    pub target_language: String,
}

/// Image analysis request built from the form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisionRequest {
    pub image_url: String,
}

/// Target languages offered by the translation form
pub const TARGET_LANGUAGES: &[(&str, &str)] = &[
    ("en", "English"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("zh-Hans", "Chinese (Simplified)"),
    ("pt", "Portuguese"),
];
