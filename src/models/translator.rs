//! Azure AI Translator data models
//!
//! Request and response structures of the Translator v3.0 `translate` operation

use serde::{Deserialize, Serialize};

/// One input element of a translate request body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TranslateInput {
    #[serde(rename = "Text")]
    pub text: String,
}

/// Per-input result element of a translate response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResponseItem {
    /// Present only when the source language was auto-detected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detected_language: Option<DetectedLanguage>,
    /// One entry per requested target language
    #[serde(default)]
    pub translations: Vec<Translation>,
}

/// A single translation into one target language
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Translation {
    pub text: String,
    #[serde(default)]
    pub to: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DetectedLanguage {
    pub language: String,
    pub score: f32,
}

/// Extract the first translation of the first input element
pub fn first_translation(items: &[TranslateResponseItem]) -> Option<&Translation> {
    items.first().and_then(|item| item.translations.first())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_serializes_with_capital_text() {
        let body = serde_json::to_string(&[TranslateInput { text: "Olá".to_string() }]).unwrap();
        assert_eq!(body, r#"[{"Text":"Olá"}]"#);
    }

    #[test]
    fn test_first_translation() {
        let items: Vec<TranslateResponseItem> = serde_json::from_str(
            r#"[{"translations":[{"text":"Hello","to":"en"},{"text":"Hola","to":"es"}]}]"#,
        )
        .unwrap();

        assert_eq!(first_translation(&items).map(|t| t.text.as_str()), Some("Hello"));
        assert!(first_translation(&[]).is_none());
    }
}
