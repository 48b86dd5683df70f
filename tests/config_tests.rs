//! Configuration module unit tests

use azure_ai_web::config::Settings;
use std::collections::HashMap;

/// Full set of valid variables
fn valid_vars() -> HashMap<String, String> {
    [
        ("TRANSLATOR_KEY", "translator-key-1234567890"),
        ("TRANSLATOR_ENDPOINT", "https://api.cognitive.microsofttranslator.com"),
        ("TRANSLATOR_REGION", "eastus"),
        ("VISION_KEY", "vision-key-1234567890"),
        ("VISION_ENDPOINT", "https://my-vision.cognitiveservices.azure.com/"),
        ("SERVER_HOST", "0.0.0.0"),
        ("SERVER_PORT", "8080"),
        ("REQUEST_TIMEOUT", "15"),
        ("RUST_LOG", "debug"),
        ("LOG_FORMAT", "json"),
    ]
    .iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

fn load(vars: &HashMap<String, String>) -> anyhow::Result<Settings> {
    Settings::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn test_settings_creation_with_valid_vars() {
    let settings = load(&valid_vars()).unwrap();

    assert_eq!(settings.server.host, "0.0.0.0");
    assert_eq!(settings.server.port, 8080);
    assert_eq!(settings.translator.api_key.as_deref(), Some("translator-key-1234567890"));
    assert_eq!(settings.translator.region.as_deref(), Some("eastus"));
    assert_eq!(settings.vision.endpoint.as_deref(), Some("https://my-vision.cognitiveservices.azure.com/"));
    assert_eq!(settings.request.timeout, 15);
    assert_eq!(settings.logging.format, "json");
    assert!(settings.translator_configured());
    assert!(settings.vision_configured());
}

#[test]
fn test_missing_credentials_do_not_fail_startup() {
    let mut vars = valid_vars();
    vars.remove("TRANSLATOR_KEY");
    vars.remove("VISION_ENDPOINT");

    let settings = load(&vars).unwrap();
    assert!(!settings.translator_configured());
    assert!(!settings.vision_configured());
}

#[test]
fn test_settings_validation_invalid_port() {
    let mut vars = valid_vars();
    vars.insert("SERVER_PORT".to_string(), "0".to_string());

    let error = load(&vars).unwrap_err();
    assert!(error.to_string().contains("Port number cannot be 0"));
}

#[test]
fn test_settings_unparseable_port() {
    let mut vars = valid_vars();
    vars.insert("SERVER_PORT".to_string(), "not-a-port".to_string());

    let error = load(&vars).unwrap_err();
    assert!(error.to_string().contains("Invalid port number"));
}

#[test]
fn test_settings_validation_zero_timeout() {
    let mut vars = valid_vars();
    vars.insert("REQUEST_TIMEOUT".to_string(), "0".to_string());

    assert!(load(&vars).is_err());
}

#[test]
fn test_settings_validation_invalid_log_level() {
    let mut vars = valid_vars();
    vars.insert("RUST_LOG".to_string(), "azure_ai_web=loud".to_string());

    let error = load(&vars).unwrap_err();
    assert!(error.to_string().contains("Invalid log level"));
}

#[test]
fn test_settings_accepts_log_directives() {
    let mut vars = valid_vars();
    vars.insert("RUST_LOG".to_string(), "azure_ai_web=debug,tower_http=info".to_string());

    let settings = load(&vars).unwrap();
    assert_eq!(settings.logging.level, "azure_ai_web=debug,tower_http=info");
}

#[test]
fn test_settings_endpoint_without_scheme_is_accepted_at_startup() {
    let mut vars = valid_vars();
    vars.insert("TRANSLATOR_ENDPOINT".to_string(), "api.cognitive.microsofttranslator.com".to_string());

    let settings = load(&vars).unwrap();
    assert!(settings.translator_configured());
}

#[test]
fn test_settings_validation_invalid_log_format() {
    let mut vars = valid_vars();
    vars.insert("LOG_FORMAT".to_string(), "xml".to_string());

    let error = load(&vars).unwrap_err();
    assert!(error.to_string().contains("Invalid log format"));
}

#[test]
fn test_propagate_error_status_flag() {
    let mut vars = valid_vars();
    vars.insert("PROPAGATE_ERROR_STATUS".to_string(), "true".to_string());
    assert!(load(&vars).unwrap().pages.propagate_error_status);

    vars.insert("PROPAGATE_ERROR_STATUS".to_string(), "yes".to_string());
    assert!(load(&vars).is_err());
}

#[test]
fn test_settings_serialization() {
    let settings = load(&valid_vars()).unwrap();

    let json = serde_json::to_string(&settings).unwrap();
    let deserialized: Settings = serde_json::from_str(&json).unwrap();

    assert_eq!(settings.server.port, deserialized.server.port);
    assert_eq!(settings.translator.source_language, deserialized.translator.source_language);
    assert_eq!(settings.vision.gender_neutral_caption, deserialized.vision.gender_neutral_caption);
}
