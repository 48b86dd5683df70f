//! Error handling module unit tests

use axum::http::StatusCode;
use axum::response::IntoResponse;
use azure_ai_web::utils::error::helpers::*;
use azure_ai_web::utils::error::*;
use http_body_util::BodyExt;

#[test]
fn test_app_error_status_codes() {
    let test_cases = vec![
        (AppError::Authentication("test".to_string()), StatusCode::BAD_GATEWAY),
        (AppError::Validation("test".to_string()), StatusCode::BAD_REQUEST),
        (AppError::NotFound("test".to_string()), StatusCode::NOT_FOUND),
        (AppError::RateLimit, StatusCode::TOO_MANY_REQUESTS),
        (AppError::Timeout, StatusCode::GATEWAY_TIMEOUT),
        (AppError::ExternalApi("test".to_string()), StatusCode::BAD_GATEWAY),
        (AppError::MalformedResponse("test".to_string()), StatusCode::BAD_GATEWAY),
        (AppError::Internal("test".to_string()), StatusCode::INTERNAL_SERVER_ERROR),
        (AppError::Config(anyhow::anyhow!("test")), StatusCode::INTERNAL_SERVER_ERROR),
    ];

    for (error, expected_status) in test_cases {
        assert_eq!(error.status_code(), expected_status, "{:?}", error);
    }
}

#[test]
fn test_app_error_types() {
    let test_cases = vec![
        (AppError::Authentication("test".to_string()), "authentication_error"),
        (AppError::Validation("test".to_string()), "invalid_request_error"),
        (AppError::NotFound("test".to_string()), "not_found_error"),
        (AppError::RateLimit, "rate_limit_error"),
        (AppError::Timeout, "timeout_error"),
        (AppError::ExternalApi("test".to_string()), "api_error"),
        (AppError::MalformedResponse("test".to_string()), "malformed_response_error"),
        (AppError::Config(anyhow::anyhow!("test")), "configuration_error"),
        (AppError::Internal("test".to_string()), "internal_error"),
    ];

    for (error, expected_type) in test_cases {
        assert_eq!(error.error_type(), expected_type);
    }
}

#[test]
fn test_should_log_details() {
    assert!(!AppError::Authentication("test".to_string()).should_log_details());
    assert!(!AppError::NotFound("/x".to_string()).should_log_details());

    assert!(AppError::Validation("test".to_string()).should_log_details());
    assert!(AppError::ExternalApi("test".to_string()).should_log_details());
    assert!(AppError::RateLimit.should_log_details());
}

#[test]
fn test_upstream_classification() {
    let cases = vec![
        (StatusCode::UNAUTHORIZED, "authentication_error"),
        (StatusCode::FORBIDDEN, "authentication_error"),
        (StatusCode::TOO_MANY_REQUESTS, "rate_limit_error"),
        (StatusCode::GATEWAY_TIMEOUT, "timeout_error"),
        (StatusCode::BAD_REQUEST, "api_error"),
        (StatusCode::SERVICE_UNAVAILABLE, "api_error"),
    ];

    for (status, expected_type) in cases {
        assert_eq!(AppError::from_upstream(status, "").error_type(), expected_type, "{}", status);
    }
}

#[test]
fn test_upstream_vision_envelope() {
    let body = r#"{"error":{"code":"InvalidImageUrl","message":"Image URL is badly formatted.","innererror":{"code":"BadArgument"}}}"#;
    let error = AppError::from_upstream(StatusCode::BAD_REQUEST, body);

    assert_eq!(error.to_string(), "External API error: Image URL is badly formatted.");
}

#[test]
fn test_upstream_empty_body_uses_status() {
    let error = AppError::from_upstream(StatusCode::BAD_GATEWAY, "  ");
    assert_eq!(error.to_string(), "External API error: 502 Bad Gateway");
}

#[test]
fn test_error_helpers() {
    let validation_err = validation_error("Missing field");
    assert!(matches!(validation_err, AppError::Validation(_)));

    let config_err = missing_setting("TRANSLATOR_ENDPOINT");
    assert!(matches!(config_err, AppError::Config(_)));
    assert!(config_err.to_string().contains("TRANSLATOR_ENDPOINT is not set"));

    let malformed_err = malformed_response("no translations");
    assert_eq!(
        malformed_err.to_string(),
        "Unexpected response from remote service: no translations"
    );
}

#[test]
fn test_serde_error_conversion() {
    let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
    let app_error: AppError = json_error.into();

    assert!(matches!(app_error, AppError::Serialization(_)));
    assert_eq!(app_error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_into_response_renders_html_page() {
    let response = AppError::NotFound("/missing".to_string()).into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "text/html; charset=utf-8"
    );

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(body.contains("404 Not Found"));
    assert!(body.contains("Resource not found: /missing"));
}
