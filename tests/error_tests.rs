// Error handling tests

use axum::http::StatusCode;
use invoicelens::error::{AppError, MISSING_IMAGE_WARNING};

#[test]
fn test_error_display_messages() {
    let errors = vec![
        AppError::MissingImage,
        AppError::Decode("not an image".to_string()),
        AppError::InvalidRequest("Bad request".to_string()),
        AppError::Config("no key".to_string()),
        AppError::GeminiApi("API error".to_string()),
        AppError::Auth("key rejected".to_string()),
        AppError::TooManyRequests("Rate limited".to_string()),
        AppError::ServiceUnavailable("Service down".to_string()),
        AppError::Internal("boom".to_string()),
    ];

    for error in errors {
        let display = format!("{}", error);
        assert!(!display.is_empty(), "Error should have display message");
    }
}

#[test]
fn test_missing_image_uses_the_fixed_warning() {
    let error = AppError::MissingImage;
    assert_eq!(format!("{}", error), MISSING_IMAGE_WARNING);
    assert_eq!(MISSING_IMAGE_WARNING, "Please upload an invoice image first.");
}

#[test]
fn test_status_code_mapping() {
    assert_eq!(AppError::MissingImage.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        AppError::Decode("x".into()).status_code(),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        AppError::InvalidRequest("x".into()).status_code(),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        AppError::Auth("x".into()).status_code(),
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(
        AppError::TooManyRequests("x".into()).status_code(),
        StatusCode::TOO_MANY_REQUESTS
    );
    assert_eq!(
        AppError::ServiceUnavailable("x".into()).status_code(),
        StatusCode::SERVICE_UNAVAILABLE
    );
    assert_eq!(
        AppError::GeminiApi("x".into()).status_code(),
        StatusCode::BAD_GATEWAY
    );
    assert_eq!(
        AppError::Config("x".into()).status_code(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
    assert_eq!(
        AppError::Internal("x".into()).status_code(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[test]
fn test_error_kinds() {
    assert_eq!(AppError::MissingImage.kind(), "missing_input");
    assert_eq!(AppError::Decode("x".into()).kind(), "invalid_image");
    assert_eq!(AppError::Auth("x".into()).kind(), "authentication_error");
    assert_eq!(
        AppError::TooManyRequests("x".into()).kind(),
        "rate_limit_error"
    );
    assert_eq!(AppError::GeminiApi("x".into()).kind(), "api_error");
    assert_eq!(AppError::Config("x".into()).kind(), "configuration_error");
}

#[test]
fn test_decode_error_carries_detail() {
    let error = AppError::Decode("declared media type does not match".to_string());
    assert!(format!("{}", error).contains("declared media type"));
}

#[test]
fn test_quota_error_carries_detail() {
    let error = AppError::TooManyRequests("Quota exceeded".to_string());
    assert!(format!("{}", error).contains("Quota exceeded"));
}

#[test]
fn test_io_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing file");
    let error: AppError = io_error.into();
    assert_eq!(error.kind(), "internal_error");
    assert!(format!("{}", error).contains("missing file"));
}
