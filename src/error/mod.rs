// Error types for the invoicelens service

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Fixed warning shown when the trigger fires with no image uploaded.
/// The same string lives in the form page so the browser can short-circuit
/// without a network call.
pub const MISSING_IMAGE_WARNING: &str = "Please upload an invoice image first.";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{}", MISSING_IMAGE_WARNING)]
    MissingImage,

    #[error("Image decode error: {0}")]
    Decode(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Gemini API error: {0}")]
    GeminiApi(String),

    #[error("Gemini API rejected the credential: {0}")]
    Auth(String),

    #[error("Gemini API quota exceeded: {0}")]
    TooManyRequests(String),

    #[error("Upstream unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Config parsing error: {0}")]
    ConfigParsing(#[from] config::ConfigError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// The HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingImage | AppError::Decode(_) | AppError::InvalidRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Auth(_) => StatusCode::UNAUTHORIZED,
            AppError::TooManyRequests(_) => StatusCode::TOO_MANY_REQUESTS,
            AppError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::GeminiApi(_) | AppError::Http(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The machine-readable kind carried in the error envelope.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::MissingImage => "missing_input",
            AppError::Decode(_) => "invalid_image",
            AppError::InvalidRequest(_) => "invalid_request_error",
            AppError::Auth(_) => "authentication_error",
            AppError::TooManyRequests(_) => "rate_limit_error",
            AppError::ServiceUnavailable(_) => "service_unavailable_error",
            AppError::GeminiApi(_) | AppError::Http(_) => "api_error",
            AppError::Config(_) | AppError::ConfigParsing(_) => "configuration_error",
            _ => "internal_error",
        }
    }
}

// Convert AppError to HTTP responses for Axum
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = (self.status_code(), self.kind(), self.to_string());

        let body = json!({
            "type": "error",
            "error": {
                "type": error_type,
                "message": message,
            }
        });

        (status, axum::Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
