// Gemini generateContent API client

use crate::auth::ApiKey;
use crate::config::GeminiConfig;
use crate::error::{AppError, Result};
use crate::models::gemini::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error};

/// Client for the Google Generative Language API.
///
/// Holds the pooled HTTP client, the resolved API key, and the upstream
/// configuration. Constructed once at startup and shared for the life of
/// the process; every request goes through [`generate_content`].
///
/// [`generate_content`]: GeminiClient::generate_content
pub struct GeminiClient {
    http_client: Client,
    config: GeminiConfig,
    api_key: ApiKey,
}

impl GeminiClient {
    /// Create a new Gemini client.
    ///
    /// Resolves the API key (configuration first, then the `GOOGLE_API_KEY` /
    /// `GEMINI_API_KEY` environment) so a missing credential fails at startup,
    /// and configures an HTTP client with connection pooling and timeouts.
    pub fn new(config: &GeminiConfig) -> Result<Self> {
        let api_key = ApiKey::resolve(&config.api_key)?;

        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(10))
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Some(Duration::from_secs(60)))
            .tcp_nodelay(true)
            .use_rustls_tls()
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        debug!("Created HTTP client with connection pooling and keep-alive");

        Ok(Self {
            http_client,
            config: config.clone(),
            api_key,
        })
    }

    /// Get the API base URL
    pub fn base_url(&self) -> &str {
        &self.config.api_base_url
    }

    /// Get the configured model name
    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Extract error message from API response JSON
    fn extract_error_message(response_text: &str) -> Option<String> {
        #[derive(serde::Deserialize)]
        struct ErrorResponse {
            error: Option<ErrorDetail>,
        }

        #[derive(serde::Deserialize)]
        struct ErrorDetail {
            message: Option<String>,
            status: Option<String>,
        }

        if let Ok(error_resp) = serde_json::from_str::<ErrorResponse>(response_text) {
            if let Some(error) = error_resp.error {
                return error.message.or(error.status);
            }
        }
        None
    }

    /// Call the Gemini `generateContent` API.
    ///
    /// One POST, one attempt: errors are mapped into the service taxonomy and
    /// returned immediately. There is no retry and no fallback; each user
    /// action gets a single best-effort call.
    pub async fn generate_content(
        &self,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.config.api_base_url, self.config.model
        );
        debug!("Calling generateContent API for model: {}", self.config.model);

        let started = std::time::Instant::now();

        let response = self
            .http_client
            .post(&url)
            .header("x-goog-api-key", self.api_key.expose())
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                crate::metrics::record_gemini_call(&self.config.model, 0, started.elapsed().as_secs_f64());
                if e.is_timeout() {
                    AppError::ServiceUnavailable(format!("Gemini API timed out: {}", e))
                } else {
                    AppError::GeminiApi(format!("HTTP error: {}", e))
                }
            })?;

        let status = response.status();
        crate::metrics::record_gemini_call(
            &self.config.model,
            status.as_u16(),
            started.elapsed().as_secs_f64(),
        );

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(
                "Gemini API error: HTTP {} - Response body: {}",
                status, error_text
            );
            let message = Self::extract_error_message(&error_text).unwrap_or(error_text);
            return Err(match status.as_u16() {
                401 | 403 => AppError::Auth(message),
                429 => AppError::TooManyRequests(format!("Gemini API quota exceeded: {}", message)),
                503 | 504 => AppError::ServiceUnavailable(format!("Upstream unavailable: {}", message)),
                code => AppError::GeminiApi(format!("HTTP {}: {}", code, message)),
            });
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| AppError::GeminiApi(format!("Failed to read response body: {}", e)))?;

        debug!(
            "Raw Gemini response (first 500 chars): {}",
            response_text.chars().take(500).collect::<String>()
        );

        let gemini_response: GenerateContentResponse = serde_json::from_str(&response_text)
            .map_err(|e| {
                error!("Failed to parse Gemini response: {}", e);
                AppError::GeminiApi(format!("Response parsing error: {}", e))
            })?;

        debug!("Successfully received Gemini response");
        Ok(gemini_response)
    }

    /// Check connectivity to the Gemini API.
    ///
    /// Sends a minimal `generateContent` request ("hi") to verify the API is
    /// reachable and the key is accepted.
    pub async fn check_connectivity(&self) -> Result<Duration> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.config.api_base_url, self.config.model
        );

        debug!("Checking connectivity via {}", url);

        let start = std::time::Instant::now();

        // Minimal request: just "hi" to test connectivity
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part::Text {
                    text: "hi".to_string(),
                }],
            }],
            generation_config: Some(GenerationConfig {
                max_output_tokens: Some(1),
                ..Default::default()
            }),
        };

        let response = self
            .http_client
            .post(&url)
            .header("x-goog-api-key", self.api_key.expose())
            .header("Content-Type", "application/json")
            .json(&request)
            .timeout(Duration::from_secs(5)) // Short timeout for health checks
            .send()
            .await
            .map_err(|e| AppError::GeminiApi(format!("Health check request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::GeminiApi(format!(
                "API check failed: {}",
                error_text
            )));
        }

        let latency = start.elapsed();
        debug!("API connectivity check passed in {:?}", latency);

        Ok(latency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_error_message() {
        let body = r#"{"error": {"code": 429, "message": "Quota exceeded", "status": "RESOURCE_EXHAUSTED"}}"#;
        assert_eq!(
            GeminiClient::extract_error_message(body),
            Some("Quota exceeded".to_string())
        );

        let status_only = r#"{"error": {"status": "UNAVAILABLE"}}"#;
        assert_eq!(
            GeminiClient::extract_error_message(status_only),
            Some("UNAVAILABLE".to_string())
        );

        assert_eq!(GeminiClient::extract_error_message("not json"), None);
        assert_eq!(GeminiClient::extract_error_message("{}"), None);
    }

    #[test]
    fn test_client_from_configured_key() {
        // A configured key wins over the environment, so this stays
        // independent of whatever GOOGLE_API_KEY may be set around the tests.
        let config = GeminiConfig {
            api_key: "test-key".to_string(),
            ..Default::default()
        };
        let client = GeminiClient::new(&config).unwrap();
        assert_eq!(client.model(), "gemini-2.5-flash");
        assert!(client.base_url().starts_with("https://generativelanguage"));
    }
}
