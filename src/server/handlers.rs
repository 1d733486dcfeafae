// HTTP request handlers

use super::routes::AppState;
use crate::error::{AppError, Result};
use crate::models::api::{ExtractRequest, ExtractResponse, Usage};
use crate::models::gemini::{Content, GenerateContentRequest, GenerationConfig, Part};
use axum::{
    extract::State,
    response::{Html, IntoResponse},
    Json,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, error, info};

/// The form page, embedded at compile time.
const INDEX_PAGE: &str = include_str!("../../assets/index.html");

/// Handler for `GET /` - serves the invoice form
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

/// Handler for `GET /metrics` - Prometheus text exposition
pub async fn metrics_handler() -> String {
    crate::metrics::gather_metrics()
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub checks: HashMap<String, HealthCheck>,
    pub timestamp: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheck {
    pub status: String,
    pub message: String,
}

pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let mut checks = HashMap::new();

    // The credential was resolved when the client was constructed; a running
    // server implies a loaded key.
    checks.insert(
        "credential".to_string(),
        HealthCheck {
            status: "ok".to_string(),
            message: "API key resolved at startup".to_string(),
        },
    );

    checks.insert(
        "upstream".to_string(),
        HealthCheck {
            status: "ok".to_string(),
            message: format!("API base: {}", state.gemini_client.base_url()),
        },
    );

    checks.insert(
        "model".to_string(),
        HealthCheck {
            status: "ok".to_string(),
            message: format!("Model: {}", state.gemini_client.model()),
        },
    );

    Json(HealthResponse {
        status: HealthStatus::Healthy,
        checks,
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Handler for `POST /api/extract` - one inference round-trip.
pub async fn extract_handler(
    State(state): State<AppState>,
    body: String, // Get raw JSON as string first
) -> axum::response::Response {
    let started = std::time::Instant::now();

    let result = run_extract(&state, &body).await;
    let status_code = match &result {
        Ok(_) => 200,
        Err(e) => e.status_code().as_u16(),
    };
    crate::metrics::record_request(
        "POST",
        "/api/extract",
        status_code,
        started.elapsed().as_secs_f64(),
    );

    match result {
        Ok(response) => Json(response).into_response(),
        Err(e) => e.into_response(),
    }
}

/// The linear control flow of the whole system: deserialize inputs,
/// short-circuit when no image is present, decode the image, compose the
/// prompt, make one upstream call, return the text unmodified.
async fn run_extract(state: &AppState, body: &str) -> Result<ExtractResponse> {
    // Manually deserialize to get better error messages
    let req: ExtractRequest = serde_json::from_str(body).map_err(|e| {
        error!("Failed to deserialize request: {}", e);
        AppError::InvalidRequest(format!("JSON deserialization error: {}", e))
    })?;

    info!(
        "Received extract request: language={}, query_len={}, image={}",
        req.language,
        req.query.len(),
        req.image.is_some()
    );

    // The one branch of conditional logic in the system: no image, no call.
    let payload = req.image.as_ref().ok_or(AppError::MissingImage)?;

    let image = crate::vision::decode_image(payload)?;
    debug!("Image accepted as {}", image.mime_type);

    let prompt = crate::prompt::compose(&req.query, req.language);

    let gemini_req = GenerateContentRequest {
        contents: vec![Content {
            role: "user".to_string(),
            parts: vec![Part::Text { text: prompt }, Part::InlineData { inline_data: image }],
        }],
        generation_config: state.config.gemini.max_output_tokens.map(|max| GenerationConfig {
            max_output_tokens: Some(max),
            ..Default::default()
        }),
    };

    let gemini_resp = match state.gemini_client.generate_content(gemini_req).await {
        Ok(resp) => resp,
        Err(e) => {
            error!("Gemini API call failed: {}", e);
            return Err(e);
        }
    };

    let model = state.gemini_client.model();
    let usage = gemini_resp.usage_metadata.as_ref().map(Usage::from);
    if let Some(u) = &usage {
        crate::metrics::record_tokens(model, u.input_tokens, u.output_tokens);
    }

    debug!("Received Gemini response");

    Ok(ExtractResponse::new(
        gemini_resp.text(),
        model.to_string(),
        req.language,
        usage,
    ))
}
