// Inbound HTTP API types for the invoice form

use crate::models::gemini::UsageMetadata;
use crate::prompt::Language;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/extract`: the three inputs the form collects.
///
/// The image is optional at the type level so the missing-image branch is an
/// explicit check in the handler rather than a deserialization failure; the
/// query defaults to empty and the language to English (the first entry the
/// selector offers).
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractRequest {
    #[serde(default)]
    pub image: Option<ImagePayload>,

    #[serde(default)]
    pub query: String,

    #[serde(default)]
    pub language: Language,
}

/// An uploaded image as it crosses the wire: base64 bytes plus an optional
/// declared MIME type. When `media_type` is absent the format is sniffed
/// from magic bytes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImagePayload {
    #[serde(default)]
    pub media_type: Option<String>,

    /// Base64-encoded image bytes, no data URL prefix.
    pub data: String,
}

/// Body of a successful `POST /api/extract` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractResponse {
    pub id: String,

    /// The model's text completion, verbatim.
    pub answer: String,

    pub model: String,
    pub language: Language,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
}

/// Token accounting echoed back to the page when the API reports it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl From<&UsageMetadata> for Usage {
    fn from(metadata: &UsageMetadata) -> Self {
        Self {
            input_tokens: metadata.prompt_token_count,
            output_tokens: metadata.candidates_token_count,
        }
    }
}

impl ExtractResponse {
    /// Create a response with a fresh `ext_`-prefixed id.
    pub fn new(answer: String, model: String, language: Language, usage: Option<Usage>) -> Self {
        Self {
            id: format!("ext_{}", uuid::Uuid::new_v4().simple()),
            answer,
            model,
            language,
            usage,
        }
    }
}
