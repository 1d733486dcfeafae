// Uploaded-image validation and conversion to the Gemini wire format

use super::models::{validate_image_size, ImageFormat};
use crate::error::{AppError, Result};
use crate::models::api::ImagePayload;
use crate::models::gemini::InlineData;
use base64::Engine;

/// Validate an uploaded image payload and convert it to Gemini `InlineData`.
///
/// The base64 data is decoded to check that it really is an image (magic
/// bytes) and to enforce the size ceiling; the wire keeps the original
/// base64 string, which is what Gemini expects (no data URL prefix).
/// A declared `media_type` must agree with the sniffed format.
pub fn decode_image(payload: &ImagePayload) -> Result<InlineData> {
    let decoded = base64::engine::general_purpose::STANDARD
        .decode(&payload.data)
        .map_err(|e| AppError::Decode(format!("invalid base64 image data: {}", e)))?;

    let format = ImageFormat::sniff(&decoded).ok_or_else(|| {
        AppError::Decode("uploaded file is not a recognizable JPEG or PNG image".to_string())
    })?;

    if let Some(declared) = &payload.media_type {
        let declared_format = ImageFormat::from_mime_type(declared)
            .ok_or_else(|| AppError::Decode(format!("unsupported image format: {}", declared)))?;
        if declared_format != format {
            return Err(AppError::Decode(format!(
                "declared media type {} does not match the image data ({})",
                declared,
                format.mime_type()
            )));
        }
    }

    validate_image_size(decoded.len()).map_err(AppError::Decode)?;

    Ok(InlineData {
        mime_type: format.mime_type().to_string(),
        data: payload.data.clone(),
    })
}
