//! Data models for the invoicelens service.
//!
//! This module contains the type definitions for request/response bodies used by:
//! - The inbound form API (`api`)
//! - The upstream Google Gemini API (`gemini`)

pub mod api;
pub mod gemini;

pub use api::{ExtractRequest, ExtractResponse, ImagePayload, Usage};
pub use gemini::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, InlineData, Part,
};
