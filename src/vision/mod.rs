//! Image handling for the invoice upload.
//!
//! Uploaded images arrive as base64 payloads; this module validates them
//! (real base64, JPEG/PNG magic bytes, size ceiling) and converts them to
//! Gemini's `InlineData` format.
//!
//! # Submodules
//!
//! - `models`: Image formats and validation constraints.
//! - `decode`: Payload validation and wire-format conversion.

pub mod decode;
pub mod models;

pub use decode::decode_image;
