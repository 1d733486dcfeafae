// invoicelens - Multilanguage invoice extractor: web form bridged to Gemini

pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
pub mod gemini;
pub mod metrics;
pub mod models;
pub mod prompt;
pub mod server;
pub mod utils;
pub mod vision;
