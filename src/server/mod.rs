//! Axum-based HTTP server implementation for the invoice form.
//!
//! This module is responsible for setting up the HTTP server, configuring
//! routes, and handling incoming requests from the browser page. It bridges
//! form submissions to the Google Gemini API.
//!
//! # Components
//!
//! - `handlers`: Implementation of individual endpoints (form page, extract, health, metrics).
//! - `routes`: The main router configuration that ties everything together.

mod handlers;
mod routes;

pub use routes::{create_router, AppState};
