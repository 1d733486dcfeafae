//! Utility functions and helpers for the invoicelens service.
//!
//! # Submodules
//!
//! - `logging`: Tracing and logging initialization with security filters.

pub mod logging;
