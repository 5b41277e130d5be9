//! MiniApp Report Library
//!
//! Typed schemas for W3C MiniApp and WebApp manifests, and a generator that
//! aggregates conformance-test metadata and per-implementation test results
//! into the tables of a compliance report.

pub mod app;
pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;
pub mod prelude;

// Re-export commonly used types for convenience
pub use errors::{AppError, Result};
