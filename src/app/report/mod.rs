//! Conformance report generation
//!
//! This module turns a W3C MiniApp test corpus and a directory of
//! per-implementation result files into the tables of a compliance report.
//!
//! Some implementations come in several variants (the same engine for iOS,
//! Android or Web). They are not independent implementations for the formal
//! report, yet their separate results are still worth showing. The pipeline
//! therefore produces two views: the raw one with variants kept separate and a
//! consolidated one where all variants of an implementation are merged.
//!
//! # Module Organization
//!
//! - [`types`] - Data model (TestMetadata, ImplementationReport, ReportData, ...)
//! - [`config`] - Runtime configuration of the readers
//! - [`metadata`] - Extraction of test metadata from JSON-LD descriptors
//! - [`loader`] - Loading of implementation report files
//! - [`consolidate`] - Merging of variant reports
//! - [`join`] - Joining metadata with implementation results
//! - [`sections`] - Grouping rows into coverage tables
//! - [`assemble`] - The complete pipeline and template generation
//!
//! # Examples
//!
//! ```rust,no_run
//! use std::path::Path;
//! use miniapp_report::app::report::{build_report_data, generate_template, ReportConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ReportConfig::default();
//! let report = build_report_data(Path::new("tests"), Path::new("reports"), &config).await?;
//!
//! for table in &report.consolidated_tables {
//!     println!("{}: {} tests", table.header, table.implementations.len());
//! }
//!
//! let template = generate_template(&report);
//! println!("{}", serde_json::to_string_pretty(&template)?);
//! # Ok(())
//! # }
//! ```

pub mod assemble;
pub mod config;
pub mod consolidate;
pub mod fs;
pub mod join;
pub mod loader;
pub mod metadata;
pub mod sections;
pub mod types;

#[cfg(test)]
pub mod tests;

pub use assemble::{assemble_report_data, build_report_data, generate_template, sort_test_metadata};
pub use config::ReportConfig;
pub use consolidate::{consolidate_implementation_reports, merge_variant_results};
pub use join::create_implementation_data;
pub use loader::{load_implementation_reports, parse_report};
pub use metadata::{extract_test_metadata, parse_descriptor};
pub use sections::create_implementation_tables;
pub use types::{
    ImplementationData, ImplementationReport, ImplementationTable, Implementer, LoadWarning,
    Loaded, ReportData, ReqType, TestMetadata, TestOutcome,
};
