//! Core application logic for the MiniApp report generator
//!
//! This module contains the manifest schemas, the conformance report
//! pipeline, and the test corpus structure check.
//!
//! # Examples
//!
//! ```rust,no_run
//! use std::path::Path;
//! use miniapp_report::app::{build_report_data, check_test_corpus, ReportConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ReportConfig::default();
//!
//! let corpus = check_test_corpus(Path::new("tests"), &config).await?;
//! println!("{} test folders, {} with problems", corpus.folders.len(), corpus.failure_count());
//!
//! let report = build_report_data(Path::new("tests"), Path::new("reports"), &config).await?;
//! println!("{} tests in {} tables", report.test_count(), report.tables.len());
//! # Ok(())
//! # }
//! ```

pub mod corpus;
pub mod manifest;
pub mod report;

// Re-export main public API
pub use corpus::{check_test_corpus, CorpusCheck, FolderCheck, ManifestStatus};
pub use manifest::{load_manifest, AppManifest, MiniAppManifest, WebAppManifest};
pub use report::{
    build_report_data, consolidate_implementation_reports, generate_template,
    ImplementationReport, ReportConfig, ReportData, TestOutcome,
};
