//! Prelude module for the MiniApp report library
//!
//! This module re-exports the most commonly used items from the library,
//! so typical usage needs a single `use miniapp_report::prelude::*;`.
//!
//! # Usage
//!
//! ```rust,no_run
//! use miniapp_report::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = ReportConfig::default();
//!     let report = build_report_data(Path::new("tests"), Path::new("reports"), &config).await?;
//!     let template = generate_template(&report);
//!     println!("{} tests", template.tests.len());
//!     Ok(())
//! }
//! ```

// Core result types
pub use crate::errors::{AppError, ManifestError, ReportError, Result};

// Manifest schemas
pub use crate::app::manifest::{
    load_manifest, AppColor, AppManifest, ImageResource, MiniAppManifest, TextDirection,
    WebAppManifest,
};

// Report pipeline
pub use crate::app::report::{
    build_report_data, consolidate_implementation_reports, extract_test_metadata,
    generate_template, load_implementation_reports, ImplementationData, ImplementationReport,
    ImplementationTable, Implementer, ReportConfig, ReportData, ReqType, TestMetadata,
    TestOutcome,
};

// Corpus check
pub use crate::app::corpus::{check_test_corpus, CorpusCheck};

// Standard library re-exports that are commonly needed
pub use std::path::{Path, PathBuf};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prelude_imports() {
        let _config = ReportConfig::default();
        let report = ImplementationReport::new("A").with_result("t1", Some(true));
        assert_eq!(report.outcome("t1"), TestOutcome::Passed);
        assert_eq!(ReqType::default(), ReqType::Must);
    }

    #[tokio::test]
    async fn test_prelude_integration_pattern() {
        use tempfile::TempDir;

        let temp_dir = TempDir::new().unwrap();
        let tests = temp_dir.path().join("tests");
        let reports = temp_dir.path().join("reports");
        std::fs::create_dir_all(&tests).unwrap();
        std::fs::create_dir_all(&reports).unwrap();

        let report = build_report_data(&tests, &reports, &ReportConfig::default())
            .await
            .unwrap();
        assert_eq!(report.test_count(), 0);
        assert!(generate_template(&report).tests.is_empty());
    }
}
