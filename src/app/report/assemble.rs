//! Report assembly
//!
//! Runs the complete pipeline: extract test metadata, load and consolidate
//! implementation reports, join both into per-test rows, and section the rows
//! into coverage tables. Two parallel views are produced, one with variants
//! kept separate and one with variants consolidated.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::{debug, info};
use url::Url;

use super::config::ReportConfig;
use super::consolidate::consolidate_implementation_reports;
use super::join::create_implementation_data;
use super::loader::load_implementation_reports;
use super::metadata::extract_test_metadata;
use super::sections::create_implementation_tables;
use super::types::{ImplementationReport, Implementer, ReportData, TestMetadata};
use crate::constants::report::{TEMPLATE_NAME, TEMPLATE_REF};
use crate::errors::ReportResult;

/// Order tests by requirement level (`must`, `should`, `may`), then by identifier
///
/// Directory order usually matches already, but a test's identifier may
/// differ from its directory name and the identifier prevails.
pub fn sort_test_metadata(mut tests: Vec<TestMetadata>) -> Vec<TestMetadata> {
    tests.sort_by(|a, b| {
        a.required
            .cmp(&b.required)
            .then_with(|| a.identifier.cmp(&b.identifier))
    });
    tests
}

/// Build the report tables from already loaded metadata and reports
pub fn assemble_report_data(
    metadata: Vec<TestMetadata>,
    implementations: Vec<ImplementationReport>,
) -> ReportData {
    let metadata = sort_test_metadata(metadata);
    let consolidated = consolidate_implementation_reports(&implementations);

    let implementation_data = create_implementation_data(&metadata, &implementations);
    let consolidated_data = create_implementation_data(&metadata, &consolidated);

    ReportData {
        tables: create_implementation_tables(implementation_data),
        consolidated_tables: create_implementation_tables(consolidated_data),
        implementers: implementations.iter().map(Implementer::from).collect(),
        consolidated_implementers: consolidated.iter().map(Implementer::from).collect(),
        warnings: Vec::new(),
    }
}

/// Gather all test metadata and implementation reports into a [`ReportData`]
///
/// The test corpus and the reports directory are read concurrently. Files
/// that fail individually end up in [`ReportData::warnings`].
///
/// # Errors
///
/// Returns `ReportError` if either directory cannot be listed
pub async fn build_report_data(
    tests_dir: &Path,
    reports_dir: &Path,
    config: &ReportConfig,
) -> ReportResult<ReportData> {
    info!(
        "Building report from tests in {} and reports in {}",
        tests_dir.display(),
        reports_dir.display()
    );

    let (metadata, reports) = tokio::try_join!(
        extract_test_metadata(tests_dir, config),
        load_implementation_reports(reports_dir, config),
    )?;

    let mut report = assemble_report_data(metadata.items, reports.items);
    report.warnings = metadata
        .warnings
        .into_iter()
        .chain(reports.warnings)
        .collect();

    debug!(
        "Report has {} tables, {} implementers, {} consolidated implementers",
        report.tables.len(),
        report.implementers.len(),
        report.consolidated_implementers.len()
    );
    Ok(report)
}

/// Create a blank report listing every test, for bootstrapping a new implementation
pub fn generate_template(report: &ReportData) -> ImplementationReport {
    let tests: BTreeMap<String, Option<bool>> = report
        .tables
        .iter()
        .flat_map(|table| table.implementations.iter())
        .map(|data| (data.metadata.identifier.clone(), None))
        .collect();

    ImplementationReport {
        name: TEMPLATE_NAME.to_string(),
        variant: None,
        reference: Url::parse(TEMPLATE_REF).ok(),
        tests,
    }
}
