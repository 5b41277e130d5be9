//! Core types for the report pipeline
//!
//! This module contains the data structures shared by the extraction,
//! consolidation, joining and sectioning steps, and the final
//! [`ReportData`] handed to a renderer.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;
use url::Url;

use crate::constants::report::CONSOLIDATED_VARIANT;
use crate::errors::ReportError;

/// Requirement level of a test, ordered `Must < Should < May`
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ReqType {
    #[default]
    Must,
    Should,
    May,
}

impl ReqType {
    /// Parse a `dcterms:conformsTo` value; anything unrecognized is `Must`
    pub fn from_conformance(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "should" => Self::Should,
            "may" => Self::May,
            _ => Self::Must,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Must => "must",
            Self::Should => "should",
            Self::May => "may",
        }
    }
}

impl std::fmt::Display for ReqType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized metadata of a single conformance test
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestMetadata {
    pub identifier: String,
    pub title: String,
    pub description: String,
    pub coverage: String,
    pub creators: Vec<String>,
    pub required: ReqType,
    pub references: Vec<String>,
}

/// Result of one test for one implementation.
///
/// `NotRun` is distinct from `Failed`: an implementation that never reported
/// a test must not be shown as failing it. Serialized as `true`, `false` or
/// `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<bool>", into = "Option<bool>")]
pub enum TestOutcome {
    Passed,
    Failed,
    NotRun,
}

impl TestOutcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, Self::Passed)
    }

    pub fn is_reported(&self) -> bool {
        !matches!(self, Self::NotRun)
    }
}

impl From<Option<bool>> for TestOutcome {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => Self::Passed,
            Some(false) => Self::Failed,
            None => Self::NotRun,
        }
    }
}

impl From<TestOutcome> for Option<bool> {
    fn from(value: TestOutcome) -> Self {
        match value {
            TestOutcome::Passed => Some(true),
            TestOutcome::Failed => Some(false),
            TestOutcome::NotRun => None,
        }
    }
}

/// Test results of one implementation, as stored in a report file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImplementationReport {
    /// Implementation name, typically the engine
    pub name: String,

    /// Platform variant, e.g. "ios" or "android"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,

    /// Link to the implementation; dropped when it is not an absolute URL
    #[serde(
        rename = "ref",
        default,
        deserialize_with = "lenient_url",
        skip_serializing_if = "Option::is_none"
    )]
    pub reference: Option<Url>,

    /// Results by test identifier; `null` means not run
    pub tests: BTreeMap<String, Option<bool>>,
}

impl ImplementationReport {
    /// Create a plain report with no variant and no results
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variant: None,
            reference: None,
            tests: BTreeMap::new(),
        }
    }

    /// Set the variant
    pub fn with_variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = Some(variant.into());
        self
    }

    /// Add one result
    pub fn with_result(mut self, test_id: impl Into<String>, result: Option<bool>) -> Self {
        self.tests.insert(test_id.into(), result);
        self
    }

    /// Whether this report is one variant of an implementation
    pub fn is_variant(&self) -> bool {
        self.variant.is_some()
    }

    /// Whether this report is the merge of several variants
    pub fn is_consolidated(&self) -> bool {
        self.variant.as_deref() == Some(CONSOLIDATED_VARIANT)
    }

    /// Outcome of a test, `NotRun` when the report has no value for it
    pub fn outcome(&self, test_id: &str) -> TestOutcome {
        self.tests.get(test_id).copied().flatten().into()
    }

    /// Drop entries whose value is `null`
    pub fn strip_unreported(&mut self) {
        self.tests.retain(|_, result| result.is_some());
    }
}

/// Minimal description of an implementation for report headings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Implementer {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    #[serde(
        rename = "ref",
        default,
        deserialize_with = "lenient_url",
        skip_serializing_if = "Option::is_none"
    )]
    pub reference: Option<Url>,
}

/// Read an optional `ref`, keeping it only if it parses as an absolute URL
fn lenient_url<'de, D>(deserializer: D) -> Result<Option<Url>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match raw {
        None => None,
        Some(serde_json::Value::String(text)) => match Url::parse(text.trim()) {
            Ok(url) => Some(url),
            Err(e) => {
                warn!("Ignoring ref '{}': {}", text, e);
                None
            }
        },
        Some(other) => {
            warn!("Ignoring ref {}: not a string", other);
            None
        }
    })
}

impl From<&ImplementationReport> for Implementer {
    fn from(report: &ImplementationReport) -> Self {
        Self {
            name: report.name.clone(),
            variant: report.variant.clone(),
            reference: report.reference.clone(),
        }
    }
}

/// Test metadata extended with one outcome per implementation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImplementationData {
    #[serde(flatten)]
    pub metadata: TestMetadata,
    /// Aligned with the implementation list the data was joined against
    pub implementations: Vec<TestOutcome>,
}

/// All tests sharing one coverage category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImplementationTable {
    pub header: String,
    pub implementations: Vec<ImplementationData>,
}

/// A file that was skipped during loading
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadWarning {
    pub path: PathBuf,
    pub message: String,
}

impl LoadWarning {
    pub fn new(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Build a warning from a file-level error
    pub fn from_error(path: impl Into<PathBuf>, error: &ReportError) -> Self {
        Self::new(path, error.to_string())
    }
}

/// Items read from a directory together with the files that were skipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loaded<T> {
    pub items: Vec<T>,
    pub warnings: Vec<LoadWarning>,
}

impl<T> Default for Loaded<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            warnings: Vec::new(),
        }
    }
}

/// Everything a renderer needs to produce the compliance report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportData {
    /// Tables with variants kept separate
    pub tables: Vec<ImplementationTable>,
    /// Tables with variants merged per implementation
    pub consolidated_tables: Vec<ImplementationTable>,
    pub implementers: Vec<Implementer>,
    pub consolidated_implementers: Vec<Implementer>,
    /// Files skipped while reading the corpus and reports
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<LoadWarning>,
}

impl ReportData {
    /// Total number of tests across all tables
    pub fn test_count(&self) -> usize {
        self.tables.iter().map(|t| t.implementations.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_req_type_parsing() {
        assert_eq!(ReqType::from_conformance("MUST"), ReqType::Must);
        assert_eq!(ReqType::from_conformance("Should"), ReqType::Should);
        assert_eq!(ReqType::from_conformance("may"), ReqType::May);
        assert_eq!(ReqType::from_conformance("optional"), ReqType::Must);
        assert!(ReqType::Must < ReqType::Should);
        assert!(ReqType::Should < ReqType::May);
    }

    #[test]
    fn test_outcome_serializes_as_nullable_bool() {
        let json = serde_json::to_string(&vec![
            TestOutcome::Passed,
            TestOutcome::Failed,
            TestOutcome::NotRun,
        ])
        .unwrap();
        assert_eq!(json, "[true,false,null]");

        let back: Vec<TestOutcome> = serde_json::from_str(&json).unwrap();
        assert_eq!(back[2], TestOutcome::NotRun);
    }

    #[test]
    fn test_report_wire_format() {
        let json = r#"{"name":"X","variant":"ios","ref":"https://example.org/x","tests":{"t1":true,"t2":null}}"#;
        let mut report: ImplementationReport = serde_json::from_str(json).unwrap();

        assert!(report.is_variant());
        assert_eq!(report.reference.as_ref().unwrap().as_str(), "https://example.org/x");
        assert_eq!(report.outcome("t1"), TestOutcome::Passed);
        assert_eq!(report.outcome("t2"), TestOutcome::NotRun);
        assert_eq!(report.outcome("t9"), TestOutcome::NotRun);

        report.strip_unreported();
        assert_eq!(report.tests.len(), 1);
    }

    #[test]
    fn test_implementation_data_flattens_metadata() {
        let data = ImplementationData {
            metadata: TestMetadata {
                identifier: "t1".to_string(),
                title: "Title".to_string(),
                description: "(No description)".to_string(),
                coverage: "Manifest".to_string(),
                creators: vec!["(Unknown)".to_string()],
                required: ReqType::Should,
                references: vec![],
            },
            implementations: vec![TestOutcome::Passed, TestOutcome::NotRun],
        };
        let value = serde_json::to_value(&data).unwrap();
        assert_eq!(value["identifier"], "t1");
        assert_eq!(value["required"], "should");
        assert_eq!(value["implementations"][1], serde_json::Value::Null);
    }
}
