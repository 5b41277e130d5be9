//! Test metadata extraction
//!
//! Each test directory carries a JSON-LD descriptor using Dublin Core terms.
//! The descriptor is parsed into named optional fields and normalized into
//! [`TestMetadata`], with a documented fallback for every missing field:
//!
//! | field         | source                                   | fallback              |
//! |---------------|------------------------------------------|-----------------------|
//! | `identifier`  | `dc:identifier`                          | test directory name   |
//! | `title`       | `dcterms:alternative`, then `dc:title`   | `"(No title)"`        |
//! | `description` | `dc:description`                         | `"(No description)"`  |
//! | `coverage`    | `dc:coverage`                            | `"(Uncategorized)"`   |
//! | `creators`    | `dc:creator`                             | `["(Unknown)"]`       |
//! | `required`    | `dcterms:conformsTo` (must/should/may)   | `must`                |
//! | `references`  | `dcterms:isReferencedBy`                 | empty                 |
//!
//! A member of the wrong shape counts as missing. Only a descriptor that is
//! not JSON at all, or cannot be read, causes the test to be skipped.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use futures::stream::{self, StreamExt};
use serde::Deserialize;
use tracing::{debug, info, warn};

use super::config::ReportConfig;
use super::fs::{entry_name, list_dir, EntryKind};
use super::types::{Loaded, LoadWarning, ReqType, TestMetadata};
use crate::constants::fallback;
use crate::errors::{ReportError, ReportResult};

/// A JSON-LD literal: a bare string, a value object, or anything else
///
/// Any other shape (a number, an `{"@id": ...}` node) decodes as `Other` and
/// counts as missing, so only that field takes its fallback.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum Literal {
    Plain(String),
    Object {
        #[serde(rename = "@value", alias = "_")]
        value: String,
    },
    Other(serde_json::Value),
}

impl Literal {
    fn as_str(&self) -> Option<&str> {
        match self {
            Literal::Plain(value) | Literal::Object { value } => Some(value),
            Literal::Other(_) => None,
        }
    }

    fn normalized(&self) -> Option<String> {
        self.as_str().map(normalize_text)
    }
}

/// A member that may hold one value or an array of values
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::Many(values) => values,
            OneOrMany::One(value) => vec![value],
        }
    }
}

/// The descriptor members this crate reads; everything else is ignored
#[derive(Debug, Clone, Deserialize)]
struct TestDescriptor {
    #[serde(rename = "dc:identifier")]
    identifier: Option<Literal>,
    #[serde(rename = "dc:title")]
    title: Option<Literal>,
    #[serde(rename = "dcterms:alternative")]
    alternative_title: Option<Literal>,
    #[serde(rename = "dc:description")]
    description: Option<Literal>,
    #[serde(rename = "dc:coverage")]
    coverage: Option<Literal>,
    #[serde(rename = "dc:creator")]
    creators: Option<OneOrMany<Literal>>,
    #[serde(rename = "dcterms:conformsTo")]
    conforms_to: Option<Literal>,
    #[serde(rename = "dcterms:isReferencedBy")]
    references: Option<OneOrMany<Literal>>,
}

impl TestDescriptor {
    fn into_metadata(self, dir_name: &str) -> TestMetadata {
        let identifier = self
            .identifier
            .and_then(|id| id.normalized())
            .unwrap_or_else(|| dir_name.to_string());

        let title = self
            .alternative_title
            .and_then(|t| t.normalized())
            .or_else(|| self.title.and_then(|t| t.normalized()))
            .unwrap_or_else(|| fallback::TITLE.to_string());

        let description = self
            .description
            .and_then(|d| d.normalized())
            .unwrap_or_else(|| fallback::DESCRIPTION.to_string());

        let coverage = self
            .coverage
            .and_then(|c| c.normalized())
            .unwrap_or_else(|| fallback::COVERAGE.to_string());

        let mut creators: Vec<String> = self
            .creators
            .map(OneOrMany::into_vec)
            .unwrap_or_default()
            .iter()
            .filter_map(Literal::normalized)
            .collect();
        if creators.is_empty() {
            creators.push(fallback::CREATOR.to_string());
        }

        let required = self
            .conforms_to
            .as_ref()
            .and_then(Literal::as_str)
            .map(ReqType::from_conformance)
            .unwrap_or_default();

        let references = self
            .references
            .map(OneOrMany::into_vec)
            .unwrap_or_default()
            .iter()
            .filter_map(Literal::normalized)
            .collect();

        TestMetadata {
            identifier,
            title,
            description,
            coverage,
            creators,
            required,
            references,
        }
    }
}

/// Trim and collapse runs of whitespace into single spaces
pub fn normalize_text(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Parse descriptor JSON for the test stored in directory `dir_name`
pub fn parse_descriptor(data: &str, dir_name: &str) -> serde_json::Result<TestMetadata> {
    let descriptor: TestDescriptor = serde_json::from_str(data)?;
    Ok(descriptor.into_metadata(dir_name))
}

/// Read the descriptor of one test directory
async fn read_test_metadata(test_dir: &Path, config: &ReportConfig) -> ReportResult<TestMetadata> {
    let path = test_dir.join(&config.metadata_file);
    let data = tokio::fs::read_to_string(&path)
        .await
        .map_err(|e| ReportError::UnreadableFile {
            path: path.clone(),
            reason: e.to_string(),
        })?;

    parse_descriptor(&data, &entry_name(test_dir)).map_err(|e| ReportError::MalformedFile {
        path,
        reason: e.to_string(),
    })
}

/// Extract the metadata of every test under `tests_dir`
///
/// Each non-excluded subdirectory is one test. Descriptors are read
/// concurrently; a test whose descriptor is missing or malformed is skipped
/// with a warning. When two tests share an identifier the first one in
/// directory order is kept.
///
/// # Errors
///
/// Returns `ReportError` only if `tests_dir` itself cannot be listed
pub async fn extract_test_metadata(
    tests_dir: &Path,
    config: &ReportConfig,
) -> ReportResult<Loaded<TestMetadata>> {
    let test_dirs = list_dir(tests_dir, EntryKind::Directory, config).await?;
    debug!(
        "Found {} test directories in {}",
        test_dirs.len(),
        tests_dir.display()
    );

    let results: Vec<(PathBuf, ReportResult<TestMetadata>)> = stream::iter(test_dirs)
        .map(|dir| async move {
            let result = read_test_metadata(&dir, config).await;
            (dir, result)
        })
        .buffered(config.concurrency())
        .collect()
        .await;

    let mut loaded = Loaded::default();
    let mut seen = HashSet::new();
    for (dir, result) in results {
        match result {
            Ok(metadata) => {
                if seen.insert(metadata.identifier.clone()) {
                    loaded.items.push(metadata);
                } else {
                    let message = format!(
                        "Duplicate test identifier '{}'; skipped",
                        metadata.identifier
                    );
                    warn!("{}: {}", dir.display(), message);
                    loaded.warnings.push(LoadWarning::new(dir, message));
                }
            }
            Err(e) => {
                warn!("{}; skipped", e);
                loaded.warnings.push(LoadWarning::from_error(dir, &e));
            }
        }
    }

    info!(
        "Extracted metadata for {} tests ({} skipped)",
        loaded.items.len(),
        loaded.warnings.len()
    );
    Ok(loaded)
}
