//! Implementation report loading
//!
//! Reads one JSON report per implementation from a reports directory. Entries
//! with a `null` result are dropped on load, so a loaded report only holds
//! tests the implementation actually ran.

use std::path::{Path, PathBuf};

use futures::stream::{self, StreamExt};
use tracing::{debug, info, warn};

use super::config::ReportConfig;
use super::fs::{list_dir, EntryKind};
use super::types::{ImplementationReport, LoadWarning, Loaded};
use crate::errors::{ReportError, ReportResult};

/// Parse a report and drop its `null` entries
pub fn parse_report(data: &str) -> serde_json::Result<ImplementationReport> {
    let mut report: ImplementationReport = serde_json::from_str(data)?;
    report.strip_unreported();
    Ok(report)
}

async fn read_report(path: &Path) -> ReportResult<ImplementationReport> {
    let data = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ReportError::UnreadableFile {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    parse_report(&data).map_err(|e| ReportError::MalformedFile {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Sort reports by implementation name; the sort is stable
pub fn sort_by_name(reports: &mut [ImplementationReport]) {
    reports.sort_by(|a, b| a.name.cmp(&b.name));
}

/// Load every implementation report in `reports_dir`
///
/// Files are read concurrently. A file that cannot be read or parsed is
/// skipped with a warning. The result is sorted by implementation name.
///
/// # Errors
///
/// Returns `ReportError` only if `reports_dir` itself cannot be listed
pub async fn load_implementation_reports(
    reports_dir: &Path,
    config: &ReportConfig,
) -> ReportResult<Loaded<ImplementationReport>> {
    let files = list_dir(reports_dir, EntryKind::File, config).await?;
    debug!(
        "Found {} report files in {}",
        files.len(),
        reports_dir.display()
    );

    let results: Vec<(PathBuf, ReportResult<ImplementationReport>)> = stream::iter(files)
        .map(|path| async move {
            let result = read_report(&path).await;
            (path, result)
        })
        .buffered(config.concurrency())
        .collect()
        .await;

    let mut loaded = Loaded::default();
    for (path, result) in results {
        match result {
            Ok(report) => {
                debug!(
                    "Loaded report '{}'{} with {} results",
                    report.name,
                    report
                        .variant
                        .as_deref()
                        .map(|v| format!(" ({})", v))
                        .unwrap_or_default(),
                    report.tests.len()
                );
                loaded.items.push(report);
            }
            Err(e) => {
                warn!("{}; ignored", e);
                loaded.warnings.push(LoadWarning::from_error(path, &e));
            }
        }
    }

    sort_by_name(&mut loaded.items);
    info!(
        "Loaded {} implementation reports ({} ignored)",
        loaded.items.len(),
        loaded.warnings.len()
    );
    Ok(loaded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_report_strips_nulls() {
        let report = parse_report(r#"{"name":"A","tests":{"t1":true,"t2":null,"t3":false}}"#)
            .unwrap();
        assert_eq!(report.tests.len(), 2);
        assert!(!report.tests.contains_key("t2"));
        assert!(!report.is_variant());
    }

    #[test]
    fn test_parse_report_requires_name_and_tests() {
        assert!(parse_report(r#"{"tests":{}}"#).is_err());
        assert!(parse_report(r#"{"name":"A"}"#).is_err());
    }

    #[test]
    fn test_unusable_ref_keeps_results() {
        let report = parse_report(
            r#"{"name":"Engine","variant":"ios","ref":"www.example.com/engine","tests":{"t1":true,"t2":false}}"#,
        )
        .unwrap();
        assert!(report.reference.is_none());
        assert_eq!(report.tests.len(), 2);

        for raw in ["\"\"", "42", "null"] {
            let json = format!(r#"{{"name":"A","ref":{},"tests":{{"t1":true}}}}"#, raw);
            let report = parse_report(&json).unwrap();
            assert!(report.reference.is_none());
            assert_eq!(report.tests.len(), 1);
        }
    }

    #[tokio::test]
    async fn test_report_with_relative_ref_is_loaded() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        std::fs::write(
            root.join("engine-ios.json"),
            r#"{"name":"Engine","variant":"ios","ref":"www.example.com/engine","tests":{"t1":true,"t2":false}}"#,
        )
        .unwrap();

        let loaded = load_implementation_reports(root, &ReportConfig::default())
            .await
            .unwrap();

        assert!(loaded.warnings.is_empty());
        assert_eq!(loaded.items.len(), 1);
        assert_eq!(loaded.items[0].tests.len(), 2);
        assert!(loaded.items[0].reference.is_none());
    }

    #[tokio::test]
    async fn test_bad_file_is_skipped_with_warning() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        std::fs::write(root.join("a.json"), r#"{"name":"Zeta","tests":{"t1":true}}"#).unwrap();
        std::fs::write(root.join("b.json"), "{ broken").unwrap();
        std::fs::write(root.join("c.json"), r#"{"name":"Alpha","tests":{"t1":false}}"#).unwrap();

        let loaded = load_implementation_reports(root, &ReportConfig::default())
            .await
            .unwrap();

        let names: Vec<&str> = loaded.items.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Zeta"]);
        assert_eq!(loaded.warnings.len(), 1);
        assert_eq!(loaded.warnings[0].path, root.join("b.json"));
    }

    #[tokio::test]
    async fn test_missing_reports_dir_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let result =
            load_implementation_reports(&temp_dir.path().join("missing"), &ReportConfig::default())
                .await;
        assert!(result.is_err());
    }
}
