//! Test corpus structure check
//!
//! Walks a MiniApp test corpus and checks each test directory for its
//! JSON-LD descriptor and for a `src/manifest.json` that decodes as a
//! [`MiniAppManifest`]. Packaged `.ma` files found at the corpus root are
//! listed only; their archive format is not verified.

use std::path::{Path, PathBuf};

use futures::stream::{self, StreamExt};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::app::manifest::{load_manifest, AppManifest, MiniAppManifest};
use crate::app::report::fs::{entry_name, list_dir, EntryKind};
use crate::app::report::ReportConfig;
use crate::constants::corpus::{MANIFEST_FILE, PACKAGE_EXTENSION, SOURCE_DIR};
use crate::errors::{ManifestError, ReportResult};

/// State of the manifest of one test
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ManifestStatus {
    /// Decoded successfully
    Valid { app_id: String },
    /// No `src/manifest.json`
    Missing,
    /// Present but unreadable or not matching the schema
    Invalid { reason: String },
}

impl ManifestStatus {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid { .. })
    }
}

/// Result of checking one test directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FolderCheck {
    pub name: String,
    pub path: PathBuf,
    pub has_metadata: bool,
    pub manifest: ManifestStatus,
}

impl FolderCheck {
    pub fn is_ok(&self) -> bool {
        self.has_metadata && self.manifest.is_valid()
    }
}

/// Result of checking a whole corpus
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CorpusCheck {
    pub folders: Vec<FolderCheck>,
    /// Packaged MiniApps found at the corpus root, not verified
    pub packages: Vec<PathBuf>,
}

impl CorpusCheck {
    pub fn failures(&self) -> impl Iterator<Item = &FolderCheck> {
        self.folders.iter().filter(|f| !f.is_ok())
    }

    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }
}

async fn check_folder(dir: PathBuf, config: &ReportConfig) -> FolderCheck {
    let has_metadata = tokio::fs::metadata(dir.join(&config.metadata_file))
        .await
        .map(|m| m.is_file())
        .unwrap_or(false);

    let manifest_path = dir.join(SOURCE_DIR).join(MANIFEST_FILE);
    let manifest = match load_manifest::<MiniAppManifest, _>(&manifest_path).await {
        Ok(manifest) => ManifestStatus::Valid {
            app_id: manifest.id().to_string(),
        },
        Err(ManifestError::NotFound { .. }) => ManifestStatus::Missing,
        Err(e) => ManifestStatus::Invalid {
            reason: e.to_string(),
        },
    };

    FolderCheck {
        name: entry_name(&dir),
        path: dir,
        has_metadata,
        manifest,
    }
}

/// Check every test directory under `tests_dir`
///
/// # Errors
///
/// Returns `ReportError` only if `tests_dir` cannot be listed; problems in a
/// single test are recorded in the result.
pub async fn check_test_corpus(tests_dir: &Path, config: &ReportConfig) -> ReportResult<CorpusCheck> {
    let folders = list_dir(tests_dir, EntryKind::Directory, config).await?;
    let packages: Vec<PathBuf> = list_dir(tests_dir, EntryKind::File, config)
        .await?
        .into_iter()
        .filter(|p| p.extension().map_or(false, |ext| ext == PACKAGE_EXTENSION))
        .collect();

    debug!(
        "Checking {} test folders and {} packages",
        folders.len(),
        packages.len()
    );

    let folders: Vec<FolderCheck> = stream::iter(folders)
        .map(|dir| check_folder(dir, config))
        .buffered(config.concurrency())
        .collect()
        .await;

    for folder in folders.iter().filter(|f| !f.is_ok()) {
        warn!(
            "{}: metadata {}, manifest {:?}",
            folder.name,
            if folder.has_metadata { "present" } else { "missing" },
            folder.manifest
        );
    }

    let check = CorpusCheck { folders, packages };
    info!(
        "Checked {} test folders, {} with problems",
        check.folders.len(),
        check.failure_count()
    );
    Ok(check)
}
