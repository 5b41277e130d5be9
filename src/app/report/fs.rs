//! Directory listing shared by the corpus and report readers

use std::path::{Path, PathBuf};

use tracing::debug;

use super::config::ReportConfig;
use crate::errors::{ReportError, ReportResult};

/// Kind of directory entry to keep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// List the entries of `dir` of the given kind, skipping names the config
/// excludes. Results are sorted by path.
///
/// Failure to open the directory itself is fatal; an entry whose metadata
/// cannot be read is skipped.
pub async fn list_dir(
    dir: &Path,
    kind: EntryKind,
    config: &ReportConfig,
) -> ReportResult<Vec<PathBuf>> {
    let meta = tokio::fs::metadata(dir)
        .await
        .map_err(|source| ReportError::DirectoryNotAccessible {
            path: dir.to_path_buf(),
            source,
        })?;
    if !meta.is_dir() {
        return Err(ReportError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let mut entries =
        tokio::fs::read_dir(dir)
            .await
            .map_err(|source| ReportError::DirectoryNotAccessible {
                path: dir.to_path_buf(),
                source,
            })?;

    let mut paths = Vec::new();
    loop {
        let entry = match entries.next_entry().await {
            Ok(Some(entry)) => entry,
            Ok(None) => break,
            Err(source) => {
                return Err(ReportError::DirectoryNotAccessible {
                    path: dir.to_path_buf(),
                    source,
                })
            }
        };

        let name = entry.file_name();
        let name = name.to_string_lossy();
        if config.is_excluded(&name) {
            debug!("Skipping excluded entry {}", name);
            continue;
        }

        let path = entry.path();
        // Follows symlinks, unlike DirEntry::file_type
        let entry_meta = match tokio::fs::metadata(&path).await {
            Ok(meta) => meta,
            Err(e) => {
                debug!("Skipping {}: {}", path.display(), e);
                continue;
            }
        };

        let keep = match kind {
            EntryKind::File => entry_meta.is_file(),
            EntryKind::Directory => entry_meta.is_dir(),
        };
        if keep {
            paths.push(path);
        }
    }

    paths.sort();
    Ok(paths)
}

/// Last path component as a string
pub fn entry_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
