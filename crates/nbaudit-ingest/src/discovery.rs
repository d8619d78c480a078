//! Locating the notebooks to audit.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, thiserror::Error)]
pub enum DiscoveryError {
    #[error("notebook directory {0} does not exist or is not a directory")]
    NotADirectory(PathBuf),
}

/// Files directly inside `dir` whose extension is `extension`, sorted by file name.
///
/// The extension is compared case-insensitively and may be given with or
/// without its leading dot. Subdirectories (e.g. `.ipynb_checkpoints`) are not
/// searched.
pub fn discover_notebooks(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, DiscoveryError> {
    if !dir.is_dir() {
        return Err(DiscoveryError::NotADirectory(dir.to_path_buf()));
    }

    let wanted = extension.trim_start_matches('.').to_lowercase();
    let mut found = Vec::new();

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                tracing::debug!(error = %err, "skipping unreadable directory entry");
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let matches_ext = entry
            .path()
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase() == wanted)
            .unwrap_or(false);

        if matches_ext {
            found.push(entry.into_path());
        }
    }

    tracing::debug!(dir = %dir.display(), count = found.len(), "discovered notebooks");
    Ok(found)
}
