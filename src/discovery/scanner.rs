use crate::discovery::traits::Discovery;
use crate::model::DiscoveryError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Finds price lists in a single directory (non-recursive).
pub struct DirectoryScanner {
    pub marker: String,
    pub extension: String,
}

impl DirectoryScanner {
    pub fn new(marker: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            extension: extension.into(),
        }
    }

    fn matches(&self, path: &Path) -> bool {
        let name_ok = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.contains(&self.marker));
        let ext_ok = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(&self.extension));
        name_ok && ext_ok
    }
}

impl Discovery for DirectoryScanner {
    fn discover(&self, dir: &Path) -> Result<Vec<PathBuf>, DiscoveryError> {
        if !dir.is_dir() {
            return Err(DiscoveryError::DirectoryNotFound(dir.to_path_buf()));
        }

        let entries = std::fs::read_dir(dir).map_err(|e| DiscoveryError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| DiscoveryError::DirectoryRead {
                path: dir.to_path_buf(),
                source: e,
            })?;
            let path = entry.path();
            if path.is_file() && self.matches(&path) {
                files.push(path);
            }
        }

        if files.is_empty() {
            return Err(DiscoveryError::NoMatchingFiles {
                dir: dir.to_path_buf(),
                marker: self.marker.clone(),
                extension: self.extension.clone(),
            });
        }

        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        debug!(dir = %dir.display(), count = files.len(), "Discovered price lists");
        Ok(files)
    }
}
