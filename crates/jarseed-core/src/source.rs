//! Enumeration of candidate vendor archives in a source directory.

use std::path::{Path, PathBuf};

use crate::error::{Result, SetupError};

/// Namespace substrings that mark a file as a vendor library.
pub const NAMESPACE_MARKERS: [&str; 3] = ["com.ibm", "org.eclipse", "net.oauth"];

/// Lists the files of a source directory that carry a recognized namespace.
#[derive(Debug, Clone)]
pub struct SourceScanner {
    markers: Vec<String>,
}

impl Default for SourceScanner {
    fn default() -> Self {
        Self::new(NAMESPACE_MARKERS.iter().map(|m| m.to_string()).collect())
    }
}

impl SourceScanner {
    pub fn new(markers: Vec<String>) -> Self {
        Self { markers }
    }

    /// Whether a file name contains at least one recognized marker.
    pub fn matches(&self, file_name: &str) -> bool {
        self.markers
            .iter()
            .any(|marker| file_name.contains(marker.as_str()))
    }

    /// Matching regular files directly inside `dir`, sorted by file name.
    pub fn scan(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let entries = std::fs::read_dir(dir)
            .map_err(|e| SetupError::io("Failed to read source directory", dir, e))?;

        let mut candidates = Vec::new();
        for entry in entries {
            let entry =
                entry.map_err(|e| SetupError::io("Failed to read source directory", dir, e))?;
            let file_name = entry.file_name().to_string_lossy().into_owned();

            if !self.matches(&file_name) {
                tracing::debug!(file = %file_name, "skipping file without namespace marker");
                continue;
            }

            let path = entry.path();
            if !path.is_file() {
                tracing::debug!(path = %path.display(), "skipping non-file entry");
                continue;
            }

            candidates.push(path);
        }

        candidates.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(candidates)
    }
}
