//! Presence check for the external package manager.

use std::path::PathBuf;

use crate::error::{Result, SetupError};

/// Package manager executable name for the current platform.
pub fn default_executable() -> &'static str {
    if cfg!(windows) { "mvn.cmd" } else { "mvn" }
}

/// Locate `tool` on PATH (or accept it as an explicit path).
pub fn ensure_tool(tool: &str) -> Result<PathBuf> {
    match which::which(tool) {
        Ok(path) => {
            tracing::debug!(tool, path = %path.display(), "found tool");
            Ok(path)
        }
        Err(_) => Err(SetupError::ToolNotFound {
            tool: tool.to_string(),
        }),
    }
}
