//! Error taxonomy for repository setup runs.
//!
//! Every variant is terminal for the run that raised it; there is no retry
//! and no partial-success mode.

use std::path::PathBuf;

use crate::coordinate::Coordinate;

pub type Result<T> = std::result::Result<T, SetupError>;

#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    /// Required input is absent or malformed. Detected before any side effect.
    #[error("{0}")]
    Configuration(String),

    /// A required external executable is not on the execution path.
    #[error("Required tool '{tool}' was not found on PATH. Please install it first.")]
    ToolNotFound { tool: String },

    /// The external installer rejected a coordinate.
    #[error("Failed to install {coordinate}{}", status_suffix(.status))]
    InstallFailed {
        coordinate: Coordinate,
        status: Option<i32>,
    },

    /// The external installer could not be started at all.
    #[error("Failed to install {coordinate}: could not run {}", .executable.display())]
    LaunchFailed {
        coordinate: Coordinate,
        executable: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{context}: {}", .path.display())]
    Io {
        context: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SetupError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    pub fn io(context: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            context,
            path: path.into(),
            source,
        }
    }

    /// Process exit code a frontend should use for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Configuration(_) => 1,
            Self::ToolNotFound { .. } => 3,
            Self::InstallFailed { .. } | Self::LaunchFailed { .. } | Self::Io { .. } => 4,
        }
    }
}

fn status_suffix(status: &Option<i32>) -> String {
    match status {
        Some(code) => format!(" (installer exited with status {code})"),
        None => " (installer was terminated by a signal)".to_string(),
    }
}
