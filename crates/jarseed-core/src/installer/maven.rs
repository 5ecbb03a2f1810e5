//! Installer backed by `mvn install:install-file`.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::coordinate::Coordinate;
use crate::error::{Result, SetupError};

use super::{ArtifactInstaller, Packaging};

const INSTALL_GOAL: &str = "install:install-file";

/// Runs the package manager once per artifact against a local repository root.
#[derive(Debug, Clone)]
pub struct MavenInstaller {
    executable: PathBuf,
    repository_root: PathBuf,
}

impl MavenInstaller {
    pub fn new(executable: impl Into<PathBuf>, repository_root: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
            repository_root: repository_root.into(),
        }
    }

    /// Arguments passed to the executable for one install.
    pub fn install_args(
        &self,
        coordinate: &Coordinate,
        file: &Path,
        packaging: Packaging,
    ) -> Vec<String> {
        vec![
            INSTALL_GOAL.to_string(),
            format!("-DlocalRepositoryPath={}", self.repository_root.display()),
            "-DcreateChecksum=true".to_string(),
            format!("-Dpackaging={}", packaging.as_str()),
            format!("-Dfile={}", file.display()),
            format!("-DgroupId={}", coordinate.group),
            format!("-DartifactId={}", coordinate.artifact_id),
            format!("-Dversion={}", coordinate.version),
        ]
    }
}

impl ArtifactInstaller for MavenInstaller {
    fn install(&self, coordinate: &Coordinate, file: &Path, packaging: Packaging) -> Result<()> {
        tracing::info!(%coordinate, file = %file.display(), "installing");

        // Installer output goes to stderr; stdout carries the run report.
        let status = Command::new(&self.executable)
            .args(self.install_args(coordinate, file, packaging))
            .stdout(Stdio::from(std::io::stderr()))
            .status()
            .map_err(|source| SetupError::LaunchFailed {
                coordinate: coordinate.clone(),
                executable: self.executable.clone(),
                source,
            })?;

        if !status.success() {
            return Err(SetupError::InstallFailed {
                coordinate: coordinate.clone(),
                status: status.code(),
            });
        }

        Ok(())
    }
}
