//! Installing files into the local repository under explicit coordinates.
//!
//! The orchestrator only sees [`ArtifactInstaller`]; [`MavenInstaller`] is the
//! production implementation backed by the external package manager.

pub mod maven;
pub mod tool;

use std::fmt;
use std::path::Path;

use crate::coordinate::Coordinate;
use crate::error::Result;

pub use maven::MavenInstaller;
pub use tool::{default_executable, ensure_tool};

/// How the installed file is packaged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Packaging {
    /// A binary library archive.
    Archive,
    /// A descriptor-only document listing dependencies.
    Descriptor,
}

impl Packaging {
    /// Packaging name understood by the package manager.
    pub fn as_str(self) -> &'static str {
        match self {
            Packaging::Archive => "jar",
            Packaging::Descriptor => "pom",
        }
    }
}

impl fmt::Display for Packaging {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Installs one local file under the given coordinate.
///
/// Implementations block until the install has finished. Any failure is
/// reported as [`crate::error::SetupError::InstallFailed`] and is fatal for
/// the run.
pub trait ArtifactInstaller {
    fn install(&self, coordinate: &Coordinate, file: &Path, packaging: Packaging) -> Result<()>;
}

impl<T: ArtifactInstaller + ?Sized> ArtifactInstaller for &T {
    fn install(&self, coordinate: &Coordinate, file: &Path, packaging: Packaging) -> Result<()> {
        (**self).install(coordinate, file, packaging)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packaging_names() {
        assert_eq!(Packaging::Archive.as_str(), "jar");
        assert_eq!(Packaging::Descriptor.to_string(), "pom");
    }
}
