//! Run context: every setting a setup run needs, resolved once up front.

use std::path::{Path, PathBuf};

use crate::config::{ConfigStore, JarseedConfig};
use crate::coordinate::{Coordinate, parse_seed};
use crate::descriptor::{DEFAULT_DESCRIPTOR_VERSION, DESCRIPTOR_ARTIFACT, DESCRIPTOR_GROUP};
use crate::error::{Result, SetupError};
use crate::installer::default_executable;
use crate::source::NAMESPACE_MARKERS;

/// Default directory holding the vendor archives.
pub const DEFAULT_SOURCE_DIR: &str = "../libs";

/// Default local repository root.
pub const DEFAULT_REPOSITORY_ROOT: &str = "../repo";

/// Values supplied on the command line. `None` defers to config, then defaults.
#[derive(Debug, Clone, Default)]
pub struct SetupOverrides {
    pub dependencies: Option<String>,
    pub source_dir: Option<PathBuf>,
    pub repository_root: Option<PathBuf>,
    pub descriptor_version: Option<String>,
    pub executable: Option<String>,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone)]
pub struct SetupContext {
    work_dir: PathBuf,
    seeds: Vec<Coordinate>,
    source_dir: PathBuf,
    repository_root: PathBuf,
    descriptor: Coordinate,
    markers: Vec<String>,
    executable: String,
}

impl SetupContext {
    /// Merge overrides over the discovered config file over the defaults.
    pub fn load(
        overrides: SetupOverrides,
        config_path: Option<&Path>,
        work_dir: PathBuf,
    ) -> Result<Self> {
        let config = ConfigStore::discover(config_path, &work_dir)
            .and_then(|store| store.load())
            .map_err(|e| SetupError::configuration(format!("{:#}", e)))?;
        Self::resolve(overrides, config, work_dir)
    }

    pub fn resolve(
        overrides: SetupOverrides,
        config: JarseedConfig,
        work_dir: PathBuf,
    ) -> Result<Self> {
        let seeds = parse_seed(overrides.dependencies.as_deref().unwrap_or_default())?;

        let source_dir = overrides
            .source_dir
            .or(config.source.dir)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SOURCE_DIR));
        let repository_root = overrides
            .repository_root
            .or(config.repository.root)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_REPOSITORY_ROOT));

        let descriptor = Coordinate::new(
            config
                .descriptor
                .group
                .unwrap_or_else(|| DESCRIPTOR_GROUP.to_string()),
            config
                .descriptor
                .artifact
                .unwrap_or_else(|| DESCRIPTOR_ARTIFACT.to_string()),
            overrides
                .descriptor_version
                .or(config.descriptor.version)
                .unwrap_or_else(|| DEFAULT_DESCRIPTOR_VERSION.to_string()),
        );
        if descriptor.version.trim().is_empty() {
            return Err(SetupError::configuration(
                "Descriptor version must not be empty.",
            ));
        }

        let markers = config
            .source
            .markers
            .unwrap_or_else(|| NAMESPACE_MARKERS.iter().map(|m| m.to_string()).collect());
        let executable = overrides
            .executable
            .or(config.maven.executable)
            .unwrap_or_else(|| default_executable().to_string());

        Ok(Self {
            source_dir: work_dir.join(source_dir),
            repository_root: work_dir.join(repository_root),
            work_dir,
            seeds,
            descriptor,
            markers,
            executable,
        })
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    pub fn seeds(&self) -> &[Coordinate] {
        &self.seeds
    }

    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    pub fn repository_root(&self) -> &Path {
        &self.repository_root
    }

    /// Identity of the aggregate descriptor.
    pub fn descriptor(&self) -> &Coordinate {
        &self.descriptor
    }

    pub fn markers(&self) -> &[String] {
        &self.markers
    }

    pub fn executable(&self) -> &str {
        &self.executable
    }
}
