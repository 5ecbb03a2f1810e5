//! Repository setup orchestration.
//!
//! Drives one run: enumerate vendor archives, resolve and install each one,
//! then render and install the aggregate descriptor. Installs are strictly
//! sequential and the first failure ends the run; the descriptor is only
//! written once every archive is in the repository.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::context::SetupContext;
use crate::coordinate::Coordinate;
use crate::descriptor::DescriptorBuilder;
use crate::error::{Result, SetupError};
use crate::installer::{ArtifactInstaller, Packaging};
use crate::resolver::resolve_path;
use crate::source::SourceScanner;

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// Seed coordinates listed ahead of the installed archives.
    pub seeds: Vec<Coordinate>,
    /// Archives installed, in processing order.
    pub installed: Vec<Coordinate>,
    /// The descriptor's own coordinate; `source_file` is the written document.
    pub descriptor: Coordinate,
    pub repository_root: PathBuf,
}

impl RunReport {
    /// Every coordinate listed in the descriptor, in document order.
    pub fn dependencies(&self) -> impl Iterator<Item = &Coordinate> {
        self.seeds.iter().chain(self.installed.iter())
    }
}

/// Progress of a run. Any install failure moves straight to `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Enumerating,
    InstallingEntry { index: usize, total: usize },
    BuildingDescriptor,
    InstallingDescriptor,
    Done,
    Failed,
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunState::Idle => f.write_str("idle"),
            RunState::Enumerating => f.write_str("enumerating"),
            RunState::InstallingEntry { index, total } => {
                write!(f, "installing entry {}/{}", index + 1, total)
            }
            RunState::BuildingDescriptor => f.write_str("building descriptor"),
            RunState::InstallingDescriptor => f.write_str("installing descriptor"),
            RunState::Done => f.write_str("done"),
            RunState::Failed => f.write_str("failed"),
        }
    }
}

/// Entry point used by frontends.
#[derive(Debug)]
pub struct SetupOrchestrator<I> {
    installer: I,
}

impl<I: ArtifactInstaller> SetupOrchestrator<I> {
    pub fn new(installer: I) -> Self {
        Self { installer }
    }

    pub fn installer(&self) -> &I {
        &self.installer
    }

    pub fn run(&self, context: &SetupContext) -> Result<RunReport> {
        SetupRun::new(context).execute(&self.installer)
    }
}

/// State of a single run. Owns the descriptor accumulator; nothing outlives it.
#[derive(Debug)]
pub struct SetupRun<'a> {
    context: &'a SetupContext,
    scanner: SourceScanner,
    state: RunState,
    descriptor: DescriptorBuilder,
    installed: Vec<Coordinate>,
}

impl<'a> SetupRun<'a> {
    pub fn new(context: &'a SetupContext) -> Self {
        Self {
            context,
            scanner: SourceScanner::new(context.markers().to_vec()),
            state: RunState::Idle,
            descriptor: DescriptorBuilder::new(context.descriptor().clone()),
            installed: Vec::new(),
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Coordinates installed so far, in processing order.
    pub fn installed(&self) -> &[Coordinate] {
        &self.installed
    }

    /// Run every step once. A run that has left `Idle` cannot be executed again.
    pub fn execute<I: ArtifactInstaller>(&mut self, installer: &I) -> Result<RunReport> {
        if self.state != RunState::Idle {
            return Err(SetupError::configuration(format!(
                "Setup run cannot be executed again (state: {})",
                self.state
            )));
        }

        match self.drive(installer) {
            Ok(report) => Ok(report),
            Err(err) => {
                tracing::error!(state = %self.state, error = %err, "setup run aborted");
                self.transition(RunState::Failed);
                Err(err)
            }
        }
    }

    fn drive<I: ArtifactInstaller>(&mut self, installer: &I) -> Result<RunReport> {
        self.transition(RunState::Enumerating);
        let candidates = self.enumerate()?;
        prepare_repository(self.context.repository_root())?;

        for seed in self.context.seeds() {
            self.descriptor.push(seed.clone());
        }

        let total = candidates.len();
        for (index, path) in candidates.iter().enumerate() {
            self.transition(RunState::InstallingEntry { index, total });
            let coordinate = resolve_path(path);
            installer.install(&coordinate, path, Packaging::Archive)?;
            self.descriptor.push(coordinate.clone());
            self.installed.push(coordinate);
        }

        self.transition(RunState::BuildingDescriptor);
        let document = self.descriptor.write(self.context.work_dir())?;

        self.transition(RunState::InstallingDescriptor);
        let descriptor = self.descriptor.install(installer, &document)?;

        self.transition(RunState::Done);
        tracing::info!(
            installed = self.installed.len(),
            %descriptor,
            "local repository ready"
        );

        Ok(RunReport {
            seeds: self.context.seeds().to_vec(),
            installed: self.installed.clone(),
            descriptor,
            repository_root: self.context.repository_root().to_path_buf(),
        })
    }

    fn enumerate(&self) -> Result<Vec<PathBuf>> {
        let source_dir = self.context.source_dir();
        if !source_dir.is_dir() {
            return Err(SetupError::configuration(format!(
                "Source directory not found: {}",
                source_dir.display()
            )));
        }
        let source_dir = source_dir
            .canonicalize()
            .map_err(|e| SetupError::io("Failed to resolve source directory", source_dir, e))?;

        let candidates = self.scanner.scan(&source_dir)?;
        if candidates.is_empty() {
            tracing::warn!(
                dir = %source_dir.display(),
                "no vendor archives found; descriptor will only list seed dependencies"
            );
        }
        Ok(candidates)
    }

    fn transition(&mut self, next: RunState) {
        tracing::debug!(from = %self.state, to = %next, "run state");
        self.state = next;
    }
}

fn prepare_repository(root: &Path) -> Result<()> {
    std::fs::create_dir_all(root)
        .map_err(|e| SetupError::io("Failed to create repository directory", root, e))
}
