//! Shared fixtures for jarseed-core integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use jarseed_core::config::JarseedConfig;
use jarseed_core::context::{SetupContext, SetupOverrides};
use jarseed_core::coordinate::Coordinate;
use jarseed_core::error::{Result, SetupError};
use jarseed_core::installer::{ArtifactInstaller, Packaging};
use tempfile::TempDir;

/// One call observed by [`RecordingInstaller`].
#[derive(Debug, Clone)]
pub struct InstallCall {
    pub coordinate: Coordinate,
    pub file: PathBuf,
    pub packaging: Packaging,
    /// File content at install time.
    pub content: Vec<u8>,
}

/// Installer fake that records every call and can fail the n-th one.
#[derive(Debug, Default)]
pub struct RecordingInstaller {
    calls: RefCell<Vec<InstallCall>>,
    fail_on_call: Option<usize>,
}

impl RecordingInstaller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the call with this zero-based index (and record it as attempted).
    pub fn failing_on(call: usize) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            fail_on_call: Some(call),
        }
    }

    pub fn calls(&self) -> Vec<InstallCall> {
        self.calls.borrow().clone()
    }

    pub fn archive_calls(&self) -> Vec<InstallCall> {
        self.calls()
            .into_iter()
            .filter(|call| call.packaging == Packaging::Archive)
            .collect()
    }

    pub fn descriptor_calls(&self) -> Vec<InstallCall> {
        self.calls()
            .into_iter()
            .filter(|call| call.packaging == Packaging::Descriptor)
            .collect()
    }
}

impl ArtifactInstaller for RecordingInstaller {
    fn install(&self, coordinate: &Coordinate, file: &Path, packaging: Packaging) -> Result<()> {
        let index = self.calls.borrow().len();
        self.calls.borrow_mut().push(InstallCall {
            coordinate: coordinate.clone(),
            file: file.to_path_buf(),
            packaging,
            content: std::fs::read(file).unwrap_or_default(),
        });

        if self.fail_on_call == Some(index) {
            return Err(SetupError::InstallFailed {
                coordinate: coordinate.clone(),
                status: Some(1),
            });
        }
        Ok(())
    }
}

/// Temporary workspace with `work/`, `libs/` and a seeded context.
pub struct Workspace {
    pub temp: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp dir");
        std::fs::create_dir_all(temp.path().join("work")).expect("Failed to create work dir");
        std::fs::create_dir_all(temp.path().join("libs")).expect("Failed to create libs dir");
        Self { temp }
    }

    pub fn work_dir(&self) -> PathBuf {
        self.temp.path().join("work")
    }

    pub fn libs_dir(&self) -> PathBuf {
        self.temp.path().join("libs")
    }

    pub fn repo_dir(&self) -> PathBuf {
        self.temp.path().join("repo")
    }

    pub fn descriptor_path(&self) -> PathBuf {
        self.work_dir().join("rtc-java-api").join("pom.xml")
    }

    pub fn add_lib(&self, name: &str) -> PathBuf {
        let path = self.libs_dir().join(name);
        std::fs::write(&path, name.as_bytes()).expect("Failed to write archive");
        path
    }

    /// Context using the default relative layout (`../libs`, `../repo`).
    pub fn context(&self, seed: &str) -> SetupContext {
        let overrides = SetupOverrides {
            dependencies: Some(seed.to_string()),
            ..Default::default()
        };
        SetupContext::resolve(overrides, JarseedConfig::new(), self.work_dir())
            .expect("Failed to resolve context")
    }
}

pub const SEED: &str = "org.slf4j:slf4j-api:1.7.36";
