//! Aggregate descriptor (`pom.xml`) listing every installed coordinate.
//!
//! Downstream projects depend on the descriptor alone and receive all listed
//! artifacts transitively. The document is rendered once, after every archive
//! install has succeeded, and is never written incrementally.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::coordinate::Coordinate;
use crate::error::{Result, SetupError};
use crate::installer::{ArtifactInstaller, Packaging};

/// Group of the generated descriptor.
pub const DESCRIPTOR_GROUP: &str = "com.ibm.rtc";

/// Artifact id of the generated descriptor; also the name of its output directory.
pub const DESCRIPTOR_ARTIFACT: &str = "rtc-java-api";

/// Descriptor version used when none is supplied.
pub const DEFAULT_DESCRIPTOR_VERSION: &str = "6.0.1";

/// File name of the rendered descriptor.
pub const DESCRIPTOR_FILE: &str = "pom.xml";

const MODEL_VERSION: &str = "4.0.0";

/// Ordered accumulator of dependency coordinates plus the descriptor's own identity.
#[derive(Debug, Clone)]
pub struct DescriptorBuilder {
    identity: Coordinate,
    dependencies: Vec<Coordinate>,
}

impl DescriptorBuilder {
    pub fn new(identity: Coordinate) -> Self {
        Self {
            identity,
            dependencies: Vec::new(),
        }
    }

    /// Builder for the default descriptor identity at `version`.
    pub fn with_version(version: impl Into<String>) -> Self {
        Self::new(Coordinate::new(DESCRIPTOR_GROUP, DESCRIPTOR_ARTIFACT, version))
    }

    pub fn identity(&self) -> &Coordinate {
        &self.identity
    }

    pub fn dependencies(&self) -> &[Coordinate] {
        &self.dependencies
    }

    pub fn push(&mut self, coordinate: Coordinate) {
        self.dependencies.push(coordinate);
    }

    /// Serialize to the descriptor document text.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("<project>\n");
        let _ = writeln!(out, "   <modelVersion>{}</modelVersion>", MODEL_VERSION);
        let _ = writeln!(out, "   <groupId>{}</groupId>", escape(&self.identity.group));
        let _ = writeln!(
            out,
            "   <artifactId>{}</artifactId>",
            escape(&self.identity.artifact_id)
        );
        let _ = writeln!(out, "   <version>{}</version>", escape(&self.identity.version));
        out.push_str("   <packaging>pom</packaging>\n");
        out.push_str("   <dependencies>\n");
        for dep in &self.dependencies {
            out.push_str("      <dependency>\n");
            let _ = writeln!(out, "         <groupId>{}</groupId>", escape(&dep.group));
            let _ = writeln!(
                out,
                "         <artifactId>{}</artifactId>",
                escape(&dep.artifact_id)
            );
            let _ = writeln!(out, "         <version>{}</version>", escape(&dep.version));
            out.push_str("      </dependency>\n");
        }
        out.push_str("   </dependencies>\n");
        out.push_str("</project>\n");
        out
    }

    /// Path the descriptor is written to under `work_dir`.
    pub fn output_path(&self, work_dir: &Path) -> PathBuf {
        work_dir
            .join(&self.identity.artifact_id)
            .join(DESCRIPTOR_FILE)
    }

    /// Render and write the document, creating its directory if needed.
    pub fn write(&self, work_dir: &Path) -> Result<PathBuf> {
        let path = self.output_path(work_dir);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| SetupError::io("Failed to create descriptor directory", parent, e))?;
        }
        std::fs::write(&path, self.render())
            .map_err(|e| SetupError::io("Failed to write descriptor", &path, e))?;

        tracing::debug!(
            path = %path.display(),
            dependencies = self.dependencies.len(),
            "wrote descriptor"
        );
        Ok(path)
    }

    /// Install a written document as the descriptor artifact.
    ///
    /// Returns the descriptor's identity with its source file set.
    pub fn install<I: ArtifactInstaller>(
        &self,
        installer: &I,
        document: &Path,
    ) -> Result<Coordinate> {
        installer.install(&self.identity, document, Packaging::Descriptor)?;
        Ok(self.identity.clone().with_source_file(document))
    }
}

fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}
