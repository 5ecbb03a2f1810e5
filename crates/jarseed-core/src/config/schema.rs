//! Configuration schema for jarseed.toml
//!
//! Every table and key is optional; missing values fall back to the
//! built-in defaults when the run context is assembled.

use anyhow::Context;
use serde::Deserialize;
use std::path::PathBuf;

/// Root configuration structure for jarseed.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JarseedConfig {
    #[serde(default)]
    pub source: SourceSection,

    #[serde(default)]
    pub repository: RepositorySection,

    #[serde(default)]
    pub descriptor: DescriptorSection,

    #[serde(default)]
    pub maven: MavenSection,
}

/// Where vendor archives are read from
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceSection {
    /// Directory containing the vendor archives
    #[serde(default)]
    pub dir: Option<PathBuf>,

    /// Namespace substrings a file name must contain to be installed
    #[serde(default)]
    pub markers: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RepositorySection {
    /// Local repository root the installer writes into
    #[serde(default)]
    pub root: Option<PathBuf>,
}

/// Identity of the generated aggregate descriptor
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DescriptorSection {
    #[serde(default)]
    pub group: Option<String>,

    #[serde(default)]
    pub artifact: Option<String>,

    #[serde(default)]
    pub version: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MavenSection {
    /// Package manager executable (name on PATH or explicit path)
    #[serde(default)]
    pub executable: Option<String>,
}

impl JarseedConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if let Some(markers) = &self.source.markers {
            if markers.is_empty() {
                anyhow::bail!("source.markers must list at least one namespace");
            }
            for marker in markers {
                require_non_empty(marker).context("Invalid source.markers entry")?;
            }
        }

        for (key, value) in [
            ("descriptor.group", &self.descriptor.group),
            ("descriptor.artifact", &self.descriptor.artifact),
            ("descriptor.version", &self.descriptor.version),
            ("maven.executable", &self.maven.executable),
        ] {
            if let Some(value) = value {
                require_non_empty(value).with_context(|| format!("Invalid {}", key))?;
            }
        }

        Ok(())
    }
}

fn require_non_empty(value: &str) -> anyhow::Result<()> {
    if value.trim().is_empty() {
        anyhow::bail!("value must not be empty");
    }
    Ok(())
}
