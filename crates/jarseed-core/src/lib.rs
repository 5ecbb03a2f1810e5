//! Jarseed Core Library
//!
//! Bootstraps a file-system package repository from a directory of vendor
//! archives whose file names encode their coordinates, and publishes one
//! aggregate descriptor that downstream builds depend on.

pub mod config;
pub mod context;
pub mod coordinate;
pub mod descriptor;
pub mod error;
pub mod installer;
pub mod orchestration;
pub mod resolver;
pub mod source;

/// Re-exports of commonly used types
pub mod prelude {
    pub use crate::config::{ConfigStore, JarseedConfig};
    pub use crate::context::{SetupContext, SetupOverrides};
    pub use crate::coordinate::{Coordinate, parse_seed};
    pub use crate::descriptor::DescriptorBuilder;
    pub use crate::error::{Result, SetupError};
    pub use crate::installer::{ArtifactInstaller, MavenInstaller, Packaging, ensure_tool};
    pub use crate::orchestration::{RunReport, RunState, SetupOrchestrator, SetupRun};
    pub use crate::resolver::{resolve_file_name, resolve_path};
    pub use crate::source::SourceScanner;
}
