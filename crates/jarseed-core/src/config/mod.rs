//! Optional file configuration (`jarseed.toml`).
//!
//! Lookup order: explicit `--config` path, `./jarseed.toml`, then the
//! per-user config directory. Values here sit between command-line flags and
//! the built-in defaults.

pub mod parser;
pub mod paths;
pub mod schema;
pub mod store;

pub use parser::{parse_jarseed_toml, parse_jarseed_toml_str};
pub use paths::{CONFIG_FILE_NAME, global_config_path, project_config_path};
pub use schema::{DescriptorSection, JarseedConfig, MavenSection, RepositorySection, SourceSection};
pub use store::ConfigStore;
