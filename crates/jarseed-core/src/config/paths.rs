//! Config path resolution helpers.

use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "jarseed.toml";

/// `./jarseed.toml` relative to the working directory.
pub fn project_config_path(work_dir: &Path) -> PathBuf {
    work_dir.join(CONFIG_FILE_NAME)
}

/// `<config dir>/jarseed/jarseed.toml`, if the platform has a config dir.
pub fn global_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| global_config_path_in(&dir))
}

pub fn global_config_path_in(config_dir: &Path) -> PathBuf {
    config_dir.join("jarseed").join(CONFIG_FILE_NAME)
}
