//! Config store for locating and loading jarseed.toml.

use std::path::{Path, PathBuf};

use super::paths::{global_config_path, project_config_path};
use super::{JarseedConfig, parser};

#[derive(Debug, Clone)]
pub struct ConfigStore {
    config_path: Option<PathBuf>,
}

impl ConfigStore {
    /// Locate the config file for a run.
    ///
    /// An explicit path must exist. Otherwise the project file is preferred
    /// over the global one; with neither present the defaults apply.
    pub fn discover(explicit: Option<&Path>, work_dir: &Path) -> anyhow::Result<Self> {
        Self::discover_with_global(explicit, work_dir, global_config_path())
    }

    pub fn discover_with_global(
        explicit: Option<&Path>,
        work_dir: &Path,
        global: Option<PathBuf>,
    ) -> anyhow::Result<Self> {
        if let Some(path) = explicit {
            if !path.is_file() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            return Ok(Self::from_path(path));
        }

        let project = project_config_path(work_dir);
        if project.is_file() {
            return Ok(Self::from_path(project));
        }

        Ok(Self {
            config_path: global.filter(|path| path.is_file()),
        })
    }

    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: Some(path.into()),
        }
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    pub fn load(&self) -> anyhow::Result<JarseedConfig> {
        match &self.config_path {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading config");
                parser::parse_jarseed_toml(path)
            }
            None => Ok(JarseedConfig::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn explicit_path_must_exist() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing.toml");
        let result = ConfigStore::discover_with_global(Some(&missing), temp.path(), None);
        assert!(result.is_err());
    }

    #[test]
    fn project_file_wins_over_global() {
        let temp = TempDir::new().unwrap();
        let global = temp.path().join("global.toml");
        std::fs::write(&global, "[descriptor]\nversion = \"1\"\n").unwrap();
        std::fs::write(
            temp.path().join("jarseed.toml"),
            "[descriptor]\nversion = \"2\"\n",
        )
        .unwrap();

        let store =
            ConfigStore::discover_with_global(None, temp.path(), Some(global)).unwrap();
        let config = store.load().unwrap();
        assert_eq!(config.descriptor.version.as_deref(), Some("2"));
    }

    #[test]
    fn falls_back_to_global_then_defaults() {
        let temp = TempDir::new().unwrap();
        let global = temp.path().join("global.toml");

        let store =
            ConfigStore::discover_with_global(None, temp.path(), Some(global.clone())).unwrap();
        assert!(store.config_path().is_none());
        assert_eq!(store.load().unwrap(), JarseedConfig::new());

        std::fs::write(&global, "[maven]\nexecutable = \"mvnw\"\n").unwrap();
        let store = ConfigStore::discover_with_global(None, temp.path(), Some(global)).unwrap();
        assert_eq!(
            store.load().unwrap().maven.executable.as_deref(),
            Some("mvnw")
        );
    }
}
