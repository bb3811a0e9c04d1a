use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use flatbox_types::{ConfigMap, CONFIG_KEY_PATH};
use serde::{Deserialize, Serialize};

/// Environment variable naming the location root.
pub const ROOT_ENV: &str = "FLATBOX_ROOT";

/// Contents of a `--config` file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    pub location: LocationConfig,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationConfig {
    pub path: PathBuf,
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("."),
        }
    }
}

impl CliConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("parsing config {}", path.display()))
    }
}

/// Pick the location root: `--root`, then `--config`, then `$FLATBOX_ROOT`,
/// then the current directory.
pub fn resolve_root(
    root: Option<&Path>,
    config: Option<&Path>,
    env_root: Option<String>,
) -> anyhow::Result<PathBuf> {
    if let Some(root) = root {
        return Ok(root.to_path_buf());
    }
    if let Some(config) = config {
        return Ok(CliConfig::load(config)?.location.path);
    }
    if let Some(env_root) = env_root.filter(|r| !r.is_empty()) {
        return Ok(PathBuf::from(env_root));
    }
    Ok(LocationConfig::default().path)
}

/// Express a root directory as a dialing config.
pub fn config_map(root: &Path) -> anyhow::Result<ConfigMap> {
    let root = root
        .to_str()
        .with_context(|| format!("root is not valid UTF-8: {}", root.display()))?;
    Ok(ConfigMap::new().with(CONFIG_KEY_PATH, root))
}
