use std::fs;
use std::path::{Path, PathBuf};

use super::core::CodelabConfig;
use crate::errors::ConfigError;

/// File name searched for in the working directory and its ancestors.
pub const CONFIG_FILE_NAME: &str = ".codelab.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to parse and validate config from TOML string
pub fn parse_and_validate_config(
    contents: &str,
    path: &Path,
) -> Result<CodelabConfig, ConfigError> {
    let config = toml::from_str::<CodelabConfig>(contents).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    config.validate()?;
    Ok(config)
}

/// Load an explicitly requested config file. Every failure is an error.
pub fn load_config_from(path: &Path) -> Result<CodelabConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_and_validate_config(&contents, path)?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Try one discovered location; failures are logged and skipped.
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<CodelabConfig> {
    match load_config_from(config_path) {
        Ok(config) => Some(config),
        Err(ConfigError::Read { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
            None
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Per-user config location, e.g. `~/.config/codelab/config.toml`.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("codelab").join("config.toml"))
}

/// Search `start` and its ancestors, then the user config directory.
pub fn discover_config(start: PathBuf) -> CodelabConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .chain(user_config_path())
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            CodelabConfig::default()
        })
}

/// Resolve the effective configuration.
///
/// An explicit path must load cleanly. Without one, the working directory
/// hierarchy is searched and defaults are used when nothing usable is found.
pub fn load_config(explicit: Option<&Path>) -> Result<CodelabConfig, ConfigError> {
    if let Some(path) = explicit {
        return load_config_from(path);
    }

    match std::env::current_dir() {
        Ok(current) => Ok(discover_config(current)),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            Ok(CodelabConfig::default())
        }
    }
}

/// Contents written by `codelab init`.
pub fn default_config_toml() -> String {
    let body = toml::to_string_pretty(&CodelabConfig::default()).unwrap_or_default();
    format!("# codelab configuration\n\n{}", body)
}
