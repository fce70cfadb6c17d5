use std::path::PathBuf;

use super::Config;
use crate::ConfigError;

/// Returns the config directory: `~/.config/stackwin/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".config").join("stackwin"))
}

/// Returns the config file path: `~/.config/stackwin/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Tries to load and parse `config.toml`.
///
/// The parsed config is clamped via [`Config::validate`] before it is
/// returned.
pub fn try_load() -> Result<Config, ConfigError> {
    let path = config_path().ok_or(ConfigError::NoHomeDir)?;
    let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;
    parse(&content).map_err(|source| ConfigError::Parse { path, source })
}

/// Loads the configuration from disk, falling back to defaults.
///
/// Non-existent files silently return defaults; other errors are logged.
pub fn load() -> Config {
    match try_load() {
        Ok(config) => config,
        Err(e) if e.is_not_found() => Config::default(),
        Err(e) => {
            tracing::warn!("falling back to default config: {e}");
            Config::default()
        }
    }
}

pub(super) fn parse(content: &str) -> Result<Config, toml::de::Error> {
    let mut config: Config = toml::from_str(content)?;
    config.validate();
    Ok(config)
}
