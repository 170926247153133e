//! Core TOML config loading: read from path or platform default.

use crate::schema::OrbfieldConfig;
use crate::validation;
use orbfield_common::ConfigError;
use std::path::Path;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};

/// Parse config TOML text. Missing fields take their defaults.
pub fn parse_str(content: &str) -> Result<OrbfieldConfig, ConfigError> {
    toml::from_str(content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))
}

/// Load config from a specific TOML file path.
///
/// If validation fails, a warning is logged and the parsed config is
/// returned as-is; callers that need a valid config run
/// [`validation::validate`] themselves.
pub fn load_from_path(path: &Path) -> Result<OrbfieldConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config = parse_str(&content)?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}");
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On Linux: `~/.config/orbfield/config.toml`
/// On macOS: `~/Library/Application Support/orbfield/config.toml`
///
/// If the file does not exist, writes the commented template and returns defaults.
pub fn load_default() -> Result<OrbfieldConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(&path)?;
            Ok(OrbfieldConfig::default())
        }
        Err(e) => Err(e),
    }
}
