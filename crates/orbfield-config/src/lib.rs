//! orbfield configuration system.
//!
//! TOML-based configuration for particle density, motion, palette and the
//! live favicon. All sections use defaults so partial configs work out of
//! the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use orbfield_config::{config_to_json, load_config};
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod colors;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{OrbfieldConfig, CONFIG_SCHEMA_VERSION};

use std::path::Path;

use orbfield_common::ConfigError;

/// Load `config.toml` from the OS config directory (creating a default if
/// none exists) and validate it.
pub fn load_config() -> Result<OrbfieldConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load and validate a config from an explicit path.
pub fn load_config_from(path: &Path) -> Result<OrbfieldConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &OrbfieldConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let config = OrbfieldConfig::default();
        let json = config_to_json(&config);
        assert!(json.contains("\"density\""));
        assert!(json.contains("\"motion\""));
        assert!(json.contains("\"palette\""));
        assert!(json.contains("\"favicon\""));
        assert!(json.contains("\"render\""));
        assert!(json.contains("\"logging\""));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = OrbfieldConfig::default();
        let json = config_to_json(&config);
        let parsed: OrbfieldConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.palette.start, "#0066ff");
        assert_eq!(parsed.density.hero, config.density.hero);
        assert_eq!(parsed.favicon.size_px, 64);
    }

    #[test]
    fn load_config_from_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[motion]\nsmoothing = 0.0\n").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
        assert!(err.to_string().contains("motion.smoothing"));
    }
}
