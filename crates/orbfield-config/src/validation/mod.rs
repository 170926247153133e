//! Full configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod density;
mod helpers;
mod misc;
mod motion;


use crate::schema::OrbfieldConfig;
use orbfield_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &OrbfieldConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    density::validate_density(&mut errors, config);
    motion::validate_motion(&mut errors, config);
    misc::validate_palette(&mut errors, config);
    misc::validate_favicon(&mut errors, config);
    misc::validate_render(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
