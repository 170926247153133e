//! Configuration schema types for orbfield.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields fall back to the shipped defaults.

mod density;
mod favicon;
mod motion;
mod palette;
mod system;

pub use density::*;
pub use favicon::*;
pub use motion::*;
pub use palette::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct OrbfieldConfig {
    pub density: DensityConfig,
    pub motion: MotionConfig,
    pub palette: PaletteConfig,
    pub favicon: FaviconConfig,
    pub render: RenderConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
