//! Particle gradient colors.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Color of the first particle in the lattice.
    pub start: String,
    /// Color of the last particle in the lattice.
    pub end: String,
    /// Disc painted behind the favicon sphere.
    pub backdrop: String,
    /// Maximum random brightness deviation per particle (0 disables).
    pub brightness_jitter: f64,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            start: "#0066ff".into(),
            end: "#00d4aa".into(),
            backdrop: "#000000".into(),
            brightness_jitter: 0.12,
        }
    }
}
