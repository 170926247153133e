//! Live favicon settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FaviconConfig {
    pub enabled: bool,
    /// Icon edge length in CSS pixels.
    pub size_px: u32,
    /// Minimum milliseconds between two icon publishes.
    pub throttle_ms: u64,
}

impl Default for FaviconConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            size_px: 64,
            throttle_ms: 400,
        }
    }
}
