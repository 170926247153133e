//! Rendering seed and logging configuration.

use serde::{Deserialize, Serialize};

/// `[render]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Seed for one-time particle attributes (size, phase, brightness).
    pub seed: u64,
    /// Amplitude of the per-particle alpha shimmer (0 disables).
    pub twinkle: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            seed: 0x5eed,
            twinkle: 0.12,
        }
    }
}

/// Log level.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
#[derive(Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// The `tracing` filter directive for this level.
    pub fn directive(&self) -> &'static str {
        match self {
            LogLevel::Trace => "orbfield=trace",
            LogLevel::Debug => "orbfield=debug",
            LogLevel::Info => "orbfield=info",
            LogLevel::Warning => "orbfield=warn",
            LogLevel::Error => "orbfield=error",
        }
    }
}

/// `[logging]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
