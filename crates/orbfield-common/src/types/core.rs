use serde::{Deserialize, Serialize};
use std::fmt;

/// Width/height pair in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Both dimensions finite and strictly positive.
    pub fn is_drawable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Clamp each dimension to at least `min`; non-finite values become `min`.
    pub fn clamped_min(&self, min: f64) -> Self {
        let clamp = |v: f64| if v.is_finite() { v.max(min) } else { min };
        Self {
            width: clamp(self.width),
            height: clamp(self.height),
        }
    }

    pub fn min_side(&self) -> f64 {
        self.width.min(self.height)
    }
}

/// Identifies one mounted sphere inside a scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanceId(pub u32);

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "orb-{}", self.0)
    }
}

/// Instance-size tier. Picks density limits and drawing style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SizeTier {
    /// Small inline glyph (nav logo, avatars, feature icons).
    #[default]
    Logo,
    /// Large hero visual.
    Hero,
    /// Offscreen page icon.
    Favicon,
}

impl SizeTier {
    pub const ALL: [SizeTier; 3] = [SizeTier::Logo, SizeTier::Hero, SizeTier::Favicon];

    pub fn as_str(&self) -> &'static str {
        match self {
            SizeTier::Logo => "logo",
            SizeTier::Hero => "hero",
            SizeTier::Favicon => "favicon",
        }
    }
}

impl fmt::Display for SizeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
