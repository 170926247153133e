//! Per-tier dot styling: base size from radius, size and alpha ramps over depth.

use orbfield_common::SizeTier;

/// Linear ramp `min + depth · span` over normalized depth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ramp {
    pub min: f64,
    pub span: f64,
}

impl Ramp {
    pub const fn new(min: f64, span: f64) -> Self {
        Self { min, span }
    }

    pub fn at(&self, depth: f64) -> f64 {
        self.min + depth.clamp(0.0, 1.0) * self.span
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierStyle {
    /// Lower bound of the base dot radius, CSS px.
    pub min_base_size: f64,
    /// Base dot radius as a fraction of the sphere radius.
    pub base_size_ratio: f64,
    pub size: Ramp,
    pub alpha: Ramp,
    /// Paint a backdrop disc behind the cloud.
    pub backdrop: bool,
}

impl TierStyle {
    pub fn for_tier(tier: SizeTier) -> Self {
        match tier {
            SizeTier::Logo => Self {
                min_base_size: 0.34,
                base_size_ratio: 0.013,
                size: Ramp::new(0.75, 1.05),
                alpha: Ramp::new(0.58, 0.32),
                backdrop: false,
            },
            // dense hero cloud: smaller dots
            SizeTier::Hero => Self {
                min_base_size: 0.14,
                base_size_ratio: 0.0065,
                size: Ramp::new(0.58, 0.78),
                alpha: Ramp::new(0.58, 0.32),
                backdrop: false,
            },
            // slightly larger so dots survive downscaling
            SizeTier::Favicon => Self {
                min_base_size: 0.26,
                base_size_ratio: 0.012,
                size: Ramp::new(0.72, 1.04),
                alpha: Ramp::new(0.6, 0.4),
                backdrop: true,
            },
        }
    }

    pub fn base_size(&self, radius: f64) -> f64 {
        (radius * self.base_size_ratio).max(self.min_base_size)
    }
}
