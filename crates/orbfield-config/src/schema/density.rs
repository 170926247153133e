//! Particle density per instance-size tier.

use orbfield_common::SizeTier;
use serde::{Deserialize, Serialize};

/// Density limits for one tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierDensity {
    pub min_count: u32,
    pub max_count: u32,
    /// Particles per CSS px² of sphere disc area.
    pub particles_per_area: f64,
    /// Upper bound applied to the device pixel ratio.
    pub dpr_cap: f64,
    /// Sphere radius as a fraction of `min(width, height)`.
    pub radius_fraction: f64,
}

impl TierDensity {
    pub fn logo() -> Self {
        Self {
            min_count: 220,
            max_count: 1800,
            particles_per_area: 0.095,
            dpr_cap: 2.0,
            radius_fraction: 0.45,
        }
    }

    pub fn hero() -> Self {
        Self {
            min_count: 220,
            max_count: 3600,
            particles_per_area: 0.16,
            dpr_cap: 2.0,
            radius_fraction: 0.45,
        }
    }

    pub fn favicon() -> Self {
        Self {
            min_count: 200,
            max_count: 1400,
            particles_per_area: 0.085,
            dpr_cap: 2.0,
            radius_fraction: 0.45,
        }
    }
}

/// A tier table as written in TOML; absent keys keep that tier's defaults.
#[derive(Debug, Clone, Default, Deserialize)]
struct TierDensityOverrides {
    min_count: Option<u32>,
    max_count: Option<u32>,
    particles_per_area: Option<f64>,
    dpr_cap: Option<f64>,
    radius_fraction: Option<f64>,
}

impl TierDensityOverrides {
    fn apply(self, base: TierDensity) -> TierDensity {
        TierDensity {
            min_count: self.min_count.unwrap_or(base.min_count),
            max_count: self.max_count.unwrap_or(base.max_count),
            particles_per_area: self.particles_per_area.unwrap_or(base.particles_per_area),
            dpr_cap: self.dpr_cap.unwrap_or(base.dpr_cap),
            radius_fraction: self.radius_fraction.unwrap_or(base.radius_fraction),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RawDensityConfig {
    #[serde(default)]
    logo: TierDensityOverrides,
    #[serde(default)]
    hero: TierDensityOverrides,
    #[serde(default)]
    favicon: TierDensityOverrides,
}

impl From<RawDensityConfig> for DensityConfig {
    fn from(raw: RawDensityConfig) -> Self {
        Self {
            logo: raw.logo.apply(TierDensity::logo()),
            hero: raw.hero.apply(TierDensity::hero()),
            favicon: raw.favicon.apply(TierDensity::favicon()),
        }
    }
}

/// `[density.logo]`, `[density.hero]`, `[density.favicon]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "RawDensityConfig")]
pub struct DensityConfig {
    pub logo: TierDensity,
    pub hero: TierDensity,
    pub favicon: TierDensity,
}

impl Default for DensityConfig {
    fn default() -> Self {
        Self {
            logo: TierDensity::logo(),
            hero: TierDensity::hero(),
            favicon: TierDensity::favicon(),
        }
    }
}

impl DensityConfig {
    pub fn for_tier(&self, tier: SizeTier) -> &TierDensity {
        match tier {
            SizeTier::Logo => &self.logo,
            SizeTier::Hero => &self.hero,
            SizeTier::Favicon => &self.favicon,
        }
    }
}
