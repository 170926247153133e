//! Particle count policy: sphere disc area × density × pixel ratio,
//! clamped to the tier's limits.

use orbfield_common::{Size, SizeTier};
use orbfield_config::schema::{DensityConfig, TierDensity};

/// Smallest container edge the engine will lay a sphere out in, CSS px.
pub const MIN_CONTAINER_PX: f64 = 28.0;

/// Computes particle count and sphere radius for one tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DensityPolicy {
    limits: TierDensity,
}

impl DensityPolicy {
    pub fn new(limits: TierDensity) -> Self {
        Self { limits }
    }

    pub fn for_tier(config: &DensityConfig, tier: SizeTier) -> Self {
        Self::new(*config.for_tier(tier))
    }

    pub fn limits(&self) -> &TierDensity {
        &self.limits
    }

    /// Sphere radius for a container, after clamping it to [`MIN_CONTAINER_PX`].
    pub fn radius(&self, container: Size) -> f64 {
        container.clamped_min(MIN_CONTAINER_PX).min_side() * self.limits.radius_fraction
    }

    /// Device pixel ratio limited to `[1, dpr_cap]`; non-finite input counts as 1.
    pub fn effective_dpr(&self, device_pixel_ratio: f64) -> f64 {
        let dpr = if device_pixel_ratio.is_finite() {
            device_pixel_ratio
        } else {
            1.0
        };
        dpr.max(1.0).min(self.limits.dpr_cap.max(1.0))
    }

    /// Number of particles for a container of `container` CSS px at `device_pixel_ratio`.
    ///
    /// Always within `[min_count, max_count]` and nondecreasing in container area.
    pub fn particle_count(&self, container: Size, device_pixel_ratio: f64) -> usize {
        let radius = self.radius(container);
        let area = std::f64::consts::PI * radius * radius;
        let raw = (area * self.limits.particles_per_area * self.effective_dpr(device_pixel_ratio))
            .round();

        let min = self.limits.min_count as f64;
        let max = self.limits.max_count as f64;
        let raw = if raw.is_finite() { raw } else { min };
        raw.max(min).min(max) as usize
    }
}

// =============================================================================
// Tests
// =============================================================================
