//! Painter's-algorithm renderer: clear, optional backdrop, far-to-near dots.

use orbfield_common::{Color, SizeTier};
use orbfield_config::colors::color_or;
use orbfield_config::schema::OrbfieldConfig;

use crate::particle::Particle;
use crate::projector::ProjectedParticle;
use crate::style::TierStyle;
use crate::surface::DrawSurface;

/// Sort ascending by depth so the farthest particle is drawn first.
///
/// Stable: equal depths keep their projection order, so a frame is
/// deterministic given its inputs.
pub fn depth_sort(projected: &mut [ProjectedParticle]) {
    projected.sort_by(|a, b| a.z.total_cmp(&b.z));
}

/// Twinkle multiplier in `[1 - amount, 1]`.
pub fn twinkle(phase: f64, phase_speed: f64, time: f64, amount: f64) -> f64 {
    let wave = (phase + time * phase_speed).sin();
    if !wave.is_finite() {
        return 1.0;
    }
    1.0 - amount * 0.5 * (1.0 + wave)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Renderer {
    style: TierStyle,
    twinkle: f64,
    backdrop: Color,
}

impl Renderer {
    pub fn new(style: TierStyle, twinkle: f64, backdrop: Color) -> Self {
        Self {
            style,
            twinkle: twinkle.clamp(0.0, 1.0),
            backdrop,
        }
    }

    pub fn from_config(tier: SizeTier, config: &OrbfieldConfig) -> Self {
        Self::new(
            TierStyle::for_tier(tier),
            config.render.twinkle,
            color_or(&config.palette.backdrop, Color::BLACK),
        )
    }

    pub fn style(&self) -> &TierStyle {
        &self.style
    }

    /// Draw one frame. `projected` is depth-sorted in place; returns the
    /// number of dots submitted to the surface.
    pub fn draw<S: DrawSurface + ?Sized>(
        &self,
        surface: &mut S,
        particles: &[Particle],
        projected: &mut [ProjectedParticle],
        center: (f64, f64),
        radius: f64,
        time: f64,
    ) -> usize {
        surface.clear();
        if self.style.backdrop {
            surface.fill_circle(center.0, center.1, radius, self.backdrop, 1.0);
        }

        depth_sort(projected);

        let base = self.style.base_size(radius);
        let mut drawn = 0;
        for pp in projected.iter() {
            let Some(p) = particles.get(pp.index) else {
                continue;
            };
            let size = base * self.style.size.at(pp.depth) * p.size * pp.scale;
            let alpha = self.style.alpha.at(pp.depth)
                * twinkle(p.phase, p.phase_speed, time, self.twinkle);
            surface.fill_circle(pp.x, pp.y, size, p.color, alpha);
            drawn += 1;
        }
        drawn
    }
}

// =============================================================================
// Tests
// =============================================================================
