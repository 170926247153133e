//! Particle state and one-time visual attributes.

use std::f64::consts::TAU;

use orbfield_common::Color;
use orbfield_config::colors::color_or;
use orbfield_config::schema::PaletteConfig;
use rand::Rng;

use crate::cloud::Vec3;

/// One point of the cloud.
///
/// `dir` and the visual attributes never change after spawn; the radial
/// offset state (`off`, `voff`) is integrated each frame and `drift` is
/// recomputed from time.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Unit direction from the sphere center.
    pub dir: Vec3,
    /// Radial offset from the sphere surface, CSS px.
    pub off: f64,
    /// Radial offset velocity, CSS px per frame.
    pub voff: f64,
    /// Surface drift added after the radial offset, CSS px.
    pub drift: Vec3,
    pub color: Color,
    /// Size multiplier around 1.0.
    pub size: f64,
    /// Twinkle phase in radians.
    pub phase: f64,
    /// Twinkle angular speed in radians per second.
    pub phase_speed: f64,
}

/// Two-stop gradient indexed by lattice position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub start: Color,
    pub end: Color,
    pub brightness_jitter: f64,
}

impl Palette {
    pub fn from_config(config: &PaletteConfig) -> Self {
        let defaults = PaletteConfig::default();
        Self {
            start: color_or(&config.start, color_or(&defaults.start, Color::BLACK)),
            end: color_or(&config.end, color_or(&defaults.end, Color::BLACK)),
            brightness_jitter: config.brightness_jitter.clamp(0.0, 0.5),
        }
    }

    /// Gradient color at `t ∈ [0, 1]`.
    pub fn color_at(&self, t: f64) -> Color {
        self.start.lerp(self.end, t)
    }
}

/// Attach attributes to each direction. All randomness lives here.
pub fn spawn_particles<R: Rng + ?Sized>(
    directions: Vec<Vec3>,
    palette: &Palette,
    rng: &mut R,
) -> Vec<Particle> {
    let count = directions.len().max(1) as f64;
    let jitter = palette.brightness_jitter;

    directions
        .into_iter()
        .enumerate()
        .map(|(i, dir)| {
            let mut color = palette.color_at(i as f64 / count);
            if jitter > 0.0 {
                color = color.scaled(1.0 + rng.gen_range(-jitter..=jitter));
            }
            Particle {
                dir,
                off: 0.0,
                voff: 0.0,
                drift: [0.0; 3],
                color,
                size: rng.gen_range(0.85..1.15),
                phase: rng.gen_range(0.0..TAU),
                phase_speed: rng.gen_range(0.4..1.2),
            }
        })
        .collect()
}

// =============================================================================
// Tests
// =============================================================================
