//! Organic surface displacement: a bounded noise target per particle,
//! followed by spring-damper integration of the radial offset, plus a
//! slow breathing pulse and a small drift across the surface.

use orbfield_config::schema::MotionConfig;

use crate::cloud::Vec3;
use crate::noise::NoiseField;
use crate::particle::Particle;

/// Breathing pulse angular rate, rad/s.
const PULSE_RATE: f64 = 0.9;

/// Integration constants for the radial offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplacementParams {
    /// Peak target offset as a fraction of the sphere radius.
    pub amplitude: f64,
    /// Spatial frequency applied to the unit direction.
    pub frequency: f64,
    /// Noise time drift per second. Also paces the surface drift.
    pub time_scale: f64,
    /// Extra amplitude gain at the top of the breathing pulse.
    pub pulse_amount: f64,
    /// Peak surface drift per axis as a fraction of the sphere radius.
    pub drift: f64,
    /// Fraction of the remaining distance added to the velocity each frame.
    pub spring: f64,
    /// Velocity retention per frame, `< 1`.
    pub damping: f64,
}

impl DisplacementParams {
    pub fn from_config(motion: &MotionConfig) -> Self {
        Self {
            amplitude: motion.amplitude,
            frequency: motion.frequency,
            time_scale: motion.time_scale,
            pulse_amount: motion.pulse_amount,
            drift: motion.drift,
            spring: motion.spring,
            damping: motion.damping,
        }
    }
}

impl Default for DisplacementParams {
    fn default() -> Self {
        Self::from_config(&MotionConfig::default())
    }
}

/// One spring-damper step toward `target`.
///
/// `voff += (target - off)·spring; voff *= damping; off += voff`
#[inline]
pub fn integrate(off: &mut f64, voff: &mut f64, target: f64, spring: f64, damping: f64) {
    *voff += (target - *off) * spring;
    *voff *= damping;
    *off += *voff;
}

/// Breathing phase in `[0, 1]` at `time` seconds.
pub fn pulse(time: f64) -> f64 {
    ((time * PULSE_RATE).sin() + 1.0) * 0.5
}

/// Drives every particle's radial offset from a swappable noise field.
pub struct OrganicDisplacementField {
    params: DisplacementParams,
    noise: Box<dyn NoiseField>,
}

impl OrganicDisplacementField {
    pub fn new(params: DisplacementParams, noise: Box<dyn NoiseField>) -> Self {
        Self { params, noise }
    }

    pub fn params(&self) -> &DisplacementParams {
        &self.params
    }

    /// Largest `|target|` at any time: `amplitude·(1 + pulse_amount)·radius`.
    pub fn peak(&self, radius: f64) -> f64 {
        self.params.amplitude * (1.0 + self.params.pulse_amount) * radius
    }

    /// Target offset for a direction at `time` seconds, within `±peak(radius)`.
    pub fn target(&self, dir: Vec3, time: f64, radius: f64) -> f64 {
        let f = self.params.frequency;
        let n = self
            .noise
            .sample([dir[0] * f, dir[1] * f, dir[2] * f], time * self.params.time_scale);
        let gain = 1.0 + self.params.pulse_amount * pulse(time);
        n * self.params.amplitude * gain * radius
    }

    /// Surface drift for a direction at `time` seconds, each axis within
    /// `±drift·radius`. A pure function of direction and time.
    pub fn drift(&self, dir: Vec3, time: f64, radius: f64) -> Vec3 {
        let t = time * self.params.time_scale;
        let k = self.params.drift * radius;
        [
            (t + dir[1] * 3.0).sin() * k,
            (t * 0.6 + dir[2] * 2.5).cos() * k,
            (t * 0.8 + dir[0] * 2.0).sin() * k,
        ]
    }

    /// Advance every particle by one frame.
    pub fn step(&self, particles: &mut [Particle], time: f64, radius: f64) {
        let DisplacementParams {
            spring, damping, ..
        } = self.params;
        for p in particles.iter_mut() {
            let target = self.target(p.dir, time, radius);
            integrate(&mut p.off, &mut p.voff, target, spring, damping);
            p.drift = self.drift(p.dir, time, radius);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
