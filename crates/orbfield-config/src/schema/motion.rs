//! Displacement physics and rotation settings.

use serde::{Deserialize, Serialize};

/// Which deterministic noise primitive drives surface displacement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum NoiseKind {
    #[default]
    Gradient,
    Layered,
}

/// `[motion]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    pub noise: NoiseKind,
    /// Peak radial displacement as a fraction of the sphere radius.
    pub amplitude: f64,
    /// Spatial frequency applied to unit directions before sampling noise.
    pub frequency: f64,
    /// Noise time drift per second.
    pub time_scale: f64,
    /// Breathing gain: the displacement amplitude swings between `1` and
    /// `1 + pulse_amount` times its base value.
    pub pulse_amount: f64,
    /// Peak surface drift per axis, as a fraction of the sphere radius.
    pub drift: f64,
    pub spring: f64,
    pub damping: f64,
    /// Per-frame exponential smoothing toward the pointer target.
    pub smoothing: f64,
    /// Maximum pointer-driven tilt in radians.
    pub max_tilt: f64,
    /// Autonomous yaw in radians per second.
    pub auto_speed: f64,
    /// Constant pitch added to every frame, radians.
    pub base_tilt: f64,
    /// Amplitude of the idle sinusoidal wobble, radians.
    pub idle_amplitude: f64,
    /// Focal length as a multiple of the sphere radius.
    pub focal_ratio: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            noise: NoiseKind::Gradient,
            amplitude: 0.06,
            frequency: 1.15,
            time_scale: 0.35,
            pulse_amount: 0.5,
            drift: 0.018,
            spring: 0.08,
            damping: 0.9,
            smoothing: 0.08,
            max_tilt: 0.4,
            auto_speed: 0.3,
            base_tilt: 0.25,
            idle_amplitude: 0.12,
            focal_ratio: 4.0,
        }
    }
}
