//! Rotation composition and perspective projection.
//!
//! Interactive rotation eases toward the controller's target; autonomous yaw
//! and a small idle wobble are layered on top before projecting.

use orbfield_config::schema::MotionConfig;

use crate::cloud::Vec3;
use crate::particle::Particle;

/// Idle wobble angular rates, rad/s.
const IDLE_RATE_X: f64 = 0.6;
const IDLE_RATE_Y: f64 = 0.4;

/// Smallest denominator in the perspective divide, as a fraction of the
/// focal length. Only reachable with extreme offsets.
const MIN_DEPTH_FRACTION: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionParams {
    /// Per-frame easing factor toward the target rotation, `(0, 1)`.
    pub smoothing: f64,
    /// Autonomous yaw, rad/s.
    pub auto_speed: f64,
    /// Constant pitch applied on top of the interactive rotation.
    pub base_tilt: f64,
    /// Peak idle wobble, rad.
    pub idle_amplitude: f64,
    /// Focal length as a multiple of the sphere radius.
    pub focal_ratio: f64,
}

impl ProjectionParams {
    pub fn from_config(motion: &MotionConfig) -> Self {
        Self {
            smoothing: motion.smoothing,
            auto_speed: motion.auto_speed,
            base_tilt: motion.base_tilt,
            idle_amplitude: motion.idle_amplitude,
            focal_ratio: motion.focal_ratio,
        }
    }
}

impl Default for ProjectionParams {
    fn default() -> Self {
        Self::from_config(&MotionConfig::default())
    }
}

/// A particle after projection, in CSS px relative to the surface origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedParticle {
    /// Index into the instance's particle array.
    pub index: usize,
    pub x: f64,
    pub y: f64,
    /// View-space depth; larger is closer to the viewer.
    pub z: f64,
    /// Perspective scale `f / (f - z)`.
    pub scale: f64,
    /// `z` normalized to `[0, 1]` over the sphere's depth range.
    pub depth: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Projector {
    params: ProjectionParams,
    rot_x: f64,
    rot_y: f64,
    auto_angle: f64,
}

impl Projector {
    pub fn new(params: ProjectionParams) -> Self {
        Self {
            params,
            rot_x: 0.0,
            rot_y: 0.0,
            auto_angle: 0.0,
        }
    }

    pub fn params(&self) -> &ProjectionParams {
        &self.params
    }

    /// Current smoothed interactive rotation `(rot_x, rot_y)`.
    pub fn rotation(&self) -> (f64, f64) {
        (self.rot_x, self.rot_y)
    }

    pub fn auto_angle(&self) -> f64 {
        self.auto_angle
    }

    /// One frame of easing toward `target` plus the autonomous yaw at `time` seconds.
    pub fn advance(&mut self, time: f64, target: (f64, f64)) {
        let s = self.params.smoothing;
        self.rot_x += (target.0 - self.rot_x) * s;
        self.rot_y += (target.1 - self.rot_y) * s;
        if time.is_finite() {
            self.auto_angle = self.params.auto_speed * time.max(0.0);
        }
    }

    /// Applied `(angle_x, angle_y)` at `time` seconds.
    pub fn angles(&self, time: f64) -> (f64, f64) {
        let t = if time.is_finite() { time } else { 0.0 };
        let amp = self.params.idle_amplitude;
        let idle_x = (t * IDLE_RATE_X).sin() * amp;
        let idle_y = (t * IDLE_RATE_Y).cos() * amp;
        (
            self.rot_x + self.params.base_tilt + idle_x,
            self.rot_y + self.auto_angle + idle_y,
        )
    }

    /// Project every particle around `center` (CSS px) into `out`, which is
    /// cleared first. Output order matches `particles`.
    pub fn project(
        &self,
        particles: &[Particle],
        center: (f64, f64),
        radius: f64,
        time: f64,
        out: &mut Vec<ProjectedParticle>,
    ) {
        out.clear();
        out.reserve(particles.len());

        let (ax, ay) = self.angles(time);
        let focal = self.params.focal_ratio * radius;
        let min_den = focal * MIN_DEPTH_FRACTION;
        let depth_range = radius.max(f64::EPSILON);

        for (index, p) in particles.iter().enumerate() {
            let r = radius + p.off;
            let pos = [
                p.dir[0] * r + p.drift[0],
                p.dir[1] * r + p.drift[1],
                p.dir[2] * r + p.drift[2],
            ];
            let [x, y, z] = rotate_xy(pos, ax, ay);

            let scale = focal / (focal - z).max(min_den);
            out.push(ProjectedParticle {
                index,
                x: center.0 + x * scale,
                y: center.1 + y * scale,
                z,
                scale,
                depth: ((z / depth_range + 1.0) * 0.5).clamp(0.0, 1.0),
            });
        }
    }
}

/// Rotate about X by `ax`, then about Y by `ay`.
pub fn rotate_xy(p: Vec3, ax: f64, ay: f64) -> Vec3 {
    let [x, y, z] = p;
    let (sx, cx) = ax.sin_cos();
    let y1 = y * cx - z * sx;
    let z1 = y * sx + z * cx;

    let (sy, cy) = ay.sin_cos();
    let x2 = x * cy + z1 * sy;
    let z2 = -x * sy + z1 * cy;
    [x2, y1, z2]
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cloud::{fibonacci_sphere, length};
    use orbfield_common::Color;
    use std::f64::consts::FRAC_PI_2;

    fn still() -> ProjectionParams {
        ProjectionParams {
            smoothing: 0.08,
            auto_speed: 0.0,
            base_tilt: 0.0,
            idle_amplitude: 0.0,
            focal_ratio: 4.0,
        }
    }

    fn particle(dir: Vec3) -> Particle {
        Particle {
            dir,
            off: 0.0,
            voff: 0.0,
            drift: [0.0; 3],
            color: Color::BLACK,
            size: 1.0,
            phase: 0.0,
            phase_speed: 0.0,
        }
    }

    #[test]
    fn rotation_preserves_length() {
        for d in fibonacci_sphere(100) {
            let r = rotate_xy(d, 0.7, -1.3);
            assert!((length(r) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn rotate_x_then_y_order() {
        // +y about X by 90° lands on +z, then about Y by 90° lands on +x.
        let r = rotate_xy([0.0, 1.0, 0.0], FRAC_PI_2, FRAC_PI_2);
        assert!((r[0] - 1.0).abs() < 1e-12, "{r:?}");
        assert!(r[1].abs() < 1e-12 && r[2].abs() < 1e-12, "{r:?}");
    }

    #[test]
    fn smoothing_eases_toward_target() {
        let mut p = Projector::new(still());
        p.advance(0.0, (0.4, -0.4));
        let (rx, ry) = p.rotation();
        assert!((rx - 0.032).abs() < 1e-12);
        assert!((ry + 0.032).abs() < 1e-12);
        for _ in 0..200 {
            p.advance(0.0, (0.4, -0.4));
        }
        let (rx, ry) = p.rotation();
        assert!((rx - 0.4).abs() < 1e-6 && (ry + 0.4).abs() < 1e-6);
    }

    #[test]
    fn auto_rotation_is_monotone_in_time() {
        let mut p = Projector::new(ProjectionParams::default());
        let mut prev = p.auto_angle();
        for frame in 1..300 {
            p.advance(frame as f64 / 60.0, (0.0, 0.0));
            assert!(p.auto_angle() >= prev);
            prev = p.auto_angle();
        }
        assert!(prev > 0.0);
    }

    #[test]
    fn front_point_is_larger_and_deeper() {
        let p = Projector::new(still());
        let ps = [particle([0.0, 0.0, 1.0]), particle([0.0, 0.0, -1.0])];
        let mut out = Vec::new();
        p.project(&ps, (50.0, 50.0), 40.0, 0.0, &mut out);
        assert_eq!(out.len(), 2);
        let (front, back) = (out[0], out[1]);
        assert!(front.z > back.z);
        assert!(front.scale > 1.0 && back.scale < 1.0);
        assert!((front.depth - 1.0).abs() < 1e-12);
        assert!(back.depth.abs() < 1e-12);
        // on-axis points project onto the center
        assert!((front.x - 50.0).abs() < 1e-12 && (front.y - 50.0).abs() < 1e-12);
    }

    #[test]
    fn equator_point_lands_at_radius() {
        let p = Projector::new(still());
        let mut out = Vec::new();
        p.project(&[particle([1.0, 0.0, 0.0])], (0.0, 0.0), 40.0, 0.0, &mut out);
        // z = 0 → scale = 1
        assert!((out[0].scale - 1.0).abs() < 1e-12);
        assert!((out[0].x - 40.0).abs() < 1e-12);
    }

    #[test]
    fn radial_offset_moves_point_outward() {
        let p = Projector::new(still());
        let mut pushed = particle([1.0, 0.0, 0.0]);
        pushed.off = 5.0;
        let mut out = Vec::new();
        p.project(&[pushed], (0.0, 0.0), 40.0, 0.0, &mut out);
        assert!((out[0].x - 45.0).abs() < 1e-12);
    }

    #[test]
    fn drift_shifts_projected_point() {
        let p = Projector::new(still());
        let mut drifted = particle([1.0, 0.0, 0.0]);
        drifted.drift = [0.0, 2.0, 0.0];
        let mut out = Vec::new();
        p.project(&[drifted], (0.0, 0.0), 40.0, 0.0, &mut out);
        assert!((out[0].x - 40.0).abs() < 1e-12);
        assert!((out[0].y - 2.0).abs() < 1e-12);
    }

    #[test]
    fn extreme_offset_stays_finite() {
        let p = Projector::new(still());
        let mut wild = particle([0.0, 0.0, 1.0]);
        wild.off = 1e6;
        let mut out = Vec::new();
        p.project(&[wild], (0.0, 0.0), 40.0, 0.0, &mut out);
        assert!(out[0].scale.is_finite() && out[0].x.is_finite());
    }

    #[test]
    fn idle_wobble_is_bounded() {
        let params = ProjectionParams {
            base_tilt: 0.0,
            auto_speed: 0.0,
            ..ProjectionParams::default()
        };
        let p = Projector::new(params);
        for frame in 0..1000 {
            let (ax, ay) = p.angles(frame as f64 / 30.0);
            assert!(ax.abs() <= params.idle_amplitude + 1e-12);
            assert!(ay.abs() <= params.idle_amplitude + 1e-12);
        }
    }

    #[test]
    fn project_reuses_output_buffer() {
        let p = Projector::new(still());
        let ps: Vec<_> = fibonacci_sphere(30).into_iter().map(particle).collect();
        let mut out = Vec::new();
        p.project(&ps, (0.0, 0.0), 10.0, 0.0, &mut out);
        p.project(&ps[..10], (0.0, 0.0), 10.0, 0.0, &mut out);
        assert_eq!(out.len(), 10);
        assert!(out.iter().enumerate().all(|(i, pp)| pp.index == i));
    }
}
