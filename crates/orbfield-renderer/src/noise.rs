//! Deterministic pseudo-noise primitives.
//!
//! Every field is a pure function of `(position, time)` and returns a value
//! in `[-1, 1]` for any input, including non-finite or huge coordinates.

use orbfield_config::schema::NoiseKind;

use crate::cloud::Vec3;

/// A bounded scalar field over space and time.
pub trait NoiseField {
    /// Sample the field. Must return a value in `[-1, 1]`.
    fn sample(&self, p: Vec3, time: f64) -> f64;
}

/// Build the configured noise primitive.
pub fn create_noise(kind: NoiseKind, seed: u32) -> Box<dyn NoiseField> {
    match kind {
        NoiseKind::Gradient => Box::new(GradientNoise::new(seed)),
        NoiseKind::Layered => Box::new(LayeredNoise::new(seed)),
    }
}

/// 3D gradient noise on an integer lattice, drifting along +y with time.
///
/// Lattice gradients come from an integer hash of the cell corner and the
/// seed, so no permutation table has to be allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradientNoise {
    seed: u32,
}

impl GradientNoise {
    pub fn new(seed: u32) -> Self {
        Self { seed }
    }

    /// Raw lattice noise at `p`, in `[-1, 1]`.
    pub fn at(&self, p: Vec3) -> f64 {
        if !p.iter().all(|c| c.is_finite()) {
            return 0.0;
        }

        let [x, y, z] = p;
        let (xf, yf, zf) = (x.floor(), y.floor(), z.floor());
        let (ix, iy, iz) = (xf as i64 as i32, yf as i64 as i32, zf as i64 as i32);
        let (fx, fy, fz) = (x - xf, y - yf, z - zf);
        let (u, v, w) = (fade(fx), fade(fy), fade(fz));

        let corner = |dx: i32, dy: i32, dz: i32| {
            let h = lattice_hash(
                ix.wrapping_add(dx),
                iy.wrapping_add(dy),
                iz.wrapping_add(dz),
                self.seed,
            );
            grad(h, fx - dx as f64, fy - dy as f64, fz - dz as f64)
        };

        let x00 = lerp(corner(0, 0, 0), corner(1, 0, 0), u);
        let x10 = lerp(corner(0, 1, 0), corner(1, 1, 0), u);
        let x01 = lerp(corner(0, 0, 1), corner(1, 0, 1), u);
        let x11 = lerp(corner(0, 1, 1), corner(1, 1, 1), u);
        let y0 = lerp(x00, x10, v);
        let y1 = lerp(x01, x11, v);

        bounded(lerp(y0, y1, w))
    }
}

impl NoiseField for GradientNoise {
    fn sample(&self, p: Vec3, time: f64) -> f64 {
        self.at([p[0], p[1] + time, p[2]])
    }
}

/// Two gradient-noise octaves blended 0.6 / 0.4, each drifting in its own
/// direction, for a less regular "breathing" surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayeredNoise {
    low: GradientNoise,
    high: GradientNoise,
}

impl LayeredNoise {
    pub fn new(seed: u32) -> Self {
        Self {
            low: GradientNoise::new(seed),
            high: GradientNoise::new(seed.wrapping_add(0x9e37_79b9)),
        }
    }
}

impl NoiseField for LayeredNoise {
    fn sample(&self, p: Vec3, time: f64) -> f64 {
        let n1 = self
            .low
            .at([p[0] * 0.9, p[1] * 0.9 + time, p[2] * 0.9]);
        let n2 = self.high.at([
            p[0] * 1.6 + time * 0.7,
            p[1] * 1.6,
            p[2] * 1.6 - time * 0.5,
        ]);
        bounded(n1 * 0.6 + n2 * 0.4)
    }
}

fn bounded(v: f64) -> f64 {
    if v.is_finite() {
        v.clamp(-1.0, 1.0)
    } else {
        0.0
    }
}

fn lattice_hash(x: i32, y: i32, z: i32, seed: u32) -> u32 {
    let mut h = seed.wrapping_add(x as u32).wrapping_mul(374_761_393);
    h = h.wrapping_add(y as u32).wrapping_mul(668_265_263);
    h = h.wrapping_add(z as u32).wrapping_mul(2_147_483_647);
    h = (h ^ (h >> 13)).wrapping_mul(1_274_126_177);
    h ^ (h >> 16)
}

/// Dot product with one of the 12 cube-edge gradient directions.
fn grad(hash: u32, x: f64, y: f64, z: f64) -> f64 {
    let h = hash & 15;
    let u = if h < 8 { x } else { y };
    let v = if h < 4 {
        y
    } else if h == 12 || h == 14 {
        x
    } else {
        z
    };
    let u = if h & 1 == 0 { u } else { -u };
    let v = if h & 2 == 0 { v } else { -v };
    u + v
}

/// Quintic smoothstep `6t⁵ - 15t⁴ + 10t³`.
fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_points() -> Vec<Vec3> {
        (0..2000)
            .map(|i| {
                let f = i as f64;
                [f * 0.137 - 40.0, (f * 0.071).sin() * 9.0, f * -0.019 + 3.3]
            })
            .collect()
    }

    #[test]
    fn gradient_is_bounded() {
        let noise = GradientNoise::new(7);
        for p in sample_points() {
            let v = noise.sample(p, 12.5);
            assert!((-1.0..=1.0).contains(&v), "{p:?} → {v}");
        }
    }

    #[test]
    fn layered_is_bounded() {
        let noise = LayeredNoise::new(7);
        for p in sample_points() {
            let v = noise.sample(p, 3.25);
            assert!((-1.0..=1.0).contains(&v), "{p:?} → {v}");
        }
    }

    #[test]
    fn zero_on_lattice_points() {
        let noise = GradientNoise::new(1);
        assert_eq!(noise.at([3.0, -2.0, 5.0]), 0.0);
    }

    #[test]
    fn deterministic_given_position_and_time() {
        let a = LayeredNoise::new(42);
        let b = LayeredNoise::new(42);
        for p in sample_points().into_iter().take(200) {
            assert_eq!(a.sample(p, 1.5).to_bits(), b.sample(p, 1.5).to_bits());
        }
    }

    #[test]
    fn seed_changes_field() {
        let a = GradientNoise::new(1);
        let b = GradientNoise::new(2);
        let differs = sample_points()
            .into_iter()
            .any(|p| (a.at(p) - b.at(p)).abs() > 1e-6);
        assert!(differs);
    }

    #[test]
    fn continuous_in_time() {
        let noise = GradientNoise::new(3);
        let p = [0.3, -0.7, 0.2];
        let mut prev = noise.sample(p, 0.0);
        for step in 1..1000 {
            let v = noise.sample(p, step as f64 * 0.001);
            assert!((v - prev).abs() < 0.02, "jump at step {step}");
            prev = v;
        }
    }

    #[test]
    fn non_finite_input_is_zero() {
        let noise = GradientNoise::new(0);
        assert_eq!(noise.sample([f64::NAN, 0.0, 0.0], 0.0), 0.0);
        assert_eq!(noise.sample([0.5, 0.5, 0.5], f64::INFINITY), 0.0);
        let v = noise.sample([1e300, -1e300, 0.5], 1e300);
        assert!((-1.0..=1.0).contains(&v));
    }

    #[test]
    fn create_noise_matches_kind() {
        let g = create_noise(NoiseKind::Gradient, 9);
        let direct = GradientNoise::new(9);
        let p = [0.25, 0.5, 0.75];
        assert_eq!(g.sample(p, 0.1), direct.sample(p, 0.1));
        let l = create_noise(NoiseKind::Layered, 9);
        assert_eq!(l.sample(p, 0.1), LayeredNoise::new(9).sample(p, 0.1));
    }
}
