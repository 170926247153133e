//! Fibonacci-lattice point cloud on the unit sphere.
//!
//! The lattice is a pure function of the particle count: the same `n`
//! always yields bit-identical directions.

use orbfield_common::RenderError;

/// A direction or position in 3D, `[x, y, z]`.
pub type Vec3 = [f64; 3];

/// Azimuth step between consecutive lattice points: `π·(1 + √5)`.
pub fn golden_angle() -> f64 {
    std::f64::consts::PI * (1.0 + 5f64.sqrt())
}

/// Sample `n` unit directions on the sphere.
///
/// Point `i` has inclination `acos(1 - 2i/n)` and azimuth `golden_angle · i`.
pub fn fibonacci_sphere(n: usize) -> Vec<Vec3> {
    let golden = golden_angle();
    let count = n as f64;

    (0..n)
        .map(|i| {
            let t = i as f64 / count;
            let inclination = (1.0 - 2.0 * t).acos();
            let azimuth = golden * i as f64;
            let (sin_inc, cos_inc) = inclination.sin_cos();
            let (sin_az, cos_az) = azimuth.sin_cos();
            [sin_inc * cos_az, sin_inc * sin_az, cos_inc]
        })
        .collect()
}

/// Signed entry point for callers holding an untrusted count.
pub fn fibonacci_sphere_checked(n: i64) -> Result<Vec<Vec3>, RenderError> {
    let n = usize::try_from(n).map_err(|_| RenderError::InvalidParticleCount(n))?;
    Ok(fibonacci_sphere(n))
}

pub(crate) fn length(v: Vec3) -> f64 {
    (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
}

// =============================================================================
// Tests
// =============================================================================
