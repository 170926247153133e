//! Motion validation: the spring-damper and smoothing coefficients must keep
//! every instance's animation bounded.

use crate::schema::OrbfieldConfig;

use super::helpers::{validate_open_range_f64, validate_positive_f64, validate_range_f64};

pub(crate) fn validate_motion(errors: &mut Vec<String>, config: &OrbfieldConfig) {
    let m = &config.motion;

    validate_range_f64(errors, "motion.amplitude", m.amplitude, 0.0, 0.5);
    validate_range_f64(errors, "motion.frequency", m.frequency, 0.0, 16.0);
    validate_range_f64(errors, "motion.time_scale", m.time_scale, 0.0, 10.0);
    validate_range_f64(errors, "motion.pulse_amount", m.pulse_amount, 0.0, 2.0);
    validate_range_f64(errors, "motion.drift", m.drift, 0.0, 0.1);

    // damping < 1 keeps the displacement oscillation from diverging
    validate_positive_f64(errors, "motion.spring", m.spring, 1.0);
    validate_range_f64(errors, "motion.damping", m.damping, 0.0, 0.999);

    validate_open_range_f64(errors, "motion.smoothing", m.smoothing, 0.0, 1.0);
    validate_range_f64(errors, "motion.max_tilt", m.max_tilt, 0.0, 1.5);
    validate_range_f64(errors, "motion.auto_speed", m.auto_speed, 0.0, 10.0);
    validate_range_f64(errors, "motion.base_tilt", m.base_tilt, -1.5, 1.5);
    validate_range_f64(errors, "motion.idle_amplitude", m.idle_amplitude, 0.0, 0.5);

    // the focal point must sit outside the displaced sphere
    let min_focal = 1.0 + m.amplitude * (1.0 + m.pulse_amount) + m.drift * 3f64.sqrt() + 0.1;
    validate_range_f64(errors, "motion.focal_ratio", m.focal_ratio, min_focal, 100.0);
}
