//! Shared range-validation helpers used by all section validators.

/// Push an error if `value` is outside `[min, max]` (integer).
pub(crate) fn validate_range(errors: &mut Vec<String>, name: &str, value: u64, min: u64, max: u64) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if `value` is outside `[min, max]` (float). NaN is always out of range.
pub(crate) fn validate_range_f64(
    errors: &mut Vec<String>,
    name: &str,
    value: f64,
    min: f64,
    max: f64,
) {
    if !(min..=max).contains(&value) {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error unless `min < value < max` (float, both bounds exclusive).
pub(crate) fn validate_open_range_f64(
    errors: &mut Vec<String>,
    name: &str,
    value: f64,
    min: f64,
    max: f64,
) {
    if !(value > min && value < max) {
        errors.push(format!("{name} = {value} must lie in ({min}, {max})"));
    }
}

/// Push an error unless `0 < value <= max`.
pub(crate) fn validate_positive_f64(errors: &mut Vec<String>, name: &str, value: f64, max: f64) {
    if !(value > 0.0 && value <= max) {
        errors.push(format!("{name} = {value} must lie in (0, {max}]"));
    }
}
