//! Validation for the palette, favicon and render sections.

use crate::colors::validate_color;
use crate::schema::OrbfieldConfig;

use super::helpers::{validate_range, validate_range_f64};

pub(crate) fn validate_palette(errors: &mut Vec<String>, config: &OrbfieldConfig) {
    let p = &config.palette;
    for (name, value) in [
        ("palette.start", &p.start),
        ("palette.end", &p.end),
        ("palette.backdrop", &p.backdrop),
    ] {
        if !validate_color(value) {
            errors.push(format!("{name} = {value:?} is not a valid color"));
        }
    }
    validate_range_f64(
        errors,
        "palette.brightness_jitter",
        p.brightness_jitter,
        0.0,
        0.5,
    );
}

pub(crate) fn validate_favicon(errors: &mut Vec<String>, config: &OrbfieldConfig) {
    validate_range(
        errors,
        "favicon.size_px",
        config.favicon.size_px as u64,
        16,
        256,
    );
    validate_range(
        errors,
        "favicon.throttle_ms",
        config.favicon.throttle_ms,
        16,
        60_000,
    );
}

pub(crate) fn validate_render(errors: &mut Vec<String>, config: &OrbfieldConfig) {
    validate_range_f64(errors, "render.twinkle", config.render.twinkle, 0.0, 0.5);
}
