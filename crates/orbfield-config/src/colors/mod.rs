//! Palette color parsing.
//!
//! Accepts `#RGB`, `#RRGGBB`, `#RRGGBBAA`, `rgb(r,g,b)` and `rgba(r,g,b,a)`.

mod parse;


use orbfield_common::types::Color;
use orbfield_common::ConfigError;

use parse::{parse_hex, parse_rgb, HEX_RE, RGB_RE};

/// Parse a color string into a [`Color`].
pub fn parse_color(s: &str) -> Result<Color, ConfigError> {
    let s = s.trim();

    if s.starts_with('#') {
        return parse_hex(s)
            .ok_or_else(|| ConfigError::ParseError(format!("invalid hex color: {s}")));
    }

    if s.starts_with("rgba(") || s.starts_with("rgb(") {
        return parse_rgb(s)
            .ok_or_else(|| ConfigError::ParseError(format!("invalid rgba color: {s}")));
    }

    Err(ConfigError::ParseError(format!(
        "unrecognized color format: {s}"
    )))
}

/// Parse `s`, falling back to `fallback` (with a warning) when it is malformed.
pub fn color_or(s: &str, fallback: Color) -> Color {
    parse_color(s).unwrap_or_else(|e| {
        tracing::warn!("{e}; using {}", fallback.to_hex());
        fallback
    })
}

/// Whether `s` is a recognized color format.
pub fn validate_color(s: &str) -> bool {
    let s = s.trim();
    if s.starts_with('#') {
        return HEX_RE.is_match(s);
    }
    if s.starts_with("rgba(") || s.starts_with("rgb(") {
        return RGB_RE.is_match(s);
    }
    false
}
