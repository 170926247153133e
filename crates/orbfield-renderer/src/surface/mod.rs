//! Drawing surfaces: the 2D target a sphere instance paints into.
//!
//! Coordinates are CSS px; implementations map them to their own backing
//! resolution through `pixel_ratio()`.

mod raster;
mod recording;

pub use raster::*;
pub use recording::*;

use orbfield_common::{Color, Size};

pub trait DrawSurface {
    /// Logical size in CSS px.
    fn size(&self) -> Size;

    /// Backing pixels per CSS px.
    fn pixel_ratio(&self) -> f64;

    /// Clear to fully transparent.
    fn clear(&mut self);

    /// Fill a circle centered at `(x, y)` with `color`, its alpha multiplied by `alpha`.
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color, alpha: f64);

    /// Resize the logical area. Content is discarded.
    fn resize(&mut self, size: Size);
}

/// Pixel ratio used when the host reports nothing usable.
pub(crate) fn sanitize_pixel_ratio(ratio: f64) -> f64 {
    if ratio.is_finite() && ratio > 0.0 {
        ratio
    } else {
        1.0
    }
}
