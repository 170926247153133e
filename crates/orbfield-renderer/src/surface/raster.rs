//! Software RGBA8 canvas with a device-pixel backing store.

use std::io::Cursor;

use orbfield_common::{Color, RenderError, Size};

use super::{sanitize_pixel_ratio, DrawSurface};

/// Largest backing store edge for a square surface; any surface holds at
/// most this squared many device pixels.
const MAX_DEVICE_SIDE: f64 = 4096.0;

/// Straight-alpha RGBA8 buffer of `round(size · pixel_ratio)` device pixels.
///
/// When the requested ratio would exceed the device-pixel budget the
/// effective `pixel_ratio()` is lowered to fit.
#[derive(Debug, Clone)]
pub struct RasterSurface {
    size: Size,
    requested_ratio: f64,
    pixel_ratio: f64,
    width_px: u32,
    height_px: u32,
    pixels: Vec<u8>,
}

impl RasterSurface {
    pub fn new(size: Size, pixel_ratio: f64) -> Self {
        let ratio = sanitize_pixel_ratio(pixel_ratio);
        let mut surface = Self {
            size,
            requested_ratio: ratio,
            pixel_ratio: ratio,
            width_px: 0,
            height_px: 0,
            pixels: Vec::new(),
        };
        surface.allocate();
        surface
    }

    fn allocate(&mut self) {
        let mut ratio = self.requested_ratio;
        let (w, h) = (self.size.width, self.size.height);
        // square roots first so huge sizes cannot overflow the area
        let fit = MAX_DEVICE_SIDE / ((w * ratio).sqrt() * (h * ratio).sqrt());
        if fit < 1.0 {
            ratio *= fit;
        }
        self.pixel_ratio = ratio;

        let device = |css: f64| {
            let px = (css * ratio).round();
            if px.is_finite() && px > 0.0 {
                px.min(u16::MAX as f64) as u32
            } else {
                0
            }
        };
        self.width_px = device(self.size.width);
        self.height_px = device(self.size.height);
        self.pixels = vec![0; self.width_px as usize * self.height_px as usize * 4];
    }

    pub fn width_px(&self) -> u32 {
        self.width_px
    }

    pub fn height_px(&self) -> u32 {
        self.height_px
    }

    /// Raw RGBA8 rows, top to bottom.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Device pixel at `(x, y)`, or `None` outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width_px || y >= self.height_px {
            return None;
        }
        let i = self.offset(x, y);
        let p = &self.pixels[i..i + 4];
        Some(Color::from_rgba(p[0], p[1], p[2], p[3]))
    }

    /// Count of pixels with nonzero alpha.
    pub fn painted_pixels(&self) -> usize {
        self.pixels.chunks_exact(4).filter(|p| p[3] != 0).count()
    }

    /// Encode the buffer as an RGBA8 PNG.
    pub fn encode_png(&self) -> Result<Vec<u8>, RenderError> {
        if self.width_px == 0 || self.height_px == 0 {
            return Err(RenderError::SurfaceUnavailable(
                "cannot encode an empty surface".into(),
            ));
        }

        let mut buf = Cursor::new(Vec::new());
        {
            let mut encoder = png::Encoder::new(&mut buf, self.width_px, self.height_px);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder
                .write_header()
                .map_err(|e| RenderError::Encode(e.to_string()))?;
            writer
                .write_image_data(&self.pixels)
                .map_err(|e| RenderError::Encode(e.to_string()))?;
        }
        Ok(buf.into_inner())
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width_px as usize + x as usize) * 4
    }

    /// Source-over blend of `color` at opacity `a` into one pixel.
    fn blend(&mut self, x: u32, y: u32, color: Color, a: f64) {
        let i = self.offset(x, y);
        let dst = &mut self.pixels[i..i + 4];
        let da = dst[3] as f64 / 255.0;
        let out_a = a + da * (1.0 - a);
        if out_a <= 0.0 {
            return;
        }
        let mix = |s: u8, d: u8| {
            let v = (s as f64 * a + d as f64 * da * (1.0 - a)) / out_a;
            v.round().clamp(0.0, 255.0) as u8
        };
        dst[0] = mix(color.r, dst[0]);
        dst[1] = mix(color.g, dst[1]);
        dst[2] = mix(color.b, dst[2]);
        dst[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
    }
}

impl DrawSurface for RasterSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn pixel_ratio(&self) -> f64 {
        self.pixel_ratio
    }

    fn clear(&mut self) {
        self.pixels.fill(0);
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color, alpha: f64) {
        let base_alpha = (color.a as f64 / 255.0) * alpha.clamp(0.0, 1.0);
        if !(x.is_finite() && y.is_finite() && radius.is_finite())
            || radius <= 0.0
            || base_alpha <= 0.0
            || self.width_px == 0
            || self.height_px == 0
        {
            return;
        }

        let cx = x * self.pixel_ratio;
        let cy = y * self.pixel_ratio;
        let r = radius * self.pixel_ratio;
        // sub-pixel dots fade by their diameter instead of vanishing
        let coverage_scale = (r * 2.0).min(1.0);
        let reach = r.max(0.5) + 0.5;

        let x0 = (cx - reach).floor().max(0.0) as i64;
        let y0 = (cy - reach).floor().max(0.0) as i64;
        let x1 = ((cx + reach).ceil() as i64).min(self.width_px as i64 - 1);
        let y1 = ((cy + reach).ceil() as i64).min(self.height_px as i64 - 1);
        if x0 > x1 || y0 > y1 {
            return;
        }

        let edge = r.max(0.5);
        for py in y0..=y1 {
            for px in x0..=x1 {
                let dx = px as f64 + 0.5 - cx;
                let dy = py as f64 + 0.5 - cy;
                let d = (dx * dx + dy * dy).sqrt();
                let coverage = (edge + 0.5 - d).clamp(0.0, 1.0) * coverage_scale;
                if coverage > 0.0 {
                    self.blend(px as u32, py as u32, color, base_alpha * coverage);
                }
            }
        }
    }

    fn resize(&mut self, size: Size) {
        self.size = size;
        self.allocate();
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::from_rgba(255, 0, 0, 255);
    const BLUE: Color = Color::from_rgba(0, 0, 255, 255);

    #[test]
    fn backing_store_follows_pixel_ratio() {
        let s = RasterSurface::new(Size::new(64.0, 32.0), 2.0);
        assert_eq!((s.width_px(), s.height_px()), (128, 64));
        assert_eq!(s.pixels().len(), 128 * 64 * 4);
    }

    #[test]
    fn bad_pixel_ratio_falls_back_to_one() {
        let s = RasterSurface::new(Size::new(10.0, 10.0), f64::NAN);
        assert_eq!(s.pixel_ratio(), 1.0);
        assert_eq!(s.width_px(), 10);
    }

    #[test]
    fn huge_surface_is_capped_to_device_budget() {
        let mut s = RasterSurface::new(Size::new(1.0e6, 1.0e6), 2.0);
        let area = s.width_px() as u64 * s.height_px() as u64;
        assert!(area > 0 && area <= 4097 * 4097, "{area}");
        assert_eq!(s.pixels().len() as u64, area * 4);
        assert!(s.pixel_ratio() < 2.0);

        s.fill_circle(5.0e5, 5.0e5, 1.0e4, RED, 1.0);
        assert!(s.painted_pixels() > 0);

        s.resize(Size::new(10.0, 10.0));
        assert_eq!(s.pixel_ratio(), 2.0);
        assert_eq!((s.width_px(), s.height_px()), (20, 20));
    }

    #[test]
    fn wide_strip_stays_within_budget() {
        let s = RasterSurface::new(Size::new(1.0e9, 4.0), 1.0);
        let area = s.width_px() as u64 * s.height_px() as u64;
        assert!(area <= 4097 * 4097, "{area}");
    }

    #[test]
    fn infinite_size_allocates_nothing() {
        let s = RasterSurface::new(Size::new(f64::INFINITY, 10.0), 1.0);
        assert!(s.pixels().is_empty());
    }

    #[test]
    fn zero_size_is_empty() {
        let s = RasterSurface::new(Size::new(0.0, 0.0), 1.0);
        assert!(s.pixels().is_empty());
        assert!(matches!(
            s.encode_png(),
            Err(RenderError::SurfaceUnavailable(_))
        ));
    }

    #[test]
    fn opaque_circle_covers_center() {
        let mut s = RasterSurface::new(Size::new(20.0, 20.0), 1.0);
        s.fill_circle(10.0, 10.0, 4.0, RED, 1.0);
        assert_eq!(s.pixel(10, 10), Some(RED));
        assert_eq!(s.pixel(0, 0), Some(Color::TRANSPARENT));
    }

    #[test]
    fn later_circle_paints_over_earlier() {
        let mut s = RasterSurface::new(Size::new(20.0, 20.0), 1.0);
        s.fill_circle(10.0, 10.0, 4.0, RED, 1.0);
        s.fill_circle(10.0, 10.0, 4.0, BLUE, 1.0);
        assert_eq!(s.pixel(10, 10), Some(BLUE));
    }

    #[test]
    fn half_alpha_over_opaque_mixes() {
        let mut s = RasterSurface::new(Size::new(20.0, 20.0), 1.0);
        s.fill_circle(10.0, 10.0, 4.0, RED, 1.0);
        s.fill_circle(10.0, 10.0, 4.0, BLUE, 0.5);
        let p = s.pixel(10, 10).unwrap();
        assert_eq!(p.a, 255);
        assert!((126..=129).contains(&p.r), "{p:?}");
        assert!((126..=129).contains(&p.b), "{p:?}");
    }

    #[test]
    fn tiny_circle_still_leaves_a_mark() {
        let mut s = RasterSurface::new(Size::new(8.0, 8.0), 1.0);
        s.fill_circle(4.0, 4.0, 0.2, RED, 1.0);
        assert!(s.painted_pixels() > 0);
        assert!(s.pixel(4, 4).unwrap().a < 255);
    }

    #[test]
    fn off_canvas_and_invalid_circles_are_ignored() {
        let mut s = RasterSurface::new(Size::new(8.0, 8.0), 1.0);
        s.fill_circle(-50.0, -50.0, 2.0, RED, 1.0);
        s.fill_circle(f64::NAN, 4.0, 2.0, RED, 1.0);
        s.fill_circle(4.0, 4.0, -1.0, RED, 1.0);
        s.fill_circle(4.0, 4.0, 2.0, RED, 0.0);
        assert_eq!(s.painted_pixels(), 0);
    }

    #[test]
    fn clear_resets_everything() {
        let mut s = RasterSurface::new(Size::new(8.0, 8.0), 1.0);
        s.fill_circle(4.0, 4.0, 3.0, RED, 1.0);
        s.clear();
        assert_eq!(s.painted_pixels(), 0);
    }

    #[test]
    fn resize_reallocates() {
        let mut s = RasterSurface::new(Size::new(8.0, 8.0), 2.0);
        s.resize(Size::new(4.0, 6.0));
        assert_eq!((s.width_px(), s.height_px()), (8, 12));
        assert_eq!(s.size(), Size::new(4.0, 6.0));
    }

    #[test]
    fn encodes_valid_png() {
        let mut s = RasterSurface::new(Size::new(16.0, 16.0), 1.0);
        s.fill_circle(8.0, 8.0, 5.0, RED, 1.0);
        let bytes = s.encode_png().unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

        let decoder = png::Decoder::new(Cursor::new(bytes));
        let reader = decoder.read_info().unwrap();
        assert_eq!(reader.info().width, 16);
        assert_eq!(reader.info().height, 16);
    }
}
