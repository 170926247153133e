//! A surface that records draw calls instead of rasterizing them.

use orbfield_common::{Color, Size};

use super::{sanitize_pixel_ratio, DrawSurface};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear,
    Circle {
        x: f64,
        y: f64,
        radius: f64,
        color: Color,
        alpha: f64,
    },
    Resize(Size),
}

#[derive(Debug, Clone)]
pub struct RecordingSurface {
    size: Size,
    pixel_ratio: f64,
    calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new(size: Size, pixel_ratio: f64) -> Self {
        Self {
            size,
            pixel_ratio: sanitize_pixel_ratio(pixel_ratio),
            calls: Vec::new(),
        }
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Calls made since the most recent clear.
    pub fn last_frame(&self) -> &[DrawCall] {
        let start = self
            .calls
            .iter()
            .rposition(|c| *c == DrawCall::Clear)
            .map_or(0, |i| i + 1);
        &self.calls[start..]
    }

    pub fn clear_count(&self) -> usize {
        self.calls.iter().filter(|c| **c == DrawCall::Clear).count()
    }

    pub fn take_calls(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }
}

impl DrawSurface for RecordingSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn pixel_ratio(&self) -> f64 {
        self.pixel_ratio
    }

    fn clear(&mut self) {
        self.calls.push(DrawCall::Clear);
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color, alpha: f64) {
        self.calls.push(DrawCall::Circle {
            x,
            y,
            radius,
            color,
            alpha,
        });
    }

    fn resize(&mut self, size: Size) {
        self.size = size;
        self.calls.push(DrawCall::Resize(size));
    }
}
