//! Pointer-driven target rotation.
//!
//! Publishes a target only; smoothing toward it is the projector's job.

use orbfield_common::Size;

use crate::density::MIN_CONTAINER_PX;

#[derive(Debug, Clone, PartialEq)]
pub struct InteractionController {
    max_tilt: f64,
    target_rot_x: f64,
    target_rot_y: f64,
    hovering: bool,
}

impl InteractionController {
    pub fn new(max_tilt: f64) -> Self {
        Self {
            max_tilt: if max_tilt.is_finite() { max_tilt.abs() } else { 0.0 },
            target_rot_x: 0.0,
            target_rot_y: 0.0,
            hovering: false,
        }
    }

    /// Pointer at `(x, y)` CSS px relative to the mount's top-left corner.
    pub fn pointer_move(&mut self, x: f64, y: f64, bounds: Size) {
        let bounds = bounds.clamped_min(MIN_CONTAINER_PX);
        let nx = normalize(x, bounds.width);
        let ny = normalize(y, bounds.height);
        self.target_rot_y = nx * self.max_tilt;
        self.target_rot_x = -ny * self.max_tilt;
        self.hovering = true;
    }

    /// Pointer left the mount: return to neutral.
    pub fn pointer_leave(&mut self) {
        self.target_rot_x = 0.0;
        self.target_rot_y = 0.0;
        self.hovering = false;
    }

    /// `(target_rot_x, target_rot_y)` in radians.
    pub fn target(&self) -> (f64, f64) {
        (self.target_rot_x, self.target_rot_y)
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    pub fn max_tilt(&self) -> f64 {
        self.max_tilt
    }
}

/// Map `[0, extent]` onto `[-1, 1]`, clamping outside values; non-finite → 0.
fn normalize(v: f64, extent: f64) -> f64 {
    if !v.is_finite() {
        return 0.0;
    }
    ((v / extent) * 2.0 - 1.0).clamp(-1.0, 1.0)
}

// =============================================================================
// Tests
// =============================================================================
