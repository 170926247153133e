//! Frame timing over a rolling window, fed by the host clock.

use std::collections::VecDeque;

/// Tracks frame intervals for FPS calculation.
#[derive(Debug, Clone)]
pub struct FrameStats {
    intervals: VecDeque<f64>,
    last_frame: Option<f64>,
    max_samples: usize,
    total_frames: u64,
}

impl FrameStats {
    /// Create frame stats with a default 120-sample rolling window.
    pub fn new() -> Self {
        Self::with_window(120)
    }

    pub fn with_window(max_samples: usize) -> Self {
        Self {
            intervals: VecDeque::new(),
            last_frame: None,
            max_samples: max_samples.max(1),
            total_frames: 0,
        }
    }

    /// Record a frame at `now` seconds. Non-monotonic timestamps are dropped.
    pub fn record(&mut self, now: f64) {
        if !now.is_finite() {
            return;
        }
        if let Some(last) = self.last_frame {
            if now < last {
                return;
            }
            self.intervals.push_back(now - last);
            if self.intervals.len() > self.max_samples {
                self.intervals.pop_front();
            }
        }
        self.last_frame = Some(now);
        self.total_frames += 1;
    }

    /// Average frames per second over the sample window.
    pub fn fps(&self) -> f64 {
        let total: f64 = self.intervals.iter().sum();
        if self.intervals.is_empty() || total <= 0.0 {
            return 0.0;
        }
        self.intervals.len() as f64 / total
    }

    /// Average frame time in milliseconds.
    pub fn frame_time_ms(&self) -> f64 {
        if self.intervals.is_empty() {
            return 0.0;
        }
        let total: f64 = self.intervals.iter().sum();
        (total / self.intervals.len() as f64) * 1000.0
    }

    /// Number of intervals currently stored.
    pub fn sample_count(&self) -> usize {
        self.intervals.len()
    }

    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_fps_is_zero() {
        let stats = FrameStats::new();
        assert_eq!(stats.fps(), 0.0);
        assert_eq!(stats.frame_time_ms(), 0.0);
    }

    #[test]
    fn fps_at_sixty_hz() {
        let mut stats = FrameStats::new();
        for frame in 0..=60 {
            stats.record(frame as f64 / 60.0);
        }
        assert!((stats.fps() - 60.0).abs() < 1e-6);
        assert!((stats.frame_time_ms() - 16.666_666).abs() < 1e-3);
        assert_eq!(stats.sample_count(), 60);
        assert_eq!(stats.total_frames(), 61);
    }

    #[test]
    fn max_samples_respected() {
        let mut stats = FrameStats::new();
        for frame in 0..200 {
            stats.record(frame as f64 * 0.01);
        }
        assert_eq!(stats.sample_count(), 120);
    }

    #[test]
    fn backwards_time_is_ignored() {
        let mut stats = FrameStats::new();
        stats.record(1.0);
        stats.record(0.5);
        stats.record(f64::NAN);
        assert_eq!(stats.sample_count(), 0);
        assert_eq!(stats.total_frames(), 1);
    }
}
