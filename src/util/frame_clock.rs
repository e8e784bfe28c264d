//! Frame clock producing scaled and unscaled deltas.

use web_time::Instant;

/// Frame deltas handed to the rig each frame, in seconds.
///
/// `delta` is scaled by the global time scale and drives look and zoom;
/// `unscaled_delta` ignores the time scale and drives position smoothing, so
/// the camera keeps settling while the game is paused.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameTime {
    /// Scaled frame delta.
    pub delta: f32,
    /// Wall-clock frame delta.
    pub unscaled_delta: f32,
}

impl FrameTime {
    /// Frame time with no time scaling applied.
    #[must_use]
    pub fn new(dt: f32) -> Self {
        Self {
            delta: dt,
            unscaled_delta: dt,
        }
    }

    /// Frame time for a wall-clock `dt` under `time_scale`.
    #[must_use]
    pub fn from_unscaled(dt: f32, time_scale: f32) -> Self {
        Self {
            delta: dt * time_scale,
            unscaled_delta: dt,
        }
    }
}

/// Frame clock with a global time scale and smoothed FPS.
pub struct FrameClock {
    /// Multiplier applied to the scaled delta (0 = paused).
    time_scale: f32,
    /// Last tick timestamp.
    last_frame: Instant,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl FrameClock {
    /// Create a clock with the given time scale. Negative scales are treated
    /// as 0.
    #[must_use]
    pub fn new(time_scale: f32) -> Self {
        Self {
            time_scale: time_scale.max(0.0),
            last_frame: Instant::now(),
            smoothed_fps: 60.0, // Start with reasonable default
            smoothing: 0.05,
        }
    }

    /// Current time scale.
    #[must_use]
    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    /// Change the time scale (0 pauses look and zoom).
    pub fn set_time_scale(&mut self, time_scale: f32) {
        self.time_scale = time_scale.max(0.0);
    }

    /// Call once per frame. Returns the deltas since the previous tick.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        if elapsed > 0.0 {
            let instant_fps = 1.0 / elapsed;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }

        FrameTime::from_unscaled(elapsed, self.time_scale)
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paused_clock_keeps_unscaled_delta() {
        let time = FrameTime::from_unscaled(0.02, 0.0);
        assert_eq!(time.delta, 0.0);
        assert_eq!(time.unscaled_delta, 0.02);
    }

    #[test]
    fn tick_applies_time_scale() {
        let mut clock = FrameClock::new(0.5);
        std::thread::sleep(std::time::Duration::from_millis(5));
        let time = clock.tick();
        assert!(time.unscaled_delta > 0.0);
        assert!((time.delta - time.unscaled_delta * 0.5).abs() < 1e-6);
    }

    #[test]
    fn negative_time_scale_clamps_to_zero() {
        let mut clock = FrameClock::new(-2.0);
        assert_eq!(clock.time_scale(), 0.0);
        clock.set_time_scale(2.0);
        assert_eq!(clock.time_scale(), 2.0);
    }
}
