use glam::Vec2;

use super::event::InputEvent;

/// Look and zoom input for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameInput {
    /// Pointer motion (`x` right, `y` up) in axis units.
    pub look: Vec2,
    /// Scroll amount (positive = zoom in).
    pub scroll: f32,
}

impl FrameInput {
    /// Input with the given look delta and scroll.
    #[must_use]
    pub fn new(look: Vec2, scroll: f32) -> Self {
        Self { look, scroll }
    }
}

/// Sums raw input events between frames.
///
/// Pointer motion is multiplied by `motion_scale` to turn device units
/// (pixels, counts) into look-axis units.
#[derive(Debug, Clone)]
pub struct InputAccumulator {
    pending: FrameInput,
    motion_scale: f32,
}

impl Default for InputAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl InputAccumulator {
    /// Accumulator passing motion through unscaled.
    #[must_use]
    pub fn new() -> Self {
        Self::with_motion_scale(1.0)
    }

    /// Accumulator multiplying pointer motion by `motion_scale`.
    #[must_use]
    pub fn with_motion_scale(motion_scale: f32) -> Self {
        Self {
            pending: FrameInput::default(),
            motion_scale,
        }
    }

    /// Fold one event into the pending frame.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::MouseMotion { dx, dy } => {
                self.pending.look += Vec2::new(dx, dy) * self.motion_scale;
            }
            InputEvent::Scroll { delta } => {
                self.pending.scroll += delta;
            }
        }
    }

    /// Input gathered since the last call, leaving the accumulator empty.
    pub fn take_frame(&mut self) -> FrameInput {
        std::mem::take(&mut self.pending)
    }

    /// Input gathered so far, without consuming it.
    #[must_use]
    pub fn peek(&self) -> FrameInput {
        self.pending
    }
}
