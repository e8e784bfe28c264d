/// Platform-agnostic input events.
///
/// These are fed into an [`InputAccumulator`](super::InputAccumulator) which
/// folds them into one [`FrameInput`](super::FrameInput) per frame.
///
/// # Example
///
/// ```
/// # use tether::input::{InputAccumulator, InputEvent};
/// let mut input = InputAccumulator::new();
/// input.handle_event(InputEvent::MouseMotion { dx: 4.0, dy: -1.0 });
/// input.handle_event(InputEvent::Scroll { delta: 1.0 });
/// let frame = input.take_frame();
/// assert_eq!(frame.scroll, 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Relative pointer motion.
    MouseMotion {
        /// Horizontal motion (positive = right).
        dx: f32,
        /// Vertical motion (positive = up).
        dy: f32,
    },
    /// Scroll wheel (positive = zoom in).
    Scroll {
        /// Scroll amount (positive = zoom in, negative = zoom out).
        delta: f32,
    },
}

#[cfg(feature = "viewer")]
impl InputEvent {
    /// Scale applied to pixel-precise wheel deltas so a trackpad gesture
    /// is comparable to one wheel notch per line.
    const PIXELS_PER_LINE: f32 = 100.0;

    /// Convert a winit wheel delta into a [`InputEvent::Scroll`].
    #[must_use]
    pub fn from_wheel(delta: winit::event::MouseScrollDelta) -> Self {
        let delta = match delta {
            winit::event::MouseScrollDelta::LineDelta(_, y) => y,
            winit::event::MouseScrollDelta::PixelDelta(pos) => {
                pos.y as f32 / Self::PIXELS_PER_LINE
            }
        };
        Self::Scroll { delta }
    }

    /// Convert a winit device motion delta (`y` grows downward) into a
    /// [`InputEvent::MouseMotion`].
    #[must_use]
    pub fn from_device_motion((dx, dy): (f64, f64)) -> Self {
        Self::MouseMotion {
            dx: dx as f32,
            dy: -dy as f32,
        }
    }
}
