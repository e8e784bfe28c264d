//! Input handling: platform-agnostic events and the per-frame accumulator
//! that turns them into look and zoom deltas for the rig.

/// Folds events into one [`FrameInput`] per frame.
pub mod accumulator;
/// Platform-agnostic input events.
pub mod event;

pub use accumulator::{FrameInput, InputAccumulator};
pub use event::InputEvent;
