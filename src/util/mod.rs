//! Shared utilities for the camera rig.
//!
//! Helpers for frame timing and spherical interpolation of positions.

pub mod frame_clock;
pub mod interpolation;
