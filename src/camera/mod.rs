//! Third-person camera rig.
//!
//! Follows a target at a zoomable distance, turns with mouse input, and
//! pulls in when scene geometry blocks the line of sight.

/// One-shot collision latch.
pub mod collision;
/// Euler look angles and the view direction.
pub mod orientation;
/// Follow rig state, builder, and per-frame update.
pub mod rig;
/// Positions the rig can follow.
pub mod target;

pub use collision::CollisionState;
pub use orientation::{Orientation, FORWARD};
pub use rig::{CameraRig, CameraRigBuilder, RigState};
pub use target::FollowTarget;
