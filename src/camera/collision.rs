//! One-shot collision latch.
//!
//! Each frame the rig probes from the target toward the camera. A hit closer
//! than the minimum collision distance snaps the camera in to that minimum
//! and latches. While latched, further hits change nothing; the first clear
//! frame releases the latch and restores the desired distance.
//!
//! | state   | probe                         | next state                  |
//! |---------|-------------------------------|-----------------------------|
//! | Clear   | hit, distance < min           | Locked                      |
//! | Clear   | hit, distance >= min          | Clear (distance unchanged)  |
//! | Locked  | hit                           | Locked                      |
//! | any     | no hit                        | Clear { desired distance }  |

use crate::physics::RayHit;

/// Latch state of the camera's line of sight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CollisionState {
    /// Not latched. The camera sits at `distance`, the desired distance of
    /// the most recent unobstructed frame.
    Clear {
        /// Distance used to place the camera.
        distance: f32,
    },
    /// Latched at the minimum collision distance.
    Locked,
}

impl CollisionState {
    /// Advance the latch with this frame's probe result.
    #[must_use]
    pub fn transition(
        self,
        hit: Option<RayHit>,
        desired_distance: f32,
        min_collision_distance: f32,
    ) -> Self {
        match (self, hit) {
            (_, None) => Self::Clear {
                distance: desired_distance,
            },
            (Self::Clear { .. }, Some(hit))
                if hit.distance < min_collision_distance =>
            {
                Self::Locked
            }
            (state, Some(_)) => state,
        }
    }

    /// Distance at which to place the camera.
    #[must_use]
    pub fn effective_distance(self, min_collision_distance: f32) -> f32 {
        match self {
            Self::Clear { distance } => distance,
            Self::Locked => min_collision_distance,
        }
    }

    /// Whether the latch is engaged.
    #[must_use]
    pub fn is_locked(self) -> bool {
        matches!(self, Self::Locked)
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    const MIN: f32 = 1.8;

    fn hit(distance: f32) -> Option<RayHit> {
        Some(RayHit {
            distance,
            point: Vec3::Z * distance,
        })
    }

    #[test]
    fn close_hit_locks_to_minimum() {
        let state = CollisionState::Clear { distance: 5.0 }
            .transition(hit(1.0), 5.0, MIN);
        assert_eq!(state, CollisionState::Locked);
        assert_eq!(state.effective_distance(MIN), MIN);
    }

    #[test]
    fn far_hit_keeps_previous_distance() {
        let state = CollisionState::Clear { distance: 5.0 }
            .transition(hit(3.0), 7.0, MIN);
        assert_eq!(state, CollisionState::Clear { distance: 5.0 });
    }

    #[test]
    fn locked_ignores_further_hits() {
        let mut state = CollisionState::Locked;
        for d in [0.2, 1.7, 3.0, 0.9, 4.5] {
            state = state.transition(hit(d), 6.0, MIN);
            assert!(state.is_locked());
            assert_eq!(state.effective_distance(MIN), MIN);
        }
    }

    #[test]
    fn clear_frame_releases_latch() {
        let state = CollisionState::Locked.transition(None, 6.5, MIN);
        assert!(!state.is_locked());
        assert_eq!(state.effective_distance(MIN), 6.5);
    }

    #[test]
    fn hit_exactly_at_minimum_does_not_lock() {
        let state = CollisionState::Clear { distance: 4.0 }
            .transition(hit(MIN), 4.0, MIN);
        assert!(!state.is_locked());
    }
}
