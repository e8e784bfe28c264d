//! Raycast boundary between the camera rig and the host's physics.
//!
//! The rig never inspects scene geometry itself. It asks a [`RaycastQuery`]
//! for the nearest obstruction along a ray, filtered by a [`LayerMask`].
//! [`ColliderSet`] is a small reference implementation used by the viewer
//! and the tests.

mod colliders;

use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub use colliders::{Collider, ColliderSet, Shape};

/// Bit set of collision layers (bit `n` set = layer `n` included).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(transparent)]
pub struct LayerMask(pub u32);

impl LayerMask {
    /// Every layer.
    pub const ALL: Self = Self(u32::MAX);
    /// No layer; casts filtered by this mask never hit.
    pub const NONE: Self = Self(0);

    /// Mask containing only `layer` (0..=31). Out-of-range layers yield an
    /// empty mask.
    #[must_use]
    pub fn layer(layer: u8) -> Self {
        Self(1u32.checked_shl(u32::from(layer)).unwrap_or(0))
    }

    /// Whether `layer` is part of this mask.
    #[must_use]
    pub fn contains(self, layer: u8) -> bool {
        (self.0 & Self::layer(layer).0) != 0
    }

    /// Union of two masks.
    #[must_use]
    pub const fn with(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

impl Default for LayerMask {
    fn default() -> Self {
        Self::ALL
    }
}

/// Half-line with a unit direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// World-space start point.
    pub origin: Vec3,
    /// Unit direction.
    pub direction: Vec3,
}

impl Ray {
    /// Create a ray, normalizing `direction`. A zero direction stays zero
    /// and such a ray hits nothing.
    #[must_use]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Point at distance `t` along the ray.
    #[must_use]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Nearest obstruction found by a raycast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Distance from the ray origin to the hit point.
    pub distance: f32,
    /// World-space hit point.
    pub point: Vec3,
}

/// Host physics query: nearest obstruction along a ray.
pub trait RaycastQuery {
    /// Return the closest hit within `max_distance` on a layer contained in
    /// `mask`, or `None` when the segment is clear.
    fn cast_ray(
        &self,
        ray: Ray,
        max_distance: f32,
        mask: LayerMask,
    ) -> Option<RayHit>;
}

impl<T: RaycastQuery + ?Sized> RaycastQuery for &T {
    fn cast_ray(
        &self,
        ray: Ray,
        max_distance: f32,
        mask: LayerMask,
    ) -> Option<RayHit> {
        (**self).cast_ray(ray, max_distance, mask)
    }
}

/// Empty world: every cast is clear.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoObstacles;

impl RaycastQuery for NoObstacles {
    fn cast_ray(&self, _: Ray, _: f32, _: LayerMask) -> Option<RayHit> {
        None
    }
}
