//! Debug-draw boundary.
//!
//! The rig describes its diagnostic shapes through [`DebugDraw`]; the host
//! decides how (or whether) to render them. [`GizmoBuffer`] records them for
//! hosts that batch once per frame and for tests.

use glam::Vec3;

/// Linear RGBA color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GizmoColor(pub [f32; 4]);

impl GizmoColor {
    /// Opaque blue.
    pub const BLUE: Self = Self([0.0, 0.0, 1.0, 1.0]);
    /// Opaque red.
    pub const RED: Self = Self([1.0, 0.0, 0.0, 1.0]);
}

/// Sink for diagnostic wireframe shapes.
pub trait DebugDraw {
    /// Wireframe sphere.
    fn wire_sphere(&mut self, center: Vec3, radius: f32, color: GizmoColor);
    /// Line segment.
    fn line(&mut self, start: Vec3, end: Vec3, color: GizmoColor);
}

/// A recorded shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gizmo {
    /// See [`DebugDraw::wire_sphere`].
    WireSphere {
        /// Sphere center.
        center: Vec3,
        /// Sphere radius.
        radius: f32,
        /// Draw color.
        color: GizmoColor,
    },
    /// See [`DebugDraw::line`].
    Line {
        /// Segment start.
        start: Vec3,
        /// Segment end.
        end: Vec3,
        /// Draw color.
        color: GizmoColor,
    },
}

/// Records shapes until drained.
#[derive(Debug, Clone, Default)]
pub struct GizmoBuffer {
    gizmos: Vec<Gizmo>,
}

impl GizmoBuffer {
    /// Empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shapes recorded so far.
    #[must_use]
    pub fn gizmos(&self) -> &[Gizmo] {
        &self.gizmos
    }

    /// Take every recorded shape, leaving the buffer empty.
    pub fn drain(&mut self) -> Vec<Gizmo> {
        std::mem::take(&mut self.gizmos)
    }
}

impl DebugDraw for GizmoBuffer {
    fn wire_sphere(&mut self, center: Vec3, radius: f32, color: GizmoColor) {
        self.gizmos.push(Gizmo::WireSphere {
            center,
            radius,
            color,
        });
    }

    fn line(&mut self, start: Vec3, end: Vec3, color: GizmoColor) {
        self.gizmos.push(Gizmo::Line { start, end, color });
    }
}
