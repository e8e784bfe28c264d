use glam::{EulerRot, Quat, Vec2, Vec3};

/// Camera-space forward axis (right-handed, looking down `-Z`).
pub const FORWARD: Vec3 = Vec3::NEG_Z;

/// Euler orientation in degrees.
///
/// Positive pitch tilts the view down, positive yaw turns it to the right
/// (clockwise seen from above). Rotations compose yaw, then pitch, then
/// roll.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Orientation {
    /// Rotation about the camera's right axis.
    pub pitch: f32,
    /// Rotation about the world up axis.
    pub yaw: f32,
    /// Rotation about the view axis. The rig keeps this at zero.
    pub roll: f32,
}

impl Orientation {
    /// Orientation from pitch and yaw with no roll.
    #[must_use]
    pub fn new(pitch: f32, yaw: f32) -> Self {
        Self {
            pitch,
            yaw,
            roll: 0.0,
        }
    }

    /// Decompose a rotation. Angles come back in `(-180, 180]`, pitch in
    /// `[-90, 90]`.
    #[must_use]
    pub fn from_quat(rotation: Quat) -> Self {
        let (yaw, pitch, roll) = rotation.normalize().to_euler(EulerRot::YXZ);
        Self {
            pitch: -pitch.to_degrees(),
            yaw: -yaw.to_degrees(),
            roll: -roll.to_degrees(),
        }
    }

    /// Rotation represented by these angles.
    #[must_use]
    pub fn to_quat(self) -> Quat {
        Quat::from_euler(
            EulerRot::YXZ,
            -self.yaw.to_radians(),
            -self.pitch.to_radians(),
            -self.roll.to_radians(),
        )
    }

    /// Unit view direction.
    #[must_use]
    pub fn look_direction(self) -> Vec3 {
        self.to_quat() * FORWARD
    }

    /// Integrate one frame of look input. `look.y > 0` (pointer moved up)
    /// lowers the pitch so the view tilts up.
    pub fn apply_look(&mut self, look: Vec2, sensitivity: f32, dt: f32) {
        self.yaw += look.x * sensitivity * dt;
        self.pitch -= look.y * sensitivity * dt;
    }
}
