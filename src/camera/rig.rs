//! Third-person follow rig.
//!
//! A frame runs in two phases. [`CameraRig::integrate_zoom`] may run any
//! time early in the frame; [`CameraRig::late_update`] must run after the
//! target has moved for the frame. [`CameraRig::tick`] runs both in order.
//!
//! ```
//! # use glam::{Quat, Vec2, Vec3};
//! # use tether::camera::CameraRig;
//! # use tether::input::FrameInput;
//! # use tether::physics::NoObstacles;
//! # use tether::util::frame_clock::FrameTime;
//! let mut rig = CameraRig::builder()
//!     .initial_transform(Vec3::new(0.0, 3.0, 8.0), Quat::IDENTITY)
//!     .follow(Vec3::Y)
//!     .build()?;
//!
//! let input = FrameInput::new(Vec2::new(0.5, 0.0), 0.0);
//! rig.tick(input, FrameTime::new(1.0 / 60.0), &NoObstacles);
//! assert!(rig.orientation().yaw > 0.0);
//! # Ok::<(), tether::error::TetherError>(())
//! ```

use glam::{Quat, Vec2, Vec3};

use super::{
    collision::CollisionState, orientation::Orientation, target::FollowTarget,
};
use crate::{
    error::TetherError,
    gizmos::{DebugDraw, GizmoColor},
    input::FrameInput,
    options::{DebugOptions, Options, RigOptions},
    physics::{Ray, RaycastQuery},
    util::{frame_clock::FrameTime, interpolation::slerp_position},
};

/// Per-camera state advanced once per frame.
///
/// Every method takes the (sanitized) options explicitly, so the state can
/// be driven from any host loop without a [`CameraRig`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigState {
    /// Look angles.
    pub orientation: Orientation,
    /// Zoom distance, always within the zoom range after a zoom step.
    pub desired_distance: f32,
    /// Collision latch.
    pub collision: CollisionState,
    /// Camera world position.
    pub position: Vec3,
    /// Camera world rotation.
    pub rotation: Quat,
}

impl RigState {
    /// State for a camera starting at `position` / `rotation`. Roll is
    /// discarded; the desired distance starts at `options.distance` pulled
    /// into the zoom range.
    #[must_use]
    pub fn new(options: &RigOptions, position: Vec3, rotation: Quat) -> Self {
        let mut orientation = Orientation::from_quat(rotation);
        orientation.roll = 0.0;
        let desired_distance = options.clamp_zoom(options.distance);

        Self {
            orientation,
            desired_distance,
            collision: CollisionState::Clear {
                distance: desired_distance,
            },
            position,
            rotation: orientation.to_quat(),
        }
    }

    /// Phase A: move the desired distance by the scroll input.
    pub fn integrate_zoom(&mut self, options: &RigOptions, scroll: f32, dt: f32) {
        self.desired_distance = options.clamp_zoom(
            self.desired_distance - scroll * options.zoom_speed * dt,
        );
    }

    /// Phase B: rotate, probe for obstructions, and move toward the
    /// resulting position.
    pub fn late_update<R: RaycastQuery + ?Sized>(
        &mut self,
        options: &RigOptions,
        target: Vec3,
        look: Vec2,
        time: FrameTime,
        raycaster: &R,
    ) {
        self.orientation
            .apply_look(look, options.mouse_sensitivity, time.delta);
        self.orientation.pitch = options.clamp_pitch(self.orientation.pitch);
        self.rotation = self.orientation.to_quat();

        let look_direction = self.orientation.look_direction();
        let hit = raycaster.cast_ray(
            Ray::new(target, -look_direction),
            self.desired_distance,
            options.collision_mask,
        );

        let previous = self.collision;
        self.collision = previous.transition(
            hit,
            self.desired_distance,
            options.min_collision_distance,
        );
        if previous.is_locked() != self.collision.is_locked() {
            let state = if self.collision.is_locked() {
                "locked"
            } else {
                "released"
            };
            log::debug!(
                "camera collision {state} (hit {:?})",
                hit.map(|h| h.distance)
            );
        }

        let desired_position =
            target - look_direction * self.effective_distance(options);
        self.position = slerp_position(
            self.position,
            desired_position,
            options.smooth_speed * time.unscaled_delta,
        );
    }

    /// Both phases for one frame, returning the new state.
    #[must_use]
    pub fn advance<R: RaycastQuery + ?Sized>(
        &self,
        options: &RigOptions,
        target: Vec3,
        input: FrameInput,
        time: FrameTime,
        raycaster: &R,
    ) -> Self {
        let mut next = *self;
        next.integrate_zoom(options, input.scroll, time.delta);
        next.late_update(options, target, input.look, time, raycaster);
        next
    }

    /// Distance used to place the camera.
    #[must_use]
    pub fn effective_distance(&self, options: &RigOptions) -> f32 {
        self.collision
            .effective_distance(options.min_collision_distance)
    }

    /// Whether an obstruction has latched the camera in.
    #[must_use]
    pub fn collision_locked(&self) -> bool {
        self.collision.is_locked()
    }

    /// Unit view direction.
    #[must_use]
    pub fn look_direction(&self) -> Vec3 {
        self.orientation.look_direction()
    }

    /// Where the camera is heading for `target`, before smoothing.
    #[must_use]
    pub fn desired_position(&self, options: &RigOptions, target: Vec3) -> Vec3 {
        target - self.look_direction() * self.effective_distance(options)
    }
}

/// Fluent builder for [`CameraRig`].
pub struct CameraRigBuilder<T> {
    rig: RigOptions,
    debug: DebugOptions,
    position: Vec3,
    rotation: Quat,
    target: Option<T>,
}

impl<T: FollowTarget> CameraRigBuilder<T> {
    fn new() -> Self {
        Self {
            rig: RigOptions::default(),
            debug: DebugOptions::default(),
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            target: None,
        }
    }

    /// Take rig and debug settings from a full [`Options`].
    #[must_use]
    pub fn options(mut self, options: &Options) -> Self {
        self.rig = options.rig.clone();
        self.debug = options.debug.clone();
        self
    }

    /// Override the rig settings.
    #[must_use]
    pub fn rig_options(mut self, rig: RigOptions) -> Self {
        self.rig = rig;
        self
    }

    /// Override the debug drawing settings.
    #[must_use]
    pub fn debug_options(mut self, debug: DebugOptions) -> Self {
        self.debug = debug;
        self
    }

    /// Camera transform before the first frame.
    #[must_use]
    pub fn initial_transform(mut self, position: Vec3, rotation: Quat) -> Self {
        self.position = position;
        self.rotation = rotation;
        self
    }

    /// The target to follow. Required.
    #[must_use]
    pub fn follow(mut self, target: T) -> Self {
        self.target = Some(target);
        self
    }

    /// Sanitize the options and create the rig.
    ///
    /// # Errors
    ///
    /// [`TetherError::MissingTarget`] when [`follow`](Self::follow) was
    /// never called.
    pub fn build(self) -> Result<CameraRig<T>, TetherError> {
        let Some(target) = self.target else {
            log::error!("camera rig built without a follow target");
            return Err(TetherError::MissingTarget);
        };

        let options = self.rig.sanitized();
        let state = RigState::new(&options, self.position, self.rotation);

        Ok(CameraRig {
            options,
            debug: self.debug,
            target,
            state,
        })
    }
}

/// A camera following a [`FollowTarget`].
pub struct CameraRig<T> {
    options: RigOptions,
    debug: DebugOptions,
    target: T,
    state: RigState,
}

impl<T: FollowTarget> CameraRig<T> {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> CameraRigBuilder<T> {
        CameraRigBuilder::new()
    }

    /// Phase A: apply this frame's scroll input.
    pub fn integrate_zoom(&mut self, scroll: f32, dt: f32) {
        self.state.integrate_zoom(&self.options, scroll, dt);
    }

    /// Phase B: apply look input, resolve collisions and move the camera.
    /// Call after the target has moved for the frame.
    pub fn late_update<R: RaycastQuery + ?Sized>(
        &mut self,
        look: Vec2,
        time: FrameTime,
        raycaster: &R,
    ) {
        let target = self.target.position();
        self.state
            .late_update(&self.options, target, look, time, raycaster);
    }

    /// Run both phases for one frame.
    pub fn tick<R: RaycastQuery + ?Sized>(
        &mut self,
        input: FrameInput,
        time: FrameTime,
        raycaster: &R,
    ) {
        self.integrate_zoom(input.scroll, time.delta);
        self.late_update(input.look, time, raycaster);
    }

    /// Emit the collision sphere and probe ray, as enabled in the debug
    /// options.
    pub fn draw_gizmos<D: DebugDraw + ?Sized>(&self, draw: &mut D) {
        let target = self.target.position();
        if self.debug.show_collision_sphere {
            draw.wire_sphere(
                target,
                self.options.min_collision_distance,
                GizmoColor::BLUE,
            );
        }
        if self.debug.show_collision_ray {
            let end =
                target - self.look_direction() * self.state.desired_distance;
            draw.line(target, end, GizmoColor::RED);
        }
    }

    /// Sanitized rig options in use.
    #[must_use]
    pub fn options(&self) -> &RigOptions {
        &self.options
    }

    /// Followed target.
    #[must_use]
    pub fn target(&self) -> &T {
        &self.target
    }

    /// Current target position.
    #[must_use]
    pub fn target_position(&self) -> Vec3 {
        self.target.position()
    }

    /// Full per-frame state.
    #[must_use]
    pub fn state(&self) -> &RigState {
        &self.state
    }

    /// Camera world position.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.state.position
    }

    /// Camera world rotation.
    #[must_use]
    pub fn rotation(&self) -> Quat {
        self.state.rotation
    }

    /// Look angles.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.state.orientation
    }

    /// Unit view direction.
    #[must_use]
    pub fn look_direction(&self) -> Vec3 {
        self.state.look_direction()
    }

    /// Zoom distance.
    #[must_use]
    pub fn desired_distance(&self) -> f32 {
        self.state.desired_distance
    }

    /// Distance used to place the camera this frame.
    #[must_use]
    pub fn effective_distance(&self) -> f32 {
        self.state.effective_distance(&self.options)
    }

    /// Whether an obstruction has latched the camera in.
    #[must_use]
    pub fn collision_locked(&self) -> bool {
        self.state.collision_locked()
    }
}
