//! Standalone demo window backed by winit.
//!
//! The window shows no rendering; it drives a [`CameraRig`] from real
//! mouse and keyboard input against a small walled arena and reports the
//! camera state in the title bar and the log. WASD moves the target, the
//! mouse turns the camera, the wheel zooms, P pauses game time and Escape
//! quits.
//!
//! ```no_run
//! # use tether::Viewer;
//! Viewer::builder()
//!     .with_title("Tether")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::{cell::Cell, rc::Rc};

use glam::{Quat, Vec2, Vec3};
use web_time::{Duration, Instant};
use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::{
    camera::CameraRig,
    cursor::CursorMode,
    error::TetherError,
    gizmos::GizmoBuffer,
    input::{InputAccumulator, InputEvent},
    options::Options,
    physics::{Collider, ColliderSet},
    util::frame_clock::FrameClock,
};

/// Device motion counts to look-axis units.
const MOTION_SCALE: f32 = 0.1;
/// Target walking speed in units per second.
const MOVE_SPEED: f32 = 4.0;
/// Layer of the arena walls and pillars.
const WALL_LAYER: u8 = 0;
/// How often the camera state is logged and shown in the title.
const REPORT_INTERVAL: Duration = Duration::from_millis(500);

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    title: String,
}

impl ViewerBuilder {
    /// Create a builder with sensible defaults (title "Tether", default
    /// options).
    fn new() -> Self {
        Self {
            options: None,
            title: "Tether".into(),
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options.unwrap_or_default(),
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window driving a camera rig around a test arena.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    ///
    /// # Errors
    ///
    /// [`TetherError::Viewer`] if the event loop cannot start or fails.
    pub fn run(self) -> Result<(), TetherError> {
        let event_loop =
            EventLoop::new().map_err(|e| TetherError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let player = Rc::new(Cell::new(Vec3::new(0.0, 1.0, 0.0)));
        let rig = CameraRig::builder()
            .options(&self.options)
            .initial_transform(Vec3::new(0.0, 3.0, 8.0), Quat::IDENTITY)
            .follow(Rc::clone(&player))
            .build()?;

        let mut app = ViewerApp {
            window: None,
            title: self.title,
            cursor: CursorMode::from_options(&self.options.cursor),
            rig,
            player,
            keys: MoveKeys::default(),
            input: InputAccumulator::with_motion_scale(MOTION_SCALE),
            clock: FrameClock::default(),
            arena: arena(),
            gizmos: GizmoBuffer::new(),
            last_report: Instant::now(),
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| TetherError::Viewer(e.to_string()))
    }
}

/// Square room with a few pillars, all on [`WALL_LAYER`].
fn arena() -> ColliderSet {
    let mut set = ColliderSet::new();
    let (h, t, height) = (12.0, 0.5, 4.0);
    for (min, max) in [
        (Vec3::new(-h, 0.0, -h - t), Vec3::new(h, height, -h)),
        (Vec3::new(-h, 0.0, h), Vec3::new(h, height, h + t)),
        (Vec3::new(-h - t, 0.0, -h), Vec3::new(-h, height, h)),
        (Vec3::new(h, 0.0, -h), Vec3::new(h + t, height, h)),
    ] {
        set.insert(Collider::aabb(min, max, WALL_LAYER));
    }
    for center in [
        Vec3::new(4.0, 1.0, 4.0),
        Vec3::new(-5.0, 1.0, 2.0),
        Vec3::new(1.0, 1.0, -6.0),
    ] {
        set.insert(Collider::sphere(center, 1.0, WALL_LAYER));
    }
    set
}

/// WASD state.
#[derive(Debug, Default)]
struct MoveKeys {
    forward: bool,
    back: bool,
    left: bool,
    right: bool,
}

impl MoveKeys {
    /// Update from a key event. Returns `false` for keys it does not track.
    fn handle(&mut self, code: KeyCode, pressed: bool) -> bool {
        let slot = match code {
            KeyCode::KeyW => &mut self.forward,
            KeyCode::KeyS => &mut self.back,
            KeyCode::KeyA => &mut self.left,
            KeyCode::KeyD => &mut self.right,
            _ => return false,
        };
        *slot = pressed;
        true
    }

    /// Movement axis (`x` right, `y` forward).
    fn axis(&self) -> Vec2 {
        let axis = |pos: bool, neg: bool| {
            f32::from(u8::from(pos)) - f32::from(u8::from(neg))
        };
        Vec2::new(axis(self.right, self.left), axis(self.forward, self.back))
            .normalize_or_zero()
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Window>,
    title: String,
    cursor: CursorMode,
    rig: CameraRig<Rc<Cell<Vec3>>>,
    player: Rc<Cell<Vec3>>,
    keys: MoveKeys,
    input: InputAccumulator,
    clock: FrameClock,
    arena: ColliderSet,
    gizmos: GizmoBuffer,
    last_report: Instant,
}

impl ViewerApp {
    /// Lock the cursor if configured and not yet done.
    fn apply_cursor_mode(&mut self) {
        let Some(window) = self.window.as_mut() else {
            return;
        };
        if let Err(e) = self.cursor.apply(window) {
            log::warn!("{e}");
        }
    }

    fn toggle_pause(&mut self) {
        let scale = if self.clock.time_scale() > 0.0 { 0.0 } else { 1.0 };
        self.clock.set_time_scale(scale);
        log::info!("time scale {scale}");
    }

    /// One frame: zoom, move the target, then place the camera.
    fn frame(&mut self) {
        let time = self.clock.tick();
        let input = self.input.take_frame();

        self.rig.integrate_zoom(input.scroll, time.delta);

        // Walk relative to where the camera faces, on the ground plane.
        let look = self.rig.look_direction();
        let forward = Vec3::new(look.x, 0.0, look.z).normalize_or_zero();
        let right = forward.cross(Vec3::Y);
        let axis = self.keys.axis();
        let step = (right * axis.x + forward * axis.y) * MOVE_SPEED * time.delta;
        self.player.set(self.player.get() + step);

        self.rig.late_update(input.look, time, &self.arena);

        self.rig.draw_gizmos(&mut self.gizmos);
        let gizmos = self.gizmos.drain();
        log::trace!("{} gizmos this frame", gizmos.len());

        let now = Instant::now();
        if now.duration_since(self.last_report) >= REPORT_INTERVAL {
            self.last_report = now;
            self.report();
        }
    }

    fn report(&self) {
        let pos = self.rig.position();
        let status = format!(
            "{} | {:.0} fps | camera ({:.1}, {:.1}, {:.1}) | distance {:.2}/{:.2}{}",
            self.title,
            self.clock.fps(),
            pos.x,
            pos.y,
            pos.z,
            self.rig.effective_distance(),
            self.rig.desired_distance(),
            if self.rig.collision_locked() { " | blocked" } else { "" },
        );
        log::debug!("{status}");
        if let Some(window) = &self.window {
            window.set_title(&status);
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(&self.title)
            .with_inner_size(winit::dpi::LogicalSize::new(960, 540));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => w,
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        window.request_redraw();
        self.window = Some(window);
        self.apply_cursor_mode();
        log::info!("viewer started");
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Focused(true) => self.apply_cursor_mode(),

            WindowEvent::RedrawRequested => {
                self.frame();
                if let Some(w) = &self.window {
                    w.request_redraw();
                }
            }

            WindowEvent::MouseWheel { delta, .. } => {
                self.input.handle_event(InputEvent::from_wheel(delta));
            }

            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                let pressed = event.state == ElementState::Pressed;
                if self.keys.handle(code, pressed) || !pressed || event.repeat {
                    return;
                }
                match code {
                    KeyCode::KeyP => self.toggle_pause(),
                    KeyCode::Escape => event_loop.exit(),
                    _ => {}
                }
            }

            _ => (),
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.input.handle_event(InputEvent::from_device_motion(delta));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::{LayerMask, Ray, RaycastQuery};

    #[test]
    fn move_keys_axis_is_normalized() {
        let mut keys = MoveKeys::default();
        assert!(keys.handle(KeyCode::KeyW, true));
        assert!(keys.handle(KeyCode::KeyD, true));
        assert!(!keys.handle(KeyCode::KeyP, true));
        let axis = keys.axis();
        assert!((axis.length() - 1.0).abs() < 1e-5);
        assert!(axis.x > 0.0 && axis.y > 0.0);

        assert!(keys.handle(KeyCode::KeyW, false));
        assert!(keys.handle(KeyCode::KeyD, false));
        assert_eq!(keys.axis(), Vec2::ZERO);
    }

    #[test]
    fn arena_walls_block_the_camera_ray() {
        let arena = arena();
        let hit = arena
            .cast_ray(
                Ray::new(Vec3::new(0.0, 1.0, 11.0), Vec3::Z),
                5.0,
                LayerMask::layer(WALL_LAYER),
            )
            .unwrap();
        assert!((hit.distance - 1.0).abs() < 1e-5);
    }
}
