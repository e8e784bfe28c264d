//! Startup cursor mode.
//!
//! When enabled, the pointer is locked to the window and hidden once at
//! startup. Nothing is restored afterwards.

use crate::{error::TetherError, options::CursorOptions};

/// Pointer confinement requested from the host window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorGrab {
    /// Pointer moves freely.
    None,
    /// Pointer cannot leave the window.
    Confined,
    /// Pointer is pinned in place; only relative motion is reported.
    Locked,
}

/// Host window cursor state.
pub trait CursorControl {
    /// Change pointer confinement.
    ///
    /// # Errors
    ///
    /// [`TetherError::Cursor`] when the platform does not support `grab`.
    fn set_grab(&mut self, grab: CursorGrab) -> Result<(), TetherError>;
    /// Show or hide the pointer.
    fn set_visible(&mut self, visible: bool);
}

/// One-shot cursor lock.
#[derive(Debug, Clone)]
pub struct CursorMode {
    lock_cursor: bool,
    applied: bool,
}

impl CursorMode {
    /// Cursor mode from options.
    #[must_use]
    pub fn from_options(options: &CursorOptions) -> Self {
        Self {
            lock_cursor: options.lock_cursor,
            applied: false,
        }
    }

    /// Lock and hide the pointer if configured. Only the first successful
    /// call has any effect.
    ///
    /// Falls back to [`CursorGrab::Confined`] when the platform refuses
    /// [`CursorGrab::Locked`].
    ///
    /// # Errors
    ///
    /// [`TetherError::Cursor`] when neither grab mode is supported. The
    /// cursor stays visible and a later call may retry.
    pub fn apply<C: CursorControl + ?Sized>(
        &mut self,
        control: &mut C,
    ) -> Result<(), TetherError> {
        if self.applied {
            return Ok(());
        }
        if !self.lock_cursor {
            self.applied = true;
            return Ok(());
        }

        if let Err(e) = control.set_grab(CursorGrab::Locked) {
            log::debug!("cursor lock unavailable ({e}), confining instead");
            control.set_grab(CursorGrab::Confined)?;
        }
        control.set_visible(false);
        self.applied = true;
        log::info!("cursor locked and hidden");
        Ok(())
    }

    /// Whether [`apply`](Self::apply) has completed.
    #[must_use]
    pub fn is_applied(&self) -> bool {
        self.applied
    }
}

#[cfg(feature = "viewer")]
impl CursorControl for winit::window::Window {
    fn set_grab(&mut self, grab: CursorGrab) -> Result<(), TetherError> {
        let mode = match grab {
            CursorGrab::None => winit::window::CursorGrabMode::None,
            CursorGrab::Confined => winit::window::CursorGrabMode::Confined,
            CursorGrab::Locked => winit::window::CursorGrabMode::Locked,
        };
        self.set_cursor_grab(mode)
            .map_err(|e| TetherError::Cursor(e.to_string()))
    }

    fn set_visible(&mut self, visible: bool) {
        self.set_cursor_visible(visible);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakeWindow {
        supports_lock: bool,
        supports_confine: bool,
        grab: Option<CursorGrab>,
        visible: bool,
        calls: usize,
    }

    impl CursorControl for FakeWindow {
        fn set_grab(&mut self, grab: CursorGrab) -> Result<(), TetherError> {
            self.calls += 1;
            let supported = match grab {
                CursorGrab::None => true,
                CursorGrab::Confined => self.supports_confine,
                CursorGrab::Locked => self.supports_lock,
            };
            if supported {
                self.grab = Some(grab);
                Ok(())
            } else {
                Err(TetherError::Cursor(format!("{grab:?} unsupported")))
            }
        }

        fn set_visible(&mut self, visible: bool) {
            self.visible = visible;
        }
    }

    fn window(lock: bool, confine: bool) -> FakeWindow {
        FakeWindow {
            supports_lock: lock,
            supports_confine: confine,
            visible: true,
            ..FakeWindow::default()
        }
    }

    #[test]
    fn locks_and_hides_once() {
        let mut mode = CursorMode::from_options(&CursorOptions::default());
        let mut win = window(true, true);

        mode.apply(&mut win).unwrap();
        assert_eq!(win.grab, Some(CursorGrab::Locked));
        assert!(!win.visible);
        assert!(mode.is_applied());

        mode.apply(&mut win).unwrap();
        assert_eq!(win.calls, 1);
    }

    #[test]
    fn falls_back_to_confined() {
        let mut mode = CursorMode::from_options(&CursorOptions::default());
        let mut win = window(false, true);
        mode.apply(&mut win).unwrap();
        assert_eq!(win.grab, Some(CursorGrab::Confined));
        assert!(!win.visible);
    }

    #[test]
    fn unsupported_platform_reports_error() {
        let mut mode = CursorMode::from_options(&CursorOptions::default());
        let mut win = window(false, false);
        let err = mode.apply(&mut win).unwrap_err();
        assert!(matches!(err, TetherError::Cursor(_)));
        assert!(win.visible);
        assert!(!mode.is_applied());
    }

    #[test]
    fn disabled_mode_leaves_cursor_alone() {
        let mut mode = CursorMode::from_options(&CursorOptions {
            lock_cursor: false,
        });
        let mut win = window(true, true);
        mode.apply(&mut win).unwrap();
        assert_eq!(win.grab, None);
        assert!(win.visible);
        assert_eq!(win.calls, 0);
    }
}
