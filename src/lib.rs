// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Third-person follow camera rig built on glam.
//!
//! Tether places a camera behind a moving target, turns it with mouse
//! input, zooms it with the scroll wheel, and pulls it in when scene
//! geometry blocks the view. A second small component locks and hides the
//! cursor at startup.
//!
//! # Key entry points
//!
//! - [`camera::CameraRig`] - the follow rig and its per-frame update
//! - [`camera::RigState`] - the same update as a copyable state value
//! - [`options::Options`] - configuration with TOML presets
//! - [`physics::RaycastQuery`] - the obstruction query the host provides
//! - [`cursor::CursorMode`] - startup cursor lock
//!
//! # Frame contract
//!
//! Each frame the host gathers input (see [`input::InputAccumulator`]),
//! calls [`camera::CameraRig::integrate_zoom`] at any point, moves the
//! target, then calls [`camera::CameraRig::late_update`] with a
//! [`physics::RaycastQuery`] over its scene. Nothing in the crate spawns
//! threads or blocks.

pub mod camera;
pub mod cursor;
pub mod error;
pub mod gizmos;
pub mod input;
pub mod options;
pub mod physics;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use camera::{CameraRig, FollowTarget, RigState};
pub use error::TetherError;
pub use options::Options;
#[cfg(feature = "viewer")]
pub use viewer::Viewer;
