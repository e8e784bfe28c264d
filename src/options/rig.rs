use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::physics::LayerMask;

const SMOOTH_SPEED_RANGE: (f32, f32) = (0.5, 25.0);
const MOUSE_SENSITIVITY_RANGE: (f32, f32) = (10.0, 70.0);
const PITCH_RANGE: (f32, f32) = (-89.0, 89.0);

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera Rig", inline)]
#[serde(default)]
/// Follow, look, zoom and collision parameters of the camera rig.
pub struct RigOptions {
    /// Initial distance from the camera to the target.
    #[schemars(title = "Distance", range(min = 0.0), extend("step" = 0.5))]
    pub distance: f32,
    /// Position smoothing rate (per second).
    #[schemars(title = "Smooth Speed", range(min = 0.5, max = 25.0), extend("step" = 0.5))]
    pub smooth_speed: f32,
    /// Degrees of rotation per second per unit of mouse movement.
    #[schemars(title = "Mouse Sensitivity", range(min = 10.0, max = 70.0), extend("step" = 1.0))]
    pub mouse_sensitivity: f32,
    /// Lowest pitch in degrees (negative looks up at the target).
    #[schemars(title = "Min Pitch", range(min = -89.0, max = 89.0), extend("step" = 1.0))]
    pub pitch_min: f32,
    /// Highest pitch in degrees (positive looks down on the target).
    #[schemars(title = "Max Pitch", range(min = -89.0, max = 89.0), extend("step" = 1.0))]
    pub pitch_max: f32,
    /// Distance units per second per unit of scroll.
    #[schemars(title = "Zoom Speed", range(min = 0.0), extend("step" = 1.0))]
    pub zoom_speed: f32,
    /// Closest zoom distance.
    #[schemars(title = "Min Zoom", range(min = 0.0), extend("step" = 0.5))]
    pub min_zoom: f32,
    /// Farthest zoom distance.
    #[schemars(title = "Max Zoom", range(min = 0.0), extend("step" = 0.5))]
    pub max_zoom: f32,
    /// Layers that block the camera's line of sight.
    #[schemars(skip)]
    pub collision_mask: LayerMask,
    /// Distance the camera snaps to when an obstruction is this close to the
    /// target.
    #[schemars(title = "Min Collision Distance", range(min = 0.0), extend("step" = 0.1))]
    pub min_collision_distance: f32,
}

impl Default for RigOptions {
    fn default() -> Self {
        Self {
            distance: 5.0,
            smooth_speed: 6.0,
            mouse_sensitivity: 45.0,
            pitch_min: -10.0,
            pitch_max: 40.0,
            zoom_speed: 80.0,
            min_zoom: 2.0,
            max_zoom: 15.0,
            collision_mask: LayerMask::ALL,
            min_collision_distance: 1.8,
        }
    }
}

impl RigOptions {
    /// Return a copy with every value pulled into its valid range.
    ///
    /// Out-of-range values are corrected, never rejected: an inverted pitch
    /// or zoom range collapses onto its lower bound.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        let mut out = self.clone();
        out.replace_non_finite();

        out.smooth_speed = clamp_logged(
            "smooth_speed",
            out.smooth_speed,
            SMOOTH_SPEED_RANGE,
        );
        out.mouse_sensitivity = clamp_logged(
            "mouse_sensitivity",
            out.mouse_sensitivity,
            MOUSE_SENSITIVITY_RANGE,
        );
        out.pitch_min = clamp_logged("pitch_min", out.pitch_min, PITCH_RANGE);
        out.pitch_max = clamp_logged("pitch_max", out.pitch_max, PITCH_RANGE);
        if out.pitch_max < out.pitch_min {
            log::debug!(
                "pitch_max {} below pitch_min {}, raising it",
                out.pitch_max,
                out.pitch_min
            );
            out.pitch_max = out.pitch_min;
        }

        out.zoom_speed = out.zoom_speed.max(0.0);
        out.min_zoom = out.min_zoom.max(0.0);
        if out.max_zoom < out.min_zoom {
            log::debug!(
                "max_zoom {} below min_zoom {}, raising it",
                out.max_zoom,
                out.min_zoom
            );
            out.max_zoom = out.min_zoom;
        }
        out.min_collision_distance = out.min_collision_distance.max(0.0);

        out
    }

    /// Clamp a distance into the zoom range. An inverted range collapses
    /// onto `min_zoom`.
    #[must_use]
    pub fn clamp_zoom(&self, distance: f32) -> f32 {
        clamp_total(distance, self.min_zoom, self.max_zoom)
    }

    /// Clamp a pitch angle into the pitch range. An inverted range
    /// collapses onto `pitch_min`.
    #[must_use]
    pub fn clamp_pitch(&self, pitch: f32) -> f32 {
        clamp_total(pitch, self.pitch_min, self.pitch_max)
    }

    /// Reset NaN and infinite fields to their defaults.
    fn replace_non_finite(&mut self) {
        let defaults = Self::default();
        for (name, value, default) in [
            ("distance", &mut self.distance, defaults.distance),
            ("smooth_speed", &mut self.smooth_speed, defaults.smooth_speed),
            (
                "mouse_sensitivity",
                &mut self.mouse_sensitivity,
                defaults.mouse_sensitivity,
            ),
            ("pitch_min", &mut self.pitch_min, defaults.pitch_min),
            ("pitch_max", &mut self.pitch_max, defaults.pitch_max),
            ("zoom_speed", &mut self.zoom_speed, defaults.zoom_speed),
            ("min_zoom", &mut self.min_zoom, defaults.min_zoom),
            ("max_zoom", &mut self.max_zoom, defaults.max_zoom),
            (
                "min_collision_distance",
                &mut self.min_collision_distance,
                defaults.min_collision_distance,
            ),
        ] {
            if !value.is_finite() {
                log::debug!("{name} {value} is not finite, using {default}");
                *value = default;
            }
        }
    }
}

/// `f32::clamp` without its panics: `hi` below `lo` or a NaN bound falls
/// back to the other bound.
fn clamp_total(value: f32, lo: f32, hi: f32) -> f32 {
    value.max(lo).min(hi.max(lo))
}

fn clamp_logged(name: &str, value: f32, (lo, hi): (f32, f32)) -> f32 {
    let clamped = value.clamp(lo, hi);
    if clamped != value {
        log::debug!("{name} {value} out of range, using {clamped}");
    }
    clamped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_already_sane() {
        let opts = RigOptions::default();
        assert_eq!(opts.sanitized(), opts);
    }

    #[test]
    fn inverted_pitch_range_collapses_to_min() {
        let opts = RigOptions {
            pitch_min: 30.0,
            pitch_max: 10.0,
            ..RigOptions::default()
        }
        .sanitized();
        assert_eq!(opts.pitch_min, 30.0);
        assert_eq!(opts.pitch_max, 30.0);
    }

    #[test]
    fn inverted_zoom_range_collapses_to_min() {
        let opts = RigOptions {
            min_zoom: 8.0,
            max_zoom: 3.0,
            ..RigOptions::default()
        }
        .sanitized();
        assert_eq!(opts.max_zoom, 8.0);
        assert_eq!(opts.clamp_zoom(20.0), 8.0);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let opts = RigOptions {
            smooth_speed: 100.0,
            mouse_sensitivity: 1.0,
            pitch_min: -120.0,
            pitch_max: 120.0,
            min_collision_distance: -1.0,
            ..RigOptions::default()
        }
        .sanitized();
        assert_eq!(opts.smooth_speed, 25.0);
        assert_eq!(opts.mouse_sensitivity, 10.0);
        assert_eq!(opts.pitch_min, -89.0);
        assert_eq!(opts.pitch_max, 89.0);
        assert_eq!(opts.min_collision_distance, 0.0);
    }

    #[test]
    fn clamps_tolerate_unsanitized_ranges() {
        let opts = RigOptions {
            pitch_min: 20.0,
            pitch_max: 5.0,
            min_zoom: 8.0,
            max_zoom: 3.0,
            ..RigOptions::default()
        };
        assert_eq!(opts.clamp_pitch(-40.0), 20.0);
        assert_eq!(opts.clamp_pitch(60.0), 20.0);
        assert_eq!(opts.clamp_zoom(1.0), 8.0);
        assert_eq!(opts.clamp_zoom(30.0), 8.0);

        let nan_bounds = RigOptions {
            pitch_min: f32::NAN,
            max_zoom: f32::NAN,
            ..RigOptions::default()
        };
        assert_eq!(nan_bounds.clamp_pitch(60.0), 40.0);
        assert_eq!(nan_bounds.clamp_zoom(1.0), 2.0);
    }

    #[test]
    fn non_finite_values_fall_back_to_defaults() {
        let opts = RigOptions {
            distance: f32::INFINITY,
            smooth_speed: f32::NAN,
            pitch_min: f32::NAN,
            max_zoom: f32::NEG_INFINITY,
            min_collision_distance: f32::NAN,
            ..RigOptions::default()
        }
        .sanitized();
        assert_eq!(opts, RigOptions::default());
    }
}
