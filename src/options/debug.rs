use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Debug visualization toggles.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Debug", inline)]
#[serde(default)]
pub struct DebugOptions {
    /// Wire sphere of the minimum collision distance around the target.
    #[schemars(title = "Show Collision Sphere")]
    pub show_collision_sphere: bool,
    /// Line along the collision probe ray.
    #[schemars(title = "Show Collision Ray")]
    pub show_collision_ray: bool,
}

impl Default for DebugOptions {
    fn default() -> Self {
        Self {
            show_collision_sphere: true,
            show_collision_ray: true,
        }
    }
}
