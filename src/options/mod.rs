//! Camera rig configuration with TOML preset support.
//!
//! All tweakable settings (rig follow/look/zoom/collision parameters, cursor
//! mode, debug drawing) are consolidated here. Options serialize to/from
//! TOML so rig presets can live next to the game's assets.

mod cursor;
mod debug;
mod rig;

use std::path::Path;

pub use cursor::CursorOptions;
pub use debug::DebugOptions;
pub use rig::RigOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::TetherError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[rig]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Follow, look, zoom and collision parameters.
    pub rig: RigOptions,
    /// Cursor lock applied at startup.
    pub cursor: CursorOptions,
    /// Debug visualization options.
    pub debug: DebugOptions,
}

impl Options {
    /// Generate JSON Schema describing the exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, TetherError> {
        let content =
            std::fs::read_to_string(path).map_err(TetherError::Io)?;
        Self::from_toml(&content)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, TetherError> {
        toml::from_str(content)
            .map_err(|e| TetherError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), TetherError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| TetherError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(TetherError::Io)?;
        }
        std::fs::write(path, content).map_err(TetherError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
