use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Pointer behavior applied once at startup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Cursor", inline)]
#[serde(default)]
pub struct CursorOptions {
    /// Lock the pointer to the window and hide it.
    #[schemars(title = "Lock Cursor")]
    pub lock_cursor: bool,
}

impl Default for CursorOptions {
    fn default() -> Self {
        Self { lock_cursor: true }
    }
}
