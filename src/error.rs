//! Crate-level error types.

use std::fmt;

/// Errors produced by the tether crate.
#[derive(Debug)]
pub enum TetherError {
    /// The camera rig was built without a follow target.
    MissingTarget,
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// The platform refused every cursor grab mode.
    Cursor(String),
    /// Viewer event-loop failure.
    Viewer(String),
}

impl fmt::Display for TetherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingTarget => {
                write!(f, "camera rig has no follow target assigned")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Cursor(msg) => write!(f, "cursor grab error: {msg}"),
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for TetherError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TetherError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
