//! Crate-level error types.

use std::fmt;

use crate::config::Mode;

/// Errors produced by the camber crate.
#[derive(Debug)]
pub enum CamberError {
    /// Invalid builder parameters.
    Construction(String),
    /// A bookmark's mode does not match the manipulator's mode.
    IncompatibleMode {
        /// The manipulator's configured mode.
        expected: Mode,
        /// The mode the bookmark was captured from.
        found: Mode,
    },
    /// Generic I/O failure.
    Io(std::io::Error),
    /// Bookmark TOML parsing/serialization failure.
    PresetParse(String),
}

impl fmt::Display for CamberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Construction(msg) => {
                write!(f, "construction error: {msg}")
            }
            Self::IncompatibleMode { expected, found } => write!(
                f,
                "incompatible bookmark mode: expected {expected:?}, \
                 found {found:?}"
            ),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::PresetParse(msg) => {
                write!(f, "preset parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for CamberError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CamberError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
