//! Camera state snapshots.
//!
//! A [`Bookmark`] captures the manipulator's navigation state (not the
//! derived pose) so a camera position can be restored later. Bookmarks are
//! independent values: they carry no reference to the manipulator they came
//! from, and mode compatibility is re-checked when one is applied.
//!
//! Bookmarks serialize to a small mode-tagged record and can be persisted
//! as TOML files for saved-view support.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::config::Mode;
use crate::error::CamberError;

/// Mode-tagged snapshot of navigation state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Bookmark {
    /// Snapshot of an ORBIT-mode manipulator.
    Orbit {
        /// Orbit pivot point in world space.
        pivot: Vec3,
        /// Eye distance from the pivot.
        distance: f32,
        /// Azimuth angle in radians.
        yaw: f32,
        /// Elevation angle in radians.
        pitch: f32,
    },
    /// Snapshot of a MAP-mode manipulator.
    Map {
        /// Ground-plane center point in world space.
        center: Vec3,
        /// Eye distance above the ground plane.
        distance: f32,
    },
}

impl Bookmark {
    /// The mode this bookmark was captured from.
    #[must_use]
    pub fn mode(&self) -> Mode {
        match self {
            Self::Orbit { .. } => Mode::Orbit,
            Self::Map { .. } => Mode::Map,
        }
    }

    /// Load a bookmark from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`CamberError::Io`] when the file cannot be read and
    /// [`CamberError::PresetParse`] when it is not a valid bookmark.
    pub fn load(path: &Path) -> Result<Self, CamberError> {
        let content =
            std::fs::read_to_string(path).map_err(CamberError::Io)?;
        toml::from_str(&content)
            .map_err(|e| CamberError::PresetParse(e.to_string()))
    }

    /// Save the bookmark to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`CamberError::Io`] when the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), CamberError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CamberError::PresetParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(CamberError::Io)?;
        }
        std::fs::write(path, content).map_err(CamberError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orbit_round_trips_through_toml() {
        let bookmark = Bookmark::Orbit {
            pivot: Vec3::new(1.0, 2.0, 3.0),
            distance: 4.5,
            yaw: 0.25,
            pitch: -0.5,
        };
        let toml_str = toml::to_string_pretty(&bookmark).unwrap();
        let parsed: Bookmark = toml::from_str(&toml_str).unwrap();
        assert_eq!(bookmark, parsed);
    }

    #[test]
    fn map_round_trips_through_json() {
        let bookmark = Bookmark::Map {
            center: Vec3::new(10.0, -3.0, 0.0),
            distance: 128.0,
        };
        let json = serde_json::to_string(&bookmark).unwrap();
        assert!(json.contains(r#""mode":"map""#));
        let parsed: Bookmark = serde_json::from_str(&json).unwrap();
        assert_eq!(bookmark, parsed);
    }

    #[test]
    fn save_then_load_preserves_state() {
        let bookmark = Bookmark::Orbit {
            pivot: Vec3::ZERO,
            distance: 2.0,
            yaw: 1.0,
            pitch: 0.1,
        };
        let path = std::env::temp_dir()
            .join(format!("camber-bookmark-{}.toml", std::process::id()));
        bookmark.save(&path).unwrap();
        let loaded = Bookmark::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(bookmark, loaded);
    }

    #[test]
    fn load_rejects_garbage() {
        let path = std::env::temp_dir()
            .join(format!("camber-garbage-{}.toml", std::process::id()));
        std::fs::write(&path, "mode = \"sideways\"").unwrap();
        let err = Bookmark::load(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(err, CamberError::PresetParse(_)));
    }
}
