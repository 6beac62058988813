//! Camera manipulator orchestration.
//!
//! The [`Manipulator`] owns the configuration, the mode-specific
//! navigation state, and the transient grab session. Every interaction
//! call dispatches to the active strategy (orbit or map); the derived
//! pose is read back with [`Manipulator::look_at`], usually once per
//! frame.

mod map;
mod orbit;

use glam::{Vec2, Vec3};
use map::MapState;
use orbit::OrbitState;

use crate::bookmark::Bookmark;
use crate::config::{Config, Mode};
use crate::error::CamberError;
use crate::pose::Pose;
use crate::raycast;

/// Lower bound on camera distances; keeps poses non-degenerate when a
/// configured minimum is absent or zero.
pub(crate) const MIN_DISTANCE: f32 = 0.01;

/// Mode-specific navigation state.
#[derive(Debug, Clone, Copy, PartialEq)]
enum NavState {
    Orbit(OrbitState),
    Map(MapState),
}

impl NavState {
    fn mode(&self) -> Mode {
        match self {
            Self::Orbit(_) => Mode::Orbit,
            Self::Map(_) => Mode::Map,
        }
    }

    fn pose(&self, config: &Config) -> Pose {
        match self {
            Self::Orbit(state) => state.pose(config),
            Self::Map(state) => state.pose(config),
        }
    }

    fn to_bookmark(self) -> Bookmark {
        match self {
            Self::Orbit(state) => Bookmark::Orbit {
                pivot: state.pivot,
                distance: state.distance,
                yaw: state.yaw,
                pitch: state.pitch,
            },
            Self::Map(state) => Bookmark::Map {
                center: state.center,
                distance: state.distance,
            },
        }
    }

    fn from_bookmark(bookmark: &Bookmark, config: &Config) -> Self {
        match *bookmark {
            Bookmark::Orbit {
                pivot,
                distance,
                yaw,
                pitch,
            } => Self::Orbit(OrbitState::from_parts(
                pivot, distance, yaw, pitch,
            )),
            Bookmark::Map { center, distance } => {
                Self::Map(MapState::from_parts(center, distance, config))
            }
        }
    }

    fn dragged(
        &self,
        start: &Self,
        delta: Vec2,
        strafe: bool,
        config: &Config,
    ) -> Self {
        match (self, start) {
            (Self::Orbit(current), Self::Orbit(from)) => Self::Orbit(
                current.dragged(from, delta, strafe, config),
            ),
            (Self::Map(current), Self::Map(from)) => {
                Self::Map(current.dragged(from, delta, config))
            }
            _ => {
                log::error!(
                    "grab session mode diverged from navigation state"
                );
                *self
            }
        }
    }

    fn zoomed(&self, delta: f32, config: &Config) -> Self {
        match self {
            Self::Orbit(state) => Self::Orbit(state.zoomed(delta, config)),
            Self::Map(state) => Self::Map(state.zoomed(delta, config)),
        }
    }
}

/// Transient drag state, alive between `grab_begin` and `grab_end`.
#[derive(Debug, Clone, Copy)]
struct GrabSession {
    /// Viewport coordinates at grab begin.
    start: Vec2,
    /// Navigation state snapshot at grab begin; drags re-derive from it.
    nav: NavState,
    /// ORBIT only: strafe the pivot instead of rotating.
    strafe: bool,
}

/// Interactive camera manipulator for orbit and map navigation.
///
/// Clients notify the manipulator of grab and scroll events, then
/// periodically read [`Manipulator::look_at`] to drive their view matrix.
/// All operations are synchronous and run on the caller's thread; sharing
/// a manipulator across threads requires external synchronization.
///
/// # Example
///
/// ```
/// use camber::{Builder, Mode};
///
/// let mut manipulator = Builder::new()
///     .viewport(800, 600)
///     .build(Mode::Orbit)
///     .unwrap();
///
/// manipulator.grab_begin(400.0, 300.0, false);
/// manipulator.grab_update(500.0, 300.0);
/// manipulator.grab_end(500.0, 300.0);
///
/// let pose = manipulator.look_at();
/// let view = pose.view_matrix();
/// # let _ = view;
/// ```
#[derive(Debug)]
pub struct Manipulator {
    config: Config,
    nav: NavState,
    home: Bookmark,
    grab: Option<GrabSession>,
}

impl Manipulator {
    /// Create a manipulator from a validated configuration.
    ///
    /// Most callers go through [`crate::Builder`]; this entry point exists
    /// for configurations deserialized from presets.
    ///
    /// # Errors
    ///
    /// Returns [`CamberError::Construction`] when the viewport is unset or
    /// any mode-relevant parameter is invalid.
    pub fn create(
        mode: Mode,
        config: Config,
    ) -> Result<Self, CamberError> {
        config.validate(mode)?;
        let nav = match mode {
            Mode::Orbit => {
                NavState::Orbit(OrbitState::from_config(&config))
            }
            Mode::Map => NavState::Map(MapState::from_config(&config)),
        };
        log::debug!(
            "manipulator created: mode={mode:?} viewport={}x{}",
            config.viewport[0],
            config.viewport[1]
        );
        Ok(Self {
            config,
            nav,
            home: nav.to_bookmark(),
            grab: None,
        })
    }

    /// The configured interaction mode, immutable for this manipulator.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.nav.mode()
    }

    /// Update the viewport used for raycasting and drag-to-world scaling.
    ///
    /// Does not itself move the camera. Non-positive dimensions are
    /// ignored with a warning, since live input must never fail.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            log::warn!(
                "ignoring degenerate viewport {width}x{height}"
            );
            return;
        }
        self.config.viewport = [width, height];
    }

    /// The current camera pose, derived from the navigation state.
    #[must_use]
    pub fn look_at(&self) -> Pose {
        self.nav.pose(&self.config)
    }

    /// Pick the ground-plane point under viewport pixel (x, y).
    ///
    /// `None` when the view ray misses the plane (parallel, behind the
    /// eye, or beyond the far plane) — a routine outcome, not an error.
    #[must_use]
    pub fn raycast(&self, x: f32, y: f32) -> Option<Vec3> {
        raycast::raycast(x, y, &self.config, &self.look_at())
    }

    /// Start a grab session at viewport pixel (x, y).
    ///
    /// In ORBIT mode `strafe` selects pivot translation instead of
    /// rotation; MAP mode ignores it. A `grab_begin` while a session is
    /// already active is ignored.
    pub fn grab_begin(&mut self, x: f32, y: f32, strafe: bool) {
        if self.grab.is_some() {
            log::trace!("grab_begin ignored: session already active");
            return;
        }
        self.grab = Some(GrabSession {
            start: Vec2::new(x, y),
            nav: self.nav,
            strafe,
        });
    }

    /// Update the active grab session with a new pointer position.
    ///
    /// The applied delta is measured from the session start, so each
    /// update re-derives the state from the grab-time snapshot and
    /// pointer jitter never accumulates. A no-op when no session is
    /// active.
    pub fn grab_update(&mut self, x: f32, y: f32) {
        let Some(session) = self.grab else {
            log::trace!("grab_update ignored: no active session");
            return;
        };
        let delta = Vec2::new(x, y) - session.start;
        self.nav = self.nav.dragged(
            &session.nav,
            delta,
            session.strafe,
            &self.config,
        );
    }

    /// End the active grab session, applying a final update at (x, y).
    ///
    /// A no-op when no session is active (duplicate `grab_end` events are
    /// tolerated).
    pub fn grab_end(&mut self, x: f32, y: f32) {
        if self.grab.is_none() {
            log::trace!("grab_end ignored: no active session");
            return;
        }
        self.grab_update(x, y);
        self.grab = None;
    }

    /// Zoom at viewport pixel (x, y): negative deltas move the eye
    /// closer, positive deltas move it away.
    ///
    /// Never fails; the distance silently clamps at the configured
    /// minimum (MAP) or an internal floor (ORBIT). The pixel coordinates
    /// are accepted for API symmetry; zoom is center-anchored.
    pub fn zoom(&mut self, _x: f32, _y: f32, delta: f32) {
        self.nav = self.nav.zoomed(delta, &self.config);
    }

    /// Snapshot the current navigation state.
    #[must_use]
    pub fn current_bookmark(&self) -> Bookmark {
        self.nav.to_bookmark()
    }

    /// The bookmark captured at construction time.
    ///
    /// Invariant across any number of interactions; jumping to it
    /// restores the home pose.
    #[must_use]
    pub fn home_bookmark(&self) -> Bookmark {
        self.home
    }

    /// Replace the navigation state with a bookmarked one.
    ///
    /// The jump is instantaneous; smooth transitions are a caller
    /// concern, layered on top of repeated jumps. Any active grab session
    /// is cancelled, since its snapshot no longer describes the camera.
    ///
    /// # Errors
    ///
    /// Returns [`CamberError::IncompatibleMode`] when the bookmark was
    /// captured from a manipulator in a different mode.
    pub fn jump_to_bookmark(
        &mut self,
        bookmark: &Bookmark,
    ) -> Result<(), CamberError> {
        if bookmark.mode() != self.mode() {
            return Err(CamberError::IncompatibleMode {
                expected: self.mode(),
                found: bookmark.mode(),
            });
        }
        if self.grab.take().is_some() {
            log::trace!("jump_to_bookmark cancelled an active grab");
        }
        self.nav = NavState::from_bookmark(bookmark, &self.config);
        Ok(())
    }
}
