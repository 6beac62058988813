//! Manipulator configuration and builder.
//!
//! [`Config`] consolidates every tunable parameter of the manipulator and
//! serializes to/from TOML so hosts can store interaction presets. The
//! [`Builder`] wraps a `Config` with chained setters and validates it when
//! the manipulator is built.

use glam::{Vec2, Vec3, Vec4};
use serde::{Deserialize, Serialize};

use crate::error::CamberError;
use crate::manipulator::Manipulator;

/// Tolerance below which vectors are treated as degenerate.
const EPSILON: f32 = 1e-6;

/// Interaction paradigm, fixed for the manipulator's lifetime.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Turntable rotation/strafe around a point of interest.
    Orbit,
    /// 2D pan/zoom over a ground plane, as in map viewers.
    Map,
}

/// The field-of-view axis held constant when the viewport aspect changes.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Fov {
    /// `fov_degrees` spans the viewport height.
    #[default]
    Vertical,
    /// `fov_degrees` spans the viewport width.
    Horizontal,
}

/// Manipulator parameters. All fields use `#[serde(default)]` so partial
/// TOML presets (e.g. only overriding `zoom_speed`) work correctly.
///
/// The viewport has no meaningful default and must be set before building.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Viewport dimensions in physical pixels.
    pub viewport: [u32; 2],
    /// World-space point of interest for the ORBIT home position.
    pub target_position: Vec3,
    /// World-space up direction for the home orientation.
    pub up_vector: Vec3,
    /// Multiplied with scroll deltas.
    pub zoom_speed: f32,
    /// Initial eye position in world space for ORBIT mode.
    pub orbit_home_position: Vec3,
    /// Multiplied with viewport drag deltas (yaw, pitch).
    pub orbit_speed: Vec2,
    /// The field-of-view axis held constant on viewport changes.
    pub fov_direction: Fov,
    /// The full field of view in degrees (not the half-angle).
    pub fov_degrees: f32,
    /// Distance to the far plane; raycast hits beyond it are misses.
    pub far_plane: f32,
    /// Ground-plane size used to compute the MAP home position.
    pub map_extent: Vec2,
    /// Constrains the MAP zoom-in level.
    pub map_min_distance: f32,
    /// Ground plane as `(a, b, c, d)` with `ax + by + cz + d = 0`.
    pub ground_plane: Vec4,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            viewport: [0, 0],
            target_position: Vec3::ZERO,
            up_vector: Vec3::Y,
            zoom_speed: 0.01,
            orbit_home_position: Vec3::Z,
            orbit_speed: Vec2::splat(0.01),
            fov_direction: Fov::Vertical,
            fov_degrees: 33.0,
            far_plane: 5000.0,
            map_extent: Vec2::splat(512.0),
            map_min_distance: 0.0,
            ground_plane: Vec4::new(0.0, 0.0, 1.0, 0.0),
        }
    }
}

impl Config {
    /// Viewport aspect ratio (width / height).
    pub(crate) fn aspect(&self) -> f32 {
        self.viewport[0] as f32 / self.viewport[1] as f32
    }

    /// Tangents of the half field of view along the (horizontal,
    /// vertical) viewport axes, honoring [`Config::fov_direction`].
    pub(crate) fn fov_half_tangents(&self) -> (f32, f32) {
        let half = (self.fov_degrees * 0.5).to_radians().tan();
        match self.fov_direction {
            Fov::Vertical => (half * self.aspect(), half),
            Fov::Horizontal => (half, half / self.aspect()),
        }
    }

    /// World units spanned by one vertical viewport pixel on a plane at
    /// `distance` in front of the camera. Used to convert drag deltas so
    /// pan speed tracks the zoom level.
    pub(crate) fn world_per_pixel(&self, distance: f32) -> f32 {
        let (_, tan_v) = self.fov_half_tangents();
        2.0 * distance * tan_v / self.viewport[1] as f32
    }

    /// Unit normal of the configured ground plane.
    pub(crate) fn ground_normal(&self) -> Vec3 {
        self.ground_plane.truncate().normalize()
    }

    /// Validate the configuration for the given mode.
    pub(crate) fn validate(&self, mode: Mode) -> Result<(), CamberError> {
        let fail =
            |msg: &str| Err(CamberError::Construction(msg.to_owned()));

        if self.viewport[0] == 0 || self.viewport[1] == 0 {
            return fail("viewport must be set to positive dimensions");
        }
        if !self.fov_degrees.is_finite()
            || self.fov_degrees <= 0.0
            || self.fov_degrees >= 180.0
        {
            return fail("fov_degrees must lie in (0, 180)");
        }
        if !self.far_plane.is_finite() || self.far_plane <= 0.0 {
            return fail("far_plane must be positive");
        }
        if !self.zoom_speed.is_finite() {
            return fail("zoom_speed must be finite");
        }
        if self.up_vector.length() < EPSILON {
            return fail("up_vector must be non-zero");
        }
        if self.ground_plane.truncate().length() < EPSILON {
            return fail("ground_plane normal must be non-zero");
        }

        match mode {
            Mode::Orbit => {
                if !self.orbit_speed.is_finite() {
                    return fail("orbit_speed must be finite");
                }
                let offset =
                    self.orbit_home_position - self.target_position;
                if offset.length() < EPSILON {
                    return fail(
                        "orbit_home_position must differ from \
                         target_position",
                    );
                }
                let dir = offset.normalize();
                if dir.cross(self.up_vector.normalize()).length() < EPSILON
                {
                    return fail(
                        "up_vector is parallel to the home viewing \
                         direction",
                    );
                }
            }
            Mode::Map => {
                if self.map_extent.x <= 0.0 || self.map_extent.y <= 0.0 {
                    return fail("map_extent must be positive");
                }
                if !self.map_min_distance.is_finite() {
                    return fail("map_min_distance must be finite");
                }
                let normal = self.ground_normal();
                if normal.cross(self.up_vector.normalize()).length()
                    < EPSILON
                {
                    return fail(
                        "up_vector is parallel to the ground plane \
                         normal",
                    );
                }
            }
        }
        Ok(())
    }
}

/// Chained-setter builder for [`Manipulator`].
///
/// # Example
///
/// ```
/// use camber::{Builder, Mode};
///
/// let manipulator = Builder::new()
///     .viewport(800, 600)
///     .zoom_speed(0.02)
///     .build(Mode::Orbit)
///     .unwrap();
/// assert_eq!(manipulator.mode(), Mode::Orbit);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Builder {
    config: Config,
}

impl Builder {
    /// Create a builder with default parameters and an unset viewport.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration (e.g. a deserialized preset).
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Width and height of the viewing area. Required.
    #[must_use]
    pub fn viewport(mut self, width: u32, height: u32) -> Self {
        self.config.viewport = [width, height];
        self
    }

    /// World-space point of interest for the ORBIT home position.
    #[must_use]
    pub fn target_position(mut self, target: Vec3) -> Self {
        self.config.target_position = target;
        self
    }

    /// World-space up direction for the home orientation.
    #[must_use]
    pub fn up_vector(mut self, up: Vec3) -> Self {
        self.config.up_vector = up;
        self
    }

    /// Scroll-delta multiplier for zooming.
    #[must_use]
    pub fn zoom_speed(mut self, speed: f32) -> Self {
        self.config.zoom_speed = speed;
        self
    }

    /// Initial eye position in world space for ORBIT mode.
    #[must_use]
    pub fn orbit_home_position(mut self, eye: Vec3) -> Self {
        self.config.orbit_home_position = eye;
        self
    }

    /// Drag-delta multipliers for yaw and pitch.
    #[must_use]
    pub fn orbit_speed(mut self, speed: Vec2) -> Self {
        self.config.orbit_speed = speed;
        self
    }

    /// The field-of-view axis held constant on viewport changes.
    #[must_use]
    pub fn fov_direction(mut self, direction: Fov) -> Self {
        self.config.fov_direction = direction;
        self
    }

    /// The full field of view in degrees (not the half-angle).
    #[must_use]
    pub fn fov_degrees(mut self, degrees: f32) -> Self {
        self.config.fov_degrees = degrees;
        self
    }

    /// Distance to the far plane.
    #[must_use]
    pub fn far_plane(mut self, distance: f32) -> Self {
        self.config.far_plane = distance;
        self
    }

    /// Ground-plane size used to compute the MAP home position.
    #[must_use]
    pub fn map_extent(mut self, extent: Vec2) -> Self {
        self.config.map_extent = extent;
        self
    }

    /// Constrains the MAP zoom-in level.
    #[must_use]
    pub fn map_min_distance(mut self, distance: f32) -> Self {
        self.config.map_min_distance = distance;
        self
    }

    /// Ground plane as `(a, b, c, d)` with `ax + by + cz + d = 0`.
    #[must_use]
    pub fn ground_plane(mut self, plane: Vec4) -> Self {
        self.config.ground_plane = plane;
        self
    }

    /// Create the manipulator in the given mode.
    ///
    /// # Errors
    ///
    /// Returns [`CamberError::Construction`] when the viewport is unset or
    /// any mode-relevant parameter is invalid.
    pub fn build(self, mode: Mode) -> Result<Manipulator, CamberError> {
        Manipulator::create(mode, self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
viewport = [1280, 720]
zoom_speed = 0.05
";
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.viewport, [1280, 720]);
        assert_eq!(config.zoom_speed, 0.05);
        // Everything else should be default
        assert_eq!(config.fov_degrees, 33.0);
        assert_eq!(config.map_extent, Vec2::splat(512.0));
    }

    #[test]
    fn build_requires_viewport() {
        let err = Builder::new().build(Mode::Orbit).unwrap_err();
        assert!(matches!(err, CamberError::Construction(_)));
    }

    #[test]
    fn build_rejects_bad_fov() {
        let err = Builder::new()
            .viewport(800, 600)
            .fov_degrees(180.0)
            .build(Mode::Orbit)
            .unwrap_err();
        assert!(matches!(err, CamberError::Construction(_)));
    }

    #[test]
    fn build_rejects_home_eye_on_target() {
        let err = Builder::new()
            .viewport(800, 600)
            .orbit_home_position(Vec3::ZERO)
            .target_position(Vec3::ZERO)
            .build(Mode::Orbit)
            .unwrap_err();
        assert!(matches!(err, CamberError::Construction(_)));
    }

    #[test]
    fn build_rejects_up_parallel_to_ground_normal() {
        let err = Builder::new()
            .viewport(800, 600)
            .up_vector(Vec3::Z)
            .build(Mode::Map)
            .unwrap_err();
        assert!(matches!(err, CamberError::Construction(_)));
    }

    #[test]
    fn fov_tangents_honor_direction() {
        let config = Config {
            viewport: [800, 600],
            fov_degrees: 60.0,
            ..Config::default()
        };
        let (tan_h, tan_v) = config.fov_half_tangents();
        let expected_v = 30.0_f32.to_radians().tan();
        assert!((tan_v - expected_v).abs() < 1e-6);
        assert!((tan_h - expected_v * 800.0 / 600.0).abs() < 1e-6);

        let config = Config {
            fov_direction: Fov::Horizontal,
            ..config
        };
        let (tan_h, tan_v) = config.fov_half_tangents();
        assert!((tan_h - expected_v).abs() < 1e-6);
        assert!((tan_v - expected_v * 600.0 / 800.0).abs() < 1e-6);
    }
}
