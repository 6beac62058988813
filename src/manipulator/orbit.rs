//! Turntable-style orbit navigation.
//!
//! The eye rides a sphere around a pivot point, parameterized by yaw,
//! pitch, and distance. Drags rotate the sphere (or strafe the pivot in
//! the camera plane), zoom dollies along the viewing direction.

use glam::{Vec2, Vec3};

use super::MIN_DISTANCE;
use crate::config::Config;
use crate::pose::Pose;

/// 89.9° in radians; keeps pitch away from the gimbal poles.
const PITCH_LIMIT: f32 = 1.569_051;

/// Spherical navigation state for ORBIT mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct OrbitState {
    /// Point the camera orbits around.
    pub(crate) pivot: Vec3,
    /// Eye distance from the pivot.
    pub(crate) distance: f32,
    /// Azimuth angle in radians.
    pub(crate) yaw: f32,
    /// Elevation angle in radians, clamped to ±89.9°.
    pub(crate) pitch: f32,
}

impl OrbitState {
    /// Home state derived from the configured home eye and target.
    pub(crate) fn from_config(config: &Config) -> Self {
        let offset = config.orbit_home_position - config.target_position;
        let dir = offset.normalize();
        let distance = offset.length().max(MIN_DISTANCE);
        Self {
            pivot: config.target_position,
            distance,
            yaw: dir.x.atan2(dir.z),
            pitch: clamp_pitch(dir.y.clamp(-1.0, 1.0).asin()),
        }
    }

    /// Restore from bookmarked values, re-applying the state invariants.
    pub(crate) fn from_parts(
        pivot: Vec3,
        distance: f32,
        yaw: f32,
        pitch: f32,
    ) -> Self {
        Self {
            pivot,
            distance: distance.max(MIN_DISTANCE),
            yaw,
            pitch: clamp_pitch(pitch),
        }
    }

    /// Unit direction from the pivot toward the eye.
    fn direction(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        Vec3::new(sin_yaw * cos_pitch, sin_pitch, cos_yaw * cos_pitch)
    }

    /// Derive the camera pose for the current state.
    pub(crate) fn pose(&self, config: &Config) -> Pose {
        let eye = self.pivot + self.direction() * self.distance;
        Pose::new(eye, self.pivot, config.up_vector)
    }

    /// Apply a drag measured from the grab start.
    ///
    /// `start` is the state snapshot taken at grab begin; angles (or the
    /// pivot, when strafing) re-derive from it so pointer jitter never
    /// accumulates. Components the drag does not own (e.g. distance
    /// changed by a mid-grab zoom) carry over from `self`.
    pub(crate) fn dragged(
        &self,
        start: &Self,
        delta: Vec2,
        strafe: bool,
        config: &Config,
    ) -> Self {
        if strafe {
            let pose = start.pose(config);
            let step = config.world_per_pixel(start.distance);
            Self {
                pivot: start.pivot - pose.right() * (delta.x * step)
                    + pose.up * (delta.y * step),
                ..*self
            }
        } else {
            Self {
                yaw: start.yaw + delta.x * config.orbit_speed.x,
                pitch: clamp_pitch(
                    start.pitch - delta.y * config.orbit_speed.y,
                ),
                ..*self
            }
        }
    }

    /// Dolly toward (negative delta) or away from (positive) the pivot.
    pub(crate) fn zoomed(&self, delta: f32, config: &Config) -> Self {
        let factor = (1.0 + delta * config.zoom_speed).max(0.0);
        Self {
            distance: (self.distance * factor).max(MIN_DISTANCE),
            ..*self
        }
    }
}

fn clamp_pitch(pitch: f32) -> f32 {
    pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT)
}
