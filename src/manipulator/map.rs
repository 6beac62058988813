//! Planar map navigation.
//!
//! The eye hovers above a ground plane, looking straight down at a center
//! point. Drags pan the center across the plane, zoom changes the hover
//! distance with a configured minimum.

use glam::{Vec2, Vec3};

use super::MIN_DISTANCE;
use crate::config::Config;
use crate::pose::Pose;
use crate::raycast::Plane;

/// Planar navigation state for MAP mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct MapState {
    /// Point on the ground plane the camera looks at.
    pub(crate) center: Vec3,
    /// Eye distance above the ground plane.
    pub(crate) distance: f32,
}

impl MapState {
    /// Home state: centered on the plane point nearest the world origin,
    /// at a distance that frames the configured map extent.
    pub(crate) fn from_config(config: &Config) -> Self {
        let plane = Plane::from_equation(config.ground_plane);
        let center = -plane.normal * plane.distance;
        let (tan_h, tan_v) = config.fov_half_tangents();
        let distance = ((config.map_extent.x * 0.5) / tan_h)
            .max((config.map_extent.y * 0.5) / tan_v)
            .max(effective_min_distance(config));
        Self { center, distance }
    }

    /// Restore from bookmarked values, re-applying the state invariants.
    pub(crate) fn from_parts(
        center: Vec3,
        distance: f32,
        config: &Config,
    ) -> Self {
        Self {
            center,
            distance: distance.max(effective_min_distance(config)),
        }
    }

    /// Derive the camera pose for the current state.
    pub(crate) fn pose(&self, config: &Config) -> Pose {
        let (_, up, normal) = basis(config);
        Pose::new(self.center + normal * self.distance, self.center, up)
    }

    /// Apply a pan drag measured from the grab start.
    ///
    /// Pixel deltas convert to world units at the grab-time distance, so a
    /// grabbed map point stays under the pointer as it moves. The distance
    /// (possibly changed by a mid-grab zoom) carries over from `self`.
    pub(crate) fn dragged(
        &self,
        start: &Self,
        delta: Vec2,
        config: &Config,
    ) -> Self {
        let (right, up, _) = basis(config);
        let step = config.world_per_pixel(start.distance);
        Self {
            center: start.center - right * (delta.x * step)
                + up * (delta.y * step),
            ..*self
        }
    }

    /// Zoom toward (negative delta) or away from (positive) the plane.
    pub(crate) fn zoomed(&self, delta: f32, config: &Config) -> Self {
        let factor = (1.0 + delta * config.zoom_speed).max(0.0);
        Self {
            distance: (self.distance * factor)
                .max(effective_min_distance(config)),
            ..*self
        }
    }
}

/// Zoom-in clamp; a non-positive configured minimum falls back to a small
/// internal floor so the eye can never reach the plane itself.
fn effective_min_distance(config: &Config) -> f32 {
    config.map_min_distance.max(MIN_DISTANCE)
}

/// Screen-aligned (right, up, normal) basis on the ground plane, derived
/// from the configured up vector.
fn basis(config: &Config) -> (Vec3, Vec3, Vec3) {
    let normal = config.ground_normal();
    let up = (config.up_vector - normal * config.up_vector.dot(normal))
        .normalize();
    // Camera forward is -normal; right completes the screen basis
    let right = (-normal).cross(up);
    (right, up, normal)
}

#[cfg(test)]
mod tests {
    use glam::Vec4;

    use super::*;

    fn config() -> Config {
        Config {
            viewport: [800, 600],
            map_min_distance: 2.0,
            ..Config::default()
        }
    }

    #[test]
    fn home_centers_on_plane_point_nearest_origin() {
        let state = MapState::from_config(&config());
        assert!(state.center.length() < 1e-6);

        let cfg = Config {
            ground_plane: Vec4::new(0.0, 0.0, 1.0, -5.0),
            ..config()
        };
        let state = MapState::from_config(&cfg);
        assert!((state.center - Vec3::new(0.0, 0.0, 5.0)).length() < 1e-6);
    }

    #[test]
    fn home_distance_frames_extent() {
        let cfg = config();
        let state = MapState::from_config(&cfg);
        // With a vertical fov the narrow viewport axis is vertical, so
        // the y extent dominates
        let (_, tan_v) = cfg.fov_half_tangents();
        assert!((state.distance - 256.0 / tan_v).abs() < 1e-2);
    }

    #[test]
    fn pan_converts_pixels_to_world_units() {
        let cfg = config();
        let start = MapState::from_config(&cfg);
        let step = cfg.world_per_pixel(start.distance);
        let panned = start.dragged(&start, Vec2::new(100.0, -40.0), &cfg);
        let expected =
            start.center + Vec3::new(-100.0 * step, -40.0 * step, 0.0);
        assert!((panned.center - expected).length() < 1e-4);
        assert_eq!(panned.distance, start.distance);
    }

    #[test]
    fn zoom_clamps_at_configured_minimum() {
        let cfg = config();
        let mut state = MapState::from_config(&cfg);
        for _ in 0..500 {
            state = state.zoomed(-10.0, &cfg);
        }
        assert_eq!(state.distance, 2.0);
    }

    #[test]
    fn pose_hovers_above_center() {
        let cfg = config();
        let state = MapState::from_config(&cfg);
        let pose = state.pose(&cfg);
        let expected_eye =
            state.center + Vec3::new(0.0, 0.0, state.distance);
        assert!((pose.eye - expected_eye).length() < 1e-4);
        assert_eq!(pose.target, state.center);
        assert!((pose.up - Vec3::Y).length() < 1e-6);
    }

    #[test]
    fn tilted_plane_basis_is_orthonormal() {
        let cfg = Config {
            ground_plane: Vec4::new(0.0, 1.0, 0.0, 0.0),
            up_vector: Vec3::Z,
            ..config()
        };
        let (right, up, normal) = basis(&cfg);
        assert!(right.dot(up).abs() < 1e-6);
        assert!(right.dot(normal).abs() < 1e-6);
        assert!(up.dot(normal).abs() < 1e-6);
        assert!((right.length() - 1.0).abs() < 1e-6);
    }
}
