//! Ground-plane raycasting.
//!
//! Maps a viewport pixel plus the current camera pose to a world-space
//! intersection point on the configured ground plane. Misses (ray parallel
//! to the plane, hit behind the eye, or hit beyond the far plane) are
//! routine and reported as `None`.

use glam::{Vec3, Vec4};

use crate::config::Config;
use crate::pose::Pose;

/// Rays closer than this to parallel with the plane never intersect it.
const PARALLEL_EPSILON: f32 = 1e-6;

/// A plane in 3D space, represented as (normal.x, normal.y, normal.z,
/// distance) where the plane equation is: ax + by + cz + d = 0
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    /// Unit normal pointing into the positive half-space.
    pub normal: Vec3,
    /// Signed distance from origin (`n · p + d = 0`).
    pub distance: f32,
}

impl Plane {
    /// Create a plane from coefficients and normalize it
    #[must_use]
    pub fn from_coefficients(a: f32, b: f32, c: f32, d: f32) -> Self {
        let len = (a * a + b * b + c * c).sqrt();
        if len > 0.0 {
            Self {
                normal: Vec3::new(a / len, b / len, c / len),
                distance: d / len,
            }
        } else {
            Self {
                normal: Vec3::ZERO,
                distance: 0.0,
            }
        }
    }

    /// Create a plane from a packed `(a, b, c, d)` equation vector.
    #[must_use]
    pub fn from_equation(equation: Vec4) -> Self {
        Self::from_coefficients(
            equation.x, equation.y, equation.z, equation.w,
        )
    }

    /// Signed distance from point to plane (positive = in front, negative =
    /// behind)
    #[inline]
    #[must_use]
    pub fn distance_to_point(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.distance
    }

    /// Intersect a ray with the plane, returning the parametric `t` along
    /// `direction`. `None` when the ray runs parallel to the plane or the
    /// intersection lies behind the origin.
    #[must_use]
    pub fn intersect_ray(
        &self,
        origin: Vec3,
        direction: Vec3,
    ) -> Option<f32> {
        let denom = self.normal.dot(direction);
        if denom.abs() < PARALLEL_EPSILON {
            return None;
        }
        let t = -self.distance_to_point(origin) / denom;
        (t > 0.0).then_some(t)
    }
}

/// Unit direction of the view ray through viewport pixel (x, y).
///
/// Viewport coordinates are y-down with the origin at the top-left corner;
/// the pixel is mapped through the configured field of view and the
/// viewport aspect ratio into the pose's camera basis.
pub(crate) fn view_ray(x: f32, y: f32, config: &Config, pose: &Pose) -> Vec3 {
    let width = config.viewport[0] as f32;
    let height = config.viewport[1] as f32;
    let u = 2.0 * x / width - 1.0;
    let v = 1.0 - 2.0 * y / height;
    let (tan_h, tan_v) = config.fov_half_tangents();
    (pose.forward() + pose.right() * (u * tan_h) + pose.up * (v * tan_v))
        .normalize()
}

/// Pick the world-space point where the view ray through (x, y) meets the
/// configured ground plane. `None` when the ray misses the plane or the
/// hit lies beyond the far plane.
pub(crate) fn raycast(
    x: f32,
    y: f32,
    config: &Config,
    pose: &Pose,
) -> Option<Vec3> {
    let direction = view_ray(x, y, config, pose);
    let plane = Plane::from_equation(config.ground_plane);
    let t = plane.intersect_ray(pose.eye, direction)?;
    (t <= config.far_plane).then(|| pose.eye + direction * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn looking_down_config() -> Config {
        Config {
            viewport: [800, 600],
            ..Config::default()
        }
    }

    fn looking_down_pose() -> Pose {
        // Eye above the z = 0 ground plane, looking straight down +Z
        Pose::new(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, Vec3::Y)
    }

    #[test]
    fn center_pixel_hits_below_eye() {
        let config = looking_down_config();
        let pose = looking_down_pose();
        let hit = raycast(400.0, 300.0, &config, &pose).unwrap();
        assert!(hit.length() < 1e-4);
    }

    #[test]
    fn off_center_pixel_hits_off_center() {
        let config = looking_down_config();
        let pose = looking_down_pose();
        let hit = raycast(600.0, 300.0, &config, &pose).unwrap();
        // Right half of the viewport maps to +X on the plane
        assert!(hit.x > 0.0);
        assert!(hit.y.abs() < 1e-4);
        assert!(hit.z.abs() < 1e-4);
    }

    #[test]
    fn parallel_ray_misses() {
        let config = looking_down_config();
        // Looking along the plane, center ray never intersects
        let pose = Pose::new(
            Vec3::new(0.0, 0.0, 10.0),
            Vec3::new(1.0, 0.0, 10.0),
            Vec3::Z,
        );
        assert!(raycast(400.0, 300.0, &config, &pose).is_none());
    }

    #[test]
    fn plane_behind_eye_misses() {
        let config = looking_down_config();
        // Looking up, away from the plane
        let pose = Pose::new(
            Vec3::new(0.0, 0.0, 10.0),
            Vec3::new(0.0, 0.0, 20.0),
            Vec3::Y,
        );
        assert!(raycast(400.0, 300.0, &config, &pose).is_none());
    }

    #[test]
    fn hit_beyond_far_plane_misses() {
        let config = Config {
            far_plane: 5.0,
            ..looking_down_config()
        };
        let pose = looking_down_pose();
        assert!(raycast(400.0, 300.0, &config, &pose).is_none());
    }

    #[test]
    fn raycast_is_deterministic() {
        let config = looking_down_config();
        let pose = looking_down_pose();
        let a = raycast(123.0, 456.0, &config, &pose).unwrap();
        let b = raycast(123.0, 456.0, &config, &pose).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn degenerate_plane_never_intersects() {
        let plane = Plane::from_coefficients(0.0, 0.0, 0.0, 1.0);
        assert!(plane
            .intersect_ray(Vec3::ZERO, Vec3::NEG_Z)
            .is_none());
    }
}
