//! Camera pose output type.

use glam::{Mat4, Vec3};

/// Camera pose as an eye/target/up triple.
///
/// The up vector is re-orthogonalized against the viewing direction on
/// construction, so the triple always yields a well-conditioned basis for
/// view-matrix construction. Poses are derived on demand from the
/// manipulator's navigation state and are never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction, orthogonal to the viewing direction.
    pub up: Vec3,
}

impl Pose {
    /// Build a pose from an eye/target pair and a rough up hint.
    ///
    /// `up` is projected onto the plane perpendicular to the viewing
    /// direction (Gram-Schmidt) and renormalized. The caller guarantees
    /// that `up` is not parallel to `target - eye`.
    pub(crate) fn new(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        let forward = (target - eye).normalize();
        let up = (up - forward * up.dot(forward)).normalize();
        Self { eye, target, up }
    }

    /// Unit vector from the eye toward the target.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        (self.target - self.eye).normalize()
    }

    /// Unit vector pointing to the right of the viewing direction.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.forward().cross(self.up).normalize()
    }

    /// Build the right-handed view matrix for this pose.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}
