/// ViewFrustum — world-space corners of a camera's view volume.
///
/// Holds the eight corner points of the unit clip-space cube unprojected
/// through the inverse of a view-projection matrix. The demo updates it
/// from the player camera every frame and a renderer may draw the wireframe
/// from `corners()`.

use glam::{Mat4, Vec3, Vec4};

/// Corner order: near plane (bl, br, tr, tl) then far plane (bl, br, tr, tl)
const CLIP_CORNERS: [Vec3; 8] = [
    Vec3::new(-1.0, -1.0, -1.0),
    Vec3::new(1.0, -1.0, -1.0),
    Vec3::new(1.0, 1.0, -1.0),
    Vec3::new(-1.0, 1.0, -1.0),
    Vec3::new(-1.0, -1.0, 1.0),
    Vec3::new(1.0, -1.0, 1.0),
    Vec3::new(1.0, 1.0, 1.0),
    Vec3::new(-1.0, 1.0, 1.0),
];

/// Eight world-space frustum corners
#[derive(Debug, Clone, Copy)]
pub struct ViewFrustum {
    corners: [Vec3; 8],
}

impl ViewFrustum {
    /// Create a frustum at the clip-space unit cube (identity camera)
    pub fn new() -> Self {
        Self {
            corners: CLIP_CORNERS,
        }
    }

    /// Recompute the corners from a camera's view-projection matrix.
    ///
    /// Each clip-space corner is unprojected through the matrix inverse
    /// with a perspective divide. A non-invertible matrix leaves the
    /// previous corners in place.
    pub fn update(&mut self, view_projection: &Mat4) {
        let inverse = view_projection.inverse();
        if !inverse.is_finite() {
            return;
        }

        for (index, clip) in CLIP_CORNERS.iter().enumerate() {
            let world = inverse * Vec4::new(clip.x, clip.y, clip.z, 1.0);
            if world.w.abs() > f32::EPSILON {
                self.corners[index] = world.truncate() / world.w;
            }
        }
    }

    /// World-space corners, near plane first
    pub fn corners(&self) -> &[Vec3; 8] {
        &self.corners
    }
}

impl Default for ViewFrustum {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "view_frustum_tests.rs"]
mod tests;
