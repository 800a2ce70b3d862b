/// HorizonGround — a ground plane that follows the camera.
///
/// The plane stays centered under the camera on the XZ axes so the ground
/// never visibly ends while the camera moves. Height and half-extent are
/// fixed at construction; `update` only slides the center.

use glam::Vec3;

/// Ground plane centered under the camera
#[derive(Debug, Clone, Copy)]
pub struct HorizonGround {
    center: Vec3,
    half_extent: f32,
    height: f32,
}

impl HorizonGround {
    /// Create a ground plane of the given half-extent at `height`
    pub fn new(half_extent: f32, height: f32) -> Self {
        Self {
            center: Vec3::new(0.0, height, 0.0),
            half_extent,
            height,
        }
    }

    /// Slide the plane center under `eye` (XZ only; Y stays at the
    /// construction height)
    pub fn update(&mut self, eye: Vec3) {
        self.center = Vec3::new(eye.x, self.height, eye.z);
    }

    // ===== GETTERS =====

    /// Current plane center
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Half-extent of the plane along X and Z
    pub fn half_extent(&self) -> f32 {
        self.half_extent
    }

    /// Plane height (world Y)
    pub fn height(&self) -> f32 {
        self.height
    }

    /// The four plane corners, counter-clockwise seen from above
    pub fn corners(&self) -> [Vec3; 4] {
        let e = self.half_extent;
        [
            self.center + Vec3::new(-e, 0.0, -e),
            self.center + Vec3::new(-e, 0.0, e),
            self.center + Vec3::new(e, 0.0, e),
            self.center + Vec3::new(e, 0.0, -e),
        ]
    }
}

#[cfg(test)]
#[path = "horizon_ground_tests.rs"]
mod tests;
