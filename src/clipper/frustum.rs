//! The camera-space view frustum.
//!
//! Five planes bound the visible volume. The near plane sits at the viewport
//! distance; the four side planes pass through the camera and the viewport
//! edges. There is no far plane.
//!
//! ```text
//!            \  viewport  /
//!             \ ________ /   z = d (near plane)
//!              \        /
//!               \      /     side planes through the origin
//!                \    /
//!                 \  /
//!                camera
//! ```

use super::clip_set::ClipSet;
use crate::geometry::{signed_distance, Plane};
use crate::math::Vec3;

/// Where a bounding sphere sits relative to one plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SphereTest {
    /// Entirely on the inside; no triangle can cross the plane.
    Inside,
    /// Entirely on the outside; nothing of the instance is visible.
    Outside,
    /// Crosses the plane; triangles need clipping.
    Straddling,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewFrustum {
    planes: [Plane; 5],
}

impl ViewFrustum {
    /// Builds the frustum for a viewport of `width` x `height` world units at
    /// `distance` in front of the camera.
    pub fn new(width: f32, height: f32, distance: f32) -> Self {
        let half_w = width / 2.0;
        let half_h = height / 2.0;

        Self {
            planes: [
                // Near: z >= distance
                Plane::new(Vec3::new(0.0, 0.0, 1.0), -distance),
                // Left: x / z >= -half_w / distance
                Plane::new(Vec3::new(distance, 0.0, half_w), 0.0),
                // Right: x / z <= half_w / distance
                Plane::new(Vec3::new(-distance, 0.0, half_w), 0.0),
                // Bottom
                Plane::new(Vec3::new(0.0, distance, half_h), 0.0),
                // Top
                Plane::new(Vec3::new(0.0, -distance, half_h), 0.0),
            ],
        }
    }

    pub fn planes(&self) -> &[Plane; 5] {
        &self.planes
    }

    /// Classifies a bounding sphere against one plane.
    pub fn sphere_test(center: Vec3, radius: f32, plane: &Plane) -> SphereTest {
        let distance = signed_distance(center, plane);
        if radius <= distance {
            SphereTest::Inside
        } else if radius + distance <= 0.0 {
            SphereTest::Outside
        } else {
            SphereTest::Straddling
        }
    }

    /// Clips an instance's camera-space geometry against every plane in turn.
    ///
    /// `center` and `radius` describe the instance's bounding sphere in camera
    /// space. Planes the sphere lies fully inside are skipped; a sphere fully
    /// outside any plane culls the whole instance. Triangles produced by one
    /// plane are clipped again by the planes after it.
    ///
    /// Returns `None` when there is nothing left to draw.
    pub fn clip_instance(&self, mut set: ClipSet, center: Vec3, radius: f32) -> Option<ClipSet> {
        for plane in &self.planes {
            match Self::sphere_test(center, radius, plane) {
                SphereTest::Inside => {}
                SphereTest::Outside => return None,
                SphereTest::Straddling => set.clip_against_plane(plane),
            }
            if set.is_empty() {
                return None;
            }
        }
        Some(set)
    }
}
