//! Perspective projection onto the viewport and back.
//!
//! The camera looks down +Z at a `width` x `height` viewport placed
//! `distance` in front of it. A camera-space point projects to
//!
//! ```text
//! screen = (x * d / z, y * d / z) * (pixels / viewport)
//! ```
//!
//! with the pixel grid centered on the image, and keeps `z` as its depth.
//! [`Projection::unproject`] inverts that with the same constants, which is
//! how the rasterizer gets camera-space positions back for lighting.

use crate::clipper::ViewFrustum;
use crate::math::{Vec2, Vec3};

/// The projection plane, in camera-space units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    /// Distance from the camera to the viewport; also the near plane.
    pub distance: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 1.0,
            distance: 1.0,
        }
    }
}

impl Viewport {
    pub fn new(width: f32, height: f32, distance: f32) -> Self {
        Self {
            width,
            height,
            distance,
        }
    }

    /// Five-plane frustum through this viewport's edges.
    pub fn frustum(&self) -> ViewFrustum {
        ViewFrustum::new(self.width, self.height, self.distance)
    }
}

/// Maps camera space to a pixel grid of `pixel_width` x `pixel_height`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    viewport: Viewport,
    scale_x: f32,
    scale_y: f32,
}

impl Projection {
    pub fn new(viewport: Viewport, pixel_width: u32, pixel_height: u32) -> Self {
        Self {
            viewport,
            scale_x: pixel_width as f32 / viewport.width,
            scale_y: pixel_height as f32 / viewport.height,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Projects a camera-space point in front of the camera (`z > 0`).
    ///
    /// Returns the center-origin pixel position and the point's depth.
    pub fn project(&self, point: Vec3) -> (Vec2, f32) {
        let k = self.viewport.distance / point.z;
        let screen = Vec2::new(point.x * k * self.scale_x, point.y * k * self.scale_y);
        (screen, point.z)
    }

    /// Recovers the camera-space point that projects to `screen` at `depth`.
    pub fn unproject(&self, screen: Vec2, depth: f32) -> Vec3 {
        let k = depth / self.viewport.distance;
        Vec3::new(
            screen.x / self.scale_x * k,
            screen.y / self.scale_y * k,
            depth,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn viewport_edge_maps_to_buffer_edge() {
        let projection = Projection::new(Viewport::default(), 640, 480);
        let (screen, depth) = projection.project(Vec3::new(1.0, -1.0, 2.0));
        assert_relative_eq!(screen.x, 320.0);
        assert_relative_eq!(screen.y, -240.0);
        assert_eq!(depth, 2.0);
    }

    #[test]
    fn unproject_inverts_project() {
        let projection = Projection::new(Viewport::new(2.0, 1.5, 0.5), 800, 600);
        let p = Vec3::new(0.7, -1.3, 6.25);
        let (screen, depth) = projection.project(p);
        let back = projection.unproject(screen, depth);
        assert_relative_eq!(back.x, p.x, epsilon = 1e-5);
        assert_relative_eq!(back.y, p.y, epsilon = 1e-5);
        assert_relative_eq!(back.z, p.z);
    }

    #[test]
    fn distance_widens_the_image() {
        let near = Projection::new(Viewport::new(1.0, 1.0, 1.0), 100, 100);
        let far = Projection::new(Viewport::new(1.0, 1.0, 2.0), 100, 100);
        let p = Vec3::new(1.0, 0.0, 10.0);
        assert_relative_eq!(far.project(p).0.x, 2.0 * near.project(p).0.x);
    }
}
