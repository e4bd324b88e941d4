//! Triangle and line drawing into a [`FrameBuffer`](super::FrameBuffer).
//!
//! - [`draw_visible_triangle`]: lit, depth-tested scanline fill.
//! - [`draw_wireframe_triangle`] / [`draw_line`]: outlines with no depth test.
//!
//! Both walk edges with [`interpolate`](crate::interpolate::interpolate), so
//! every vertex is snapped to a whole pixel first; that keeps the sample
//! counts of adjacent edges in step.

mod scanline;
mod wireframe;

pub use scanline::draw_visible_triangle;
pub use wireframe::{draw_line, draw_wireframe_triangle};

use crate::light::Light;
use crate::math::{Mat4, Vec3};
use crate::projection::Projection;

/// Everything the fill pass needs to light a triangle.
///
/// One `Shading` is built per instance; only `specular` varies between
/// instances of the same frame.
#[derive(Clone, Copy, Debug)]
pub struct Shading<'a> {
    pub lights: &'a [Light],
    /// Used to recover camera-space positions from projected vertices.
    pub projection: &'a Projection,
    /// Eye position in camera space. The origin unless the caller offsets it.
    pub camera_position: Vec3,
    /// World-to-camera matrix, for bringing lights into camera space.
    pub view: &'a Mat4,
    /// Phong exponent, negative to disable the specular term.
    pub specular: f32,
}
