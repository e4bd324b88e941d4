//! Scanline fill with a z-buffer and per-vertex lighting.
//!
//! # Algorithm
//!
//! 1. Recover the camera-space corners with [`Projection::unproject`] and
//!    take the flat normal of the triangle from them.
//! 2. Evaluate the total light intensity at each corner.
//! 3. Sort the corners by screen Y. Depth and intensity travel with them.
//! 4. Walk the two short edges (`v0 -> v1 -> v2`, shared row dropped once)
//!    and the long edge (`v0 -> v2`); both give one sample per row.
//! 5. The middle row tells which of the two is on the left.
//! 6. Per row, interpolate depth and intensity between the left and right
//!    ends and write every pixel that passes the depth test.
//!
//! ```text
//!        v0
//!        /|
//!       / |
//!   v1 /  |   long edge v0 -> v2 on the right here
//!      \  |
//!       \ |
//!        \|
//!        v2
//! ```
//!
//! [`Projection::unproject`]: crate::projection::Projection::unproject

use super::Shading;
use crate::colors::shade;
use crate::geometry::compute_normal;
use crate::interpolate::interpolate;
use crate::light::total_intensity;
use crate::math::Vec2;
use crate::render::framebuffer::FrameBuffer;

/// A triangle corner in screen space with the attributes carried along edges.
#[derive(Clone, Copy, Debug)]
struct Corner {
    point: Vec2,
    depth: f32,
    intensity: f32,
}

/// Samples of one attribute down the short side and the long side of a
/// Y-sorted triangle.
fn edge_samples(c: &[Corner; 3], attr: impl Fn(&Corner) -> f32) -> (Vec<f32>, Vec<f32>) {
    let [v0, v1, v2] = c;

    let mut short = interpolate(v0.point.y, attr(v0), v1.point.y, attr(v1));
    // v1's row is produced again by the second edge.
    short.pop();
    short.extend(interpolate(v1.point.y, attr(v1), v2.point.y, attr(v2)));

    let long = interpolate(v0.point.y, attr(v0), v2.point.y, attr(v2));
    (short, long)
}

/// Fills a projected triangle, lit and depth-tested.
///
/// # Arguments
/// * `buffer` - Target color and depth buffers
/// * `points` - Center-origin screen positions, in the triangle's winding order
/// * `depths` - Camera-space `z` of each point
/// * `color` - Base color, scaled per pixel by the clamped light intensity
/// * `shading` - Lights, projection and camera state for the lighting model
///
/// Triangles with no area in camera space draw nothing.
pub fn draw_visible_triangle(
    buffer: &mut FrameBuffer,
    points: [Vec2; 3],
    depths: [f32; 3],
    color: u32,
    shading: &Shading,
) {
    let camera_points = [0, 1, 2].map(|k| shading.projection.unproject(points[k], depths[k]));
    // Taken before sorting: the sort can flip the winding.
    let normal = compute_normal(camera_points[0], camera_points[1], camera_points[2]);
    if normal.x.is_nan() {
        return;
    }

    let mut corners = [0, 1, 2].map(|k| Corner {
        point: points[k].round(),
        depth: depths[k],
        intensity: total_intensity(
            shading.lights,
            camera_points[k],
            normal,
            shading.specular,
            shading.camera_position,
            shading.view,
        ),
    });
    corners.sort_by(|a, b| a.point.y.total_cmp(&b.point.y));

    let (short_x, long_x) = edge_samples(&corners, |c| c.point.x);
    let (short_z, long_z) = edge_samples(&corners, |c| c.depth);
    let (short_i, long_i) = edge_samples(&corners, |c| c.intensity);

    let middle = long_x.len() / 2;
    let long_is_left = match (long_x.get(middle), short_x.get(middle)) {
        (Some(long), Some(short)) => long < short,
        _ => return,
    };
    let (left, right) = if long_is_left {
        ((&long_x, &long_z, &long_i), (&short_x, &short_z, &short_i))
    } else {
        ((&short_x, &short_z, &short_i), (&long_x, &long_z, &long_i))
    };

    let half_height = (buffer.height() / 2) as i32;
    let y_min = -half_height;
    let y_max = buffer.height() as i32 - half_height;
    let y_start = corners[0].point.y as i32;

    let rows = left.0.len().min(right.0.len());
    for row in 0..rows {
        let y = y_start + row as i32;
        if y < y_min || y >= y_max {
            continue;
        }

        let x_left = left.0[row].round();
        let x_right = right.0[row].round();
        let depths = interpolate(x_left, left.1[row], x_right, right.1[row]);
        let intensities = interpolate(x_left, left.2[row], x_right, right.2[row]);

        let x_start = x_left.min(x_right) as i32;
        for (offset, (&z, &intensity)) in depths.iter().zip(&intensities).enumerate() {
            buffer.set_pixel_with_depth(x_start + offset as i32, y, z, shade(color, intensity));
        }
    }
}
