//! Triangle outlines.

use crate::interpolate::interpolate;
use crate::math::Vec2;
use crate::render::framebuffer::FrameBuffer;

/// Draws a one-pixel line from `a` to `b`, both ends included.
///
/// Steps along whichever axis the line covers more of, so there is exactly
/// one pixel per column (or row) and no gaps. No depth test.
pub fn draw_line(buffer: &mut FrameBuffer, a: Vec2, b: Vec2, color: u32) {
    let (a, b) = (a.round(), b.round());
    let delta = b - a;

    if delta.x.abs() > delta.y.abs() {
        let ys = interpolate(a.x, a.y, b.x, b.y);
        let x_start = a.x.min(b.x) as i32;
        for (offset, y) in ys.iter().enumerate() {
            buffer.set_pixel(x_start + offset as i32, y.round() as i32, color);
        }
    } else {
        let xs = interpolate(a.y, a.x, b.y, b.x);
        let y_start = a.y.min(b.y) as i32;
        for (offset, x) in xs.iter().enumerate() {
            buffer.set_pixel(x.round() as i32, y_start + offset as i32, color);
        }
    }
}

/// Outlines a projected triangle.
pub fn draw_wireframe_triangle(buffer: &mut FrameBuffer, points: [Vec2; 3], color: u32) {
    let [a, b, c] = points;
    draw_line(buffer, a, b, color);
    draw_line(buffer, b, c, color);
    draw_line(buffer, c, a, color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors;

    fn lit(buffer: &FrameBuffer) -> usize {
        buffer
            .color_buffer()
            .iter()
            .filter(|&&c| c != colors::BACKGROUND)
            .count()
    }

    #[test]
    fn horizontal_line_includes_both_ends() {
        let mut buffer = FrameBuffer::new(32, 32);
        draw_line(&mut buffer, Vec2::new(5.0, 3.0), Vec2::new(-5.0, 3.0), colors::RED);
        assert_eq!(lit(&buffer), 11);
        assert_eq!(buffer.pixel(-5, 3), Some(colors::RED));
        assert_eq!(buffer.pixel(5, 3), Some(colors::RED));
    }

    #[test]
    fn steep_line_has_one_pixel_per_row() {
        let mut buffer = FrameBuffer::new(32, 32);
        draw_line(&mut buffer, Vec2::new(0.0, -10.0), Vec2::new(3.0, 10.0), colors::RED);
        assert_eq!(lit(&buffer), 21);
        for y in -10..=10 {
            let row = (-16..16).filter(|&x| buffer.pixel(x, y) == Some(colors::RED));
            assert_eq!(row.count(), 1, "row {y}");
        }
    }

    #[test]
    fn single_point_line() {
        let mut buffer = FrameBuffer::new(8, 8);
        draw_line(&mut buffer, Vec2::new(1.2, 0.8), Vec2::new(0.9, 1.1), colors::RED);
        assert_eq!(lit(&buffer), 1);
        assert_eq!(buffer.pixel(1, 1), Some(colors::RED));
    }

    #[test]
    fn wireframe_ignores_depth() {
        let mut buffer = FrameBuffer::new(32, 32);
        buffer.set_pixel_with_depth(0, -5, 0.1, colors::BLUE);
        let points = [
            Vec2::new(-5.0, -5.0),
            Vec2::new(5.0, -5.0),
            Vec2::new(0.0, 5.0),
        ];
        draw_wireframe_triangle(&mut buffer, points, colors::RED);

        assert_eq!(buffer.pixel(0, -5), Some(colors::RED));
        assert_eq!(buffer.depth(0, -5), Some(0.1));
        // Interior stays untouched.
        assert_eq!(buffer.pixel(0, 0), Some(colors::BACKGROUND));
    }
}
