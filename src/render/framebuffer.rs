//! Color and depth buffers with center-origin pixel addressing.
//!
//! Pixel `(0, 0)` is the middle of the image; `x` grows to the right and `y`
//! grows upwards. A pixel lives at index
//!
//! ```text
//! (y + height / 2) * width + (x + width / 2)
//! ```
//!
//! so row 0 of the buffers is the *bottom* of the picture. [`FrameBuffer::to_image`]
//! flips rows when handing the result to the `image` crate.
//!
//! The depth buffer stores camera-space `z`; smaller is closer. It is cleared
//! to `+inf` so the first surface written to any pixel always wins.

use std::path::Path;

use image::{ImageFormat, Rgba, RgbaImage};

use crate::colors::{self, to_rgba_bytes};
use crate::error::Result;

/// An owned color buffer plus a matching depth buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    color: Vec<u32>,
    depth: Vec<f32>,
    width: u32,
    height: u32,
}

impl FrameBuffer {
    /// Creates a buffer cleared to [`colors::BACKGROUND`] with infinite depth.
    pub fn new(width: u32, height: u32) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            color: vec![colors::BACKGROUND; len],
            depth: vec![f32::INFINITY; len],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Resets every pixel to `background` and every depth to `+inf`.
    pub fn clear(&mut self, background: u32) {
        self.color.fill(background);
        self.depth.fill(f32::INFINITY);
    }

    /// Buffer index for a center-origin pixel, or `None` outside the image.
    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let col = i64::from(x) + i64::from(self.width / 2);
        let row = i64::from(y) + i64::from(self.height / 2);
        if col < 0 || row < 0 || col >= i64::from(self.width) || row >= i64::from(self.height) {
            return None;
        }
        Some((row as usize) * (self.width as usize) + col as usize)
    }

    /// Writes a color with no depth test. Out-of-range pixels are ignored.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if let Some(idx) = self.index(x, y) {
            self.color[idx] = color;
        }
    }

    /// Writes `color` and `depth` only if `depth` is strictly closer than
    /// what the pixel already holds.
    ///
    /// Returns whether the pixel was written. Out-of-range pixels are ignored
    /// and report `false`.
    #[inline]
    pub fn set_pixel_with_depth(&mut self, x: i32, y: i32, depth: f32, color: u32) -> bool {
        match self.index(x, y) {
            Some(idx) if depth < self.depth[idx] => {
                self.depth[idx] = depth;
                self.color[idx] = color;
                true
            }
            _ => false,
        }
    }

    /// Color at `(x, y)`, or `None` if out of bounds.
    #[inline]
    pub fn pixel(&self, x: i32, y: i32) -> Option<u32> {
        self.index(x, y).map(|idx| self.color[idx])
    }

    /// Depth at `(x, y)`, or `None` if out of bounds.
    #[inline]
    pub fn depth(&self, x: i32, y: i32) -> Option<f32> {
        self.index(x, y).map(|idx| self.depth[idx])
    }

    pub fn color_buffer(&self) -> &[u32] {
        &self.color
    }

    pub fn depth_buffer(&self) -> &[f32] {
        &self.depth
    }

    /// Converts the color buffer to an RGBA image with +Y pointing up.
    pub fn to_image(&self) -> RgbaImage {
        let width = self.width as usize;
        RgbaImage::from_fn(self.width, self.height, |px, py| {
            let row = (self.height - 1 - py) as usize;
            Rgba(to_rgba_bytes(self.color[row * width + px as usize]))
        })
    }

    /// Writes the color buffer to `path` as a PNG.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.to_image().save_with_format(path, ImageFormat::Png)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_is_the_middle_of_the_buffer() {
        let mut buffer = FrameBuffer::new(4, 4);
        buffer.set_pixel(0, 0, colors::WHITE);
        // (0 + 2) * 4 + (0 + 2)
        assert_eq!(buffer.color_buffer()[10], colors::WHITE);
        assert_eq!(buffer.pixel(0, 0), Some(colors::WHITE));
    }

    #[test]
    fn writes_outside_the_image_are_dropped() {
        let mut buffer = FrameBuffer::new(4, 3);
        let before = buffer.clone();

        buffer.set_pixel(2, 0, colors::WHITE);
        buffer.set_pixel(-3, 0, colors::WHITE);
        buffer.set_pixel(0, 2, colors::WHITE);
        assert!(!buffer.set_pixel_with_depth(0, -2, 1.0, colors::WHITE));

        assert_eq!(buffer, before);
        assert_eq!(buffer.pixel(2, 0), None);
        // Odd height: rows run from -1 to 1.
        assert!(buffer.pixel(0, 1).is_some());
        assert!(buffer.pixel(0, -1).is_some());
    }

    #[test]
    fn depth_test_is_strictly_less() {
        let mut buffer = FrameBuffer::new(2, 2);
        assert!(buffer.set_pixel_with_depth(0, 0, 5.0, colors::RED));
        assert!(!buffer.set_pixel_with_depth(0, 0, 5.0, colors::GREEN));
        assert!(!buffer.set_pixel_with_depth(0, 0, 6.0, colors::GREEN));
        assert!(buffer.set_pixel_with_depth(0, 0, 4.0, colors::BLUE));

        assert_eq!(buffer.pixel(0, 0), Some(colors::BLUE));
        assert_eq!(buffer.depth(0, 0), Some(4.0));
    }

    #[test]
    fn clear_resets_color_and_depth() {
        let mut buffer = FrameBuffer::new(2, 2);
        buffer.set_pixel_with_depth(-1, -1, 1.0, colors::RED);
        buffer.clear(colors::BLUE);

        assert!(buffer.color_buffer().iter().all(|&c| c == colors::BLUE));
        assert!(buffer.depth_buffer().iter().all(|d| d.is_infinite()));
    }

    #[test]
    fn image_rows_are_flipped() {
        let mut buffer = FrameBuffer::new(2, 2);
        // Top-left of the picture.
        buffer.set_pixel(-1, 0, colors::RED);
        let image = buffer.to_image();
        assert_eq!(image.get_pixel(0, 0).0, to_rgba_bytes(colors::RED));
        assert_eq!(image.get_pixel(0, 1).0, to_rgba_bytes(colors::BACKGROUND));
    }
}
