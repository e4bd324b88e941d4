//! Packed ARGB8888 colors.
//!
//! Colors travel through the pipeline as `u32` values laid out `0xAARRGGBB`,
//! the same layout the frame buffer stores.

pub const BLACK: u32 = 0xFF000000;
pub const WHITE: u32 = 0xFFFFFFFF;
pub const RED: u32 = 0xFFFF0000;
pub const GREEN: u32 = 0xFF00FF00;
pub const BLUE: u32 = 0xFF0000FF;

/// Default clear color.
pub const BACKGROUND: u32 = BLACK;
/// Default wireframe overlay color.
pub const WIREFRAME: u32 = RED;

/// Scales the RGB channels of `color` by `intensity` clamped to `[0, 1]`.
/// Alpha is kept.
#[inline]
pub fn shade(color: u32, intensity: f32) -> u32 {
    let k = intensity.clamp(0.0, 1.0);
    if k == 1.0 {
        return color;
    }
    let channel = |shift: u32| ((((color >> shift) & 0xFF) as f32 * k).round() as u32) << shift;
    (color & 0xFF000000) | channel(16) | channel(8) | channel(0)
}

/// Splits `0xAARRGGBB` into `[r, g, b, a]` bytes.
#[inline]
pub fn to_rgba_bytes(color: u32) -> [u8; 4] {
    let [a, r, g, b] = color.to_be_bytes();
    [r, g, b, a]
}
