//! Rendering backend: the frame buffer and the routines that draw into it.

pub mod framebuffer;
pub mod rasterizer;

pub use framebuffer::FrameBuffer;
pub use rasterizer::{draw_line, draw_visible_triangle, draw_wireframe_triangle, Shading};
