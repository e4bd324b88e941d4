//! Renderer configuration.

use crate::colors;
use crate::projection::Viewport;

/// What the engine draws for each triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Depth-tested, lit triangles.
    #[default]
    Filled,
    /// Filled triangles with the wireframe overlay on top.
    FilledWireframe,
    /// Wireframe only.
    Wireframe,
}

impl RenderMode {
    pub fn draws_filled(self) -> bool {
        matches!(self, RenderMode::Filled | RenderMode::FilledWireframe)
    }

    pub fn draws_wireframe(self) -> bool {
        matches!(self, RenderMode::FilledWireframe | RenderMode::Wireframe)
    }
}

/// Fixed per-engine settings: output size, projection and overlay options.
///
/// ```
/// use rasty::config::{RenderConfig, RenderMode};
///
/// let config = RenderConfig::new(320, 240)
///     .with_render_mode(RenderMode::FilledWireframe)
///     .with_backface_culling(true);
/// assert_eq!(config.width, 320);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    /// Frame buffer width in pixels.
    pub width: u32,
    /// Frame buffer height in pixels.
    pub height: u32,
    pub viewport: Viewport,
    /// Color every frame is cleared to.
    pub background: u32,
    pub render_mode: RenderMode,
    pub wireframe_color: u32,
    /// Skip triangles facing away from the camera. Off by default; the
    /// z-buffer already resolves closed meshes correctly.
    pub backface_culling: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 640,
            viewport: Viewport::default(),
            background: colors::BACKGROUND,
            render_mode: RenderMode::default(),
            wireframe_color: colors::WIREFRAME,
            backface_culling: false,
        }
    }
}

impl RenderConfig {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    pub fn with_background(mut self, color: u32) -> Self {
        self.background = color;
        self
    }

    pub fn with_render_mode(mut self, mode: RenderMode) -> Self {
        self.render_mode = mode;
        self
    }

    pub fn with_wireframe_color(mut self, color: u32) -> Self {
        self.wireframe_color = color;
        self
    }

    pub fn with_backface_culling(mut self, enabled: bool) -> Self {
        self.backface_culling = enabled;
        self
    }
}
