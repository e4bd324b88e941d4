//! A CPU software rasterizer.
//!
//! Instances of shared [`Model`]s are transformed into camera space, clipped
//! against the view frustum, projected onto a viewport and scan-converted
//! into an owned color + depth [`FrameBuffer`] with per-vertex lighting.
//! Presenting the buffer is up to the host; [`FrameBuffer::save_png`] covers
//! the simple case.
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use rasty::prelude::*;
//!
//! let engine = Engine::new(RenderConfig::new(320, 240));
//! let scene = Scene::new(Camera::default())
//!     .with_instance(Instance::new(Arc::new(Model::cube()), Vec3::new(0.0, 0.0, 6.0)))
//!     .with_light(Light::ambient(0.3))
//!     .with_light(Light::directional(0.7, Vec3::new(-1.0, 1.0, -1.0)));
//!
//! let mut buffer = engine.create_frame_buffer();
//! let stats = engine.render_frame(&scene, &mut buffer);
//! assert_eq!(stats.instances_drawn, 1);
//! ```

pub mod camera;
pub mod clipper;
pub mod colors;
pub mod config;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod instance;
pub mod interpolate;
pub mod light;
pub mod math;
pub mod model;
pub mod projection;
pub mod render;
pub mod scene;
pub mod triangulate;

pub use camera::Camera;
pub use config::{RenderConfig, RenderMode};
pub use engine::{Engine, FrameStats, InstanceOutcome};
pub use error::{Error, Result};
pub use instance::Instance;
pub use light::Light;
pub use model::Model;
pub use projection::{Projection, Viewport};
pub use render::FrameBuffer;
pub use scene::Scene;

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use rasty::prelude::*;
/// ```
pub mod prelude {
    // Scene
    pub use crate::camera::Camera;
    pub use crate::instance::Instance;
    pub use crate::light::{Light, NO_SPECULAR};
    pub use crate::model::Model;
    pub use crate::scene::Scene;

    // Engine
    pub use crate::config::{RenderConfig, RenderMode};
    pub use crate::engine::{Engine, FrameStats, InstanceOutcome};
    pub use crate::projection::{Projection, Viewport};
    pub use crate::render::FrameBuffer;

    // Math
    pub use crate::math::{Mat4, Quat, Vec2, Vec3, Vec4};

    pub use crate::colors;
    pub use crate::error::{Error, Result};
}
