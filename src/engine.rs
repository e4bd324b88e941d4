//! Core rendering engine.
//!
//! The [`Engine`] drives the per-frame pipeline for every instance in a
//! [`Scene`]:
//!
//! ```text
//! model space --model matrix--> world --view matrix--> camera space
//!     --frustum clip (sphere fast path)--> project --> fill + wireframe
//! ```
//!
//! Hidden surfaces are resolved by the z-buffer, so instances and triangles
//! can be drawn in any order.

use log::{debug, trace};

use crate::clipper::{ClipSet, ViewFrustum};
use crate::config::RenderConfig;
use crate::instance::Instance;
use crate::light::Light;
use crate::math::{Mat4, Vec2, Vec3};
use crate::projection::Projection;
use crate::render::{draw_visible_triangle, draw_wireframe_triangle, FrameBuffer, Shading};
use crate::scene::Scene;

/// What happened to one instance in a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstanceOutcome {
    /// Entirely outside the frustum, or clipped down to nothing.
    Culled,
    Drawn {
        /// Triangles sent to the rasterizer after clipping and culling.
        triangles: usize,
        /// Triangles the clipper could not classify and left out.
        dropped: usize,
    },
}

/// Per-frame counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStats {
    pub instances_drawn: usize,
    pub instances_culled: usize,
    pub triangles_drawn: usize,
    pub triangles_dropped: usize,
}

pub struct Engine {
    config: RenderConfig,
    projection: Projection,
    frustum: ViewFrustum,
}

impl Engine {
    pub fn new(config: RenderConfig) -> Self {
        Self {
            projection: Projection::new(config.viewport, config.width, config.height),
            frustum: config.viewport.frustum(),
            config,
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// A frame buffer sized for this engine, cleared to the background.
    pub fn create_frame_buffer(&self) -> FrameBuffer {
        let mut buffer = FrameBuffer::new(self.config.width, self.config.height);
        buffer.clear(self.config.background);
        buffer
    }

    /// Clears `buffer` and draws every instance of `scene` into it.
    ///
    /// `buffer` should come from [`Engine::create_frame_buffer`]; projection
    /// uses the configured size regardless of the buffer's.
    pub fn render_frame(&self, scene: &Scene, buffer: &mut FrameBuffer) -> FrameStats {
        buffer.clear(self.config.background);
        let view = scene.camera.view_matrix();

        let mut stats = FrameStats::default();
        for (index, instance) in scene.instances.iter().enumerate() {
            match self.render_instance(instance, &view, &scene.lights, buffer) {
                InstanceOutcome::Culled => {
                    trace!("instance {} culled", index);
                    stats.instances_culled += 1;
                }
                InstanceOutcome::Drawn { triangles, dropped } => {
                    stats.instances_drawn += 1;
                    stats.triangles_drawn += triangles;
                    stats.triangles_dropped += dropped;
                }
            }
        }

        debug!(
            "frame: {} instances drawn, {} culled, {} triangles ({} dropped)",
            stats.instances_drawn,
            stats.instances_culled,
            stats.triangles_drawn,
            stats.triangles_dropped
        );
        stats
    }

    /// Transforms, clips, projects and draws one instance.
    ///
    /// `view` is the world-to-camera matrix. A culled instance leaves
    /// `buffer` untouched.
    pub fn render_instance(
        &self,
        instance: &Instance,
        view: &Mat4,
        lights: &[Light],
        buffer: &mut FrameBuffer,
    ) -> InstanceOutcome {
        let model_to_camera = *view * instance.model_matrix();
        let vertices: Vec<Vec3> = instance
            .model
            .vertices()
            .iter()
            .map(|&v| (model_to_camera * v).to_vec3_perspective())
            .collect();
        let center = *view * instance.position;

        let set = ClipSet::new(vertices, instance.model.triangles().to_vec());
        let Some(set) = self.frustum.clip_instance(set, center, instance.radius()) else {
            return InstanceOutcome::Culled;
        };

        let ClipSet {
            vertices,
            mut triangles,
            dropped,
        } = set;
        if self.config.backface_culling {
            triangles.retain(|t| faces_camera(t.map(|i| vertices[i])));
        }

        // Every surviving vertex is on or past the near plane, so z > 0.
        let projected: Vec<(Vec2, f32)> = vertices
            .iter()
            .map(|&v| self.projection.project(v))
            .collect();

        let mode = self.config.render_mode;
        if mode.draws_filled() {
            let shading = Shading {
                lights,
                projection: &self.projection,
                camera_position: Vec3::ZERO,
                view,
                specular: instance.specular,
            };
            for t in &triangles {
                draw_visible_triangle(
                    buffer,
                    t.map(|i| projected[i].0),
                    t.map(|i| projected[i].1),
                    instance.color,
                    &shading,
                );
            }
        }

        if mode.draws_wireframe() {
            for t in &triangles {
                let points = t.map(|i| projected[i].0);
                draw_wireframe_triangle(buffer, points, self.config.wireframe_color);
            }
        }

        InstanceOutcome::Drawn {
            triangles: triangles.len(),
            dropped,
        }
    }
}

/// Whether a camera-space triangle's front side faces the eye at the origin.
fn faces_camera([a, b, c]: [Vec3; 3]) -> bool {
    // Not normalized; only the sign matters.
    let normal = (b - a).cross(c - a);
    let camera_ray = -a;
    normal.dot(camera_ray) >= 0.0
}
