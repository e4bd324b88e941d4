//! A placed, colored copy of a [`Model`].

use std::sync::Arc;

use crate::colors;
use crate::light::NO_SPECULAR;
use crate::math::{Mat4, Quat, Vec3};
use crate::model::Model;

/// One model in the world: position, orientation, uniform scale and surface
/// properties.
///
/// Fields are public; hosts update `position` and `rotation` between frames.
#[derive(Debug, Clone)]
pub struct Instance {
    pub model: Arc<Model>,
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: f32,
    /// Base color, `0xAARRGGBB`.
    pub color: u32,
    /// Phong exponent; [`NO_SPECULAR`] turns highlights off.
    pub specular: f32,
}

impl Instance {
    /// A white, unrotated, unit-scale instance with no specular highlight.
    pub fn new(model: Arc<Model>, position: Vec3) -> Self {
        Self {
            model,
            position,
            rotation: Quat::IDENTITY,
            scale: 1.0,
            color: colors::WHITE,
            specular: NO_SPECULAR,
        }
    }

    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_color(mut self, color: u32) -> Self {
        self.color = color;
        self
    }

    pub fn with_specular(mut self, specular: f32) -> Self {
        self.specular = specular;
        self
    }

    /// Applies `delta` on top of the current orientation, in world space.
    pub fn rotate(&mut self, delta: Quat) {
        self.rotation = (delta * self.rotation).normalize();
    }

    /// Bounding radius in world units.
    pub fn radius(&self) -> f32 {
        self.model.radius() * self.scale.abs()
    }

    /// Model-to-world matrix: scale, then rotate, then translate.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::translation(self.position.x, self.position.y, self.position.z)
            * self.rotation.to_matrix()
            * Mat4::uniform_scaling(self.scale)
    }
}
