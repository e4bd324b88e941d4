//! Everything one frame renders: a camera, instances and lights.

use crate::camera::Camera;
use crate::instance::Instance;
use crate::light::Light;

#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub camera: Camera,
    pub instances: Vec<Instance>,
    pub lights: Vec<Light>,
}

impl Scene {
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            instances: Vec::new(),
            lights: Vec::new(),
        }
    }

    pub fn with_instance(mut self, instance: Instance) -> Self {
        self.instances.push(instance);
        self
    }

    pub fn with_light(mut self, light: Light) -> Self {
        self.lights.push(light);
        self
    }
}
