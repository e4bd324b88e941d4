//! Light sources and the per-vertex lighting model.
//!
//! Every light contributes a scalar intensity at a surface point. The
//! contributions are summed without clamping; the rasterizer clamps when it
//! scales the surface color.
//!
//! Points and normals passed to [`Light::intensity_at`] are in camera space.
//! Lights are stored in world space and moved into camera space with the
//! current view matrix on every call, so a moving camera (or a moving point
//! light) needs no extra bookkeeping.

use crate::math::{Mat4, Vec3};

/// Specular exponent value that turns the specular term off.
pub const NO_SPECULAR: f32 = -1.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Light {
    /// Uniform light reaching every surface regardless of orientation.
    Ambient { intensity: f32 },
    /// Parallel rays; `direction` points from the scene *towards* the light.
    Directional { intensity: f32, direction: Vec3 },
    /// Light radiating from a world-space position.
    Point { intensity: f32, position: Vec3 },
}

impl Light {
    pub fn ambient(intensity: f32) -> Self {
        Light::Ambient { intensity }
    }

    pub fn directional(intensity: f32, direction: Vec3) -> Self {
        Light::Directional {
            intensity,
            direction,
        }
    }

    pub fn point(intensity: f32, position: Vec3) -> Self {
        Light::Point {
            intensity,
            position,
        }
    }

    /// Moves a point light. Other kinds have no position and are unchanged.
    pub fn set_position(&mut self, new_position: Vec3) {
        if let Light::Point { position, .. } = self {
            *position = new_position;
        }
    }

    /// Intensity this light contributes at `point` on a surface with
    /// `normal`.
    ///
    /// # Arguments
    /// * `point` - Camera-space surface position
    /// * `normal` - Camera-space surface normal (any length)
    /// * `specular` - Phong exponent; negative disables the specular term
    /// * `camera_position` - Camera-space eye position (the origin for the
    ///   standard pipeline)
    /// * `view` - World-to-camera matrix for moving the light into camera space
    pub fn intensity_at(
        &self,
        point: Vec3,
        normal: Vec3,
        specular: f32,
        camera_position: Vec3,
        view: &Mat4,
    ) -> f32 {
        let (intensity, to_light) = match *self {
            Light::Ambient { intensity } => return intensity,
            Light::Directional {
                intensity,
                direction,
            } => (intensity, view.transform_direction(direction)),
            Light::Point {
                intensity,
                position,
            } => (intensity, *view * position - point),
        };

        let mut total = 0.0;

        let n_dot_l = normal.dot(to_light);
        if n_dot_l > 0.0 {
            total += intensity * n_dot_l / (normal.magnitude() * to_light.magnitude());
        }

        if specular >= 0.0 {
            let reflected = to_light.reflect(normal.normalize());
            let to_camera = camera_position - point;
            let r_dot_v = reflected.dot(to_camera);
            if r_dot_v > 0.0 {
                let cos = r_dot_v / (reflected.magnitude() * to_camera.magnitude());
                total += intensity * cos.powf(specular);
            }
        }

        total
    }
}

/// Sum of every light's contribution at a point. Not clamped.
pub fn total_intensity(
    lights: &[Light],
    point: Vec3,
    normal: Vec3,
    specular: f32,
    camera_position: Vec3,
    view: &Mat4,
) -> f32 {
    lights
        .iter()
        .map(|light| light.intensity_at(point, normal, specular, camera_position, view))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Quat;
    use approx::assert_relative_eq;

    const EYE: Vec3 = Vec3::ZERO;

    #[test]
    fn ambient_ignores_geometry() {
        let light = Light::ambient(0.3);
        let i = light.intensity_at(
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(0.0, -1.0, 0.0),
            10.0,
            EYE,
            &Mat4::identity(),
        );
        assert_eq!(i, 0.3);
    }

    #[test]
    fn directional_facing_light_gets_full_diffuse() {
        let light = Light::directional(0.8, Vec3::new(0.0, 0.0, -1.0));
        let i = light.intensity_at(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::new(0.0, 0.0, -2.0),
            NO_SPECULAR,
            EYE,
            &Mat4::identity(),
        );
        assert_relative_eq!(i, 0.8, epsilon = 1e-6);
    }

    #[test]
    fn directional_behind_surface_contributes_nothing() {
        let light = Light::directional(0.8, Vec3::new(0.0, 0.0, 1.0));
        let i = light.intensity_at(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::new(0.0, 0.0, -1.0),
            NO_SPECULAR,
            EYE,
            &Mat4::identity(),
        );
        assert_eq!(i, 0.0);
    }

    #[test]
    fn directional_at_angle_scales_by_cosine() {
        let light = Light::directional(1.0, Vec3::new(0.0, 1.0, 0.0));
        let normal = Vec3::new(0.0, 1.0, -1.0);
        let i = light.intensity_at(
            Vec3::new(0.0, 0.0, 5.0),
            normal,
            NO_SPECULAR,
            EYE,
            &Mat4::identity(),
        );
        assert_relative_eq!(i, std::f32::consts::FRAC_1_SQRT_2, epsilon = 1e-5);
    }

    #[test]
    fn directional_is_rotated_by_view() {
        // Camera turned to look along world +X. A light towards world -X is
        // behind it, so it lights surfaces facing the camera.
        let view = Quat::from_axis_angle(Vec3::UP, std::f32::consts::FRAC_PI_2)
            .conjugate()
            .to_matrix();
        let light = Light::directional(1.0, Vec3::new(-1.0, 0.0, 0.0));
        let i = light.intensity_at(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::new(0.0, 0.0, -1.0),
            NO_SPECULAR,
            EYE,
            &view,
        );
        assert_relative_eq!(i, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn specular_adds_highlight_on_mirror_direction() {
        // Light straight behind the eye: reflection points back at the eye.
        let light = Light::point(1.0, Vec3::new(0.0, 0.0, 0.0));
        let point = Vec3::new(0.0, 0.0, 5.0);
        let normal = Vec3::new(0.0, 0.0, -1.0);
        let view = Mat4::identity();

        let diffuse_only = light.intensity_at(point, normal, NO_SPECULAR, EYE, &view);
        let with_specular = light.intensity_at(point, normal, 50.0, EYE, &view);
        assert_relative_eq!(diffuse_only, 1.0, epsilon = 1e-6);
        assert_relative_eq!(with_specular, 2.0, epsilon = 1e-5);
    }

    #[test]
    fn directional_specular_uses_view_direction() {
        // In camera space the light points straight back at the eye, so its
        // reflection off a surface facing the camera hits the eye head-on.
        let view = Quat::from_axis_angle(Vec3::UP, std::f32::consts::FRAC_PI_2)
            .conjugate()
            .to_matrix();
        let light = Light::directional(0.5, Vec3::new(-1.0, 0.0, 0.0));
        let point = Vec3::new(0.0, 0.0, 5.0);
        let normal = Vec3::new(0.0, 0.0, -1.0);

        let diffuse_only = light.intensity_at(point, normal, NO_SPECULAR, EYE, &view);
        let with_specular = light.intensity_at(point, normal, 10.0, EYE, &view);
        assert_relative_eq!(diffuse_only, 0.5, epsilon = 1e-5);
        assert_relative_eq!(with_specular, 1.0, epsilon = 1e-4);

        // Without the view rotation the light grazes the surface and
        // reflects away from the eye.
        let unrotated = light.intensity_at(point, normal, 10.0, EYE, &Mat4::identity());
        assert_relative_eq!(unrotated, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn point_light_weakens_as_surface_turns_away() {
        let light = Light::point(1.0, Vec3::new(0.0, 10.0, 5.0));
        let point = Vec3::new(0.0, 0.0, 5.0);
        let view = Mat4::identity();

        let mut previous = f32::INFINITY;
        for step in 0..=8 {
            let angle = step as f32 * std::f32::consts::FRAC_PI_2 / 8.0;
            let normal = Quat::from_axis_angle(Vec3::RIGHT, angle).rotate(Vec3::UP);
            let i = light.intensity_at(point, normal, NO_SPECULAR, EYE, &view);
            assert!(i < previous || (i == 0.0 && previous == 0.0));
            previous = i;
        }
        assert!(previous.abs() < 1e-5);
    }

    #[test]
    fn point_light_position_follows_view() {
        let light = Light::point(1.0, Vec3::new(0.0, 0.0, 0.0));
        // Camera 10 units along -Z in world space: the world origin is at
        // camera-space z = +10.
        let view = Mat4::translation(0.0, 0.0, 10.0);
        let point = Vec3::new(0.0, 0.0, 5.0);
        let normal = Vec3::new(0.0, 0.0, 1.0);
        let i = light.intensity_at(point, normal, NO_SPECULAR, EYE, &view);
        assert_relative_eq!(i, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn contributions_sum_unclamped() {
        let lights = [Light::ambient(0.6), Light::directional(0.7, Vec3::UP)];
        let i = total_intensity(
            &lights,
            Vec3::new(0.0, 0.0, 3.0),
            Vec3::UP,
            NO_SPECULAR,
            EYE,
            &Mat4::identity(),
        );
        assert_relative_eq!(i, 1.3, epsilon = 1e-6);
    }

    #[test]
    fn set_position_moves_point_lights_only() {
        let mut point = Light::point(1.0, Vec3::ZERO);
        point.set_position(Vec3::ONE);
        assert_eq!(point, Light::point(1.0, Vec3::ONE));

        let mut ambient = Light::ambient(0.2);
        ambient.set_position(Vec3::ONE);
        assert_eq!(ambient, Light::ambient(0.2));
    }
}
