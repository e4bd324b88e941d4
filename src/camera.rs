//! Quaternion camera.
//!
//! # Coordinate System
//!
//! Uses a **left-handed** coordinate system:
//! - X: positive right
//! - Y: positive up
//! - Z: positive forward (into screen)
//!
//! In camera space the eye sits at the origin looking down +Z, which is
//! where the viewport and frustum are defined.
//!
//! # Orientation
//!
//! Stored as a unit quaternion. Yaw turns about the world Y axis so the
//! horizon stays level; pitch and roll turn about the camera's own axes.
//!
//! - **Yaw**: positive = look right
//! - **Pitch**: positive = look down
//! - **Roll**: positive = tilt right

use crate::math::{Mat4, Quat, Vec3};

/// Camera with a world position and orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    position: Vec3,
    orientation: Quat,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

impl Camera {
    /// Creates a camera at `position` looking along +Z.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            orientation: Quat::IDENTITY,
        }
    }

    pub fn with_orientation(position: Vec3, orientation: Quat) -> Self {
        Self {
            position,
            orientation: orientation.normalize(),
        }
    }

    /// Creates a camera at `position` looking toward `target`, with no roll.
    pub fn looking_at(position: Vec3, target: Vec3) -> Self {
        let mut camera = Self::new(position);
        camera.look_at(target);
        camera
    }

    // =========================================================================
    // Orientation
    // =========================================================================

    /// Turns about the world up axis.
    pub fn rotate_yaw(&mut self, angle: f32) {
        self.orientation = (Quat::from_axis_angle(Vec3::UP, angle) * self.orientation).normalize();
    }

    /// Tilts about the camera's right axis.
    pub fn rotate_pitch(&mut self, angle: f32) {
        self.orientation = (self.orientation * Quat::from_axis_angle(Vec3::RIGHT, angle)).normalize();
    }

    /// Rolls about the camera's forward axis.
    pub fn rotate_roll(&mut self, angle: f32) {
        self.orientation =
            (self.orientation * Quat::from_axis_angle(Vec3::FORWARD, -angle)).normalize();
    }

    /// Points the camera at a world position, clearing any roll.
    ///
    /// Does nothing if `target` is the camera position.
    pub fn look_at(&mut self, target: Vec3) {
        let direction = target - self.position;
        if direction.magnitude() <= f32::EPSILON {
            return;
        }

        let horizontal_len = (direction.x * direction.x + direction.z * direction.z).sqrt();
        let yaw = direction.x.atan2(direction.z);
        let pitch = -direction.y.atan2(horizontal_len);

        self.orientation = Quat::from_axis_angle(Vec3::UP, yaw)
            * Quat::from_axis_angle(Vec3::RIGHT, pitch);
    }

    pub fn set_orientation(&mut self, orientation: Quat) {
        self.orientation = orientation.normalize();
    }

    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    // =========================================================================
    // Movement
    // =========================================================================

    /// Moves along the view direction.
    pub fn move_forward(&mut self, distance: f32) {
        self.position = self.position + self.forward() * distance;
    }

    /// Strafes along the camera's right axis.
    pub fn move_right(&mut self, distance: f32) {
        self.position = self.position + self.right() * distance;
    }

    /// Moves along world +Y.
    pub fn move_up(&mut self, distance: f32) {
        self.position.y += distance;
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    // =========================================================================
    // Direction vectors
    // =========================================================================

    pub fn forward(&self) -> Vec3 {
        self.orientation.rotate(Vec3::FORWARD)
    }

    pub fn right(&self) -> Vec3 {
        self.orientation.rotate(Vec3::RIGHT)
    }

    pub fn up(&self) -> Vec3 {
        self.orientation.rotate(Vec3::UP)
    }

    // =========================================================================
    // Matrix Generation
    // =========================================================================

    /// World-to-camera matrix.
    ///
    /// The camera's world transform is `T(P) * R`, so the view matrix is
    /// `R^-1 * T(-P)`; the inverse rotation is the conjugate quaternion.
    pub fn view_matrix(&self) -> Mat4 {
        let p = self.position;
        self.orientation.conjugate().to_matrix() * Mat4::translation(-p.x, -p.y, -p.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn camera_starts_looking_forward() {
        let camera = Camera::new(Vec3::ZERO);
        assert_relative_eq!(camera.forward().z, 1.0, epsilon = 1e-5);
        assert_relative_eq!(camera.forward().x, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn yaw_rotates_horizontally() {
        let mut camera = Camera::new(Vec3::ZERO);
        camera.rotate_yaw(FRAC_PI_2);

        assert_relative_eq!(camera.forward().x, 1.0, epsilon = 1e-5);
        assert_relative_eq!(camera.forward().z, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn positive_pitch_looks_down() {
        let mut camera = Camera::new(Vec3::ZERO);
        camera.rotate_pitch(0.3);
        assert!(camera.forward().y < 0.0);
        assert_relative_eq!(camera.forward().magnitude(), 1.0, epsilon = 1e-5);
    }

    #[test]
    fn roll_tilts_up_to_the_right() {
        let mut camera = Camera::new(Vec3::ZERO);
        camera.rotate_roll(FRAC_PI_2);

        let up = camera.up();
        assert_relative_eq!(up.x, 1.0, epsilon = 1e-5);
        assert_relative_eq!(up.y, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn move_forward_changes_position() {
        let mut camera = Camera::new(Vec3::ZERO);
        camera.move_forward(5.0);
        assert_relative_eq!(camera.position().z, 5.0, epsilon = 1e-5);
    }

    #[test]
    fn view_matrix_puts_target_straight_ahead() {
        let camera = Camera::looking_at(Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, -2.0, 3.0));
        let target = camera.view_matrix() * Vec3::new(4.0, -2.0, 3.0);

        assert_relative_eq!(target.x, 0.0, epsilon = 1e-4);
        assert_relative_eq!(target.y, 0.0, epsilon = 1e-4);
        assert_relative_eq!(target.z, 5.0, epsilon = 1e-4);
    }

    #[test]
    fn view_matrix_moves_camera_to_origin() {
        let mut camera = Camera::new(Vec3::new(-3.0, 7.0, 2.0));
        camera.rotate_yaw(0.4);
        camera.rotate_pitch(-0.2);

        let eye = camera.view_matrix() * camera.position();
        assert_relative_eq!(eye.magnitude(), 0.0, epsilon = 1e-5);
    }
}
