//! Small linear-algebra toolkit used by the pipeline.
//!
//! Everything is `f32`. Matrices use the column-vector convention (see
//! [`mat4`]), so `view * model * v` applies `model` first.

pub mod mat4;
pub mod quat;
pub mod vec2;
pub mod vec3;
pub mod vec4;

pub use mat4::Mat4;
pub use quat::Quat;
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;
