//! View-frustum clipping in camera space.
//!
//! Clipping runs after the model-to-camera transform and before the
//! perspective divide, so nothing that reaches projection can sit behind the
//! viewport plane.
//!
//! - [`frustum`]: the five frustum planes and the per-instance driver with the
//!   bounding-sphere fast path.
//! - [`clip_set`]: the index-stable working set and the per-triangle
//!   classify/split step.

pub mod clip_set;
pub mod frustum;

pub use clip_set::{ClipSet, TriangleClip};
pub use frustum::{SphereTest, ViewFrustum};
