//! Plane and triangle primitives shared by the clipper, triangulator and
//! rasterizer.

use crate::math::{Vec2, Vec3};

/// A plane in camera space: unit normal plus signed offset from the origin.
///
/// Points with a positive [`signed_distance`] lie on the normal's side, which
/// the frustum treats as inside.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    pub normal: Vec3,
    pub offset: f32,
}

impl Plane {
    /// Creates a plane, normalizing `normal`.
    pub fn new(normal: Vec3, offset: f32) -> Self {
        Self {
            normal: normal.normalize(),
            offset,
        }
    }
}

/// `dot(point, normal) + offset`. Positive inside, zero on the plane.
#[inline]
pub fn signed_distance(point: Vec3, plane: &Plane) -> f32 {
    point.dot(plane.normal) + plane.offset
}

/// Point where segment `a -> b` crosses `plane`.
///
/// Only meaningful when `a` and `b` lie on opposite sides; a segment parallel
/// to the plane divides by (nearly) zero.
pub fn intersect(a: Vec3, b: Vec3, plane: &Plane) -> Vec3 {
    let t = (-plane.offset - plane.normal.dot(a)) / plane.normal.dot(b - a);
    a.lerp(b, t)
}

/// Unit normal of triangle `(v1, v2, v3)`: `normalize((v2 - v1) x (v3 - v1))`.
///
/// Counter-clockwise vertices (seen from the side the normal points to) give
/// the outward normal. Collinear vertices produce NaN components.
pub fn compute_normal(v1: Vec3, v2: Vec3, v3: Vec3) -> Vec3 {
    (v2 - v1).cross(v3 - v1).normalize()
}

/// Barycentric containment test with a small tolerance, so points on an edge
/// count as inside. Degenerate triangles contain nothing.
pub fn point_in_triangle(a: Vec2, b: Vec2, c: Vec2, p: Vec2) -> bool {
    const DENOM_EPSILON: f32 = 1e-8;
    const WEIGHT_EPSILON: f32 = 1e-6;

    let v0 = c - a;
    let v1 = b - a;
    let v2 = p - a;

    let d00 = v0.dot(v0);
    let d01 = v0.dot(v1);
    let d11 = v1.dot(v1);
    let d20 = v2.dot(v0);
    let d21 = v2.dot(v1);
    let denom = d00 * d11 - d01 * d01;
    if denom.abs() < DENOM_EPSILON {
        return false;
    }

    let v = (d11 * d20 - d01 * d21) / denom;
    let w = (d00 * d21 - d01 * d20) / denom;
    let u = 1.0 - v - w;

    u >= -WEIGHT_EPSILON && v >= -WEIGHT_EPSILON && w >= -WEIGHT_EPSILON
}

/// Shoelace area of a closed ring. Positive for counter-clockwise winding.
pub fn signed_area(ring: &[Vec2]) -> f32 {
    let n = ring.len();
    let twice: f32 = (0..n)
        .map(|i| ring[i].cross(ring[(i + 1) % n]))
        .sum();
    0.5 * twice
}
