//! The clip working set and single-plane triangle clipping.
//!
//! # Index stability
//!
//! Triangles refer to vertices by index. Clipping only ever *appends*
//! intersection vertices to [`ClipSet::vertices`], so every index handed out
//! stays valid; the triangle list is rebuilt wholesale on each plane pass.
//!
//! # Per-triangle cases
//!
//! With `d0, d1, d2` the signed distances of the corners to the plane:
//!
//! ```text
//!   all d <= 0        dropped
//!   all d >= 0        kept as is
//!   two inside        a ---x----- b        outside corner replaced by the two
//!                        \  \  .  |        edge intersections; the remaining
//!                          x. .  |         quad becomes two triangles
//!                           \  . |
//!                             c
//!   one inside        only the inside corner survives, with the two edge
//!                     intersections as its new neighbours
//! ```
//!
//! Splits keep the original winding so face normals still point the same
//! way after clipping.

use crate::error::{Error, Result};
use crate::geometry::{intersect, signed_distance, Plane};
use crate::math::Vec3;

/// Camera-space vertices plus the triangles that index them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClipSet {
    pub vertices: Vec<Vec3>,
    pub triangles: Vec<[usize; 3]>,
    /// Triangles dropped because they could not be classified.
    pub dropped: usize,
}

/// Result of clipping one triangle against one plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TriangleClip {
    Outside,
    Inside,
    One([usize; 3]),
    Two([[usize; 3]; 2]),
}

impl ClipSet {
    pub fn new(vertices: Vec<Vec3>, triangles: Vec<[usize; 3]>) -> Self {
        Self {
            vertices,
            triangles,
            dropped: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Clips one triangle against `plane`, appending any intersection
    /// vertices it needs.
    ///
    /// New vertices go to the end of the vertex list, so in a split they sit
    /// at `len - 2` and `len - 1` right after the call.
    pub fn clip_triangle(&mut self, triangle: [usize; 3], plane: &Plane) -> Result<TriangleClip> {
        let distances = triangle.map(|i| signed_distance(self.vertices[i], plane));

        if distances.iter().all(|&d| d <= 0.0) {
            return Ok(TriangleClip::Outside);
        }
        if distances.iter().all(|&d| d >= 0.0) {
            return Ok(TriangleClip::Inside);
        }

        let inside = distances.iter().filter(|&&d| d >= 0.0).count();
        let outside = distances.iter().filter(|&&d| d < 0.0).count();
        if inside + outside != 3 {
            // Only reachable with NaN distances.
            return Err(Error::ClipAmbiguous {
                triangle,
                distances,
            });
        }

        match inside {
            2 => {
                let k = distances.iter().position(|&d| d < 0.0).unwrap_or(0);
                let [a, b, c] = rotate(triangle, k);
                let ab = self.push_intersection(a, b, plane);
                let ca = self.push_intersection(a, c, plane);
                Ok(TriangleClip::Two([[ab, b, c], [ab, c, ca]]))
            }
            1 => {
                let k = distances.iter().position(|&d| d >= 0.0).unwrap_or(0);
                let [a, b, c] = rotate(triangle, k);
                let ab = self.push_intersection(a, b, plane);
                let ac = self.push_intersection(a, c, plane);
                Ok(TriangleClip::One([a, ab, ac]))
            }
            _ => Err(Error::ClipAmbiguous {
                triangle,
                distances,
            }),
        }
    }

    /// Runs one plane pass over every triangle, replacing the triangle list.
    ///
    /// Triangles that cannot be classified are logged and dropped; the rest
    /// of the set is still clipped.
    pub fn clip_against_plane(&mut self, plane: &Plane) {
        let triangles = std::mem::take(&mut self.triangles);
        let mut kept = Vec::with_capacity(triangles.len());

        for triangle in triangles {
            match self.clip_triangle(triangle, plane) {
                Ok(TriangleClip::Outside) => {}
                Ok(TriangleClip::Inside) => kept.push(triangle),
                Ok(TriangleClip::One(t)) => kept.push(t),
                Ok(TriangleClip::Two([t0, t1])) => {
                    kept.push(t0);
                    kept.push(t1);
                }
                Err(e) => {
                    log::warn!("dropping triangle: {}", e);
                    self.dropped += 1;
                }
            }
        }

        self.triangles = kept;
    }

    fn push_intersection(&mut self, from: usize, to: usize, plane: &Plane) -> usize {
        let point = intersect(self.vertices[from], self.vertices[to], plane);
        self.vertices.push(point);
        self.vertices.len() - 1
    }
}

/// Rotates the corner list so `triangle[k]` comes first, keeping cyclic
/// order (and therefore winding).
fn rotate(triangle: [usize; 3], k: usize) -> [usize; 3] {
    [triangle[k], triangle[(k + 1) % 3], triangle[(k + 2) % 3]]
}
