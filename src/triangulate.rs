//! Ear-clipping triangulation of simple polygons.
//!
//! OBJ faces can have any number of vertices; the pipeline only draws
//! triangles. [`triangulate`] turns one polygon ring into an index list
//! without fanning, so concave faces come out right.
//!
//! # Algorithm
//!
//! 1. Drop consecutive repeated indices; fewer than three distinct vertices
//!    is an [`Error::InvalidPolygon`].
//! 2. The sign of the ring's [`signed_area`] fixes which turn direction
//!    counts as convex.
//! 3. While more than three vertices remain, walk the ring in order and clip
//!    the first *ear*: a convex vertex whose triangle with its two
//!    neighbours contains no other remaining vertex.
//! 4. The last three vertices form the final triangle.
//!
//! Each ear search is O(n²), so the whole pass is O(n³); fine for face-sized
//! polygons.

use crate::error::{Error, Result};
use crate::geometry::{point_in_triangle, signed_area};
use crate::math::{Vec2, Vec3, Vec4};

/// Upper bound on ear-clipping passes.
const MAX_ITERATIONS: usize = 2048;

/// Triangulates the polygon `ring` (indices into `positions`) using only the
/// X and Y components of each vertex.
///
/// Returned triangles index into `positions` and keep the ring's winding.
pub fn triangulate(positions: &[Vec4], ring: &[usize]) -> Result<Vec<[usize; 3]>> {
    let ring = dedup_ring(ring)?;
    let points: Vec<Vec2> = ring
        .iter()
        .map(|&i| Vec2::new(positions[i].x, positions[i].y))
        .collect();
    ear_clip(&ring, &points)
}

/// Like [`triangulate`], but projects the polygon onto the coordinate plane
/// it is most parallel to first.
///
/// Use this for faces of a 3D mesh, where an X/Y projection of (say) a face
/// lying in the Y/Z plane would collapse to a line.
pub fn triangulate_face(positions: &[Vec4], ring: &[usize]) -> Result<Vec<[usize; 3]>> {
    let ring = dedup_ring(ring)?;
    let normal = newell_normal(positions, &ring);
    let (ax, ay, az) = (normal.x.abs(), normal.y.abs(), normal.z.abs());

    let project: fn(Vec4) -> Vec2 = if az >= ax && az >= ay {
        |p| Vec2::new(p.x, p.y)
    } else if ax >= ay {
        |p| Vec2::new(p.y, p.z)
    } else {
        |p| Vec2::new(p.z, p.x)
    };

    let points: Vec<Vec2> = ring.iter().map(|&i| project(positions[i])).collect();
    ear_clip(&ring, &points)
}

/// Removes consecutive duplicate indices, including a closing index equal to
/// the first.
fn dedup_ring(ring: &[usize]) -> Result<Vec<usize>> {
    let mut cleaned: Vec<usize> = Vec::with_capacity(ring.len());
    for &index in ring {
        if cleaned.last() != Some(&index) {
            cleaned.push(index);
        }
    }
    while cleaned.len() > 1 && cleaned.first() == cleaned.last() {
        cleaned.pop();
    }

    if cleaned.len() < 3 {
        return Err(Error::InvalidPolygon {
            distinct_vertices: cleaned.len(),
        });
    }
    Ok(cleaned)
}

/// Area-weighted polygon normal, robust for slightly non-planar rings.
fn newell_normal(positions: &[Vec4], ring: &[usize]) -> Vec3 {
    let n = ring.len();
    (0..n).fold(Vec3::ZERO, |acc, i| {
        let p = positions[ring[i]];
        let q = positions[ring[(i + 1) % n]];
        acc + Vec3::new(
            (p.y - q.y) * (p.z + q.z),
            (p.z - q.z) * (p.x + q.x),
            (p.x - q.x) * (p.y + q.y),
        )
    })
}

/// Clips ears off the ring. `points[k]` is the 2D position of `ring[k]`.
fn ear_clip(ring: &[usize], points: &[Vec2]) -> Result<Vec<[usize; 3]>> {
    let ccw = signed_area(points) > 0.0;

    // Positions into `ring`/`points` that are still part of the polygon.
    let mut remaining: Vec<usize> = (0..ring.len()).collect();
    let mut triangles = Vec::with_capacity(ring.len() - 2);

    let mut iterations = 0;
    while remaining.len() > 3 {
        if iterations >= MAX_ITERATIONS {
            return Err(Error::DegeneratePolygon(format!(
                "no triangulation after {} iterations",
                MAX_ITERATIONS
            )));
        }
        iterations += 1;

        let ear = find_ear(&remaining, points, ccw).ok_or_else(|| {
            Error::DegeneratePolygon(format!(
                "no ear among {} remaining vertices; ring is self-intersecting or collinear",
                remaining.len()
            ))
        })?;

        let n = remaining.len();
        let a = remaining[(ear + n - 1) % n];
        let b = remaining[ear];
        let c = remaining[(ear + 1) % n];
        triangles.push([ring[a], ring[b], ring[c]]);
        remaining.remove(ear);
    }

    triangles.push([ring[remaining[0]], ring[remaining[1]], ring[remaining[2]]]);
    Ok(triangles)
}

/// Position in `remaining` of the first ear, scanning in ring order.
fn find_ear(remaining: &[usize], points: &[Vec2], ccw: bool) -> Option<usize> {
    let n = remaining.len();
    (0..n).find(|&i| {
        let ia = remaining[(i + n - 1) % n];
        let ib = remaining[i];
        let ic = remaining[(i + 1) % n];
        let (a, b, c) = (points[ia], points[ib], points[ic]);

        if !is_convex(a, b, c, ccw) {
            return false;
        }

        !remaining
            .iter()
            .filter(|&&ip| ip != ia && ip != ib && ip != ic)
            .any(|&ip| point_in_triangle(a, b, c, points[ip]))
    })
}

fn is_convex(a: Vec2, b: Vec2, c: Vec2, ccw: bool) -> bool {
    let cross = (b - a).cross(c - b);
    if ccw {
        cross > 0.0
    } else {
        cross < 0.0
    }
}
