//! Shared mesh data: vertex positions, triangle indices and a bounding radius.
//!
//! A [`Model`] is immutable once built and is shared between any number of
//! [`Instance`](crate::instance::Instance)s through an `Arc`.

use std::io::BufRead;
use std::path::Path;

use log::info;

use crate::error::{Error, Result};
use crate::math::Vec4;
use crate::triangulate::triangulate_face;

/// Vertices and index triangles in model space.
///
/// Triangles are counter-clockwise when seen from outside, so
/// [`compute_normal`](crate::geometry::compute_normal) points outwards.
/// `radius` bounds every vertex from the model origin; the frustum's sphere
/// test relies on it.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    vertices: Vec<Vec4>,
    triangles: Vec<[usize; 3]>,
    radius: f32,
}

impl Model {
    /// Creates a model with an explicit bounding radius.
    pub fn new(vertices: Vec<Vec4>, triangles: Vec<[usize; 3]>, radius: f32) -> Self {
        Self {
            vertices,
            triangles,
            radius,
        }
    }

    /// Creates a model whose radius is the farthest vertex from the origin.
    pub fn from_mesh(vertices: Vec<Vec4>, triangles: Vec<[usize; 3]>) -> Self {
        let radius = vertices
            .iter()
            .map(|v| v.to_vec3().magnitude())
            .fold(0.0, f32::max);
        Self::new(vertices, triangles, radius)
    }

    /// The 2x2x2 cube centered on the origin, two triangles per face.
    pub fn cube() -> Self {
        let vertices = vec![
            Vec4::point(1.0, 1.0, 1.0),
            Vec4::point(-1.0, 1.0, 1.0),
            Vec4::point(-1.0, -1.0, 1.0),
            Vec4::point(1.0, -1.0, 1.0),
            Vec4::point(1.0, 1.0, -1.0),
            Vec4::point(-1.0, 1.0, -1.0),
            Vec4::point(-1.0, -1.0, -1.0),
            Vec4::point(1.0, -1.0, -1.0),
        ];
        let triangles = vec![
            [0, 1, 2], // +z
            [0, 2, 3],
            [4, 0, 3], // +x
            [4, 3, 7],
            [5, 4, 7], // -z
            [5, 7, 6],
            [1, 5, 6], // -x
            [1, 6, 2],
            [4, 5, 1], // +y
            [4, 1, 0],
            [2, 6, 7], // -y
            [2, 7, 3],
        ];
        // Corners sit at distance sqrt(3).
        Self::new(vertices, triangles, 3.0_f32.sqrt())
    }

    /// Loads every object in an OBJ file into one model.
    ///
    /// Faces with more than three vertices are triangulated by ear clipping,
    /// so concave faces are handled. Materials are ignored.
    pub fn from_obj<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let (models, _materials) = tobj::load_obj(path, &obj_load_options())?;
        let model = Self::from_tobj(&models)?;
        info!(
            "loaded {}: {} vertices, {} triangles",
            path.display(),
            model.vertices.len(),
            model.triangles.len()
        );
        Ok(model)
    }

    /// Like [`Model::from_obj`], reading OBJ text from `reader`. `mtllib`
    /// references are not followed.
    pub fn from_obj_reader<R: BufRead>(reader: &mut R) -> Result<Self> {
        let (models, _materials) = tobj::load_obj_buf(reader, &obj_load_options(), |_| {
            Err(tobj::LoadError::OpenFileFailed)
        })?;
        let model = Self::from_tobj(&models)?;
        info!(
            "loaded OBJ stream: {} vertices, {} triangles",
            model.vertices.len(),
            model.triangles.len()
        );
        Ok(model)
    }

    fn from_tobj(models: &[tobj::Model]) -> Result<Self> {
        let mut vertices = Vec::new();
        let mut triangles = Vec::new();

        for model in models {
            let mesh = &model.mesh;
            let base = vertices.len();
            vertices.extend(
                mesh.positions
                    .chunks_exact(3)
                    .map(|p| Vec4::point(p[0], p[1], p[2])),
            );
            let indices: Vec<usize> = mesh.indices.iter().map(|&i| base + i as usize).collect();

            if mesh.face_arities.is_empty() {
                triangles.extend(indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]]));
                continue;
            }

            let mut start = 0;
            for &arity in &mesh.face_arities {
                let ring = &indices[start..start + arity as usize];
                start += arity as usize;
                match *ring {
                    [a, b, c] => triangles.push([a, b, c]),
                    _ => triangles.extend(triangulate_face(&vertices, ring)?),
                }
            }
        }

        if triangles.is_empty() {
            return Err(Error::EmptyModel);
        }
        Ok(Self::from_mesh(vertices, triangles))
    }

    pub fn vertices(&self) -> &[Vec4] {
        &self.vertices
    }

    pub fn triangles(&self) -> &[[usize; 3]] {
        &self.triangles
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

fn obj_load_options() -> tobj::LoadOptions {
    tobj::LoadOptions {
        single_index: true,
        triangulate: false,
        ignore_points: true,
        ignore_lines: true,
        ..Default::default()
    }
}
