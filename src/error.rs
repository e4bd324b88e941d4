//! Error types for model loading, triangulation and clipping.

use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// A polygon ring with fewer than three distinct vertices.
    InvalidPolygon { distinct_vertices: usize },
    /// Ear clipping could not make progress (self-intersecting, collinear or
    /// otherwise degenerate ring).
    DegeneratePolygon(String),
    /// A triangle whose vertices could not be classified against a clip plane.
    ClipAmbiguous { triangle: [usize; 3], distances: [f32; 3] },
    /// The OBJ source produced no renderable triangles.
    EmptyModel,
    Obj(tobj::LoadError),
    Image(image::ImageError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidPolygon { distinct_vertices } => write!(
                f,
                "polygon must have at least three distinct vertices, got {}",
                distinct_vertices
            ),
            Error::DegeneratePolygon(msg) => write!(f, "degenerate polygon: {}", msg),
            Error::ClipAmbiguous {
                triangle,
                distances,
            } => write!(
                f,
                "cannot classify triangle {:?} against clip plane (distances {:?})",
                triangle, distances
            ),
            Error::EmptyModel => write!(f, "model contains no triangles"),
            Error::Obj(e) => write!(f, "OBJ error: {}", e),
            Error::Image(e) => write!(f, "Image error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Obj(e) => Some(e),
            Error::Image(e) => Some(e),
            _ => None,
        }
    }
}

impl From<tobj::LoadError> for Error {
    fn from(e: tobj::LoadError) -> Self {
        Error::Obj(e)
    }
}

impl From<image::ImageError> for Error {
    fn from(e: image::ImageError) -> Self {
        Error::Image(e)
    }
}
