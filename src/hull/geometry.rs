//! Turns hull facets into flat, render-ready vertex data.
//!
//! Triangles are wound clockwise as seen from outside the hull, matching a
//! pipeline with `FrontFace::Cw` and back-face culling.

use glam::DVec3;

use super::facet::ConvexHull;
use crate::config::RenderMode;

/// Magnification applied to hull coordinates before upload.
pub const HULL_SCALE: f32 = 5.0;

const FLOATS_PER_VERTEX: usize = 3;
const FLOATS_PER_TRIANGLE: usize = 9;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeometryError {
    #[error("facet {facet} has {vertices} vertices, only triangles can be rendered")]
    NonSimplicialFacet { facet: usize, vertices: usize },
    #[error("facet {facet} references vertex {vertex}, but the hull has {points} points")]
    VertexOutOfRange {
        facet: usize,
        vertex: usize,
        points: usize,
    },
    #[error("triangle buffer of {len} floats is not a whole number of triangles")]
    MalformedTriangleBuffer { len: usize },
}

/// Flat `x, y, z` vertex data plus the primitive type it was built for.
#[derive(Debug, Clone, PartialEq)]
pub struct VertexBuffer {
    data: Vec<f32>,
    mode: RenderMode,
}

impl VertexBuffer {
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    pub fn vertex_count(&self) -> u32 {
        (self.data.len() / FLOATS_PER_VERTEX) as u32
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Reorders a facet's first three vertices so that
/// `cross(p2 - p1, p2 - p0) · normal >= 0`.
pub fn orient_triangle(p: [DVec3; 3], normal: DVec3) -> [DVec3; 3] {
    let [p0, p1, p2] = p;
    let face_cross = (p2 - p1).cross(p2 - p0);

    if face_cross.dot(normal) < 0.0 {
        [p1, p0, p2]
    } else {
        p
    }
}

/// Emits every facet as one correctly wound, scaled triangle.
pub fn build_triangle_buffer(hull: &ConvexHull, scale: f32) -> Result<Vec<f32>, GeometryError> {
    let mut out = Vec::with_capacity(hull.facets.len() * FLOATS_PER_TRIANGLE);

    for (index, facet) in hull.facets.iter().enumerate() {
        let &[a, b, c] = facet.vertices.as_slice() else {
            return Err(GeometryError::NonSimplicialFacet {
                facet: index,
                vertices: facet.vertices.len(),
            });
        };

        let lookup = |vertex: usize| {
            hull.point(vertex).ok_or(GeometryError::VertexOutOfRange {
                facet: index,
                vertex,
                points: hull.points.len(),
            })
        };
        let triangle = [lookup(a)?, lookup(b)?, lookup(c)?];

        for p in orient_triangle(triangle, facet.normal) {
            let p = p.as_vec3() * scale;
            out.extend_from_slice(&p.to_array());
        }
    }

    Ok(out)
}

/// Expands each triangle `v0, v1, v2` into the segments
/// `v0-v1, v1-v2, v2-v0`.
///
/// Returns an empty buffer when `triangles` is not a whole number of
/// triangles. Edges shared by neighbouring triangles are emitted once per
/// triangle.
pub fn to_line_expansion(triangles: &[f32]) -> Vec<f32> {
    if triangles.len() % FLOATS_PER_TRIANGLE != 0 {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(triangles.len() * 2);
    for tri in triangles.chunks_exact(FLOATS_PER_TRIANGLE) {
        let v0 = &tri[0..3];
        let v1 = &tri[3..6];
        let v2 = &tri[6..9];
        for segment in [v0, v1, v1, v2, v2, v0] {
            out.extend_from_slice(segment);
        }
    }
    out
}

/// Builds the buffer the renderer uploads for `mode`.
pub fn build_vertex_buffer(hull: &ConvexHull, mode: RenderMode) -> Result<VertexBuffer, GeometryError> {
    let triangles = build_triangle_buffer(hull, HULL_SCALE)?;

    let data = match mode {
        RenderMode::Triangles => triangles,
        RenderMode::Lines => {
            let lines = to_line_expansion(&triangles);
            if lines.is_empty() && !triangles.is_empty() {
                return Err(GeometryError::MalformedTriangleBuffer {
                    len: triangles.len(),
                });
            }
            lines
        }
    };

    Ok(VertexBuffer { data, mode })
}
