//! # Hull
//!
//! Convex hull computation and its conversion into GPU vertex data.

pub mod facet;
pub mod geometry;
pub mod quickhull;

#[cfg(test)]
mod tests;

pub use facet::{ConvexHull, Facet};
pub use geometry::{VertexBuffer, build_vertex_buffer};
pub use quickhull::compute_hull;
