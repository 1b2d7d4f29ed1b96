//! # QuickHull
//!
//! 3D convex hull of a point cloud.
//!
//! 1. Build a tetrahedron from extreme points.
//! 2. Give every remaining point to one face it lies outside of.
//! 3. Take the farthest outside point of any face, remove every face it can
//!    see and fan new faces from the horizon to that point.
//! 4. Repeat until no face has outside points.
//!
//! Output facets are always triangles. Coplanar regions come out
//! triangulated rather than merged.

use std::collections::HashSet;

use glam::DVec3;

use super::facet::{ConvexHull, Facet};

/// Relative tolerance, scaled by the largest coordinate magnitude.
const RELATIVE_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HullError {
    #[error("convex hull needs at least 4 distinct points, got {found}")]
    TooFewPoints { found: usize },
    #[error("all points are collinear")]
    Collinear,
    #[error("all points are coplanar")]
    Coplanar,
}

#[derive(Debug, Clone)]
struct HullFace {
    vertices: [usize; 3],
    normal: DVec3,
    offset: f64,
    outside: Vec<usize>,
}

impl HullFace {
    /// Builds the face `a, b, c` wound so its normal points away from
    /// `interior`.
    fn outward(a: usize, b: usize, c: usize, points: &[DVec3], interior: DVec3) -> Self {
        let (pa, pb, pc) = (points[a], points[b], points[c]);
        let mut normal = (pb - pa).cross(pc - pa).normalize_or_zero();
        let mut vertices = [a, b, c];

        if normal.dot(interior - pa) > 0.0 {
            normal = -normal;
            vertices = [a, c, b];
        }

        Self {
            vertices,
            normal,
            offset: normal.dot(pa),
            outside: Vec::new(),
        }
    }

    fn distance(&self, p: DVec3) -> f64 {
        self.normal.dot(p) - self.offset
    }

    fn edges(&self) -> [(usize, usize); 3] {
        let [a, b, c] = self.vertices;
        [(a, b), (b, c), (c, a)]
    }
}

/// Computes the convex hull of `points`.
///
/// Duplicate points (within tolerance) are collapsed first; the returned
/// hull's `points` are the de-duplicated cloud.
pub fn compute_hull(points: &[DVec3]) -> Result<ConvexHull, HullError> {
    if points.len() < 4 {
        return Err(HullError::TooFewPoints {
            found: points.len(),
        });
    }

    let magnitude = points
        .iter()
        .fold(0.0_f64, |m, p| m.max(p.abs().max_element()));
    let eps = RELATIVE_EPSILON * magnitude.max(1e-300);

    let points = remove_duplicates(points, eps);
    if points.len() < 4 {
        return Err(HullError::TooFewPoints {
            found: points.len(),
        });
    }

    let (mut faces, interior) = initial_simplex(&points, eps)?;
    expand(&mut faces, &points, interior, eps);

    let facets = faces
        .into_iter()
        .map(|face| {
            let mut vertices = face.vertices.to_vec();
            vertices.sort_unstable();
            Facet {
                vertices,
                normal: face.normal,
                offset: face.offset,
            }
        })
        .collect();

    Ok(ConvexHull { points, facets })
}

/// Sweeps the cloud sorted by `x`, so only points within `eps` along `x`
/// are compared.
fn remove_duplicates(points: &[DVec3], eps: f64) -> Vec<DVec3> {
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.x.total_cmp(&b.x));

    let mut unique: Vec<DVec3> = Vec::with_capacity(sorted.len());
    for p in sorted {
        let duplicate = unique
            .iter()
            .rev()
            .take_while(|u| p.x - u.x <= eps)
            .any(|u| u.distance(p) <= eps);
        if !duplicate {
            unique.push(p);
        }
    }
    unique
}

fn initial_simplex(points: &[DVec3], eps: f64) -> Result<(Vec<HullFace>, DVec3), HullError> {
    let mut extremes = [0usize; 6];
    for (i, p) in points.iter().enumerate() {
        for axis in 0..3 {
            if p[axis] < points[extremes[2 * axis]][axis] {
                extremes[2 * axis] = i;
            }
            if p[axis] > points[extremes[2 * axis + 1]][axis] {
                extremes[2 * axis + 1] = i;
            }
        }
    }

    let mut p0 = extremes[0];
    let mut p1 = extremes[1];
    let mut best = -1.0;
    for (i, &a) in extremes.iter().enumerate() {
        for &b in &extremes[i + 1..] {
            let d = points[a].distance_squared(points[b]);
            if d > best {
                best = d;
                (p0, p1) = (a, b);
            }
        }
    }

    let dir = (points[p1] - points[p0]).normalize_or_zero();
    let p2 = farthest(points, |p| {
        let v = p - points[p0];
        (v - dir * v.dot(dir)).length()
    })
    .filter(|&(_, d)| d > eps)
    .map(|(i, _)| i)
    .ok_or(HullError::Collinear)?;

    let plane = (points[p1] - points[p0])
        .cross(points[p2] - points[p0])
        .normalize_or_zero();
    let p3 = farthest(points, |p| plane.dot(p - points[p0]).abs())
        .filter(|&(_, d)| d > eps)
        .map(|(i, _)| i)
        .ok_or(HullError::Coplanar)?;

    let interior = (points[p0] + points[p1] + points[p2] + points[p3]) / 4.0;
    let mut faces = vec![
        HullFace::outward(p0, p1, p2, points, interior),
        HullFace::outward(p0, p2, p3, points, interior),
        HullFace::outward(p0, p3, p1, points, interior),
        HullFace::outward(p1, p3, p2, points, interior),
    ];

    let simplex = [p0, p1, p2, p3];
    let remaining: Vec<usize> = (0..points.len()).filter(|i| !simplex.contains(i)).collect();
    assign(&remaining, &mut faces, 0, points, eps);

    Ok((faces, interior))
}

fn farthest(points: &[DVec3], metric: impl Fn(DVec3) -> f64) -> Option<(usize, f64)> {
    points
        .iter()
        .enumerate()
        .map(|(i, &p)| (i, metric(p)))
        .max_by(|a, b| a.1.total_cmp(&b.1))
}

/// Hands each point to the first face (from `first` on, then any face) it
/// lies outside of. Points outside no face are inside the hull and dropped.
fn assign(indices: &[usize], faces: &mut [HullFace], first: usize, points: &[DVec3], eps: f64) {
    for &idx in indices {
        let p = points[idx];
        let target = (first..faces.len())
            .chain(0..first)
            .find(|&f| faces[f].distance(p) > eps);
        if let Some(f) = target {
            faces[f].outside.push(idx);
        }
    }
}

fn expand(faces: &mut Vec<HullFace>, points: &[DVec3], interior: DVec3, eps: f64) {
    while let Some(face_idx) = faces.iter().position(|f| !f.outside.is_empty()) {
        let face = &faces[face_idx];
        let Some(apex) = face
            .outside
            .iter()
            .copied()
            .max_by(|&a, &b| face.distance(points[a]).total_cmp(&face.distance(points[b])))
        else {
            break;
        };
        let apex_point = points[apex];

        let (visible, kept): (Vec<HullFace>, Vec<HullFace>) = faces
            .drain(..)
            .partition(|f| f.distance(apex_point) > eps);

        let directed: HashSet<(usize, usize)> =
            visible.iter().flat_map(|f| f.edges()).collect();

        let mut orphans = Vec::new();
        let mut horizon = Vec::new();
        for face in visible {
            for (a, b) in face.edges() {
                if !directed.contains(&(b, a)) {
                    horizon.push((a, b));
                }
            }
            orphans.extend(face.outside.into_iter().filter(|&i| i != apex));
        }

        *faces = kept;
        let first_new = faces.len();
        faces.extend(
            horizon
                .into_iter()
                .map(|(a, b)| HullFace::outward(a, b, apex, points, interior)),
        );

        assign(&orphans, faces, first_new, points, eps);
    }
}
