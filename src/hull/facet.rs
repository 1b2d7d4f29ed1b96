use glam::DVec3;

/// One face of a convex hull.
///
/// `vertices` index into [`ConvexHull::points`]. Their order is canonical
/// (ascending), not oriented: it says nothing about which side is outside.
/// Orientation comes from `normal` alone.
#[derive(Clone, Debug, PartialEq)]
pub struct Facet {
    pub vertices: Vec<usize>,
    /// Unit outward normal of the supporting plane.
    pub normal: DVec3,
    /// Plane offset: `normal.dot(p) == offset` for points on the facet.
    pub offset: f64,
}

impl Facet {
    /// Signed distance of `p` from the facet plane, positive outside.
    pub fn distance(&self, p: DVec3) -> f64 {
        self.normal.dot(p) - self.offset
    }
}

#[derive(Clone, Debug, Default)]
pub struct ConvexHull {
    pub points: Vec<DVec3>,
    pub facets: Vec<Facet>,
}

impl ConvexHull {
    pub fn facet_count(&self) -> usize {
        self.facets.len()
    }

    /// Number of distinct points referenced by at least one facet.
    pub fn vertex_count(&self) -> usize {
        let mut used = vec![false; self.points.len()];
        for facet in &self.facets {
            for &v in &facet.vertices {
                if let Some(slot) = used.get_mut(v) {
                    *slot = true;
                }
            }
        }
        used.into_iter().filter(|&u| u).count()
    }

    /// Coordinates of a facet's vertex, or `None` for a dangling index.
    pub fn point(&self, index: usize) -> Option<DVec3> {
        self.points.get(index).copied()
    }
}
