//! Geometry builder tests against hand-made and computed hulls.

use super::geometry::*;
use super::*;
use crate::config::RenderMode;
use approx::assert_abs_diff_eq;
use glam::{DVec3, Vec3};

fn single_facet_hull(normal: DVec3) -> ConvexHull {
    ConvexHull {
        points: vec![
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(0.0, 1.0, 0.0),
        ],
        facets: vec![Facet {
            vertices: vec![0, 1, 2],
            normal,
            offset: 0.0,
        }],
    }
}

fn triangles(buffer: &[f32]) -> Vec<[Vec3; 3]> {
    buffer
        .chunks_exact(9)
        .map(|t| {
            [
                Vec3::from_slice(&t[0..3]),
                Vec3::from_slice(&t[3..6]),
                Vec3::from_slice(&t[6..9]),
            ]
        })
        .collect()
}

#[test]
fn opposite_winding_swaps_first_two_vertices() {
    let hull = single_facet_hull(DVec3::Z);
    let buffer = build_triangle_buffer(&hull, HULL_SCALE).unwrap();

    assert_eq!(
        buffer,
        vec![5.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 5.0, 0.0]
    );
}

#[test]
fn agreeing_winding_is_kept() {
    let hull = single_facet_hull(DVec3::NEG_Z);
    let buffer = build_triangle_buffer(&hull, 2.0).unwrap();

    assert_eq!(
        buffer,
        vec![0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 2.0, 0.0]
    );
}

#[test]
fn orient_triangle_is_idempotent() {
    let tri = [DVec3::ZERO, DVec3::X, DVec3::Y];
    let once = orient_triangle(tri, DVec3::Z);
    assert_eq!(once, [DVec3::X, DVec3::ZERO, DVec3::Y]);
    assert_eq!(orient_triangle(once, DVec3::Z), once);
}

#[test]
fn computed_hull_winding_agrees_with_normals() {
    let points = crate::points::generate("200 t5").unwrap();
    let hull = compute_hull(&points).unwrap();
    let buffer = build_triangle_buffer(&hull, HULL_SCALE).unwrap();

    assert_eq!(buffer.len(), hull.facet_count() * 9);

    for ([p0, p1, p2], facet) in triangles(&buffer).into_iter().zip(&hull.facets) {
        let (p0, p1, p2) = (p0.as_dvec3(), p1.as_dvec3(), p2.as_dvec3());
        let check = (p2 - p1).cross(p2 - p0).dot(facet.normal);
        // slack for the f32 round trip
        assert!(
            check >= -1e-5,
            "facet {:?} still wound against its normal",
            facet.vertices
        );
    }
}

#[test]
fn triangles_are_clockwise_seen_from_outside() {
    let points = crate::points::generate("c 20 t1").unwrap();
    let hull = compute_hull(&points).unwrap();
    let buffer = build_triangle_buffer(&hull, 1.0).unwrap();

    for [p0, p1, p2] in triangles(&buffer) {
        // a counter-clockwise normal of a clockwise triangle points inward,
        // towards the origin at the cloud's centre
        let ccw_normal = (p1 - p0).cross(p2 - p0);
        assert!(ccw_normal.dot(-p0) >= -1e-6);
    }
}

#[test]
fn coordinates_are_scaled_copies() {
    let points = crate::points::generate("c").unwrap();
    let hull = compute_hull(&points).unwrap();
    let buffer = build_triangle_buffer(&hull, HULL_SCALE).unwrap();

    for v in buffer.chunks_exact(3) {
        for &c in v {
            assert_abs_diff_eq!(c.abs(), 0.5 * HULL_SCALE, epsilon = 1e-6);
        }
    }
}

#[test]
fn line_expansion_emits_three_edges_per_triangle() {
    let tri = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
    let lines = to_line_expansion(&tri);

    assert_eq!(
        lines,
        vec![
            1.0, 2.0, 3.0, 4.0, 5.0, 6.0, // v0 - v1
            4.0, 5.0, 6.0, 7.0, 8.0, 9.0, // v1 - v2
            7.0, 8.0, 9.0, 1.0, 2.0, 3.0, // v2 - v0
        ]
    );
}

#[test]
fn line_expansion_doubles_length() {
    for n in [0usize, 1, 2, 17] {
        let input: Vec<f32> = (0..9 * n).map(|i| i as f32).collect();
        assert_eq!(to_line_expansion(&input).len(), 18 * n);
    }
}

#[test]
fn line_expansion_rejects_partial_triangles() {
    for len in [1usize, 3, 6, 8, 10, 12] {
        let input = vec![0.0; len];
        assert!(to_line_expansion(&input).is_empty(), "len {len}");
    }
}

#[test]
fn line_expansion_keeps_shared_edges_twice() {
    let points = crate::points::generate("d").unwrap();
    let hull = compute_hull(&points).unwrap();
    let tris = build_triangle_buffer(&hull, 1.0).unwrap();
    let lines = to_line_expansion(&tris);

    // octahedron: 8 faces, 12 unique edges, 24 emitted segments
    assert_eq!(hull.facet_count(), 8);
    assert_eq!(lines.len() / 6, 24);
}

#[test]
fn vertex_buffer_matches_mode() {
    let points = crate::points::generate("50 t2").unwrap();
    let hull = compute_hull(&points).unwrap();

    let solid = build_vertex_buffer(&hull, RenderMode::Triangles).unwrap();
    let wire = build_vertex_buffer(&hull, RenderMode::Lines).unwrap();

    assert_eq!(solid.mode(), RenderMode::Triangles);
    assert_eq!(wire.mode(), RenderMode::Lines);
    assert_eq!(solid.vertex_count() as usize, hull.facet_count() * 3);
    assert_eq!(wire.vertex_count(), solid.vertex_count() * 2);
    assert_eq!(wire.data(), to_line_expansion(solid.data()).as_slice());
}

#[test]
fn empty_hull_gives_empty_buffer() {
    let hull = ConvexHull::default();

    for mode in [RenderMode::Triangles, RenderMode::Lines] {
        let buffer = build_vertex_buffer(&hull, mode).unwrap();
        assert!(buffer.is_empty());
        assert_eq!(buffer.vertex_count(), 0);
    }
}

#[test]
fn non_triangular_facets_are_rejected() {
    let mut hull = single_facet_hull(DVec3::Z);
    hull.points.push(DVec3::new(1.0, 1.0, 0.0));
    hull.facets[0].vertices = vec![0, 1, 3, 2];

    assert_eq!(
        build_triangle_buffer(&hull, 1.0),
        Err(GeometryError::NonSimplicialFacet {
            facet: 0,
            vertices: 4
        })
    );

    hull.facets[0].vertices = vec![0, 1];
    assert!(matches!(
        build_vertex_buffer(&hull, RenderMode::Lines),
        Err(GeometryError::NonSimplicialFacet { vertices: 2, .. })
    ));
}

#[test]
fn dangling_vertex_is_rejected() {
    let mut hull = single_facet_hull(DVec3::Z);
    hull.facets[0].vertices = vec![0, 1, 7];

    assert_eq!(
        build_triangle_buffer(&hull, 1.0),
        Err(GeometryError::VertexOutOfRange {
            facet: 0,
            vertex: 7,
            points: 3
        })
    );
}
