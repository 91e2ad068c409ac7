mod support;

use nalgebra::Point3;
use polyhedra::{
    build_solid,
    float_types::Real,
    scene::primitive::Role,
    solids::{DODECAHEDRON_SCALE, SolidType},
};
use support::{EPS, approx_eq, assert_points_close, marker_positions};

#[test]
fn child_counts_match_tables() {
    let expected = [
        (SolidType::Hexahedron, 21),
        (SolidType::Octahedron, 19),
        (SolidType::Tetrahedron, 12),
        (SolidType::Dodecahedron, 53),
    ];
    for (solid, count) in expected {
        let descriptor = solid.descriptor();
        let group = build_solid(solid);
        assert_eq!(group.len(), count, "{solid}");
        assert_eq!(group.len(), 1 + descriptor.vertices.len() + descriptor.edges.len());
        assert_eq!(group.count(Role::VertexMarker), descriptor.vertices.len());
        assert_eq!(group.count(Role::Edge), descriptor.edges.len());
    }
}

#[test]
fn repeated_builds_are_independent() {
    for solid in SolidType::ALL {
        let first = build_solid(solid);
        let mut second = build_solid(solid);
        assert_eq!(first, second);
        second.set_scale(2.0);
        assert_ne!(first, second);
        assert_eq!(first.scale(), solid.descriptor().post_scale.unwrap_or(1.0));
    }
}

#[test]
fn edges_connect_their_vertices() {
    for solid in SolidType::ALL {
        let descriptor = solid.descriptor();
        let group = build_solid(solid);
        for (k, edge) in group.with_role(Role::Edge).enumerate() {
            let (a, b) = descriptor.edge_points(k).unwrap();
            let length = (b - a).norm();

            assert_points_close(&edge.position, &nalgebra::center(&a, &b), EPS);
            assert!(approx_eq(edge.length().unwrap(), length, EPS), "{solid} edge {k}");

            // edges parallel to +Y are nudged off-axis by the look-at basis
            let eps = 1e-3 * length.max(1.0);
            let (start, end) = edge.axis_endpoints().unwrap();
            assert_points_close(&start, &a, eps);
            assert_points_close(&end, &b, eps);
        }
    }
}

#[test]
fn hexahedron_front_bottom_edge() {
    let s = 3.33;
    let group = build_solid(SolidType::Hexahedron);
    let markers = marker_positions(&group);
    assert!(markers.contains(&Point3::new(-s, -s, s)));

    let edge = group
        .with_role(Role::Edge)
        .find(|e| (e.position - Point3::new(0.0, -s, s)).norm() < EPS)
        .expect("an edge centered on (0, -s, s)");
    let (start, end) = edge.axis_endpoints().unwrap();
    assert_points_close(&start, &Point3::new(-s, -s, s), 1e-9);
    assert_points_close(&end, &Point3::new(s, -s, s), 1e-9);
}

#[test]
fn dodecahedron_is_uniformly_rescaled() {
    let descriptor = SolidType::Dodecahedron.descriptor();
    let group = build_solid(SolidType::Dodecahedron);
    let world = marker_positions(&group);

    for (i, p) in world.iter().enumerate() {
        assert_points_close(p, &(descriptor.vertices[i] * DODECAHEDRON_SCALE), 1e-9);
    }

    let pairs: [(usize, usize); 3] = [(0, 1), (2, 17), (5, 19)];
    for (i, j) in pairs {
        let unscaled = (descriptor.vertices[i] - descriptor.vertices[j]).norm();
        let scaled = (world[i] - world[j]).norm();
        assert!(approx_eq(scaled, unscaled * DODECAHEDRON_SCALE, 1e-9));
    }
}

#[test]
fn group_mesh_carries_solid_color() {
    for solid in SolidType::ALL {
        let mesh = build_solid(solid).to_mesh();
        let color = solid.descriptor().color;
        assert_eq!(mesh.metadata, Some(color));
        assert!(mesh.polygons.iter().all(|p| p.metadata() == Some(&color)));
    }
}

#[test]
fn dodecahedron_mesh_bounds_include_scale() {
    let group = build_solid(SolidType::Dodecahedron);
    let aabb = group.bounding_box();
    // marker spheres of radius 0.5 sit on (±17, 0, ±5.1) before scaling
    let expected: Real = (17.0 + 0.5) * DODECAHEDRON_SCALE;
    assert!(approx_eq(aabb.maxs.x, expected, 1e-6));
    assert!(approx_eq(aabb.mins.x, -expected, 1e-6));
}
