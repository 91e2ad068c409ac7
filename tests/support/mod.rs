//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use nalgebra::Point3;
use polyhedra::{
    float_types::Real,
    scene::{group::RenderableGroup, primitive::Role},
};

/// Default tolerance for float comparisons.
pub const EPS: Real = 1e-9;

pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

pub fn points_close(a: &Point3<Real>, b: &Point3<Real>, eps: Real) -> bool {
    (a - b).norm() < eps
}

#[track_caller]
pub fn assert_points_close(a: &Point3<Real>, b: &Point3<Real>, eps: Real) {
    assert!(points_close(a, b, eps), "expected {b}, got {a} (eps {eps})");
}

/// World-space centers of a group's vertex markers, in table order.
pub fn marker_positions(group: &RenderableGroup) -> Vec<Point3<Real>> {
    group
        .with_role(Role::VertexMarker)
        .map(|marker| group.world_position(marker))
        .collect()
}
