//! Turns solid descriptors into renderable groups.

use crate::float_types::Real;
use crate::scene::group::RenderableGroup;
use crate::scene::material::{Color, LambertMaterial};
use crate::scene::primitive::Primitive;
use crate::solids::{SolidDescriptor, SolidType};
use nalgebra::Point3;

/// Radius of the sphere drawn at every polyhedron vertex.
pub const VERTEX_MARKER_RADIUS: Real = 0.5;

/// A diffuse sphere of `radius` centered at `position`.
pub fn build_vertex_marker(position: Point3<Real>, color: Color, radius: Real) -> Primitive {
    Primitive::vertex_marker(position, color, radius)
}

/// A rod of radius 0.2 connecting `a` and `b`.
pub fn build_edge(a: Point3<Real>, b: Point3<Real>, material: LambertMaterial) -> Primitive {
    Primitive::edge(a, b, material)
}

/// Build a fresh group for `solid`: the origin marker, one marker per vertex,
/// one rod per edge entry, and the solid's post-scale if it has one.
///
/// ```
/// # use polyhedra::builder::build_solid;
/// # use polyhedra::solids::SolidType;
/// let cube = build_solid(SolidType::Hexahedron);
/// assert_eq!(cube.len(), 1 + 8 + 12);
/// ```
pub fn build_solid(solid: SolidType) -> RenderableGroup {
    build_from_descriptor(&solid.descriptor())
}

pub fn build_from_descriptor(descriptor: &SolidDescriptor) -> RenderableGroup {
    let mut group = RenderableGroup::new(descriptor.solid);
    group.add(Primitive::origin_marker());

    for &vertex in &descriptor.vertices {
        group.add(build_vertex_marker(vertex, descriptor.color, VERTEX_MARKER_RADIUS));
    }

    for &(i, j) in descriptor.edges {
        // every rod gets its own material instance
        let material = LambertMaterial::new(descriptor.color);
        group.add(build_edge(descriptor.vertices[i], descriptor.vertices[j], material));
    }

    if let Some(scale) = descriptor.post_scale {
        group.set_scale(scale);
    }

    log::debug!(
        "built {} with {} primitives (scale {})",
        descriptor.solid,
        group.len(),
        group.scale()
    );
    group
}
