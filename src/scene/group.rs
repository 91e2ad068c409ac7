//! `RenderableGroup`: the primitives of one solid, attached and detached as a unit.

use crate::float_types::Real;
use crate::float_types::parry3d::bounding_volume::Aabb;
use crate::mesh::Mesh;
use crate::mesh::vertex::Vertex;
use crate::scene::material::Color;
use crate::scene::primitive::{Primitive, Role};
use crate::solids::SolidType;
use crate::traits::Transform3D;
use crate::triangulated::Triangulated3D;
use nalgebra::Point3;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// An aggregate node that exclusively owns its primitives. The group applies a
/// uniform scale about its local origin on top of each child's placement.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderableGroup {
    solid: SolidType,
    scale: Real,
    children: Vec<Primitive>,
}

impl RenderableGroup {
    pub const fn new(solid: SolidType) -> Self {
        RenderableGroup {
            solid,
            scale: 1.0,
            children: Vec::new(),
        }
    }

    pub const fn solid(&self) -> SolidType {
        self.solid
    }

    pub fn add(&mut self, primitive: Primitive) {
        self.children.push(primitive);
    }

    pub fn children(&self) -> &[Primitive] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Children with the given role, in insertion order.
    pub fn with_role(&self, role: Role) -> impl Iterator<Item = &Primitive> {
        self.children.iter().filter(move |p| p.role == role)
    }

    pub fn count(&self, role: Role) -> usize {
        self.with_role(role).count()
    }

    pub const fn scale(&self) -> Real {
        self.scale
    }

    pub fn set_scale(&mut self, scale: Real) {
        self.scale = scale;
    }

    /// Where a point given in a child's local frame ends up in world space.
    pub fn world_point(&self, child: &Primitive, local: &Point3<Real>) -> Point3<Real> {
        Point3::from(child.to_group(local).coords * self.scale)
    }

    /// World-space center of a child.
    pub fn world_position(&self, child: &Primitive) -> Point3<Real> {
        self.world_point(child, &Point3::origin())
    }

    /// Tessellate every child into one world-space mesh, each polygon tagged
    /// with its primitive's color.
    #[cfg(not(feature = "parallel"))]
    pub fn to_mesh(&self) -> Mesh<Color> {
        let mut mesh = Mesh::new();
        for child in &self.children {
            mesh.extend(child.to_mesh());
        }
        self.finish_mesh(mesh)
    }

    /// Tessellate every child into one world-space mesh, each polygon tagged
    /// with its primitive's color. Children are tessellated in parallel.
    #[cfg(feature = "parallel")]
    pub fn to_mesh(&self) -> Mesh<Color> {
        let parts: Vec<Mesh<Color>> = self.children.par_iter().map(Primitive::to_mesh).collect();
        let mut mesh = Mesh::new();
        for part in parts {
            mesh.extend(part);
        }
        self.finish_mesh(mesh)
    }

    fn finish_mesh(&self, mut mesh: Mesh<Color>) -> Mesh<Color> {
        mesh.metadata = Some(self.solid.descriptor().color);
        if (self.scale - 1.0).abs() > Real::EPSILON {
            mesh = mesh.scale_uniform(self.scale);
        }
        mesh
    }

    /// World-space bounds of the tessellated group.
    pub fn bounding_box(&self) -> Aabb {
        self.to_mesh().bounding_box()
    }
}

impl Triangulated3D for RenderableGroup {
    fn visit_triangles<F>(&self, f: F)
    where
        F: FnMut([Vertex; 3]),
    {
        self.to_mesh().visit_triangles(f);
    }
}
