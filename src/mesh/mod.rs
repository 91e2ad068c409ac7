//! `Mesh` struct and implementations of the `Transform3D` trait for `Mesh`

use crate::float_types::{
    Real,
    parry3d::bounding_volume::Aabb,
};
use crate::mesh::{plane::Plane, polygon::Polygon, vertex::Vertex};
use crate::traits::Transform3D;
use crate::triangulated::Triangulated3D;
use nalgebra::{Matrix4, Point3, partial_max, partial_min};
use std::{fmt::Debug, sync::OnceLock};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

pub mod plane;
pub mod polygon;
pub mod shapes;
pub mod vertex;

/// A polygon soup with optional metadata. Polygons are never shared between
/// meshes; cloning a mesh deep-copies them.
#[derive(Clone, Debug)]
pub struct Mesh<S: Clone + Send + Sync + Debug> {
    /// 3D polygons
    pub polygons: Vec<Polygon<S>>,

    /// Lazily calculated AABB that spans `polygons`.
    pub bounding_box: OnceLock<Aabb>,

    /// Metadata
    pub metadata: Option<S>,
}

impl<S: Clone + Send + Sync + Debug> Default for Mesh<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Clone + Send + Sync + Debug> Mesh<S> {
    /// Create an empty Mesh
    pub const fn new() -> Self {
        Mesh {
            polygons: Vec::new(),
            bounding_box: OnceLock::new(),
            metadata: None,
        }
    }

    /// Build a Mesh from an existing polygon list
    pub fn from_polygons(polygons: &[Polygon<S>], metadata: Option<S>) -> Self {
        let mut mesh = Mesh::new();
        mesh.polygons = polygons.to_vec();
        mesh.metadata = metadata;
        mesh
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Helper to collect all vertices from the Mesh.
    #[cfg(not(feature = "parallel"))]
    pub fn vertices(&self) -> Vec<Vertex> {
        self.polygons
            .iter()
            .flat_map(|p| p.vertices.clone())
            .collect()
    }

    /// Parallel helper to collect all vertices from the Mesh.
    #[cfg(feature = "parallel")]
    pub fn vertices(&self) -> Vec<Vertex> {
        self.polygons
            .par_iter()
            .flat_map(|p| p.vertices.clone())
            .collect()
    }

    /// Append another mesh's polygons in place.
    pub fn extend(&mut self, other: Mesh<S>) {
        self.polygons.extend(other.polygons);
        self.invalidate_bounding_box();
    }
}

impl<S: Clone + Send + Sync + Debug> Transform3D for Mesh<S> {
    /// Apply an arbitrary 3D transform (as a 4x4 matrix) to the polygons.
    /// Positions use the full matrix, normals use its inverse transpose.
    fn transform(&self, mat: &Matrix4<Real>) -> Mesh<S> {
        // A singular matrix (zero scale) collapses the geometry; normals then
        // keep their direction.
        let mat_inv_transpose = mat
            .try_inverse()
            .map(|inv| inv.transpose())
            .unwrap_or_else(Matrix4::identity);
        let mut mesh = self.clone();

        for poly in &mut mesh.polygons {
            for vert in &mut poly.vertices {
                vert.pos = mat.transform_point(&vert.pos);
                let normal = mat_inv_transpose.transform_vector(&vert.normal);
                vert.normal = normal.try_normalize(0.0).unwrap_or(normal);
            }
            poly.recompute_plane();
        }

        mesh.bounding_box = OnceLock::new();
        mesh
    }

    /// Returns a [`parry3d::bounding_volume::Aabb`] containing every polygon vertex.
    fn bounding_box(&self) -> Aabb {
        *self.bounding_box.get_or_init(|| {
            let mut min_x = Real::MAX;
            let mut min_y = Real::MAX;
            let mut min_z = Real::MAX;
            let mut max_x = -Real::MAX;
            let mut max_y = -Real::MAX;
            let mut max_z = -Real::MAX;

            for poly in &self.polygons {
                for v in &poly.vertices {
                    min_x = *partial_min(&min_x, &v.pos.x).unwrap_or(&min_x);
                    min_y = *partial_min(&min_y, &v.pos.y).unwrap_or(&min_y);
                    min_z = *partial_min(&min_z, &v.pos.z).unwrap_or(&min_z);

                    max_x = *partial_max(&max_x, &v.pos.x).unwrap_or(&max_x);
                    max_y = *partial_max(&max_y, &v.pos.y).unwrap_or(&max_y);
                    max_z = *partial_max(&max_z, &v.pos.z).unwrap_or(&max_z);
                }
            }

            // If still uninitialized (no polygons), return a trivial AABB at origin
            if min_x > max_x {
                return Aabb::new(Point3::origin(), Point3::origin());
            }

            Aabb::new(
                Point3::new(min_x, min_y, min_z),
                Point3::new(max_x, max_y, max_z),
            )
        })
    }

    fn invalidate_bounding_box(&mut self) {
        self.bounding_box = OnceLock::new();
    }
}

impl<S: Clone + Send + Sync + Debug> Triangulated3D for Mesh<S> {
    fn visit_triangles<F>(&self, mut f: F)
    where
        F: FnMut([Vertex; 3]),
    {
        for poly in &self.polygons {
            for tri in poly.triangulate() {
                f(tri);
            }
        }
    }
}

/// Facet normal for a triangle, falling back to the first vertex normal for
/// degenerate triangles.
pub fn facet_normal(tri: &[Vertex; 3]) -> nalgebra::Vector3<Real> {
    let plane = Plane::from_points(&tri[0].pos, &tri[1].pos, &tri[2].pos);
    if plane.is_degenerate() {
        tri[0].normal
    } else {
        plane.normal()
    }
}
