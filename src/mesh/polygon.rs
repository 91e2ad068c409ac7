//! Struct and functions for working with planar `Polygon`s without holes

use crate::mesh::plane::Plane;
use crate::mesh::vertex::Vertex;
use std::fmt::Debug;

/// A convex polygon, defined by a list of vertices and the plane they lie on.
/// - `S` is the generic metadata type, stored as `Option<S>`.
#[derive(Debug, Clone)]
pub struct Polygon<S: Clone> {
    /// Vertices defining the Polygon's shape
    pub vertices: Vec<Vertex>,

    /// The plane on which this Polygon lies, used for facet normals
    pub plane: Plane,

    /// Generic metadata associated with the Polygon
    pub metadata: Option<S>,
}

impl<S: Clone + Send + Sync + Debug> Polygon<S> {
    /// Create a polygon from vertices. The plane is fitted to the vertices.
    pub fn new(vertices: Vec<Vertex>, metadata: Option<S>) -> Self {
        let plane = Plane::from_vertices(&vertices);
        Polygon {
            vertices,
            plane,
            metadata,
        }
    }

    /// Recompute the plane after the vertices were moved.
    pub fn recompute_plane(&mut self) {
        self.plane = Plane::from_vertices(&self.vertices);
    }

    /// Fan triangulation. Valid because every polygon produced by this crate is
    /// convex (sphere quads, cylinder caps and side quads).
    pub fn triangulate(&self) -> Vec<[Vertex; 3]> {
        if self.vertices.len() < 3 {
            return Vec::new();
        }
        let anchor = self.vertices[0];
        self.vertices
            .windows(2)
            .skip(1)
            .map(|pair| [anchor, pair[0], pair[1]])
            .collect()
    }

    /// Returns a reference to the metadata, if any.
    pub const fn metadata(&self) -> Option<&S> {
        self.metadata.as_ref()
    }
}
