//! Oriented planes used to carry facet normals.

use crate::float_types::{EPSILON, Real};
use crate::mesh::vertex::Vertex;
use nalgebra::{Point3, Vector3};

/// A plane in Hessian normal form: `normal · p = offset`.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    normal: Vector3<Real>,
    offset: Real,
}

impl Plane {
    /// Build a plane directly from a normal and the offset along it.
    pub const fn from_normal(normal: Vector3<Real>, offset: Real) -> Self {
        Plane { normal, offset }
    }

    /// Plane through three points, oriented counter-clockwise.
    pub fn from_points(a: &Point3<Real>, b: &Point3<Real>, c: &Point3<Real>) -> Plane {
        let n = (b - a).cross(&(c - a));
        if n.norm_squared() < EPSILON * EPSILON {
            return Plane::from_normal(Vector3::zeros(), 0.0);
        }
        let normal = n.normalize();
        Plane::from_normal(normal, normal.dot(&a.coords))
    }

    /// Best-fit plane for a (possibly non-planar) ring of vertices, using
    /// Newell's method. Robust to collinear leading vertices, which occur at
    /// sphere poles.
    pub fn from_vertices(vertices: &[Vertex]) -> Plane {
        let n = vertices.len();
        if n < 3 {
            return Plane::from_normal(Vector3::zeros(), 0.0);
        }

        let mut normal = Vector3::zeros();
        let mut centroid = Vector3::zeros();
        for i in 0..n {
            let current = vertices[i].pos;
            let next = vertices[(i + 1) % n].pos;
            normal.x += (current.y - next.y) * (current.z + next.z);
            normal.y += (current.z - next.z) * (current.x + next.x);
            normal.z += (current.x - next.x) * (current.y + next.y);
            centroid += current.coords;
        }
        centroid /= n as Real;

        if normal.norm_squared() < EPSILON * EPSILON {
            return Plane::from_normal(Vector3::zeros(), 0.0);
        }
        let normal = normal.normalize();
        Plane::from_normal(normal, normal.dot(&centroid))
    }

    pub const fn normal(&self) -> Vector3<Real> {
        self.normal
    }

    pub const fn offset(&self) -> Real {
        self.offset
    }

    /// A plane built from degenerate input has a zero normal.
    pub fn is_degenerate(&self) -> bool {
        self.normal.norm_squared() < EPSILON
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ccw_triangle_faces_up() {
        let plane = Plane::from_points(
            &Point3::new(0.0, 0.0, 1.0),
            &Point3::new(1.0, 0.0, 1.0),
            &Point3::new(0.0, 1.0, 1.0),
        );
        assert_eq!(plane.normal(), Vector3::z());
        assert!((plane.offset() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn newell_matches_three_point_plane() {
        let verts = [
            Vertex::new(Point3::new(0.0, 0.0, 0.0), Vector3::z()),
            Vertex::new(Point3::new(2.0, 0.0, 0.0), Vector3::z()),
            Vertex::new(Point3::new(2.0, 2.0, 0.0), Vector3::z()),
            Vertex::new(Point3::new(0.0, 2.0, 0.0), Vector3::z()),
        ];
        let plane = Plane::from_vertices(&verts);
        assert!((plane.normal() - Vector3::z()).norm() < EPSILON);
        assert!(!plane.is_degenerate());
    }

    #[test]
    fn collinear_points_are_degenerate() {
        let plane = Plane::from_points(
            &Point3::origin(),
            &Point3::new(1.0, 1.0, 1.0),
            &Point3::new(2.0, 2.0, 2.0),
        );
        assert!(plane.is_degenerate());
    }
}
