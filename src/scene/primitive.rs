//! Renderable primitives: vertex-marker spheres and edge cylinders.

use crate::float_types::{EPSILON, FRAC_PI_2, Real};
use crate::mesh::Mesh;
use crate::scene::material::{Color, LambertMaterial};
use crate::traits::Transform3D;
use nalgebra::{Matrix3, Matrix4, Point3, Rotation3, Translation3, UnitQuaternion, Vector3};

/// Radius shared by both caps of every edge cylinder.
pub const EDGE_RADIUS: Real = 0.2;
pub const EDGE_RADIAL_SEGMENTS: usize = 8;
pub const EDGE_HEIGHT_SEGMENTS: usize = 1;
pub const SPHERE_WIDTH_SEGMENTS: usize = 32;
pub const SPHERE_HEIGHT_SEGMENTS: usize = 32;

/// What a primitive stands for inside its group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Zero-radius anchor at the group's local origin.
    OriginMarker,
    VertexMarker,
    Edge,
}

/// Shape parameters, in the primitive's local frame.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// Centered at the local origin, poles on ±Y.
    Sphere {
        radius: Real,
        width_segments: usize,
        height_segments: usize,
    },
    /// Centered at the local origin, axis along Y.
    Cylinder {
        radius_top: Real,
        radius_bottom: Real,
        height: Real,
        radial_segments: usize,
        height_segments: usize,
    },
}

impl Geometry {
    /// Tessellate in the local frame.
    pub fn to_mesh<S: Clone + Send + Sync + std::fmt::Debug>(&self, metadata: Option<S>) -> Mesh<S> {
        match *self {
            Geometry::Sphere {
                radius,
                width_segments,
                height_segments,
            } => Mesh::sphere(radius, width_segments, height_segments, metadata),
            Geometry::Cylinder {
                radius_top,
                radius_bottom,
                height,
                radial_segments,
                height_segments,
            } => Mesh::cylinder(
                radius_top,
                radius_bottom,
                height,
                radial_segments,
                height_segments,
                metadata,
            ),
        }
    }
}

/// One node of a group: geometry, material and a rigid placement relative to
/// the group.
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    pub role: Role,
    pub geometry: Geometry,
    pub material: LambertMaterial,
    pub position: Point3<Real>,
    pub rotation: UnitQuaternion<Real>,
}

impl Primitive {
    /// A sphere centered at `position`. A radius of zero is valid and gives an
    /// invisible marker.
    pub fn vertex_marker(position: Point3<Real>, color: Color, radius: Real) -> Primitive {
        Primitive {
            role: Role::VertexMarker,
            geometry: Geometry::Sphere {
                radius,
                width_segments: SPHERE_WIDTH_SEGMENTS,
                height_segments: SPHERE_HEIGHT_SEGMENTS,
            },
            material: LambertMaterial::new(color),
            position,
            rotation: UnitQuaternion::identity(),
        }
    }

    /// The zero-radius white sphere every group starts with.
    pub fn origin_marker() -> Primitive {
        Primitive {
            role: Role::OriginMarker,
            ..Primitive::vertex_marker(Point3::origin(), Color::WHITE, 0.0)
        }
    }

    /// A uniform rod whose axis runs from `a` to `b`, centered on their midpoint.
    ///
    /// The cylinder is built along local +Y. Its orientation is a look-at basis
    /// from `a` toward `b` followed by a -90° turn about X, which carries +Y onto
    /// the `a → b` direction. Coincident points give a zero-length rod.
    ///
    /// ```
    /// # use nalgebra::Point3;
    /// # use polyhedra::scene::material::{Color, LambertMaterial};
    /// # use polyhedra::scene::primitive::Primitive;
    /// let a = Point3::new(-3.33, -3.33, 3.33);
    /// let b = Point3::new(3.33, -3.33, 3.33);
    /// let edge = Primitive::edge(a, b, LambertMaterial::new(Color::from_hex(0xff0000)));
    /// assert_eq!(edge.position, Point3::new(0.0, -3.33, 3.33));
    /// assert!((edge.length().unwrap() - 6.66).abs() < 1e-9);
    /// ```
    pub fn edge(a: Point3<Real>, b: Point3<Real>, material: LambertMaterial) -> Primitive {
        let length = (b - a).norm();
        let orientation = look_at_rotation(&a, &b, &Vector3::y())
            * Rotation3::from_axis_angle(&Vector3::x_axis(), -FRAC_PI_2);

        Primitive {
            role: Role::Edge,
            geometry: Geometry::Cylinder {
                radius_top: EDGE_RADIUS,
                radius_bottom: EDGE_RADIUS,
                height: length,
                radial_segments: EDGE_RADIAL_SEGMENTS,
                height_segments: EDGE_HEIGHT_SEGMENTS,
            },
            material,
            position: nalgebra::center(&a, &b),
            rotation: UnitQuaternion::from_rotation_matrix(&orientation),
        }
    }

    pub const fn color(&self) -> Color {
        self.material.color
    }

    /// Sphere radius, or `None` for cylinders.
    pub const fn radius(&self) -> Option<Real> {
        match self.geometry {
            Geometry::Sphere { radius, .. } => Some(radius),
            Geometry::Cylinder { .. } => None,
        }
    }

    /// Cylinder height, or `None` for spheres.
    pub const fn length(&self) -> Option<Real> {
        match self.geometry {
            Geometry::Cylinder { height, .. } => Some(height),
            Geometry::Sphere { .. } => None,
        }
    }

    /// Local-to-group transform.
    pub fn matrix(&self) -> Matrix4<Real> {
        Translation3::from(self.position.coords).to_homogeneous() * self.rotation.to_homogeneous()
    }

    /// Map a point from the primitive's local frame into its group's frame.
    pub fn to_group(&self, local: &Point3<Real>) -> Point3<Real> {
        self.position + self.rotation * local.coords
    }

    /// For cylinders, the two ends of the axis in group space: the end at
    /// local -Y first, then +Y.
    pub fn axis_endpoints(&self) -> Option<(Point3<Real>, Point3<Real>)> {
        let half = self.length()? * 0.5;
        Some((
            self.to_group(&Point3::new(0.0, -half, 0.0)),
            self.to_group(&Point3::new(0.0, half, 0.0)),
        ))
    }

    /// Tessellate into group space, tagging every polygon with the material color.
    pub fn to_mesh(&self) -> Mesh<Color> {
        let local = self.geometry.to_mesh(Some(self.material.color));
        if local.is_empty() {
            return local;
        }
        local.transform(&self.matrix())
    }
}

/// Rotation whose local +Z points from `target` back to `eye`, with X = up × Z
/// and Y = Z × X.
///
/// Coincident points look along +Z. When `up` is parallel to the view
/// direction the direction is nudged by 1e-4 so a basis still exists.
pub fn look_at_rotation(
    eye: &Point3<Real>,
    target: &Point3<Real>,
    up: &Vector3<Real>,
) -> Rotation3<Real> {
    let mut z = eye - target;
    if z.norm_squared() < EPSILON * EPSILON {
        z = Vector3::z();
    }
    z.normalize_mut();

    let mut x = up.cross(&z);
    if x.norm_squared() < EPSILON * EPSILON {
        if (up.z.abs() - 1.0).abs() < EPSILON {
            z.x += 0.0001;
        } else {
            z.z += 0.0001;
        }
        z.normalize_mut();
        x = up.cross(&z);
    }
    x.normalize_mut();
    let y = z.cross(&x);

    Rotation3::from_matrix_unchecked(Matrix3::from_columns(&[x, y, z]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red() -> LambertMaterial {
        LambertMaterial::new(Color::from_hex(0xff0000))
    }

    fn assert_close(a: Point3<Real>, b: Point3<Real>, eps: Real) {
        assert!((a - b).norm() < eps, "{a} != {b}");
    }

    #[test]
    fn edge_axis_runs_from_a_to_b() {
        let a = Point3::new(0.0, 0.0, -10.0);
        let b = Point3::new(10.0, 0.0, 0.0);
        let edge = Primitive::edge(a, b, red());
        let (start, end) = edge.axis_endpoints().unwrap();
        assert_close(start, a, 1e-9);
        assert_close(end, b, 1e-9);
    }

    #[test]
    fn vertical_edge_is_nudged_but_still_connects() {
        let a = Point3::new(-3.33, -3.33, 3.33);
        let b = Point3::new(-3.33, 3.33, 3.33);
        let edge = Primitive::edge(a, b, red());
        let (start, end) = edge.axis_endpoints().unwrap();
        assert_close(start, a, 1e-3);
        assert_close(end, b, 1e-3);
        assert!(edge.rotation.into_inner().norm().is_finite());
    }

    #[test]
    fn coincident_points_give_zero_length_rod() {
        let p = Point3::new(1.0, 2.0, 3.0);
        let edge = Primitive::edge(p, p, red());
        assert_eq!(edge.length(), Some(0.0));
        assert_eq!(edge.position, p);
        assert!(edge.to_mesh().is_empty());
    }

    #[test]
    fn look_at_matches_right_handed_basis() {
        let rot = look_at_rotation(&Point3::new(0.0, 0.0, 5.0), &Point3::origin(), &Vector3::y());
        let m = rot.matrix();
        assert!((m.column(0) - Vector3::x()).norm() < 1e-12);
        assert!((m.column(1) - Vector3::y()).norm() < 1e-12);
        assert!((m.column(2) - Vector3::z()).norm() < 1e-12);
    }

    #[test]
    fn origin_marker_is_white_and_empty() {
        let marker = Primitive::origin_marker();
        assert_eq!(marker.role, Role::OriginMarker);
        assert_eq!(marker.color(), Color::WHITE);
        assert_eq!(marker.radius(), Some(0.0));
        assert!(marker.to_mesh().is_empty());
    }

    #[test]
    fn vertex_marker_mesh_is_centered_on_position() {
        let p = Point3::new(10.0, 0.0, 0.0);
        let marker = Primitive::vertex_marker(p, Color::from_hex(0x065535), 0.5);
        let mesh = marker.to_mesh();
        for v in mesh.vertices() {
            assert!(((v.pos - p).norm() - 0.5).abs() < 1e-9);
        }
        assert!(mesh.polygons.iter().all(|poly| poly.metadata() == Some(&marker.color())));
    }
}
