//! Tessellated sphere and cylinder surfaces.

use crate::float_types::{EPSILON, PI, Real, TAU};
use crate::mesh::Mesh;
use crate::mesh::polygon::Polygon;
use crate::mesh::vertex::Vertex;
use nalgebra::{Point3, Vector3};
use std::fmt::Debug;

impl<S: Clone + Debug + Send + Sync> Mesh<S> {
    /// Construct a sphere centered at the origin with `segments` slices around
    /// the Y axis and `stacks` bands from the +Y pole to the -Y pole.
    ///
    /// A radius of zero (within `EPSILON`) yields an empty mesh: the point
    /// still exists in the scene graph but contributes no triangles.
    ///
    /// ```
    /// # use polyhedra::mesh::Mesh;
    /// let sphere: Mesh<()> = Mesh::sphere(0.5, 32, 32, None);
    /// assert_eq!(sphere.polygons.len(), 32 * 32);
    /// ```
    pub fn sphere(
        radius: Real,
        segments: usize,
        stacks: usize,
        metadata: Option<S>,
    ) -> Mesh<S> {
        if radius.abs() < EPSILON || segments < 3 || stacks < 2 {
            return Mesh::new();
        }

        let vertex = |theta: Real, phi: Real| {
            let dir = Vector3::new(theta.cos() * phi.sin(), phi.cos(), theta.sin() * phi.sin());
            Vertex::new(Point3::from(dir * radius), dir)
        };

        let mut polygons = Vec::with_capacity(segments * stacks);
        for i in 0..segments {
            for j in 0..stacks {
                let theta0 = i as Real / segments as Real * TAU;
                let theta1 = (i + 1) as Real / segments as Real * TAU;
                let phi0 = j as Real / stacks as Real * PI;
                let phi1 = (j + 1) as Real / stacks as Real * PI;

                // Pole bands collapse one edge, leaving a triangle.
                let mut vertices = Vec::with_capacity(4);
                vertices.push(vertex(theta0, phi0));
                if j > 0 {
                    vertices.push(vertex(theta1, phi0));
                }
                if j < stacks - 1 {
                    vertices.push(vertex(theta1, phi1));
                }
                vertices.push(vertex(theta0, phi1));

                polygons.push(Polygon::new(vertices, metadata.clone()));
            }
        }

        Mesh::from_polygons(&polygons, metadata)
    }

    /// Constructs a frustum between `start` and `end` with bottom radius = `radius1` and
    /// top radius = `radius2`, `segments` slices around the axis and `stacks` bands along it.
    /// If one of the radii is 0 (within EPSILON), that face is treated as a single point and
    /// the side is stitched using triangles.
    ///
    /// Coincident `start` and `end` (a zero-length axis) or two zero radii produce an
    /// empty mesh.
    ///
    /// # Example
    /// ```
    /// # use nalgebra::Point3;
    /// # use polyhedra::mesh::Mesh;
    /// let bottom = Point3::new(0.0, 0.0, 0.0);
    /// let top = Point3::new(0.0, 0.0, 5.0);
    /// let cone: Mesh<()> = Mesh::frustum_ptp(bottom, top, 0.0, 2.0, 32, 1, None);
    /// assert_eq!(cone.polygons.len(), 32 * 2);
    /// ```
    pub fn frustum_ptp(
        start: Point3<Real>,
        end: Point3<Real>,
        radius1: Real,
        radius2: Real,
        segments: usize,
        stacks: usize,
        metadata: Option<S>,
    ) -> Mesh<S> {
        let s = start.coords;
        let ray = end.coords - s;
        if ray.norm_squared() < EPSILON * EPSILON || segments < 3 || stacks == 0 {
            return Mesh::new();
        }

        let bottom_degenerate = radius1.abs() < EPSILON;
        let top_degenerate = radius2.abs() < EPSILON;
        if bottom_degenerate && top_degenerate {
            return Mesh::new();
        }

        let axis_z = ray.normalize();
        // Pick an axis not parallel to axis_z.
        let axis_x = if axis_z.y.abs() > 0.5 {
            Vector3::x()
        } else {
            Vector3::y()
        }
        .cross(&axis_z)
        .normalize();
        let axis_y = axis_x.cross(&axis_z).normalize();

        let start_v = Vertex::new(start, -axis_z);
        let end_v = Vertex::new(end, axis_z);

        // `stack` runs 0.0 (bottom) to 1.0 (top), `slice` is the fraction around the circle,
        // `normal_blend` tilts the normal toward the axis for cap vertices.
        let point = |stack: Real, slice: Real, normal_blend: Real| {
            let r = radius1 * (1.0 - stack) + radius2 * stack;
            let angle = slice * TAU;
            let radial_dir = axis_x * angle.cos() + axis_y * angle.sin();
            let pos = s + ray * stack + radial_dir * r;
            let normal = radial_dir * (1.0 - normal_blend.abs()) + axis_z * normal_blend;
            Vertex::new(Point3::from(pos), normal.normalize())
        };

        let mut polygons = Vec::new();

        for i in 0..segments {
            let slice0 = i as Real / segments as Real;
            let slice1 = (i + 1) as Real / segments as Real;

            if !bottom_degenerate {
                polygons.push(Polygon::new(
                    vec![start_v, point(0.0, slice0, -1.0), point(0.0, slice1, -1.0)],
                    metadata.clone(),
                ));
            }
            if !top_degenerate {
                polygons.push(Polygon::new(
                    vec![end_v, point(1.0, slice1, 1.0), point(1.0, slice0, 1.0)],
                    metadata.clone(),
                ));
            }

            for j in 0..stacks {
                let stack0 = j as Real / stacks as Real;
                let stack1 = (j + 1) as Real / stacks as Real;

                if bottom_degenerate && j == 0 {
                    polygons.push(Polygon::new(
                        vec![start_v, point(stack1, slice0, 0.0), point(stack1, slice1, 0.0)],
                        metadata.clone(),
                    ));
                } else if top_degenerate && j == stacks - 1 {
                    polygons.push(Polygon::new(
                        vec![point(stack0, slice1, 0.0), point(stack0, slice0, 0.0), end_v],
                        metadata.clone(),
                    ));
                } else {
                    polygons.push(Polygon::new(
                        vec![
                            point(stack0, slice1, 0.0),
                            point(stack0, slice0, 0.0),
                            point(stack1, slice0, 0.0),
                            point(stack1, slice1, 0.0),
                        ],
                        metadata.clone(),
                    ));
                }
            }
        }

        Mesh::from_polygons(&polygons, metadata)
    }

    /// A cylinder centered at the origin whose axis runs along Y, from
    /// `-height / 2` to `+height / 2`.
    ///
    /// ```
    /// # use polyhedra::mesh::Mesh;
    /// # use polyhedra::traits::Transform3D;
    /// let rod: Mesh<()> = Mesh::cylinder(0.2, 0.2, 4.0, 8, 1, None);
    /// let aabb = rod.bounding_box();
    /// assert!((aabb.maxs.y - 2.0).abs() < 1e-9);
    /// assert!((aabb.mins.y + 2.0).abs() < 1e-9);
    /// ```
    pub fn cylinder(
        radius_top: Real,
        radius_bottom: Real,
        height: Real,
        radial_segments: usize,
        height_segments: usize,
        metadata: Option<S>,
    ) -> Mesh<S> {
        let half = height * 0.5;
        Mesh::frustum_ptp(
            Point3::new(0.0, -half, 0.0),
            Point3::new(0.0, half, 0.0),
            radius_bottom,
            radius_top,
            radial_segments,
            height_segments,
            metadata,
        )
    }
}
