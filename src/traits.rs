use crate::float_types::Real;
use crate::float_types::parry3d::bounding_volume::Aabb;
use nalgebra::Matrix4;

/// Affine transformations for anything that can be mapped by a 4x4 matrix
/// and bounded by an axis-aligned box.
pub trait Transform3D: Sized + Clone {
    fn transform(&self, matrix: &Matrix4<Real>) -> Self;
    fn bounding_box(&self) -> Aabb;
    fn invalidate_bounding_box(&mut self);

    /// Scales uniformly about the origin.
    fn scale_uniform(&self, factor: Real) -> Self {
        self.transform(&Matrix4::new_scaling(factor))
    }
}
