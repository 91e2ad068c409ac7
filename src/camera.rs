//! Perspective camera and interactive camera controls.

use crate::float_types::{EPSILON, Real};
use nalgebra::{Isometry3, Matrix4, Perspective3, Point3, Unit, UnitQuaternion, Vector2, Vector3};

/// A pinhole camera looking from `position` at `target`.
#[derive(Debug, Clone, PartialEq)]
pub struct PerspectiveCamera {
    /// Vertical field of view, degrees.
    pub fov: Real,
    pub aspect: Real,
    pub near: Real,
    pub far: Real,
    pub position: Point3<Real>,
    pub target: Point3<Real>,
    pub up: Vector3<Real>,
    projection: Matrix4<Real>,
}

impl PerspectiveCamera {
    /// Camera at the origin looking down -Z, projection already computed.
    pub fn new(fov: Real, aspect: Real, near: Real, far: Real) -> Self {
        let mut camera = PerspectiveCamera {
            fov,
            aspect,
            near,
            far,
            position: Point3::origin(),
            target: Point3::new(0.0, 0.0, -1.0),
            up: Vector3::y(),
            projection: Matrix4::identity(),
        };
        camera.update_projection();
        camera
    }

    pub fn set_position(&mut self, position: Point3<Real>) {
        self.position = position;
    }

    pub fn look_at(&mut self, target: Point3<Real>) {
        self.target = target;
    }

    pub fn set_aspect(&mut self, aspect: Real) {
        self.aspect = aspect;
    }

    /// Must be called after changing `fov`, `aspect`, `near` or `far`.
    pub fn update_projection(&mut self) {
        self.projection =
            Perspective3::new(self.aspect, self.fov.to_radians(), self.near, self.far).to_homogeneous();
    }

    pub const fn projection_matrix(&self) -> &Matrix4<Real> {
        &self.projection
    }

    /// World-to-camera transform.
    pub fn view_matrix(&self) -> Matrix4<Real> {
        Isometry3::look_at_rh(&self.position, &self.target, &self.up).to_homogeneous()
    }

    pub fn view_projection(&self) -> Matrix4<Real> {
        self.projection * self.view_matrix()
    }

    pub fn distance_to_target(&self) -> Real {
        (self.position - self.target).norm()
    }
}

/// Applies accumulated user input to a camera once per frame.
pub trait CameraControls {
    fn update(&mut self, camera: &mut PerspectiveCamera);
}

/// Trackball-style orbit/zoom/pan around the camera target.
///
/// Input is queued with [`rotate`](Self::rotate), [`zoom`](Self::zoom) and
/// [`pan`](Self::pan) and applied on the next [`update`](CameraControls::update).
#[derive(Debug, Clone, PartialEq)]
pub struct TrackballControls {
    pub enabled: bool,
    pub rotate_speed: Real,
    pub zoom_speed: Real,
    pub pan_speed: Real,
    pub min_distance: Real,
    pub max_distance: Real,
    rotate_delta: Vector2<Real>,
    zoom_delta: Real,
    pan_delta: Vector2<Real>,
}

impl Default for TrackballControls {
    fn default() -> Self {
        TrackballControls {
            enabled: true,
            rotate_speed: 1.0,
            zoom_speed: 1.2,
            pan_speed: 1.0,
            min_distance: 0.0,
            max_distance: Real::INFINITY,
            rotate_delta: Vector2::zeros(),
            zoom_delta: 0.0,
            pan_delta: Vector2::zeros(),
        }
    }
}

impl TrackballControls {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a drag, in radians: `dx` turns around the camera's up axis and
    /// `dy` tilts over the right axis.
    pub fn rotate(&mut self, dx: Real, dy: Real) {
        self.rotate_delta += Vector2::new(dx, dy);
    }

    /// Queue a zoom. Positive moves away from the target, negative closer.
    pub fn zoom(&mut self, delta: Real) {
        self.zoom_delta += delta;
    }

    /// Queue a pan in world units, scaled by `pan_speed`.
    pub fn pan(&mut self, dx: Real, dy: Real) {
        self.pan_delta += Vector2::new(dx, dy);
    }

    /// True when nothing is queued.
    pub fn is_idle(&self) -> bool {
        self.rotate_delta == Vector2::zeros() && self.zoom_delta == 0.0 && self.pan_delta == Vector2::zeros()
    }

    fn rotate_camera(&self, eye: &mut Vector3<Real>, up: &mut Vector3<Real>) {
        let angle = self.rotate_delta.norm() * self.rotate_speed;
        if angle < EPSILON {
            return;
        }
        let Some(eye_dir) = eye.try_normalize(EPSILON) else {
            return;
        };
        let up_dir = up.normalize();
        let sideways = up_dir.cross(&eye_dir).normalize();
        let move_direction = up_dir * self.rotate_delta.y + sideways * self.rotate_delta.x;
        let Some(axis) = Unit::try_new(move_direction.cross(&eye_dir), EPSILON) else {
            return;
        };
        let rotation = UnitQuaternion::from_axis_angle(&axis, angle);
        *eye = rotation * *eye;
        *up = rotation * *up;
    }

    fn zoom_camera(&self, eye: &mut Vector3<Real>) {
        let factor = 1.0 + self.zoom_delta * self.zoom_speed;
        if factor > 0.0 && (factor - 1.0).abs() > EPSILON {
            *eye *= factor;
        }
    }

    fn pan_camera(&self, eye: &Vector3<Real>, up: &Vector3<Real>) -> Vector3<Real> {
        if self.pan_delta == Vector2::zeros() {
            return Vector3::zeros();
        }
        let scaled = self.pan_delta * self.pan_speed;
        let right = eye.cross(up).try_normalize(EPSILON).unwrap_or_else(Vector3::x);
        let up_dir = up.normalize();
        right * scaled.x + up_dir * scaled.y
    }

    fn clamp_distance(&self, eye: &mut Vector3<Real>) {
        let distance = eye.norm();
        if distance > self.max_distance {
            *eye *= self.max_distance / distance;
        } else if distance < self.min_distance && distance > 0.0 {
            *eye *= self.min_distance / distance;
        }
    }

    fn clear(&mut self) {
        self.rotate_delta = Vector2::zeros();
        self.zoom_delta = 0.0;
        self.pan_delta = Vector2::zeros();
    }
}

impl CameraControls for TrackballControls {
    fn update(&mut self, camera: &mut PerspectiveCamera) {
        if !self.enabled {
            self.clear();
            return;
        }

        let mut eye = camera.position - camera.target;
        let mut up = camera.up;
        self.rotate_camera(&mut eye, &mut up);
        self.zoom_camera(&mut eye);
        let pan = self.pan_camera(&eye, &up);
        self.clamp_distance(&mut eye);

        camera.target += pan;
        camera.position = camera.target + eye;
        camera.up = up;
        self.clear();
    }
}
