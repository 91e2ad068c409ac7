//! Rendering boundary and a headless mesh renderer.

use crate::camera::PerspectiveCamera;
use crate::float_types::Real;
use crate::mesh::Mesh;
use crate::mesh::vertex::Vertex;
use crate::scene::Scene;
use crate::scene::material::Color;
use crate::solids::SolidType;
use crate::triangulated::Triangulated3D;
use nalgebra::{Matrix4, Point3};

/// Something that can draw a [`Scene`] as seen by a camera.
pub trait Renderer {
    fn set_size(&mut self, width: u32, height: u32);
    fn size(&self) -> (u32, u32);
    fn render(&mut self, scene: &Scene, camera: &PerspectiveCamera);
}

/// One rendered frame: world-space meshes for every attached solid, plus the
/// ground grid as colored line segments.
#[derive(Debug, Clone)]
pub struct Frame {
    pub index: u64,
    pub clear_color: Color,
    pub view_projection: Matrix4<Real>,
    pub meshes: Vec<(SolidType, Mesh<Color>)>,
    pub grid: Vec<(Point3<Real>, Point3<Real>, Color)>,
}

impl Frame {
    pub fn solids(&self) -> impl Iterator<Item = SolidType> + '_ {
        self.meshes.iter().map(|(solid, _)| *solid)
    }

    pub fn mesh(&self, solid: SolidType) -> Option<&Mesh<Color>> {
        self.meshes
            .iter()
            .find(|(s, _)| *s == solid)
            .map(|(_, mesh)| mesh)
    }
}

impl Triangulated3D for Frame {
    fn visit_triangles<F>(&self, mut f: F)
    where
        F: FnMut([Vertex; 3]),
    {
        for (_, mesh) in &self.meshes {
            mesh.visit_triangles(&mut f);
        }
    }
}

/// Tessellates the scene instead of rasterising it, keeping the last frame.
#[derive(Debug, Clone)]
pub struct MeshRenderer {
    width: u32,
    height: u32,
    pub clear_color: Color,
    pub shadow_map_enabled: bool,
    frames: u64,
    last_frame: Option<Frame>,
}

impl MeshRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        MeshRenderer {
            width,
            height,
            clear_color: Color::BLACK,
            shadow_map_enabled: false,
            frames: 0,
            last_frame: None,
        }
    }

    /// Number of frames rendered so far.
    pub const fn frame_count(&self) -> u64 {
        self.frames
    }

    pub const fn last_frame(&self) -> Option<&Frame> {
        self.last_frame.as_ref()
    }
}

impl Renderer for MeshRenderer {
    fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn render(&mut self, scene: &Scene, camera: &PerspectiveCamera) {
        let mut meshes: Vec<(SolidType, Mesh<Color>)> = scene
            .groups()
            .map(|(_, group)| (group.solid(), group.to_mesh()))
            .collect();
        // slotmap iteration order depends on slot reuse
        meshes.sort_by_key(|(solid, _)| *solid);

        self.frames += 1;
        log::trace!(
            "frame {} at {}x{}: {} solids",
            self.frames,
            self.width,
            self.height,
            meshes.len()
        );
        self.last_frame = Some(Frame {
            index: self.frames,
            clear_color: self.clear_color,
            view_projection: camera.view_projection(),
            meshes,
            grid: scene.grid.lines(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build_solid;

    #[test]
    fn render_keeps_latest_frame() {
        let mut scene = Scene::new();
        scene.add(build_solid(SolidType::Tetrahedron));
        scene.add(build_solid(SolidType::Hexahedron));
        let camera = PerspectiveCamera::new(75.0, 1.0, 0.1, 1000.0);

        let mut renderer = MeshRenderer::new(640, 480);
        assert!(renderer.last_frame().is_none());
        renderer.render(&scene, &camera);
        renderer.render(&scene, &camera);

        let frame = renderer.last_frame().unwrap();
        assert_eq!(frame.index, 2);
        assert_eq!(renderer.frame_count(), 2);
        let solids: Vec<_> = frame.solids().collect();
        assert_eq!(solids, [SolidType::Hexahedron, SolidType::Tetrahedron]);
        assert!(frame.triangle_count() > 0);
        assert_eq!(frame.grid.len(), 2 * (50 + 1));
        assert_eq!(
            frame.mesh(SolidType::Hexahedron).unwrap().metadata,
            Some(Color::from_hex(0xff0000))
        );
    }

    #[test]
    fn set_size_is_reported() {
        let mut renderer = MeshRenderer::new(1, 1);
        renderer.set_size(800, 600);
        assert_eq!(renderer.size(), (800, 600));
    }
}
