mod support;

use nalgebra::Point3;
use polyhedra::{
    SolidType, Viewer, ViewerConfig, ViewerError, Visibility,
    camera::{CameraControls, PerspectiveCamera},
    renderer::{MeshRenderer, Renderer},
    scene::Scene,
    triangulated::Triangulated3D,
};
use support::approx_eq;

fn viewer() -> Viewer {
    Viewer::new(ViewerConfig::default()).unwrap()
}

#[test]
fn double_toggle_restores_empty_scene() {
    for solid in SolidType::ALL {
        let mut viewer = viewer();
        viewer.toggle(solid);
        assert!(viewer.is_shown(solid));
        assert_eq!(viewer.scene().len(), 1);
        viewer.toggle(solid);
        assert_eq!(viewer.visibility(solid), Visibility::Hidden);
        assert!(viewer.scene().is_empty());
        assert_eq!(viewer.scene().primitive_count(), 0);
    }
}

#[test]
fn octahedron_hexahedron_octahedron() {
    let mut viewer = viewer();
    viewer.toggle(SolidType::Octahedron);
    viewer.toggle(SolidType::Hexahedron);
    assert_eq!(viewer.scene().primitive_count(), 19 + 21);
    viewer.toggle(SolidType::Octahedron);

    assert_eq!(viewer.scene().len(), 1);
    assert_eq!(viewer.scene().primitive_count(), 21);
    assert_eq!(viewer.shown(), [SolidType::Hexahedron]);
    let (_, group) = viewer.scene().groups().next().unwrap();
    assert_eq!(group.solid(), SolidType::Hexahedron);
}

#[test]
fn reshown_solid_gets_a_fresh_handle() {
    let mut viewer = viewer();
    viewer.toggle(SolidType::Tetrahedron);
    let Visibility::Shown(first) = viewer.visibility(SolidType::Tetrahedron) else {
        panic!("tetrahedron should be shown");
    };
    viewer.toggle(SolidType::Tetrahedron);
    viewer.toggle(SolidType::Tetrahedron);
    let Visibility::Shown(second) = viewer.visibility(SolidType::Tetrahedron) else {
        panic!("tetrahedron should be shown");
    };
    assert_ne!(first, second);
    assert!(!viewer.scene().contains(first));
    assert_eq!(viewer.group(SolidType::Tetrahedron).unwrap().len(), 12);
}

#[test]
fn panel_changes_apply_on_next_frame() {
    let mut viewer = viewer();
    viewer.panel_mut().set(SolidType::Dodecahedron, true);
    viewer.panel_mut().set_by_label("octahedron", true).unwrap();
    assert!(viewer.scene().is_empty());

    viewer.frame();
    assert_eq!(viewer.shown(), [SolidType::Octahedron, SolidType::Dodecahedron]);
    assert_eq!(viewer.renderer().frame_count(), 1);
    let frame = viewer.renderer().last_frame().unwrap();
    assert_eq!(
        frame.solids().collect::<Vec<_>>(),
        [SolidType::Octahedron, SolidType::Dodecahedron]
    );

    viewer.panel_mut().toggle(SolidType::Dodecahedron);
    viewer.frame();
    assert_eq!(viewer.shown(), [SolidType::Octahedron]);
    assert_eq!(viewer.scene().primitive_count(), 19);
}

#[test]
fn direct_toggle_keeps_panel_in_sync() {
    let mut viewer = viewer();
    viewer.toggle(SolidType::Hexahedron);
    assert!(viewer.panel().is_checked(SolidType::Hexahedron));
    assert!(!viewer.panel().has_pending());

    // unchecking through the panel hides it again
    viewer.panel_mut().set(SolidType::Hexahedron, false);
    viewer.frame();
    assert!(!viewer.is_shown(SolidType::Hexahedron));
}

#[test]
fn unknown_label_is_an_error() {
    let mut viewer = viewer();
    let err = viewer.panel_mut().set_by_label("cube", true).unwrap_err();
    assert!(matches!(err, ViewerError::UnknownSolid(ref s) if s == "cube"));
    assert!(err.to_string().contains("cube"));
}

#[test]
fn resize_updates_camera_and_renderer() {
    let mut viewer = viewer();
    assert!(approx_eq(viewer.camera().aspect, 1280.0 / 720.0, 1e-12));
    let before = *viewer.camera().projection_matrix();

    viewer.resize(800, 800).unwrap();
    assert!(approx_eq(viewer.camera().aspect, 1.0, 1e-12));
    assert_ne!(before, *viewer.camera().projection_matrix());
    assert_eq!(viewer.renderer().size(), (800, 800));
}

#[test]
fn zero_height_resize_is_rejected() {
    let mut viewer = viewer();
    let err = viewer.resize(800, 0).unwrap_err();
    assert!(matches!(err, ViewerError::InvalidViewport { width: 800, height: 0 }));
    assert!(approx_eq(viewer.camera().aspect, 1280.0 / 720.0, 1e-12));
    assert_eq!(viewer.renderer().size(), (1280, 720));
}

#[test]
fn trackball_keeps_looking_at_target() {
    let mut viewer = viewer();
    let distance = viewer.camera().distance_to_target();
    viewer.controls_mut().rotate(0.4, -0.2);
    viewer.frame();

    let camera = viewer.camera();
    assert_eq!(camera.target, Point3::origin());
    assert!(approx_eq(camera.distance_to_target(), distance, 1e-9));
    let in_view = camera.view_matrix().transform_point(&camera.target);
    assert!(in_view.x.abs() < 1e-9 && in_view.y.abs() < 1e-9 && in_view.z < 0.0);

    viewer.controls_mut().zoom(-0.5);
    viewer.frame();
    assert!(viewer.camera().distance_to_target() < distance);
}

#[derive(Debug, Default)]
struct CountingControls {
    updates: usize,
}

impl CameraControls for CountingControls {
    fn update(&mut self, _camera: &mut PerspectiveCamera) {
        self.updates += 1;
    }
}

#[derive(Debug, Default)]
struct RecordingRenderer {
    size: (u32, u32),
    primitives: Vec<usize>,
}

impl Renderer for RecordingRenderer {
    fn set_size(&mut self, width: u32, height: u32) {
        self.size = (width, height);
    }

    fn size(&self) -> (u32, u32) {
        self.size
    }

    fn render(&mut self, scene: &Scene, _camera: &PerspectiveCamera) {
        self.primitives.push(scene.primitive_count());
    }
}

#[test]
fn custom_parts_are_driven_once_per_frame() {
    let mut viewer = Viewer::with_parts(
        ViewerConfig::default(),
        RecordingRenderer::default(),
        CountingControls::default(),
    )
    .unwrap();
    assert_eq!(viewer.renderer().size(), (1280, 720));

    viewer.run(2);
    viewer.toggle(SolidType::Tetrahedron);
    viewer.run(1);

    assert_eq!(viewer.controls_mut().updates, 3);
    assert_eq!(viewer.renderer().primitives, [0, 0, 12]);
}

#[test]
fn rendered_frame_is_world_space() {
    let mut viewer = viewer();
    viewer.toggle(SolidType::Dodecahedron);
    viewer.frame();

    let frame = viewer.renderer().last_frame().unwrap();
    let expected = viewer.group(SolidType::Dodecahedron).unwrap().triangle_count();
    assert_eq!(frame.triangle_count(), expected);

    let renderer: &MeshRenderer = viewer.renderer();
    assert_eq!(renderer.frame_count(), 1);
}
