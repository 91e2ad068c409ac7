//! The viewer controller: owns the scene, camera, controls, panel and
//! renderer, and tracks which solids are attached.

use crate::builder::build_solid;
use crate::camera::{CameraControls, PerspectiveCamera, TrackballControls};
use crate::errors::ViewerError;
use crate::float_types::Real;
use crate::gui::ControlPanel;
use crate::renderer::{MeshRenderer, Renderer};
use crate::scene::group::RenderableGroup;
use crate::scene::material::Color;
use crate::scene::{GroupHandle, Scene};
use crate::solids::SolidType;
use hashbrown::HashMap;
use nalgebra::Point3;

/// Whether a solid is attached to the scene, and under which handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Hidden,
    Shown(GroupHandle),
}

impl Visibility {
    pub const fn is_shown(self) -> bool {
        matches!(self, Visibility::Shown(_))
    }
}

/// Canvas and camera settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    pub width: u32,
    pub height: u32,
    pub clear_color: Color,
    pub shadows: bool,
    pub fov: Real,
    pub near: Real,
    pub far: Real,
    pub camera_position: Point3<Real>,
    pub camera_target: Point3<Real>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        ViewerConfig {
            width: 1280,
            height: 720,
            clear_color: Color::from_hex(0xcbcba9),
            shadows: true,
            fov: 75.0,
            near: 0.1,
            far: 1000.0,
            camera_position: Point3::new(15.0, 15.0, 15.0),
            camera_target: Point3::origin(),
        }
    }
}

impl ViewerConfig {
    pub fn aspect(&self) -> Real {
        self.width as Real / self.height as Real
    }

    fn validate_viewport(width: u32, height: u32) -> Result<(), ViewerError> {
        if width == 0 || height == 0 {
            return Err(ViewerError::InvalidViewport { width, height });
        }
        Ok(())
    }
}

/// Interactive polyhedra viewer.
///
/// Every solid starts hidden. [`toggle`](Self::toggle) builds a fresh group
/// and attaches it, or detaches and drops the attached one. At most one group
/// per solid is ever attached.
///
/// ```
/// # use polyhedra::solids::SolidType;
/// # use polyhedra::viewer::{Viewer, ViewerConfig};
/// let mut viewer = Viewer::new(ViewerConfig::default()).unwrap();
/// viewer.toggle(SolidType::Hexahedron);
/// assert_eq!(viewer.scene().primitive_count(), 21);
/// viewer.toggle(SolidType::Hexahedron);
/// assert!(viewer.scene().is_empty());
/// ```
#[derive(Debug)]
pub struct Viewer<R: Renderer = MeshRenderer, C: CameraControls = TrackballControls> {
    scene: Scene,
    camera: PerspectiveCamera,
    controls: C,
    panel: ControlPanel,
    renderer: R,
    visibility: HashMap<SolidType, Visibility>,
}

impl Viewer {
    /// Viewer with the headless renderer and trackball controls.
    pub fn new(config: ViewerConfig) -> Result<Self, ViewerError> {
        let mut renderer = MeshRenderer::new(config.width, config.height);
        renderer.clear_color = config.clear_color;
        renderer.shadow_map_enabled = config.shadows;
        Viewer::with_parts(config, renderer, TrackballControls::new())
    }
}

impl<R: Renderer, C: CameraControls> Viewer<R, C> {
    pub fn with_parts(config: ViewerConfig, mut renderer: R, controls: C) -> Result<Self, ViewerError> {
        ViewerConfig::validate_viewport(config.width, config.height)?;

        let mut scene = Scene::new();
        scene.background = config.clear_color;

        let mut camera = PerspectiveCamera::new(config.fov, config.aspect(), config.near, config.far);
        camera.set_position(config.camera_position);
        camera.look_at(config.camera_target);

        renderer.set_size(config.width, config.height);

        let visibility = SolidType::ALL
            .into_iter()
            .map(|solid| (solid, Visibility::Hidden))
            .collect();

        log::info!("viewer ready at {}x{}", config.width, config.height);
        Ok(Viewer {
            scene,
            camera,
            controls,
            panel: ControlPanel::new(),
            renderer,
            visibility,
        })
    }

    /// Flip a solid between hidden and shown.
    pub fn toggle(&mut self, solid: SolidType) {
        let next = match self.visibility(solid) {
            Visibility::Hidden => {
                let handle = self.scene.add(build_solid(solid));
                log::info!("showing {solid}");
                Visibility::Shown(handle)
            },
            Visibility::Shown(handle) => {
                // dropping the group releases every primitive it owns
                let _detached: Option<RenderableGroup> = self.scene.remove(handle);
                log::info!("hiding {solid}");
                Visibility::Hidden
            },
        };
        self.visibility.insert(solid, next);
        self.panel.sync(solid, next.is_shown());
    }

    /// Show or hide a solid. Does nothing if it is already in that state.
    pub fn set_visible(&mut self, solid: SolidType, visible: bool) {
        if self.is_shown(solid) != visible {
            self.toggle(solid);
        }
    }

    pub fn visibility(&self, solid: SolidType) -> Visibility {
        self.visibility.get(&solid).copied().unwrap_or_default()
    }

    pub fn is_shown(&self, solid: SolidType) -> bool {
        self.visibility(solid).is_shown()
    }

    /// The attached group for `solid`, if shown.
    pub fn group(&self, solid: SolidType) -> Option<&RenderableGroup> {
        match self.visibility(solid) {
            Visibility::Shown(handle) => self.scene.get(handle),
            Visibility::Hidden => None,
        }
    }

    /// Solids currently shown, in panel order.
    pub fn shown(&self) -> Vec<SolidType> {
        SolidType::ALL
            .into_iter()
            .filter(|solid| self.is_shown(*solid))
            .collect()
    }

    pub const fn scene(&self) -> &Scene {
        &self.scene
    }

    pub const fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    pub fn controls_mut(&mut self) -> &mut C {
        &mut self.controls
    }

    pub const fn panel(&self) -> &ControlPanel {
        &self.panel
    }

    pub fn panel_mut(&mut self) -> &mut ControlPanel {
        &mut self.panel
    }

    pub const fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Match the camera and renderer to a new canvas size.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), ViewerError> {
        ViewerConfig::validate_viewport(width, height)?;
        self.camera.set_aspect(width as Real / height as Real);
        self.camera.update_projection();
        self.renderer.set_size(width, height);
        log::debug!("resized to {width}x{height}");
        Ok(())
    }

    /// One animation step: apply panel changes, update the camera, render.
    pub fn frame(&mut self) {
        for event in self.panel.drain_events() {
            self.set_visible(event.solid, event.value);
        }
        self.controls.update(&mut self.camera);
        self.renderer.render(&self.scene, &self.camera);
    }

    /// Run `frames` animation steps.
    pub fn run(&mut self, frames: usize) {
        for _ in 0..frames {
            self.frame();
        }
    }
}
