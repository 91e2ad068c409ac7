//! The scene graph: an arena of attached groups plus lights, grid and background.

use crate::mesh::vertex::Vertex;
use crate::scene::group::RenderableGroup;
use crate::scene::light::{AmbientLight, GridHelper, Light, SpotLight};
use crate::scene::material::Color;
use crate::triangulated::Triangulated3D;
use nalgebra::Point3;
use slotmap::SlotMap;

pub mod group;
pub mod light;
pub mod material;
pub mod primitive;

slotmap::new_key_type! {
    /// Handle to a group attached to a [`Scene`]. Handles are generational:
    /// one that was removed never refers to a later group.
    pub struct GroupHandle;
}

/// Central arena that owns every attached group.
#[derive(Debug)]
pub struct Scene {
    groups: SlotMap<GroupHandle, RenderableGroup>,
    pub background: Color,
    pub grid: GridHelper,
    pub lights: Vec<Light>,
}

impl Default for Scene {
    /// Grid 50 x 50, a white shadow-casting spot light at (50, 50, 50) and a
    /// dim ambient light, on a pale olive background.
    fn default() -> Self {
        let mut spot = SpotLight::new(Color::WHITE, Point3::new(50.0, 50.0, 50.0));
        spot.cast_shadow = true;
        Scene {
            groups: SlotMap::with_key(),
            background: Color::from_hex(0xcbcba9),
            grid: GridHelper::new(50.0, 50),
            lights: vec![
                Light::Spot(spot),
                Light::Ambient(AmbientLight {
                    color: Color::from_hex(0x242424),
                    intensity: 1.0,
                }),
            ],
        }
    }
}

impl Scene {
    /// Creates the default scene with no groups attached.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a group; the scene takes ownership.
    pub fn add(&mut self, group: RenderableGroup) -> GroupHandle {
        self.groups.insert(group)
    }

    /// Detach a group, handing it back. `None` if the handle is stale.
    pub fn remove(&mut self, handle: GroupHandle) -> Option<RenderableGroup> {
        self.groups.remove(handle)
    }

    pub fn get(&self, handle: GroupHandle) -> Option<&RenderableGroup> {
        self.groups.get(handle)
    }

    pub fn contains(&self, handle: GroupHandle) -> bool {
        self.groups.contains_key(handle)
    }

    pub fn groups(&self) -> impl Iterator<Item = (GroupHandle, &RenderableGroup)> {
        self.groups.iter()
    }

    /// Number of attached groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total primitives across every attached group.
    pub fn primitive_count(&self) -> usize {
        self.groups.values().map(RenderableGroup::len).sum()
    }
}

impl Triangulated3D for Scene {
    fn visit_triangles<F>(&self, mut f: F)
    where
        F: FnMut([Vertex; 3]),
    {
        for group in self.groups.values() {
            group.visit_triangles(&mut f);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build_solid;
    use crate::solids::SolidType;

    #[test]
    fn stale_handles_do_not_alias() {
        let mut scene = Scene::new();
        let first = scene.add(build_solid(SolidType::Tetrahedron));
        assert!(scene.remove(first).is_some());
        let second = scene.add(build_solid(SolidType::Tetrahedron));
        assert_ne!(first, second);
        assert!(!scene.contains(first));
        assert!(scene.remove(first).is_none());
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn default_decorations() {
        let scene = Scene::default();
        assert_eq!(scene.background, Color::from_hex(0xcbcba9));
        assert_eq!(scene.lights.len(), 2);
        assert!(matches!(&scene.lights[0], Light::Spot(s) if s.cast_shadow));
        assert_eq!(scene.lights[1].color(), Color::from_hex(0x242424));
        assert!(scene.is_empty());
        assert_eq!(scene.primitive_count(), 0);
    }
}
