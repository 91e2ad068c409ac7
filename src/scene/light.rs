//! Lights and the ground grid. These are scene decoration: they are carried
//! to the renderer as data and do not interact with solid geometry.

use crate::float_types::Real;
use crate::scene::material::Color;
use nalgebra::Point3;

#[derive(Debug, Clone, PartialEq)]
pub struct SpotLight {
    pub color: Color,
    pub intensity: Real,
    pub position: Point3<Real>,
    pub target: Point3<Real>,
    pub cast_shadow: bool,
}

impl SpotLight {
    /// White, full intensity, aimed at the origin.
    pub fn new(color: Color, position: Point3<Real>) -> Self {
        SpotLight {
            color,
            intensity: 1.0,
            position,
            target: Point3::origin(),
            cast_shadow: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AmbientLight {
    pub color: Color,
    pub intensity: Real,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Light {
    Spot(SpotLight),
    Ambient(AmbientLight),
}

impl Light {
    pub const fn color(&self) -> Color {
        match self {
            Light::Spot(spot) => spot.color,
            Light::Ambient(ambient) => ambient.color,
        }
    }
}

/// Square grid in the XZ plane, centered at the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct GridHelper {
    pub size: Real,
    pub divisions: usize,
    pub center_color: Color,
    pub grid_color: Color,
}

impl GridHelper {
    pub const fn new(size: Real, divisions: usize) -> Self {
        GridHelper {
            size,
            divisions,
            center_color: Color::from_hex(0x444444),
            grid_color: Color::from_hex(0x888888),
        }
    }

    /// Line segments with their color: `divisions + 1` lines parallel to X and
    /// as many parallel to Z. The middle pair uses `center_color`.
    pub fn lines(&self) -> Vec<(Point3<Real>, Point3<Real>, Color)> {
        let half = self.size / 2.0;
        let step = self.size / self.divisions.max(1) as Real;
        let center = self.divisions / 2;

        let mut lines = Vec::with_capacity(2 * (self.divisions + 1));
        for i in 0..=self.divisions {
            let k = -half + i as Real * step;
            let color = if i == center {
                self.center_color
            } else {
                self.grid_color
            };
            lines.push((Point3::new(-half, 0.0, k), Point3::new(half, 0.0, k), color));
            lines.push((Point3::new(k, 0.0, -half), Point3::new(k, 0.0, half), color));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_line_count_and_extent() {
        let grid = GridHelper::new(50.0, 50);
        let lines = grid.lines();
        assert_eq!(lines.len(), 102);
        for (a, b, _) in &lines {
            assert_eq!(a.y, 0.0);
            assert!(((b - a).norm() - 50.0).abs() < 1e-9);
            assert!(a.x.abs() <= 25.0 + 1e-9 && a.z.abs() <= 25.0 + 1e-9);
        }
        let centered: Vec<_> = lines
            .iter()
            .filter(|(_, _, c)| *c == grid.center_color)
            .collect();
        assert_eq!(centered.len(), 2);
        assert!(centered.iter().all(|(a, b, _)| (a.x + b.x).abs() < 1e-9 && (a.z + b.z).abs() < 1e-9));
    }
}
