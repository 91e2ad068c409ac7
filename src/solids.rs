//! Vertex and edge tables for the four polyhedra.
//!
//! Each solid is pure data: a color, a size constant, its vertex coordinates,
//! the list of vertex-index pairs to connect, and an optional uniform scale
//! applied to the assembled group. A single builder (`builder::build_solid`)
//! turns any descriptor into a renderable group.
//!
//! The edge lists are reproduced exactly as drawn, including repeated pairs.

use crate::errors::ViewerError;
use crate::float_types::Real;
use crate::scene::material::Color;
use nalgebra::Point3;
use std::fmt::{self, Display};
use std::str::FromStr;

/// One of the four solids the viewer can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SolidType {
    Hexahedron,
    Octahedron,
    Tetrahedron,
    Dodecahedron,
}

impl SolidType {
    /// All solids, in control-panel order.
    pub const ALL: [SolidType; 4] = [
        SolidType::Hexahedron,
        SolidType::Octahedron,
        SolidType::Tetrahedron,
        SolidType::Dodecahedron,
    ];

    /// Label shown next to the checkbox.
    pub const fn label(self) -> &'static str {
        match self {
            SolidType::Hexahedron => "Hexahedron",
            SolidType::Octahedron => "Octahedron",
            SolidType::Tetrahedron => "Tetrahedron",
            SolidType::Dodecahedron => "Dodecahedron",
        }
    }

    pub fn descriptor(self) -> SolidDescriptor {
        match self {
            SolidType::Hexahedron => hexahedron(),
            SolidType::Octahedron => octahedron(),
            SolidType::Tetrahedron => tetrahedron(),
            SolidType::Dodecahedron => dodecahedron(),
        }
    }
}

impl Display for SolidType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SolidType {
    type Err = ViewerError;

    /// Case-insensitive match on the label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        SolidType::ALL
            .into_iter()
            .find(|solid| solid.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ViewerError::UnknownSolid(s.to_string()))
    }
}

/// Everything needed to build one solid.
#[derive(Debug, Clone, PartialEq)]
pub struct SolidDescriptor {
    pub solid: SolidType,
    pub color: Color,
    /// The size constant the coordinates were derived from.
    pub size: Real,
    pub vertices: Vec<Point3<Real>>,
    /// Ordered vertex-index pairs; repeats are kept.
    pub edges: &'static [(usize, usize)],
    /// Uniform scale applied to the whole assembled group.
    pub post_scale: Option<Real>,
}

impl SolidDescriptor {
    /// Endpoints of edge `index`.
    pub fn edge_points(&self, index: usize) -> Option<(Point3<Real>, Point3<Real>)> {
        let &(i, j) = self.edges.get(index)?;
        Some((*self.vertices.get(i)?, *self.vertices.get(j)?))
    }
}

pub const HEXAHEDRON_COLOR: Color = Color::from_hex(0xff0000);
pub const HEXAHEDRON_SIZE: Real = 3.33;

const HEXAHEDRON_EDGES: [(usize, usize); 12] = [
    // bottom face loop
    (0, 1),
    (1, 3),
    (2, 0),
    (3, 2),
    // verticals
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
    // top face loop
    (4, 5),
    (4, 6),
    (5, 7),
    (6, 7),
];

fn hexahedron() -> SolidDescriptor {
    let s = HEXAHEDRON_SIZE;
    SolidDescriptor {
        solid: SolidType::Hexahedron,
        color: HEXAHEDRON_COLOR,
        size: s,
        vertices: vec![
            Point3::new(-s, -s, s),
            Point3::new(s, -s, s),
            Point3::new(-s, -s, -s),
            Point3::new(s, -s, -s),
            Point3::new(-s, s, s),
            Point3::new(s, s, s),
            Point3::new(-s, s, -s),
            Point3::new(s, s, -s),
        ],
        edges: &HEXAHEDRON_EDGES,
        post_scale: None,
    }
}

pub const OCTAHEDRON_COLOR: Color = Color::from_hex(0x065535);
pub const OCTAHEDRON_SIZE: Real = 10.0;

// (0, 2) appears twice and the equatorial pair (3, 1) is not drawn.
const OCTAHEDRON_EDGES: [(usize, usize); 12] = [
    (0, 2),
    (2, 1),
    (0, 3),
    (0, 2),
    // to the +Y apex
    (0, 4),
    (1, 4),
    (2, 4),
    (3, 4),
    // to the -Y apex
    (0, 5),
    (1, 5),
    (2, 5),
    (3, 5),
];

fn octahedron() -> SolidDescriptor {
    let s = OCTAHEDRON_SIZE;
    SolidDescriptor {
        solid: SolidType::Octahedron,
        color: OCTAHEDRON_COLOR,
        size: s,
        vertices: vec![
            Point3::new(0.0, 0.0, -s),
            Point3::new(0.0, 0.0, s),
            Point3::new(s, 0.0, 0.0),
            Point3::new(-s, 0.0, 0.0),
            Point3::new(0.0, s, 0.0),
            Point3::new(0.0, -s, 0.0),
        ],
        edges: &OCTAHEDRON_EDGES,
        post_scale: None,
    }
}

pub const TETRAHEDRON_COLOR: Color = Color::from_hex(0xffd700);
pub const TETRAHEDRON_SIZE: Real = 10.0;

// (2, 1) appears twice.
const TETRAHEDRON_EDGES: [(usize, usize); 7] = [
    (2, 3),
    (2, 1),
    (3, 1),
    (2, 0),
    (3, 0),
    (2, 1),
    (1, 0),
];

fn tetrahedron() -> SolidDescriptor {
    let s = TETRAHEDRON_SIZE;
    SolidDescriptor {
        solid: SolidType::Tetrahedron,
        color: TETRAHEDRON_COLOR,
        size: s,
        // alternating corners of the cube of half-side `s`
        vertices: vec![
            Point3::new(-s, s, s),
            Point3::new(s, s, -s),
            Point3::new(s, -s, s),
            Point3::new(-s, -s, -s),
        ],
        edges: &TETRAHEDRON_EDGES,
        post_scale: None,
    }
}

pub const DODECAHEDRON_COLOR: Color = Color::from_hex(0x333333);
pub const DODECAHEDRON_SIZE: Real = 17.0;
pub const DODECAHEDRON_K1: Real = 0.3;
pub const DODECAHEDRON_K2: Real = 0.58;
pub const DODECAHEDRON_SCALE: Real = 1.014;

// (6, 8) is listed twice; (13, 19) also comes back reversed as (19, 13).
const DODECAHEDRON_EDGES: [(usize, usize); 32] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 4),
    (4, 0),
    (2, 6),
    (6, 8),
    (6, 8),
    (8, 5),
    (5, 3),
    (9, 6),
    (9, 7),
    (9, 10),
    (10, 1),
    (12, 0),
    (11, 12),
    (11, 10),
    (13, 14),
    (13, 18),
    (13, 19),
    (18, 15),
    (19, 16),
    (19, 13),
    (4, 16),
    (15, 16),
    (11, 17),
    (17, 18),
    (17, 7),
    (7, 14),
    (14, 8),
    (15, 12),
    (19, 5),
];

fn dodecahedron() -> SolidDescriptor {
    let s = DODECAHEDRON_SIZE;
    let a = DODECAHEDRON_K1 * s;
    let b = DODECAHEDRON_K2 * s;
    SolidDescriptor {
        solid: SolidType::Dodecahedron,
        color: DODECAHEDRON_COLOR,
        size: s,
        vertices: vec![
            Point3::new(a, s, 0.0),
            Point3::new(-a, s, 0.0),
            Point3::new(-b, b, b),
            Point3::new(0.0, a, s),
            Point3::new(b, b, b),
            Point3::new(0.0, -a, s),
            Point3::new(-s, 0.0, a),
            Point3::new(-b, -b, -b),
            Point3::new(-b, -b, b),
            Point3::new(-s, 0.0, -a),
            Point3::new(-b, b, -b),
            Point3::new(0.0, a, -s),
            Point3::new(b, b, -b),
            Point3::new(a, -s, 0.0),
            Point3::new(-a, -s, 0.0),
            Point3::new(s, 0.0, -a),
            Point3::new(s, 0.0, a),
            Point3::new(0.0, -a, -s),
            Point3::new(b, -b, -b),
            Point3::new(b, -b, b),
        ],
        edges: &DODECAHEDRON_EDGES,
        post_scale: Some(DODECAHEDRON_SCALE),
    }
}
