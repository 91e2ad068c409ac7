//! Colors and the diffuse material every primitive is drawn with.

use crate::float_types::Real;
use std::fmt::{self, Display};

/// 24-bit RGB color, `0xRRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(u32);

impl Color {
    pub const WHITE: Color = Color(0xffffff);
    pub const BLACK: Color = Color(0x000000);

    /// Bits above the low 24 are discarded.
    pub const fn from_hex(hex: u32) -> Self {
        Color(hex & 0x00ff_ffff)
    }

    pub const fn r(self) -> u8 {
        ((self.0 >> 16) & 0xff) as u8
    }

    pub const fn g(self) -> u8 {
        ((self.0 >> 8) & 0xff) as u8
    }

    pub const fn b(self) -> u8 {
        (self.0 & 0xff) as u8
    }

    /// Components in `[0, 1]`.
    pub fn to_unit_rgb(self) -> (Real, Real, Real) {
        (
            self.r() as Real / 255.0,
            self.g() as Real / 255.0,
            self.b() as Real / 255.0,
        )
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

/// Diffuse, non-reflective (Lambertian) surface material.
#[derive(Debug, Clone, PartialEq)]
pub struct LambertMaterial {
    pub color: Color,
}

impl LambertMaterial {
    pub const fn new(color: Color) -> Self {
        LambertMaterial { color }
    }
}
