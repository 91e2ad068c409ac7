//! Viewer errors

use std::fmt::Display;

/// Everything that can go wrong outside of geometry construction,
/// which itself is infallible.
#[derive(Debug, thiserror::Error)]
pub enum ViewerError {
    /// (InvalidViewport) The drawing surface has a zero dimension
    InvalidViewport { width: u32, height: u32 },
    /// (UnknownSolid) A label did not name any solid
    UnknownSolid(String),
    /// Writing an exported frame failed
    Io(#[from] std::io::Error),
}

impl Display for ViewerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewerError::InvalidViewport { width, height } => write!(
                f,
                "(InvalidViewport) The drawing surface must be non-empty, got {width}x{height}"
            ),
            ViewerError::UnknownSolid(label) => write!(
                f,
                "(UnknownSolid) '{label}' is not one of hexahedron, octahedron, tetrahedron, dodecahedron"
            ),
            ViewerError::Io(error) => write!(f, "std::io::Error: {error}"),
        }
    }
}
