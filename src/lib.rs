//! Procedural **polyhedron wireframes** in a toggleable, camera-controlled scene.
//!
//! Each of four solids (hexahedron, octahedron, tetrahedron, dodecahedron) is
//! built from a vertex table and an edge table: a small sphere at every vertex
//! and a cylinder along every edge, collected in one [`RenderableGroup`]. A
//! [`Viewer`] attaches and detaches those groups as the user flips checkboxes,
//! drives a trackball camera, and hands the scene to a [`Renderer`].
//!
//! The bundled [`MeshRenderer`](renderer::MeshRenderer) is headless: it
//! tessellates every attached group into world-space triangles, which the
//! [`io`] module writes out as STL or AMF.
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - [**stl-io**](https://en.wikipedia.org/wiki/STL_(file_format)): `.stl` export
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon to tessellate group children in parallel

#![forbid(unsafe_code)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod builder;
pub mod camera;
pub mod errors;
pub mod float_types;
pub mod gui;
pub mod io;
pub mod mesh;
pub mod renderer;
pub mod scene;
pub mod solids;
pub mod traits;
pub mod triangulated;
pub mod viewer;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use builder::build_solid;
pub use errors::ViewerError;
pub use renderer::Renderer;
pub use scene::group::RenderableGroup;
pub use scene::{GroupHandle, Scene};
pub use solids::SolidType;
pub use viewer::{Viewer, ViewerConfig, Visibility};
