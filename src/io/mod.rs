//! Export of tessellated solids.
//!
//! STL output needs the `stl-io` feature. AMF output is plain XML and is
//! always available.

pub mod amf;

#[cfg(feature = "stl-io")]
pub mod stl;

pub use amf::{to_amf, to_amf_frame, to_amf_with_color, write_amf};

#[cfg(feature = "stl-io")]
pub use stl::{to_stl_ascii, to_stl_binary, write_stl_binary};
