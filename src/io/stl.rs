use crate::errors::ViewerError;
use crate::mesh::facet_normal;
use crate::triangulated::Triangulated3D;
use std::fmt::Write as _;
use std::io::{Cursor, Write};

/// Export any triangulated shape as an **ASCII STL** string named `name`.
///
/// Facet normals are computed from the triangle winding.
///
/// ```rust
/// # use polyhedra::builder::build_solid;
/// # use polyhedra::io::to_stl_ascii;
/// # use polyhedra::solids::SolidType;
/// let cube = build_solid(SolidType::Hexahedron);
/// let stl = to_stl_ascii(&cube, "hexahedron");
/// assert!(stl.starts_with("solid hexahedron"));
/// ```
pub fn to_stl_ascii<T: Triangulated3D>(shape: &T, name: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "solid {name}");

    shape.visit_triangles(|tri| {
        let n = facet_normal(&tri);
        let _ = writeln!(out, "  facet normal {:.6} {:.6} {:.6}", n.x, n.y, n.z);
        out.push_str("    outer loop\n");
        for v in &tri {
            let _ = writeln!(out, "      vertex {:.6} {:.6} {:.6}", v.pos.x, v.pos.y, v.pos.z);
        }
        out.push_str("    endloop\n");
        out.push_str("  endfacet\n");
    });

    let _ = writeln!(out, "endsolid {name}");
    out
}

/// Export any triangulated shape as a **binary STL** byte vector.
///
/// Binary STL has no room for a name, so only the triangles are written.
pub fn to_stl_binary<T: Triangulated3D>(shape: &T) -> Result<Vec<u8>, ViewerError> {
    let mut cursor = Cursor::new(Vec::new());
    write_stl_binary(shape, &mut cursor)?;
    Ok(cursor.into_inner())
}

/// Stream any triangulated shape as binary STL into `writer`.
pub fn write_stl_binary<T: Triangulated3D, W: Write>(shape: &T, writer: &mut W) -> Result<(), ViewerError> {
    use stl_io::{Normal, Triangle, Vertex, write_stl};

    let mut triangles = Vec::<Triangle>::new();

    shape.visit_triangles(|tri| {
        let n = facet_normal(&tri);
        #[allow(clippy::unnecessary_cast)]
        triangles.push(Triangle {
            normal: Normal::new([n.x as f32, n.y as f32, n.z as f32]),
            vertices: tri.map(|v| Vertex::new([v.pos.x as f32, v.pos.y as f32, v.pos.z as f32])),
        });
    });

    write_stl(writer, triangles.iter())?;
    Ok(())
}
