#![cfg(feature = "stl-io")]

use polyhedra::{
    SolidType, Viewer, ViewerConfig, ViewerError, build_solid,
    io::{to_stl_ascii, to_stl_binary, write_stl_binary},
    triangulated::Triangulated3D,
};

#[test]
fn group_to_stl_ascii() {
    let tetra = build_solid(SolidType::Tetrahedron);
    let stl = to_stl_ascii(&tetra, "tetrahedron");
    assert!(stl.starts_with("solid tetrahedron\n"));
    assert!(stl.trim_end().ends_with("endsolid tetrahedron"));
    assert_eq!(stl.matches("facet normal").count(), tetra.triangle_count());
    assert_eq!(stl.matches("      vertex ").count(), 3 * tetra.triangle_count());
}

#[test]
fn frame_to_stl_binary() -> Result<(), Box<dyn std::error::Error>> {
    let mut viewer = Viewer::new(ViewerConfig::default())?;
    viewer.toggle(SolidType::Hexahedron);
    viewer.toggle(SolidType::Octahedron);
    viewer.frame();
    let frame = viewer.renderer().last_frame().unwrap();

    let bytes = to_stl_binary(frame)?;
    let triangles = frame.triangle_count();
    // 80-byte header, u32 count, 50 bytes per triangle
    assert_eq!(bytes.len(), 84 + 50 * triangles);
    let count = u32::from_le_bytes([bytes[80], bytes[81], bytes[82], bytes[83]]);
    assert_eq!(count as usize, triangles);

    let mut reader = std::io::Cursor::new(bytes);
    let mesh = stl_io::read_stl(&mut reader)?;
    assert_eq!(mesh.faces.len(), triangles);
    Ok(())
}

#[test]
fn empty_scene_writes_empty_stl() -> Result<(), Box<dyn std::error::Error>> {
    let mut viewer = Viewer::new(ViewerConfig::default())?;
    viewer.frame();
    let frame = viewer.renderer().last_frame().unwrap();
    assert_eq!(to_stl_binary(frame)?.len(), 84);
    assert_eq!(to_stl_ascii(frame, "empty"), "solid empty\nendsolid empty\n");
    Ok(())
}

struct ClosedPipe;

impl std::io::Write for ClosedPipe {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::from(std::io::ErrorKind::BrokenPipe))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn binary_write_failure_is_an_io_error() {
    let cube = build_solid(SolidType::Hexahedron);
    let err = write_stl_binary(&cube, &mut ClosedPipe).unwrap_err();
    assert!(matches!(err, ViewerError::Io(ref e) if e.kind() == std::io::ErrorKind::BrokenPipe));
}
