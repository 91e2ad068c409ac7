//! AMF (Additive Manufacturing File Format) export.
//!
//! AMF is plain XML. Vertices are welded on a grid of [`tolerance`] cells, so
//! triangles sharing a corner share one `<vertex>` entry.

use crate::errors::ViewerError;
use crate::float_types::{Real, tolerance};
use crate::mesh::Mesh;
use crate::renderer::Frame;
use crate::scene::material::Color;
use crate::triangulated::Triangulated3D;
use hashbrown::HashMap;
use nalgebra::Point3;
use std::fmt::Write as _;
use std::io::Write;

/// Deduplicated vertex list plus index triangles.
#[derive(Debug, Default)]
struct AmfBuffers {
    vertices: Vec<Point3<Real>>,
    lookup: HashMap<(i64, i64, i64), usize>,
}

impl AmfBuffers {
    fn key(p: &Point3<Real>) -> (i64, i64, i64) {
        let cell = tolerance();
        (
            (p.x / cell).round() as i64,
            (p.y / cell).round() as i64,
            (p.z / cell).round() as i64,
        )
    }

    fn index_of(&mut self, p: Point3<Real>) -> usize {
        let key = Self::key(&p);
        if let Some(&i) = self.lookup.get(&key) {
            return i;
        }
        self.vertices.push(p);
        self.lookup.insert(key, self.vertices.len() - 1);
        self.vertices.len() - 1
    }

    fn add_shape<T: Triangulated3D>(&mut self, shape: &T) -> Vec<[usize; 3]> {
        let mut triangles = Vec::new();
        shape.visit_triangles(|tri| {
            triangles.push(tri.map(|v| self.index_of(v.pos)));
        });
        triangles
    }
}

fn header(out: &mut String, units: &str, description: &str) {
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    let _ = writeln!(out, "<amf unit=\"{units}\" version=\"1.1\">");
    out.push_str("  <metadata type=\"producer\">polyhedra</metadata>\n");
    let _ = writeln!(out, "  <metadata type=\"description\">{description}</metadata>");
}

fn material(out: &mut String, id: &str, name: &str, color: Color) {
    let (r, g, b) = color.to_unit_rgb();
    let _ = writeln!(out, "  <material id=\"{id}\">");
    let _ = writeln!(out, "    <metadata type=\"name\">{name}</metadata>");
    out.push_str("    <color>\n");
    let _ = writeln!(out, "      <r>{r:.3}</r>");
    let _ = writeln!(out, "      <g>{g:.3}</g>");
    let _ = writeln!(out, "      <b>{b:.3}</b>");
    out.push_str("      <a>1.0</a>\n");
    out.push_str("    </color>\n");
    out.push_str("  </material>\n");
}

fn vertices(out: &mut String, vertices: &[Point3<Real>]) {
    out.push_str("      <vertices>\n");
    for (i, v) in vertices.iter().enumerate() {
        let _ = writeln!(out, "        <vertex id=\"{i}\">");
        out.push_str("          <coordinates>\n");
        let _ = writeln!(out, "            <x>{:.6}</x>", v.x);
        let _ = writeln!(out, "            <y>{:.6}</y>", v.y);
        let _ = writeln!(out, "            <z>{:.6}</z>", v.z);
        out.push_str("          </coordinates>\n");
        out.push_str("        </vertex>\n");
    }
    out.push_str("      </vertices>\n");
}

fn volume(out: &mut String, material_id: Option<&str>, triangles: &[[usize; 3]]) {
    match material_id {
        Some(id) => {
            let _ = writeln!(out, "      <volume materialid=\"{id}\">");
        },
        None => out.push_str("      <volume>\n"),
    }
    for [v1, v2, v3] in triangles {
        out.push_str("        <triangle>\n");
        let _ = writeln!(out, "          <v1>{v1}</v1>");
        let _ = writeln!(out, "          <v2>{v2}</v2>");
        let _ = writeln!(out, "          <v3>{v3}</v3>");
        out.push_str("        </triangle>\n");
    }
    out.push_str("      </volume>\n");
}

fn single_object(shape: &impl Triangulated3D, object_name: &str, units: &str, color: Option<Color>) -> String {
    let mut buffers = AmfBuffers::default();
    let triangles = buffers.add_shape(shape);

    let mut out = String::new();
    header(&mut out, units, object_name);
    if let Some(color) = color {
        material(&mut out, "1", &color.to_string(), color);
    }
    let _ = writeln!(out, "  <object id=\"{object_name}\">");
    out.push_str("    <mesh>\n");
    vertices(&mut out, &buffers.vertices);
    volume(&mut out, color.map(|_| "1"), &triangles);
    out.push_str("    </mesh>\n");
    out.push_str("  </object>\n");
    out.push_str("</amf>\n");
    out
}

/// Export any triangulated shape as one uncolored AMF object.
pub fn to_amf<T: Triangulated3D>(shape: &T, object_name: &str, units: &str) -> String {
    single_object(shape, object_name, units, None)
}

/// Export any triangulated shape as one AMF object with a single material.
pub fn to_amf_with_color<T: Triangulated3D>(shape: &T, object_name: &str, units: &str, color: Color) -> String {
    single_object(shape, object_name, units, Some(color))
}

pub fn write_amf<T: Triangulated3D, W: Write>(
    shape: &T,
    writer: &mut W,
    object_name: &str,
    units: &str,
) -> Result<(), ViewerError> {
    writer.write_all(to_amf(shape, object_name, units).as_bytes())?;
    Ok(())
}

/// Split a mesh's polygons by color, falling back to the mesh color.
fn by_color(mesh: &Mesh<Color>) -> Vec<(Color, Mesh<Color>)> {
    let fallback = mesh.metadata.unwrap_or(Color::WHITE);
    let mut parts: Vec<(Color, Mesh<Color>)> = Vec::new();
    for poly in &mesh.polygons {
        let color = poly.metadata().copied().unwrap_or(fallback);
        match parts.iter_mut().find(|(c, _)| *c == color) {
            Some((_, part)) => part.polygons.push(poly.clone()),
            None => parts.push((color, Mesh::from_polygons(std::slice::from_ref(poly), Some(color)))),
        }
    }
    parts
}

/// Export a rendered frame: one `<object>` per solid, one `<material>` per
/// distinct color, and one `<volume>` per color within each object.
///
/// ```
/// # use polyhedra::io::to_amf_frame;
/// # use polyhedra::solids::SolidType;
/// # use polyhedra::viewer::{Viewer, ViewerConfig};
/// let mut viewer = Viewer::new(ViewerConfig::default()).unwrap();
/// viewer.toggle(SolidType::Tetrahedron);
/// viewer.frame();
/// let amf = to_amf_frame(viewer.renderer().last_frame().unwrap(), "millimeter");
/// assert!(amf.contains("<object id=\"Tetrahedron\">"));
/// ```
pub fn to_amf_frame(frame: &Frame, units: &str) -> String {
    let objects: Vec<_> = frame
        .meshes
        .iter()
        .map(|(solid, mesh)| (*solid, by_color(mesh)))
        .collect();

    let mut colors: Vec<Color> = Vec::new();
    for (_, parts) in &objects {
        for (color, _) in parts {
            if !colors.contains(color) {
                colors.push(*color);
            }
        }
    }

    let mut out = String::new();
    header(&mut out, units, &format!("frame {}", frame.index));
    for (i, color) in colors.iter().enumerate() {
        material(&mut out, &(i + 1).to_string(), &color.to_string(), *color);
    }

    for (solid, parts) in &objects {
        let mut buffers = AmfBuffers::default();
        let volumes: Vec<(usize, Vec<[usize; 3]>)> = parts
            .iter()
            .map(|(color, part)| {
                let id = colors.iter().position(|c| c == color).map_or(0, |i| i + 1);
                (id, buffers.add_shape(part))
            })
            .collect();

        let _ = writeln!(out, "  <object id=\"{solid}\">");
        out.push_str("    <mesh>\n");
        vertices(&mut out, &buffers.vertices);
        for (id, triangles) in &volumes {
            volume(&mut out, Some(&id.to_string()), triangles);
        }
        out.push_str("    </mesh>\n");
        out.push_str("  </object>\n");
    }

    out.push_str("</amf>\n");
    out
}
