use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use polyhedra::io;
use polyhedra::renderer::Frame;
use polyhedra::{SolidType, Viewer, ViewerConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Stl,
    Amf,
}

/// Build polyhedron wireframes, run the viewer headless and write the last frame.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Command {
    /// Solid to switch on before the first frame; repeat for more
    #[arg(long = "show", value_parser = parse_solid)]
    show: Vec<SolidType>,

    /// Number of frames to run
    #[arg(long, default_value_t = 1)]
    frames: usize,

    #[arg(long, default_value_t = 1280)]
    width: u32,

    #[arg(long, default_value_t = 720)]
    height: u32,

    /// Where the snapshot is written
    #[arg(long, default_value = "stl")]
    out_dir: PathBuf,

    #[arg(long, value_enum, default_value_t = Format::Stl)]
    format: Format,

    /// File stem of the snapshot
    #[arg(long, default_value = "polyhedra")]
    name: String,
}

fn parse_solid(s: &str) -> Result<SolidType, String> {
    s.parse().map_err(|e: polyhedra::ViewerError| e.to_string())
}

fn write_frame(frame: &Frame, command: &Command) -> Result<PathBuf, anyhow::Error> {
    fs::create_dir_all(&command.out_dir)
        .with_context(|| format!("creating {}", command.out_dir.display()))?;

    let (extension, bytes) = match command.format {
        #[cfg(feature = "stl-io")]
        Format::Stl => ("stl", io::to_stl_binary(frame)?),
        #[cfg(not(feature = "stl-io"))]
        Format::Stl => anyhow::bail!("STL export needs the stl-io feature"),
        Format::Amf => ("amf", io::to_amf_frame(frame, "millimeter").into_bytes()),
    };

    let path = command.out_dir.join(format!("{}.{extension}", command.name));
    fs::write(&path, bytes).with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn main() -> Result<(), anyhow::Error> {
    env_logger::init();
    let command = Command::parse();

    let config = ViewerConfig {
        width: command.width,
        height: command.height,
        ..ViewerConfig::default()
    };
    let mut viewer = Viewer::new(config)?;

    // route through the panel, as clicks would
    for solid in &command.show {
        viewer.panel_mut().set(*solid, true);
    }
    viewer.run(command.frames);

    match viewer.renderer().last_frame() {
        Some(frame) => {
            let path = write_frame(frame, &command)?;
            log::info!(
                "wrote {} ({} triangles, {} solids)",
                path.display(),
                polyhedra::triangulated::Triangulated3D::triangle_count(frame),
                frame.meshes.len()
            );
        },
        None => log::warn!("no frame rendered, nothing written"),
    }
    Ok(())
}
