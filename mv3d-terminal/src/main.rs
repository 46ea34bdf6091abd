//! MV3D Terminal Viewer
//!
//! Opens an `.obj` mesh (or a demo cube) as an ASCII wireframe.
//! Controls:
//!   - W/S, A/D, E/R: Rotate around X, Y, Z
//!   - +/-: Scale
//!   - Arrow Keys, PageUp/PageDown: Move along X/Y, Z
//!   - P: Toggle parallel/central projection
//!   - O: Open another .obj file (type the path, Enter to load)
//!   - V/L: Cycle vertex and line styles
//!   - Q/ESC: Quit
use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use mv3d_core::{GeometryBuffer, Session};
use mv3d_terminal::{Args, TerminalApp, ViewerConfig};

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = ViewerConfig::from(&args);

    let session = if args.path.is_some() {
        Session::new()
    } else {
        info!("no mesh given, showing the demo cube");
        Session::from_geometry(GeometryBuffer::cube(2.0))
    };

    let mut app = TerminalApp::new(session, config).context("failed to query terminal size")?;
    if let Some(path) = args.path {
        // Errors land on the status row, not in a process exit
        app.load(path);
    }
    info!(
        "{} vertices, edge count {}",
        app.session().vertex_count(),
        app.session().edge_count()
    );
    app.run().context("terminal viewer failed")?;

    Ok(())
}
