use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};
use wire::app::Viewer;
use wire::config::ViewerConfig;
use wire::frame::FrameState;
use wire::mesh::Mesh;

mod sdl_window;

const USAGE: &str = "Usage: viewer file.obj";

const EXIT_USAGE: u8 = 1;
const EXIT_MESH: u8 = 2;
const EXIT_WINDOW: u8 = 3;

#[derive(Parser, Debug)]
#[command(name = "viewer", disable_help_flag = true, disable_version_flag = true)]
struct Args {
    /// Wavefront OBJ file to display
    #[arg(allow_hyphen_values = true)]
    path: PathBuf,
}

fn init_tracing() {
    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);
    let filter_layer = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if cfg!(debug_assertions) { "debug" } else { "info" }));
    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}

pub fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(_) => {
            println!("{}", USAGE);
            return ExitCode::from(EXIT_USAGE);
        }
    };
    init_tracing();

    let config = ViewerConfig::default();

    let mesh = match Mesh::load(&args.path) {
        Ok(mesh) => mesh,
        Err(e) => {
            tracing::error!("{}", e);
            return ExitCode::from(EXIT_MESH);
        }
    };
    tracing::info!(
        path = %args.path.display(),
        vertices = mesh.vertices.len(),
        faces = mesh.faces.len(),
        "mesh loaded"
    );

    let mut window = match sdl_window::SdlWindow::new(&config) {
        Ok(window) => window,
        Err(e) => {
            tracing::error!("{}", e);
            return ExitCode::from(EXIT_WINDOW);
        }
    };

    let mut viewer = Viewer::new(mesh, &config);
    let mut state = FrameState::default();
    if let Err(e) = viewer.run(&mut state, &mut window) {
        tracing::error!("{}", e);
        return ExitCode::from(EXIT_WINDOW);
    }
    ExitCode::SUCCESS
}
