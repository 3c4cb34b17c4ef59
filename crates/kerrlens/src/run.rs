use anyhow::{Context, Result};
use renderer::{Renderer, RendererConfig, ShaderPair};
use tracing_subscriber::EnvFilter;

use crate::app::KerrViewer;
use crate::cli::{parse_surface_size, Cli};
use crate::uniforms::UNIFORM_PRELUDE;

pub const WINDOW_TITLE: &str = "Kerr Black Hole - Gravitational Lensing";
const SHADER_STEM: &str = "kerr";

pub fn initialise_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

pub fn run(cli: Cli) -> Result<()> {
    let surface_size = parse_surface_size(&cli.size)
        .with_context(|| format!("invalid --size value '{}'", cli.size))?;
    let shaders = ShaderPair::in_dir(&cli.shader_dir, SHADER_STEM);
    tracing::debug!(
        width = surface_size.0,
        height = surface_size.1,
        vertex = %shaders.vertex.display(),
        fragment = %shaders.fragment.display(),
        power = %cli.gpu_power,
        "resolved viewer configuration"
    );

    let config = RendererConfig {
        title: WINDOW_TITLE.to_string(),
        surface_size,
        shaders,
        fragment_prelude: UNIFORM_PRELUDE.to_string(),
        power: cli.gpu_power,
    };

    log_controls();
    Renderer::new(config)
        .run(KerrViewer::default())
        .context("kerr viewer terminated with an error")
}

fn log_controls() {
    tracing::info!("Kerr black hole renderer");
    tracing::info!("controls: left drag = inclination, scroll = zoom, W/S = camera distance, Esc = exit");
}
