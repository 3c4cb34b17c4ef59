use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use renderer::GpuPowerPreference;

const CONTROLS_HELP: &str = "\
Controls:
  Left drag      change inclination
  Scroll wheel   zoom in/out
  W / S          move camera closer/farther
  Esc            exit";

#[derive(Parser, Debug)]
#[command(
    name = "kerrlens",
    author,
    version,
    about = "Interactive Kerr black hole gravitational lensing viewer",
    after_help = CONTROLS_HELP
)]
pub struct Cli {
    /// Initial window size (e.g. `1920x1080`).
    #[arg(long, value_name = "WIDTHxHEIGHT", default_value = "1280x720")]
    pub size: String,

    /// Directory holding `kerr.vert.wgsl` and `kerr.frag.wgsl`.
    #[arg(
        long,
        value_name = "DIR",
        env = "KERRLENS_SHADER_DIR",
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/shaders")
    )]
    pub shader_dir: PathBuf,

    /// Adapter power preference (`low` or `high`).
    #[arg(long, value_name = "low|high", default_value_t = GpuPowerPreference::High, value_parser = parse_power)]
    pub gpu_power: GpuPowerPreference,
}

pub fn parse() -> Cli {
    Cli::parse()
}

fn parse_power(value: &str) -> Result<GpuPowerPreference, String> {
    value.parse()
}

pub fn parse_surface_size(spec: &str) -> Result<(u32, u32)> {
    let trimmed = spec.trim();
    let (width, height) = trimmed
        .split_once(['x', 'X', '×'])
        .ok_or_else(|| anyhow::anyhow!("expected WxH format, e.g. 1280x720"))?;
    let width: u32 = width
        .trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid width in size specification"))?;
    let height: u32 = height
        .trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid height in size specification"))?;
    if width == 0 || height == 0 {
        anyhow::bail!("window dimensions must be greater than zero");
    }
    Ok((width, height))
}
