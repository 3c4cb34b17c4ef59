use std::path::PathBuf;

/// Vertex and fragment shader files making up the external program.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShaderPair {
    pub vertex: PathBuf,
    pub fragment: PathBuf,
}

impl ShaderPair {
    /// Resolves `<dir>/<stem>.vert.wgsl` and `<dir>/<stem>.frag.wgsl`.
    pub fn in_dir(dir: impl Into<PathBuf>, stem: &str) -> Self {
        let dir = dir.into();
        Self {
            vertex: dir.join(format!("{stem}.vert.wgsl")),
            fragment: dir.join(format!("{stem}.frag.wgsl")),
        }
    }
}

/// GPU adapter preference forwarded to `wgpu`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GpuPowerPreference {
    Low,
    #[default]
    High,
}

impl GpuPowerPreference {
    pub(crate) fn to_wgpu(self) -> wgpu::PowerPreference {
        match self {
            GpuPowerPreference::Low => wgpu::PowerPreference::LowPower,
            GpuPowerPreference::High => wgpu::PowerPreference::HighPerformance,
        }
    }
}

impl std::fmt::Display for GpuPowerPreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GpuPowerPreference::Low => f.write_str("low"),
            GpuPowerPreference::High => f.write_str("high"),
        }
    }
}

impl std::str::FromStr for GpuPowerPreference {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "high" => Ok(Self::High),
            other => Err(format!("unknown GPU power preference '{other}' (expected low or high)")),
        }
    }
}

/// Immutable configuration passed to the renderer at start-up.
#[derive(Clone, Debug)]
pub struct RendererConfig {
    /// Window title.
    pub title: String,
    /// Initial window size in physical pixels.
    pub surface_size: (u32, u32),
    /// Shader files compiled once at start-up.
    pub shaders: ShaderPair,
    /// WGSL declarations prepended to the fragment source, normally the
    /// uniform block matching [`crate::Application::Uniforms`].
    pub fragment_prelude: String,
    /// Adapter preference.
    pub power: GpuPowerPreference,
}
