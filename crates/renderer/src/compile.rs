use std::borrow::Cow;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::types::ShaderPair;

/// WGSL sources for one program, fragment already wrapped.
#[derive(Debug, Clone)]
pub(crate) struct ShaderSources {
    pub vertex: String,
    pub fragment: String,
}

/// Reads both stages from disk and prepends `prelude` to the fragment stage.
pub(crate) fn load_shader_sources(pair: &ShaderPair, prelude: &str) -> Result<ShaderSources> {
    let vertex = read_stage(&pair.vertex)?;
    let fragment = read_stage(&pair.fragment)?;
    Ok(ShaderSources {
        vertex,
        fragment: wrap_fragment(prelude, &fragment),
    })
}

fn read_stage(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read shader at {}", path.display()))
}

/// Produces the fragment module source: the application's uniform block
/// declarations first, then the user shader untouched.
///
/// A leading `enable` directive must stay the first statement in WGSL, so it
/// is hoisted above the prelude.
pub(crate) fn wrap_fragment(prelude: &str, source: &str) -> String {
    let mut directives = String::new();
    let mut body = String::new();
    for line in source.lines() {
        if line.trim_start().starts_with("enable ") {
            directives.push_str(line);
            directives.push('\n');
        } else {
            body.push_str(line);
            body.push('\n');
        }
    }

    format!("{directives}{prelude}\n{body}")
}

/// Creates a shader module. Parse and validation errors are reported through
/// the device error scope active at the call site.
pub(crate) fn compile_module(device: &wgpu::Device, label: &str, source: String) -> wgpu::ShaderModule {
    device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(label),
        source: wgpu::ShaderSource::Wgsl(Cow::Owned(source)),
    })
}
