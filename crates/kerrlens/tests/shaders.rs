use std::fs;
use std::path::PathBuf;

fn shader(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("shaders")
        .join(name);
    fs::read_to_string(&path).unwrap_or_else(|err| panic!("{}: {err}", path.display()))
}

#[test]
fn vertex_stage_matches_quad_layout() {
    let source = shader("kerr.vert.wgsl");
    assert!(source.contains("fn vs_main"));
    assert!(source.contains("@location(0) position: vec2<f32>"));
    assert!(source.contains("@location(1) uv: vec2<f32>"));
}

#[test]
fn fragment_stage_relies_on_injected_uniform_block() {
    let source = shader("kerr.frag.wgsl");
    assert!(source.contains("fn fs_main"));
    assert!(source.contains("lens.spin"));
    assert!(source.contains("lens.show_stars"));
    assert!(!source.contains("struct LensUniforms"));
    assert!(!source.contains("var<uniform>"));
}
