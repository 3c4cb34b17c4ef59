use bytemuck::{Pod, Zeroable};

use crate::params::RenderParameters;

/// WGSL declaration of [`LensUniforms`], prepended to the fragment shader.
///
/// Field order and types must stay in lockstep with the Rust struct.
pub const UNIFORM_PRELUDE: &str = "\
struct LensUniforms {
    resolution: vec2<f32>,
    spin: f32,
    inclination: f32,
    camera_dist: f32,
    exposure: f32,
    show_stars: i32,
    time: f32,
    disk_color_temp: f32,
    _pad0: f32,
    _pad1: f32,
    _pad2: f32,
};

@group(0) @binding(0)
var<uniform> lens: LensUniforms;
";

/// Per-frame uniform block. `inclination` is in radians, everything else is
/// taken from the parameter store as is.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct LensUniforms {
    pub resolution: [f32; 2],
    pub spin: f32,
    pub inclination: f32,
    pub camera_dist: f32,
    pub exposure: f32,
    pub show_stars: i32,
    pub time: f32,
    pub disk_color_temp: f32,
    _padding: [f32; 3],
}

impl LensUniforms {
    pub fn from_params(params: &RenderParameters, resolution: [f32; 2]) -> Self {
        Self {
            resolution,
            spin: params.spin(),
            inclination: degrees_to_radians(params.inclination_deg()),
            camera_dist: params.camera_distance(),
            exposure: params.exposure(),
            show_stars: i32::from(params.show_stars()),
            time: params.elapsed_time(),
            disk_color_temp: params.disk_temp_k(),
            _padding: [0.0; 3],
        }
    }
}

pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees * std::f32::consts::PI / 180.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{offset_of, size_of};

    #[test]
    fn layout_is_sixteen_byte_aligned() {
        assert_eq!(size_of::<LensUniforms>(), 48);
        assert_eq!(offset_of!(LensUniforms, spin), 8);
        assert_eq!(offset_of!(LensUniforms, inclination), 12);
        assert_eq!(offset_of!(LensUniforms, camera_dist), 16);
        assert_eq!(offset_of!(LensUniforms, exposure), 20);
        assert_eq!(offset_of!(LensUniforms, show_stars), 24);
        assert_eq!(offset_of!(LensUniforms, time), 28);
        assert_eq!(offset_of!(LensUniforms, disk_color_temp), 32);
    }

    #[test]
    fn inclination_is_converted_to_radians() {
        assert_eq!(degrees_to_radians(0.0), 0.0);
        assert!((degrees_to_radians(70.0) - 1.221_730_5).abs() < 1e-6);
        assert!((degrees_to_radians(180.0) - std::f32::consts::PI).abs() < 1e-6);
    }

    #[test]
    fn defaults_produce_expected_block() {
        let params = RenderParameters::default();
        let block = LensUniforms::from_params(&params, [1280.0, 720.0]);
        assert_eq!(block.resolution, [1280.0, 720.0]);
        assert_eq!(block.spin, 0.998);
        assert!((block.inclination - 70f32.to_radians()).abs() < 1e-6);
        assert_eq!(block.camera_dist, 15.0);
        assert_eq!(block.exposure, 1.5);
        assert_eq!(block.show_stars, 1);
        assert_eq!(block.time, 0.0);
        assert_eq!(block.disk_color_temp, 6000.0);
    }

    #[test]
    fn hidden_stars_encode_as_zero() {
        let mut params = RenderParameters::default();
        params.set_show_stars(false);
        assert_eq!(LensUniforms::from_params(&params, [1.0, 1.0]).show_stars, 0);
    }

    #[test]
    fn prelude_declares_every_field() {
        for field in [
            "resolution",
            "spin",
            "inclination",
            "camera_dist",
            "exposure",
            "show_stars",
            "time",
            "disk_color_temp",
        ] {
            assert!(UNIFORM_PRELUDE.contains(&format!("{field}:")), "missing {field}");
        }
        assert!(UNIFORM_PRELUDE.contains("var<uniform> lens"));
    }
}
