//! Parameter store: the values the shader renders from, plus the transient
//! camera-drag state.
//!
//! Every bounded field is private and only reachable through a clamping
//! setter, so the documented intervals hold after any mutation, whether it
//! comes from input, the panel or the loop.

use std::ops::RangeInclusive;

/// Dimensionless Kerr spin `a`. Stops short of 1 (extremal) like the shader.
pub const SPIN_RANGE: RangeInclusive<f32> = 0.0..=0.998;
/// Viewing angle from the spin axis, in degrees; 90 is edge-on.
pub const INCLINATION_RANGE: RangeInclusive<f32> = 0.0..=180.0;
/// Camera distance from the hole, in gravitational radii.
pub const DISTANCE_RANGE: RangeInclusive<f32> = 2.5..=50.0;
pub const EXPOSURE_RANGE: RangeInclusive<f32> = 0.1..=5.0;
/// Disk color temperature in Kelvin.
pub const DISK_TEMPERATURE_RANGE: RangeInclusive<f32> = 3000.0..=15000.0;

/// Clamps `value` into `range`; NaN leaves `current` untouched.
fn clamp_into(current: f32, value: f32, range: &RangeInclusive<f32>) -> f32 {
    if value.is_nan() {
        current
    } else {
        value.clamp(*range.start(), *range.end())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderParameters {
    spin: f32,
    inclination_deg: f32,
    camera_distance: f32,
    exposure: f32,
    disk_temp_k: f32,
    show_stars: bool,
    animate: bool,
    elapsed_time: f32,
}

impl Default for RenderParameters {
    fn default() -> Self {
        Self {
            spin: 0.998,
            inclination_deg: 70.0,
            camera_distance: 15.0,
            exposure: 1.5,
            disk_temp_k: 6000.0,
            show_stars: true,
            animate: false,
            elapsed_time: 0.0,
        }
    }
}

impl RenderParameters {
    pub fn spin(&self) -> f32 {
        self.spin
    }

    pub fn set_spin(&mut self, value: f32) {
        self.spin = clamp_into(self.spin, value, &SPIN_RANGE);
    }

    pub fn inclination_deg(&self) -> f32 {
        self.inclination_deg
    }

    pub fn set_inclination_deg(&mut self, value: f32) {
        self.inclination_deg = clamp_into(self.inclination_deg, value, &INCLINATION_RANGE);
    }

    pub fn camera_distance(&self) -> f32 {
        self.camera_distance
    }

    pub fn set_camera_distance(&mut self, value: f32) {
        self.camera_distance = clamp_into(self.camera_distance, value, &DISTANCE_RANGE);
    }

    pub fn exposure(&self) -> f32 {
        self.exposure
    }

    pub fn set_exposure(&mut self, value: f32) {
        self.exposure = clamp_into(self.exposure, value, &EXPOSURE_RANGE);
    }

    pub fn disk_temp_k(&self) -> f32 {
        self.disk_temp_k
    }

    pub fn set_disk_temp_k(&mut self, value: f32) {
        self.disk_temp_k = clamp_into(self.disk_temp_k, value, &DISK_TEMPERATURE_RANGE);
    }

    pub fn show_stars(&self) -> bool {
        self.show_stars
    }

    pub fn set_show_stars(&mut self, value: bool) {
        self.show_stars = value;
    }

    pub fn animate(&self) -> bool {
        self.animate
    }

    pub fn set_animate(&mut self, value: bool) {
        self.animate = value;
    }

    /// Shader time in seconds.
    pub fn elapsed_time(&self) -> f32 {
        self.elapsed_time
    }

    /// Adds `step` seconds; negative or NaN steps are ignored.
    pub fn advance_time(&mut self, step: f32) {
        if step > 0.0 {
            self.elapsed_time += step;
        }
    }
}

/// Transient pointer-drag state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CameraState {
    pub is_dragging: bool,
    pub last_cursor_x: f64,
    pub last_cursor_y: f64,
}

/// Everything the viewer mutates, handed explicitly to input, panel and loop.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewerState {
    pub params: RenderParameters,
    pub camera: CameraState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_interstellar_setup() {
        let params = RenderParameters::default();
        assert_eq!(params.spin(), 0.998);
        assert_eq!(params.inclination_deg(), 70.0);
        assert_eq!(params.camera_distance(), 15.0);
        assert_eq!(params.exposure(), 1.5);
        assert_eq!(params.disk_temp_k(), 6000.0);
        assert!(params.show_stars());
        assert!(!params.animate());
        assert_eq!(params.elapsed_time(), 0.0);
    }

    #[test]
    fn setters_clamp_to_documented_intervals() {
        let mut params = RenderParameters::default();

        params.set_spin(1.5);
        assert_eq!(params.spin(), 0.998);
        params.set_spin(-0.2);
        assert_eq!(params.spin(), 0.0);

        params.set_inclination_deg(400.0);
        assert_eq!(params.inclination_deg(), 180.0);
        params.set_inclination_deg(-1.0);
        assert_eq!(params.inclination_deg(), 0.0);

        params.set_camera_distance(1.0);
        assert_eq!(params.camera_distance(), 2.5);
        params.set_camera_distance(f32::INFINITY);
        assert_eq!(params.camera_distance(), 50.0);

        params.set_exposure(0.0);
        assert_eq!(params.exposure(), 0.1);
        params.set_exposure(9.0);
        assert_eq!(params.exposure(), 5.0);

        params.set_disk_temp_k(100.0);
        assert_eq!(params.disk_temp_k(), 3000.0);
        params.set_disk_temp_k(1.0e6);
        assert_eq!(params.disk_temp_k(), 15000.0);
    }

    #[test]
    fn in_range_values_are_stored_exactly() {
        let mut params = RenderParameters::default();
        params.set_spin(0.42);
        params.set_exposure(2.25);
        assert_eq!(params.spin(), 0.42);
        assert_eq!(params.exposure(), 2.25);
    }

    #[test]
    fn nan_is_ignored_by_bounded_setters() {
        let mut params = RenderParameters::default();
        params.set_camera_distance(f32::NAN);
        params.set_inclination_deg(f32::NAN);
        assert_eq!(params, RenderParameters::default());
    }

    #[test]
    fn time_only_moves_forward() {
        let mut params = RenderParameters::default();
        params.advance_time(0.5);
        params.advance_time(-1.0);
        params.advance_time(f32::NAN);
        assert_eq!(params.elapsed_time(), 0.5);
    }
}
