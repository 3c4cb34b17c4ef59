//! Control panel built once per frame from a read-only view of the
//! parameters. Changes come back as [`PanelEdits`] for the loop to apply.

use renderer::egui;
use renderer::FrameStats;

use crate::params::{
    RenderParameters, DISK_TEMPERATURE_RANGE, DISTANCE_RANGE, EXPOSURE_RANGE, INCLINATION_RANGE,
    SPIN_RANGE,
};

pub const WINDOW_TITLE: &str = "Black Hole Parameters";
const HEADER: &str = "Kerr Black Hole Renderer";

/// One-click shortcuts; each sets exactly one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Non-rotating hole, `spin = 0`.
    Schwarzschild,
    /// `spin = 0.998`.
    MaximumSpin,
    /// `inclination = 70` degrees.
    Interstellar,
}

impl Preset {
    pub fn apply(self, params: &mut RenderParameters) {
        match self {
            Preset::Schwarzschild => params.set_spin(0.0),
            Preset::MaximumSpin => params.set_spin(0.998),
            Preset::Interstellar => params.set_inclination_deg(70.0),
        }
    }
}

/// Pending edits from one panel frame. `None` means untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PanelEdits {
    pub spin: Option<f32>,
    pub inclination_deg: Option<f32>,
    pub camera_distance: Option<f32>,
    pub exposure: Option<f32>,
    pub disk_temp_k: Option<f32>,
    pub show_stars: Option<bool>,
    pub animate: Option<bool>,
    pub preset: Option<Preset>,
}

impl PanelEdits {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Applies slider and checkbox values first, then the preset, all through
    /// the clamping setters.
    pub fn apply(self, params: &mut RenderParameters) {
        if let Some(value) = self.spin {
            params.set_spin(value);
        }
        if let Some(value) = self.inclination_deg {
            params.set_inclination_deg(value);
        }
        if let Some(value) = self.camera_distance {
            params.set_camera_distance(value);
        }
        if let Some(value) = self.exposure {
            params.set_exposure(value);
        }
        if let Some(value) = self.disk_temp_k {
            params.set_disk_temp_k(value);
        }
        if let Some(value) = self.show_stars {
            params.set_show_stars(value);
        }
        if let Some(value) = self.animate {
            params.set_animate(value);
        }
        if let Some(preset) = self.preset {
            preset.apply(params);
        }
    }
}

/// FPS label text, e.g. `"59.9 FPS (16.694 ms)"`.
pub fn frame_label(stats: &FrameStats) -> String {
    format!(
        "{:.1} FPS ({:.3} ms)",
        stats.frames_per_second(),
        stats.frame_time_ms()
    )
}

pub fn show(ctx: &egui::Context, params: &RenderParameters, stats: &FrameStats) -> PanelEdits {
    let mut edits = PanelEdits::default();

    egui::Window::new(WINDOW_TITLE)
        .default_pos(egui::pos2(10.0, 10.0))
        .default_size(egui::vec2(350.0, 400.0))
        .show(ctx, |ui| {
            ui.label(HEADER);
            ui.separator();

            edits.spin = slider(ui, params.spin(), SPIN_RANGE, "Spin (a)", 3);
            edits.inclination_deg = slider(
                ui,
                params.inclination_deg(),
                INCLINATION_RANGE,
                "Inclination (deg)",
                1,
            );
            edits.camera_distance = slider(
                ui,
                params.camera_distance(),
                DISTANCE_RANGE,
                "Camera Distance",
                1,
            );
            edits.exposure = slider(ui, params.exposure(), EXPOSURE_RANGE, "Exposure", 2);
            edits.disk_temp_k = slider(
                ui,
                params.disk_temp_k(),
                DISK_TEMPERATURE_RANGE,
                "Disk Temperature (K)",
                0,
            );

            ui.separator();
            edits.show_stars = checkbox(ui, params.show_stars(), "Show Stars");
            edits.animate = checkbox(ui, params.animate(), "Animate Spin");

            ui.separator();
            if ui.button("Reset to Schwarzschild (a=0)").clicked() {
                edits.preset = Some(Preset::Schwarzschild);
            }
            if ui.button("Maximize Spin (a=0.998)").clicked() {
                edits.preset = Some(Preset::MaximumSpin);
            }
            if ui.button("Interstellar View (i=70°)").clicked() {
                edits.preset = Some(Preset::Interstellar);
            }

            ui.separator();
            ui.label(frame_label(stats));
        });

    edits
}

fn slider(
    ui: &mut egui::Ui,
    current: f32,
    range: std::ops::RangeInclusive<f32>,
    label: &str,
    decimals: usize,
) -> Option<f32> {
    let mut value = current;
    let response = ui.add(
        egui::Slider::new(&mut value, range)
            .text(label)
            .fixed_decimals(decimals),
    );
    response.changed().then_some(value)
}

fn checkbox(ui: &mut egui::Ui, current: bool, label: &str) -> Option<bool> {
    let mut value = current;
    ui.checkbox(&mut value, label).changed().then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn presets_touch_only_their_field() {
        let mut base = RenderParameters::default();
        base.set_spin(0.5);
        base.set_inclination_deg(30.0);

        let mut params = base.clone();
        Preset::Schwarzschild.apply(&mut params);
        assert_eq!(params.spin(), 0.0);
        params.set_spin(base.spin());
        assert_eq!(params, base);

        let mut params = base.clone();
        Preset::MaximumSpin.apply(&mut params);
        assert_eq!(params.spin(), 0.998);
        params.set_spin(base.spin());
        assert_eq!(params, base);

        let mut params = base.clone();
        Preset::Interstellar.apply(&mut params);
        assert_eq!(params.inclination_deg(), 70.0);
        params.set_inclination_deg(base.inclination_deg());
        assert_eq!(params, base);
    }

    #[test]
    fn edits_go_through_clamping_setters() {
        let mut params = RenderParameters::default();
        PanelEdits {
            camera_distance: Some(500.0),
            exposure: Some(0.0),
            animate: Some(true),
            ..PanelEdits::default()
        }
        .apply(&mut params);
        assert_eq!(params.camera_distance(), 50.0);
        assert_eq!(params.exposure(), 0.1);
        assert!(params.animate());
    }

    #[test]
    fn preset_wins_over_slider_value_in_same_frame() {
        let mut params = RenderParameters::default();
        PanelEdits {
            spin: Some(0.3),
            preset: Some(Preset::Schwarzschild),
            ..PanelEdits::default()
        }
        .apply(&mut params);
        assert_eq!(params.spin(), 0.0);
    }

    #[test]
    fn panel_without_interaction_yields_no_edits() {
        let ctx = egui::Context::default();
        let params = RenderParameters::default();
        let stats = FrameStats::new(Instant::now());

        for _ in 0..3 {
            let mut edits = None;
            let _ = ctx.run(egui::RawInput::default(), |ctx| {
                edits = Some(show(ctx, &params, &stats));
            });
            let edits = edits.expect("panel ran");
            assert!(edits.is_empty(), "unexpected edits: {edits:?}");
        }
    }

    #[test]
    fn frame_label_uses_fixed_precision() {
        let stats = FrameStats::new(Instant::now());
        assert_eq!(frame_label(&stats), "0.0 FPS (0.000 ms)");
    }
}
