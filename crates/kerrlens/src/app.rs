use renderer::{egui, Application, FrameStats, InputEvent, LoopControl};

use crate::input;
use crate::panel::{self, PanelEdits};
use crate::params::ViewerState;
use crate::uniforms::LensUniforms;

/// Shader time added per rendered frame while animation is on. Fixed rather
/// than measured, so the animation speed follows the frame rate.
pub const ANIMATION_STEP_SECONDS: f32 = 0.016;

/// The viewer as the render loop sees it.
#[derive(Debug, Default)]
pub struct KerrViewer {
    state: ViewerState,
}

impl KerrViewer {
    #[cfg(test)]
    pub fn state(&self) -> &ViewerState {
        &self.state
    }
}

impl Application for KerrViewer {
    type Uniforms = LensUniforms;
    type Edits = PanelEdits;

    fn handle_input(&mut self, event: InputEvent) -> LoopControl {
        input::handle(&mut self.state, event)
    }

    fn update(&mut self) {
        if self.state.params.animate() {
            self.state.params.advance_time(ANIMATION_STEP_SECONDS);
        }
    }

    fn build_ui(&self, ctx: &egui::Context, stats: &FrameStats) -> PanelEdits {
        panel::show(ctx, &self.state.params, stats)
    }

    fn apply_edits(&mut self, edits: PanelEdits) {
        if !edits.is_empty() {
            tracing::debug!(?edits, "applying panel edits");
        }
        edits.apply(&mut self.state.params);
    }

    fn uniforms(&self, resolution: [f32; 2]) -> LensUniforms {
        LensUniforms::from_params(&self.state.params, resolution)
    }
}
