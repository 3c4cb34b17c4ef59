//! Windowed host for full-screen shader viewers.
//!
//! The crate glues a `winit` window, a `wgpu` full-screen quad pipeline and an
//! `egui` overlay together behind the [`Application`] trait. The flow for one
//! loop iteration is:
//!
//! ```text
//!   winit events ──▶ EventTranslator ──▶ Application::handle_input
//!          │
//!          ▼
//!   RedrawRequested ──▶ Application::update
//!                   ──▶ egui run ──▶ Application::build_ui ──▶ apply_edits
//!                   ──▶ Application::uniforms ──▶ GPU UBO
//!                   ──▶ clear, quad draw, overlay, present
//! ```
//!
//! `WindowState` owns every GPU resource (surface, device, pipeline, uniform
//! buffer, overlay renderer) while the application owns only plain data. The
//! fragment shader is read from disk at start-up and prefixed with the
//! application's uniform block declaration so both sides agree on layout.

mod compile;
mod error;
mod gpu;
mod input;
mod runtime;
mod types;
mod window;

pub use error::RendererError;
pub use input::{EventTranslator, InputEvent, InputKey, KeyAction, LoopControl, PointerButton};
pub use runtime::{FrameLoop, FrameStats, LoopState};
pub use types::{GpuPowerPreference, RendererConfig, ShaderPair};

/// Re-exported so applications build their panels against the same egui the
/// overlay renders with.
pub use egui;

/// Behaviour the render loop drives once per frame.
///
/// Every method runs on the loop thread, in this order per iteration:
/// `handle_input` for each pending event, then `update`, `build_ui`,
/// `apply_edits` and finally `uniforms`.
pub trait Application {
    /// Uniform block pushed to the fragment shader every frame.
    type Uniforms: bytemuck::Pod;
    /// Pending edits produced by one UI frame.
    type Edits;

    /// Applies one input event. Returning [`LoopControl::Exit`] asks the loop
    /// to terminate at the next iteration boundary.
    fn handle_input(&mut self, event: InputEvent) -> LoopControl;

    /// Advances per-frame state before the UI is built.
    fn update(&mut self);

    /// Builds this frame's UI and reports what the user changed.
    fn build_ui(&self, ctx: &egui::Context, stats: &FrameStats) -> Self::Edits;

    /// Applies the edits returned by [`Application::build_ui`].
    fn apply_edits(&mut self, edits: Self::Edits);

    /// Packs the uniform block for a surface of `resolution` pixels.
    fn uniforms(&self, resolution: [f32; 2]) -> Self::Uniforms;
}

/// Thin entry point that owns the configuration until the loop starts.
pub struct Renderer {
    config: RendererConfig,
}

impl Renderer {
    pub fn new(config: RendererConfig) -> Self {
        Self { config }
    }

    /// Opens the window and runs `app` until the user closes it.
    ///
    /// Returns once the loop has released its GPU resources. Errors raised
    /// before the first frame are reported as initialization failures, see
    /// [`RendererError::is_initialization`].
    pub fn run<A: Application + 'static>(self, app: A) -> Result<(), RendererError> {
        tracing::debug!(
            title = %self.config.title,
            width = self.config.surface_size.0,
            height = self.config.surface_size.1,
            vertex = %self.config.shaders.vertex.display(),
            fragment = %self.config.shaders.fragment.display(),
            "starting renderer"
        );
        window::run(self.config, app)
    }
}
