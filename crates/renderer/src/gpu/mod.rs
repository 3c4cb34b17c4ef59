//! GPU plumbing behind the window loop.
//!
//! - `context` owns the wgpu instance/device/surface and reconfigures the
//!   swapchain when the window resizes.
//! - `pipeline` builds the full-screen quad program and records whether the
//!   external shader compiled.
//! - `uniforms` holds the application's uniform block and writes it through
//!   the queue each frame.
//! - `overlay` runs egui and composites its output over the quad.

mod context;
mod overlay;
mod pipeline;
mod uniforms;

pub(crate) use context::GpuContext;
pub(crate) use overlay::Overlay;
pub(crate) use pipeline::QuadPipeline;
pub(crate) use uniforms::UniformBuffer;
