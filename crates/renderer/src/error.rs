use winit::error::{EventLoopError, OsError};

/// Failures surfaced by [`crate::Renderer::run`].
#[derive(Debug, thiserror::Error)]
pub enum RendererError {
    #[error("failed to create event loop: {0}")]
    EventLoop(#[source] EventLoopError),
    #[error("failed to create window: {0}")]
    Window(#[from] OsError),
    #[error("failed to create rendering surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),
    #[error("failed to find a suitable GPU adapter")]
    Adapter,
    #[error("surface reports no supported {0}")]
    SurfaceUnsupported(&'static str),
    #[error("failed to create GPU device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
    #[error("window event loop error: {0}")]
    Loop(#[source] EventLoopError),
}

impl RendererError {
    /// True when the failure happened before the first frame was rendered.
    pub fn is_initialization(&self) -> bool {
        !matches!(self, Self::Loop(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setup_failures_count_as_initialization() {
        assert!(RendererError::Adapter.is_initialization());
        assert!(RendererError::SurfaceUnsupported("alpha modes").is_initialization());
        assert!(RendererError::EventLoop(EventLoopError::ExitFailure(1)).is_initialization());
        assert!(!RendererError::Loop(EventLoopError::ExitFailure(1)).is_initialization());
    }
}
