use std::sync::Arc;

use winit::dpi::PhysicalSize;
use winit::window::Window;

use crate::error::RendererError;
use crate::types::GpuPowerPreference;

pub(crate) struct GpuContext {
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    pub size: PhysicalSize<u32>,
    pub surface_format: wgpu::TextureFormat,
}

impl GpuContext {
    pub(crate) fn new(
        window: Arc<Window>,
        initial_size: PhysicalSize<u32>,
        gpu_power: GpuPowerPreference,
    ) -> Result<Self, RendererError> {
        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance.create_surface(window)?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: gpu_power.to_wgpu(),
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .ok_or(RendererError::Adapter)?;

        let info = adapter.get_info();
        tracing::debug!(
            name = %info.name,
            backend = ?info.backend,
            device_type = ?info.device_type,
            "selected GPU adapter"
        );

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("renderer device"),
                required_features: wgpu::Features::empty(),
                required_limits: adapter.limits(),
            },
            None,
        ))?;

        // Errors outside an error scope are logged, never fatal.
        device.on_uncaptured_error(Box::new(|err| {
            tracing::error!(error = %err, "uncaptured GPU error");
        }));

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = select_surface_format(&surface_caps.formats)?;
        let alpha_mode = *surface_caps
            .alpha_modes
            .first()
            .ok_or(RendererError::SurfaceUnsupported("alpha modes"))?;

        // Fifo is always supported and waits for vsync.
        let present_mode = wgpu::PresentMode::Fifo;
        tracing::debug!(?present_mode, ?surface_format, "configuring surface");

        let size = PhysicalSize::new(initial_size.width.max(1), initial_size.height.max(1));
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width,
            height: size.height,
            present_mode,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            size,
            surface_format,
        })
    }

    /// Records the new size; a zero-sized (minimised) surface keeps its last
    /// configuration until it is drawable again.
    pub(crate) fn resize(&mut self, new_size: PhysicalSize<u32>) {
        self.size = new_size;
        if !self.is_drawable() {
            return;
        }

        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
    }

    pub(crate) fn is_drawable(&self) -> bool {
        surface_is_drawable(self.size)
    }

    /// Reapplies the current configuration after a lost or outdated surface.
    pub(crate) fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    pub(crate) fn resolution(&self) -> [f32; 2] {
        [self.config.width as f32, self.config.height as f32]
    }

    pub(crate) fn max_texture_side(&self) -> usize {
        self.device.limits().max_texture_dimension_2d as usize
    }
}

/// Prefers a linear format; shaders write display-ready values themselves.
fn select_surface_format(formats: &[wgpu::TextureFormat]) -> Result<wgpu::TextureFormat, RendererError> {
    if let Some(format) = formats.iter().copied().find(|format| !format.is_srgb()) {
        return Ok(format);
    }
    let fallback = *formats
        .first()
        .ok_or(RendererError::SurfaceUnsupported("texture formats"))?;
    tracing::warn!(?fallback, "no linear (non-sRGB) surface format available");
    Ok(fallback)
}

pub(crate) fn surface_is_drawable(size: PhysicalSize<u32>) -> bool {
    size.width > 0 && size.height > 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_format_prefers_linear_and_rejects_empty_caps() {
        use wgpu::TextureFormat;

        let formats = [TextureFormat::Bgra8UnormSrgb, TextureFormat::Bgra8Unorm];
        assert_eq!(select_surface_format(&formats).unwrap(), TextureFormat::Bgra8Unorm);
        assert_eq!(
            select_surface_format(&[TextureFormat::Rgba8UnormSrgb]).unwrap(),
            TextureFormat::Rgba8UnormSrgb
        );

        let err = select_surface_format(&[]).unwrap_err();
        assert!(matches!(err, RendererError::SurfaceUnsupported(_)));
        assert!(err.is_initialization());
    }

    #[test]
    fn minimised_surface_is_not_drawable() {
        assert!(!surface_is_drawable(PhysicalSize::new(0, 0)));
        assert!(!surface_is_drawable(PhysicalSize::new(1280, 0)));
        assert!(surface_is_drawable(PhysicalSize::new(1, 1)));
    }
}
