use winit::event::WindowEvent;
use winit::window::Window;

/// egui context, winit input bridge and wgpu painter for the control panel.
pub(crate) struct Overlay {
    ctx: egui::Context,
    state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
}

/// Tessellated egui output waiting to be painted this frame.
pub(crate) struct OverlayFrame {
    pub paint_jobs: Vec<egui::ClippedPrimitive>,
    pub screen: egui_wgpu::ScreenDescriptor,
    textures_delta: egui::TexturesDelta,
}

impl Overlay {
    pub fn new(
        window: &Window,
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        max_texture_side: usize,
    ) -> Self {
        let ctx = egui::Context::default();
        ctx.set_visuals(egui::Visuals::dark());
        let state = egui_winit::State::new(
            ctx.clone(),
            egui::ViewportId::ROOT,
            window,
            Some(window.scale_factor() as f32),
            Some(max_texture_side),
        );
        let renderer = egui_wgpu::Renderer::new(device, surface_format, None, 1);
        Self {
            ctx,
            state,
            renderer,
        }
    }

    /// Feeds a window event to egui. Returns true when a widget consumed it.
    pub fn on_window_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        self.state.on_window_event(window, event).consumed
    }

    /// Runs one UI frame and uploads any texture changes it produced.
    pub fn run(
        &mut self,
        window: &Window,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        size_in_pixels: [u32; 2],
        build: impl FnOnce(&egui::Context),
    ) -> OverlayFrame {
        let raw_input = self.state.take_egui_input(window);
        let mut build = Some(build);
        let output = self.ctx.run(raw_input, |ctx| {
            if let Some(build) = build.take() {
                build(ctx);
            }
        });
        self.state
            .handle_platform_output(window, output.platform_output);

        for (id, delta) in &output.textures_delta.set {
            self.renderer.update_texture(device, queue, *id, delta);
        }

        let paint_jobs = self.ctx.tessellate(output.shapes, output.pixels_per_point);
        OverlayFrame {
            paint_jobs,
            screen: egui_wgpu::ScreenDescriptor {
                size_in_pixels,
                pixels_per_point: output.pixels_per_point,
            },
            textures_delta: output.textures_delta,
        }
    }

    /// Uploads vertex/index data; returns command buffers egui callbacks need.
    pub fn prepare(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        frame: &OverlayFrame,
    ) -> Vec<wgpu::CommandBuffer> {
        self.renderer
            .update_buffers(device, queue, encoder, &frame.paint_jobs, &frame.screen)
    }

    pub fn paint<'pass>(&'pass self, pass: &mut wgpu::RenderPass<'pass>, frame: &'pass OverlayFrame) {
        self.renderer.render(pass, &frame.paint_jobs, &frame.screen);
    }

    /// Releases textures egui no longer needs; call after submission.
    pub fn finish(&mut self, frame: OverlayFrame) {
        for id in &frame.textures_delta.free {
            self.renderer.free_texture(id);
        }
    }
}
