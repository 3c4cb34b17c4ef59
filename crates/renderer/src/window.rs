use std::sync::Arc;
use std::time::Instant;

use winit::dpi::PhysicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::{Window, WindowBuilder};

use crate::error::RendererError;
use crate::gpu::{GpuContext, Overlay, QuadPipeline, UniformBuffer};
use crate::input::{EventTranslator, LoopControl};
use crate::runtime::{FrameLoop, FrameStats, LoopState, Pacing};
use crate::types::RendererConfig;
use crate::Application;

/// Aggregates every GPU resource the window owns.
struct WindowState {
    window: Arc<Window>,
    gpu: GpuContext,
    uniforms: UniformBuffer,
    quad: QuadPipeline,
    overlay: Overlay,
    translator: EventTranslator,
    stats: FrameStats,
}

impl WindowState {
    fn new(
        window: Arc<Window>,
        config: &RendererConfig,
        uniform_size: usize,
    ) -> Result<Self, RendererError> {
        let size = window.inner_size();
        let gpu = GpuContext::new(window.clone(), size, config.power)?;
        let uniforms = UniformBuffer::new(&gpu.device, uniform_size);
        let quad = QuadPipeline::new(
            &gpu.device,
            gpu.surface_format,
            &uniforms.layout,
            &config.shaders,
            &config.fragment_prelude,
        );
        let overlay = Overlay::new(
            window.as_ref(),
            &gpu.device,
            gpu.surface_format,
            gpu.max_texture_side(),
        );

        Ok(Self {
            window,
            gpu,
            uniforms,
            quad,
            overlay,
            translator: EventTranslator::new(),
            stats: FrameStats::new(Instant::now()),
        })
    }

    fn window(&self) -> &Window {
        self.window.as_ref()
    }

    fn resize(&mut self, new_size: PhysicalSize<u32>) {
        self.gpu.resize(new_size);
    }

    /// Advances the application and, when the surface is drawable, renders
    /// and presents one frame.
    fn render_frame<A: Application>(&mut self, app: &mut A) -> Result<(), wgpu::SurfaceError> {
        app.update();
        if !self.gpu.is_drawable() {
            return Ok(());
        }

        let size_in_pixels = [self.gpu.config.width, self.gpu.config.height];
        let stats = &self.stats;
        let mut edits = None;
        let overlay_frame = self.overlay.run(
            self.window.as_ref(),
            &self.gpu.device,
            &self.gpu.queue,
            size_in_pixels,
            |ctx| edits = Some(app.build_ui(ctx, stats)),
        );
        if let Some(edits) = edits {
            app.apply_edits(edits);
        }

        let frame = self.gpu.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.uniforms
            .write(&self.gpu.queue, &app.uniforms(self.gpu.resolution()));

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("frame encoder"),
            });
        let overlay_commands =
            self.overlay
                .prepare(&self.gpu.device, &self.gpu.queue, &mut encoder, &overlay_frame);

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("frame pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.quad.draw(&mut pass, &self.uniforms.bind_group);
            self.overlay.paint(&mut pass, &overlay_frame);
        }

        self.gpu
            .queue
            .submit(overlay_commands.into_iter().chain(Some(encoder.finish())));
        frame.present();
        self.overlay.finish(overlay_frame);

        let now = Instant::now();
        if self.stats.record_frame(now) {
            tracing::debug!(
                fps = self.stats.frames_per_second().round(),
                frame_time_ms = self.stats.frame_time_ms(),
                frame_count = self.stats.frame_count(),
                program_linked = self.quad.is_linked(),
                "render stats"
            );
        }
        Ok(())
    }
}

pub(crate) fn run<A: Application + 'static>(
    config: RendererConfig,
    mut app: A,
) -> Result<(), RendererError> {
    let event_loop = EventLoop::new().map_err(RendererError::EventLoop)?;
    let window_size = PhysicalSize::new(config.surface_size.0, config.surface_size.1);
    let window = WindowBuilder::new()
        .with_title(config.title.as_str())
        .with_inner_size(window_size)
        .build(&event_loop)?;
    let window = Arc::new(window);

    let mut state = Some(WindowState::new(
        window,
        &config,
        std::mem::size_of::<A::Uniforms>(),
    )?);
    let mut frame_loop = FrameLoop::new();
    event_loop.set_control_flow(ControlFlow::Poll);

    event_loop
        .run(move |event, elwt| {
            let Some(current) = state.as_mut() else {
                return;
            };
            match event {
                Event::NewEvents(_) => {
                    if frame_loop.begin_iteration() == LoopState::Terminating {
                        elwt.exit();
                    }
                }
                Event::WindowEvent { window_id, event } if window_id == current.window().id() => {
                    let consumed = current.overlay.on_window_event(current.window.as_ref(), &event);
                    match event {
                        WindowEvent::CloseRequested | WindowEvent::Destroyed => {
                            tracing::debug!("window close requested");
                            frame_loop.request_close();
                        }
                        WindowEvent::Resized(new_size) => current.resize(new_size),
                        WindowEvent::RedrawRequested => {
                            // Minimised iterations are driven from `AboutToWait`.
                            if !frame_loop.is_running() || !current.gpu.is_drawable() {
                                return;
                            }
                            match current.render_frame(&mut app) {
                                Ok(()) => {}
                                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                                    current.gpu.reconfigure();
                                }
                                Err(wgpu::SurfaceError::OutOfMemory) => {
                                    tracing::error!("surface out of memory; closing viewer");
                                    frame_loop.request_close();
                                }
                                Err(wgpu::SurfaceError::Timeout) => {
                                    tracing::warn!("surface timeout; retrying next frame");
                                }
                            }
                        }
                        other => {
                            if let Some(input) = current.translator.translate(&other, consumed) {
                                if app.handle_input(input) == LoopControl::Exit {
                                    tracing::debug!(?input, "exit requested by input");
                                    frame_loop.request_close();
                                }
                            }
                        }
                    }
                }
                Event::AboutToWait => {
                    if !frame_loop.is_running() {
                        return;
                    }
                    match Pacing::for_surface(current.gpu.is_drawable(), Instant::now()) {
                        Pacing::Continuous => {
                            elwt.set_control_flow(ControlFlow::Poll);
                            current.window().request_redraw();
                        }
                        // Minimised windows may never receive a redraw, so the
                        // iteration runs here without presenting.
                        Pacing::Throttled(deadline) => {
                            elwt.set_control_flow(ControlFlow::WaitUntil(deadline));
                            if let Err(err) = current.render_frame(&mut app) {
                                tracing::warn!(error = %err, "skipped minimised frame");
                            }
                        }
                    }
                }
                Event::LoopExiting => {
                    tracing::info!(
                        frames = current.stats.frame_count(),
                        "shutting down; releasing GPU resources"
                    );
                    state = None;
                }
                _ => {}
            }
        })
        .map_err(RendererError::Loop)
}
