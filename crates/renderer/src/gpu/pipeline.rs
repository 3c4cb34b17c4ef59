use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::compile::{compile_module, load_shader_sources, ShaderSources};
use crate::types::ShaderPair;

/// One corner of the full-screen quad: clip-space position plus UV.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub(crate) struct QuadVertex {
    pub position: [f32; 2],
    pub uv: [f32; 2],
}

impl QuadVertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x2];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

const fn vertex(x: f32, y: f32, u: f32, v: f32) -> QuadVertex {
    QuadVertex {
        position: [x, y],
        uv: [u, v],
    }
}

/// Two counter-clockwise triangles covering clip space, UV (0,0) at the
/// bottom-left corner and (1,1) at the top-right.
pub(crate) const QUAD_VERTICES: [QuadVertex; 6] = [
    vertex(-1.0, 1.0, 0.0, 1.0),
    vertex(-1.0, -1.0, 0.0, 0.0),
    vertex(1.0, -1.0, 1.0, 0.0),
    vertex(-1.0, 1.0, 0.0, 1.0),
    vertex(1.0, -1.0, 1.0, 0.0),
    vertex(1.0, 1.0, 1.0, 1.0),
];

/// Full-screen quad plus the external shader program.
///
/// `pipeline` is `None` when the shader failed to load, compile or link; the
/// loop then clears the frame and skips the draw so the UI stays usable.
pub(crate) struct QuadPipeline {
    pipeline: Option<wgpu::RenderPipeline>,
    vertex_buffer: wgpu::Buffer,
}

impl QuadPipeline {
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        uniform_layout: &wgpu::BindGroupLayout,
        shaders: &ShaderPair,
        fragment_prelude: &str,
    ) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("fullscreen quad"),
            contents: bytemuck::cast_slice(&QUAD_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let pipeline = match load_shader_sources(shaders, fragment_prelude) {
            Ok(sources) => build_program(device, surface_format, uniform_layout, sources),
            Err(err) => {
                tracing::error!(error = %format!("{err:#}"), "shader build failed; rendering without a program");
                None
            }
        };

        Self {
            pipeline,
            vertex_buffer,
        }
    }

    pub fn is_linked(&self) -> bool {
        self.pipeline.is_some()
    }

    /// Records the quad draw into `pass`; a no-op without a valid program.
    pub fn draw<'pass>(&'pass self, pass: &mut wgpu::RenderPass<'pass>, uniforms: &'pass wgpu::BindGroup) {
        let Some(pipeline) = self.pipeline.as_ref() else {
            return;
        };
        pass.set_pipeline(pipeline);
        pass.set_bind_group(0, uniforms, &[]);
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        pass.draw(0..QUAD_VERTICES.len() as u32, 0..1);
    }
}

fn build_program(
    device: &wgpu::Device,
    surface_format: wgpu::TextureFormat,
    uniform_layout: &wgpu::BindGroupLayout,
    sources: ShaderSources,
) -> Option<wgpu::RenderPipeline> {
    device.push_error_scope(wgpu::ErrorFilter::Validation);

    let vertex_module = compile_module(device, "quad vertex", sources.vertex);
    let fragment_module = compile_module(device, "quad fragment", sources.fragment);

    let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("quad pipeline layout"),
        bind_group_layouts: &[uniform_layout],
        push_constant_ranges: &[],
    });

    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("quad pipeline"),
        layout: Some(&pipeline_layout),
        vertex: wgpu::VertexState {
            module: &vertex_module,
            entry_point: "vs_main",
            buffers: &[QuadVertex::layout()],
        },
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &fragment_module,
            entry_point: "fs_main",
            targets: &[Some(wgpu::ColorTargetState {
                format: surface_format,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),
        multiview: None,
    });

    match pollster::block_on(device.pop_error_scope()) {
        Some(err) => {
            tracing::error!(error = %err, "shader build failed; rendering without a program");
            None
        }
        None => {
            tracing::info!("shader program linked");
            Some(pipeline)
        }
    }
}
