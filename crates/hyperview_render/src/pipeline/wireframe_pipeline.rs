//! Render pipeline for the projected wireframe
//!
//! Two passes share one uniform buffer: edges as a line list, then vertex
//! markers as instanced quads on top. Vertex buffers are allocated once at
//! their final size and overwritten every frame.

use hyperview_core::{FrameBuffers, EDGE_COUNT, VERTEX_COUNT};
use wgpu::util::DeviceExt;

use super::types::{WireframeUniforms, POINT_QUAD_VERTICES, POSITION_STRIDE};

const POSITION_ATTRIBUTES: [wgpu::VertexAttribute; 1] = [wgpu::VertexAttribute {
    format: wgpu::VertexFormat::Float32x3,
    offset: 0,
    shader_location: 0,
}];

const SHADER_SOURCE: &str = include_str!("../shaders/wireframe.wgsl");

const LINE_VERTEX_COUNT: u32 = (EDGE_COUNT * 2) as u32;

/// Line and point pipelines for one surface format
pub struct WireframePipeline {
    line_pipeline: wgpu::RenderPipeline,
    point_pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    /// 64 endpoints, two per edge
    line_buffer: wgpu::Buffer,
    /// 16 projected vertices
    point_buffer: wgpu::Buffer,
}

impl WireframePipeline {
    pub fn new(device: &wgpu::Device, surface_format: wgpu::TextureFormat) -> Self {
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Wireframe Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Wireframe Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Wireframe Shader"),
            source: wgpu::ShaderSource::Wgsl(SHADER_SOURCE.into()),
        });

        let line_pipeline = Self::create_pipeline(
            device,
            &pipeline_layout,
            &shader,
            surface_format,
            PassKind::Lines,
        );
        let point_pipeline = Self::create_pipeline(
            device,
            &pipeline_layout,
            &shader,
            surface_format,
            PassKind::Points,
        );

        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Wireframe Uniform Buffer"),
            contents: bytemuck::bytes_of(&WireframeUniforms::default()),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Wireframe Bind Group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let line_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Edge Line Buffer"),
            size: LINE_VERTEX_COUNT as u64 * POSITION_STRIDE,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let point_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Vertex Point Buffer"),
            size: VERTEX_COUNT as u64 * POSITION_STRIDE,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Self {
            line_pipeline,
            point_pipeline,
            uniform_buffer,
            bind_group,
            line_buffer,
            point_buffer,
        }
    }

    fn create_pipeline(
        device: &wgpu::Device,
        layout: &wgpu::PipelineLayout,
        shader: &wgpu::ShaderModule,
        surface_format: wgpu::TextureFormat,
        kind: PassKind,
    ) -> wgpu::RenderPipeline {
        let (label, vs, fs, topology, step_mode) = match kind {
            PassKind::Lines => (
                "Wireframe Line Pipeline",
                "vs_line",
                "fs_line",
                wgpu::PrimitiveTopology::LineList,
                wgpu::VertexStepMode::Vertex,
            ),
            PassKind::Points => (
                "Wireframe Point Pipeline",
                "vs_point",
                "fs_point",
                wgpu::PrimitiveTopology::TriangleList,
                wgpu::VertexStepMode::Instance,
            ),
        };

        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(label),
            layout: Some(layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some(vs),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: POSITION_STRIDE,
                    step_mode,
                    attributes: &POSITION_ATTRIBUTES,
                }],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some(fs),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        })
    }

    /// Copy this frame's projected geometry into the GPU buffers
    pub fn upload_frame(&self, queue: &wgpu::Queue, buffers: &FrameBuffers) {
        queue.write_buffer(
            &self.point_buffer,
            0,
            bytemuck::cast_slice(buffers.point_scalars()),
        );
        queue.write_buffer(
            &self.line_buffer,
            0,
            bytemuck::cast_slice(buffers.line_scalars()),
        );
    }

    pub fn update_uniforms(&self, queue: &wgpu::Queue, uniforms: &WireframeUniforms) {
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(uniforms));
    }

    /// Clear `view` and draw edges, then vertex markers
    pub fn render(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        clear_color: wgpu::Color,
    ) {
        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Wireframe Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(clear_color),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        render_pass.set_bind_group(0, &self.bind_group, &[]);

        render_pass.set_pipeline(&self.line_pipeline);
        render_pass.set_vertex_buffer(0, self.line_buffer.slice(..));
        render_pass.draw(0..LINE_VERTEX_COUNT, 0..1);

        render_pass.set_pipeline(&self.point_pipeline);
        render_pass.set_vertex_buffer(0, self.point_buffer.slice(..));
        render_pass.draw(0..POINT_QUAD_VERTICES, 0..VERTEX_COUNT as u32);
    }
}

#[derive(Clone, Copy)]
enum PassKind {
    Lines,
    Points,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shader_has_entry_points() {
        for entry in ["fn vs_line", "fn fs_line", "fn vs_point", "fn fs_point"] {
            assert!(SHADER_SOURCE.contains(entry), "missing {}", entry);
        }
    }

    #[test]
    fn test_points_are_square_sprites() {
        // Every fragment of a point quad is kept
        assert!(!SHADER_SOURCE.contains("discard"));
    }

    #[test]
    fn test_draw_counts() {
        assert_eq!(LINE_VERTEX_COUNT, 64);
        assert_eq!(POINT_QUAD_VERTICES * VERTEX_COUNT as u32, 96);
    }
}
