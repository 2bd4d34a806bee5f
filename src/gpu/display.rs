//! Display pass: draws the particle point set.
//!
//! Each particle is an instanced camera-facing quad of fixed pixel size.
//! The instance carries only its 2D lookup coordinate; the vertex shader
//! fetches the world position from the texture the simulation pass just
//! wrote.

use wgpu::util::DeviceExt;

use super::sim::write_index;
use super::DEPTH_FORMAT;
use crate::geometry::lookup_coords;
use crate::shader::DISPLAY_SOURCE;

pub(crate) struct DisplayPass {
    pipeline: wgpu::RenderPipeline,
    lookup_buffer: wgpu::Buffer,
    /// `bind_groups[p]` reads the texture written during parity `p`.
    bind_groups: [wgpu::BindGroup; 2],
    num_particles: u32,
}

impl DisplayPass {
    pub fn new(
        device: &wgpu::Device,
        width: u32,
        height: u32,
        uniform_buffer: &wgpu::Buffer,
        position_views: &[wgpu::TextureView; 2],
        surface_format: wgpu::TextureFormat,
    ) -> Self {
        let coords = lookup_coords(width, height);
        let num_particles = coords.len() as u32;

        let lookup_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Lookup Buffer"),
            contents: bytemuck::cast_slice(&coords),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Display Bind Group Layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: false },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
            ],
        });

        let bind_groups = [0, 1].map(|parity| {
            device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("Display Bind Group"),
                layout: &bind_group_layout,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: uniform_buffer.as_entire_binding(),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: wgpu::BindingResource::TextureView(
                            &position_views[write_index(parity)],
                        ),
                    },
                ],
            })
        });

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Display Shader"),
            source: wgpu::ShaderSource::Wgsl(DISPLAY_SOURCE.into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Display Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Display Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    step_mode: wgpu::VertexStepMode::Instance,
                    attributes: &[wgpu::VertexAttribute {
                        offset: 0,
                        shader_location: 0,
                        format: wgpu::VertexFormat::Float32x2,
                    }],
                }],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        Self {
            pipeline,
            lookup_buffer,
            bind_groups,
            num_particles,
        }
    }

    /// Record the point set draw into an already-begun render pass.
    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>, parity: usize) {
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &self.bind_groups[parity], &[]);
        pass.set_vertex_buffer(0, self.lookup_buffer.slice(..));
        pass.draw(0..6, 0..self.num_particles);
    }
}
