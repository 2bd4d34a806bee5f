//! GPU state and the per-frame driver.
//!
//! Owns the surface, device, and the two passes. Each frame the driver
//! runs the simulation pass into the write half of the position pair,
//! draws the point set from that freshly written half, presents, and
//! flips parity.

mod display;
mod sim;

use std::sync::Arc;

use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;
use winit::window::Window;

use crate::camera::Camera;
use crate::error::GpuError;
use crate::flock::FlockConfig;
use display::DisplayPass;
use sim::SimPass;

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Frame uniforms shared by both passes. Layout must match the WGSL
/// `Uniforms` struct in `shader.rs` and `shaders/display.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct Uniforms {
    view_proj: [[f32; 4]; 4],
    resolution: [f32; 2],
    time: f32,
    delta_time: f32,
    point_size: f32,
    bounds: f32,
    _padding: [f32; 2],
}

pub(crate) struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    depth_texture: wgpu::TextureView,
    uniform_buffer: wgpu::Buffer,
    sim: SimPass,
    display: DisplayPass,
    parity: usize,
    pub camera: Camera,
    point_size: f32,
    bounds: f32,
}

impl GpuState {
    pub async fn new(window: Arc<Window>, flock: &FlockConfig) -> Result<Self, GpuError> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance.create_surface(window)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
                ..Default::default()
            })
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width,
            height: size.height,
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let depth_texture = create_depth_texture(&device, &config);

        // Camera exists before the first frame can render, so the display
        // pass never observes an unset view transform.
        let camera = Camera::framing(flock.bounds);
        let aspect = config.width as f32 / config.height as f32;

        let uniforms = Uniforms {
            view_proj: camera.view_proj(aspect).to_cols_array_2d(),
            resolution: [config.width as f32, config.height as f32],
            time: 0.0,
            delta_time: 0.0,
            point_size: flock.point_size,
            bounds: flock.bounds,
            _padding: [0.0; 2],
        };

        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Uniform Buffer"),
            contents: bytemuck::cast_slice(&[uniforms]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let sim = SimPass::new(
            &device,
            &queue,
            flock.width,
            flock.height,
            &flock.initial_positions,
            &uniform_buffer,
            &flock.sim_shader,
        );

        let display = DisplayPass::new(
            &device,
            flock.width,
            flock.height,
            &uniform_buffer,
            sim.views(),
            surface_format,
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            depth_texture,
            uniform_buffer,
            sim,
            display,
            parity: 0,
            camera,
            point_size: flock.point_size,
            bounds: flock.bounds,
        })
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
            self.depth_texture = create_depth_texture(&self.device, &self.config);
            // The position textures are deliberately untouched: their
            // dimensions define the particle count, not the window.
        }
    }

    fn update_uniforms(&mut self, time: f32, delta_time: f32) {
        let aspect = self.config.width as f32 / self.config.height as f32;

        let uniforms = Uniforms {
            view_proj: self.camera.view_proj(aspect).to_cols_array_2d(),
            resolution: [self.config.width as f32, self.config.height as f32],
            time,
            delta_time,
            point_size: self.point_size,
            bounds: self.bounds,
            _padding: [0.0; 2],
        };

        self.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::cast_slice(&[uniforms]));
    }

    pub fn render(&mut self, time: f32, delta_time: f32) -> Result<(), wgpu::SurfaceError> {
        self.update_uniforms(time, delta_time);

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });

        // Simulation pass - advance positions into the write half.
        self.sim.encode(&mut encoder, self.parity);

        // Display pass - draw the point set from the freshly written half.
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Display Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    depth_slice: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: 0.02,
                            g: 0.02,
                            b: 0.05,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_texture,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            self.display.draw(&mut render_pass, self.parity);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        self.parity = sim::write_index(self.parity);

        Ok(())
    }
}

fn create_depth_texture(
    device: &wgpu::Device,
    config: &wgpu::SurfaceConfiguration,
) -> wgpu::TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("Depth Texture"),
        size: wgpu::Extent3d {
            width: config.width,
            height: config.height,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    texture.create_view(&wgpu::TextureViewDescriptor::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniforms_layout_is_16_byte_aligned() {
        // Must stay in lockstep with the WGSL Uniforms struct.
        assert_eq!(std::mem::size_of::<Uniforms>(), 96);
        assert_eq!(std::mem::size_of::<Uniforms>() % 16, 0);
    }
}
