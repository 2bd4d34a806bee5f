//! Flock builder and window runner.
//!
//! `Flock` configures the particle grid, assembles the shaders, and runs
//! the winit event loop with mouse orbit/zoom camera bindings.

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::error::FlockError;
use crate::gpu::GpuState;
use crate::shader;
use crate::spawn;
use crate::time::Time;

/// A GPU flock renderer builder.
///
/// The position texture is `width` x `height` texels; the particle count
/// is always exactly their product. Use method chaining to configure,
/// then call `.run()` to open the window.
///
/// ```ignore
/// use murmuration::Flock;
///
/// Flock::new()
///     .with_grid(512, 512)
///     .with_bounds(512.0)
///     .with_point_size(2.0)
///     .run()?;
/// ```
pub struct Flock {
    width: u32,
    height: u32,
    bounds: f32,
    point_size: f32,
    rule: Option<String>,
    seed: Option<u64>,
    title: String,
}

impl Flock {
    /// Create a flock with default settings: a 256x256 grid inside a
    /// cube of half-size 256, drawn as 2-pixel points.
    pub fn new() -> Self {
        Self {
            width: 256,
            height: 256,
            bounds: 256.0,
            point_size: 2.0,
            rule: None,
            seed: None,
            title: "Murmuration".to_string(),
        }
    }

    /// Set the position texture dimensions. The particle count becomes
    /// `width * height`.
    pub fn with_grid(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the bounding cube half-size. Initial positions are uniform in
    /// `[-bounds, bounds]` on each axis and the simulation wraps there.
    pub fn with_bounds(mut self, bounds: f32) -> Self {
        self.bounds = bounds;
        self
    }

    /// Set the on-screen point size in pixels.
    pub fn with_point_size(mut self, point_size: f32) -> Self {
        self.point_size = point_size;
        self
    }

    /// Replace the default update rule with a custom WGSL snippet.
    ///
    /// The snippet runs once per texel with the current position in
    /// `p: vec3<f32>` and must leave the updated position in `p`. It may
    /// read `uniforms.time`, `uniforms.delta_time`, and `uniforms.bounds`.
    pub fn with_rule(mut self, rule: impl Into<String>) -> Self {
        self.rule = Some(rule.into());
        self
    }

    /// Seed the initial position distribution for reproducible flocks.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Number of particles this flock will render.
    pub fn particle_count(&self) -> u32 {
        self.width * self.height
    }

    /// Open the window and run until it is closed.
    pub fn run(self) -> Result<(), FlockError> {
        if self.width == 0 || self.height == 0 {
            return Err(FlockError::EmptyGrid);
        }
        if !(self.bounds > 0.0) {
            return Err(FlockError::InvalidBounds);
        }

        let sim_shader = shader::sim_shader(self.rule.as_deref().unwrap_or(shader::DEFAULT_RULE));
        let initial_positions = match self.seed {
            Some(seed) => spawn::random_positions_seeded(self.width, self.height, self.bounds, seed),
            None => spawn::random_positions(self.width, self.height, self.bounds),
        };

        let config = FlockConfig {
            width: self.width,
            height: self.height,
            bounds: self.bounds,
            point_size: self.point_size,
            title: self.title,
            sim_shader,
            initial_positions,
        };

        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App::new(config);
        event_loop.run_app(&mut app)?;

        match app.init_error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl Default for Flock {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolved configuration handed to the GPU state.
pub(crate) struct FlockConfig {
    pub width: u32,
    pub height: u32,
    pub bounds: f32,
    pub point_size: f32,
    pub title: String,
    pub sim_shader: String,
    pub initial_positions: Vec<f32>,
}

struct App {
    window: Option<Arc<Window>>,
    gpu_state: Option<GpuState>,
    config: FlockConfig,
    time: Time,
    mouse_pressed: bool,
    last_mouse_pos: Option<(f64, f64)>,
    init_error: Option<FlockError>,
}

impl App {
    fn new(config: FlockConfig) -> Self {
        Self {
            window: None,
            gpu_state: None,
            config,
            time: Time::new(),
            mouse_pressed: false,
            last_mouse_pos: None,
            init_error: None,
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 720));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                self.init_error = Some(FlockError::Window(e));
                event_loop.exit();
                return;
            }
        };

        match pollster::block_on(GpuState::new(window.clone(), &self.config)) {
            Ok(gpu_state) => {
                self.gpu_state = Some(gpu_state);
                self.window = Some(window);
            }
            Err(e) => {
                self.init_error = Some(FlockError::Gpu(e));
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.resize(physical_size);
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if button == MouseButton::Left {
                    self.mouse_pressed = state == ElementState::Pressed;
                    if !self.mouse_pressed {
                        self.last_mouse_pos = None;
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                if self.mouse_pressed {
                    if let Some((last_x, last_y)) = self.last_mouse_pos {
                        let dx = position.x - last_x;
                        let dy = position.y - last_y;

                        if let Some(gpu_state) = &mut self.gpu_state {
                            gpu_state.camera.yaw -= dx as f32 * 0.005;
                            gpu_state.camera.pitch += dy as f32 * 0.005;
                            gpu_state.camera.pitch = gpu_state.camera.pitch.clamp(-1.5, 1.5);
                        }
                    }
                    self.last_mouse_pos = Some((position.x, position.y));
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let scroll = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.1,
                };
                if let Some(gpu_state) = &mut self.gpu_state {
                    let bounds = self.config.bounds;
                    gpu_state.camera.distance -= scroll * bounds * 0.15;
                    gpu_state.camera.distance = gpu_state
                        .camera
                        .distance
                        .clamp(bounds * 0.3, bounds * 8.0);
                }
            }
            WindowEvent::RedrawRequested => {
                if let Some(gpu_state) = &mut self.gpu_state {
                    let (time, delta_time) = self.time.update();
                    match gpu_state.render(time, delta_time) {
                        Ok(_) => {}
                        Err(wgpu::SurfaceError::Lost) => {
                            gpu_state.resize(winit::dpi::PhysicalSize {
                                width: gpu_state.config.width,
                                height: gpu_state.config.height,
                            })
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
                        Err(e) => eprintln!("Render error: {:?}", e),
                    }
                }
                if let Some(window) = &self.window {
                    if self.time.frame() % 120 == 0 {
                        window.set_title(&format!(
                            "{} | {:.0} fps",
                            self.config.title,
                            self.time.fps()
                        ));
                    }
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_particle_count_matches_grid() {
        let flock = Flock::new().with_grid(128, 64);
        assert_eq!(flock.particle_count(), 128 * 64);
    }

    #[test]
    fn test_empty_grid_is_rejected() {
        let err = Flock::new().with_grid(0, 64).run().unwrap_err();
        assert!(matches!(err, FlockError::EmptyGrid));

        let err = Flock::new().with_grid(64, 0).run().unwrap_err();
        assert!(matches!(err, FlockError::EmptyGrid));
    }

    #[test]
    fn test_non_positive_bounds_is_rejected() {
        let err = Flock::new().with_bounds(0.0).run().unwrap_err();
        assert!(matches!(err, FlockError::InvalidBounds));

        let err = Flock::new().with_bounds(-1.0).run().unwrap_err();
        assert!(matches!(err, FlockError::InvalidBounds));
    }

    #[test]
    fn test_defaults() {
        let flock = Flock::new();
        assert_eq!(flock.particle_count(), 256 * 256);
        assert_eq!(flock.bounds, 256.0);
        assert_eq!(flock.point_size, 2.0);
        assert!(flock.rule.is_none());
    }
}
