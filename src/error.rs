//! Error types for murmuration.
//!
//! This module provides error types for GPU initialization and for
//! running the windowed flock renderer.

use std::fmt;

/// Errors that can occur during GPU initialization.
#[derive(Debug)]
pub enum GpuError {
    /// Failed to create a surface for rendering.
    SurfaceCreation(wgpu::CreateSurfaceError),
    /// No compatible GPU adapter found.
    AdapterRequest(wgpu::RequestAdapterError),
    /// Failed to create GPU device.
    DeviceRequest(wgpu::RequestDeviceError),
}

impl fmt::Display for GpuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpuError::SurfaceCreation(e) => write!(f, "Failed to create GPU surface: {}", e),
            GpuError::AdapterRequest(e) => write!(f, "No compatible GPU adapter found: {}. Ensure your system has a GPU with Vulkan/Metal/DX12 support.", e),
            GpuError::DeviceRequest(e) => write!(f, "Failed to create GPU device: {}", e),
        }
    }
}

impl std::error::Error for GpuError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GpuError::SurfaceCreation(e) => Some(e),
            GpuError::AdapterRequest(e) => Some(e),
            GpuError::DeviceRequest(e) => Some(e),
        }
    }
}

impl From<wgpu::CreateSurfaceError> for GpuError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        GpuError::SurfaceCreation(e)
    }
}

impl From<wgpu::RequestAdapterError> for GpuError {
    fn from(e: wgpu::RequestAdapterError) -> Self {
        GpuError::AdapterRequest(e)
    }
}

impl From<wgpu::RequestDeviceError> for GpuError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        GpuError::DeviceRequest(e)
    }
}

/// Errors that can occur when running a flock.
#[derive(Debug)]
pub enum FlockError {
    /// Failed to create event loop.
    EventLoop(winit::error::EventLoopError),
    /// Failed to create window.
    Window(winit::error::OsError),
    /// GPU initialization failed.
    Gpu(GpuError),
    /// The position grid has a zero dimension.
    EmptyGrid,
    /// The bounding cube half-size is not a positive number.
    InvalidBounds,
}

impl fmt::Display for FlockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlockError::EventLoop(e) => write!(f, "Failed to create event loop: {}", e),
            FlockError::Window(e) => write!(f, "Failed to create window: {}", e),
            FlockError::Gpu(e) => write!(f, "GPU error: {}", e),
            FlockError::EmptyGrid => write!(f, "Position grid must have non-zero width and height. Use .with_grid() to set the dimensions."),
            FlockError::InvalidBounds => write!(f, "Bounding cube half-size must be positive. Use .with_bounds() to set it."),
        }
    }
}

impl std::error::Error for FlockError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FlockError::EventLoop(e) => Some(e),
            FlockError::Window(e) => Some(e),
            FlockError::Gpu(e) => Some(e),
            FlockError::EmptyGrid | FlockError::InvalidBounds => None,
        }
    }
}

impl From<winit::error::EventLoopError> for FlockError {
    fn from(e: winit::error::EventLoopError) -> Self {
        FlockError::EventLoop(e)
    }
}

impl From<winit::error::OsError> for FlockError {
    fn from(e: winit::error::OsError) -> Self {
        FlockError::Window(e)
    }
}

impl From<GpuError> for FlockError {
    fn from(e: GpuError) -> Self {
        FlockError::Gpu(e)
    }
}
