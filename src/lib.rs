//! # Murmuration
//!
//! GPU flock renderer: a texture-driven particle simulation displayed in
//! an interactive 3D scene with orbit camera controls.
//!
//! Positions live entirely on the GPU in a float texture. Every frame a
//! fragment-shader pass rewrites that texture through a ping-pong pair of
//! render targets, and a display pass places one fixed-size point per
//! texel by fetching its position in the vertex shader. The CPU only
//! uploads the initial random distribution and per-frame uniforms.
//!
//! ## Quick Start
//!
//! ```ignore
//! use murmuration::Flock;
//!
//! fn main() -> Result<(), murmuration::FlockError> {
//!     Flock::new()
//!         .with_grid(512, 512)      // 262_144 particles
//!         .with_bounds(512.0)       // cube from -512 to 512
//!         .with_point_size(2.0)
//!         .run()
//! }
//! ```
//!
//! ## Custom update rules
//!
//! The per-texel update rule is a WGSL snippet, replaceable at build time:
//!
//! ```ignore
//! Flock::new()
//!     .with_rule(r#"
//!         let pull = -normalize(p) * uniforms.bounds * 0.1;
//!         p += pull * uniforms.delta_time;
//!     "#)
//!     .run()?;
//! ```
//!
//! The snippet reads the current position in `p` and must leave the new
//! position in `p`; positions are wrapped back into the bounding cube
//! afterwards. Assembled shaders can be checked offline with naga (see
//! the integration tests).
//!
//! ## Controls
//!
//! Drag with the left mouse button to orbit, scroll to zoom.

mod camera;
mod error;
mod flock;
pub mod geometry;
mod gpu;
pub mod shader;
pub mod spawn;
pub mod time;

pub use camera::Camera;
pub use error::{FlockError, GpuError};
pub use flock::Flock;
pub use geometry::{lookup_coords, QuadVertex, QUAD_VERTICES};
pub use glam::{Mat4, Vec3};
