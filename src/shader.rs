//! WGSL assembly for the simulation and display passes.
//!
//! The display shader is a fixed asset. The simulation shader is assembled
//! from a template plus an update rule: a WGSL snippet that reads the
//! current position in `p` and leaves the updated position in `p`. The
//! snippet may use `uniforms` (time, delta_time, bounds), `texel`, and
//! `dims`. Positions are wrapped back into the bounding cube after the
//! rule runs.

/// Shader for the display pass, fixed at compile time.
pub const DISPLAY_SOURCE: &str = include_str!("shaders/display.wgsl");

/// Default update rule: a smooth time-varying flow field that keeps the
/// flock drifting and folding inside the bounding cube.
pub const DEFAULT_RULE: &str = r#"    let t = uniforms.time;
    let s = 2.0 / max(uniforms.bounds, 1e-6);
    let drift = vec3<f32>(
        sin(p.y * s + t * 0.9) + sin(p.z * s * 1.3 - t * 0.6),
        sin(p.z * s * 0.7 + t * 0.7) + sin(p.x * s * 1.9 - t * 1.1),
        sin(p.x * s * 1.1 + t * 0.8) + sin(p.y * s * 2.3 - t * 0.5),
    );
    p += drift * uniforms.bounds * 0.06 * uniforms.delta_time;"#;

/// Assemble the simulation shader around an update rule.
pub fn sim_shader(rule: &str) -> String {
    format!(
        r#"struct Uniforms {{
    view_proj: mat4x4<f32>,
    resolution: vec2<f32>,
    time: f32,
    delta_time: f32,
    point_size: f32,
    bounds: f32,
    _pad: vec2<f32>,
}};

struct VertexInput {{
    @location(0) position: vec3<f32>,
    @location(1) uv: vec2<f32>,
}};

struct VertexOutput {{
    @builtin(position) clip_position: vec4<f32>,
    @location(0) uv: vec2<f32>,
}};

@group(0) @binding(0)
var<uniform> uniforms: Uniforms;
@group(0) @binding(1)
var positions: texture_2d<f32>;

@vertex
fn vs_main(in: VertexInput) -> VertexOutput {{
    var out: VertexOutput;
    out.clip_position = vec4<f32>(in.position, 1.0);
    out.uv = in.uv;
    return out;
}}

// Fold a position back into [-bounds, bounds) on each axis.
fn wrap_bounds(p: vec3<f32>, bounds: f32) -> vec3<f32> {{
    let span = 2.0 * bounds;
    let shifted = p + vec3<f32>(bounds);
    return shifted - span * floor(shifted / span) - vec3<f32>(bounds);
}}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {{
    let dims = vec2<f32>(textureDimensions(positions));
    let texel = vec2<i32>(in.uv * dims);
    var p = textureLoad(positions, texel, 0).xyz;

{rule}

    p = wrap_bounds(p, uniforms.bounds);
    return vec4<f32>(p, 1.0);
}}
"#
    )
}
