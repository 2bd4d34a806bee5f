//! WGSL validation tests for the assembled pipeline shaders.
//!
//! The GPU never runs in CI, so the shaders are checked offline with naga:
//! every shader the crate can assemble must parse and validate, and a
//! malformed custom rule must be caught.

use murmuration::shader::{sim_shader, DEFAULT_RULE, DISPLAY_SOURCE};

/// Parse and validate a WGSL module.
fn validate_wgsl(source: &str) -> Result<(), String> {
    let module = naga::front::wgsl::parse_str(source)
        .map_err(|e| format!("WGSL parse error: {:?}", e))?;

    let mut validator = naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::all(),
    );
    validator
        .validate(&module)
        .map_err(|e| format!("WGSL validation error: {:?}", e))?;

    Ok(())
}

#[test]
fn test_default_sim_shader_validates() {
    validate_wgsl(&sim_shader(DEFAULT_RULE)).expect("default sim shader should be valid");
}

#[test]
fn test_display_shader_validates() {
    validate_wgsl(DISPLAY_SOURCE).expect("display shader should be valid");
}

#[test]
fn test_custom_rule_validates() {
    let shader = sim_shader(
        r#"
        let pull = -normalize(p) * uniforms.bounds * 0.1;
        p += pull * uniforms.delta_time;
    "#,
    );
    validate_wgsl(&shader).expect("custom rule should assemble into a valid shader");
}

#[test]
fn test_rule_can_use_texel_and_dims() {
    let shader = sim_shader(
        r#"
        let neighbor = textureLoad(positions, (texel + vec2<i32>(1, 0)) % vec2<i32>(dims), 0).xyz;
        p = mix(p, neighbor, 0.01);
    "#,
    );
    validate_wgsl(&shader).expect("rule using texel/dims should be valid");
}

#[test]
fn test_empty_rule_validates() {
    validate_wgsl(&sim_shader("")).expect("empty rule should leave positions untouched but valid");
}

#[test]
fn test_malformed_rule_fails_validation() {
    let shader = sim_shader("p += not_a_vector ++;");
    assert!(validate_wgsl(&shader).is_err());
}

#[test]
fn test_rule_with_wrong_types_fails_validation() {
    // Parses, but assigns a vec2 to the vec3 position.
    let shader = sim_shader("p = vec2<f32>(0.0, 0.0);");
    assert!(validate_wgsl(&shader).is_err());
}

#[test]
fn test_shaders_share_uniform_layout() {
    // Both passes bind the same uniform buffer; the struct declarations
    // must not drift apart.
    let sim = sim_shader(DEFAULT_RULE);
    for field in [
        "view_proj: mat4x4<f32>",
        "resolution: vec2<f32>",
        "time: f32",
        "delta_time: f32",
        "point_size: f32",
        "bounds: f32",
    ] {
        assert!(sim.contains(field), "sim shader missing {}", field);
        assert!(DISPLAY_SOURCE.contains(field), "display shader missing {}", field);
    }
}
