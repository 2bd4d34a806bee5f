//! Static geometry for the two render passes.
//!
//! The simulation pass rasterizes a fixed clip-space quad so the fragment
//! stage runs exactly once per texel of the position texture. The display
//! pass draws one instance per texel; each instance carries only a 2D
//! lookup coordinate into that texture, never a position.

use bytemuck::{Pod, Zeroable};

/// One vertex of the simulation quad: clip-space position plus texture UV.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct QuadVertex {
    /// Clip-space position (z is always 0).
    pub position: [f32; 3],
    /// Texture coordinate in the unit square.
    pub uv: [f32; 2],
}

/// Two triangles spanning clip space `[-1, 1]^2`, UVs covering `[0, 1]^2`.
///
/// Rasterized against the position texture, this invokes the simulation
/// fragment shader once for every texel. The V axis is flipped relative
/// to clip Y: framebuffer row 0 is the top, so this keeps each fragment's
/// UV addressing the texel it writes.
pub const QUAD_VERTICES: [QuadVertex; 6] = [
    QuadVertex { position: [-1.0, -1.0, 0.0], uv: [0.0, 1.0] },
    QuadVertex { position: [1.0, -1.0, 0.0], uv: [1.0, 1.0] },
    QuadVertex { position: [1.0, 1.0, 0.0], uv: [1.0, 0.0] },
    QuadVertex { position: [-1.0, -1.0, 0.0], uv: [0.0, 1.0] },
    QuadVertex { position: [1.0, 1.0, 0.0], uv: [1.0, 0.0] },
    QuadVertex { position: [-1.0, 1.0, 0.0], uv: [0.0, 0.0] },
];

/// Generate the per-particle lookup coordinates for a `width` x `height`
/// position texture.
///
/// Returns exactly `width * height` entries in row-major order. Each entry
/// is in `[0, 1)` on both axes and addresses a distinct texel, so the
/// display shader's `lookup * dims` fetch always lands inside the texture.
pub fn lookup_coords(width: u32, height: u32) -> Vec<[f32; 2]> {
    let mut coords = Vec::with_capacity((width * height) as usize);
    for row in 0..height {
        for col in 0..width {
            coords.push([col as f32 / width as f32, row as f32 / height as f32]);
        }
    }
    coords
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_count_matches_grid() {
        assert_eq!(lookup_coords(4, 4).len(), 16);
        assert_eq!(lookup_coords(64, 32).len(), 64 * 32);
        assert_eq!(lookup_coords(1, 1).len(), 1);
    }

    #[test]
    fn test_lookup_coords_in_unit_range() {
        for coord in lookup_coords(17, 9) {
            assert!(coord[0] >= 0.0 && coord[0] < 1.0);
            assert!(coord[1] >= 0.0 && coord[1] < 1.0);
        }
    }

    #[test]
    fn test_lookup_coords_address_distinct_texels() {
        let width = 8u32;
        let height = 8u32;
        let mut seen = std::collections::HashSet::new();
        for coord in lookup_coords(width, height) {
            let texel = (
                (coord[0] * width as f32) as u32,
                (coord[1] * height as f32) as u32,
            );
            assert!(texel.0 < width && texel.1 < height);
            assert!(seen.insert(texel), "duplicate texel {:?}", texel);
        }
        assert_eq!(seen.len(), (width * height) as usize);
    }

    #[test]
    fn test_quad_uv_matches_framebuffer_rows() {
        // Fragment at clip (x, y) lands on framebuffer row (0.5 - y/2) * h;
        // its UV must address that same row of the position texture.
        for v in &QUAD_VERTICES {
            assert_eq!(v.uv[0], v.position[0] * 0.5 + 0.5);
            assert_eq!(v.uv[1], 0.5 - v.position[1] * 0.5);
        }
    }

    #[test]
    fn test_quad_spans_clip_space() {
        let xs: Vec<f32> = QUAD_VERTICES.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = QUAD_VERTICES.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::INFINITY, f32::min), -1.0);
        assert_eq!(xs.iter().cloned().fold(f32::NEG_INFINITY, f32::max), 1.0);
        assert_eq!(ys.iter().cloned().fold(f32::INFINITY, f32::min), -1.0);
        assert_eq!(ys.iter().cloned().fold(f32::NEG_INFINITY, f32::max), 1.0);
        for v in &QUAD_VERTICES {
            assert_eq!(v.position[2], 0.0);
            assert!(v.uv[0] >= 0.0 && v.uv[0] <= 1.0);
            assert!(v.uv[1] >= 0.0 && v.uv[1] <= 1.0);
        }
    }
}
