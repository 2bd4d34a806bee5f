//! Initial position data for the flock.
//!
//! Positions are generated CPU-side once at startup and uploaded into the
//! float position texture; after that the simulation pass owns them.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Number of floats per texel in the position texture (RGBA).
pub const CHANNELS: usize = 4;

/// Generate uniformly random positions inside the cube
/// `[-bounds, bounds]^3`, one per texel of a `width` x `height` texture.
///
/// Returns `width * height * 4` floats in RGBA layout: `.rgb` is the
/// position, `.a` is written as 1.0 and ignored by the shaders.
pub fn random_positions(width: u32, height: u32, bounds: f32) -> Vec<f32> {
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(42);
    random_positions_seeded(width, height, bounds, seed)
}

/// Like [`random_positions`], but with a caller-provided seed for
/// reproducible flocks.
pub fn random_positions_seeded(width: u32, height: u32, bounds: f32, seed: u64) -> Vec<f32> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let count = (width * height) as usize;
    let mut data = Vec::with_capacity(count * CHANNELS);
    for _ in 0..count {
        data.push(rng.gen_range(-bounds..bounds));
        data.push(rng.gen_range(-bounds..bounds));
        data.push(rng.gen_range(-bounds..bounds));
        data.push(1.0);
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_length_matches_grid() {
        let data = random_positions_seeded(32, 16, 1.0, 7);
        assert_eq!(data.len(), 32 * 16 * CHANNELS);
    }

    #[test]
    fn test_positions_inside_bounds() {
        let bounds = 512.0;
        let data = random_positions_seeded(64, 64, bounds, 1);
        for texel in data.chunks_exact(CHANNELS) {
            assert!(texel[0] >= -bounds && texel[0] < bounds);
            assert!(texel[1] >= -bounds && texel[1] < bounds);
            assert!(texel[2] >= -bounds && texel[2] < bounds);
            assert_eq!(texel[3], 1.0);
        }
    }

    #[test]
    fn test_positions_roughly_uniform() {
        // Mean near zero and every octant populated over many samples.
        let bounds = 100.0;
        let data = random_positions_seeded(128, 128, bounds, 99);
        let count = (data.len() / CHANNELS) as f32;

        let mut mean = [0.0f64; 3];
        let mut octants = [0u32; 8];
        for texel in data.chunks_exact(CHANNELS) {
            for axis in 0..3 {
                mean[axis] += texel[axis] as f64;
            }
            let idx = ((texel[0] > 0.0) as usize)
                | (((texel[1] > 0.0) as usize) << 1)
                | (((texel[2] > 0.0) as usize) << 2);
            octants[idx] += 1;
        }

        for axis in 0..3 {
            let m = mean[axis] / count as f64;
            assert!(m.abs() < bounds as f64 * 0.05, "axis {} mean {}", axis, m);
        }
        let expected = count / 8.0;
        for (idx, &n) in octants.iter().enumerate() {
            assert!(
                (n as f32) > expected * 0.8 && (n as f32) < expected * 1.2,
                "octant {} count {} far from expected {}",
                idx,
                n,
                expected
            );
        }
    }

    #[test]
    fn test_seed_is_reproducible() {
        let a = random_positions_seeded(16, 16, 1.0, 5);
        let b = random_positions_seeded(16, 16, 1.0, 5);
        assert_eq!(a, b);
    }
}
