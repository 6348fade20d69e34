//! Test sample generation
//!
//! All random samplers are seeded so failures reproduce.

use perceptual_core::{LchDouble, RgbDouble};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Sample families used across the integration tests
#[derive(Debug, Clone, Copy)]
pub enum SamplePattern {
    /// The eight corners of the RGB cube
    CubeCorners,
    /// Gray ramp 0-255
    Grayscale,
    /// Fully saturated hue ramp, one sample per degree
    HueRamp,
    /// Uniform random RGB with seed
    Random(u64),
}

/// Device RGB samples of a pattern
pub fn rgb_samples(pattern: SamplePattern, count: usize) -> Vec<RgbDouble> {
    match pattern {
        SamplePattern::CubeCorners => (0..8u8)
            .map(|i| {
                let bit = |b: u8| f64::from((i >> b) & 1);
                RgbDouble::new(bit(0), bit(1), bit(2))
            })
            .collect(),
        SamplePattern::Grayscale => (0..=255u8).map(|v| RgbDouble::from_u8(v, v, v)).collect(),
        SamplePattern::HueRamp => (0..360).map(|deg| hue_to_rgb(f64::from(deg))).collect(),
        SamplePattern::Random(seed) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            (0..count)
                .map(|_| RgbDouble::new(rng.r#gen(), rng.r#gen(), rng.r#gen()))
                .collect()
        }
    }
}

/// Random 8-bit RGB triples
pub fn random_rgb8(seed: u64, count: usize) -> Vec<[u8; 3]> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count).map(|_| rng.r#gen()).collect()
}

/// Random CIELCh-D50 colors, many of them far outside any display gamut
pub fn random_cielch(seed: u64, count: usize) -> Vec<LchDouble> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            LchDouble::new(
                rng.gen_range(0.0..=100.0),
                rng.gen_range(0.0..=200.0),
                rng.gen_range(0.0..360.0),
            )
        })
        .collect()
}

/// Random Oklch colors, many of them far outside any display gamut
pub fn random_oklch(seed: u64, count: usize) -> Vec<LchDouble> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            LchDouble::new(
                rng.gen_range(0.0..=1.0),
                rng.gen_range(0.0..=0.5),
                rng.gen_range(0.0..360.0),
            )
        })
        .collect()
}

/// Fully saturated, full value RGB at a hue angle in degrees
fn hue_to_rgb(hue: f64) -> RgbDouble {
    let h = hue.rem_euclid(360.0) / 60.0;
    let x = 1.0 - (h % 2.0 - 1.0).abs();
    let [r, g, b] = match h as u32 {
        0 => [1.0, x, 0.0],
        1 => [x, 1.0, 0.0],
        2 => [0.0, 1.0, x],
        3 => [0.0, x, 1.0],
        4 => [x, 0.0, 1.0],
        _ => [1.0, 0.0, x],
    };
    RgbDouble::new(r, g, b)
}
