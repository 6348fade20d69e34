//! One color space shared by many threads

use std::sync::Arc;
use std::thread;

use perceptual_core::RgbColorSpace;
use perceptual_tests::init_logging;
use perceptual_tests::patterns::{random_cielch, random_oklch};
use rayon::prelude::*;

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_color_space_is_send_and_sync() {
    assert_send_sync::<RgbColorSpace>();
    assert_send_sync::<Arc<RgbColorSpace>>();
}

#[test]
fn test_parallel_reduction_matches_sequential() {
    init_logging();
    let shared = RgbColorSpace::create_srgb();
    let sequential_space = RgbColorSpace::create_srgb();

    let inputs = random_cielch(21, 2000);
    let parallel: Vec<_> = inputs
        .par_iter()
        .map(|lch| shared.reduce_cielch_d50_chroma_to_fit_into_gamut(lch))
        .collect();
    let sequential: Vec<_> = inputs
        .iter()
        .map(|lch| sequential_space.reduce_cielch_d50_chroma_to_fit_into_gamut(lch))
        .collect();

    assert_eq!(parallel, sequential);
}

#[test]
fn test_concurrent_first_use_of_maximum_chroma() {
    init_logging();
    let space = RgbColorSpace::create_srgb();
    let expected = RgbColorSpace::create_srgb().profile_maximum_oklch_chroma();

    let results: Vec<f64> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let space = Arc::clone(&space);
                scope.spawn(move || space.profile_maximum_oklch_chroma())
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("worker panicked"))
            .collect()
    });

    assert!(results.iter().all(|&max| max == expected), "{:?}", results);
}

#[test]
fn test_handles_outlive_creator() {
    init_logging();
    let inputs = random_oklch(22, 200);
    let handle = {
        let space = RgbColorSpace::create_srgb();
        Arc::clone(&space)
    };

    let workers: Vec<_> = inputs
        .chunks(50)
        .map(|chunk| {
            let space = Arc::clone(&handle);
            let chunk = chunk.to_vec();
            thread::spawn(move || {
                chunk
                    .iter()
                    .all(|lch| space.is_oklch_in_gamut(&space.reduce_oklch_chroma_to_fit_into_gamut(lch)))
            })
        })
        .collect();

    for worker in workers {
        assert!(worker.join().expect("worker panicked"));
    }
    assert_eq!(Arc::strong_count(&handle), 1);
}
