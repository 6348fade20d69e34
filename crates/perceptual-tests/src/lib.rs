//! # perceptual-tests
//!
//! Parity and integration testing for perceptual-core.
//!
//! This crate provides:
//! - Reference conversions from lcms2 and palette
//! - Accuracy measurements using deltaE2000
//! - Seeded random samplers for RGB and LCh inputs
//!
//! ## Reference Implementations
//!
//! - **lcms2**: Industry standard, used for device RGB to CIELab D50 and for
//!   writing real ICC profiles to disk
//! - **palette**: Pure Rust color science, used for CIELab and Oklab formulas
//!
//! ## Test Categories
//!
//! 1. **Conversions**: graph conversions against palette
//! 2. **Device model**: RGB to CIELab against lcms2
//! 3. **Gamut**: boundary search properties on random inputs
//! 4. **Profiles**: loading, rejection, metadata
//! 5. **Sharing**: one color space used from many threads

pub mod accuracy;
pub mod patterns;
pub mod reference;

pub use accuracy::{DeltaEStats, compare_lab_samples};

/// Route `tracing` output of the code under test to the test harness.
///
/// Filtered by `RUST_LOG`; safe to call from every test.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
