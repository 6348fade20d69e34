//! # perceptual-core
//!
//! Perceptual color conversions and gamut boundary search for RGB devices
//! described by ICC profiles.
//!
//! ## Overview
//!
//! - A conversion graph between CIELab/CIELCh (D50), XYZ (D50 and D65) and
//!   Oklab/Oklch, carrying values as [`GenericColor`]
//! - [`RgbColorSpace`]: gamut membership, device RGB conversions and profile
//!   metadata for built-in sRGB or an RGB matrix-shaper ICC profile
//! - Chroma reduction: the most colorful in-gamut color at a given lightness
//!   and hue
//!
//! ## Quick Start
//!
//! ```
//! use perceptual_core::{LchDouble, RgbColorSpace};
//!
//! let srgb = RgbColorSpace::create_srgb();
//!
//! let lch = LchDouble::new(60.0, 150.0, 140.0);
//! let shown = srgb.reduce_cielch_d50_chroma_to_fit_into_gamut(&lch);
//! let pixel = srgb.from_cielch_d50_to_rgba8_bound(&shown);
//! assert_eq!(pixel.a, 255);
//! ```
//!
//! Profiles from disk:
//!
//! ```no_run
//! use perceptual_core::RgbColorSpace;
//!
//! if let Some(space) = RgbColorSpace::create_from_file("/usr/share/color/icc/display.icc") {
//!     println!("{}", space.metadata().name_or_empty());
//! }
//! ```

pub mod color;
pub mod conversion;
pub mod error;
pub mod gamut;
pub mod generic;
pub mod icc;
pub mod math;
pub mod metadata;
pub mod options;
pub mod pipeline;
pub mod profile;
pub mod rgb_color_space;
pub mod space;

pub use color::{
    D50, D65, Lab, LchDouble, MultiRgb, Oklab, RgbDouble, Rgba8, WhitePoint, Xyz, delta_e_2000,
    normalize_hue_360, normalize_polar_360,
};
pub use conversion::{Conversion, ConversionMap, all_conversions, conversions_from, convert};
pub use error::{Error, Result};
pub use gamut::{ChromaSearch, reduce_chroma};
pub use generic::{GenericColor, Trio};
pub use metadata::ProfileMetadata;
pub use options::ColorSpaceOptions;
pub use profile::ColorProfile;
pub use rgb_color_space::RgbColorSpace;
pub use space::ColorSpace;

/// Version of perceptual-core
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
