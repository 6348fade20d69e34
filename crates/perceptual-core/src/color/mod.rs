//! Color value types
//!
//! This module provides:
//! - CIE XYZ and white point definitions
//! - CIELAB and the polar [`LchDouble`] shared by CIELCh and Oklch
//! - Oklab
//! - Device RGB values and the 8-bit [`Rgba8`] pixel
//! - [`MultiRgb`] for HSL/HSV/HWB notation

pub mod lab;
pub mod lch;
pub mod multi_rgb;
pub mod oklab;
pub mod rgb;
pub mod white_point;
pub mod xyz;

pub use lab::{Lab, delta_e_2000};
pub use lch::{LchDouble, normalize_hue_360, normalize_polar_360};
pub use multi_rgb::MultiRgb;
pub use oklab::Oklab;
pub use rgb::{RgbDouble, Rgba8};
pub use white_point::{D50, D65, WhitePoint};
pub use xyz::Xyz;
