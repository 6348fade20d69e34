//! Device RGB values
//!
//! [`RgbDouble`] carries profile-encoded (non-linear) device values,
//! nominally in [0, 1]. Values outside that range are meaningful: they are
//! how an unbounded conversion reports that a color is out of gamut.
//!
//! [`Rgba8`] is the 8-bit pixel handed to renderers.

use bytemuck::{Pod, Zeroable};

/// Device RGB, channels nominally in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RgbDouble {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl RgbDouble {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    #[inline]
    pub const fn new(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }

    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.red, self.green, self.blue]
    }

    /// From 8-bit channel values (0-255)
    pub fn from_u8(red: u8, green: u8, blue: u8) -> Self {
        Self::new(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
        )
    }

    /// Every channel within [-tolerance, 1 + tolerance]
    pub fn is_within_unit_range(&self, tolerance: f64) -> bool {
        self.to_array()
            .iter()
            .all(|&v| v >= -tolerance && v <= 1.0 + tolerance)
    }

    /// Clamp every channel into [0, 1]; NaN becomes 0
    pub fn clamped(&self) -> Self {
        let clamp = |v: f64| if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) };
        Self::new(clamp(self.red), clamp(self.green), clamp(self.blue))
    }

    /// Opaque 8-bit pixel, rounding after clamping
    pub fn to_rgba8(&self) -> Rgba8 {
        let quantize = |v: f64| (v * 255.0).round() as u8;
        let c = self.clamped();
        Rgba8::opaque(quantize(c.red), quantize(c.green), quantize(c.blue))
    }
}

/// 8-bit RGBA pixel, non-premultiplied
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    /// Fully transparent black: the "no valid color here" sentinel
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, u8::MAX)
    }

    #[inline]
    pub const fn is_transparent(&self) -> bool {
        self.a == 0
    }

    /// Channel values scaled to [0, 1], alpha dropped
    pub fn to_rgb_double(&self) -> RgbDouble {
        RgbDouble::from_u8(self.r, self.g, self.b)
    }

    /// View a pixel row as raw RGBA bytes
    pub fn as_bytes(pixels: &[Self]) -> &[u8] {
        bytemuck::cast_slice(pixels)
    }
}
