//! Cylindrical lightness/chroma/hue coordinates
//!
//! Shared by CIELCh-D50 (L in 0..=100) and Oklch (L in 0..=1). The value
//! type does not know which space it belongs to.

use std::fmt;

/// Lightness, chroma and hue (degrees) as doubles
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LchDouble {
    pub l: f64,
    pub c: f64,
    /// Hue angle in degrees
    pub h: f64,
}

impl LchDouble {
    #[inline]
    pub const fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }

    /// Exact coordinate comparison, without any hue wrapping.
    ///
    /// Meant for diagnostics; gamut logic never compares floats exactly.
    pub fn has_same_coordinates(&self, other: &Self) -> bool {
        self.l == other.l && self.c == other.c && self.h == other.h
    }

    /// Same color with chroma ≥ 0 and hue in [0, 360)
    pub fn normalized(&self) -> Self {
        let (c, h) = normalize_polar_360(self.c, self.h);
        Self::new(self.l, c, h)
    }

    /// Cartesian (L, a, b) from polar coordinates
    pub fn to_cartesian(&self) -> [f64; 3] {
        let (sin, cos) = self.h.to_radians().sin_cos();
        [self.l, self.c * cos, self.c * sin]
    }

    /// Polar coordinates from Cartesian (L, a, b); hue is in [0, 360)
    pub fn from_cartesian(l: f64, a: f64, b: f64) -> Self {
        Self::new(l, a.hypot(b), normalize_hue_360(b.atan2(a).to_degrees()))
    }
}

impl fmt::Display for LchDouble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LchDouble({}, {}, {}°)", self.l, self.c, self.h)
    }
}

/// Wrap a hue angle into [0, 360)
#[inline]
pub fn normalize_hue_360(h: f64) -> f64 {
    let wrapped = h.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Normalize a polar pair: negative radius flips the angle by 180°.
pub fn normalize_polar_360(c: f64, h: f64) -> (f64, f64) {
    if c < 0.0 {
        (-c, normalize_hue_360(h + 180.0))
    } else {
        (c, normalize_hue_360(h))
    }
}
