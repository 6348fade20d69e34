//! CIE Standard Illuminant White Points
//!
//! White points are specified as CIE XYZ coordinates normalized to Y=1.0.

use crate::color::Xyz;

/// A white point definition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WhitePoint {
    /// Name of the illuminant
    pub name: &'static str,
    /// CIE XYZ coordinates (Y normalized to 1.0)
    pub xyz: Xyz,
}

impl WhitePoint {
    pub const fn new(name: &'static str, x: f64, y: f64, z: f64) -> Self {
        Self {
            name,
            xyz: Xyz::new(x, y, z),
        }
    }

    /// White point from CIE 1931 xy chromaticity coordinates
    pub fn from_chromaticity(name: &'static str, x: f64, y: f64) -> Self {
        Self {
            name,
            xyz: Xyz::from_xyy(x, y, 1.0),
        }
    }

    /// Chromaticity coordinates (x, y)
    pub fn chromaticity(&self) -> (f64, f64) {
        let sum = self.xyz.x + self.xyz.y + self.xyz.z;
        if sum > 0.0 {
            (self.xyz.x / sum, self.xyz.y / sum)
        } else {
            (0.0, 0.0)
        }
    }
}

/// ICC Profile Connection Space illuminant (D50 as encoded in ICC.1:2022)
///
/// The reference white of every CIELAB/CIELCh value in this crate.
pub const D50: WhitePoint = WhitePoint::new("D50", 0.9642, 1.0, 0.8249);

/// CIE Standard Illuminant D65, from the sRGB chromaticity (0.3127, 0.3290)
pub const D65: WhitePoint = WhitePoint::new("D65", 0.3127 / 0.3290, 1.0, (1.0 - 0.3127 - 0.3290) / 0.3290);
