//! CIE XYZ tristimulus values
//!
//! The device-independent hub of every conversion: ICC profiles map device
//! RGB to XYZ relative to D50, Oklab is defined on XYZ relative to D65.

use std::ops::{Add, Mul, Sub};

/// CIE XYZ tristimulus values, Y normalized so that white has Y = 1.0
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Xyz {
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// From xyY chromaticity plus luminance
    pub fn from_xyy(x: f64, y: f64, big_y: f64) -> Self {
        if y == 0.0 {
            return Self::default();
        }
        Self::new(x * big_y / y, big_y, (1.0 - x - y) * big_y / y)
    }

    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.x - other.x).abs() < epsilon
            && (self.y - other.y).abs() < epsilon
            && (self.z - other.z).abs() < epsilon
    }
}

impl From<[f64; 3]> for Xyz {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Xyz> for [f64; 3] {
    fn from(xyz: Xyz) -> Self {
        xyz.to_array()
    }
}

impl Add for Xyz {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Xyz {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Xyz {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_xyy() {
        let xyz = Xyz::from_xyy(0.3457, 0.3585, 1.0);
        assert!((xyz.x - 0.96429567).abs() < 1e-6);
        assert!((xyz.z - 0.82510460).abs() < 1e-6);
        assert_eq!(Xyz::from_xyy(0.3, 0.0, 1.0), Xyz::default());
    }

    #[test]
    fn test_arithmetic() {
        let a = Xyz::new(0.1, 0.2, 0.3);
        let b = Xyz::new(0.4, 0.5, 0.6);
        assert!((a + b).approx_eq(&Xyz::new(0.5, 0.7, 0.9), 1e-12));
        assert!((b - a).approx_eq(&Xyz::new(0.3, 0.3, 0.3), 1e-12));
        assert!((a * 2.0).approx_eq(&Xyz::new(0.2, 0.4, 0.6), 1e-12));
    }
}
