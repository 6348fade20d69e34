//! Space-agnostic color carrier
//!
//! [`GenericColor`] holds up to four numbers whose meaning is decided by
//! whoever holds the matching [`ColorSpace`](crate::ColorSpace) label. The
//! conversions to and from the named value types copy components
//! positionally and never transform them.

use std::fmt;

use crate::color::{Lab, LchDouble, Oklab, Xyz};

/// Three components as a column vector
pub type Trio = [f64; 3];

/// Four doubles; `fourth` is 0 unless it carries alpha
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenericColor {
    pub first: f64,
    pub second: f64,
    pub third: f64,
    pub fourth: f64,
}

impl GenericColor {
    #[inline]
    pub const fn new(first: f64, second: f64, third: f64) -> Self {
        Self::with_fourth(first, second, third, 0.0)
    }

    #[inline]
    pub const fn with_fourth(first: f64, second: f64, third: f64, fourth: f64) -> Self {
        Self {
            first,
            second,
            third,
            fourth,
        }
    }

    #[inline]
    pub const fn from_trio(trio: Trio) -> Self {
        Self::new(trio[0], trio[1], trio[2])
    }

    /// The first three components, in order
    #[inline]
    pub const fn to_trio(&self) -> Trio {
        [self.first, self.second, self.third]
    }

    /// Read the components as X, Y, Z. No validation.
    #[inline]
    pub const fn reinterpret_as_xyz(&self) -> Xyz {
        Xyz::new(self.first, self.second, self.third)
    }

    /// Read the components as L, a, b. No validation.
    #[inline]
    pub const fn reinterpret_as_lab(&self) -> Lab {
        Lab::new(self.first, self.second, self.third)
    }

    /// Read the components as Oklab L, a, b. No validation.
    #[inline]
    pub const fn reinterpret_as_oklab(&self) -> Oklab {
        Oklab::new(self.first, self.second, self.third)
    }

    /// Read the components as L, C, h. No validation.
    #[inline]
    pub const fn reinterpret_as_lch(&self) -> LchDouble {
        LchDouble::new(self.first, self.second, self.third)
    }
}

impl From<Trio> for GenericColor {
    fn from(trio: Trio) -> Self {
        Self::from_trio(trio)
    }
}

impl From<[f64; 4]> for GenericColor {
    fn from(v: [f64; 4]) -> Self {
        Self::with_fourth(v[0], v[1], v[2], v[3])
    }
}

impl From<Xyz> for GenericColor {
    fn from(xyz: Xyz) -> Self {
        Self::new(xyz.x, xyz.y, xyz.z)
    }
}

impl From<Lab> for GenericColor {
    fn from(lab: Lab) -> Self {
        Self::new(lab.l, lab.a, lab.b)
    }
}

impl From<Oklab> for GenericColor {
    fn from(lab: Oklab) -> Self {
        Self::new(lab.l, lab.a, lab.b)
    }
}

impl From<LchDouble> for GenericColor {
    fn from(lch: LchDouble) -> Self {
        Self::new(lch.l, lch.c, lch.h)
    }
}

impl fmt::Display for GenericColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GenericColor({}, {}, {}, {})",
            self.first, self.second, self.third, self.fourth
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fourth_defaults_to_zero() {
        assert_eq!(GenericColor::new(1.0, 2.0, 3.0).fourth, 0.0);
        assert_eq!(GenericColor::from([1.0, 2.0, 3.0]).fourth, 0.0);
        assert_eq!(GenericColor::from([1.0, 2.0, 3.0, 0.5]).fourth, 0.5);
    }

    #[test]
    fn test_positional_copy() {
        let lab = Lab::new(50.0, -20.0, 30.0);
        let generic = GenericColor::from(lab);
        assert_eq!(generic.to_trio(), [50.0, -20.0, 30.0]);
        assert_eq!(generic.reinterpret_as_lab(), lab);

        // No transformation happens when the label changes.
        let xyz = generic.reinterpret_as_xyz();
        assert_eq!(xyz.to_array(), [50.0, -20.0, 30.0]);
    }

    #[test]
    fn test_lch_order() {
        let lch = LchDouble::new(70.0, 30.0, 120.0);
        assert_eq!(GenericColor::from(lch).reinterpret_as_lch(), lch);
    }
}
