//! Oklab relative to D65
//!
//! Björn Ottosson's perceptual space: a linear map from XYZ to a cone
//! response (LMS), a cube root, and a second linear map. The matrices are
//! the high-precision versions recomputed for the CSS Color 4 D65 white.
//!
//! Lightness is in [0, 1]; chroma of real colors rarely exceeds 0.4.

use crate::color::Xyz;
use crate::math::Matrix3x3;

const XYZ_TO_LMS: Matrix3x3 = Matrix3x3::new([
    [0.8190224379967030, 0.3619062600528904, -0.1288737815209879],
    [0.0329836539323885, 0.9292868615863434, 0.0361446663506424],
    [0.0481771893596242, 0.2642395317527308, 0.6335478284694309],
]);

const LMS_TO_OKLAB: Matrix3x3 = Matrix3x3::new([
    [0.2104542683093140, 0.7936177747023054, -0.0040720430116193],
    [1.9779985324311684, -2.4285922420485799, 0.4505937096174110],
    [0.0259040424655478, 0.7827717124575296, -0.8086757549230774],
]);

const OKLAB_TO_LMS: Matrix3x3 = Matrix3x3::new([
    [1.0, 0.3963377773761749, 0.2158037573099136],
    [1.0, -0.1055613458156586, -0.0638541728258133],
    [1.0, -0.0894841775298119, -1.2914855480194092],
]);

const LMS_TO_XYZ: Matrix3x3 = Matrix3x3::new([
    [1.2268798758459243, -0.5578149944602171, 0.2813910456659647],
    [-0.0405757452148008, 1.1122868032803170, -0.0717110580655164],
    [-0.0763729366746601, -0.4214933324022432, 1.5869240198367816],
]);

/// Oklab coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Oklab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Oklab {
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// XYZ relative to D65 to Oklab
    pub fn from_xyz_d65(xyz: Xyz) -> Self {
        let [l, m, s] = XYZ_TO_LMS.multiply_vec(xyz.to_array());
        let [l, a, b] = LMS_TO_OKLAB.multiply_vec([l.cbrt(), m.cbrt(), s.cbrt()]);
        Self::new(l, a, b)
    }

    /// Oklab to XYZ relative to D65
    pub fn to_xyz_d65(&self) -> Xyz {
        let [l, m, s] = OKLAB_TO_LMS.multiply_vec([self.l, self.a, self.b]);
        Xyz::from_array(LMS_TO_XYZ.multiply_vec([l * l * l, m * m * m, s * s * s]))
    }
}
