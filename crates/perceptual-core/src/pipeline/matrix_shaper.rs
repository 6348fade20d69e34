//! Matrix-shaper device model
//!
//! Matrix-shaper profiles are the most common ICC profile type (sRGB, Display
//! P3, Adobe RGB). They consist of:
//! 1. One TRC per channel, decoding device values to linear light
//! 2. A 3x3 colorant matrix mapping linear RGB to XYZ relative to D50
//!
//! # Pipeline
//!
//! Device RGB → TRC decode → colorant matrix → XYZ D50
//! XYZ D50 → inverse matrix → TRC encode → device RGB

use crate::color::{D50, D65, WhitePoint, Xyz};
use crate::math::{Matrix3x3, ParametricCurve, bradford_matrix};
use crate::{Error, Result};

use super::stages::{TrcCurve, TrcStage};

/// RGB ↔ XYZ-D50 model of a matrix-shaper profile
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixShaper {
    /// Linear RGB → XYZ D50
    to_xyz: Matrix3x3,
    /// XYZ D50 → linear RGB
    from_xyz: Matrix3x3,
    trc: TrcStage,
}

impl MatrixShaper {
    /// Create from a colorant matrix and curves
    ///
    /// Fails if the matrix cannot be inverted.
    pub fn new(to_xyz: Matrix3x3, trc: TrcStage) -> Result<Self> {
        let from_xyz = to_xyz.inverse().ok_or(Error::SingularMatrix)?;
        Ok(Self {
            to_xyz,
            from_xyz,
            trc,
        })
    }

    /// IEC 61966-2-1 sRGB, adapted to D50 with Bradford
    pub fn srgb() -> Self {
        let to_xyz_d65 = primaries_to_xyz([0.64, 0.33], [0.30, 0.60], [0.15, 0.06], &D65);
        let to_xyz = bradford_matrix(&D65, &D50).multiply(&to_xyz_d65);
        let trc = TrcStage::uniform(TrcCurve::Parametric(ParametricCurve::srgb()));

        // The sRGB primaries are linearly independent.
        let from_xyz = to_xyz.inverse().unwrap_or_default();
        Self {
            to_xyz,
            from_xyz,
            trc,
        }
    }

    /// Extract the device model from a parsed profile
    ///
    /// The profile must be an RGB matrix-shaper profile with all three TRCs.
    pub fn from_profile(profile: &moxcms::ColorProfile) -> Result<Self> {
        if !matches!(profile.color_space, moxcms::DataColorSpace::Rgb) {
            return Err(Error::UnsupportedColorSpace(format!(
                "{:?}",
                profile.color_space
            )));
        }
        if !profile.is_matrix_shaper() {
            return Err(Error::UnsupportedProfile(
                "profile has no colorant matrix and TRCs".to_string(),
            ));
        }

        let trc = TrcStage::from_moxcms(
            profile.red_trc.as_ref(),
            profile.green_trc.as_ref(),
            profile.blue_trc.as_ref(),
        )
        .ok_or_else(|| Error::InvalidProfile("malformed tone reproduction curve".to_string()))?;

        Self::new(Matrix3x3::from(profile.colorant_matrix()), trc)
    }

    /// Linear RGB → XYZ D50 matrix
    pub fn to_xyz_matrix(&self) -> &Matrix3x3 {
        &self.to_xyz
    }

    pub fn trc(&self) -> &TrcStage {
        &self.trc
    }

    /// Device RGB → linear RGB, channels clamped to [0, 1]
    pub fn decode(&self, rgb: [f64; 3]) -> [f64; 3] {
        self.trc.decode(rgb)
    }

    /// Linear RGB → device RGB, channels clamped to [0, 1]
    pub fn encode(&self, linear: [f64; 3]) -> [f64; 3] {
        self.trc.encode(linear)
    }

    /// Linear RGB → device RGB without clamping
    ///
    /// Negative values are mirrored through the curve and values above one
    /// continue linearly, so a channel leaves [0, 1] exactly when its linear
    /// value does.
    pub fn encode_unbounded(&self, linear: [f64; 3]) -> [f64; 3] {
        let extend = |curve: &TrcCurve, v: f64| {
            if v < 0.0 {
                -curve.encode(-v)
            } else if v > 1.0 {
                curve.encode(1.0) + (v - 1.0)
            } else {
                curve.encode(v)
            }
        };
        [
            extend(&self.trc.red, linear[0]),
            extend(&self.trc.green, linear[1]),
            extend(&self.trc.blue, linear[2]),
        ]
    }

    pub fn linear_to_xyz_d50(&self, linear: [f64; 3]) -> Xyz {
        Xyz::from_array(self.to_xyz.multiply_vec(linear))
    }

    pub fn xyz_d50_to_linear(&self, xyz: Xyz) -> [f64; 3] {
        self.from_xyz.multiply_vec(xyz.to_array())
    }

    /// Device RGB → XYZ D50
    pub fn rgb_to_xyz_d50(&self, rgb: [f64; 3]) -> Xyz {
        self.linear_to_xyz_d50(self.decode(rgb))
    }

    /// XYZ D50 → device RGB, clamped to [0, 1]
    pub fn xyz_d50_to_rgb(&self, xyz: Xyz) -> [f64; 3] {
        self.encode(self.xyz_d50_to_linear(xyz))
    }
}

/// Linear RGB → XYZ matrix from primary chromaticities and white point
///
/// Each primary's XYZ is scaled so that RGB (1, 1, 1) maps to the white.
pub fn primaries_to_xyz(r: [f64; 2], g: [f64; 2], b: [f64; 2], white: &WhitePoint) -> Matrix3x3 {
    let column = |[x, y]: [f64; 2]| [x / y, 1.0, (1.0 - x - y) / y];
    let unscaled = Matrix3x3::from_columns(column(r), column(g), column(b));

    let [sr, sg, sb] = unscaled
        .inverse()
        .map(|inv| inv.multiply_vec(white.xyz.to_array()))
        .unwrap_or([1.0, 1.0, 1.0]);

    unscaled.multiply(&Matrix3x3::diagonal(sr, sg, sb))
}
