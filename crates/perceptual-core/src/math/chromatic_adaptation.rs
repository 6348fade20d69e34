//! Bradford chromatic adaptation
//!
//! Maps XYZ seen under one white point to the corresponding XYZ under
//! another, scaling in the Bradford cone response space. This is the
//! transform ICC.1:2022 Annex E recommends for the `chad` tag.
//!
//! Reference: http://www.brucelindbloom.com/index.html?Eqn_ChromAdapt.html

use crate::color::WhitePoint;
use crate::math::Matrix3x3;

/// Bradford matrix: XYZ → LMS (cone response)
const BRADFORD_XYZ_TO_LMS: Matrix3x3 = Matrix3x3::new([
    [0.8951000, 0.2664000, -0.1614000],
    [-0.7502000, 1.7135000, 0.0367000],
    [0.0389000, -0.0685000, 1.0296000],
]);

/// Exact inverse of [`BRADFORD_XYZ_TO_LMS`]
const BRADFORD_LMS_TO_XYZ: Matrix3x3 = Matrix3x3::new([
    [0.9869929054667121, -0.1470542564209901, 0.15996265166373125],
    [0.4323052697233945, 0.5183602715367776, 0.049291228212855615],
    [-0.008528664575177331, 0.04004282165408486, 0.96848669578755],
]);

/// Bradford matrix adapting `src_white` to `dst_white`
///
/// The result M is applied as XYZ_dst = M × XYZ_src and maps `src_white`
/// onto `dst_white`.
pub fn bradford_matrix(src_white: &WhitePoint, dst_white: &WhitePoint) -> Matrix3x3 {
    let src = BRADFORD_XYZ_TO_LMS.multiply_vec(src_white.xyz.to_array());
    let dst = BRADFORD_XYZ_TO_LMS.multiply_vec(dst_white.xyz.to_array());

    let ratio = |d: f64, s: f64| if s.abs() > 1e-10 { d / s } else { 1.0 };
    let scale = Matrix3x3::diagonal(
        ratio(dst[0], src[0]),
        ratio(dst[1], src[1]),
        ratio(dst[2], src[2]),
    );

    BRADFORD_LMS_TO_XYZ.multiply(&scale.multiply(&BRADFORD_XYZ_TO_LMS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Xyz;
    use crate::color::white_point::{D50, D65};

    #[test]
    fn test_inverse_constant() {
        let product = BRADFORD_LMS_TO_XYZ.multiply(&BRADFORD_XYZ_TO_LMS);
        assert!(product.approx_eq(&Matrix3x3::identity(), 1e-12));
    }

    #[test]
    fn test_identity_adaptation() {
        assert!(bradford_matrix(&D65, &D65).approx_eq(&Matrix3x3::identity(), 1e-12));
    }

    #[test]
    fn test_d65_to_d50_known_values() {
        // Lindbloom's published Bradford D65 → D50 matrix.
        let expected = Matrix3x3::new([
            [1.0478112, 0.0228866, -0.0501270],
            [0.0295424, 0.9904844, -0.0170491],
            [-0.0092345, 0.0150436, 0.7521316],
        ]);
        assert!(bradford_matrix(&D65, &D50).approx_eq(&expected, 1e-3));
    }

    #[test]
    fn test_white_maps_to_white() {
        let adapted = Xyz::from_array(bradford_matrix(&D65, &D50).multiply_vec(D65.xyz.to_array()));
        assert!(adapted.approx_eq(&D50.xyz, 1e-12), "{:?}", adapted);
    }

    #[test]
    fn test_adaptation_roundtrip() {
        let color = Xyz::new(0.3, 0.5, 0.2);
        let there = bradford_matrix(&D65, &D50).multiply_vec(color.to_array());
        let back = Xyz::from_array(bradford_matrix(&D50, &D65).multiply_vec(there));
        assert!(back.approx_eq(&color, 1e-12));
    }
}
