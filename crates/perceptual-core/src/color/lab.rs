//! CIELAB (L*a*b*) relative to D50
//!
//! - L*: Lightness (0 = black, 100 = white)
//! - a*: Green-red axis (negative = green, positive = red)
//! - b*: Blue-yellow axis (negative = blue, positive = yellow)
//!
//! All Lab values in this crate use the ICC PCS illuminant [`D50`] as
//! reference white, matching what a CMM produces with a Lab D50 profile.

use crate::color::{D50, WhitePoint, Xyz};

/// ε = (6/29)³, the knee of the CIELAB companding function
const DELTA: f64 = 6.0 / 29.0;

/// CIELAB color coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lab {
    /// Lightness (0 to 100)
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Lab {
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.l, self.a, self.b]
    }

    /// XYZ relative to D50 to Lab D50
    pub fn from_xyz(xyz: Xyz) -> Self {
        Self::from_xyz_with_white(xyz, &D50)
    }

    pub fn from_xyz_with_white(xyz: Xyz, white: &WhitePoint) -> Self {
        let fx = lab_f(xyz.x / white.xyz.x);
        let fy = lab_f(xyz.y / white.xyz.y);
        let fz = lab_f(xyz.z / white.xyz.z);

        Self {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }

    /// Lab D50 to XYZ relative to D50
    pub fn to_xyz(&self) -> Xyz {
        self.to_xyz_with_white(&D50)
    }

    pub fn to_xyz_with_white(&self, white: &WhitePoint) -> Xyz {
        let fy = (self.l + 16.0) / 116.0;
        let fx = fy + self.a / 500.0;
        let fz = fy - self.b / 200.0;

        Xyz::new(
            lab_f_inv(fx) * white.xyz.x,
            lab_f_inv(fy) * white.xyz.y,
            lab_f_inv(fz) * white.xyz.z,
        )
    }

    #[inline]
    pub fn chroma(&self) -> f64 {
        self.a.hypot(self.b)
    }

    /// CIE76 color difference (Euclidean distance)
    pub fn delta_e(&self, other: &Self) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        (dl * dl + da * da + db * db).sqrt()
    }

    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.l - other.l).abs() < epsilon
            && (self.a - other.a).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
    }
}

impl From<[f64; 3]> for Lab {
    fn from(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }
}

impl From<Lab> for [f64; 3] {
    fn from(lab: Lab) -> Self {
        lab.to_array()
    }
}

/// Cube root above the knee, linear segment below
#[inline]
fn lab_f(t: f64) -> f64 {
    if t > DELTA * DELTA * DELTA {
        t.cbrt()
    } else {
        t / (3.0 * DELTA * DELTA) + 4.0 / 29.0
    }
}

#[inline]
fn lab_f_inv(t: f64) -> f64 {
    if t > DELTA {
        t * t * t
    } else {
        3.0 * DELTA * DELTA * (t - 4.0 / 29.0)
    }
}

/// CIEDE2000 color difference
///
/// A difference of 1.0 is approximately one just-noticeable difference.
/// Reference: http://www.brucelindbloom.com/index.html?Eqn_DeltaE_CIE2000.html
pub fn delta_e_2000(lab1: Lab, lab2: Lab) -> f64 {
    let c_bar = (lab1.chroma() + lab2.chroma()) / 2.0;
    let c_bar_7 = c_bar.powi(7);
    let g = 0.5 * (1.0 - (c_bar_7 / (c_bar_7 + 25.0_f64.powi(7))).sqrt());

    let prime = |lab: Lab| {
        let a = lab.a * (1.0 + g);
        let c = a.hypot(lab.b);
        let h = if a == 0.0 && lab.b == 0.0 {
            0.0
        } else {
            lab.b.atan2(a).to_degrees().rem_euclid(360.0)
        };
        (c, h)
    };
    let (c1, h1) = prime(lab1);
    let (c2, h2) = prime(lab2);

    let delta_l = lab2.l - lab1.l;
    let delta_c = c2 - c1;
    let delta_h = if c1 * c2 == 0.0 {
        0.0
    } else {
        let diff = h2 - h1;
        if diff > 180.0 {
            diff - 360.0
        } else if diff < -180.0 {
            diff + 360.0
        } else {
            diff
        }
    };
    let delta_big_h = 2.0 * (c1 * c2).sqrt() * (delta_h.to_radians() / 2.0).sin();

    let l_bar = (lab1.l + lab2.l) / 2.0;
    let c_bar_prime = (c1 + c2) / 2.0;
    let h_bar = if c1 * c2 == 0.0 {
        h1 + h2
    } else if (h1 - h2).abs() <= 180.0 {
        (h1 + h2) / 2.0
    } else if h1 + h2 < 360.0 {
        (h1 + h2 + 360.0) / 2.0
    } else {
        (h1 + h2 - 360.0) / 2.0
    };

    let t = 1.0 - 0.17 * (h_bar - 30.0).to_radians().cos()
        + 0.24 * (2.0 * h_bar).to_radians().cos()
        + 0.32 * (3.0 * h_bar + 6.0).to_radians().cos()
        - 0.20 * (4.0 * h_bar - 63.0).to_radians().cos();

    let delta_theta = 30.0 * (-((h_bar - 275.0) / 25.0).powi(2)).exp();
    let c_bar_prime_7 = c_bar_prime.powi(7);
    let r_c = 2.0 * (c_bar_prime_7 / (c_bar_prime_7 + 25.0_f64.powi(7))).sqrt();
    let s_l = 1.0 + (0.015 * (l_bar - 50.0).powi(2)) / (20.0 + (l_bar - 50.0).powi(2)).sqrt();
    let s_c = 1.0 + 0.045 * c_bar_prime;
    let s_h = 1.0 + 0.015 * c_bar_prime * t;
    let r_t = -(2.0 * delta_theta).to_radians().sin() * r_c;

    let dl = delta_l / s_l;
    let dc = delta_c / s_c;
    let dh = delta_big_h / s_h;

    (dl * dl + dc * dc + dh * dh + r_t * dc * dh).sqrt()
}
