//! One RGB color in RGB, HSL, HSV and HWB notation
//!
//! These notations are plain reparameterizations of the encoded RGB cube and
//! carry no colorimetry. Ranges: RGB channels in [0, 255], hue in [0, 360),
//! every other component in [0, 100].
//!
//! For achromatic colors the hue is undefined; the caller may pass the hue
//! it wants to keep so that a color dragged through gray does not jump back
//! to red.

use super::lch::normalize_hue_360;

/// A color described simultaneously in four RGB-derived notations
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiRgb {
    /// Red, green, blue in [0, 255]
    pub rgb: [f64; 3],
    /// Hue, saturation, lightness
    pub hsl: [f64; 3],
    /// Hue, saturation, value
    pub hsv: [f64; 3],
    /// Hue, whiteness, blackness
    pub hwb: [f64; 3],
}

impl MultiRgb {
    /// From RGB in [0, 255]; `hue_hint` is used when the color is gray
    pub fn from_rgb(rgb: [f64; 3], hue_hint: Option<f64>) -> Self {
        let [r, g, b] = rgb.map(|v| (v / 255.0).clamp(0.0, 1.0));
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let hue = if delta <= 0.0 {
            hue_hint.map_or(0.0, normalize_hue_360)
        } else {
            let sector = if max == r {
                (g - b) / delta
            } else if max == g {
                (b - r) / delta + 2.0
            } else {
                (r - g) / delta + 4.0
            };
            normalize_hue_360(sector * 60.0)
        };
        let saturation = if max <= 0.0 { 0.0 } else { delta / max };

        Self::from_normalized_hsv(hue, saturation, max)
    }

    /// From hue, saturation and lightness
    pub fn from_hsl(hsl: [f64; 3]) -> Self {
        let hue = normalize_hue_360(hsl[0]);
        let s = (hsl[1] / 100.0).clamp(0.0, 1.0);
        let l = (hsl[2] / 100.0).clamp(0.0, 1.0);

        let v = l + s * l.min(1.0 - l);
        let sv = if v <= 0.0 { 0.0 } else { 2.0 * (1.0 - l / v) };

        let mut result = Self::from_normalized_hsv(hue, sv, v);
        // Keep the caller's saturation even where HSL collapses (black, white).
        result.hsl = [hue, s * 100.0, l * 100.0];
        result
    }

    /// From hue, saturation and value
    pub fn from_hsv(hsv: [f64; 3]) -> Self {
        let hue = normalize_hue_360(hsv[0]);
        let s = (hsv[1] / 100.0).clamp(0.0, 1.0);
        let v = (hsv[2] / 100.0).clamp(0.0, 1.0);

        let mut result = Self::from_normalized_hsv(hue, s, v);
        result.hsv = [hue, s * 100.0, v * 100.0];
        result
    }

    /// From hue, whiteness and blackness
    ///
    /// When whiteness + blackness exceeds 100 both are scaled down
    /// proportionally, which yields a gray.
    pub fn from_hwb(hwb: [f64; 3]) -> Self {
        let hue = normalize_hue_360(hwb[0]);
        let mut w = (hwb[1] / 100.0).clamp(0.0, 1.0);
        let mut b = (hwb[2] / 100.0).clamp(0.0, 1.0);
        if w + b > 1.0 {
            let sum = w + b;
            w /= sum;
            b /= sum;
        }

        let v = 1.0 - b;
        let s = if v <= 0.0 { 0.0 } else { 1.0 - w / v };

        let mut result = Self::from_normalized_hsv(hue, s, v);
        result.hwb = [hue, w * 100.0, b * 100.0];
        result
    }

    /// All notations from HSV with s and v in [0, 1]
    fn from_normalized_hsv(hue: f64, s: f64, v: f64) -> Self {
        let l = v * (1.0 - s / 2.0);
        let sl = if l <= 0.0 || l >= 1.0 {
            0.0
        } else {
            (v - l) / l.min(1.0 - l)
        };

        Self {
            rgb: hsv_to_rgb(hue, s, v).map(|c| c * 255.0),
            hsl: [hue, sl * 100.0, l * 100.0],
            hsv: [hue, s * 100.0, v * 100.0],
            hwb: [hue, (1.0 - s) * v * 100.0, (1.0 - v) * 100.0],
        }
    }
}

/// HSV (hue in degrees, s and v in [0, 1]) to RGB in [0, 1]
fn hsv_to_rgb(hue: f64, s: f64, v: f64) -> [f64; 3] {
    let k = |n: f64| {
        let k = (n + hue / 60.0) % 6.0;
        v - v * s * k.min(4.0 - k).clamp(0.0, 1.0)
    };
    [k(5.0), k(3.0), k(1.0)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: [f64; 3], expected: [f64; 3]) {
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-9, "{:?} vs {:?}", actual, expected);
        }
    }

    #[test]
    fn test_primaries() {
        let red = MultiRgb::from_rgb([255.0, 0.0, 0.0], None);
        assert_close(red.hsl, [0.0, 100.0, 50.0]);
        assert_close(red.hsv, [0.0, 100.0, 100.0]);
        assert_close(red.hwb, [0.0, 0.0, 0.0]);

        let teal = MultiRgb::from_rgb([0.0, 127.5, 127.5], None);
        assert_close(teal.hsv, [180.0, 100.0, 50.0]);
        assert_close(teal.hsl, [180.0, 100.0, 25.0]);
    }

    #[test]
    fn test_gray_keeps_hue_hint() {
        let gray = MultiRgb::from_rgb([128.0, 128.0, 128.0], Some(200.0));
        assert_eq!(gray.hsv[0], 200.0);
        assert_eq!(gray.hsl[1], 0.0);
        assert_eq!(MultiRgb::from_rgb([128.0, 128.0, 128.0], None).hsv[0], 0.0);
    }

    #[test]
    fn test_hsl_roundtrip() {
        let original = [210.0, 40.0, 70.0];
        let multi = MultiRgb::from_hsl(original);
        let back = MultiRgb::from_rgb(multi.rgb, None);
        assert_close(back.hsl, original);
    }

    #[test]
    fn test_hsl_black_keeps_saturation() {
        let black = MultiRgb::from_hsl([120.0, 80.0, 0.0]);
        assert_close(black.rgb, [0.0, 0.0, 0.0]);
        assert_close(black.hsl, [120.0, 80.0, 0.0]);
    }

    #[test]
    fn test_hwb_normalizes_oversized_sum() {
        let gray = MultiRgb::from_hwb([30.0, 60.0, 60.0]);
        assert_close(gray.rgb, [127.5, 127.5, 127.5]);
        assert_close(gray.hwb, [30.0, 50.0, 50.0]);
    }

    #[test]
    fn test_hwb_matches_hsv() {
        let from_hsv = MultiRgb::from_hsv([300.0, 50.0, 80.0]);
        let from_hwb = MultiRgb::from_hwb(from_hsv.hwb);
        assert_close(from_hwb.rgb, from_hsv.rgb);
    }
}
