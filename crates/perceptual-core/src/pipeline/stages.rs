//! Tone reproduction curves
//!
//! One curve per RGB channel, decoded from the profile's `rTRC`/`gTRC`/`bTRC`
//! tags as moxcms hands them to us.

use moxcms::ToneReprCurve;

use crate::math::ParametricCurve;

/// Per-channel TRC stage
#[derive(Debug, Clone, PartialEq)]
pub struct TrcStage {
    pub red: TrcCurve,
    pub green: TrcCurve,
    pub blue: TrcCurve,
}

impl TrcStage {
    /// The same curve on all three channels
    pub fn uniform(curve: TrcCurve) -> Self {
        Self {
            red: curve.clone(),
            green: curve.clone(),
            blue: curve,
        }
    }

    /// Build from moxcms curves; None if any channel is missing or malformed
    pub fn from_moxcms(
        red: Option<&ToneReprCurve>,
        green: Option<&ToneReprCurve>,
        blue: Option<&ToneReprCurve>,
    ) -> Option<Self> {
        Some(Self {
            red: TrcCurve::from_moxcms(red?)?,
            green: TrcCurve::from_moxcms(green?)?,
            blue: TrcCurve::from_moxcms(blue?)?,
        })
    }

    /// Encoded → linear
    pub fn decode(&self, rgb: [f64; 3]) -> [f64; 3] {
        [
            self.red.decode(rgb[0]),
            self.green.decode(rgb[1]),
            self.blue.decode(rgb[2]),
        ]
    }

    /// Linear → encoded
    pub fn encode(&self, rgb: [f64; 3]) -> [f64; 3] {
        [
            self.red.encode(rgb[0]),
            self.green.encode(rgb[1]),
            self.blue.encode(rgb[2]),
        ]
    }
}

/// A single TRC curve
#[derive(Debug, Clone, PartialEq, Default)]
pub enum TrcCurve {
    /// Identity (linear)
    #[default]
    Identity,
    /// Simple gamma
    Gamma(f64),
    /// Sampled curve, normalized to [0, 1], monotonically increasing
    Table(Vec<f64>),
    /// ICC `para` curve
    Parametric(ParametricCurve),
}

impl TrcCurve {
    /// Convert a moxcms curve
    ///
    /// A `curv` with no entries is the identity and one entry is a u8Fixed8
    /// gamma. Returns None for parametric curves with an invalid parameter
    /// count.
    pub fn from_moxcms(curve: &ToneReprCurve) -> Option<Self> {
        #[allow(unreachable_patterns)]
        match curve {
            ToneReprCurve::Lut(table) => Some(match table.as_slice() {
                [] => Self::Identity,
                [gamma] => Self::Gamma(f64::from(*gamma) / 256.0),
                table => Self::Table(table.iter().map(|&v| f64::from(v) / 65535.0).collect()),
            }),
            ToneReprCurve::Parametric(params) => {
                let params: Vec<f64> = params.iter().map(|&v| f64::from(v)).collect();
                ParametricCurve::from_params(&params).map(Self::Parametric)
            }
            _ => None,
        }
    }

    /// Decode (encoded → linear), input clamped to [0, 1]
    pub fn decode(&self, x: f64) -> f64 {
        let x = x.clamp(0.0, 1.0);
        match self {
            TrcCurve::Identity => x,
            TrcCurve::Gamma(g) => x.powf(*g),
            TrcCurve::Parametric(curve) => curve.decode(x),
            TrcCurve::Table(table) => {
                if table.len() < 2 {
                    return table.first().copied().unwrap_or(x);
                }

                let last = table.len() - 1;
                let pos = x * last as f64;
                let idx = pos.floor() as usize;
                if idx >= last {
                    return table[last];
                }

                let frac = pos - idx as f64;
                table[idx] + frac * (table[idx + 1] - table[idx])
            }
        }
    }

    /// Encode (linear → encoded), input clamped to [0, 1]
    pub fn encode(&self, y: f64) -> f64 {
        let y = y.clamp(0.0, 1.0);
        match self {
            TrcCurve::Identity => y,
            TrcCurve::Gamma(g) => {
                if *g == 0.0 {
                    y
                } else {
                    y.powf(1.0 / *g)
                }
            }
            TrcCurve::Parametric(curve) => curve.encode(y),
            TrcCurve::Table(table) => {
                if table.len() < 2 {
                    return y;
                }

                // First entry not below y
                let lo = table.partition_point(|&v| v < y);
                if lo == 0 {
                    return 0.0;
                }
                if lo >= table.len() {
                    return 1.0;
                }

                let v0 = table[lo - 1];
                let v1 = table[lo];
                let t = if (v1 - v0).abs() > 1e-10 {
                    (y - v0) / (v1 - v0)
                } else {
                    0.0
                };

                ((lo - 1) as f64 + t) / (table.len() - 1) as f64
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trc_identity() {
        let trc = TrcCurve::Identity;
        assert!((trc.decode(0.5) - 0.5).abs() < 1e-10);
        assert!((trc.encode(0.5) - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_trc_gamma() {
        let trc = TrcCurve::Gamma(2.2);
        assert!((trc.decode(0.5) - 0.5_f64.powf(2.2)).abs() < 1e-10);
        assert!((trc.encode(0.5) - 0.5_f64.powf(1.0 / 2.2)).abs() < 1e-10);

        for i in 0..=255 {
            let x = i as f64 / 255.0;
            let roundtrip = trc.encode(trc.decode(x));
            assert!((roundtrip - x).abs() < 1e-9, "Roundtrip failed at {}", i);
        }
    }

    #[test]
    fn test_trc_table() {
        let table: Vec<f64> = (0..256).map(|i| (i as f64 / 255.0).powf(2.0)).collect();
        let trc = TrcCurve::Table(table);

        assert!((trc.decode(0.5) - 0.25).abs() < 0.001);
        assert!((trc.encode(0.25) - 0.5).abs() < 0.001);
        assert_eq!(trc.encode(0.0), 0.0);
        assert_eq!(trc.encode(1.0), 1.0);
    }

    #[test]
    fn test_from_moxcms_lut() {
        assert_eq!(
            TrcCurve::from_moxcms(&ToneReprCurve::Lut(vec![])),
            Some(TrcCurve::Identity)
        );
        // 2.2 in u8Fixed8 is 563/256
        assert_eq!(
            TrcCurve::from_moxcms(&ToneReprCurve::Lut(vec![563])),
            Some(TrcCurve::Gamma(563.0 / 256.0))
        );
        let table = TrcCurve::from_moxcms(&ToneReprCurve::Lut(vec![0, 32768, 65535])).unwrap();
        assert!((table.decode(1.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_from_moxcms_parametric() {
        let srgb = TrcCurve::from_moxcms(&ToneReprCurve::Parametric(vec![
            2.4,
            1.0 / 1.055,
            0.055 / 1.055,
            1.0 / 12.92,
            0.04045,
        ]))
        .unwrap();
        let reference = ParametricCurve::srgb();
        for i in 0..=10 {
            let x = i as f64 / 10.0;
            // Parameters went through f32
            assert!((srgb.decode(x) - reference.decode(x)).abs() < 1e-6);
        }

        assert!(TrcCurve::from_moxcms(&ToneReprCurve::Parametric(vec![1.0, 2.0])).is_none());
    }

    #[test]
    fn test_trc_stage() {
        let stage = TrcStage::uniform(TrcCurve::Parametric(ParametricCurve::srgb()));
        let rgb = [0.5, 0.25, 0.75];
        let roundtrip = stage.encode(stage.decode(rgb));
        for (a, b) in roundtrip.iter().zip(rgb) {
            assert!((a - b).abs() < 1e-9);
        }
    }

    #[test]
    fn test_stage_requires_all_channels() {
        let curve = ToneReprCurve::Lut(vec![]);
        assert!(TrcStage::from_moxcms(Some(&curve), None, Some(&curve)).is_none());
        assert!(TrcStage::from_moxcms(Some(&curve), Some(&curve), Some(&curve)).is_some());
    }
}
