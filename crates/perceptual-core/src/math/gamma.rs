//! ICC parametric transfer curves
//!
//! The five `para` function types of ICC.1:2022 Section 10.18. The forward
//! direction ("decode") maps profile-encoded device values to linear light;
//! the inverse ("encode") maps linear light back.

/// ICC Parametric Curve Type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParametricCurveType {
    /// Type 0: Y = X^g
    Gamma,
    /// Type 1: Y = (aX + b)^g  if X >= -b/a, else 0
    CIE122,
    /// Type 2: Y = (aX + b)^g + c  if X >= -b/a, else c
    IEC61966_3,
    /// Type 3: Y = (aX + b)^g  if X >= d, else cX (sRGB-like)
    IEC61966_2_1,
    /// Type 4: Y = (aX + b)^g + e  if X >= d, else cX + f
    Full,
}

impl ParametricCurveType {
    /// The type whose parameter list has exactly `count` entries
    pub fn from_param_count(count: usize) -> Option<Self> {
        match count {
            1 => Some(Self::Gamma),
            3 => Some(Self::CIE122),
            4 => Some(Self::IEC61966_3),
            5 => Some(Self::IEC61966_2_1),
            7 => Some(Self::Full),
            _ => None,
        }
    }

    pub fn param_count(&self) -> usize {
        match self {
            Self::Gamma => 1,
            Self::CIE122 => 3,
            Self::IEC61966_3 => 4,
            Self::IEC61966_2_1 => 5,
            Self::Full => 7,
        }
    }
}

/// ICC Parametric Curve with parameters named as in the ICC specification
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParametricCurve {
    pub curve_type: ParametricCurveType,
    pub g: f64,
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl ParametricCurve {
    /// Pure power curve (type 0)
    pub fn gamma(g: f64) -> Self {
        Self {
            curve_type: ParametricCurveType::Gamma,
            g,
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 0.0,
            e: 0.0,
            f: 0.0,
        }
    }

    /// IEC 61966-2-1 sRGB transfer function (type 3)
    pub fn srgb() -> Self {
        Self {
            curve_type: ParametricCurveType::IEC61966_2_1,
            g: 2.4,
            a: 1.0 / 1.055,
            b: 0.055 / 1.055,
            c: 1.0 / 12.92,
            d: 0.04045,
            e: 0.0,
            f: 0.0,
        }
    }

    /// From a `para` parameter list; the type follows from its length
    pub fn from_params(params: &[f64]) -> Option<Self> {
        let curve_type = ParametricCurveType::from_param_count(params.len())?;
        let at = |i: usize, default: f64| params.get(i).copied().unwrap_or(default);

        let mut curve = Self::gamma(params[0]);
        curve.curve_type = curve_type;
        curve.a = at(1, 1.0);
        curve.b = at(2, 0.0);
        match curve_type {
            ParametricCurveType::IEC61966_3 => curve.e = at(3, 0.0),
            ParametricCurveType::IEC61966_2_1 | ParametricCurveType::Full => {
                curve.c = at(3, 0.0);
                curve.d = at(4, 0.0);
                curve.e = at(5, 0.0);
                curve.f = at(6, 0.0);
            }
            ParametricCurveType::Gamma | ParametricCurveType::CIE122 => {}
        }
        Some(curve)
    }

    /// Encoded → linear, input clamped to [0, 1]
    pub fn decode(&self, x: f64) -> f64 {
        let x = x.clamp(0.0, 1.0);
        let power = |x: f64| (self.a * x + self.b).max(0.0).powf(self.g);

        match self.curve_type {
            ParametricCurveType::Gamma => x.powf(self.g),
            // Type 2 keeps its offset in `e` so that types 2 and 4 share code.
            ParametricCurveType::CIE122 | ParametricCurveType::IEC61966_3 => {
                if x >= self.power_threshold() {
                    power(x) + self.e
                } else {
                    self.e
                }
            }
            ParametricCurveType::IEC61966_2_1 | ParametricCurveType::Full => {
                if x >= self.d {
                    power(x) + self.e
                } else {
                    self.c * x + self.f
                }
            }
        }
    }

    /// Linear → encoded, input clamped to the curve's output range
    pub fn encode(&self, y: f64) -> f64 {
        let y = y.clamp(self.decode(0.0), self.decode(1.0));
        let root = |y: f64| {
            if self.g.abs() > 1e-10 && self.a.abs() > 1e-10 {
                Some((y.max(0.0).powf(1.0 / self.g) - self.b) / self.a)
            } else {
                None
            }
        };

        let x = match self.curve_type {
            ParametricCurveType::Gamma if self.g.abs() > 1e-10 => Some(y.powf(1.0 / self.g)),
            ParametricCurveType::Gamma => None,
            ParametricCurveType::CIE122 | ParametricCurveType::IEC61966_3 => {
                if y <= self.e {
                    Some(self.power_threshold().max(0.0))
                } else {
                    root(y - self.e)
                }
            }
            ParametricCurveType::IEC61966_2_1 if self.c.abs() > 1e-10 => {
                if y < self.c * self.d {
                    Some(y / self.c)
                } else {
                    root(y)
                }
            }
            _ => None,
        };

        x.map_or_else(|| self.encode_by_bisection(y), |x| x.clamp(0.0, 1.0))
    }

    /// X where the power segment of types 1 and 2 begins
    fn power_threshold(&self) -> f64 {
        if self.a.abs() > 1e-10 {
            -self.b / self.a
        } else {
            0.0
        }
    }

    /// Inverse for curves without a closed form; decode is monotonic on [0, 1]
    fn encode_by_bisection(&self, y: f64) -> f64 {
        let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
        for _ in 0..64 {
            let mid = 0.5 * (lo + hi);
            if self.decode(mid) < y {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        0.5 * (lo + hi)
    }
}
