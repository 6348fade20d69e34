//! Tuning knobs for gamut detection and reduction

/// Tolerances and search limits used by [`RgbColorSpace`](crate::RgbColorSpace)
///
/// ```
/// use perceptual_core::ColorSpaceOptions;
///
/// let options = ColorSpaceOptions::default()
///     .with_round_trip_tolerance(0.05)
///     .with_chroma_scan_resolution(32);
/// assert_eq!(options.max_bisection_steps, 64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ColorSpaceOptions {
    /// Slack on the [0, 1] test of each linear RGB channel
    pub rgb_channel_tolerance: f64,
    /// Largest CIELAB ΔE*ab allowed between a color and its device round trip
    pub round_trip_tolerance: f64,
    /// Bisection stops once the CIELCh chroma interval is narrower than this
    pub cielch_chroma_precision: f64,
    /// Bisection stops once the Oklch chroma interval is narrower than this
    pub oklch_chroma_precision: f64,
    /// Hard cap on bisection iterations
    pub max_bisection_steps: u32,
    /// Grid steps per RGB cube face edge when probing maximum chroma
    pub chroma_scan_resolution: u32,
    /// Relative margin added to the scanned maximum chroma
    pub chroma_safety_margin: f64,
}

impl Default for ColorSpaceOptions {
    fn default() -> Self {
        Self {
            rgb_channel_tolerance: 1e-6,
            round_trip_tolerance: 0.1,
            cielch_chroma_precision: 0.005,
            oklch_chroma_precision: 0.00005,
            max_bisection_steps: 64,
            chroma_scan_resolution: 64,
            chroma_safety_margin: 0.01,
        }
    }
}

impl ColorSpaceOptions {
    pub fn with_rgb_channel_tolerance(mut self, tolerance: f64) -> Self {
        self.rgb_channel_tolerance = tolerance;
        self
    }

    pub fn with_round_trip_tolerance(mut self, tolerance: f64) -> Self {
        self.round_trip_tolerance = tolerance;
        self
    }

    pub fn with_cielch_chroma_precision(mut self, precision: f64) -> Self {
        self.cielch_chroma_precision = precision;
        self
    }

    pub fn with_oklch_chroma_precision(mut self, precision: f64) -> Self {
        self.oklch_chroma_precision = precision;
        self
    }

    pub fn with_max_bisection_steps(mut self, steps: u32) -> Self {
        self.max_bisection_steps = steps;
        self
    }

    /// At least one step is always used
    pub fn with_chroma_scan_resolution(mut self, resolution: u32) -> Self {
        self.chroma_scan_resolution = resolution.max(1);
        self
    }

    pub fn with_chroma_safety_margin(mut self, margin: f64) -> Self {
        self.chroma_safety_margin = margin;
        self
    }
}
