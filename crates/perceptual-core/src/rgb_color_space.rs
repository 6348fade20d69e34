//! RGB color space: gamut authority for one profile
//!
//! An [`RgbColorSpace`] pairs a matrix-shaper device model with the
//! conversion graph. It decides whether a CIELCh-D50 or Oklch color can be
//! shown by the device, converts between device RGB and the perceptual
//! spaces, and reduces out-of-gamut chroma.
//!
//! Instances are immutable after construction apart from the lazily scanned
//! maximum chroma values, and are shared as `Arc<RgbColorSpace>`.
//!
//! ```
//! use perceptual_core::{LchDouble, RgbColorSpace};
//!
//! let srgb = RgbColorSpace::create_srgb();
//! let vivid = LchDouble::new(50.0, 200.0, 0.0);
//! assert!(!srgb.is_cielch_d50_in_gamut(&vivid));
//!
//! let reduced = srgb.reduce_cielch_d50_chroma_to_fit_into_gamut(&vivid);
//! assert!(srgb.is_cielch_d50_in_gamut(&reduced));
//! ```

use std::path::Path;
use std::sync::{Arc, OnceLock};

use tracing::{debug, trace, warn};

use crate::color::{Lab, LchDouble, RgbDouble, Rgba8, Xyz};
use crate::conversion::{
    ConversionMap, all_conversions, cielch_d50_to_xyz_d50, oklch_d65_to_xyz_d50,
    xyz_d50_to_cielch_d50, xyz_d50_to_oklch_d65,
};
use crate::gamut::{ChromaSearch, reduce_chroma};
use crate::generic::GenericColor;
use crate::metadata::ProfileMetadata;
use crate::options::ColorSpaceOptions;
use crate::pipeline::MatrixShaper;
use crate::profile::ColorProfile;
use crate::space::ColorSpace;
use crate::Result;

/// A device RGB space defined by an ICC profile
#[derive(Debug)]
pub struct RgbColorSpace {
    shaper: MatrixShaper,
    metadata: ProfileMetadata,
    options: ColorSpaceOptions,
    cielch_d50_black: LchDouble,
    cielch_d50_white: LchDouble,
    oklch_black: LchDouble,
    oklch_white: LchDouble,
    max_cielch_d50_chroma: OnceLock<f64>,
    max_oklch_chroma: OnceLock<f64>,
}

impl RgbColorSpace {
    /// Built-in sRGB, without file I/O
    pub fn create_srgb() -> Arc<Self> {
        Self::create_srgb_with_options(ColorSpaceOptions::default())
    }

    pub fn create_srgb_with_options(options: ColorSpaceOptions) -> Arc<Self> {
        Arc::new(Self::new(
            MatrixShaper::srgb(),
            ProfileMetadata::srgb_builtin(),
            options,
        ))
    }

    /// Load an ICC profile; `None` if the file is missing, unreadable or
    /// not a usable RGB matrix-shaper profile
    pub fn create_from_file(path: impl AsRef<Path>) -> Option<Arc<Self>> {
        let path = path.as_ref();
        match Self::try_from_file(path) {
            Ok(space) => Some(space),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "cannot create color space from profile");
                None
            }
        }
    }

    pub fn try_from_file(path: impl AsRef<Path>) -> Result<Arc<Self>> {
        Self::try_from_file_with_options(path, ColorSpaceOptions::default())
    }

    pub fn try_from_file_with_options(
        path: impl AsRef<Path>,
        options: ColorSpaceOptions,
    ) -> Result<Arc<Self>> {
        let path = path.as_ref();
        let data = std::fs::read(path)?;
        let absolute = std::fs::canonicalize(path)?;
        Self::from_profile_data(&data, Some(absolute), options)
    }

    /// Build from ICC data in memory
    pub fn try_from_bytes(data: &[u8]) -> Result<Arc<Self>> {
        Self::from_profile_data(data, None, ColorSpaceOptions::default())
    }

    fn from_profile_data(
        data: &[u8],
        absolute_file_path: Option<std::path::PathBuf>,
        options: ColorSpaceOptions,
    ) -> Result<Arc<Self>> {
        let profile = ColorProfile::from_bytes(data)?;
        let shaper = profile.matrix_shaper()?;
        let file_size = absolute_file_path.as_ref().map(|_| data.len() as u64);
        let metadata = ProfileMetadata::from_profile(&profile, absolute_file_path, file_size);

        debug!(
            name = metadata.name_or_empty(),
            class = %metadata.class,
            version = %metadata.icc_version,
            has_clut = metadata.has_clut,
            "loaded profile"
        );
        Ok(Arc::new(Self::new(shaper, metadata, options)))
    }

    fn new(shaper: MatrixShaper, metadata: ProfileMetadata, options: ColorSpaceOptions) -> Self {
        let black = GenericColor::from(shaper.rgb_to_xyz_d50([0.0; 3]));
        let white = GenericColor::from(shaper.rgb_to_xyz_d50([1.0; 3]));
        let cielch = |xyz| clamp_lightness(xyz_d50_to_cielch_d50(xyz), 100.0);
        let oklch = |xyz| clamp_lightness(xyz_d50_to_oklch_d65(xyz), 1.0);
        Self {
            cielch_d50_black: cielch(black),
            cielch_d50_white: cielch(white),
            oklch_black: oklch(black),
            oklch_white: oklch(white),
            shaper,
            metadata,
            options,
            max_cielch_d50_chroma: OnceLock::new(),
            max_oklch_chroma: OnceLock::new(),
        }
    }

    pub fn metadata(&self) -> &ProfileMetadata {
        &self.metadata
    }

    pub fn options(&self) -> &ColorSpaceOptions {
        &self.options
    }

    pub fn shaper(&self) -> &MatrixShaper {
        &self.shaper
    }

    pub fn cielab_d50_blackpoint_l(&self) -> f64 {
        self.cielch_d50_black.l
    }

    pub fn cielab_d50_whitepoint_l(&self) -> f64 {
        self.cielch_d50_white.l
    }

    pub fn oklab_blackpoint_l(&self) -> f64 {
        self.oklch_black.l
    }

    pub fn oklab_whitepoint_l(&self) -> f64 {
        self.oklch_white.l
    }

    /// Device black in CIELCh-D50
    ///
    /// Not exactly neutral when the profile's colorants do not sum to the
    /// D50 white.
    pub fn cielch_d50_blackpoint(&self) -> LchDouble {
        self.cielch_d50_black
    }

    /// Device white in CIELCh-D50
    pub fn cielch_d50_whitepoint(&self) -> LchDouble {
        self.cielch_d50_white
    }

    pub fn oklch_blackpoint(&self) -> LchDouble {
        self.oklch_black
    }

    pub fn oklch_whitepoint(&self) -> LchDouble {
        self.oklch_white
    }

    /// Upper bound of CIELCh-D50 chroma inside this gamut
    ///
    /// Scanned on first use and cached.
    pub fn profile_maximum_cielch_d50_chroma(&self) -> f64 {
        *self.max_cielch_d50_chroma.get_or_init(|| {
            let max = self.scan_max_chroma(|xyz| xyz_d50_to_cielch_d50(xyz).c);
            trace!(max, "scanned maximum CIELCh-D50 chroma");
            max
        })
    }

    /// Upper bound of Oklch chroma inside this gamut
    pub fn profile_maximum_oklch_chroma(&self) -> f64 {
        *self.max_oklch_chroma.get_or_init(|| {
            let max = self.scan_max_chroma(|xyz| xyz_d50_to_oklch_d65(xyz).c);
            trace!(max, "scanned maximum Oklch chroma");
            max
        })
    }

    /// Maximum chroma over a grid on the six faces of the RGB cube, plus margin
    ///
    /// Chroma grows outward from the gray axis, so the maximum lies on the
    /// cube's surface.
    fn scan_max_chroma(&self, chroma_of: impl Fn(GenericColor) -> f64) -> f64 {
        let steps = self.options.chroma_scan_resolution.max(1);
        let mut max: f64 = 0.0;
        for axis in 0..3 {
            for fixed in [0.0, 1.0] {
                for i in 0..=steps {
                    for j in 0..=steps {
                        let u = f64::from(i) / f64::from(steps);
                        let v = f64::from(j) / f64::from(steps);
                        let mut rgb = [0.0; 3];
                        rgb[axis] = fixed;
                        rgb[(axis + 1) % 3] = u;
                        rgb[(axis + 2) % 3] = v;
                        let chroma = chroma_of(self.shaper.rgb_to_xyz_d50(rgb).into());
                        if chroma.is_finite() {
                            max = max.max(chroma);
                        }
                    }
                }
            }
        }
        max * (1.0 + self.options.chroma_safety_margin)
    }

    /// XYZ D50 can be shown by the device
    ///
    /// Linear RGB must lie within [0, 1] up to `rgb_channel_tolerance`, and
    /// the clamped device round trip must come back within
    /// `round_trip_tolerance` ΔE*ab.
    pub fn is_xyz_d50_in_gamut(&self, xyz: Xyz) -> bool {
        let linear = self.shaper.xyz_d50_to_linear(xyz);
        let tolerance = self.options.rgb_channel_tolerance;
        if !linear.iter().all(|&v| v >= -tolerance && v <= 1.0 + tolerance) {
            return false;
        }

        let round_trip = self.shaper.rgb_to_xyz_d50(self.shaper.encode(linear));
        Lab::from_xyz(round_trip).delta_e(&Lab::from_xyz(xyz)) <= self.options.round_trip_tolerance
    }

    pub fn is_cielch_d50_in_gamut(&self, lch: &LchDouble) -> bool {
        if !lightness_in_range(lch.l, 100.0) {
            return false;
        }
        if lch.c.abs() > self.profile_maximum_cielch_d50_chroma() {
            return false;
        }
        self.is_xyz_d50_in_gamut(cielch_d50_to_xyz_d50(*lch).reinterpret_as_xyz())
    }

    pub fn is_oklch_in_gamut(&self, lch: &LchDouble) -> bool {
        if !lightness_in_range(lch.l, 1.0) {
            return false;
        }
        if lch.c.abs() > self.profile_maximum_oklch_chroma() {
            return false;
        }
        self.is_xyz_d50_in_gamut(oklch_d65_to_xyz_d50(*lch).reinterpret_as_xyz())
    }

    pub fn is_cielab_d50_in_gamut(&self, lab: &Lab) -> bool {
        if !lightness_in_range(lab.l, 100.0) {
            return false;
        }
        if lab.chroma() > self.profile_maximum_cielch_d50_chroma() {
            return false;
        }
        self.is_xyz_d50_in_gamut(lab.to_xyz())
    }

    /// Largest in-gamut CIELCh-D50 chroma at the color's lightness and hue
    pub fn reduce_cielch_d50_chroma_to_fit_into_gamut(&self, lch: &LchDouble) -> LchDouble {
        let search = ChromaSearch {
            black: self.cielch_d50_black,
            white: self.cielch_d50_white,
            max_chroma: self.profile_maximum_cielch_d50_chroma(),
            precision: self.options.cielch_chroma_precision,
            max_steps: self.options.max_bisection_steps,
        };
        reduce_chroma(*lch, &search, |c| self.is_cielch_d50_in_gamut(c))
    }

    /// Largest in-gamut Oklch chroma at the color's lightness and hue
    pub fn reduce_oklch_chroma_to_fit_into_gamut(&self, lch: &LchDouble) -> LchDouble {
        let search = ChromaSearch {
            black: self.oklch_black,
            white: self.oklch_white,
            max_chroma: self.profile_maximum_oklch_chroma(),
            precision: self.options.oklch_chroma_precision,
            max_steps: self.options.max_bisection_steps,
        };
        reduce_chroma(*lch, &search, |c| self.is_oklch_in_gamut(c))
    }

    /// Device RGB without clamping; channels outside [0, 1] mean out of gamut
    pub fn from_cielch_d50_to_rgb_double_unbound(&self, lch: &LchDouble) -> RgbDouble {
        self.xyz_d50_to_rgb_unbound(cielch_d50_to_xyz_d50(*lch).reinterpret_as_xyz())
    }

    pub fn from_oklch_to_rgb_double_unbound(&self, lch: &LchDouble) -> RgbDouble {
        self.xyz_d50_to_rgb_unbound(oklch_d65_to_xyz_d50(*lch).reinterpret_as_xyz())
    }

    fn xyz_d50_to_rgb_unbound(&self, xyz: Xyz) -> RgbDouble {
        RgbDouble::from_array(self.shaper.encode_unbounded(self.shaper.xyz_d50_to_linear(xyz)))
    }

    /// Opaque pixel with every channel clamped; never fails
    pub fn from_cielch_d50_to_rgba8_bound(&self, lch: &LchDouble) -> Rgba8 {
        self.from_cielch_d50_to_rgb_double_unbound(lch).to_rgba8()
    }

    pub fn from_oklch_to_rgba8_bound(&self, lch: &LchDouble) -> Rgba8 {
        self.from_oklch_to_rgb_double_unbound(lch).to_rgba8()
    }

    /// Opaque pixel, or [`Rgba8::TRANSPARENT`] when out of gamut
    pub fn from_cielab_d50_to_rgba8_or_transparent(&self, lab: &Lab) -> Rgba8 {
        if !self.is_cielab_d50_in_gamut(lab) {
            return Rgba8::TRANSPARENT;
        }
        RgbDouble::from_array(self.shaper.xyz_d50_to_rgb(lab.to_xyz())).to_rgba8()
    }

    /// Device RGB (channels in [0, 1]) to XYZ D50
    pub fn to_xyz_d50(&self, rgb: &RgbDouble) -> Xyz {
        self.shaper.rgb_to_xyz_d50(rgb.to_array())
    }

    pub fn to_cielab_d50(&self, rgb: &RgbDouble) -> Lab {
        Lab::from_xyz(self.to_xyz_d50(rgb))
    }

    pub fn to_cielch_d50(&self, rgb: &RgbDouble) -> LchDouble {
        xyz_d50_to_cielch_d50(self.to_xyz_d50(rgb).into())
    }

    pub fn to_cielch_d50_from_rgba8(&self, pixel: Rgba8) -> LchDouble {
        self.to_cielch_d50(&pixel.to_rgb_double())
    }

    pub fn to_oklch(&self, rgb: &RgbDouble) -> LchDouble {
        xyz_d50_to_oklch_d65(self.to_xyz_d50(rgb).into())
    }

    /// The device color in all six graph spaces
    pub fn to_all_conversions(&self, rgb: &RgbDouble) -> ConversionMap {
        all_conversions(ColorSpace::XyzD50, self.to_xyz_d50(rgb).into())
    }
}

/// Device anchor with lightness inside [0, max]
fn clamp_lightness(lch: LchDouble, max: f64) -> LchDouble {
    LchDouble::new(lch.l.clamp(0.0, max), lch.c, lch.h)
}

/// Lightness within [0, max], allowing for rounding in the conversion chain
fn lightness_in_range(l: f64, max: f64) -> bool {
    let slack = max * 1e-12;
    l >= -slack && l <= max + slack
}
