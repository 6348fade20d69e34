//! Reference implementation wrappers
//!
//! lcms2 provides device RGB → CIELab D50 and real ICC profiles to load;
//! palette provides the CIELab and Oklab formulas.

use anyhow::{Context, Result};
use lcms2::{
    CIExyY, CIExyYTRIPLE, GlobalContext, InfoType, Intent, Locale, PixelFormat, Profile, ToneCurve, Transform,
};
use palette::white_point::{D50, D65};
use palette::{FromColor, LinSrgb, Oklab as PaletteOklab, Oklch as PaletteOklch, Srgb};
use perceptual_core::{Lab, LchDouble, Oklab, RgbDouble, Xyz};

fn d50_white_point() -> CIExyY {
    CIExyY {
        x: 0.3457,
        y: 0.3585,
        Y: 1.0,
    }
}

fn lab_d50_profile() -> Result<Profile> {
    Profile::new_lab4_context(GlobalContext::new(), &d50_white_point())
        .context("lcms2 Lab profile")
}

/// lcms2's built-in sRGB, serialized
pub fn lcms2_srgb_icc() -> Result<Vec<u8>> {
    Profile::new_srgb().icc().context("lcms2 sRGB serialization")
}

/// Display P3 primaries, D65 white, pure gamma 2.2 TRCs
pub fn lcms2_p3_gamma22_icc() -> Result<Vec<u8>> {
    let white = CIExyY {
        x: 0.3127,
        y: 0.3290,
        Y: 1.0,
    };
    let primaries = CIExyYTRIPLE {
        Red: CIExyY {
            x: 0.680,
            y: 0.320,
            Y: 1.0,
        },
        Green: CIExyY {
            x: 0.265,
            y: 0.690,
            Y: 1.0,
        },
        Blue: CIExyY {
            x: 0.150,
            y: 0.060,
            Y: 1.0,
        },
    };
    let gamma = ToneCurve::new(2.2);
    let curves = [&gamma, &gamma, &gamma];
    Profile::new_rgb(&white, &primaries, &curves)
        .context("lcms2 RGB profile")?
        .icc()
        .context("lcms2 RGB serialization")
}

/// A non-RGB profile: gray with gamma 2.2
pub fn lcms2_gray_icc() -> Result<Vec<u8>> {
    let gamma = ToneCurve::new(2.2);
    Profile::new_gray(&d50_white_point(), &gamma)
        .context("lcms2 gray profile")?
        .icc()
        .context("lcms2 gray serialization")
}

/// A Lab identity profile, which has no device RGB at all
pub fn lcms2_lab_icc() -> Result<Vec<u8>> {
    lab_d50_profile()?.icc().context("lcms2 Lab serialization")
}

/// Description and copyright as read by lcms2
pub fn lcms2_profile_texts(profile_data: &[u8]) -> Result<(Option<String>, Option<String>)> {
    let profile = Profile::new_icc(profile_data).context("lcms2 profile")?;
    let read = |info| {
        profile
            .info(info, Locale::none())
            .map(|text| text.trim_end_matches('\0').to_string())
    };
    Ok((read(InfoType::Description), read(InfoType::Copyright)))
}

/// Transform 8-bit sRGB to CIELab D50 using lcms2's built-in sRGB
pub fn lcms2_srgb8_to_lab(pixels: &[[u8; 3]]) -> Result<Vec<Lab>> {
    let srgb = Profile::new_srgb();
    let lab = lab_d50_profile()?;
    let transform = Transform::<[u8; 3], [f64; 3]>::new(
        &srgb,
        PixelFormat::RGB_8,
        &lab,
        PixelFormat::Lab_DBL,
        Intent::RelativeColorimetric,
    )
    .context("lcms2 transform")?;

    let mut out = vec![[0.0f64; 3]; pixels.len()];
    transform.transform_pixels(pixels, &mut out);
    Ok(out.into_iter().map(Lab::from).collect())
}

/// Transform device RGB in [0, 1] to CIELab D50 through an ICC profile
pub fn lcms2_rgb_to_lab(profile_data: &[u8], pixels: &[RgbDouble]) -> Result<Vec<Lab>> {
    let rgb = Profile::new_icc(profile_data).context("lcms2 profile")?;
    let lab = lab_d50_profile()?;
    let transform = Transform::<[f64; 3], [f64; 3]>::new(
        &rgb,
        PixelFormat::RGB_DBL,
        &lab,
        PixelFormat::Lab_DBL,
        Intent::RelativeColorimetric,
    )
    .context("lcms2 transform")?;

    let input: Vec<[f64; 3]> = pixels.iter().map(RgbDouble::to_array).collect();
    let mut out = vec![[0.0f64; 3]; pixels.len()];
    transform.transform_pixels(&input, &mut out);
    Ok(out.into_iter().map(Lab::from).collect())
}

/// CIELab D50 of an XYZ D50 value, computed by palette
pub fn palette_xyz_d50_to_lab(xyz: Xyz) -> Lab {
    let lab = palette::Lab::<D50, f64>::from_color(palette::Xyz::<D50, f64>::new(xyz.x, xyz.y, xyz.z));
    Lab::new(lab.l, lab.a, lab.b)
}

/// Oklab of an XYZ D65 value, computed by palette
pub fn palette_xyz_d65_to_oklab(xyz: Xyz) -> Oklab {
    let oklab = PaletteOklab::<f64>::from_color(palette::Xyz::<D65, f64>::new(xyz.x, xyz.y, xyz.z));
    Oklab::new(oklab.l, oklab.a, oklab.b)
}

/// Oklch of an sRGB color, computed by palette without any ICC profile
pub fn palette_srgb_to_oklch(rgb: RgbDouble) -> LchDouble {
    let linear: LinSrgb<f64> = Srgb::new(rgb.red, rgb.green, rgb.blue).into_linear();
    let oklch = PaletteOklch::<f64>::from_color(linear);
    LchDouble::new(oklch.l, oklch.chroma, oklch.hue.into_positive_degrees())
}
