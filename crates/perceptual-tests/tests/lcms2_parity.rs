//! Device model parity against lcms2
//!
//! lcms2 evaluates the same profiles with its own pipeline; RGB → CIELab D50
//! must agree, and lcms2's Lab must map back to the original device values.

use std::fs;

use perceptual_core::{LchDouble, Rgba8, RgbColorSpace, RgbDouble};
use perceptual_tests::patterns::{SamplePattern, random_rgb8, rgb_samples};
use perceptual_tests::reference::{
    lcms2_p3_gamma22_icc, lcms2_rgb_to_lab, lcms2_srgb8_to_lab, lcms2_srgb_icc,
};
use perceptual_tests::{compare_lab_samples, init_logging};

fn load(icc: &[u8]) -> (tempfile::TempDir, std::sync::Arc<RgbColorSpace>) {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("profile.icc");
    fs::write(&path, icc).expect("write profile");
    let space = RgbColorSpace::create_from_file(&path).expect("profile should load");
    (dir, space)
}

#[test]
fn test_builtin_srgb_matches_lcms2_builtin() {
    init_logging();
    let srgb = RgbColorSpace::create_srgb();

    let mut pixels = random_rgb8(0x5EED, 2000);
    pixels.extend(
        rgb_samples(SamplePattern::CubeCorners, 0)
            .iter()
            .map(|c| [c.red as u8 * 255, c.green as u8 * 255, c.blue as u8 * 255]),
    );

    let reference = lcms2_srgb8_to_lab(&pixels).expect("lcms2 transform");
    let ours: Vec<_> = pixels
        .iter()
        .map(|&[r, g, b]| srgb.to_cielab_d50(&RgbDouble::from_u8(r, g, b)))
        .collect();

    let stats = compare_lab_samples(&reference, &ours);
    println!("built-in sRGB vs lcms2 sRGB: {}", stats);
    assert!(stats.is_excellent(), "{}", stats);
    assert!(stats.mean < 0.3, "{}", stats);
}

#[test]
fn test_loaded_profiles_match_lcms2() {
    init_logging();
    let samples = rgb_samples(SamplePattern::Random(42), 1000);

    for (name, icc) in [
        ("sRGB", lcms2_srgb_icc().expect("sRGB")),
        ("P3 gamma 2.2", lcms2_p3_gamma22_icc().expect("P3")),
    ] {
        let (_dir, space) = load(&icc);
        let reference = lcms2_rgb_to_lab(&icc, &samples).expect("lcms2 transform");
        let ours: Vec<_> = samples.iter().map(|c| space.to_cielab_d50(c)).collect();

        let stats = compare_lab_samples(&reference, &ours);
        println!("{}: {}", name, stats);
        assert!(stats.max < 0.05, "{}: {}", name, stats);
    }
}

#[test]
fn test_lcms2_lab_maps_back_to_device_values() {
    init_logging();
    let icc = lcms2_srgb_icc().expect("sRGB");
    let (_dir, space) = load(&icc);

    let pixels = random_rgb8(7, 500);
    let devices: Vec<_> = pixels
        .iter()
        .map(|&[r, g, b]| RgbDouble::from_u8(r, g, b))
        .collect();
    let labs = lcms2_rgb_to_lab(&icc, &devices).expect("lcms2 transform");

    for (&[r, g, b], lab) in pixels.iter().zip(&labs) {
        let lch = LchDouble::from_cartesian(lab.l, lab.a, lab.b);
        let back = space.from_cielch_d50_to_rgba8_bound(&lch);
        let close = |x: u8, y: u8| x.abs_diff(y) <= 1;
        assert!(
            close(back.r, r) && close(back.g, g) && close(back.b, b),
            "{:?} -> {} -> {:?}",
            [r, g, b],
            lch,
            back
        );
        assert_eq!(back.a, 255);
    }
}

#[test]
fn test_lcms2_lab_of_interior_colors_is_in_gamut() {
    init_logging();
    let icc = lcms2_srgb_icc().expect("sRGB");
    let (_dir, space) = load(&icc);

    // Keep clear of the cube surface so only the two models' rounding differs.
    let interior: Vec<_> = rgb_samples(SamplePattern::Random(99), 500)
        .into_iter()
        .map(|c| RgbDouble::new(0.02 + 0.96 * c.red, 0.02 + 0.96 * c.green, 0.02 + 0.96 * c.blue))
        .collect();
    let labs = lcms2_rgb_to_lab(&icc, &interior).expect("lcms2 transform");

    for lab in &labs {
        assert!(space.is_cielab_d50_in_gamut(lab), "{:?}", lab);
        assert_ne!(space.from_cielab_d50_to_rgba8_or_transparent(lab), Rgba8::TRANSPARENT);
    }
}

#[test]
fn test_wide_gamut_contains_srgb_primaries() {
    init_logging();
    let srgb = RgbColorSpace::create_srgb();
    let (_dir, p3) = load(&lcms2_p3_gamma22_icc().expect("P3"));

    assert!(p3.profile_maximum_oklch_chroma() > srgb.profile_maximum_oklch_chroma());

    let red = srgb.to_oklch(&RgbDouble::new(1.0, 0.0, 0.0));
    assert!(p3.is_oklch_in_gamut(&red), "{}", red);

    // P3 green is outside sRGB.
    let p3_green = p3.to_oklch(&RgbDouble::new(0.0, 1.0, 0.0));
    assert!(!srgb.is_oklch_in_gamut(&p3_green), "{}", p3_green);
    let reduced = srgb.reduce_oklch_chroma_to_fit_into_gamut(&p3_green);
    assert!(srgb.is_oklch_in_gamut(&reduced));
    assert!(reduced.c < p3_green.c);
}
