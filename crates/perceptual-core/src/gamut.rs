//! Chroma reduction into the gamut
//!
//! Holds lightness and hue fixed and bisects the chroma axis between the
//! gray axis and the requested chroma (known out of gamut). The lower bound
//! of the final interval is returned, so the result is always in gamut and
//! at most `precision` below the true boundary.
//!
//! A profile whose colorants do not sum exactly to the PCS white can put
//! parts of the gray axis outside its gamut. The device black and white are
//! kept as anchors for those cases.

use tracing::trace;

use crate::color::LchDouble;

/// Limits of one polar space as seen through one profile
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChromaSearch {
    /// Device black, lightness clamped into the space's range
    pub black: LchDouble,
    /// Device white, lightness clamped into the space's range
    pub white: LchDouble,
    /// Upper bound of any in-gamut chroma
    pub max_chroma: f64,
    /// Bisection stops below this interval width
    pub precision: f64,
    pub max_steps: u32,
}

impl ChromaSearch {
    /// Device black or white, whichever is closer in lightness
    fn nearest_anchor(&self, l: f64) -> LchDouble {
        if l - self.black.l <= self.white.l - l {
            self.black
        } else {
            self.white
        }
    }
}

/// Largest in-gamut chroma at the color's lightness and hue
///
/// The input is normalized first: negative chroma is flipped to the
/// opposite hue, hue is wrapped into [0, 360), chroma is capped at
/// `max_chroma` and lightness is clamped between the black and white
/// points. A color that is in gamut after that is returned as normalized,
/// so `h = 400` comes back as `h = 40`.
///
/// When the gray at the requested lightness is itself out of gamut, the
/// nearer of the device black and white is returned.
pub fn reduce_chroma(
    color: LchDouble,
    search: &ChromaSearch,
    in_gamut: impl Fn(&LchDouble) -> bool,
) -> LchDouble {
    let normalized = sanitize(color, search).normalized();
    let reference = LchDouble::new(
        normalized.l.clamp(search.black.l, search.white.l),
        normalized.c.min(search.max_chroma),
        normalized.h,
    );

    if in_gamut(&reference) {
        return reference;
    }

    let mut lower = LchDouble::new(reference.l, 0.0, reference.h);
    if !in_gamut(&lower) {
        let anchor = search.nearest_anchor(reference.l);
        trace!(l = reference.l, anchor = %anchor, "gray axis out of gamut, using device black or white");
        return anchor;
    }

    // Only the neutral is reachable at the ends of the lightness range.
    let epsilon = 1e-9;
    if reference.l <= search.black.l + epsilon || reference.l >= search.white.l - epsilon {
        trace!(l = reference.l, "lightness at black or white point, chroma collapses to 0");
        return lower;
    }

    let mut upper = reference.c;
    let mut steps = 0;
    while upper - lower.c > search.precision && steps < search.max_steps {
        let candidate = LchDouble::new(reference.l, 0.5 * (lower.c + upper), reference.h);
        if in_gamut(&candidate) {
            lower = candidate;
        } else {
            upper = candidate.c;
        }
        steps += 1;
    }

    lower
}

/// Replace non-finite components with values on the gray axis
fn sanitize(color: LchDouble, search: &ChromaSearch) -> LchDouble {
    let finite_or = |v: f64, fallback: f64| if v.is_finite() { v } else { fallback };
    LchDouble::new(
        finite_or(color.l, search.black.l),
        finite_or(color.c, 0.0),
        finite_or(color.h, 0.0),
    )
}
