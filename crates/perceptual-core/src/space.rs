//! Nodes of the conversion graph

use std::fmt;

/// A named perceptual or colorimetric space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColorSpace {
    CielabD50,
    CielchD50,
    XyzD50,
    XyzD65,
    OklabD65,
    OklchD65,
}

impl ColorSpace {
    /// Every space, in declaration order
    pub const ALL: [Self; 6] = [
        Self::CielabD50,
        Self::CielchD50,
        Self::XyzD50,
        Self::XyzD65,
        Self::OklabD65,
        Self::OklchD65,
    ];

    /// Position in [`ColorSpace::ALL`]
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lightness, chroma, hue rather than Cartesian coordinates
    pub const fn is_polar(self) -> bool {
        matches!(self, Self::CielchD50 | Self::OklchD65)
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::CielabD50 => "CIELab D50",
            Self::CielchD50 => "CIELCh D50",
            Self::XyzD50 => "XYZ D50",
            Self::XyzD65 => "XYZ D65",
            Self::OklabD65 => "Oklab",
            Self::OklchD65 => "Oklch",
        };
        f.write_str(name)
    }
}
