//! ICC Color Profile handling
//!
//! Wraps `moxcms::ColorProfile`, which supplies the colorimetric data and the
//! text tags, with the crate's own header and tag directory parse.

use crate::icc::{IccProfile, TextData};
use crate::pipeline::MatrixShaper;
use crate::{Error, Result};

/// A parsed ICC profile
///
/// Built-in profiles have no raw ICC structure; [`ColorProfile::icc`] is
/// `None` for them.
#[derive(Debug, Clone)]
pub struct ColorProfile {
    inner: moxcms::ColorProfile,
    icc: Option<IccProfile>,
}

impl ColorProfile {
    /// Create a profile from raw ICC data
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let icc = IccProfile::parse(data)?;
        let inner = moxcms::ColorProfile::new_from_slice(data)
            .map_err(|e| Error::ProfileParse(format!("{:?}", e)))?;
        Ok(Self {
            inner,
            icc: Some(icc),
        })
    }

    /// Built-in sRGB profile
    pub fn new_srgb() -> Self {
        Self {
            inner: moxcms::ColorProfile::new_srgb(),
            icc: None,
        }
    }

    /// Access the inner moxcms profile
    pub fn inner(&self) -> &moxcms::ColorProfile {
        &self.inner
    }

    /// Header and tag directory, for profiles read from bytes
    pub fn icc(&self) -> Option<&IccProfile> {
        self.icc.as_ref()
    }

    pub fn is_rgb(&self) -> bool {
        matches!(self.inner.color_space, moxcms::DataColorSpace::Rgb)
    }

    /// Check if this is a matrix-shaper profile
    pub fn is_matrix_shaper(&self) -> bool {
        self.inner.is_matrix_shaper()
    }

    /// Any A2Bx/B2Ax lookup table present
    pub fn has_clut(&self) -> bool {
        self.icc.as_ref().is_some_and(IccProfile::has_clut)
    }

    /// Profile description (`desc`)
    pub fn description(&self) -> Option<TextData> {
        self.inner.description.as_ref().map(TextData::from)
    }

    /// Copyright text (`cprt`)
    pub fn copyright(&self) -> Option<TextData> {
        self.inner.copyright.as_ref().map(TextData::from)
    }

    /// Device manufacturer description (`dmnd`)
    pub fn manufacturer(&self) -> Option<TextData> {
        self.inner.device_manufacturer.as_ref().map(TextData::from)
    }

    /// Device model description (`dmdd`)
    pub fn model(&self) -> Option<TextData> {
        self.inner.device_model.as_ref().map(TextData::from)
    }

    /// Device model used by the conversion engine
    pub fn matrix_shaper(&self) -> Result<MatrixShaper> {
        if !self.is_rgb() {
            return MatrixShaper::from_profile(&self.inner);
        }
        if !self.is_matrix_shaper() {
            let reason = if self.has_clut() {
                "LUT-based profiles are not supported"
            } else {
                "profile has no colorant matrix and TRCs"
            };
            return Err(Error::UnsupportedProfile(reason.to_string()));
        }
        MatrixShaper::from_profile(&self.inner)
    }
}

impl AsRef<moxcms::ColorProfile> for ColorProfile {
    fn as_ref(&self) -> &moxcms::ColorProfile {
        &self.inner
    }
}
