//! Read-only profile information fixed at construction

use std::path::PathBuf;

use crate::icc::{DataColorSpace, DateTimeNumber, ProfileClass, ProfileVersion, TextData};
use crate::profile::ColorProfile;

/// Descriptive data of the profile behind an [`RgbColorSpace`](crate::RgbColorSpace)
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProfileMetadata {
    /// Canonical path of the profile file; `None` for built-in profiles
    pub absolute_file_path: Option<PathBuf>,
    /// Size of the profile file in bytes; `None` for built-in profiles
    pub file_size: Option<u64>,
    pub class: ProfileClass,
    pub color_model: DataColorSpace,
    pub pcs_color_model: DataColorSpace,
    pub icc_version: ProfileVersion,
    /// `None` when the header carries no valid date
    pub creation_date_time: Option<DateTimeNumber>,
    pub name: Option<TextData>,
    pub copyright: Option<TextData>,
    pub manufacturer: Option<TextData>,
    pub model: Option<TextData>,
    pub has_clut: bool,
    pub has_matrix_shaper: bool,
}

impl ProfileMetadata {
    /// Metadata of a profile read from disk or memory
    ///
    /// Header fields and tag presence come from the ICC parse, text from
    /// moxcms. A built-in profile has no ICC structure and gets
    /// [`ProfileMetadata::srgb_builtin`].
    pub fn from_profile(
        profile: &ColorProfile,
        absolute_file_path: Option<PathBuf>,
        file_size: Option<u64>,
    ) -> Self {
        let Some(icc) = profile.icc() else {
            return Self::srgb_builtin();
        };
        let header = &icc.header;
        Self {
            absolute_file_path,
            file_size,
            class: header.device_class,
            color_model: header.color_space,
            pcs_color_model: header.pcs,
            icc_version: header.version,
            creation_date_time: Some(header.creation_date).filter(DateTimeNumber::is_valid),
            name: profile.description(),
            copyright: profile.copyright(),
            manufacturer: profile.manufacturer(),
            model: profile.model(),
            has_clut: icc.has_clut(),
            has_matrix_shaper: icc.is_matrix_shaper(),
        }
    }

    /// Metadata of the built-in sRGB profile
    pub fn srgb_builtin() -> Self {
        Self {
            absolute_file_path: None,
            file_size: None,
            class: ProfileClass::Display,
            color_model: DataColorSpace::Rgb,
            pcs_color_model: DataColorSpace::Xyz,
            icc_version: ProfileVersion::new(4, 3, 0),
            creation_date_time: None,
            name: Some(TextData::new("sRGB (built-in)")),
            copyright: None,
            manufacturer: None,
            model: None,
            has_clut: false,
            has_matrix_shaper: true,
        }
    }

    /// Name text or an empty string
    pub fn name_or_empty(&self) -> &str {
        self.name.as_ref().map_or("", |name| name.text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icc::parser::tests::{create_minimal_profile, text_tag, with_tags};

    #[test]
    fn test_from_profile() {
        let mut data = with_tags(
            create_minimal_profile(),
            &[(b"desc", text_tag("Test RGB")), (b"cprt", text_tag("No copyright"))],
        );
        // 2024-05-17 08:30:00
        for (i, v) in [2024u16, 5, 17, 8, 30, 0].iter().enumerate() {
            data[24 + 2 * i..26 + 2 * i].copy_from_slice(&v.to_be_bytes());
        }
        let profile = ColorProfile::from_bytes(&data).unwrap();
        let metadata =
            ProfileMetadata::from_profile(&profile, Some(PathBuf::from("/tmp/test.icc")), Some(data.len() as u64));

        assert_eq!(metadata.name_or_empty(), "Test RGB");
        assert_eq!(metadata.copyright.as_ref().unwrap().text, "No copyright");
        assert!(metadata.manufacturer.is_none());
        assert_eq!(metadata.class, ProfileClass::Display);
        assert_eq!(metadata.color_model, DataColorSpace::Rgb);
        assert_eq!(metadata.pcs_color_model, DataColorSpace::Xyz);
        assert_eq!(metadata.icc_version.to_string(), "4.3.0");
        assert_eq!(
            metadata.creation_date_time.unwrap().to_string(),
            "2024-05-17T08:30:00Z"
        );
        assert_eq!(metadata.file_size, Some(data.len() as u64));
        assert!(!metadata.has_matrix_shaper);
        assert!(!metadata.has_clut);
    }

    #[test]
    fn test_zero_date_is_none() {
        let profile = ColorProfile::from_bytes(&create_minimal_profile()).unwrap();
        let metadata = ProfileMetadata::from_profile(&profile, None, None);
        assert!(metadata.creation_date_time.is_none());
        assert_eq!(metadata.name_or_empty(), "");
    }

    #[test]
    fn test_builtin() {
        let metadata = ProfileMetadata::srgb_builtin();
        assert!(metadata.absolute_file_path.is_none());
        assert!(metadata.has_matrix_shaper);
        assert_eq!(metadata.icc_version, ProfileVersion::new(4, 3, 0));
        assert_eq!(ProfileMetadata::from_profile(&ColorProfile::new_srgb(), None, None), metadata);
    }
}
