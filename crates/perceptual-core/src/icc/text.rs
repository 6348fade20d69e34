//! Profile text
//!
//! The text tags (`desc`, `cprt`, `dmnd`, `dmdd`) are decoded by moxcms
//! together with the rest of the profile. This keeps every localized record
//! of a tag and picks one for a locale.

use moxcms::ProfileText;

/// One record of a multi-localized text tag
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocalizedRecord {
    /// ISO 639-1 language code, e.g. "en"
    pub language: String,
    /// ISO 3166-1 country code, e.g. "US"; may be empty
    pub country: String,
    pub text: String,
}

/// Text tag data
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextData {
    /// Primary text content (first record, usually English)
    pub text: String,
    /// Every localized record, in file order
    pub localized: Vec<LocalizedRecord>,
}

impl TextData {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            localized: Vec::new(),
        }
    }

    /// Best match for a locale.
    ///
    /// Prefers an exact language+country record, then any record of the
    /// language, then the primary text.
    pub fn for_locale(&self, language: &str, country: &str) -> &str {
        let by_language = |record: &&LocalizedRecord| record.language.eq_ignore_ascii_case(language);

        self.localized
            .iter()
            .filter(by_language)
            .find(|record| record.country.eq_ignore_ascii_case(country))
            .or_else(|| self.localized.iter().find(by_language))
            .map_or(self.text.as_str(), |record| record.text.as_str())
    }
}

impl From<&ProfileText> for TextData {
    fn from(text: &ProfileText) -> Self {
        match text {
            ProfileText::PlainString(s) => Self::new(until_nul(s)),
            ProfileText::Description(desc) => {
                let ascii = until_nul(&desc.ascii_string);
                if ascii.is_empty() {
                    Self::new(until_nul(&desc.unicode_string))
                } else {
                    Self::new(ascii)
                }
            }
            ProfileText::Localizable(records) => {
                let localized: Vec<LocalizedRecord> = records
                    .iter()
                    .map(|record| LocalizedRecord {
                        language: until_nul(&record.language).to_string(),
                        country: until_nul(&record.country).to_string(),
                        text: until_nul(&record.value).to_string(),
                    })
                    .collect();
                let text = localized
                    .first()
                    .map(|record| record.text.clone())
                    .unwrap_or_default();
                Self { text, localized }
            }
        }
    }
}

/// Tag payloads are NUL-terminated and often padded
fn until_nul(s: &str) -> &str {
    match s.find('\0') {
        Some(end) => &s[..end],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moxcms::{DescriptionString, LocalizableString};

    fn localizable(records: &[(&str, &str, &str)]) -> ProfileText {
        ProfileText::Localizable(
            records
                .iter()
                .map(|(language, country, value)| LocalizableString {
                    language: language.to_string(),
                    country: country.to_string(),
                    value: value.to_string(),
                })
                .collect(),
        )
    }

    #[test]
    fn test_plain_string_stops_at_nul() {
        let text = TextData::from(&ProfileText::PlainString("Public domain\0\0\0".to_string()));
        assert_eq!(text.text, "Public domain");
        assert!(text.localized.is_empty());
    }

    #[test]
    fn test_description_prefers_ascii() {
        let desc = DescriptionString {
            ascii_string: "sRGB\0".to_string(),
            unicode_language_code: 0,
            unicode_string: "sRGB unicode".to_string(),
            script_code_code: 0,
            mac_string: String::new(),
        };
        assert_eq!(TextData::from(&ProfileText::Description(desc.clone())).text, "sRGB");

        let unicode_only = DescriptionString {
            ascii_string: "\0".to_string(),
            ..desc
        };
        assert_eq!(TextData::from(&ProfileText::Description(unicode_only)).text, "sRGB unicode");
    }

    #[test]
    fn test_localized_records_kept_in_order() {
        let text = TextData::from(&localizable(&[("en", "US", "Display"), ("de", "DE", "Bildschirm")]));
        assert_eq!(text.text, "Display");
        assert_eq!(text.localized.len(), 2);
        assert_eq!(text.localized[1].language, "de");
        assert_eq!(text.localized[1].country, "DE");
        assert_eq!(text.localized[1].text, "Bildschirm");
    }

    #[test]
    fn test_locale_lookup() {
        let text = TextData::from(&localizable(&[
            ("en", "US", "Color"),
            ("en", "GB", "Colour"),
            ("fr", "FR", "Couleur"),
        ]));

        assert_eq!(text.for_locale("en", "GB"), "Colour");
        assert_eq!(text.for_locale("fr", "CA"), "Couleur");
        assert_eq!(text.for_locale("ja", "JP"), "Color");
    }

    #[test]
    fn test_empty_localizable() {
        let text = TextData::from(&ProfileText::Localizable(Vec::new()));
        assert_eq!(text.text, "");
        assert_eq!(text.for_locale("en", "US"), "");
    }
}
