//! ICC Profile Parser
//!
//! An ICC profile consists of:
//! 1. A 128-byte header
//! 2. A tag table listing all tags
//! 3. Tag data (may overlap/share data)
//!
//! Only the header and the tag directory are read here. Tag contents are
//! decoded by moxcms.

use std::collections::HashSet;

use super::error::IccError;
use super::header::{DataColorSpace, IccHeader, MIN_PROFILE_SIZE};
use super::types::TagSignature;

/// Header and tag directory of an ICC profile
#[derive(Debug, Clone)]
pub struct IccProfile {
    /// Profile header (128 bytes)
    pub header: IccHeader,
    /// Signatures of every tag whose data lies inside the profile
    pub tags: HashSet<TagSignature>,
}

/// Tag table entry (as stored in profile)
#[derive(Debug, Clone, Copy)]
struct TagTableEntry {
    signature: u32,
    offset: u32,
    size: u32,
}

impl IccProfile {
    /// Parse an ICC profile from bytes
    pub fn parse(data: &[u8]) -> Result<Self, IccError> {
        let header = IccHeader::parse(data)?;
        header.validate(data.len())?;

        let tag_count = Self::parse_tag_count(data)?;
        let tag_entries = Self::parse_tag_table(data, tag_count)?;

        let mut tags = HashSet::with_capacity(tag_entries.len());

        for entry in &tag_entries {
            let end = (entry.offset as usize).saturating_add(entry.size as usize);
            if end > data.len() {
                return Err(IccError::TagOutOfBounds {
                    tag: entry.signature,
                    offset: entry.offset,
                    size: entry.size,
                    profile_size: data.len(),
                });
            }
            tags.insert(TagSignature(entry.signature));
        }

        Ok(Self { header, tags })
    }

    fn parse_tag_count(data: &[u8]) -> Result<usize, IccError> {
        if data.len() < MIN_PROFILE_SIZE + 4 {
            return Err(IccError::TooSmall {
                expected: MIN_PROFILE_SIZE + 4,
                actual: data.len(),
            });
        }

        Ok(u32::from_be_bytes([data[128], data[129], data[130], data[131]]) as usize)
    }

    fn parse_tag_table(data: &[u8], count: usize) -> Result<Vec<TagTableEntry>, IccError> {
        let table_start = 132; // After header (128) + tag count (4)
        let entry_size = 12; // signature(4) + offset(4) + size(4)
        let required_size = count
            .checked_mul(entry_size)
            .and_then(|len| len.checked_add(table_start))
            .ok_or_else(|| IccError::CorruptedData(format!("tag count {} overflows", count)))?;

        if data.len() < required_size {
            return Err(IccError::TooSmall {
                expected: required_size,
                actual: data.len(),
            });
        }

        let be_u32 = |at: usize| u32::from_be_bytes([data[at], data[at + 1], data[at + 2], data[at + 3]]);

        Ok((0..count)
            .map(|i| {
                let offset = table_start + i * entry_size;
                TagTableEntry {
                    signature: be_u32(offset),
                    offset: be_u32(offset + 4),
                    size: be_u32(offset + 8),
                }
            })
            .collect())
    }

    pub fn has_tag(&self, sig: TagSignature) -> bool {
        self.tags.contains(&sig)
    }

    /// RGB profile with colorants and TRCs for all three channels
    pub fn is_matrix_shaper(&self) -> bool {
        self.header.color_space == DataColorSpace::Rgb
            && [
                TagSignature::RED_COLORANT,
                TagSignature::GREEN_COLORANT,
                TagSignature::BLUE_COLORANT,
                TagSignature::RED_TRC,
                TagSignature::GREEN_TRC,
                TagSignature::BLUE_TRC,
            ]
            .into_iter()
            .all(|sig| self.has_tag(sig))
    }

    /// Any AToB or BToA lookup table present
    pub fn has_clut(&self) -> bool {
        TagSignature::CLUT_TAGS
            .into_iter()
            .any(|sig| self.has_tag(sig))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::icc::header::PROFILE_SIGNATURE;

    /// Create a minimal valid ICC profile for testing
    pub(crate) fn create_minimal_profile() -> Vec<u8> {
        let mut data = vec![0u8; 128 + 4];

        let size = data.len() as u32;
        data[0..4].copy_from_slice(&size.to_be_bytes());

        // Version 4.3
        data[8] = 4;
        data[9] = 0x30;

        data[12..16].copy_from_slice(b"mntr");
        data[16..20].copy_from_slice(b"RGB ");
        data[20..24].copy_from_slice(b"XYZ ");
        data[36..40].copy_from_slice(&PROFILE_SIGNATURE.to_be_bytes());

        data
    }

    /// Append tags (signature, full tag bytes) and fix up size and count
    pub(crate) fn with_tags(mut data: Vec<u8>, tags: &[(&[u8; 4], Vec<u8>)]) -> Vec<u8> {
        let table_end = 132 + 12 * tags.len();
        data.truncate(132);
        let mut payload = Vec::new();
        for (sig, bytes) in tags {
            data.extend_from_slice(*sig);
            data.extend_from_slice(&((table_end + payload.len()) as u32).to_be_bytes());
            data.extend_from_slice(&(bytes.len() as u32).to_be_bytes());
            payload.extend_from_slice(bytes);
            while payload.len() % 4 != 0 {
                payload.push(0);
            }
        }
        data.extend_from_slice(&payload);
        data[128..132].copy_from_slice(&(tags.len() as u32).to_be_bytes());
        let size = data.len() as u32;
        data[0..4].copy_from_slice(&size.to_be_bytes());
        data
    }

    pub(crate) fn text_tag(text: &str) -> Vec<u8> {
        let mut tag = b"text\0\0\0\0".to_vec();
        tag.extend_from_slice(text.as_bytes());
        tag.push(0);
        tag
    }

    #[test]
    fn test_parse_minimal_profile() {
        let data = create_minimal_profile();
        let profile = IccProfile::parse(&data).unwrap();

        assert_eq!(profile.header.version.major, 4);
        assert_eq!(profile.header.version.minor, 3);
        assert!(profile.tags.is_empty());
        assert!(!profile.is_matrix_shaper());
        assert!(!profile.has_clut());
    }

    #[test]
    fn test_profile_too_small() {
        assert!(IccProfile::parse(&[0u8; 100]).is_err());
    }

    #[test]
    fn test_bad_signature() {
        let mut data = create_minimal_profile();
        data[36..40].copy_from_slice(b"nope");
        assert!(matches!(
            IccProfile::parse(&data),
            Err(IccError::InvalidSignature(_))
        ));
    }

    #[test]
    fn test_tag_directory() {
        let data = with_tags(
            create_minimal_profile(),
            &[
                (b"cprt", text_tag("Test")),
                (b"rXYZ", b"XYZ \0\0\0\0".to_vec()),
                (b"rTRC", b"curv\0\0\0\0".to_vec()),
            ],
        );

        let profile = IccProfile::parse(&data).unwrap();
        assert_eq!(profile.tags.len(), 3);
        assert!(profile.has_tag(TagSignature::RED_COLORANT));
        assert!(profile.has_tag(TagSignature::RED_TRC));
        assert!(!profile.has_tag(TagSignature::GREEN_TRC));
        // Colorants and curves for all three channels are needed.
        assert!(!profile.is_matrix_shaper());
    }

    #[test]
    fn test_clut_detection() {
        let data = with_tags(create_minimal_profile(), &[(b"A2B0", b"mAB \0\0\0\0".to_vec())]);
        assert!(IccProfile::parse(&data).unwrap().has_clut());
    }

    #[test]
    fn test_tag_out_of_bounds() {
        let mut data = with_tags(create_minimal_profile(), &[(b"cprt", text_tag("x"))]);
        // Grow the declared tag size past the end of the buffer.
        data[140..144].copy_from_slice(&4096u32.to_be_bytes());
        assert!(matches!(
            IccProfile::parse(&data),
            Err(IccError::TagOutOfBounds { .. })
        ));
    }
}
