//! ICC structure errors

use thiserror::Error;

/// Structural problems found while reading the header and tag table
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum IccError {
    #[error("profile too small: expected {expected} bytes, got {actual}")]
    TooSmall { expected: usize, actual: usize },

    #[error("invalid profile signature 0x{0:08X}, expected 'acsp'")]
    InvalidSignature(u32),

    #[error("header declares {header_size} bytes but only {actual_size} are present")]
    SizeMismatch { header_size: u32, actual_size: usize },

    #[error("tag 0x{tag:08X} at offset {offset} with size {size} exceeds profile size {profile_size}")]
    TagOutOfBounds {
        tag: u32,
        offset: u32,
        size: u32,
        profile_size: usize,
    },

    #[error("unknown color space signature 0x{0:08X}")]
    InvalidColorSpace(u32),

    #[error("unknown profile class signature 0x{0:08X}")]
    InvalidProfileClass(u32),

    #[error("corrupted data: {0}")]
    CorruptedData(String),
}
