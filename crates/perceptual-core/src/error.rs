//! Error types for perceptual-core

use thiserror::Error;

use crate::icc::IccError;

/// Result type for perceptual-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading a profile or building a color space
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// moxcms rejected the profile data
    #[error("Profile parse error: {0}")]
    ProfileParse(String),

    /// Profile parsed but its content is unusable
    #[error("Invalid profile: {0}")]
    InvalidProfile(String),

    /// Profile data color space is not RGB
    #[error("Unsupported color space: {0}")]
    UnsupportedColorSpace(String),

    /// Profile is RGB but cannot be evaluated (for example LUT-based)
    #[error("Unsupported profile: {0}")]
    UnsupportedProfile(String),

    /// Colorant matrix cannot be inverted
    #[error("Colorant matrix is singular")]
    SingularMatrix,

    /// Structural ICC error
    #[error("ICC structure error: {0}")]
    Icc(#[from] IccError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
