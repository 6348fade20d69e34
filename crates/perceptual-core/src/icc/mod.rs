//! ICC profile introspection
//!
//! Parses the 128-byte header and the tag directory of an ICC.1:2022 profile
//! for profile metadata and feature detection. Tag contents, text included,
//! are decoded by `moxcms`.
//!
//! ```ignore
//! let profile = IccProfile::parse(&bytes)?;
//! println!("{} {}", profile.header.device_class, profile.header.version);
//! ```

pub mod header;

mod error;
pub(crate) mod parser;
mod text;
mod types;

pub use error::IccError;
pub use header::{DataColorSpace, IccHeader, ProfileClass, ProfileVersion};
pub use parser::IccProfile;
pub use text::{LocalizedRecord, TextData};
pub use types::{DateTimeNumber, TagSignature};
