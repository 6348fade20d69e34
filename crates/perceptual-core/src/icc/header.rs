//! ICC Profile Header
//!
//! The ICC profile header is exactly 128 bytes and contains basic profile information.
//! See ICC.1:2022 Section 7.2.

use std::fmt;

use super::error::IccError;
use super::types::DateTimeNumber;

/// Profile file signature - must be 'acsp' (0x61637370)
pub const PROFILE_SIGNATURE: u32 = 0x61637370;

/// Minimum valid profile size (header only)
pub const MIN_PROFILE_SIZE: usize = 128;

/// ICC Profile Header (128 bytes)
#[derive(Debug, Clone, PartialEq)]
pub struct IccHeader {
    /// Profile size in bytes
    pub size: u32,
    /// Profile version (major.minor.bugfix)
    pub version: ProfileVersion,
    /// Device class (display, input, output, etc.)
    pub device_class: ProfileClass,
    /// Color space of data (RGB, CMYK, etc.)
    pub color_space: DataColorSpace,
    /// Profile connection space (XYZ or Lab)
    pub pcs: DataColorSpace,
    /// Date and time profile was created
    pub creation_date: DateTimeNumber,
}

impl IccHeader {
    /// Parse header from bytes
    pub fn parse(data: &[u8]) -> Result<Self, IccError> {
        if data.len() < MIN_PROFILE_SIZE {
            return Err(IccError::TooSmall {
                expected: MIN_PROFILE_SIZE,
                actual: data.len(),
            });
        }

        let be_u32 = |at: usize| u32::from_be_bytes([data[at], data[at + 1], data[at + 2], data[at + 3]]);

        let signature = be_u32(36);
        if signature != PROFILE_SIGNATURE {
            return Err(IccError::InvalidSignature(signature));
        }

        let version = ProfileVersion {
            major: data[8],
            minor: data[9] >> 4,
            bugfix: data[9] & 0x0F,
        };

        let device_class = ProfileClass::from_u32(be_u32(12))?;
        let color_space = DataColorSpace::from_u32(be_u32(16))?;
        let pcs = DataColorSpace::from_u32(be_u32(20))?;
        let creation_date = DateTimeNumber::from_bytes(&data[24..36]).unwrap_or_default();

        Ok(Self {
            size: be_u32(0),
            version,
            device_class,
            color_space,
            pcs,
            creation_date,
        })
    }

    /// Check the declared size against the buffer
    pub fn validate(&self, data_len: usize) -> Result<(), IccError> {
        if self.size as usize > data_len {
            return Err(IccError::SizeMismatch {
                header_size: self.size,
                actual_size: data_len,
            });
        }
        Ok(())
    }
}

/// ICC Profile Version
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProfileVersion {
    pub major: u8,
    pub minor: u8,
    pub bugfix: u8,
}

impl ProfileVersion {
    pub const fn new(major: u8, minor: u8, bugfix: u8) -> Self {
        Self {
            major,
            minor,
            bugfix,
        }
    }
}

impl fmt::Display for ProfileVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.bugfix)
    }
}

/// ICC Profile Class (Device Class)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProfileClass {
    /// Input device (scanner, camera)
    Input,
    /// Display device (monitor)
    Display,
    /// Output device (printer)
    Output,
    /// Device link
    DeviceLink,
    /// Color space conversion
    ColorSpace,
    /// Abstract profile
    Abstract,
    /// Named color profile
    NamedColor,
}

impl ProfileClass {
    pub fn from_u32(val: u32) -> Result<Self, IccError> {
        match &val.to_be_bytes() {
            b"scnr" => Ok(Self::Input),
            b"mntr" => Ok(Self::Display),
            b"prtr" => Ok(Self::Output),
            b"link" => Ok(Self::DeviceLink),
            b"spac" => Ok(Self::ColorSpace),
            b"abst" => Ok(Self::Abstract),
            b"nmcl" => Ok(Self::NamedColor),
            _ => Err(IccError::InvalidProfileClass(val)),
        }
    }
}

impl fmt::Display for ProfileClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Input => "input device",
            Self::Display => "display device",
            Self::Output => "output device",
            Self::DeviceLink => "device link",
            Self::ColorSpace => "color space conversion",
            Self::Abstract => "abstract",
            Self::NamedColor => "named color",
        };
        f.write_str(name)
    }
}

/// Color model of profile data or of the PCS
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DataColorSpace {
    Xyz,
    Lab,
    Luv,
    YCbCr,
    Yxy,
    Rgb,
    Gray,
    Hsv,
    Hls,
    Cmyk,
    Cmy,
    /// Generic n-color space (2..=15 channels)
    MultiColor(u8),
}

impl DataColorSpace {
    pub fn from_u32(val: u32) -> Result<Self, IccError> {
        let bytes = val.to_be_bytes();
        match &bytes {
            b"XYZ " => Ok(Self::Xyz),
            b"Lab " => Ok(Self::Lab),
            b"Luv " => Ok(Self::Luv),
            b"YCbr" => Ok(Self::YCbCr),
            b"Yxy " => Ok(Self::Yxy),
            b"RGB " => Ok(Self::Rgb),
            b"GRAY" => Ok(Self::Gray),
            b"HSV " => Ok(Self::Hsv),
            b"HLS " => Ok(Self::Hls),
            b"CMYK" => Ok(Self::Cmyk),
            b"CMY " => Ok(Self::Cmy),
            [n, b'C', b'L', b'R'] => match n {
                b'2'..=b'9' => Ok(Self::MultiColor(n - b'0')),
                b'A'..=b'F' => Ok(Self::MultiColor(n - b'A' + 10)),
                _ => Err(IccError::InvalidColorSpace(val)),
            },
            _ => Err(IccError::InvalidColorSpace(val)),
        }
    }
}

impl fmt::Display for DataColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Xyz => f.write_str("XYZ"),
            Self::Lab => f.write_str("Lab"),
            Self::Luv => f.write_str("Luv"),
            Self::YCbCr => f.write_str("YCbCr"),
            Self::Yxy => f.write_str("Yxy"),
            Self::Rgb => f.write_str("RGB"),
            Self::Gray => f.write_str("Gray"),
            Self::Hsv => f.write_str("HSV"),
            Self::Hls => f.write_str("HLS"),
            Self::Cmyk => f.write_str("CMYK"),
            Self::Cmy => f.write_str("CMY"),
            Self::MultiColor(n) => write!(f, "{}-color", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_space_display() {
        assert_eq!(DataColorSpace::Gray.to_string(), "Gray");
        assert_eq!(DataColorSpace::Rgb.to_string(), "RGB");
        assert_eq!(DataColorSpace::MultiColor(6).to_string(), "6-color");
    }

    #[test]
    fn test_multi_color_signatures() {
        let six = u32::from_be_bytes(*b"6CLR");
        assert_eq!(DataColorSpace::from_u32(six).unwrap(), DataColorSpace::MultiColor(6));
        let fifteen = u32::from_be_bytes(*b"FCLR");
        assert_eq!(DataColorSpace::from_u32(fifteen).unwrap(), DataColorSpace::MultiColor(15));
        assert!(DataColorSpace::from_u32(u32::from_be_bytes(*b"GCLR")).is_err());
    }

    #[test]
    fn test_profile_class_signatures() {
        for (signature, class) in [
            (b"scnr", ProfileClass::Input),
            (b"mntr", ProfileClass::Display),
            (b"prtr", ProfileClass::Output),
            (b"link", ProfileClass::DeviceLink),
            (b"nmcl", ProfileClass::NamedColor),
        ] {
            assert_eq!(ProfileClass::from_u32(u32::from_be_bytes(*signature)).unwrap(), class);
        }
        assert!(matches!(
            ProfileClass::from_u32(u32::from_be_bytes(*b"xxxx")),
            Err(IccError::InvalidProfileClass(_))
        ));
    }

    #[test]
    fn test_profile_version() {
        assert!(ProfileVersion::new(2, 4, 0) < ProfileVersion::new(4, 0, 0));
        assert!(ProfileVersion::new(4, 3, 0) > ProfileVersion::new(4, 0, 0));
        assert_eq!(ProfileVersion::new(4, 3, 0).to_string(), "4.3.0");
    }
}
