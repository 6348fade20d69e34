//! Device models
//!
//! Converts between profile-encoded device RGB and XYZ relative to D50,
//! the ICC profile connection space. Only matrix-shaper profiles are
//! evaluated:
//! - Device → PCS: TRC decode → colorant matrix
//! - PCS → device: inverse matrix → TRC encode

mod matrix_shaper;
mod stages;

pub use matrix_shaper::{MatrixShaper, primaries_to_xyz};
pub use stages::{TrcCurve, TrcStage};
