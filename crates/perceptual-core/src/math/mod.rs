//! Numeric building blocks
//!
//! - 3x3 matrix operations for RGB↔XYZ and Oklab
//! - Bradford chromatic adaptation
//! - ICC parametric transfer curves

pub mod chromatic_adaptation;
pub mod gamma;
pub mod matrix;

pub use chromatic_adaptation::bradford_matrix;
pub use gamma::{ParametricCurve, ParametricCurveType};
pub use matrix::Matrix3x3;
