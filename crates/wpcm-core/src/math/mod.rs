//! Mathematical operations for color management
//!
//! This module provides foundational math operations used throughout wpcm:
//! - 3x3 matrix operations for RGB↔XYZ transforms
//! - Chromatic adaptation (Bradford)
//! - Interpolation for LUT evaluation

pub mod chromatic_adaptation;
#[cfg(test)]
pub(crate) mod gamma;
mod interpolation;
pub mod matrix;

pub use chromatic_adaptation::bradford_matrix;
pub(crate) use interpolation::trilinear_interp;
pub use matrix::Matrix3x3;
