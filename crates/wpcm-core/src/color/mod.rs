//! Color space types and conversions
//!
//! This module provides:
//! - CIE XYZ color space
//! - White point definitions
//! - RGB ↔ XYZ matrices built from primaries chromaticities

pub mod primaries;
pub mod white_point;
pub mod xyz;

pub use primaries::{rgb_to_xyz, srgb_to_target};
pub use white_point::{D50, D65, WhitePoint};
pub use xyz::Xyz;
