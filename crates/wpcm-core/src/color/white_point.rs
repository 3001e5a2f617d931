//! White points
//!
//! White points are carried as CIE XYZ with Y=1.0. Named primaries specify
//! them by chromaticity, so most are built with [`WhitePoint::from_chromaticity`].

use crate::Cie1931Xy;
use crate::color::Xyz;

/// Named reference white
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WhitePoint {
    pub name: &'static str,
    pub xyz: Xyz,
}

impl WhitePoint {
    pub const fn new(name: &'static str, x: f64, y: f64, z: f64) -> Self {
        Self {
            name,
            xyz: Xyz::new(x, y, z),
        }
    }

    /// White point at chromaticity `xy`, Y = 1
    pub fn from_chromaticity(name: &'static str, xy: Cie1931Xy) -> Self {
        Self {
            name,
            xyz: Xyz::from_xyy(xy.x, xy.y, 1.0),
        }
    }
}

/// ICC profile connection space white
pub const D50: WhitePoint = WhitePoint::new("D50", 0.9642, 1.0, 0.8251);

/// White of sRGB, BT.2020, Display P3 and Adobe RGB
pub const D65: WhitePoint = WhitePoint::new("D65", 0.9505, 1.0, 1.0890);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_chromaticity_matches_constant() {
        let d65 = WhitePoint::from_chromaticity("D65", Cie1931Xy::new(0.3127, 0.3290));
        assert!(d65.xyz.approx_eq(&D65.xyz, 1e-3), "{:?}", d65.xyz);
    }
}
