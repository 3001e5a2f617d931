//! RGB ↔ XYZ matrices derived from chromaticities
//!
//! Follows the usual construction: place the primaries' xyz chromaticities
//! as columns, then scale each column so that RGB (1,1,1) lands on the white.

use crate::color::WhitePoint;
use crate::math::Matrix3x3;
use crate::math::chromatic_adaptation::bradford_matrix;
use crate::{Cie1931Xy, ColorPrimaries, Error, NamedPrimaries, Result};

/// White point of a set of primaries
pub fn white_point(primaries: &ColorPrimaries) -> WhitePoint {
    WhitePoint::from_chromaticity("primaries", primaries.white)
}

/// Linear RGB → XYZ matrix for `primaries`, relative to their own white
///
/// Returns None when the primaries are collinear or the white has a zero y.
pub fn rgb_to_xyz(primaries: &ColorPrimaries) -> Option<Matrix3x3> {
    // xyz columns; scaling below absorbs the missing Y normalization
    let column = |c: Cie1931Xy| [c.x, c.y, 1.0 - c.x - c.y];

    let unscaled = Matrix3x3::from_columns(
        column(primaries.red),
        column(primaries.green),
        column(primaries.blue),
    );
    if primaries.white.y <= 0.0 {
        return None;
    }
    let white = white_point(primaries).xyz.to_array();
    let s = unscaled.inverse()?.apply(white);

    Some(unscaled.compose(&Matrix3x3::diagonal(s)))
}

/// Linear RGB conversion matrix from sRGB into `target`
///
/// Includes Bradford adaptation when the target white differs from D65.
pub fn srgb_to_target(target: NamedPrimaries) -> Result<Matrix3x3> {
    let source = NamedPrimaries::Srgb.chromaticities();
    let dest = target.chromaticities();

    let src_to_xyz = rgb_to_xyz(&source).ok_or(Error::DegeneratePrimaries(NamedPrimaries::Srgb))?;
    let xyz_to_dst = rgb_to_xyz(&dest)
        .and_then(|m| m.inverse())
        .ok_or(Error::DegeneratePrimaries(target))?;
    let adapt = if source.white == dest.white {
        Matrix3x3::identity()
    } else {
        bradford_matrix(&white_point(&source), &white_point(&dest))
    };

    Ok(xyz_to_dst.compose(&adapt.compose(&src_to_xyz)))
}
