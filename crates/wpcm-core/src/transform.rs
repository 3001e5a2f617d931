//! Reference-counted color transforms
//!
//! A [`ColorTransform`] maps linear sRGB-primaried color into an output's
//! color volume and encoding. It is immutable once built and shared by
//! reference count: `Clone` takes a reference, [`ColorTransform::unref`]
//! (or dropping) releases one, and the last release frees the lookup table.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::color::srgb_to_target;
use crate::lut::{LUT_DIM, Lut3d};
use crate::profile::{IccProfile, linear_source_profile};
use crate::simd::{active_features, matrix_clip_batch_f32, srgb_encode_batch_f32};
use crate::{Error, NamedPrimaries, Result};

/// Output encoding of a transform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// sRGB inverse EOTF
    Srgb,
    /// Encoding described by an ICC profile, baked into a 3D LUT
    Icc,
}

enum Stage {
    Srgb { matrix: [[f32; 3]; 3] },
    Icc { profile: Box<[u8]>, lut: Lut3d },
}

struct TransformInner {
    primaries: NamedPrimaries,
    stage: Stage,
}

impl Drop for TransformInner {
    fn drop(&mut self) {
        trace!(primaries = ?self.primaries, "color transform released");
    }
}

/// Shared, immutable color transform
#[derive(Clone)]
pub struct ColorTransform {
    inner: Arc<TransformInner>,
}

impl ColorTransform {
    /// Build a transform into `primaries` with the standard sRGB encoding
    ///
    /// Linear sRGB → linear `primaries` (matrix) → clip → sRGB inverse EOTF.
    pub fn init_srgb(primaries: NamedPrimaries) -> Result<Self> {
        let matrix = srgb_to_target(primaries)?.to_f32();

        debug!(?primaries, simd = active_features(), "built sRGB color transform");
        Ok(Self::from_inner(TransformInner {
            primaries,
            stage: Stage::Srgb { matrix },
        }))
    }

    /// Build a transform into `primaries`, encoded by the ICC profile in `data`
    ///
    /// The profile must be an RGB display-device profile. The whole mapping
    /// is baked into a `LUT_DIM`³ lookup table.
    pub fn init_linear_to_icc(primaries: NamedPrimaries, data: &[u8]) -> Result<Self> {
        let profile = IccProfile::from_bytes(data)?;
        let source = linear_source_profile(primaries)?;
        let matrix = srgb_to_target(primaries)?.to_f32();

        let executor = source
            .create_transform_f32(
                moxcms::Layout::Rgb,
                profile.inner(),
                moxcms::Layout::Rgb,
                moxcms::TransformOptions::default(),
            )
            .map_err(|e| Error::Transform(format!("{:?}", e)))?;

        let lut = Lut3d::bake(|grid| {
            let pixels: &mut [[f32; 3]] = bytemuck::cast_slice_mut(grid);
            matrix_clip_batch_f32(&matrix, pixels);
            let linear = grid.to_vec();
            executor
                .transform(&linear, grid)
                .map_err(|e| Error::Transform(format!("{:?}", e)))
        })?;

        debug!(?primaries, icc_len = data.len(), dim = LUT_DIM, "built ICC color transform");
        Ok(Self::from_inner(TransformInner {
            primaries,
            stage: Stage::Icc {
                profile: data.into(),
                lut,
            },
        }))
    }

    fn from_inner(inner: TransformInner) -> Self {
        Self {
            inner: Arc::new(inner),
        }
    }

    /// Release this reference
    ///
    /// The transform's resources are freed when the last reference goes.
    pub fn unref(self) {
        drop(self);
    }

    /// Number of live references, including this one
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Whether both handles refer to the same transform
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Target primaries
    pub fn primaries(&self) -> NamedPrimaries {
        self.inner.primaries
    }

    /// Output encoding
    pub fn encoding(&self) -> Encoding {
        match self.inner.stage {
            Stage::Srgb { .. } => Encoding::Srgb,
            Stage::Icc { .. } => Encoding::Icc,
        }
    }

    /// Baked lookup table, for ICC transforms
    pub fn lut(&self) -> Option<&Lut3d> {
        match &self.inner.stage {
            Stage::Icc { lut, .. } => Some(lut),
            Stage::Srgb { .. } => None,
        }
    }

    /// ICC payload the transform was built from
    pub fn icc_profile(&self) -> Option<&[u8]> {
        match &self.inner.stage {
            Stage::Icc { profile, .. } => Some(profile),
            Stage::Srgb { .. } => None,
        }
    }

    /// Transform a single linear sRGB color
    pub fn apply(&self, rgb: [f32; 3]) -> [f32; 3] {
        let mut px = [rgb];
        self.apply_pixels(&mut px);
        px[0]
    }

    /// Transform interleaved RGB colors in place
    pub fn apply_batch(&self, data: &mut [f32]) -> Result<()> {
        let len = data.len();
        let pixels: &mut [[f32; 3]] =
            bytemuck::try_cast_slice_mut(data).map_err(|_| Error::BufferSize {
                expected: 3,
                actual: len,
            })?;
        self.apply_pixels(pixels);
        Ok(())
    }

    fn apply_pixels(&self, pixels: &mut [[f32; 3]]) {
        match &self.inner.stage {
            Stage::Srgb { matrix } => {
                matrix_clip_batch_f32(matrix, pixels);
                srgb_encode_batch_f32(pixels.as_flattened_mut());
            }
            Stage::Icc { lut, .. } => {
                for px in pixels.iter_mut() {
                    *px = lut.sample(*px);
                }
            }
        }
    }
}

impl fmt::Debug for ColorTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorTransform")
            .field("primaries", &self.primaries())
            .field("encoding", &self.encoding())
            .field("refs", &self.ref_count())
            .finish()
    }
}

/// Release a possibly-absent transform reference
///
/// `None` is a no-op.
pub fn unref(transform: Option<ColorTransform>) {
    if let Some(transform) = transform {
        transform.unref();
    }
}
