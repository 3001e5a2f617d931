//! 3D lookup tables
//!
//! A baked transform is stored as a cube of `dim³` RGB triples in
//! (r, g, b, channel) order, sampled with trilinear interpolation.

use crate::math::trilinear_interp;

/// Grid points per axis of a baked transform
pub const LUT_DIM: usize = 33;

/// An RGB → RGB 3D lookup table
#[derive(Debug, Clone, PartialEq)]
pub struct Lut3d {
    dim: usize,
    data: Vec<f32>,
}

impl Lut3d {
    /// Build a `LUT_DIM`³ table by evaluating `f` once per grid point
    ///
    /// `f` receives all grid inputs at once, interleaved RGB, and rewrites
    /// them in place with the outputs.
    pub(crate) fn bake<E>(f: impl FnOnce(&mut [f32]) -> Result<(), E>) -> Result<Self, E> {
        Self::with_dim(LUT_DIM, f)
    }

    fn with_dim<E>(dim: usize, f: impl FnOnce(&mut [f32]) -> Result<(), E>) -> Result<Self, E> {
        // A grid needs both endpoints of every axis
        debug_assert!(dim >= 2, "LUT grid of {dim} points");
        let max = (dim - 1) as f32;
        let mut data = Vec::with_capacity(dim * dim * dim * 3);
        for r in 0..dim {
            for g in 0..dim {
                for b in 0..dim {
                    data.extend([r as f32 / max, g as f32 / max, b as f32 / max]);
                }
            }
        }
        f(&mut data)?;
        Ok(Self { dim, data })
    }

    /// Grid points per axis
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Table entries, interleaved RGB
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Raw native-endian bytes, suitable for a GPU texture upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }

    /// Sample the table at `rgb`
    #[inline]
    pub fn sample(&self, rgb: [f32; 3]) -> [f32; 3] {
        trilinear_interp(&self.data, self.dim, rgb)
    }
}
