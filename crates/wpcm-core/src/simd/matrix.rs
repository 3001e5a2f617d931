//! SIMD-optimized matrix operations
//!
//! Matrix-vector multiplication is the primaries conversion stage of every
//! color transform.

use multiversion::multiversion;

/// Multiply a 3x3 matrix by each color in place, then clip to [0, 1]
///
/// The matrix is stored in row-major order.
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn matrix_clip_batch_f32(matrix: &[[f32; 3]; 3], data: &mut [[f32; 3]]) {
    // Extract matrix elements for better register allocation
    let m00 = matrix[0][0];
    let m01 = matrix[0][1];
    let m02 = matrix[0][2];
    let m10 = matrix[1][0];
    let m11 = matrix[1][1];
    let m12 = matrix[1][2];
    let m20 = matrix[2][0];
    let m21 = matrix[2][1];
    let m22 = matrix[2][2];

    for px in data.iter_mut() {
        let [r, g, b] = *px;

        px[0] = (m00 * r + m01 * g + m02 * b).clamp(0.0, 1.0);
        px[1] = (m10 * r + m11 * g + m12 * b).clamp(0.0, 1.0);
        px[2] = (m20 * r + m21 * g + m22 * b).clamp(0.0, 1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_preserves_in_gamut() {
        let identity = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
        let mut data = [[0.5, 0.3, 0.7], [1.0, 0.0, 0.0]];

        matrix_clip_batch_f32(&identity, &mut data);

        assert_eq!(data, [[0.5, 0.3, 0.7], [1.0, 0.0, 0.0]]);
    }

    #[test]
    fn test_out_of_volume_is_clipped() {
        let m = [[2.0, 0.0, 0.0], [-1.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
        let mut data = [[0.75, 0.25, 0.5]];

        matrix_clip_batch_f32(&m, &mut data);

        assert_eq!(data, [[1.0, 0.0, 0.5]]);
    }
}
