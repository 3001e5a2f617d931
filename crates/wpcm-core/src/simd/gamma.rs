//! SIMD-optimized transfer function operations
//!
//! The encode stage runs on every channel of every color pushed through a
//! transform. Batch processing allows better SIMD utilization.

use multiversion::multiversion;

/// Apply sRGB encode (linear → encoded) in place
///
/// Inverse sRGB transfer function:
/// - Linear segment: Y = X * 12.92 for X <= 0.0031308
/// - Power segment: Y = 1.055 * X^(1/2.4) - 0.055 for X > 0.0031308
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn srgb_encode_batch_f32(data: &mut [f32]) {
    const THRESHOLD: f32 = 0.0031308;
    const LINEAR_SCALE: f32 = 12.92;
    const POWER_SCALE: f32 = 1.055;
    const POWER_OFFSET: f32 = 0.055;
    const POWER_EXP: f32 = 1.0 / 2.4;

    for v in data.iter_mut() {
        let x = v.clamp(0.0, 1.0);
        *v = if x <= THRESHOLD {
            x * LINEAR_SCALE
        } else {
            POWER_SCALE * x.powf(POWER_EXP) - POWER_OFFSET
        };
    }
}
