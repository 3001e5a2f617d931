//! Per-pixel stages of the sRGB transform path
//!
//! Compiled for AVX2, SSE4.1 and NEON through `multiversion`, with runtime
//! dispatch and a scalar fallback.

mod gamma;
mod matrix;

pub use gamma::srgb_encode_batch_f32;
pub use matrix::matrix_clip_batch_f32;

/// Widest instruction set the batch stages dispatch to on this CPU
pub fn active_features() -> &'static str {
    #[cfg(target_arch = "x86_64")]
    {
        if is_x86_feature_detected!("avx2") {
            "AVX2"
        } else if is_x86_feature_detected!("sse4.1") {
            "SSE4.1"
        } else {
            "scalar"
        }
    }
    #[cfg(target_arch = "aarch64")]
    {
        "NEON"
    }
    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    {
        "scalar"
    }
}
