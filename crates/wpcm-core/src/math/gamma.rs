//! Scalar sRGB transfer function
//!
//! IEC 61966-2-1 piecewise curve in f64, the reference the batch
//! encoder in `crate::simd` is checked against.

/// sRGB gamma decode (encoded → linear)
#[inline]
pub(crate) fn srgb_gamma_decode(encoded: f64) -> f64 {
    if encoded <= 0.04045 {
        encoded / 12.92
    } else {
        ((encoded + 0.055) / 1.055).powf(2.4)
    }
}

/// sRGB gamma encode (linear → encoded)
///
/// Converts linear light [0,1] to sRGB-encoded value [0,1].
#[inline]
pub(crate) fn srgb_gamma_encode(linear: f64) -> f64 {
    if linear <= 0.0031308 {
        linear * 12.92
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_srgb_endpoints() {
        assert_eq!(srgb_gamma_encode(0.0), 0.0);
        assert!((srgb_gamma_encode(1.0) - 1.0).abs() < 1e-12);
        assert!((srgb_gamma_decode(1.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_srgb_mid_grey() {
        // Linear 0.5 encodes to ~0.7354
        assert!((srgb_gamma_encode(0.5) - 0.735_356_6).abs() < 1e-6);
    }

    #[test]
    fn test_srgb_roundtrip() {
        for i in 0..=100 {
            let v = i as f64 / 100.0;
            let back = srgb_gamma_decode(srgb_gamma_encode(v));
            assert!((back - v).abs() < 1e-9, "{v} -> {back}");
        }
    }
}
