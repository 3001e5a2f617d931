//! Shared test fixtures

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber writing through the test harness
///
/// Honors `RUST_LOG`; safe to call from every test.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// ICC bytes of lcms2's built-in sRGB display profile
pub fn srgb_icc() -> Result<Vec<u8>> {
    lcms2::Profile::new_srgb()
        .icc()
        .context("serializing lcms2 sRGB profile")
}

/// ICC bytes of an XYZ profile, which is not an RGB display profile
pub fn xyz_icc() -> Result<Vec<u8>> {
    lcms2::Profile::new_xyz()
        .icc()
        .context("serializing lcms2 XYZ profile")
}
