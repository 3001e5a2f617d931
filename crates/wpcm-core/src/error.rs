//! Error types for wpcm-core

use thiserror::Error;

/// Result type for wpcm-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building color transforms
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Failed to parse ICC profile
    #[error("Profile parse error: {0}")]
    ProfileParse(String),

    /// ICC profile parsed but cannot describe an output
    #[error("Unsupported profile: {0}")]
    UnsupportedProfile(String),

    /// Named primaries cannot be used for this transform
    #[error("Unsupported primaries: {0:?}")]
    UnsupportedPrimaries(crate::NamedPrimaries),

    /// Primaries do not span a color volume
    #[error("Degenerate primaries: {0:?}")]
    DegeneratePrimaries(crate::NamedPrimaries),

    /// Transform creation or evaluation failed
    #[error("Transform error: {0}")]
    Transform(String),

    /// Buffer size mismatch
    #[error("Buffer size mismatch: expected a multiple of {expected}, got {actual}")]
    BufferSize { expected: usize, actual: usize },
}
