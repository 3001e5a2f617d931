//! # wpcm-core - color primitives for display-server color management
//!
//! Named color-space vocabulary shared by the protocol layer (render
//! intents, features, primaries, transfer functions) and the reference
//! counted [`ColorTransform`] a compositor builds per output.
//!
//! ## Quick Start
//!
//! ```no_run
//! use wpcm_core::{ColorTransform, NamedPrimaries};
//!
//! // Linear sRGB into a BT.2020 volume, sRGB-encoded
//! let transform = ColorTransform::init_srgb(NamedPrimaries::Bt2020).unwrap();
//!
//! // Share it; each clone is one reference
//! let shared = transform.clone();
//! assert_eq!(transform.ref_count(), 2);
//! shared.unref();
//!
//! let encoded = transform.apply([0.5, 0.25, 1.0]);
//! ```

pub mod color;
pub mod error;
pub mod lut;
pub mod math;
pub mod profile;
pub mod simd;
pub mod transform;
pub mod types;

pub use error::{Error, Result};
pub use lut::{LUT_DIM, Lut3d};
pub use profile::IccProfile;
pub use transform::{ColorTransform, Encoding, unref};
pub use types::{
    Cie1931Xy, ColorPrimaries, Feature, FeatureSet, Luminances, NamedPrimaries, RenderIntent,
    TransferFunction,
};

/// Version of wpcm-core
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
