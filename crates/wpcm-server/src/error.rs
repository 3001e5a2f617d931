//! Error types for wpcm-server
//!
//! [`Error`] covers manager construction and configuration and never reaches
//! a client. [`ProtocolError`] is what gets posted to a client.

use thiserror::Error;
use wpcm_core::Feature;

use crate::client::{Interface, ObjectId};
use crate::host::{OutputId, SurfaceId};

/// Result type for manager construction and configuration
pub type Result<T> = std::result::Result<T, Error>;

/// Manager construction and configuration errors
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Render intents must always include perceptual
    #[error("render intents must include perceptual")]
    MissingPerceptualIntent,

    /// Feature flag this manager cannot honor
    #[error("feature {0:?} is not supported")]
    UnsupportedFeature(Feature),

    /// Manager version out of range
    #[error("version {requested} is not supported (1..={max})")]
    UnsupportedVersion { requested: u32, max: u32 },

    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Errors posted to a client in response to a request
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// Handle creation failed
    #[error("insufficient memory")]
    NoMemory,

    /// Request names an object the client does not have
    #[error("invalid object {0}")]
    InvalidObject(ObjectId),

    /// Request names a host output that does not exist
    #[error("invalid output {0:?}")]
    UnknownOutput(OutputId),

    /// Request names a host surface that does not exist
    #[error("invalid surface {0:?}")]
    UnknownSurface(SurfaceId),

    /// Request does not belong to the target object's interface
    #[error("invalid method for {}", .0.name())]
    InvalidMethod(Interface),

    /// Bind with a version the global does not offer
    #[error("invalid version {requested}, max {max}")]
    InvalidVersion { requested: u32, max: u32 },

    /// The surface already has a color management surface
    #[error("surface already has a color management surface")]
    SurfaceExists,

    /// Optional feature the manager does not advertise
    #[error("{request} is not supported")]
    UnsupportedFeature { request: &'static str },

    /// Request sent on an extension whose host object is gone
    #[error("{request} cannot be sent on an inert object")]
    Inert { request: &'static str },

    /// Render intent not in the advertised set
    #[error("invalid render intent")]
    RenderIntent(u32),
}

impl ProtocolError {
    /// Interface whose error enum defines this error
    pub fn interface(&self) -> Interface {
        match self {
            Self::NoMemory
            | Self::InvalidObject(_)
            | Self::UnknownOutput(_)
            | Self::UnknownSurface(_)
            | Self::InvalidMethod(_)
            | Self::InvalidVersion { .. } => Interface::Display,
            Self::SurfaceExists | Self::UnsupportedFeature { .. } => Interface::ColorManager,
            Self::Inert { .. } | Self::RenderIntent(_) => Interface::ColorSurface,
        }
    }

    /// Wire error code within [`ProtocolError::interface`]
    pub fn code(&self) -> u32 {
        match self {
            Self::InvalidObject(_)
            | Self::UnknownOutput(_)
            | Self::UnknownSurface(_)
            | Self::InvalidVersion { .. } => 0,
            Self::InvalidMethod(_) => 1,
            Self::NoMemory => 2,
            Self::UnsupportedFeature { .. } => 0,
            Self::SurfaceExists => 1,
            Self::RenderIntent(_) => 0,
            Self::Inert { .. } => 2,
        }
    }
}
