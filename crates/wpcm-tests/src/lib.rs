//! # wpcm-tests
//!
//! Integration tests for wpcm-core and wpcm-server.
//!
//! This crate provides:
//! - [`Harness`]: a display with one connected client, plus helpers to bind
//!   the color manager and create extensions
//! - ICC fixtures generated with lcms2
//! - [`init_tracing`] to route logs through the test writer
//!
//! ## Test Categories
//!
//! 1. **Capabilities**: bind-time advertisement and manager construction
//! 2. **Extension lifecycles**: output, surface and feedback teardown
//! 3. **Image descriptions**: ready events and information queries
//! 4. **Color transforms**: reference counting, sRGB and ICC encodings
//! 5. **Properties**: proptest over options, intents and lifetimes

pub mod fixtures;
pub mod harness;

pub use fixtures::{init_tracing, srgb_icc, xyz_icc};
pub use harness::{Harness, MANAGER};
