//! # wpcm-server - per-client color management for a display server
//!
//! Implements the server side of a Wayland-style color-management protocol:
//! a capability manager global, per-output and per-surface extensions,
//! surface feedback channels, and synchronously resolved image descriptions.
//!
//! Extensions observe host outputs and surfaces without owning them. When the
//! host destroys an entity, every extension bound to it turns inert: the
//! client handle stays valid, and requests that need the entity fail with a
//! protocol error instead of touching freed state.
//!
//! ## Quick Start
//!
//! ```no_run
//! use wpcm_server::protocol::{ManagerRequest, SurfaceRequest};
//! use wpcm_server::{Display, ManagerOptions, ObjectId};
//!
//! let mut display = Display::new(&ManagerOptions::default()).unwrap();
//! let surface = display.host_mut().create_surface();
//! let client = display.create_client();
//!
//! display.bind_color_manager(client, ObjectId(2), 1).unwrap();
//! display
//!     .dispatch(client, ObjectId(2), ManagerRequest::GetSurface { id: ObjectId(3), surface })
//!     .unwrap();
//!
//! display.destroy_surface(surface);
//! let err = display
//!     .dispatch(client, ObjectId(3), SurfaceRequest::UnsetImageDescription)
//!     .unwrap_err();
//! assert_eq!(err.to_string(), "unset_image_description cannot be sent on an inert object");
//! ```

pub mod client;
pub mod config;
pub mod display;
pub mod error;
pub mod feedback;
pub mod host;
pub mod image_description;
pub mod manager;
pub mod output;
pub mod protocol;
pub mod surface;

pub use client::{Client, ClientId, Interface, Message, ObjectId, PostedError, ResourceData, ResourceId};
pub use config::ManagerOptions;
pub use display::Display;
pub use error::{Error, ProtocolError, Result};
pub use host::{AddonKind, Entity, Host, OutputId, SurfaceId};
pub use image_description::{DescriptionInfo, ImageDescription};
pub use manager::{COLOR_MANAGER_VERSION, ColorManager};
pub use protocol::{Event, Request};
