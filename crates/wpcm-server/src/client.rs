//! Client-side object bookkeeping
//!
//! Each client owns a table of protocol objects, the events queued for it,
//! and the first protocol error posted to it.

use std::collections::BTreeMap;
use std::fmt;

use tracing::{debug, trace};

use crate::error::ProtocolError;
use crate::feedback::SurfaceFeedback;
use crate::image_description::ImageDescription;
use crate::output::OutputExtension;
use crate::protocol::Event;
use crate::surface::SurfaceExtension;

/// Connected client identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClientId(u32);

impl ClientId {
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }
}

/// Client-chosen object id
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectId(pub u32);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A protocol object of a specific client
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResourceId {
    pub client: ClientId,
    pub object: ObjectId,
}

impl ResourceId {
    pub const fn new(client: ClientId, object: ObjectId) -> Self {
        Self { client, object }
    }
}

/// Protocol interfaces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interface {
    Display,
    ColorManager,
    ColorOutput,
    ColorSurface,
    ColorSurfaceFeedback,
    ImageDescription,
    ImageDescriptionInfo,
}

impl Interface {
    /// Wire name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Display => "wl_display",
            Self::ColorManager => "wp_color_manager_v1",
            Self::ColorOutput => "wp_color_management_output_v1",
            Self::ColorSurface => "wp_color_management_surface_v1",
            Self::ColorSurfaceFeedback => "wp_color_management_surface_feedback_v1",
            Self::ImageDescription => "wp_image_description_v1",
            Self::ImageDescriptionInfo => "wp_image_description_info_v1",
        }
    }
}

/// Per-object state
///
/// Extension variants hold `None` once their host entity is gone; the
/// handle is then inert until the client releases it.
#[derive(Debug)]
pub enum ResourceData {
    Manager,
    Output(Option<OutputExtension>),
    Surface(Option<SurfaceExtension>),
    Feedback(Option<SurfaceFeedback>),
    ImageDescription(ImageDescription),
    ImageDescriptionInfo,
}

impl ResourceData {
    pub fn interface(&self) -> Interface {
        match self {
            Self::Manager => Interface::ColorManager,
            Self::Output(_) => Interface::ColorOutput,
            Self::Surface(_) => Interface::ColorSurface,
            Self::Feedback(_) => Interface::ColorSurfaceFeedback,
            Self::ImageDescription(_) => Interface::ImageDescription,
            Self::ImageDescriptionInfo => Interface::ImageDescriptionInfo,
        }
    }

    /// Whether this is an extension whose host entity is gone
    pub fn is_inert(&self) -> bool {
        matches!(self, Self::Output(None) | Self::Surface(None) | Self::Feedback(None))
    }
}

#[derive(Debug)]
pub struct Resource {
    pub version: u32,
    pub data: ResourceData,
}

impl Resource {
    pub fn interface(&self) -> Interface {
        self.data.interface()
    }
}

/// An event queued for delivery
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub object: ObjectId,
    pub event: Event,
}

/// A protocol error as the client would receive it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostedError {
    pub object: ObjectId,
    pub interface: Interface,
    pub code: u32,
    pub message: String,
    pub error: ProtocolError,
}

/// A connected client
#[derive(Debug)]
pub struct Client {
    id: ClientId,
    resources: BTreeMap<ObjectId, Resource>,
    events: Vec<Message>,
    error: Option<PostedError>,
    resource_limit: Option<usize>,
}

impl Client {
    pub(crate) fn new(id: ClientId) -> Self {
        Self {
            id,
            resources: BTreeMap::new(),
            events: Vec::new(),
            error: None,
            resource_limit: None,
        }
    }

    pub fn id(&self) -> ClientId {
        self.id
    }

    /// Cap the number of live objects; creation beyond it fails with no-memory
    pub fn set_resource_limit(&mut self, limit: Option<usize>) {
        self.resource_limit = limit;
    }

    pub(crate) fn create_resource(
        &mut self,
        object: ObjectId,
        version: u32,
        data: ResourceData,
    ) -> Result<ResourceId, ProtocolError> {
        if self.resources.contains_key(&object) {
            return Err(ProtocolError::InvalidObject(object));
        }
        if self
            .resource_limit
            .is_some_and(|limit| self.resources.len() >= limit)
        {
            return Err(ProtocolError::NoMemory);
        }

        debug!(client = ?self.id, %object, interface = data.interface().name(), "resource created");
        self.resources.insert(object, Resource { version, data });
        Ok(ResourceId::new(self.id, object))
    }

    pub fn resource(&self, object: ObjectId) -> Option<&Resource> {
        self.resources.get(&object)
    }

    pub(crate) fn resource_mut(&mut self, object: ObjectId) -> Option<&mut Resource> {
        self.resources.get_mut(&object)
    }

    pub(crate) fn remove_resource(&mut self, object: ObjectId) -> Option<Resource> {
        let resource = self.resources.remove(&object)?;
        debug!(client = ?self.id, %object, interface = resource.interface().name(), "resource destroyed");
        Some(resource)
    }

    pub(crate) fn take_resources(&mut self) -> BTreeMap<ObjectId, Resource> {
        std::mem::take(&mut self.resources)
    }

    /// Live object ids, ascending
    pub fn objects(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.resources.keys().copied()
    }

    pub(crate) fn send(&mut self, object: ObjectId, event: Event) {
        trace!(client = ?self.id, %object, ?event, "event");
        self.events.push(Message { object, event });
    }

    /// Events queued so far
    pub fn events(&self) -> &[Message] {
        &self.events
    }

    /// Drain queued events
    pub fn take_events(&mut self) -> Vec<Message> {
        std::mem::take(&mut self.events)
    }

    /// Record a protocol error; only the first one sticks
    pub(crate) fn post_error(&mut self, object: ObjectId, error: ProtocolError) {
        if self.error.is_none() {
            self.error = Some(PostedError {
                object,
                interface: error.interface(),
                code: error.code(),
                message: error.to_string(),
                error,
            });
        }
    }

    /// First protocol error posted to this client
    pub fn posted_error(&self) -> Option<&PostedError> {
        self.error.as_ref()
    }
}
