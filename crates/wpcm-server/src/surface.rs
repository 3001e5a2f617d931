//! wp_color_management_surface_v1
//!
//! At most one per host surface, held in the surface's
//! [`AddonKind::ColorSurface`] slot.

use tracing::debug;
use wpcm_core::RenderIntent;

use crate::client::{ObjectId, ResourceData, ResourceId};
use crate::display::Display;
use crate::error::ProtocolError;
use crate::host::{AddonKind, SurfaceId};
use crate::protocol::SurfaceRequest;

/// Image description requested for the next commit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingDescription {
    pub description: ObjectId,
    pub identity: u32,
    pub render_intent: RenderIntent,
}

/// Live state of a surface extension
#[derive(Debug)]
pub struct SurfaceExtension {
    surface: SurfaceId,
    pending: Option<PendingDescription>,
}

impl SurfaceExtension {
    pub(crate) fn new(surface: SurfaceId) -> Self {
        Self {
            surface,
            pending: None,
        }
    }

    pub fn surface(&self) -> SurfaceId {
        self.surface
    }

    /// Description recorded by the last set, cleared by unset
    pub fn pending(&self) -> Option<&PendingDescription> {
        self.pending.as_ref()
    }
}

impl Display {
    pub(crate) fn handle_surface_request(
        &mut self,
        rid: ResourceId,
        request: SurfaceRequest,
    ) -> Result<(), ProtocolError> {
        match request {
            SurfaceRequest::Destroy => {
                self.destroy_resource(rid);
                Ok(())
            }
            SurfaceRequest::SetImageDescription {
                image_description,
                render_intent,
            } => self.set_image_description(rid, image_description, render_intent),
            SurfaceRequest::UnsetImageDescription => {
                let extension = self.surface_extension_mut(rid, "unset_image_description")?;
                extension.pending = None;
                debug!(?rid, "image description unset");
                Ok(())
            }
        }
    }

    fn set_image_description(
        &mut self,
        rid: ResourceId,
        image_description: ObjectId,
        render_intent: u32,
    ) -> Result<(), ProtocolError> {
        let identity = match self
            .clients
            .get(&rid.client)
            .and_then(|client| client.resource(image_description))
            .map(|resource| &resource.data)
        {
            Some(ResourceData::ImageDescription(description)) => description.identity(),
            _ => return Err(ProtocolError::InvalidObject(image_description)),
        };

        let intent = RenderIntent::from_wire(render_intent)
            .filter(|intent| self.manager.supports_intent(*intent));

        let extension = self.surface_extension_mut(rid, "set_image_description")?;
        let render_intent = intent.ok_or(ProtocolError::RenderIntent(render_intent))?;

        // Recorded only; applying it to rendering state is up to the compositor
        extension.pending = Some(PendingDescription {
            description: image_description,
            identity,
            render_intent,
        });
        debug!(?rid, %image_description, ?render_intent, "image description set");
        Ok(())
    }

    /// Live extension behind `rid`, or the inert error for `request`
    fn surface_extension_mut(
        &mut self,
        rid: ResourceId,
        request: &'static str,
    ) -> Result<&mut SurfaceExtension, ProtocolError> {
        let data = self
            .clients
            .get_mut(&rid.client)
            .and_then(|client| client.resource_mut(rid.object))
            .map(|resource| &mut resource.data);

        match data {
            Some(ResourceData::Surface(Some(extension))) => Ok(extension),
            Some(ResourceData::Surface(None)) => Err(ProtocolError::Inert { request }),
            _ => Err(ProtocolError::InvalidObject(rid.object)),
        }
    }

    pub(crate) fn release_surface(&mut self, rid: ResourceId, extension: SurfaceExtension) {
        self.host.addon_finish(extension.surface, AddonKind::ColorSurface);
        debug!(?rid, surface = ?extension.surface, "surface extension released");
    }

    /// Host surface attachment teardown
    pub(crate) fn surface_destroyed(&mut self, rid: ResourceId) {
        let extension = self
            .clients
            .get_mut(&rid.client)
            .and_then(|client| client.resource_mut(rid.object))
            .and_then(|resource| match &mut resource.data {
                ResourceData::Surface(extension) => extension.take(),
                _ => None,
            });

        if let Some(extension) = extension {
            debug!(?rid, surface = ?extension.surface, "surface extension made inert");
        }
    }
}
