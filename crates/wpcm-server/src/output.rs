//! wp_color_management_output_v1

use tracing::debug;

use crate::client::{ResourceData, ResourceId};
use crate::display::Display;
use crate::error::ProtocolError;
use crate::host::{OutputId, Subscription};
use crate::protocol::OutputRequest;

/// Live state of an output extension
#[derive(Debug)]
pub struct OutputExtension {
    output: OutputId,
    subscription: Subscription,
}

impl OutputExtension {
    pub(crate) fn new(output: OutputId, subscription: Subscription) -> Self {
        Self {
            output,
            subscription,
        }
    }

    /// Host output this extension observes
    pub fn output(&self) -> OutputId {
        self.output
    }
}

impl Display {
    pub(crate) fn handle_output_request(
        &mut self,
        rid: ResourceId,
        version: u32,
        request: OutputRequest,
    ) -> Result<(), ProtocolError> {
        match request {
            OutputRequest::Destroy => {
                self.destroy_resource(rid);
                Ok(())
            }
            // Allowed on inert handles as well
            OutputRequest::GetImageDescription { id } => {
                self.create_image_description(rid.client, id, version)
            }
        }
    }

    /// Client released a live output extension
    pub(crate) fn release_output(&mut self, rid: ResourceId, extension: OutputExtension) {
        self.host.unsubscribe(&extension.subscription);
        self.manager.unlink_output(rid);
        debug!(?rid, output = ?extension.output, "output extension released");
    }

    /// Host output destroy listener
    pub(crate) fn output_destroyed(&mut self, rid: ResourceId) {
        let extension = self
            .clients
            .get_mut(&rid.client)
            .and_then(|client| client.resource_mut(rid.object))
            .and_then(|resource| match &mut resource.data {
                ResourceData::Output(extension) => extension.take(),
                _ => None,
            });

        if let Some(extension) = extension {
            self.manager.unlink_output(rid);
            debug!(?rid, output = ?extension.output, "output extension made inert");
        }
    }
}
