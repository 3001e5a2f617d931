//! wp_color_management_surface_feedback_v1

use tracing::debug;

use crate::client::{ResourceData, ResourceId};
use crate::display::Display;
use crate::error::ProtocolError;
use crate::host::{Subscription, SurfaceId};
use crate::protocol::FeedbackRequest;

/// Live state of a surface feedback channel
#[derive(Debug)]
pub struct SurfaceFeedback {
    surface: SurfaceId,
    subscription: Subscription,
}

impl SurfaceFeedback {
    pub(crate) fn new(surface: SurfaceId, subscription: Subscription) -> Self {
        Self {
            surface,
            subscription,
        }
    }

    pub fn surface(&self) -> SurfaceId {
        self.surface
    }
}

impl Display {
    pub(crate) fn handle_feedback_request(
        &mut self,
        rid: ResourceId,
        version: u32,
        request: FeedbackRequest,
    ) -> Result<(), ProtocolError> {
        match request {
            FeedbackRequest::Destroy => {
                self.destroy_resource(rid);
                Ok(())
            }
            // Resolves the default description, inert or not
            FeedbackRequest::GetPreferred { id } => {
                self.create_image_description(rid.client, id, version)
            }
        }
    }

    pub(crate) fn release_feedback(&mut self, rid: ResourceId, feedback: SurfaceFeedback) {
        self.host.unsubscribe(&feedback.subscription);
        debug!(?rid, surface = ?feedback.surface, "surface feedback released");
    }

    /// Host surface destroy listener
    pub(crate) fn feedback_surface_destroyed(&mut self, rid: ResourceId) {
        let feedback = self
            .clients
            .get_mut(&rid.client)
            .and_then(|client| client.resource_mut(rid.object))
            .and_then(|resource| match &mut resource.data {
                ResourceData::Feedback(feedback) => feedback.take(),
                _ => None,
            });

        if let Some(feedback) = feedback {
            debug!(?rid, surface = ?feedback.surface, "surface feedback made inert");
        }
    }
}
