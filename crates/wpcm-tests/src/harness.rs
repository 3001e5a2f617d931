//! A display with one client, driven request by request

use anyhow::{Result, anyhow};
use wpcm_server::protocol::{
    FeedbackRequest, ImageDescriptionRequest, ManagerRequest, OutputRequest,
};
use wpcm_server::{
    Client, ClientId, Display, Event, ManagerOptions, Message, ObjectId, OutputId, ProtocolError,
    SurfaceId,
};

/// Object id the harness binds the manager to
pub const MANAGER: ObjectId = ObjectId(2);

/// Test display plus its first client
pub struct Harness {
    pub display: Display,
    pub client: ClientId,
    next_object: u32,
}

impl Harness {
    /// Display with default options and one connected client
    pub fn new() -> Result<Self> {
        Self::with_options(&ManagerOptions::default())
    }

    pub fn with_options(options: &ManagerOptions) -> Result<Self> {
        crate::init_tracing();
        let mut display = Display::new(options)?;
        let client = display.create_client();
        Ok(Self {
            display,
            client,
            next_object: MANAGER.0,
        })
    }

    /// Fresh object id for the harness client
    pub fn new_id(&mut self) -> ObjectId {
        self.next_object += 1;
        ObjectId(self.next_object)
    }

    pub fn client(&self) -> Result<&Client> {
        self.display
            .client(self.client)
            .ok_or_else(|| anyhow!("client {:?} is gone", self.client))
    }

    /// Bind the manager as [`MANAGER`] and drop the advertisement
    pub fn bind(&mut self) -> Result<ObjectId> {
        self.display.bind_color_manager(self.client, MANAGER, 1)?;
        self.take_events()?;
        Ok(MANAGER)
    }

    /// Drain the client's queued events
    pub fn take_events(&mut self) -> Result<Vec<Message>> {
        let client = self.client;
        self.display
            .client_mut(client)
            .map(Client::take_events)
            .ok_or_else(|| anyhow!("client {client:?} is gone"))
    }

    /// Drained events, without object ids
    pub fn take_event_kinds(&mut self) -> Result<Vec<Event>> {
        Ok(self.take_events()?.into_iter().map(|m| m.event).collect())
    }

    pub fn get_output(&mut self, output: OutputId) -> Result<ObjectId, ProtocolError> {
        let id = self.new_id();
        self.display
            .dispatch(self.client, MANAGER, ManagerRequest::GetOutput { id, output })?;
        Ok(id)
    }

    pub fn get_surface(&mut self, surface: SurfaceId) -> Result<ObjectId, ProtocolError> {
        let id = self.new_id();
        self.display
            .dispatch(self.client, MANAGER, ManagerRequest::GetSurface { id, surface })?;
        Ok(id)
    }

    pub fn get_feedback(&mut self, surface: SurfaceId) -> Result<ObjectId, ProtocolError> {
        let id = self.new_id();
        self.display.dispatch(
            self.client,
            MANAGER,
            ManagerRequest::GetSurfaceFeedback { id, surface },
        )?;
        Ok(id)
    }

    /// Image description from an output extension
    pub fn output_description(&mut self, output: ObjectId) -> Result<ObjectId, ProtocolError> {
        let id = self.new_id();
        self.display
            .dispatch(self.client, output, OutputRequest::GetImageDescription { id })?;
        Ok(id)
    }

    /// Preferred image description from a feedback channel
    pub fn preferred_description(
        &mut self,
        feedback: ObjectId,
    ) -> Result<ObjectId, ProtocolError> {
        let id = self.new_id();
        self.display
            .dispatch(self.client, feedback, FeedbackRequest::GetPreferred { id })?;
        Ok(id)
    }

    /// Query information on `description`; returns the info object id
    pub fn get_information(&mut self, description: ObjectId) -> Result<ObjectId, ProtocolError> {
        let id = self.new_id();
        self.display.dispatch(
            self.client,
            description,
            ImageDescriptionRequest::GetInformation { id },
        )?;
        Ok(id)
    }
}
