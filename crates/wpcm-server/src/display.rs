//! Request dispatch and object lifetimes
//!
//! [`Display`] owns the host entities, the connected clients and the color
//! manager global. Every request goes through [`Display::dispatch`]; host
//! entity destruction goes through [`Display::destroy_output`] and
//! [`Display::destroy_surface`], which notify every observing extension
//! before the entity is forgotten.

use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use crate::client::{Client, ClientId, Interface, ObjectId, ResourceData, ResourceId};
use crate::config::ManagerOptions;
use crate::error::{ProtocolError, Result};
use crate::host::{AddonKind, Entity, Host, OutputId, SurfaceId};
use crate::manager::ColorManager;
use crate::protocol::Request;

/// Display server state
#[derive(Debug)]
pub struct Display {
    pub(crate) host: Host,
    pub(crate) clients: BTreeMap<ClientId, Client>,
    pub(crate) manager: ColorManager,
    next_client: u32,
}

impl Display {
    /// Create a display with a color manager global built from `options`
    pub fn new(options: &ManagerOptions) -> Result<Self> {
        Ok(Self {
            host: Host::new(),
            clients: BTreeMap::new(),
            manager: ColorManager::new(options)?,
            next_client: 0,
        })
    }

    pub fn host(&self) -> &Host {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut Host {
        &mut self.host
    }

    pub fn manager(&self) -> &ColorManager {
        &self.manager
    }

    /// Connect a new client
    pub fn create_client(&mut self) -> ClientId {
        self.next_client += 1;
        let id = ClientId::from_raw(self.next_client);
        self.clients.insert(id, Client::new(id));
        debug!(client = ?id, "client connected");
        id
    }

    pub fn client(&self, id: ClientId) -> Option<&Client> {
        self.clients.get(&id)
    }

    pub fn client_mut(&mut self, id: ClientId) -> Option<&mut Client> {
        self.clients.get_mut(&id)
    }

    /// Handle one request on `object`
    ///
    /// A failed request posts its protocol error to the client and returns
    /// it. Disconnecting the client afterwards is left to the caller.
    pub fn dispatch(
        &mut self,
        client: ClientId,
        object: ObjectId,
        request: impl Into<Request>,
    ) -> std::result::Result<(), ProtocolError> {
        let result = self.route(client, object, request.into());
        self.report(client, object, result)
    }

    fn route(
        &mut self,
        client: ClientId,
        object: ObjectId,
        request: Request,
    ) -> std::result::Result<(), ProtocolError> {
        let (interface, version) = self
            .clients
            .get(&client)
            .and_then(|c| c.resource(object))
            .map(|resource| (resource.interface(), resource.version))
            .ok_or(ProtocolError::InvalidObject(object))?;
        let rid = ResourceId::new(client, object);

        match (request, interface) {
            (Request::Manager(r), Interface::ColorManager) => {
                self.handle_manager_request(rid, version, r)
            }
            (Request::Output(r), Interface::ColorOutput) => {
                self.handle_output_request(rid, version, r)
            }
            (Request::Surface(r), Interface::ColorSurface) => self.handle_surface_request(rid, r),
            (Request::Feedback(r), Interface::ColorSurfaceFeedback) => {
                self.handle_feedback_request(rid, version, r)
            }
            (Request::ImageDescription(r), Interface::ImageDescription) => {
                self.handle_image_description_request(rid, version, r)
            }
            _ => Err(ProtocolError::InvalidMethod(interface)),
        }
    }

    /// Post `result`'s error, if any, to `client`
    pub(crate) fn report(
        &mut self,
        client: ClientId,
        object: ObjectId,
        result: std::result::Result<(), ProtocolError>,
    ) -> std::result::Result<(), ProtocolError> {
        if let Err(err) = &result {
            warn!(
                ?client,
                %object,
                interface = err.interface().name(),
                code = err.code(),
                "protocol error: {err}"
            );
            if let Some(c) = self.clients.get_mut(&client) {
                c.post_error(object, err.clone());
            }
        }
        result
    }

    /// Remove a client object and tear down what it owns
    pub(crate) fn destroy_resource(&mut self, rid: ResourceId) {
        let resource = self
            .clients
            .get_mut(&rid.client)
            .and_then(|client| client.remove_resource(rid.object));
        if let Some(resource) = resource {
            self.release(rid, resource.data);
        }
    }

    fn release(&mut self, rid: ResourceId, data: ResourceData) {
        match data {
            ResourceData::Output(Some(extension)) => self.release_output(rid, extension),
            ResourceData::Surface(Some(extension)) => self.release_surface(rid, extension),
            ResourceData::Feedback(Some(feedback)) => self.release_feedback(rid, feedback),
            _ => {}
        }
    }

    /// Destroy a host output
    ///
    /// Every output extension observing it becomes inert first.
    pub fn destroy_output(&mut self, output: OutputId) -> bool {
        if !self.host.has_output(output) {
            return false;
        }
        for listener in self.host.emit_destroy(Entity::Output(output)) {
            self.output_destroyed(listener);
        }
        self.host.remove_output(output)
    }

    /// Destroy a host surface
    ///
    /// Feedback channels become inert, then attached surface extensions.
    pub fn destroy_surface(&mut self, surface: SurfaceId) -> bool {
        if !self.host.has_surface(surface) {
            return false;
        }
        for listener in self.host.emit_destroy(Entity::Surface(surface)) {
            self.feedback_surface_destroyed(listener);
        }
        for (kind, rid) in self.host.take_addons(surface) {
            match kind {
                AddonKind::ColorSurface => self.surface_destroyed(rid),
            }
        }
        self.host.remove_surface(surface)
    }

    /// Drop a client and every object it owns
    pub fn disconnect_client(&mut self, client: ClientId) -> bool {
        let Some(mut c) = self.clients.remove(&client) else {
            return false;
        };
        for (object, resource) in c.take_resources() {
            self.release(ResourceId::new(client, object), resource.data);
        }
        debug!(?client, "client disconnected");
        true
    }

    /// Disconnect every client, destroy every host entity, then the manager
    pub fn shutdown(mut self) {
        let clients: Vec<_> = self.clients.keys().copied().collect();
        for client in clients {
            self.disconnect_client(client);
        }

        let outputs: Vec<_> = self.host.outputs().collect();
        for output in outputs {
            self.destroy_output(output);
        }
        let surfaces: Vec<_> = self.host.surfaces().collect();
        for surface in surfaces {
            self.destroy_surface(surface);
        }

        info!("display shut down");
        self.manager.destroy();
    }
}
