//! wp_color_manager_v1: the capability manager global
//!
//! The manager advertises its capabilities once per binding and hands out
//! per-output, per-surface and feedback extensions.

use std::collections::BTreeSet;

use tracing::{debug, info};
use wpcm_core::{FeatureSet, NamedPrimaries, RenderIntent, TransferFunction};

use crate::client::{Client, ClientId, ObjectId, ResourceData, ResourceId};
use crate::config::ManagerOptions;
use crate::display::Display;
use crate::error::{ProtocolError, Result};
use crate::feedback::SurfaceFeedback;
use crate::host::{AddonKind, AddonOccupied, Entity, OutputId, SurfaceId};
use crate::output::OutputExtension;
use crate::protocol::{Event, ManagerRequest};
use crate::surface::SurfaceExtension;

/// Highest wp_color_manager_v1 version implemented
pub const COLOR_MANAGER_VERSION: u32 = 1;

/// Capability manager state shared by all bindings
#[derive(Debug)]
pub struct ColorManager {
    version: u32,
    features: FeatureSet,
    render_intents: Vec<RenderIntent>,
    transfer_functions: Vec<TransferFunction>,
    primaries: Vec<NamedPrimaries>,
    outputs: BTreeSet<ResourceId>,
}

impl ColorManager {
    /// Create a manager from validated options
    pub fn new(options: &ManagerOptions) -> Result<Self> {
        options.validate()?;

        let manager = Self {
            version: options.version,
            features: options.features.iter().copied().collect(),
            render_intents: options.render_intents.clone(),
            transfer_functions: options.transfer_functions.clone(),
            primaries: options.primaries.clone(),
            outputs: BTreeSet::new(),
        };
        info!(
            version = manager.version,
            intents = ?manager.render_intents,
            transfer_functions = ?manager.transfer_functions,
            primaries = ?manager.primaries,
            "color manager created"
        );
        Ok(manager)
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn features(&self) -> FeatureSet {
        self.features
    }

    pub fn render_intents(&self) -> &[RenderIntent] {
        &self.render_intents
    }

    pub fn supports_intent(&self, intent: RenderIntent) -> bool {
        self.render_intents.contains(&intent)
    }

    pub fn transfer_functions(&self) -> &[TransferFunction] {
        &self.transfer_functions
    }

    pub fn primaries(&self) -> &[NamedPrimaries] {
        &self.primaries
    }

    /// Live output extensions, across all clients
    pub fn outputs(&self) -> impl Iterator<Item = ResourceId> + '_ {
        self.outputs.iter().copied()
    }

    pub(crate) fn link_output(&mut self, output: ResourceId) {
        self.outputs.insert(output);
    }

    pub(crate) fn unlink_output(&mut self, output: ResourceId) -> bool {
        self.outputs.remove(&output)
    }

    /// Send the capability burst for a new binding
    pub(crate) fn advertise(&self, client: &mut Client, object: ObjectId) {
        for feature in self.features.iter() {
            client.send(object, Event::SupportedFeature(feature));
        }
        for &intent in &self.render_intents {
            client.send(object, Event::SupportedIntent(intent));
        }
        for &tf in &self.transfer_functions {
            client.send(object, Event::SupportedTfNamed(tf));
        }
        for &primaries in &self.primaries {
            client.send(object, Event::SupportedPrimariesNamed(primaries));
        }
        client.send(object, Event::Done);
    }

    /// Tear down the global
    pub(crate) fn destroy(self) {
        info!(linked_outputs = self.outputs.len(), "color manager destroyed");
    }
}

impl Display {
    /// Bind the manager global as `id` at `version`
    pub fn bind_color_manager(
        &mut self,
        client: ClientId,
        id: ObjectId,
        version: u32,
    ) -> std::result::Result<(), ProtocolError> {
        let result = self.bind(client, id, version);
        self.report(client, id, result)
    }

    fn bind(
        &mut self,
        client: ClientId,
        id: ObjectId,
        version: u32,
    ) -> std::result::Result<(), ProtocolError> {
        let max = self.manager.version();
        if version == 0 || version > max {
            return Err(ProtocolError::InvalidVersion {
                requested: version,
                max,
            });
        }

        let client = self
            .clients
            .get_mut(&client)
            .ok_or(ProtocolError::InvalidObject(id))?;
        client.create_resource(id, version, ResourceData::Manager)?;
        self.manager.advertise(client, id);
        Ok(())
    }

    pub(crate) fn handle_manager_request(
        &mut self,
        manager: ResourceId,
        version: u32,
        request: ManagerRequest,
    ) -> std::result::Result<(), ProtocolError> {
        match request {
            ManagerRequest::Destroy => {
                self.destroy_resource(manager);
                Ok(())
            }
            ManagerRequest::GetOutput { id, output } => {
                self.get_output(manager.client, id, version, output)
            }
            ManagerRequest::GetSurface { id, surface } => {
                self.get_surface(manager.client, id, version, surface)
            }
            ManagerRequest::GetSurfaceFeedback { id, surface } => {
                self.get_surface_feedback(manager.client, id, version, surface)
            }
            ManagerRequest::CreateIccCreator { .. } => Err(ProtocolError::UnsupportedFeature {
                request: "create_icc_creator",
            }),
            ManagerRequest::CreateParametricCreator { .. } => {
                Err(ProtocolError::UnsupportedFeature {
                    request: "create_parametric_creator",
                })
            }
            ManagerRequest::CreateWindowsScrgb { .. } => Err(ProtocolError::UnsupportedFeature {
                request: "create_windows_scrgb",
            }),
        }
    }

    fn get_output(
        &mut self,
        client: ClientId,
        id: ObjectId,
        version: u32,
        output: OutputId,
    ) -> std::result::Result<(), ProtocolError> {
        if !self.host.has_output(output) {
            return Err(ProtocolError::UnknownOutput(output));
        }
        let client = self
            .clients
            .get_mut(&client)
            .ok_or(ProtocolError::InvalidObject(id))?;

        let rid = client.create_resource(id, version, ResourceData::Output(None))?;
        let Some(subscription) = self.host.subscribe(Entity::Output(output), rid) else {
            client.remove_resource(id);
            return Err(ProtocolError::UnknownOutput(output));
        };
        if let Some(resource) = client.resource_mut(id) {
            resource.data = ResourceData::Output(Some(OutputExtension::new(output, subscription)));
        }
        self.manager.link_output(rid);

        debug!(?rid, ?output, "output extension created");
        Ok(())
    }

    fn get_surface(
        &mut self,
        client: ClientId,
        id: ObjectId,
        version: u32,
        surface: SurfaceId,
    ) -> std::result::Result<(), ProtocolError> {
        if !self.host.has_surface(surface) {
            return Err(ProtocolError::UnknownSurface(surface));
        }
        if self.host.addon_find(surface, AddonKind::ColorSurface).is_some() {
            return Err(ProtocolError::SurfaceExists);
        }
        let client = self
            .clients
            .get_mut(&client)
            .ok_or(ProtocolError::InvalidObject(id))?;

        let extension = SurfaceExtension::new(surface);
        let rid = client.create_resource(id, version, ResourceData::Surface(Some(extension)))?;
        match self.host.addon_init(surface, AddonKind::ColorSurface, rid) {
            Ok(true) => {}
            Ok(false) => {
                client.remove_resource(id);
                return Err(ProtocolError::UnknownSurface(surface));
            }
            Err(AddonOccupied(_)) => {
                client.remove_resource(id);
                return Err(ProtocolError::SurfaceExists);
            }
        }

        debug!(?rid, ?surface, "surface extension created");
        Ok(())
    }

    fn get_surface_feedback(
        &mut self,
        client: ClientId,
        id: ObjectId,
        version: u32,
        surface: SurfaceId,
    ) -> std::result::Result<(), ProtocolError> {
        if !self.host.has_surface(surface) {
            return Err(ProtocolError::UnknownSurface(surface));
        }
        let client = self
            .clients
            .get_mut(&client)
            .ok_or(ProtocolError::InvalidObject(id))?;

        let rid = client.create_resource(id, version, ResourceData::Feedback(None))?;
        let Some(subscription) = self.host.subscribe(Entity::Surface(surface), rid) else {
            client.remove_resource(id);
            return Err(ProtocolError::UnknownSurface(surface));
        };
        if let Some(resource) = client.resource_mut(id) {
            resource.data = ResourceData::Feedback(Some(SurfaceFeedback::new(surface, subscription)));
        }

        debug!(?rid, ?surface, "surface feedback created");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_new_rejects_missing_perceptual() {
        let options = ManagerOptions {
            render_intents: vec![RenderIntent::Relative],
            ..ManagerOptions::default()
        };
        assert!(matches!(
            ColorManager::new(&options),
            Err(Error::MissingPerceptualIntent)
        ));
    }

    #[test]
    fn test_advertise_order() {
        let options = ManagerOptions {
            render_intents: vec![RenderIntent::Perceptual, RenderIntent::Absolute],
            transfer_functions: vec![TransferFunction::Hlg],
            primaries: vec![NamedPrimaries::DisplayP3, NamedPrimaries::Srgb],
            ..ManagerOptions::default()
        };
        let manager = ColorManager::new(&options).unwrap();
        let mut client = Client::new(ClientId::from_raw(1));

        manager.advertise(&mut client, ObjectId(2));

        let events: Vec<_> = client.events().iter().map(|m| m.event.clone()).collect();
        assert_eq!(
            events,
            [
                Event::SupportedIntent(RenderIntent::Perceptual),
                Event::SupportedIntent(RenderIntent::Absolute),
                Event::SupportedTfNamed(TransferFunction::Hlg),
                Event::SupportedPrimariesNamed(NamedPrimaries::DisplayP3),
                Event::SupportedPrimariesNamed(NamedPrimaries::Srgb),
                Event::Done,
            ]
        );
        assert!(client.events().iter().all(|m| m.object == ObjectId(2)));
    }

    #[test]
    fn test_output_links() {
        let mut manager = ColorManager::new(&ManagerOptions::default()).unwrap();
        let rid = ResourceId::new(ClientId::from_raw(1), ObjectId(4));

        manager.link_output(rid);
        assert_eq!(manager.outputs().collect::<Vec<_>>(), [rid]);
        assert!(manager.unlink_output(rid));
        assert!(!manager.unlink_output(rid));
    }
}
