//! Host compositor entities
//!
//! Outputs and surfaces belong to the host. Color-management extensions only
//! observe them: through a destroy signal (outputs, surfaces) or through a
//! keyed attachment slot (surfaces). The host emits a destroy signal, and
//! finishes attachments, before it forgets the entity.

use std::collections::BTreeMap;

use tracing::debug;

use crate::client::ResourceId;

/// Host output identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OutputId(u32);

/// Host surface identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SurfaceId(u32);

/// Any host entity with a destroy signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entity {
    Output(OutputId),
    Surface(SurfaceId),
}

/// Attachment slot on a surface, one per extension type
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AddonKind {
    ColorSurface,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct ListenerToken(u64);

/// Registration on a destroy signal
///
/// Cancelled with [`Host::unsubscribe`]. Cancelling after the entity is
/// gone, or twice, does nothing.
#[derive(Debug, PartialEq, Eq)]
pub struct Subscription {
    source: Entity,
    token: ListenerToken,
}

impl Subscription {
    /// Entity this subscription observes
    pub fn source(&self) -> Entity {
        self.source
    }
}

/// Ordered listener list of one entity
#[derive(Debug, Default)]
struct DestroySignal {
    listeners: Vec<(ListenerToken, ResourceId)>,
}

#[derive(Debug)]
struct HostOutput {
    name: String,
    destroy: DestroySignal,
}

#[derive(Debug, Default)]
struct HostSurface {
    destroy: DestroySignal,
    addons: BTreeMap<AddonKind, ResourceId>,
}

/// Attachment slot already occupied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddonOccupied(pub ResourceId);

/// Outputs and surfaces of the host compositor
#[derive(Debug, Default)]
pub struct Host {
    outputs: BTreeMap<OutputId, HostOutput>,
    surfaces: BTreeMap<SurfaceId, HostSurface>,
    next_id: u32,
    next_token: u64,
}

impl Host {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an output
    pub fn create_output(&mut self, name: impl Into<String>) -> OutputId {
        self.next_id += 1;
        let id = OutputId(self.next_id);
        let name = name.into();
        debug!(?id, %name, "host output created");
        self.outputs.insert(
            id,
            HostOutput {
                name,
                destroy: DestroySignal::default(),
            },
        );
        id
    }

    /// Add a surface
    pub fn create_surface(&mut self) -> SurfaceId {
        self.next_id += 1;
        let id = SurfaceId(self.next_id);
        debug!(?id, "host surface created");
        self.surfaces.insert(id, HostSurface::default());
        id
    }

    pub fn has_output(&self, output: OutputId) -> bool {
        self.outputs.contains_key(&output)
    }

    pub fn has_surface(&self, surface: SurfaceId) -> bool {
        self.surfaces.contains_key(&surface)
    }

    /// Output name, if the output exists
    pub fn output_name(&self, output: OutputId) -> Option<&str> {
        self.outputs.get(&output).map(|o| o.name.as_str())
    }

    pub fn outputs(&self) -> impl Iterator<Item = OutputId> + '_ {
        self.outputs.keys().copied()
    }

    pub fn surfaces(&self) -> impl Iterator<Item = SurfaceId> + '_ {
        self.surfaces.keys().copied()
    }

    fn signal_mut(&mut self, entity: Entity) -> Option<&mut DestroySignal> {
        match entity {
            Entity::Output(id) => self.outputs.get_mut(&id).map(|o| &mut o.destroy),
            Entity::Surface(id) => self.surfaces.get_mut(&id).map(|s| &mut s.destroy),
        }
    }

    /// Register `listener` on the destroy signal of `entity`
    ///
    /// Returns None if the entity does not exist.
    pub fn subscribe(&mut self, entity: Entity, listener: ResourceId) -> Option<Subscription> {
        let token = ListenerToken(self.next_token + 1);
        let signal = self.signal_mut(entity)?;
        signal.listeners.push((token, listener));
        self.next_token += 1;
        Some(Subscription {
            source: entity,
            token,
        })
    }

    /// Cancel a subscription
    pub fn unsubscribe(&mut self, subscription: &Subscription) {
        if let Some(signal) = self.signal_mut(subscription.source) {
            signal.listeners.retain(|(token, _)| *token != subscription.token);
        }
    }

    /// Number of live listeners on `entity`
    pub fn listener_count(&self, entity: Entity) -> usize {
        match entity {
            Entity::Output(id) => self.outputs.get(&id).map_or(0, |o| o.destroy.listeners.len()),
            Entity::Surface(id) => self.surfaces.get(&id).map_or(0, |s| s.destroy.listeners.len()),
        }
    }

    /// Drain the destroy signal of `entity`, in subscription order
    ///
    /// The entity stays alive; the caller notifies every listener and then
    /// removes it.
    pub fn emit_destroy(&mut self, entity: Entity) -> Vec<ResourceId> {
        self.signal_mut(entity)
            .map(|signal| std::mem::take(&mut signal.listeners))
            .unwrap_or_default()
            .into_iter()
            .map(|(_, listener)| listener)
            .collect()
    }

    /// Resource attached to `surface` under `kind`
    pub fn addon_find(&self, surface: SurfaceId, kind: AddonKind) -> Option<ResourceId> {
        self.surfaces.get(&surface)?.addons.get(&kind).copied()
    }

    /// Attach `resource` to `surface` under `kind`
    ///
    /// Returns false if the surface does not exist.
    pub fn addon_init(
        &mut self,
        surface: SurfaceId,
        kind: AddonKind,
        resource: ResourceId,
    ) -> std::result::Result<bool, AddonOccupied> {
        let Some(host_surface) = self.surfaces.get_mut(&surface) else {
            return Ok(false);
        };
        if let Some(&existing) = host_surface.addons.get(&kind) {
            return Err(AddonOccupied(existing));
        }
        host_surface.addons.insert(kind, resource);
        Ok(true)
    }

    /// Detach whatever is attached to `surface` under `kind`
    pub fn addon_finish(&mut self, surface: SurfaceId, kind: AddonKind) {
        if let Some(host_surface) = self.surfaces.get_mut(&surface) {
            host_surface.addons.remove(&kind);
        }
    }

    /// Detach every attachment of `surface`
    pub fn take_addons(&mut self, surface: SurfaceId) -> Vec<(AddonKind, ResourceId)> {
        self.surfaces
            .get_mut(&surface)
            .map(|s| std::mem::take(&mut s.addons).into_iter().collect())
            .unwrap_or_default()
    }

    /// Forget an output; its signal must already have been emitted
    pub(crate) fn remove_output(&mut self, output: OutputId) -> bool {
        let removed = self.outputs.remove(&output).is_some();
        if removed {
            debug!(?output, "host output removed");
        }
        removed
    }

    /// Forget a surface; its signal and attachments must already be handled
    pub(crate) fn remove_surface(&mut self, surface: SurfaceId) -> bool {
        let removed = self.surfaces.remove(&surface).is_some();
        if removed {
            debug!(?surface, "host surface removed");
        }
        removed
    }
}
