//! wp_image_description_v1 and wp_image_description_info_v1
//!
//! Descriptions are resolved synchronously: each one is created ready, with
//! identity 0 and the default sRGB attributes.

use tracing::debug;
use wpcm_core::{ColorPrimaries, Luminances, NamedPrimaries, TransferFunction};

use crate::client::{ClientId, ObjectId, ResourceData, ResourceId};
use crate::display::Display;
use crate::error::ProtocolError;
use crate::protocol::{Event, ImageDescriptionRequest};

/// Attributes reported by get_information
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DescriptionInfo {
    pub primaries_named: NamedPrimaries,
    pub primaries: ColorPrimaries,
    pub transfer_function: TransferFunction,
    pub luminances: Luminances,
}

impl Default for DescriptionInfo {
    fn default() -> Self {
        let transfer_function = TransferFunction::Srgb;
        Self {
            primaries_named: NamedPrimaries::Srgb,
            primaries: NamedPrimaries::Srgb.chromaticities(),
            transfer_function,
            luminances: transfer_function.default_luminances(),
        }
    }
}

/// Chromaticity coordinate as sent on the wire
fn encode_coordinate(value: f64) -> i32 {
    (value * 1_000_000.0).round() as i32
}

impl DescriptionInfo {
    /// Attribute events, in emission order, ending with done
    pub fn events(&self) -> [Event; 5] {
        let p = &self.primaries;
        let lum = &self.luminances;
        [
            Event::PrimariesNamed(self.primaries_named),
            Event::Primaries {
                r_x: encode_coordinate(p.red.x),
                r_y: encode_coordinate(p.red.y),
                g_x: encode_coordinate(p.green.x),
                g_y: encode_coordinate(p.green.y),
                b_x: encode_coordinate(p.blue.x),
                b_y: encode_coordinate(p.blue.y),
                w_x: encode_coordinate(p.white.x),
                w_y: encode_coordinate(p.white.y),
            },
            Event::TfNamed(self.transfer_function),
            Event::Luminances {
                min: (lum.min * 10_000.0).round() as u32,
                max: lum.max.round() as u32,
                reference: lum.reference.round() as u32,
            },
            Event::InfoDone,
        ]
    }
}

/// A resolved image description
#[derive(Debug, Clone, PartialEq)]
pub struct ImageDescription {
    identity: u32,
    info: DescriptionInfo,
}

impl ImageDescription {
    /// Default description, already ready
    pub fn ready_default() -> Self {
        Self {
            identity: 0,
            info: DescriptionInfo::default(),
        }
    }

    /// Content identity; 0 means none assigned yet
    pub fn identity(&self) -> u32 {
        self.identity
    }

    pub fn info(&self) -> &DescriptionInfo {
        &self.info
    }
}

impl Display {
    /// Create description `id` for `client` and announce it ready
    pub(crate) fn create_image_description(
        &mut self,
        client: ClientId,
        id: ObjectId,
        version: u32,
    ) -> Result<(), ProtocolError> {
        let client = self
            .clients
            .get_mut(&client)
            .ok_or(ProtocolError::InvalidObject(id))?;

        let description = ImageDescription::ready_default();
        let identity = description.identity();
        client.create_resource(id, version, ResourceData::ImageDescription(description))?;
        client.send(id, Event::Ready { identity });
        Ok(())
    }

    pub(crate) fn handle_image_description_request(
        &mut self,
        rid: ResourceId,
        version: u32,
        request: ImageDescriptionRequest,
    ) -> Result<(), ProtocolError> {
        match request {
            ImageDescriptionRequest::Destroy => {
                self.destroy_resource(rid);
                Ok(())
            }
            ImageDescriptionRequest::GetInformation { id } => {
                self.get_information(rid, id, version)
            }
        }
    }

    fn get_information(
        &mut self,
        rid: ResourceId,
        id: ObjectId,
        version: u32,
    ) -> Result<(), ProtocolError> {
        let client = self
            .clients
            .get_mut(&rid.client)
            .ok_or(ProtocolError::InvalidObject(rid.object))?;
        let info = match client.resource(rid.object).map(|resource| &resource.data) {
            Some(ResourceData::ImageDescription(description)) => *description.info(),
            _ => return Err(ProtocolError::InvalidObject(rid.object)),
        };

        client.create_resource(id, version, ResourceData::ImageDescriptionInfo)?;
        for event in info.events() {
            client.send(id, event);
        }
        // The info object is single-use
        client.remove_resource(id);

        debug!(?rid, info = %id, "image description information sent");
        Ok(())
    }
}
