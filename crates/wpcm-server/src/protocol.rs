//! Requests and events of the color-management interfaces
//!
//! Requests arrive already decoded; enum arguments that a client can get
//! wrong (render intents) stay raw so the handler can reject them.

use wpcm_core::{Feature, NamedPrimaries, RenderIntent, TransferFunction};

use crate::client::ObjectId;
use crate::host::{OutputId, SurfaceId};

/// Events sent to clients
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    // wp_color_manager_v1
    SupportedIntent(RenderIntent),
    SupportedFeature(Feature),
    SupportedTfNamed(TransferFunction),
    SupportedPrimariesNamed(NamedPrimaries),
    Done,

    // wp_image_description_v1
    Ready {
        identity: u32,
    },

    // wp_image_description_info_v1
    PrimariesNamed(NamedPrimaries),
    /// Chromaticities scaled by 1,000,000
    Primaries {
        r_x: i32,
        r_y: i32,
        g_x: i32,
        g_y: i32,
        b_x: i32,
        b_y: i32,
        w_x: i32,
        w_y: i32,
    },
    TfNamed(TransferFunction),
    /// `min` scaled by 10,000; `max` and `reference` in cd/m²
    Luminances {
        min: u32,
        max: u32,
        reference: u32,
    },
    InfoDone,
}

/// wp_color_manager_v1 requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManagerRequest {
    Destroy,
    GetOutput { id: ObjectId, output: OutputId },
    GetSurface { id: ObjectId, surface: SurfaceId },
    GetSurfaceFeedback { id: ObjectId, surface: SurfaceId },
    CreateIccCreator { id: ObjectId },
    CreateParametricCreator { id: ObjectId },
    CreateWindowsScrgb { id: ObjectId },
}

/// wp_color_management_output_v1 requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputRequest {
    Destroy,
    GetImageDescription { id: ObjectId },
}

/// wp_color_management_surface_v1 requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceRequest {
    Destroy,
    SetImageDescription {
        image_description: ObjectId,
        render_intent: u32,
    },
    UnsetImageDescription,
}

/// wp_color_management_surface_feedback_v1 requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackRequest {
    Destroy,
    GetPreferred { id: ObjectId },
}

/// wp_image_description_v1 requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageDescriptionRequest {
    Destroy,
    GetInformation { id: ObjectId },
}

/// Any request, tagged by the interface it belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    Manager(ManagerRequest),
    Output(OutputRequest),
    Surface(SurfaceRequest),
    Feedback(FeedbackRequest),
    ImageDescription(ImageDescriptionRequest),
}

impl From<ManagerRequest> for Request {
    fn from(request: ManagerRequest) -> Self {
        Self::Manager(request)
    }
}

impl From<OutputRequest> for Request {
    fn from(request: OutputRequest) -> Self {
        Self::Output(request)
    }
}

impl From<SurfaceRequest> for Request {
    fn from(request: SurfaceRequest) -> Self {
        Self::Surface(request)
    }
}

impl From<FeedbackRequest> for Request {
    fn from(request: FeedbackRequest) -> Self {
        Self::Feedback(request)
    }
}

impl From<ImageDescriptionRequest> for Request {
    fn from(request: ImageDescriptionRequest) -> Self {
        Self::ImageDescription(request)
    }
}
