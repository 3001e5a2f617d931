//! ICC profile handling
//!
//! Wraps `moxcms::ColorProfile` and enforces what an output profile must be:
//! an RGB data color space and a display device class.

use crate::{Error, NamedPrimaries, Result};

/// A validated output ICC profile
#[derive(Debug, Clone)]
pub struct IccProfile {
    inner: moxcms::ColorProfile,
}

impl IccProfile {
    /// Parse and validate raw ICC data
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.is_empty() {
            return Err(Error::ProfileParse("empty ICC payload".into()));
        }
        let inner = moxcms::ColorProfile::new_from_slice(data)
            .map_err(|e| Error::ProfileParse(format!("{:?}", e)))?;

        if inner.color_space != moxcms::DataColorSpace::Rgb {
            return Err(Error::UnsupportedProfile(format!(
                "data color space {:?} is not RGB",
                inner.color_space
            )));
        }
        if inner.profile_class != moxcms::ProfileClass::DisplayDevice {
            return Err(Error::UnsupportedProfile(format!(
                "profile class {:?} is not a display device",
                inner.profile_class
            )));
        }

        Ok(Self { inner })
    }

    /// Access the inner moxcms profile
    pub fn inner(&self) -> &moxcms::ColorProfile {
        &self.inner
    }
}

/// Linear-light RGB profile for a set of named primaries
///
/// Only primaries that moxcms ships a profile for can act as a transform
/// source. The TRCs are replaced by identity curves.
pub fn linear_source_profile(primaries: NamedPrimaries) -> Result<moxcms::ColorProfile> {
    let mut profile = match primaries {
        NamedPrimaries::Srgb => moxcms::ColorProfile::new_srgb(),
        NamedPrimaries::Bt2020 => moxcms::ColorProfile::new_bt2020(),
        NamedPrimaries::DisplayP3 => moxcms::ColorProfile::new_display_p3(),
        NamedPrimaries::DciP3 => moxcms::ColorProfile::new_dci_p3(),
        NamedPrimaries::AdobeRgb => moxcms::ColorProfile::new_adobe_rgb(),
        other => return Err(Error::UnsupportedPrimaries(other)),
    };

    // moxcms evaluates a CICP tag in place of the TRCs
    profile.cicp = None;
    let linear = moxcms::curve_from_gamma(1.0);
    profile.red_trc = Some(linear.clone());
    profile.green_trc = Some(linear.clone());
    profile.blue_trc = Some(linear);

    Ok(profile)
}
