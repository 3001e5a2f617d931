//! Public protocol-level color types
//!
//! These enumerations mirror the named values a color-management protocol
//! exchanges with clients. Each carries its wire value, so request arguments
//! can be validated without exposing raw integers past the dispatch layer.

use enumflags2::{BitFlags, bitflags};
use serde::{Deserialize, Serialize};

/// Rendering intent for mapping a source color volume into a destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderIntent {
    /// Perceptual - compress gamut to fit, preserve relationships
    #[default]
    Perceptual,
    /// Media-relative colorimetric
    Relative,
    /// Saturation - preserve saturation over accuracy
    Saturation,
    /// ICC-absolute colorimetric
    Absolute,
    /// Media-relative colorimetric with black point compensation
    RelativeBpc,
}

impl RenderIntent {
    /// All render intents, in wire order
    pub const ALL: [Self; 5] = [
        Self::Perceptual,
        Self::Relative,
        Self::Saturation,
        Self::Absolute,
        Self::RelativeBpc,
    ];

    /// Wire value of this intent
    pub const fn wire(self) -> u32 {
        match self {
            Self::Perceptual => 0,
            Self::Relative => 1,
            Self::Saturation => 2,
            Self::Absolute => 3,
            Self::RelativeBpc => 4,
        }
    }

    /// Look up an intent by wire value
    pub fn from_wire(value: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|intent| intent.wire() == value)
    }
}

/// Optional protocol features a manager may advertise
#[bitflags]
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    /// ICC v2/v4 image description creator
    IccV2V4 = 1 << 0,
    /// Parametric image description creator
    Parametric = 1 << 1,
    /// Arbitrary primaries in parametric descriptions
    SetPrimaries = 1 << 2,
    /// Power-law transfer functions in parametric descriptions
    SetTfPower = 1 << 3,
    /// Explicit luminances in parametric descriptions
    SetLuminances = 1 << 4,
    /// Mastering display primaries in parametric descriptions
    SetMasteringDisplayPrimaries = 1 << 5,
    /// Target volume exceeding the primary color volume
    ExtendedTargetVolume = 1 << 6,
    /// Windows scRGB image description
    WindowsScrgb = 1 << 7,
}

/// Set of advertised features
pub type FeatureSet = BitFlags<Feature>;

impl Feature {
    /// Wire value of this feature (its bit index)
    pub fn wire(self) -> u32 {
        (self as u32).trailing_zeros()
    }

    /// Look up a feature by wire value
    pub fn from_wire(value: u32) -> Option<Self> {
        let bit = 1u32.checked_shl(value)?;
        BitFlags::<Feature>::from_bits(bit).ok()?.exactly_one()
    }
}

/// Well-known sets of color primaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamedPrimaries {
    /// ITU-R BT.709 / IEC 61966-2-1 (sRGB)
    Srgb,
    /// ITU-R BT.470 System M
    PalM,
    /// ITU-R BT.601 625-line (PAL/SECAM)
    Pal,
    /// SMPTE 170M / BT.601 525-line (NTSC)
    Ntsc,
    /// Generic film, illuminant C
    GenericFilm,
    /// ITU-R BT.2020 / BT.2100
    Bt2020,
    /// CIE 1931 XYZ as RGB
    Cie1931Xyz,
    /// SMPTE RP 431-2 (DCI-P3, theatrical white)
    DciP3,
    /// SMPTE EG 432-1 (Display P3, D65 white)
    DisplayP3,
    /// Adobe RGB (1998)
    AdobeRgb,
}

impl NamedPrimaries {
    /// All named primaries, in wire order
    pub const ALL: [Self; 10] = [
        Self::Srgb,
        Self::PalM,
        Self::Pal,
        Self::Ntsc,
        Self::GenericFilm,
        Self::Bt2020,
        Self::Cie1931Xyz,
        Self::DciP3,
        Self::DisplayP3,
        Self::AdobeRgb,
    ];

    /// Wire value of this primaries set
    pub const fn wire(self) -> u32 {
        match self {
            Self::Srgb => 1,
            Self::PalM => 2,
            Self::Pal => 3,
            Self::Ntsc => 4,
            Self::GenericFilm => 5,
            Self::Bt2020 => 6,
            Self::Cie1931Xyz => 7,
            Self::DciP3 => 8,
            Self::DisplayP3 => 9,
            Self::AdobeRgb => 10,
        }
    }

    /// Look up a primaries set by wire value
    pub fn from_wire(value: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.wire() == value)
    }

    /// CIE 1931 chromaticities of this primaries set
    pub const fn chromaticities(self) -> ColorPrimaries {
        match self {
            Self::Srgb => ColorPrimaries::new((0.640, 0.330), (0.300, 0.600), (0.150, 0.060), WHITE_D65),
            Self::PalM => ColorPrimaries::new((0.670, 0.330), (0.210, 0.710), (0.140, 0.080), WHITE_C),
            Self::Pal => ColorPrimaries::new((0.640, 0.330), (0.290, 0.600), (0.150, 0.060), WHITE_D65),
            Self::Ntsc => ColorPrimaries::new((0.630, 0.340), (0.310, 0.595), (0.155, 0.070), WHITE_D65),
            Self::GenericFilm => {
                ColorPrimaries::new((0.681, 0.319), (0.243, 0.692), (0.145, 0.049), WHITE_C)
            }
            Self::Bt2020 => ColorPrimaries::new((0.708, 0.292), (0.170, 0.797), (0.131, 0.046), WHITE_D65),
            Self::Cie1931Xyz => ColorPrimaries::new((1.0, 0.0), (0.0, 1.0), (0.0, 0.0), WHITE_E),
            Self::DciP3 => ColorPrimaries::new((0.680, 0.320), (0.265, 0.690), (0.150, 0.060), WHITE_DCI),
            Self::DisplayP3 => {
                ColorPrimaries::new((0.680, 0.320), (0.265, 0.690), (0.150, 0.060), WHITE_D65)
            }
            Self::AdobeRgb => ColorPrimaries::new((0.640, 0.330), (0.210, 0.710), (0.150, 0.060), WHITE_D65),
        }
    }
}

const WHITE_D65: (f64, f64) = (0.3127, 0.3290);
const WHITE_C: (f64, f64) = (0.310, 0.316);
const WHITE_E: (f64, f64) = (1.0 / 3.0, 1.0 / 3.0);
const WHITE_DCI: (f64, f64) = (0.314, 0.351);

/// Named transfer functions (electro-optical transfer characteristics)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferFunction {
    /// ITU-R BT.1886 EOTF
    Bt1886,
    /// Pure power 2.2
    Gamma22,
    /// Pure power 2.8
    Gamma28,
    /// SMPTE ST 240
    St240,
    /// Linear, extended range
    ExtLinear,
    /// Logarithmic, 100:1 range
    #[serde(rename = "log_100")]
    Log100,
    /// Logarithmic, 100*sqrt(10):1 range
    #[serde(rename = "log_316")]
    Log316,
    /// IEC 61966-2-4 (xvYCC)
    Xvycc,
    /// IEC 61966-2-1 (sRGB)
    Srgb,
    /// sRGB, extended range
    ExtSrgb,
    /// SMPTE ST 2084 perceptual quantizer
    St2084Pq,
    /// SMPTE ST 428-1
    St428,
    /// ARIB STD-B67 hybrid log-gamma
    Hlg,
}

impl TransferFunction {
    /// All named transfer functions, in wire order
    pub const ALL: [Self; 13] = [
        Self::Bt1886,
        Self::Gamma22,
        Self::Gamma28,
        Self::St240,
        Self::ExtLinear,
        Self::Log100,
        Self::Log316,
        Self::Xvycc,
        Self::Srgb,
        Self::ExtSrgb,
        Self::St2084Pq,
        Self::St428,
        Self::Hlg,
    ];

    /// Wire value of this transfer function
    pub const fn wire(self) -> u32 {
        match self {
            Self::Bt1886 => 1,
            Self::Gamma22 => 2,
            Self::Gamma28 => 3,
            Self::St240 => 4,
            Self::ExtLinear => 5,
            Self::Log100 => 6,
            Self::Log316 => 7,
            Self::Xvycc => 8,
            Self::Srgb => 9,
            Self::ExtSrgb => 10,
            Self::St2084Pq => 11,
            Self::St428 => 12,
            Self::Hlg => 13,
        }
    }

    /// Look up a transfer function by wire value
    pub fn from_wire(value: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|tf| tf.wire() == value)
    }

    /// Default luminances implied by this transfer function
    pub const fn default_luminances(self) -> Luminances {
        match self {
            Self::St2084Pq => Luminances::new(0.005, 10000.0, 203.0),
            Self::Hlg => Luminances::new(0.005, 1000.0, 203.0),
            Self::Bt1886 => Luminances::new(0.01, 100.0, 100.0),
            _ => Luminances::new(0.2, 80.0, 80.0),
        }
    }
}

/// CIE 1931 xy chromaticity coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Cie1931Xy {
    pub x: f64,
    pub y: f64,
}

impl Cie1931Xy {
    /// Create a chromaticity coordinate pair
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Color primaries and white point describing a color volume
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorPrimaries {
    pub red: Cie1931Xy,
    pub green: Cie1931Xy,
    pub blue: Cie1931Xy,
    pub white: Cie1931Xy,
}

impl ColorPrimaries {
    const fn new(
        red: (f64, f64),
        green: (f64, f64),
        blue: (f64, f64),
        white: (f64, f64),
    ) -> Self {
        Self {
            red: Cie1931Xy::new(red.0, red.1),
            green: Cie1931Xy::new(green.0, green.1),
            blue: Cie1931Xy::new(blue.0, blue.1),
            white: Cie1931Xy::new(white.0, white.1),
        }
    }
}

/// Luminance range in cd/m²
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Luminances {
    /// Minimum luminance
    pub min: f64,
    /// Maximum luminance
    pub max: f64,
    /// Reference white luminance
    pub reference: f64,
}

impl Luminances {
    /// Create a luminance range
    pub const fn new(min: f64, max: f64, reference: f64) -> Self {
        Self { min, max, reference }
    }
}
