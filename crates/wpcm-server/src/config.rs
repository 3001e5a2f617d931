//! Color manager configuration
//!
//! Options are read once at startup, typically from a TOML table:
//!
//! ```toml
//! version = 1
//! render_intents = ["perceptual", "relative"]
//! transfer_functions = ["srgb", "st2084_pq"]
//! primaries = ["srgb", "bt2020"]
//! ```
//!
//! Every field is optional and falls back to [`ManagerOptions::default`].

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;
use wpcm_core::{Feature, NamedPrimaries, RenderIntent, TransferFunction};

use crate::error::{Error, Result};
use crate::manager::COLOR_MANAGER_VERSION;

/// Capabilities a color manager advertises
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ManagerOptions {
    /// Global version, 1..=`COLOR_MANAGER_VERSION`
    pub version: u32,
    /// Optional features; none are supported yet
    pub features: Vec<Feature>,
    /// Render intents, advertised in this order
    pub render_intents: Vec<RenderIntent>,
    /// Named transfer functions, advertised in this order
    pub transfer_functions: Vec<TransferFunction>,
    /// Named primaries, advertised in this order
    pub primaries: Vec<NamedPrimaries>,
}

impl Default for ManagerOptions {
    fn default() -> Self {
        Self {
            version: COLOR_MANAGER_VERSION,
            features: Vec::new(),
            render_intents: vec![RenderIntent::Perceptual],
            transfer_functions: vec![TransferFunction::Srgb, TransferFunction::St2084Pq],
            primaries: vec![NamedPrimaries::Srgb, NamedPrimaries::Bt2020],
        }
    }
}

impl ManagerOptions {
    /// Parse and validate options from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let options: Self = toml::from_str(text)?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from a TOML file
    ///
    /// Returns default options if the file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!("No color manager config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        info!("Loading color manager config from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Check construction preconditions
    pub fn validate(&self) -> Result<()> {
        if self.version == 0 || self.version > COLOR_MANAGER_VERSION {
            return Err(Error::UnsupportedVersion {
                requested: self.version,
                max: COLOR_MANAGER_VERSION,
            });
        }

        if !self.render_intents.contains(&RenderIntent::Perceptual) {
            return Err(Error::MissingPerceptualIntent);
        }

        // No optional feature is implemented yet
        if let Some(&feature) = self.features.first() {
            return Err(Error::UnsupportedFeature(feature));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let options = ManagerOptions::default();
        assert!(options.validate().is_ok());
        assert_eq!(options.version, 1);
        assert!(options.features.is_empty());
    }

    #[test]
    fn test_empty_toml_is_default() {
        let options = ManagerOptions::from_toml_str("").unwrap();
        assert_eq!(options, ManagerOptions::default());
    }

    #[test]
    fn test_parse_names() {
        let options = ManagerOptions::from_toml_str(
            r#"
            render_intents = ["relative", "perceptual", "relative_bpc"]
            transfer_functions = ["log_316", "st2084_pq", "ext_srgb"]
            primaries = ["display_p3", "cie1931_xyz"]
            "#,
        )
        .unwrap();

        assert_eq!(
            options.render_intents,
            [RenderIntent::Relative, RenderIntent::Perceptual, RenderIntent::RelativeBpc]
        );
        assert_eq!(
            options.transfer_functions,
            [TransferFunction::Log316, TransferFunction::St2084Pq, TransferFunction::ExtSrgb]
        );
        assert_eq!(options.primaries, [NamedPrimaries::DisplayP3, NamedPrimaries::Cie1931Xyz]);
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(matches!(
            ManagerOptions::from_toml_str("colour = true"),
            Err(Error::Toml(_))
        ));
    }

    #[test]
    fn test_missing_perceptual() {
        assert!(matches!(
            ManagerOptions::from_toml_str(r#"render_intents = ["saturation"]"#),
            Err(Error::MissingPerceptualIntent)
        ));
    }

    #[test]
    fn test_feature_rejected() {
        assert!(matches!(
            ManagerOptions::from_toml_str(r#"features = ["set_luminances"]"#),
            Err(Error::UnsupportedFeature(Feature::SetLuminances))
        ));
    }

    #[test]
    fn test_version_bounds() {
        assert!(matches!(
            ManagerOptions::from_toml_str("version = 0"),
            Err(Error::UnsupportedVersion { requested: 0, max: 1 })
        ));
        assert!(matches!(
            ManagerOptions::from_toml_str("version = 2"),
            Err(Error::UnsupportedVersion { requested: 2, max: 1 })
        ));
    }

    #[test]
    fn test_missing_file_is_default() {
        let path = Path::new("/nonexistent/wpcm/color-manager.toml");
        assert_eq!(ManagerOptions::load_from(path).unwrap(), ManagerOptions::default());
    }
}
