//! Preset catalogs
//!
//! Named, versioned bundles of settings stored as YAML:
//!
//! ```yaml
//! version: 1
//! presets:
//!   - name: Beginner
//!     description: Open world, vanilla dungeons
//!     settings:
//!       open_forest: open
//!       bridge: open
//! ```
//!
//! Every preset is validated against the registry when the catalog loads,
//! so a loaded catalog only hands out valid configurations.

use crate::configuration::Configuration;
use crate::errors::{SettingsError, SettingsResult};
use crate::names;
use crate::provenance::{ConfigProvenance, SettingSource};
use crate::registry::SettingsRegistry;
use crate::validation::{Validatable, Validator};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

pub const SUPPORTED_VERSIONS: &[u32] = &[1];

/// YAML schema v1
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PresetDocumentV1 {
    /// Schema version (always 1 for v1)
    pub version: u32,

    #[serde(default)]
    pub presets: Vec<Preset>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Preset {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub settings: Configuration,
}

impl Validatable for Preset {
    fn validate_against(&self, registry: &SettingsRegistry) -> SettingsResult<()> {
        Validator::new(registry).validate(&self.settings, true)
    }

    fn document_name(&self) -> &'static str {
        "preset"
    }
}

#[derive(Debug, Clone, Default)]
pub struct PresetCatalog {
    presets: Vec<Preset>,
}

impl PresetCatalog {
    /// Parse and validate a catalog
    pub fn from_yaml_str(yaml: &str, registry: &SettingsRegistry) -> SettingsResult<Self> {
        let document: PresetDocumentV1 = serde_yaml::from_str(yaml)?;

        if !SUPPORTED_VERSIONS.contains(&document.version) {
            return Err(SettingsError::UnsupportedVersion {
                found: document.version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        let mut presets: Vec<Preset> = Vec::with_capacity(document.presets.len());
        for preset in document.presets {
            if presets.iter().any(|p| p.name == preset.name) {
                warn!("duplicate preset '{}' ignored", preset.name);
                continue;
            }
            presets.push(preset);
        }

        // Presets are independent; report the first failure in file order
        let results: Vec<SettingsResult<()>> = presets
            .par_iter()
            .map(|preset| preset.validate_against(registry))
            .collect();
        for result in results {
            result?;
        }

        info!("loaded {} presets", presets.len());
        Ok(Self { presets })
    }

    pub fn to_yaml(&self) -> SettingsResult<String> {
        let document = PresetDocumentV1 {
            version: 1,
            presets: self.presets.clone(),
        };
        Ok(serde_yaml::to_string(&document)?)
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.presets.iter().map(|p| p.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Preset> {
        self.presets.iter()
    }

    /// Lookup by name, with a suggestion on a miss
    pub fn get(&self, name: &str) -> SettingsResult<&Preset> {
        self.presets
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| SettingsError::UnknownPreset {
                name: name.to_string(),
                suggestion: names::suggestion(name, self.names()),
            })
    }

    /// Registry defaults overlaid with the preset, with every setting the
    /// preset disables forced to its disabled default.
    ///
    /// The preset's own values are never forced away. If an untouched
    /// default disables one of them, the result fails conflict validation.
    pub fn resolve(
        &self,
        name: &str,
        registry: &SettingsRegistry,
    ) -> SettingsResult<(Configuration, ConfigProvenance)> {
        let preset = self.get(name)?;
        let mut config = Configuration::defaults(registry);
        config.merge(&preset.settings);
        config.apply_disabled_defaults(registry);
        config.merge(&preset.settings);

        let mut provenance = ConfigProvenance::from_preset(&preset.name);
        for setting in preset.settings.names() {
            provenance.track(setting, SettingSource::Preset(preset.name.clone()));
        }
        Ok((config, provenance))
    }
}
