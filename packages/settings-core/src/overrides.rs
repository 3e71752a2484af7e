//! Override (plando) documents
//!
//! ```json
//! { "settings": { "bridge": "tokens", "starting_items": { "Bombchus": 20 } },
//!   "locations": { "Song from Impa": "Zeldas Lullaby" } }
//! ```
//!
//! Only `settings` is interpreted here. Every other top-level section
//! belongs to the world generator and is carried through untouched.

use crate::configuration::Configuration;
use crate::errors::SettingsResult;
use crate::provenance::{ConfigProvenance, SettingSource};
use crate::registry::SettingsRegistry;
use crate::validation::{Validatable, Validator};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverrideDocument {
    #[serde(default)]
    pub settings: Configuration,

    /// Opaque sections (`locations`, `entrances`, `gossip_stones`, ...)
    #[serde(flatten)]
    pub sections: serde_json::Map<String, serde_json::Value>,
}

impl OverrideDocument {
    pub fn from_json_str(json: &str) -> SettingsResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_string(&self) -> SettingsResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate, then merge onto `base` and record provenance.
    ///
    /// On error `base` is left untouched.
    pub fn apply(
        &self,
        registry: &SettingsRegistry,
        base: &mut Configuration,
        provenance: &mut ConfigProvenance,
        origin: &str,
    ) -> SettingsResult<()> {
        self.validate_against(registry)?;

        base.merge(&self.settings);
        for name in self.settings.names() {
            provenance.track(
                name,
                SettingSource::Override {
                    document: origin.to_string(),
                },
            );
        }
        info!(
            "applied {} settings from override document {}",
            self.settings.len(),
            origin
        );
        Ok(())
    }
}

impl Validatable for OverrideDocument {
    fn validate_against(&self, registry: &SettingsRegistry) -> SettingsResult<()> {
        Validator::new(registry).validate(&self.settings, true)
    }

    fn document_name(&self) -> &'static str {
        "override document"
    }
}
