//! Standard setting table
//!
//! The declarative table shipped with the crate: descriptors in settings
//! string order, the layout document grouping them into tabs, and the
//! bundled presets. Reordering or inserting shared descriptors changes
//! every settings string, so new shared settings go at the end of their
//! tab's list only together with a version bump of the consumers.

mod cosmetics;
mod detailed;
mod other;
mod rules;

use crate::errors::SettingsResult;
use crate::layout::SettingsLayout;
use crate::preset::PresetCatalog;
use crate::registry::SettingsRegistry;
use crate::schema::SettingBuilder;
use once_cell::sync::OnceCell;

const SETTINGS_MAPPING: &str = include_str!("../../data/settings_mapping.json");
const PRESETS: &str = include_str!("../../data/presets.yaml");

static STANDARD_REGISTRY: OnceCell<SettingsRegistry> = OnceCell::new();

/// Declared settings in tab order
pub fn standard_settings() -> Vec<SettingBuilder> {
    let mut settings = rules::settings();
    settings.extend(detailed::settings());
    settings.extend(other::settings());
    settings.extend(cosmetics::settings());
    settings
}

pub fn standard_layout() -> SettingsResult<SettingsLayout> {
    SettingsLayout::from_json_str(SETTINGS_MAPPING)
}

/// Build a fresh registry from the standard table
pub fn standard_registry() -> SettingsResult<SettingsRegistry> {
    SettingsRegistry::builder(standard_layout()?)
        .settings(standard_settings())
        .build()
}

/// Process-wide registry, built on first use
pub fn shared_registry() -> SettingsResult<&'static SettingsRegistry> {
    STANDARD_REGISTRY.get_or_try_init(standard_registry)
}

/// Bundled presets, validated against `registry`
pub fn standard_presets(registry: &SettingsRegistry) -> SettingsResult<PresetCatalog> {
    PresetCatalog::from_yaml_str(PRESETS, registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::SettingsCodec;
    use crate::configuration::Configuration;
    use crate::schema::SettingValue;

    #[test]
    fn test_standard_registry_builds() {
        let registry = standard_registry().unwrap();
        assert!(registry.len() > 60);
        assert!(registry.contains("shuffle_song_items"));
        assert!(registry.contains("hint_dist_user"));
    }

    #[test]
    fn test_shared_registry_is_built_once() {
        let a = shared_registry().unwrap();
        let b = shared_registry().unwrap();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn test_defaults_validate_with_conflicts() {
        let registry = standard_registry().unwrap();
        let defaults = Configuration::defaults(&registry);
        registry.validate(&defaults, true).unwrap();
    }

    #[test]
    fn test_group_rule_reaches_section_members() {
        let registry = standard_registry().unwrap();
        let config = Configuration::new().with("randomize_all_cosmetics", true);
        for name in ["kokiri_color", "goron_color", "zora_color"] {
            assert!(registry.is_disabled(name, &config), "{name}");
        }
        assert!(!registry.is_disabled("background_music", &config));
    }

    #[test]
    fn test_randomize_settings_covers_shuffle_section() {
        let registry = standard_registry().unwrap();
        let config = Configuration::new().with("randomize_settings", true);
        assert!(registry.is_disabled("shopsanity", &config));
        assert!(registry.is_disabled("open_forest", &config));
        assert!(!registry.is_disabled("logic_rules", &config));
    }

    #[test]
    fn test_bundled_presets_load() {
        let registry = standard_registry().unwrap();
        let presets = standard_presets(&registry).unwrap();
        assert!(presets.get("Beginner").is_ok());
        assert!(presets.get("Random Settings").is_ok());
    }

    #[test]
    fn test_random_settings_preset_hands_off_to_sampler() {
        let registry = standard_registry().unwrap();
        let presets = standard_presets(&registry).unwrap();
        let (config, _) = presets.resolve("Random Settings", &registry).unwrap();
        registry.validate(&config, true).unwrap();

        let candidates: Vec<&str> = registry.sampling_candidates(&config).map(|t| t.setting()).collect();
        assert!(candidates.contains(&"bridge"));
        assert!(candidates.contains(&"shuffle_song_items"));
        assert!(!candidates.contains(&"logic_rules"));
        assert_eq!(
            config.get("shuffle_ganon_bosskey"),
            Some(&SettingValue::from("triforce"))
        );
    }

    #[test]
    fn test_standard_default_roundtrip() {
        let registry = standard_registry().unwrap();
        let codec = SettingsCodec::new(&registry);
        let defaults = Configuration::defaults(&registry);
        assert_eq!(codec.decode(&codec.encode(&defaults)).unwrap(), defaults);
    }
}
