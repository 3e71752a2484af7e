//! Descriptor registry
//!
//! Built once from a static declarative table and then immutable. Build
//! order:
//! 1. Freeze descriptors in declaration order (the order is load-bearing
//!    for the settings string) and reject duplicate names.
//! 2. Check every GUI-visible, non-optional descriptor is in the layout.
//! 3. Check `randomize_key` and distribution entries refer to real things.
//! 4. Attach dependency triggers (see [`dependency`]).
//!
//! Any failure is an `Integrity` error: the table itself is wrong.
//! After `build()` the registry is only read, so it can be shared freely
//! across threads.

pub mod dependency;

pub use dependency::DependencyTrigger;

use crate::configuration::Configuration;
use crate::distribution::DistributionTable;
use crate::errors::{SettingsError, SettingsResult};
use crate::layout::SettingsLayout;
use crate::names;
use crate::schema::{SettingBuilder, SettingDescriptor, SettingValue};
use crate::validation::Validator;
use std::collections::HashMap;
use tracing::info;

/// Immutable setting registry
#[derive(Debug, Clone)]
pub struct SettingsRegistry {
    descriptors: Vec<SettingDescriptor>,
    index: HashMap<String, usize>,
    layout: SettingsLayout,
}

/// Registry construction
pub struct RegistryBuilder {
    layout: SettingsLayout,
    descriptors: Vec<SettingDescriptor>,
}

impl RegistryBuilder {
    pub fn new(layout: SettingsLayout) -> Self {
        Self {
            layout,
            descriptors: Vec::new(),
        }
    }

    /// Append a declared setting
    pub fn setting(mut self, builder: SettingBuilder) -> Self {
        self.descriptors.push(builder.build());
        self
    }

    /// Append many declared settings, keeping their order
    pub fn settings(mut self, builders: impl IntoIterator<Item = SettingBuilder>) -> Self {
        self.descriptors
            .extend(builders.into_iter().map(SettingBuilder::build));
        self
    }

    /// Build the registry, running every integrity check
    pub fn build(self) -> SettingsResult<SettingsRegistry> {
        let RegistryBuilder {
            layout,
            mut descriptors,
        } = self;

        // Step 1: index + duplicates
        let mut index = HashMap::with_capacity(descriptors.len());
        for (i, descriptor) in descriptors.iter().enumerate() {
            if index.insert(descriptor.name().to_string(), i).is_some() {
                return Err(SettingsError::integrity(format!(
                    "setting '{}' is declared more than once",
                    descriptor.name()
                )));
            }
        }

        // Step 2: layout membership
        for descriptor in &descriptors {
            if descriptor.is_gui_visible()
                && !descriptor.optional()
                && !layout.is_mapped(descriptor.name())
            {
                return Err(SettingsError::integrity(format!(
                    "'{}' is defined but is not in the settings layout. Add it to a section or mark it optional.",
                    descriptor.name()
                )));
            }
        }

        // Step 3: cross-references inside descriptors
        for descriptor in &descriptors {
            check_metadata(descriptor, &index)?;
        }

        // Step 4: dependency graph
        let edges = dependency::attach_dependencies(&mut descriptors, &index, &layout)?;

        let registry = SettingsRegistry {
            descriptors,
            index,
            layout,
        };
        info!(
            "settings registry built: {} settings, {} dependency edges, {} fixed settings-string bits",
            registry.len(),
            edges,
            registry.settings_string_bits()
        );

        Ok(registry)
    }
}

fn check_metadata(
    descriptor: &SettingDescriptor,
    index: &HashMap<String, usize>,
) -> SettingsResult<()> {
    if let Some(key) = descriptor.randomize_key() {
        if !index.contains_key(key) {
            return Err(SettingsError::integrity(format!(
                "'{}' names unknown randomize key '{}'",
                descriptor.name(),
                key
            )));
        }
    }

    let choices = descriptor.choices();
    if !choices.is_empty() {
        let in_choices = |value: &SettingValue| match value {
            SettingValue::List(items) => items.iter().all(|v| choices.contains(v)),
            SettingValue::Map(_) => true,
            scalar => choices.contains(scalar),
        };
        if !in_choices(descriptor.default_value()) {
            return Err(SettingsError::integrity(format!(
                "'{}' default {} is not one of its choices",
                descriptor.name(),
                descriptor.default_value()
            )));
        }
        if !in_choices(descriptor.disabled_default()) {
            return Err(SettingsError::integrity(format!(
                "'{}' disabled default {} is not one of its choices",
                descriptor.name(),
                descriptor.disabled_default()
            )));
        }
        for entry in descriptor.distribution() {
            if !choices.contains(&entry.value) {
                return Err(SettingsError::integrity(format!(
                    "'{}' distribution names {} which is not one of its choices",
                    descriptor.name(),
                    entry.value
                )));
            }
        }
    }

    Ok(())
}

impl SettingsRegistry {
    pub fn builder(layout: SettingsLayout) -> RegistryBuilder {
        RegistryBuilder::new(layout)
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn layout(&self) -> &SettingsLayout {
        &self.layout
    }

    pub fn get(&self, name: &str) -> Option<&SettingDescriptor> {
        self.index.get(name).map(|&i| &self.descriptors[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Lookup that fails with a fuzzy suggestion
    pub fn descriptor(&self, name: &str) -> SettingsResult<&SettingDescriptor> {
        self.get(name).ok_or_else(|| SettingsError::UnknownSetting {
            name: name.to_string(),
            suggestion: self.suggest_setting(name),
        })
    }

    /// "Did you mean" text against all setting names
    pub fn suggest_setting(&self, name: &str) -> String {
        names::suggestion(name, self.names())
    }

    /// Descriptors in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &SettingDescriptor> {
        self.descriptors.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.descriptors.iter().map(|d| d.name())
    }

    /// Descriptors that occupy bits in the settings string, in order
    pub fn encoded_descriptors(&self) -> impl Iterator<Item = &SettingDescriptor> {
        self.descriptors
            .iter()
            .filter(|d| d.shared() && d.bit_width() > 0)
    }

    /// Sum of all shared bit widths. List fields may extend past their
    /// fixed slot with extra element codes.
    pub fn settings_string_bits(&self) -> u32 {
        self.encoded_descriptors().map(|d| d.bit_width()).sum()
    }

    /// Configured value, or the descriptor default when absent
    pub fn effective_value<'a>(
        &'a self,
        config: &'a Configuration,
        name: &str,
    ) -> Option<&'a SettingValue> {
        config
            .get(name)
            .or_else(|| self.get(name).map(|d| d.default_value()))
    }

    /// Every trigger attached to `name`, active or not
    pub fn dependency_of(&self, name: &str) -> &[DependencyTrigger] {
        self.get(name).map(|d| d.dependency()).unwrap_or(&[])
    }

    /// Triggers currently disabling `name` under `config`
    pub fn active_triggers<'a>(
        &'a self,
        name: &str,
        config: &'a Configuration,
    ) -> Vec<&'a DependencyTrigger> {
        self.dependency_of(name)
            .iter()
            .filter(|t| {
                self.effective_value(config, &t.source)
                    .map(|value| t.fires(value))
                    .unwrap_or(false)
            })
            .collect()
    }

    /// Whether any attached trigger fires under `config`
    pub fn is_disabled(&self, name: &str, config: &Configuration) -> bool {
        self.dependency_of(name).iter().any(|t| {
            self.effective_value(config, &t.source)
                .map(|value| t.fires(value))
                .unwrap_or(false)
        })
    }

    /// Fail-fast validation (see [`Validator`])
    pub fn validate(&self, config: &Configuration, check_conflicts: bool) -> SettingsResult<()> {
        Validator::new(self).validate(config, check_conflicts)
    }

    /// Weighted table for one setting
    pub fn distribution(&self, name: &str) -> Option<DistributionTable<'_>> {
        self.get(name).map(DistributionTable::of)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{LayoutSection, LayoutTab};
    use crate::schema::{ChoiceSpec, DisableRule};

    fn layout(settings: &[&str]) -> SettingsLayout {
        SettingsLayout {
            tabs: vec![LayoutTab {
                name: "main_tab".to_string(),
                text: None,
                sections: vec![LayoutSection {
                    name: "main_section".to_string(),
                    text: None,
                    settings: settings.iter().map(|s| s.to_string()).collect(),
                }],
            }],
        }
    }

    fn small_registry() -> SettingsRegistry {
        SettingsRegistry::builder(layout(&["a", "b", "c"]))
            .setting(
                SettingBuilder::checkbutton("a")
                    .gui_text("A")
                    .shared()
                    .disable(DisableRule::when(true).settings(["b"])),
            )
            .setting(
                SettingBuilder::combobox("b", ChoiceSpec::plain(["x", "y", "z"]))
                    .gui_text("B")
                    .shared()
                    .default("y")
                    .disabled_default("x")
                    .disable(DisableRule::when_not("z").settings(["c"])),
            )
            .setting(SettingBuilder::checkbutton("c").gui_text("C"))
            .build()
            .unwrap()
    }

    #[test]
    fn test_lookup_and_order() {
        let registry = small_registry();
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert!(registry.get("b").is_some());
        assert!(registry.get("d").is_none());
    }

    #[test]
    fn test_descriptor_lookup_suggests() {
        let registry = SettingsRegistry::builder(layout(&["shuffle_song_items"]))
            .setting(SettingBuilder::checkbutton("shuffle_song_items").gui_text("Songs"))
            .build()
            .unwrap();
        let err = registry.descriptor("shufle_songs").unwrap_err();
        assert!(err.to_string().contains("Did you mean 'shuffle_song_items'?"));
    }

    #[test]
    fn test_dependencies_attached_to_targets() {
        let registry = small_registry();
        let b = registry.get("b").unwrap();
        assert_eq!(b.dependency().len(), 1);
        assert_eq!(b.dependency()[0].source, "a");

        let c = registry.get("c").unwrap();
        assert_eq!(c.dependency().len(), 1);
    }

    #[test]
    fn test_is_disabled_uses_current_snapshot() {
        let registry = small_registry();
        let mut config = Configuration::new();
        assert!(!registry.is_disabled("b", &config));

        config.insert("a", true);
        assert!(registry.is_disabled("b", &config));

        config.insert("a", false);
        assert!(!registry.is_disabled("b", &config));
    }

    #[test]
    fn test_absent_source_uses_default() {
        let registry = small_registry();
        // b defaults to "y" which != "z", so c is disabled
        assert!(registry.is_disabled("c", &Configuration::new()));
        let config = Configuration::new().with("b", "z");
        assert!(!registry.is_disabled("c", &config));
    }

    #[test]
    fn test_duplicate_name_is_integrity_error() {
        let result = SettingsRegistry::builder(layout(&["a"]))
            .setting(SettingBuilder::checkbutton("a"))
            .setting(SettingBuilder::checkbutton("a"))
            .build();
        assert!(matches!(result, Err(SettingsError::Integrity(_))));
    }

    #[test]
    fn test_unmapped_gui_setting_is_integrity_error() {
        let result = SettingsRegistry::builder(layout(&[]))
            .setting(SettingBuilder::checkbutton("lonely").gui_text("Lonely"))
            .build();
        let err = result.unwrap_err();
        assert!(err.to_string().contains("'lonely' is defined but is not in the settings layout"));
    }

    #[test]
    fn test_optional_and_hidden_settings_skip_layout_check() {
        let registry = SettingsRegistry::builder(layout(&[]))
            .setting(SettingBuilder::checkbutton("optional_one").gui_text("Opt").optional())
            .setting(SettingBuilder::checkbutton("hidden_one"))
            .build();
        assert!(registry.is_ok());
    }

    #[test]
    fn test_unknown_rule_target_is_integrity_error() {
        let result = SettingsRegistry::builder(layout(&[]))
            .setting(SettingBuilder::checkbutton("a").disable(DisableRule::when(true).settings(["ghost"])))
            .build();
        assert!(result.unwrap_err().to_string().contains("ghost"));
    }

    #[test]
    fn test_self_targeting_rule_is_integrity_error() {
        let result = SettingsRegistry::builder(layout(&["a"]))
            .setting(
                SettingBuilder::checkbutton("a")
                    .gui_text("A")
                    .disable(DisableRule::when(true).sections(["main_section"])),
            )
            .build();
        assert!(matches!(result, Err(SettingsError::Integrity(_))));
    }

    #[test]
    fn test_unknown_randomize_key_is_integrity_error() {
        let result = SettingsRegistry::builder(layout(&[]))
            .setting(SettingBuilder::checkbutton("a").randomize_key("nope"))
            .build();
        assert!(matches!(result, Err(SettingsError::Integrity(_))));
    }

    #[test]
    fn test_distribution_outside_choices_is_integrity_error() {
        let result = SettingsRegistry::builder(layout(&[]))
            .setting(
                SettingBuilder::combobox("a", ChoiceSpec::plain(["x", "y"]))
                    .distribution([("w", 1)]),
            )
            .build();
        assert!(matches!(result, Err(SettingsError::Integrity(_))));
    }

    #[test]
    fn test_disabled_default_outside_choices_is_integrity_error() {
        let result = SettingsRegistry::builder(layout(&[]))
            .setting(
                SettingBuilder::combobox("a", ChoiceSpec::plain(["x", "y", "z"]))
                    .default("y")
                    .disabled_default("w"),
            )
            .build();
        match result {
            Err(SettingsError::Integrity(message)) => {
                assert!(message.contains("'a' disabled default 'w'"), "{message}");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_settings_string_bits() {
        let registry = small_registry();
        // a: 1 bit, b: 2 bits, c: unshared
        assert_eq!(registry.settings_string_bits(), 3);
        assert_eq!(registry.encoded_descriptors().count(), 2);
    }
}
