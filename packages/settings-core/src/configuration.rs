//! Configuration map
//!
//! An ordered `name → value` map. Iteration order is insertion order, which
//! is also the order the validator walks and the order JSON output uses.
//! Inserting an existing key replaces its value in place.

use crate::errors::SettingsResult;
use crate::registry::SettingsRegistry;
use crate::schema::SettingValue;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Configuration {
    entries: Vec<(String, SettingValue)>,
}

impl Configuration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Chainable insert
    pub fn with(mut self, name: impl Into<String>, value: impl Into<SettingValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert or replace; returns the previous value
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<SettingValue>,
    ) -> Option<SettingValue> {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((name, value));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&SettingValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn remove(&mut self, name: &str) -> Option<SettingValue> {
        let pos = self.entries.iter().position(|(n, _)| n == name)?;
        Some(self.entries.remove(pos).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SettingValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every descriptor at its default, in declaration order
    pub fn defaults(registry: &SettingsRegistry) -> Self {
        registry
            .iter()
            .map(|d| (d.name().to_string(), d.default_value().clone()))
            .collect()
    }

    /// Configured value, or the registry default when absent
    pub fn effective<'a>(
        &'a self,
        registry: &'a SettingsRegistry,
        name: &str,
    ) -> Option<&'a SettingValue> {
        registry.effective_value(self, name)
    }

    /// Force every currently disabled setting to its disabled default.
    ///
    /// A forced value can disable further settings, so this repeats until
    /// nothing changes. Each round forces at least one new value, which
    /// bounds the loop by the registry size.
    pub fn apply_disabled_defaults(&mut self, registry: &SettingsRegistry) -> usize {
        let mut forced = 0;
        for _ in 0..=registry.len() {
            let current: &Configuration = self;
            let pending: Vec<(String, SettingValue)> = registry
                .iter()
                .filter(|d| registry.is_disabled(d.name(), current))
                .filter(|d| {
                    registry.effective_value(current, d.name()) != Some(d.disabled_default())
                })
                .map(|d| (d.name().to_string(), d.disabled_default().clone()))
                .collect();
            if pending.is_empty() {
                break;
            }
            for (name, value) in pending {
                debug!("forcing disabled setting {} to {}", name, value);
                self.insert(name, value);
                forced += 1;
            }
        }
        forced
    }

    /// Overlay `other`: its values replace ours wholesale, keys it lacks
    /// keep their current value.
    pub fn merge(&mut self, other: &Configuration) {
        for (name, value) in other.iter() {
            self.insert(name, value.clone());
        }
    }

    pub fn from_json_str(json: &str) -> SettingsResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_string(&self) -> SettingsResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl FromIterator<(String, SettingValue)> for Configuration {
    fn from_iter<T: IntoIterator<Item = (String, SettingValue)>>(iter: T) -> Self {
        let mut config = Configuration::new();
        for (name, value) in iter {
            config.insert(name, value);
        }
        config
    }
}

impl Serialize for Configuration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Configuration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ConfigurationVisitor;

        impl<'de> Visitor<'de> for ConfigurationVisitor {
            type Value = Configuration;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of setting names to values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut config = Configuration::new();
                while let Some((name, value)) = access.next_entry::<String, SettingValue>()? {
                    config.insert(name, value);
                }
                Ok(config)
            }
        }

        deserializer.deserialize_map(ConfigurationVisitor)
    }
}
