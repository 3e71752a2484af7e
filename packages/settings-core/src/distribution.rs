//! Weighted distribution tables
//!
//! Each descriptor carries an ordered `(value, weight)` table for an
//! external sampler. Nothing here draws values. A descriptor is eligible
//! for sampling only while its `randomize_key` toggle is disabling it
//! through the dependency graph; zero-weight entries are never drawable.

use crate::configuration::Configuration;
use crate::registry::SettingsRegistry;
use crate::schema::{SettingDescriptor, SettingValue};
use serde::{Deserialize, Serialize};

/// One `(value, weight)` entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedChoice {
    pub value: SettingValue,
    pub weight: u32,
}

impl WeightedChoice {
    pub fn new(value: impl Into<SettingValue>, weight: u32) -> Self {
        Self {
            value: value.into(),
            weight,
        }
    }
}

/// Read-only view of one descriptor's distribution
#[derive(Debug, Clone, Copy)]
pub struct DistributionTable<'r> {
    descriptor: &'r SettingDescriptor,
}

impl<'r> DistributionTable<'r> {
    pub fn of(descriptor: &'r SettingDescriptor) -> Self {
        Self { descriptor }
    }

    pub fn setting(&self) -> &'r str {
        self.descriptor.name()
    }

    /// All entries in declaration order, zero weights included
    pub fn entries(&self) -> &'r [WeightedChoice] {
        self.descriptor.distribution()
    }

    /// Entries an external draw may pick
    pub fn drawable(&self) -> impl Iterator<Item = &'r WeightedChoice> {
        self.entries().iter().filter(|entry| entry.weight > 0)
    }

    pub fn total_weight(&self) -> u64 {
        self.drawable().map(|entry| u64::from(entry.weight)).sum()
    }

    /// Probability of `value` under this table (0.0 when not drawable)
    pub fn probability(&self, value: &SettingValue) -> f64 {
        let total = self.total_weight();
        if total == 0 {
            return 0.0;
        }
        let weight: u64 = self
            .drawable()
            .filter(|entry| &entry.value == value)
            .map(|entry| u64::from(entry.weight))
            .sum();
        weight as f64 / total as f64
    }

    /// Whether the master toggle currently hands this setting to the sampler
    pub fn is_eligible(&self, registry: &SettingsRegistry, config: &Configuration) -> bool {
        let Some(key) = self.descriptor.randomize_key() else {
            return false;
        };
        registry
            .active_triggers(self.descriptor.name(), config)
            .iter()
            .any(|trigger| trigger.source == key)
    }
}

impl SettingsRegistry {
    /// Distributions eligible for sampling under `config`, declaration order
    pub fn sampling_candidates<'r>(
        &'r self,
        config: &'r Configuration,
    ) -> impl Iterator<Item = DistributionTable<'r>> + 'r {
        self.iter()
            .map(DistributionTable::of)
            .filter(move |table| table.is_eligible(self, config) && table.total_weight() > 0)
    }
}
