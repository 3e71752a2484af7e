/*
 * Settings Core - randomizer settings schema and settings-string codec
 *
 * Layers:
 * - schema/        : Value model, choice tables, descriptors, disable rules
 * - layout         : Tab/section grouping (external layout document)
 * - registry/      : Immutable descriptor registry + dependency graph
 * - validation     : Fail-fast configuration validator
 * - names          : Fuzzy suggestions, external name tables
 * - distribution   : Weighted tables for the settings sampler
 * - codec/         : Bit-exact settings string encode/decode
 * - configuration  : Ordered setting-name → value map
 * - overrides      : Plando/override documents
 * - preset         : Versioned YAML preset catalogs
 * - provenance     : Where each value came from
 * - catalog/       : Standard declarative setting table
 *
 * The registry is built once and then only read; every operation after
 * construction is a pure function of (registry, configuration).
 */

#![allow(clippy::new_without_default)] // Builders take required arguments
#![allow(clippy::module_inception)] // Module naming intentional

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports
// ═══════════════════════════════════════════════════════════════════════════

/// Error taxonomy
pub mod errors;

/// Setting value model and descriptors
pub mod schema;

/// Layout document (tabs → sections → settings)
pub mod layout;

/// Descriptor registry and dependency graph
pub mod registry;

/// Configuration map
pub mod configuration;

/// Validator
pub mod validation;

/// Fuzzy suggestions and external name tables
pub mod names;

/// Weighted distribution tables
pub mod distribution;

/// Settings string codec
pub mod codec;

/// Plando/override documents
pub mod overrides;

/// Preset catalogs
pub mod preset;

/// Per-setting provenance
pub mod provenance;

/// Standard setting table
pub mod catalog;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use codec::SettingsCodec;
pub use configuration::Configuration;
pub use distribution::{DistributionTable, WeightedChoice};
pub use errors::{SettingsError, SettingsResult};
pub use layout::SettingsLayout;
pub use names::{NameKind, NameTables};
pub use overrides::OverrideDocument;
pub use preset::{Preset, PresetCatalog};
pub use provenance::{ConfigProvenance, SettingSource};
pub use registry::{DependencyTrigger, RegistryBuilder, SettingsRegistry};
pub use schema::{
    ChoiceSpec, ChoiceTable, DisableRule, GuiKind, NumericRange, RuleTrigger, SettingBuilder,
    SettingDescriptor, SettingValue, ValueType,
};
pub use validation::{Validatable, Validator};
