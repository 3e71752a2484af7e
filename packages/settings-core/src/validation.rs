//! Configuration validation
//!
//! [`Validator`] walks a configuration in iteration order and stops at the
//! first violation. Per entry:
//! 1. name must be a known setting
//! 2. value shape must match the descriptor's value type
//! 3. list elements must each be valid choices
//! 4. mapping values are opaque and skip choice checks
//! 5. scalars must be valid choices; without a choice table an int must
//!    sit inside the numeric range, so a range-only setting rejects
//!    out-of-range input instead of accepting any scalar
//! 6. when conflicts are checked, every rule the value triggers must find
//!    its targets absent or at their disabled default
//!
//! Nothing is mutated; calling twice on the same input gives the same
//! result.

use crate::configuration::Configuration;
use crate::errors::{SettingsError, SettingsResult};
use crate::names::{self, NameTables};
use crate::registry::SettingsRegistry;
use crate::schema::{SettingDescriptor, SettingValue};
use tracing::debug;

// ═══════════════════════════════════════════════════════════════════════════
// Validatable Trait
// ═══════════════════════════════════════════════════════════════════════════

/// Documents that can be checked against a registry
///
/// # Example
/// ```rust,ignore
/// fn activate<D: Validatable>(doc: &D, registry: &SettingsRegistry) -> SettingsResult<()> {
///     doc.validate_against(registry)?;
///     // ... merge
/// }
/// ```
pub trait Validatable {
    /// `Ok(())` if every setting in the document is valid
    fn validate_against(&self, registry: &SettingsRegistry) -> SettingsResult<()>;

    /// Name used in log lines
    fn document_name(&self) -> &'static str {
        "configuration"
    }
}

impl Validatable for Configuration {
    fn validate_against(&self, registry: &SettingsRegistry) -> SettingsResult<()> {
        Validator::new(registry).validate(self, true)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Validator
// ═══════════════════════════════════════════════════════════════════════════

/// Fail-fast configuration validator
pub struct Validator<'r> {
    registry: &'r SettingsRegistry,
    names: Option<&'r NameTables>,
}

impl<'r> Validator<'r> {
    pub fn new(registry: &'r SettingsRegistry) -> Self {
        Self {
            registry,
            names: None,
        }
    }

    /// Use external name tables for choice suggestions
    pub fn with_name_tables(mut self, names: &'r NameTables) -> Self {
        self.names = Some(names);
        self
    }

    pub fn validate(&self, config: &Configuration, check_conflicts: bool) -> SettingsResult<()> {
        for (name, value) in config.iter() {
            if let Err(err) = self.validate_entry(config, name, value, check_conflicts) {
                debug!("validation failed at '{}': {}", name, err);
                return Err(err);
            }
        }
        Ok(())
    }

    fn validate_entry(
        &self,
        config: &Configuration,
        name: &str,
        value: &SettingValue,
        check_conflicts: bool,
    ) -> SettingsResult<()> {
        // Step 1: known setting
        let descriptor = self.registry.descriptor(name)?;

        // Step 2: shape
        let value_type = descriptor.value_type();
        if !value_type.accepts(value) {
            return Err(SettingsError::TypeMismatch {
                setting: name.to_string(),
                value: value.to_string(),
                found: value.type_name(),
                expected: value_type.as_str(),
            });
        }

        // Steps 3-5: choices
        match value {
            SettingValue::List(elements) => {
                for element in elements {
                    self.check_choice(descriptor, element)?;
                }
            }
            SettingValue::Map(_) => {}
            scalar => self.check_choice(descriptor, scalar)?,
        }

        // Step 6: conflicts
        if check_conflicts {
            self.check_conflicts(config, descriptor, value)?;
        }

        Ok(())
    }

    fn check_choice(&self, descriptor: &SettingDescriptor, value: &SettingValue) -> SettingsResult<()> {
        let choices = descriptor.choices();
        let valid = if !choices.is_empty() {
            choices.contains(value)
        } else if let Some(range) = descriptor.range() {
            value.as_int().map(|v| range.contains(v)).unwrap_or(false)
        } else {
            // free scalar input; list elements always need a table
            !descriptor.value_type().is_list()
        };

        if valid {
            return Ok(());
        }
        Err(SettingsError::InvalidChoice {
            setting: descriptor.name().to_string(),
            value: value.to_string(),
            suggestion: self.suggest_choice(descriptor, value),
        })
    }

    fn suggest_choice(&self, descriptor: &SettingDescriptor, value: &SettingValue) -> String {
        let target = value.label_text();
        if let (Some(kind), Some(tables)) = (descriptor.name_source(), self.names) {
            let external = tables.suggest(kind, &target);
            if !external.is_empty() {
                return external;
            }
        }
        let candidates: Vec<String> = descriptor.choices().values().map(|v| v.label_text()).collect();
        names::suggestion(&target, candidates.iter().map(String::as_str))
    }

    fn check_conflicts(
        &self,
        config: &Configuration,
        descriptor: &SettingDescriptor,
        value: &SettingValue,
    ) -> SettingsResult<()> {
        for rule in descriptor.disable_rules() {
            if !rule.trigger().matches(value) {
                continue;
            }
            for target in rule.resolved_targets() {
                let Some(current) = config.get(target) else {
                    continue;
                };
                let target_descriptor = self.registry.descriptor(target)?;
                if current != target_descriptor.disabled_default() {
                    return Err(SettingsError::Conflict {
                        setting: descriptor.name().to_string(),
                        value: value.to_string(),
                        other_setting: target.clone(),
                        other_value: current.to_string(),
                        rule: rule.trigger().to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}
