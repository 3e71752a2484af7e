//! Dependency graph builder
//!
//! Disable rules are declared on the triggering descriptor but evaluated
//! on the target. This pass inverts them: for every (descriptor D, rule
//! trigger O, resolved target T) it appends `(D, O)` to T's trigger list.
//! Triggers on one target compose with OR and are evaluated against the
//! configuration snapshot passed in, never cached.

use crate::errors::{SettingsError, SettingsResult};
use crate::layout::SettingsLayout;
use crate::schema::{DisableTargets, RuleTrigger, SettingDescriptor, SettingValue};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// One entry of a target's dependency list
#[derive(Debug, Clone, PartialEq)]
pub struct DependencyTrigger {
    /// Descriptor owning the disable rule
    pub source: String,
    pub trigger: RuleTrigger,
}

impl DependencyTrigger {
    /// Whether the trigger fires given the source's current value
    pub fn fires(&self, source_value: &SettingValue) -> bool {
        self.trigger.matches(source_value)
    }
}

/// Expand a rule's targets into setting names: direct settings first, then
/// sections, then tabs, each in layout order, without duplicates.
pub(crate) fn resolve_targets(
    owner: &str,
    targets: &DisableTargets,
    layout: &SettingsLayout,
) -> SettingsResult<Vec<String>> {
    let mut seen = HashSet::new();
    let mut resolved = Vec::new();
    let mut push = |name: &str| {
        if seen.insert(name.to_string()) {
            resolved.push(name.to_string());
        }
    };

    for name in &targets.settings {
        push(name.as_str());
    }
    for section in &targets.sections {
        let names = layout.settings_in_section(section).ok_or_else(|| {
            SettingsError::integrity(format!(
                "'{}' disables unknown section '{}'",
                owner, section
            ))
        })?;
        names.into_iter().for_each(&mut push);
    }
    for tab in &targets.tabs {
        let names = layout.settings_in_tab(tab).ok_or_else(|| {
            SettingsError::integrity(format!("'{}' disables unknown tab '{}'", owner, tab))
        })?;
        names.into_iter().for_each(&mut push);
    }

    Ok(resolved)
}

/// Attach dependency triggers to every target. Returns the number of edges.
pub(crate) fn attach_dependencies(
    descriptors: &mut [SettingDescriptor],
    index: &HashMap<String, usize>,
    layout: &SettingsLayout,
) -> SettingsResult<usize> {
    let mut pending: Vec<(usize, DependencyTrigger)> = Vec::new();

    for descriptor in descriptors.iter_mut() {
        let owner = descriptor.name().to_string();
        for rule in descriptor.disable_rules_mut() {
            let resolved = resolve_targets(&owner, rule.targets(), layout)?;
            for target in &resolved {
                if target == &owner {
                    return Err(SettingsError::integrity(format!(
                        "'{}' has a disable rule targeting itself",
                        owner
                    )));
                }
                let target_idx = *index.get(target).ok_or_else(|| {
                    SettingsError::integrity(format!(
                        "'{}' disables unknown setting '{}'",
                        owner, target
                    ))
                })?;
                pending.push((
                    target_idx,
                    DependencyTrigger {
                        source: owner.clone(),
                        trigger: rule.trigger().clone(),
                    },
                ));
            }
            rule.set_resolved(resolved);
        }
    }

    let edges = pending.len();
    for (target_idx, trigger) in pending {
        debug!(
            "dependency: {} disabled when {} {}",
            descriptors[target_idx].name(),
            trigger.source,
            trigger.trigger
        );
        descriptors[target_idx].attach_trigger(trigger);
    }

    Ok(edges)
}
