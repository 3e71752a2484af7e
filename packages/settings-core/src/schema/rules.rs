//! Disable rules
//!
//! A rule lives on the *triggering* descriptor: "when my value is (or is
//! not) `O`, these settings/sections/tabs are forced to their disabled
//! default". The registry inverts rules into per-target trigger lists.

use super::value::SettingValue;
use std::fmt;

/// Trigger condition of a disable rule
#[derive(Debug, Clone, PartialEq)]
pub struct RuleTrigger {
    pub value: SettingValue,
    pub negated: bool,
}

impl RuleTrigger {
    pub fn equals(value: impl Into<SettingValue>) -> Self {
        Self {
            value: value.into(),
            negated: false,
        }
    }

    pub fn not_equals(value: impl Into<SettingValue>) -> Self {
        Self {
            value: value.into(),
            negated: true,
        }
    }

    /// Parse the textual key form: `"open"` or `"!open"`
    pub fn parse(key: &str) -> Self {
        match key.strip_prefix('!') {
            Some(rest) => Self::not_equals(rest),
            None => Self::equals(key),
        }
    }

    /// Whether the trigger fires for `value`
    pub fn matches(&self, value: &SettingValue) -> bool {
        (value == &self.value) != self.negated
    }
}

impl fmt::Display for RuleTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = if self.negated { "!=" } else { "==" };
        write!(f, "{} {}", op, self.value)
    }
}

/// Targets of a disable rule: plain settings and layout groups
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisableTargets {
    pub settings: Vec<String>,
    pub sections: Vec<String>,
    pub tabs: Vec<String>,
}

impl DisableTargets {
    pub fn is_empty(&self) -> bool {
        self.settings.is_empty() && self.sections.is_empty() && self.tabs.is_empty()
    }
}

/// Declarative disable rule
#[derive(Debug, Clone, PartialEq)]
pub struct DisableRule {
    trigger: RuleTrigger,
    targets: DisableTargets,
    /// Concrete setting names, filled in when the registry is built
    resolved: Vec<String>,
}

impl DisableRule {
    /// Rule firing when the owner equals `value`
    pub fn when(value: impl Into<SettingValue>) -> Self {
        Self::with_trigger(RuleTrigger::equals(value))
    }

    /// Rule firing when the owner does not equal `value`
    pub fn when_not(value: impl Into<SettingValue>) -> Self {
        Self::with_trigger(RuleTrigger::not_equals(value))
    }

    /// Rule from the textual key form (`"!stones"`)
    pub fn from_key(key: &str) -> Self {
        Self::with_trigger(RuleTrigger::parse(key))
    }

    pub fn with_trigger(trigger: RuleTrigger) -> Self {
        Self {
            trigger,
            targets: DisableTargets::default(),
            resolved: Vec::new(),
        }
    }

    pub fn settings<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.targets
            .settings
            .extend(names.into_iter().map(Into::into));
        self
    }

    pub fn sections<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.targets
            .sections
            .extend(names.into_iter().map(Into::into));
        self
    }

    pub fn tabs<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.targets.tabs.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn trigger(&self) -> &RuleTrigger {
        &self.trigger
    }

    pub fn targets(&self) -> &DisableTargets {
        &self.targets
    }

    /// Concrete target names (empty until the registry is built)
    pub fn resolved_targets(&self) -> &[String] {
        &self.resolved
    }

    pub(crate) fn set_resolved(&mut self, resolved: Vec<String>) {
        self.resolved = resolved;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_negated_key() {
        let t = RuleTrigger::parse("!stones");
        assert!(t.negated);
        assert_eq!(t.value, SettingValue::from("stones"));

        let t = RuleTrigger::parse("closed");
        assert!(!t.negated);
    }

    #[test]
    fn test_trigger_matching() {
        let eq = RuleTrigger::equals(true);
        assert!(eq.matches(&true.into()));
        assert!(!eq.matches(&false.into()));

        let ne = RuleTrigger::not_equals("open");
        assert!(ne.matches(&"closed".into()));
        assert!(!ne.matches(&"open".into()));
    }

    #[test]
    fn test_trigger_display() {
        assert_eq!(RuleTrigger::parse("!medallions").to_string(), "!= 'medallions'");
        assert_eq!(RuleTrigger::equals(true).to_string(), "== true");
    }

    #[test]
    fn test_rule_builder_collects_targets() {
        let rule = DisableRule::when(true)
            .settings(["open_forest", "open_kakariko"])
            .sections(["shuffle_section"]);

        assert_eq!(rule.targets().settings.len(), 2);
        assert_eq!(rule.targets().sections, vec!["shuffle_section"]);
        assert!(rule.targets().tabs.is_empty());
        assert!(rule.resolved_targets().is_empty());
    }
}
