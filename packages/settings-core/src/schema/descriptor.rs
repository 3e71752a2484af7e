//! Setting descriptors
//!
//! Immutable per-setting metadata. Descriptors are declared with
//! [`SettingBuilder`] and frozen by the registry, which also attaches the
//! dependency triggers derived from other descriptors' disable rules.
//!
//! # Bit width
//! ```text
//! shared == false                        → 0
//! numeric range, no choice table         → ceil(log2(max - min + 1))
//! otherwise, n = |choices| (+2 if list)  → ceil(log2(n)), 0 when n == 0
//! ```
//! A single-choice setting costs zero bits.

use super::choices::{ChoiceSpec, ChoiceTable};
use super::rules::DisableRule;
use super::value::{SettingValue, ValueType};
use crate::distribution::WeightedChoice;
use crate::names::NameKind;
use crate::registry::DependencyTrigger;
use serde::{Deserialize, Serialize};

/// GUI widget kind (metadata only, never rendered here)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuiKind {
    Checkbutton,
    Combobox,
    MultipleSelect,
    Radiobutton,
    Scale,
    Numberinput,
    Textinput,
    Fileinput,
    SearchBox,
    Textbox,
}

/// Inclusive numeric range with step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumericRange {
    pub min: i64,
    pub max: i64,
    pub step: i64,
}

impl NumericRange {
    pub fn new(min: i64, max: i64) -> Self {
        Self { min, max, step: 1 }
    }

    pub fn contains(&self, value: i64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Number of distinct values `max - min + 1` (0 for an inverted range)
    pub fn span(&self) -> u64 {
        if self.max < self.min {
            0
        } else {
            (self.max - self.min) as u64 + 1
        }
    }

    /// Stepped values in ascending order
    pub fn values(&self) -> impl Iterator<Item = i64> {
        let step = self.step.max(1) as usize;
        (self.min..=self.max).step_by(step)
    }
}

/// `ceil(log2(n))`, with `n <= 1` → 0
pub fn ceil_log2(n: u64) -> u32 {
    if n <= 1 {
        0
    } else {
        u64::BITS - (n - 1).leading_zeros()
    }
}

/// Number of bits a descriptor occupies in the settings string
pub fn compute_bit_width(
    shared: bool,
    value_type: ValueType,
    range: Option<&NumericRange>,
    choices: &ChoiceTable,
) -> u32 {
    if !shared {
        return 0;
    }
    if let Some(range) = range {
        if choices.is_empty() {
            return ceil_log2(range.span());
        }
    }

    let mut count = choices.len() as u64;
    if count == 0 {
        return 0;
    }
    if value_type.is_list() {
        // additive / subtractive terminators
        count += 2;
    }
    ceil_log2(count)
}

/// Immutable metadata for one setting
#[derive(Debug, Clone)]
pub struct SettingDescriptor {
    name: String,
    value_type: ValueType,
    gui_kind: Option<GuiKind>,
    gui_text: Option<String>,
    tooltip: String,
    shared: bool,
    cosmetic: bool,
    optional: bool,
    choices: ChoiceTable,
    range: Option<NumericRange>,
    default: SettingValue,
    disabled_default: SettingValue,
    disable: Vec<DisableRule>,
    distribution: Vec<WeightedChoice>,
    randomize_key: Option<String>,
    name_source: Option<NameKind>,
    bit_width: u32,
    dependency: Vec<DependencyTrigger>,
}

impl SettingDescriptor {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    pub fn gui_kind(&self) -> Option<GuiKind> {
        self.gui_kind
    }

    pub fn gui_text(&self) -> Option<&str> {
        self.gui_text.as_deref()
    }

    pub fn tooltip(&self) -> &str {
        &self.tooltip
    }

    pub fn shared(&self) -> bool {
        self.shared
    }

    pub fn cosmetic(&self) -> bool {
        self.cosmetic
    }

    /// GUI-visible descriptors must appear in the layout unless optional
    pub fn is_gui_visible(&self) -> bool {
        self.gui_text.is_some()
    }

    pub fn optional(&self) -> bool {
        self.optional
    }

    pub fn choices(&self) -> &ChoiceTable {
        &self.choices
    }

    pub fn range(&self) -> Option<&NumericRange> {
        self.range.as_ref()
    }

    pub fn default_value(&self) -> &SettingValue {
        &self.default
    }

    pub fn disabled_default(&self) -> &SettingValue {
        &self.disabled_default
    }

    pub fn disable_rules(&self) -> &[DisableRule] {
        &self.disable
    }

    pub fn distribution(&self) -> &[WeightedChoice] {
        &self.distribution
    }

    pub fn randomize_key(&self) -> Option<&str> {
        self.randomize_key.as_deref()
    }

    /// External name table used for choice suggestions
    pub fn name_source(&self) -> Option<NameKind> {
        self.name_source
    }

    pub fn bit_width(&self) -> u32 {
        self.bit_width
    }

    /// Triggers that can disable this setting (OR-composed)
    pub fn dependency(&self) -> &[DependencyTrigger] {
        &self.dependency
    }

    pub(crate) fn disable_rules_mut(&mut self) -> &mut [DisableRule] {
        &mut self.disable
    }

    pub(crate) fn attach_trigger(&mut self, trigger: DependencyTrigger) {
        self.dependency.push(trigger);
    }
}

/// Declarative builder for [`SettingDescriptor`]
///
/// # Example
/// ```rust,ignore
/// let forest = SettingBuilder::combobox(
///     "open_forest",
///     ChoiceSpec::labeled([("open", "Open Forest"), ("closed", "Closed Forest")]),
/// )
/// .gui_text("Forest")
/// .shared()
/// .default("closed")
/// .disable(DisableRule::when("closed").settings(["starting_age"]))
/// .build();
/// ```
#[derive(Debug, Clone)]
pub struct SettingBuilder {
    name: String,
    value_type: ValueType,
    gui_kind: Option<GuiKind>,
    gui_text: Option<String>,
    tooltip: String,
    shared: bool,
    cosmetic: bool,
    optional: bool,
    choices: ChoiceSpec,
    range: Option<NumericRange>,
    /// Scale: regenerate the choice table from the range at build time
    choices_from_range: bool,
    default: Option<SettingValue>,
    disabled_default: Option<SettingValue>,
    disable: Vec<DisableRule>,
    distribution: Option<Vec<WeightedChoice>>,
    randomize_key: Option<String>,
    name_source: Option<NameKind>,
}

impl SettingBuilder {
    /// Raw descriptor with an explicit value type
    pub fn new(name: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            name: name.into(),
            value_type,
            gui_kind: None,
            gui_text: None,
            tooltip: String::new(),
            shared: false,
            cosmetic: false,
            optional: false,
            choices: ChoiceSpec::None,
            range: None,
            choices_from_range: false,
            default: None,
            disabled_default: None,
            disable: Vec::new(),
            distribution: None,
            randomize_key: None,
            name_source: None,
        }
    }

    /// Boolean toggle with choices `true → checked`, `false → unchecked`
    pub fn checkbutton(name: impl Into<String>) -> Self {
        Self::new(name, ValueType::Bool)
            .gui(GuiKind::Checkbutton)
            .choices(ChoiceSpec::Labeled(vec![
                (SettingValue::Bool(true), "checked".to_string()),
                (SettingValue::Bool(false), "unchecked".to_string()),
            ]))
    }

    /// Single text choice
    pub fn combobox(name: impl Into<String>, choices: ChoiceSpec) -> Self {
        Self::new(name, ValueType::Text)
            .gui(GuiKind::Combobox)
            .choices(choices)
    }

    /// Ordered-list selection
    pub fn multiple_select(name: impl Into<String>, choices: ChoiceSpec) -> Self {
        Self::new(name, ValueType::List)
            .gui(GuiKind::MultipleSelect)
            .choices(choices)
    }

    /// Integer slider; every stepped value becomes a choice
    pub fn scale(name: impl Into<String>, min: i64, max: i64) -> Self {
        let mut builder = Self::new(name, ValueType::Int).gui(GuiKind::Scale);
        builder.range = Some(NumericRange::new(min, max));
        builder.choices_from_range = true;
        builder
    }

    /// Integer input limited to a range, without a choice table
    pub fn numeric(name: impl Into<String>, min: i64, max: i64) -> Self {
        let mut builder = Self::new(name, ValueType::Int).gui(GuiKind::Numberinput);
        builder.range = Some(NumericRange::new(min, max));
        builder
    }

    /// Free text input
    pub fn text_input(name: impl Into<String>) -> Self {
        Self::new(name, ValueType::Text).gui(GuiKind::Textinput)
    }

    pub fn gui(mut self, kind: GuiKind) -> Self {
        self.gui_kind = Some(kind);
        self
    }

    pub fn gui_text(mut self, text: impl Into<String>) -> Self {
        self.gui_text = Some(text.into());
        self
    }

    pub fn tooltip(mut self, text: impl Into<String>) -> Self {
        self.tooltip = text.into();
        self
    }

    pub fn shared(mut self) -> Self {
        self.shared = true;
        self
    }

    pub fn cosmetic(mut self) -> Self {
        self.cosmetic = true;
        self
    }

    /// Exempt from the layout membership check
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn choices(mut self, spec: ChoiceSpec) -> Self {
        self.choices = spec;
        self.choices_from_range = false;
        self
    }

    pub fn step(mut self, step: i64) -> Self {
        if let Some(range) = self.range.as_mut() {
            range.step = step.max(1);
        }
        self
    }

    pub fn default(mut self, value: impl Into<SettingValue>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn disabled_default(mut self, value: impl Into<SettingValue>) -> Self {
        self.disabled_default = Some(value.into());
        self
    }

    pub fn disable(mut self, rule: DisableRule) -> Self {
        self.disable.push(rule);
        self
    }

    /// Explicit sampling weights, replacing the uniform default
    pub fn distribution<I, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (V, u32)>,
        V: Into<SettingValue>,
    {
        self.distribution = Some(
            entries
                .into_iter()
                .map(|(value, weight)| WeightedChoice::new(value, weight))
                .collect(),
        );
        self
    }

    /// Master toggle governing whether this setting is randomized
    pub fn randomize_key(mut self, key: impl Into<String>) -> Self {
        self.randomize_key = Some(key.into());
        self
    }

    /// Choices come from game data; suggest from this name table
    pub fn names_from(mut self, kind: NameKind) -> Self {
        self.name_source = Some(kind);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Freeze into a descriptor (dependencies attached later by the registry)
    pub fn build(self) -> SettingDescriptor {
        let spec = if self.choices_from_range {
            match self.range {
                Some(range) => ChoiceSpec::Labeled(
                    range
                        .values()
                        .map(|v| (SettingValue::Int(v), v.to_string()))
                        .collect(),
                ),
                None => self.choices,
            }
        } else {
            self.choices
        };
        let choices = ChoiceTable::from_spec(spec);

        let default = self
            .default
            .unwrap_or_else(|| SettingValue::empty_of(self.value_type));
        let disabled_default = self.disabled_default.unwrap_or_else(|| default.clone());

        let distribution = self.distribution.unwrap_or_else(|| {
            choices
                .values()
                .map(|value| WeightedChoice::new(value.clone(), 1))
                .collect()
        });

        let bit_width =
            compute_bit_width(self.shared, self.value_type, self.range.as_ref(), &choices);

        SettingDescriptor {
            name: self.name,
            value_type: self.value_type,
            gui_kind: self.gui_kind,
            gui_text: self.gui_text,
            tooltip: self.tooltip,
            shared: self.shared,
            cosmetic: self.cosmetic,
            optional: self.optional,
            choices,
            range: self.range,
            default,
            disabled_default,
            disable: self.disable,
            distribution,
            randomize_key: self.randomize_key,
            name_source: self.name_source,
            bit_width,
            dependency: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn combobox(n: usize) -> SettingBuilder {
        let values: Vec<String> = (0..n).map(|i| format!("c{}", i)).collect();
        SettingBuilder::combobox("combo", ChoiceSpec::plain(values))
    }

    #[test]
    fn test_ceil_log2() {
        assert_eq!(ceil_log2(0), 0);
        assert_eq!(ceil_log2(1), 0);
        assert_eq!(ceil_log2(2), 1);
        assert_eq!(ceil_log2(3), 2);
        assert_eq!(ceil_log2(4), 2);
        assert_eq!(ceil_log2(5), 3);
        assert_eq!(ceil_log2(999), 10);
    }

    #[test]
    fn test_unshared_costs_nothing() {
        let d = combobox(8).build();
        assert_eq!(d.bit_width(), 0);
    }

    #[test]
    fn test_single_choice_costs_zero_bits() {
        let d = combobox(1).shared().build();
        assert_eq!(d.bit_width(), 0);
    }

    #[test]
    fn test_empty_choices_cost_zero_bits() {
        let d = SettingBuilder::text_input("user_message").shared().build();
        assert_eq!(d.bit_width(), 0);
    }

    #[test]
    fn test_combobox_width() {
        assert_eq!(combobox(2).shared().build().bit_width(), 1);
        assert_eq!(combobox(3).shared().build().bit_width(), 2);
        assert_eq!(combobox(8).shared().build().bit_width(), 3);
        assert_eq!(combobox(9).shared().build().bit_width(), 4);
    }

    #[test]
    fn test_list_reserves_two_sentinels() {
        let values: Vec<String> = (0..12).map(|i| format!("d{}", i)).collect();
        let d = SettingBuilder::multiple_select("mq_dungeons_specific", ChoiceSpec::plain(values))
            .shared()
            .build();
        // 12 + 2 = 14 codes
        assert_eq!(d.bit_width(), 4);

        let values: Vec<String> = (0..14).map(|i| format!("d{}", i)).collect();
        let d = SettingBuilder::multiple_select("wide", ChoiceSpec::plain(values))
            .shared()
            .build();
        // 14 + 2 = 16 codes
        assert_eq!(d.bit_width(), 4);
    }

    #[test]
    fn test_range_without_table_uses_span() {
        let d = SettingBuilder::numeric("bridge_tokens", 1, 999).shared().build();
        assert!(d.choices().is_empty());
        assert_eq!(d.bit_width(), 10);
    }

    #[test]
    fn test_scale_generates_choice_table() {
        let d = SettingBuilder::scale("trials", 0, 6).shared().default(6).build();
        assert_eq!(d.choices().len(), 7);
        assert_eq!(d.choices().label_of(&SettingValue::Int(3)), Some("3"));
        assert_eq!(d.bit_width(), 3);
    }

    #[test]
    fn test_scale_step() {
        let d = SettingBuilder::scale("chicken_count", 0, 20).step(5).shared().build();
        let values: Vec<SettingValue> = d.choices().values().cloned().collect();
        assert_eq!(
            values,
            vec![
                SettingValue::Int(0),
                SettingValue::Int(5),
                SettingValue::Int(10),
                SettingValue::Int(15),
                SettingValue::Int(20)
            ]
        );
        assert_eq!(d.bit_width(), 3);
    }

    #[test]
    fn test_checkbutton_defaults() {
        let d = SettingBuilder::checkbutton("free_scarecrow").shared().build();
        assert_eq!(d.default_value(), &SettingValue::Bool(false));
        assert_eq!(d.disabled_default(), &SettingValue::Bool(false));
        assert_eq!(d.choices().label_of(&SettingValue::Bool(true)), Some("checked"));
        assert_eq!(d.bit_width(), 1);
    }

    #[test]
    fn test_disabled_default_falls_back_to_default() {
        let d = combobox(3).default("c1").build();
        assert_eq!(d.disabled_default(), &SettingValue::from("c1"));

        let d = combobox(3).default("c1").disabled_default("c0").build();
        assert_eq!(d.disabled_default(), &SettingValue::from("c0"));
    }

    #[test]
    fn test_uniform_distribution_follows_declaration_order() {
        let d = combobox(3).build();
        let weights: Vec<(String, u32)> = d
            .distribution()
            .iter()
            .map(|w| (w.value.label_text(), w.weight))
            .collect();
        assert_eq!(
            weights,
            vec![
                ("c0".to_string(), 1),
                ("c1".to_string(), 1),
                ("c2".to_string(), 1)
            ]
        );
    }

    #[test]
    fn test_explicit_distribution_replaces_uniform() {
        let d = combobox(3).distribution([("c0", 2), ("c2", 0)]).build();
        assert_eq!(d.distribution().len(), 2);
        assert_eq!(d.distribution()[0].weight, 2);
    }
}
