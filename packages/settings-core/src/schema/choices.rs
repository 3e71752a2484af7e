//! Choice tables
//!
//! A choice table is an ordered, bidirectional value ↔ label mapping.
//! Declaration order is canonical: it defines the settings-string indices
//! and the default uniform distribution.

use super::value::SettingValue;
use serde::{Deserialize, Serialize};

/// Choice table as declared
#[derive(Debug, Clone, PartialEq)]
pub enum ChoiceSpec {
    /// No choice table (free text, mappings, range-only numbers)
    None,
    /// Self-labeled values
    Plain(Vec<SettingValue>),
    /// Explicit value → label pairs
    Labeled(Vec<(SettingValue, String)>),
}

impl ChoiceSpec {
    /// Self-labeled text choices
    pub fn plain<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SettingValue>,
    {
        Self::Plain(values.into_iter().map(Into::into).collect())
    }

    /// Text choices with explicit labels
    pub fn labeled<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self::Labeled(
            pairs
                .into_iter()
                .map(|(value, label)| (SettingValue::from(value), label.to_string()))
                .collect(),
        )
    }
}

/// One entry of a choice table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    pub value: SettingValue,
    pub label: String,
}

/// Normalized, ordered choice table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChoiceTable {
    entries: Vec<Choice>,
}

impl ChoiceTable {
    /// Normalize a declaration, keeping declaration order
    pub fn from_spec(spec: ChoiceSpec) -> Self {
        let entries = match spec {
            ChoiceSpec::None => Vec::new(),
            ChoiceSpec::Plain(values) => values
                .into_iter()
                .map(|value| Choice {
                    label: value.label_text(),
                    value,
                })
                .collect(),
            ChoiceSpec::Labeled(pairs) => pairs
                .into_iter()
                .map(|(value, label)| Choice { value, label })
                .collect(),
        };
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Choice] {
        &self.entries
    }

    pub fn values(&self) -> impl Iterator<Item = &SettingValue> {
        self.entries.iter().map(|c| &c.value)
    }

    pub fn get(&self, index: usize) -> Option<&Choice> {
        self.entries.get(index)
    }

    /// Canonical index of a value
    pub fn index_of(&self, value: &SettingValue) -> Option<usize> {
        self.entries.iter().position(|c| &c.value == value)
    }

    pub fn contains(&self, value: &SettingValue) -> bool {
        self.index_of(value).is_some()
    }

    /// value → label
    pub fn label_of(&self, value: &SettingValue) -> Option<&str> {
        self.entries
            .iter()
            .find(|c| &c.value == value)
            .map(|c| c.label.as_str())
    }

    /// label → value
    pub fn value_of(&self, label: &str) -> Option<&SettingValue> {
        self.entries
            .iter()
            .find(|c| c.label == label)
            .map(|c| &c.value)
    }

    /// Choice values rendered as plain strings, for suggestions
    pub fn value_labels(&self) -> Vec<String> {
        self.entries.iter().map(|c| c.value.label_text()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_choices_are_self_labeled() {
        let table = ChoiceTable::from_spec(ChoiceSpec::plain(["child", "adult", "random"]));
        assert_eq!(table.len(), 3);
        assert_eq!(table.label_of(&"adult".into()), Some("adult"));
        assert_eq!(table.index_of(&"random".into()), Some(2));
    }

    #[test]
    fn test_labeled_choices_are_bidirectional() {
        let table = ChoiceTable::from_spec(ChoiceSpec::labeled([
            ("open", "Open Forest"),
            ("closed_deku", "Closed Deku"),
            ("closed", "Closed Forest"),
        ]));

        assert_eq!(table.label_of(&"closed_deku".into()), Some("Closed Deku"));
        assert_eq!(table.value_of("Closed Forest"), Some(&SettingValue::from("closed")));
        assert_eq!(table.value_of("Nope"), None);
    }

    #[test]
    fn test_declaration_order_preserved() {
        let table = ChoiceTable::from_spec(ChoiceSpec::labeled([
            ("z", "Z"),
            ("a", "A"),
            ("m", "M"),
        ]));
        let order: Vec<String> = table.value_labels();
        assert_eq!(order, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_empty_table() {
        let table = ChoiceTable::from_spec(ChoiceSpec::None);
        assert!(table.is_empty());
        assert!(!table.contains(&"anything".into()));
    }
}
