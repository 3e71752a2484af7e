//! Setting value model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Runtime value of one setting.
///
/// Deserializes from the natural JSON/YAML shape: `true`, `6`, `"open"`,
/// `["Deku Tree", ...]`, `{"Bombchus": 20}`. Anything else (floats,
/// `null`) lands in `Unsupported` so validation can name the setting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Bool(bool),
    Int(i64),
    Text(String),
    List(Vec<SettingValue>),
    Map(serde_json::Map<String, serde_json::Value>),
    Unsupported(serde_json::Value),
}

impl SettingValue {
    /// Shape name used in type-mismatch messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Text(_) => "text",
            Self::List(_) => "list",
            Self::Map(_) => "mapping",
            Self::Unsupported(serde_json::Value::Null) => "null",
            Self::Unsupported(serde_json::Value::Number(_)) => "float",
            Self::Unsupported(_) => "value",
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[SettingValue]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&serde_json::Map<String, serde_json::Value>> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Plain label for self-labeled choices (`open` → "open", `6` → "6")
    pub fn label_text(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            other => other.to_string(),
        }
    }

    /// Empty value of the given type
    pub fn empty_of(value_type: ValueType) -> Self {
        match value_type {
            ValueType::Bool => Self::Bool(false),
            ValueType::Int => Self::Int(0),
            ValueType::Text => Self::Text(String::new()),
            ValueType::List | ValueType::ListOrMap => Self::List(Vec::new()),
            ValueType::Map => Self::Map(serde_json::Map::new()),
        }
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{}", b),
            Self::Int(i) => write!(f, "{}", i),
            Self::Text(s) => write!(f, "'{}'", s),
            Self::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Self::Map(map) => write!(f, "{}", serde_json::Value::Object(map.clone())),
            Self::Unsupported(raw) => write!(f, "{}", raw),
        }
    }
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for SettingValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<SettingValue>> for SettingValue {
    fn from(value: Vec<SettingValue>) -> Self {
        Self::List(value)
    }
}

/// Declared value type of a descriptor.
///
/// `ListOrMap` is the one type that accepts two shapes: the ordered-list
/// selection the GUI produces, or a raw mapping from override documents
/// (e.g. per-item starting counts).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueType {
    Bool,
    Int,
    Text,
    List,
    Map,
    ListOrMap,
}

impl ValueType {
    /// Whether `value` has an acceptable runtime shape for this type
    pub fn accepts(&self, value: &SettingValue) -> bool {
        matches!(
            (self, value),
            (Self::Bool, SettingValue::Bool(_))
                | (Self::Int, SettingValue::Int(_))
                | (Self::Text, SettingValue::Text(_))
                | (Self::List, SettingValue::List(_))
                | (Self::Map, SettingValue::Map(_))
                | (Self::ListOrMap, SettingValue::List(_))
                | (Self::ListOrMap, SettingValue::Map(_))
        )
    }

    /// List-typed for bit-width purposes (two sentinel codes reserved)
    pub fn is_list(&self) -> bool {
        matches!(self, Self::List | Self::ListOrMap)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Text => "text",
            Self::List => "list",
            Self::Map => "mapping",
            Self::ListOrMap => "list",
        }
    }
}
