//! Settings error types
//!
//! Validation errors (`UnknownSetting`, `TypeMismatch`, `InvalidChoice`,
//! `Conflict`) describe bad user input and carry enough context to fix it.
//! `Integrity` is only raised while the registry is being built and always
//! means the static setting table itself is wrong.

use thiserror::Error;

/// Settings error type
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Setting name not present in the registry
    #[error("'{name}' is not a valid setting.{}", with_space(.suggestion))]
    UnknownSetting { name: String, suggestion: String },

    /// Value shape does not match the descriptor's value type
    #[error(
        "Supplied choice {value} for setting '{setting}' is of type {found}, expecting {expected}"
    )]
    TypeMismatch {
        setting: String,
        value: String,
        found: &'static str,
        expected: &'static str,
    },

    /// Value (or one list element) is not in the choice table
    #[error("{value} is not a valid choice for setting '{setting}'.{}", with_space(.suggestion))]
    InvalidChoice {
        setting: String,
        value: String,
        suggestion: String,
    },

    /// A disable rule fired but its target holds a non-disabled value
    #[error(
        "The '{other_setting}' setting cannot be {other_value} since '{setting}' is set to {value} (rule: {rule})"
    )]
    Conflict {
        setting: String,
        value: String,
        other_setting: String,
        other_value: String,
        rule: String,
    },

    /// Static setting table is inconsistent (construction only)
    #[error("Settings table integrity error: {0}")]
    Integrity(String),

    /// Settings string contains an invalid character or index
    #[error("Invalid settings string: {reason}")]
    InvalidEncoding { reason: String },

    /// Settings string ended in the middle of a field
    #[error("Settings string ended while decoding '{setting}'")]
    TruncatedEncoding { setting: String },

    /// Unsupported preset document version
    #[error("Unsupported preset document version {found}. Supported versions: {}", supported.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(", "))]
    UnsupportedVersion { found: u32, supported: Vec<u32> },

    /// Unknown preset name
    #[error("Unknown preset '{name}'.{}", with_space(.suggestion))]
    UnknownPreset { name: String, suggestion: String },

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Settings result type
pub type SettingsResult<T> = Result<T, SettingsError>;

fn with_space(suggestion: &str) -> String {
    if suggestion.is_empty() {
        String::new()
    } else {
        format!(" {}", suggestion)
    }
}

impl SettingsError {
    /// Create an integrity error
    pub fn integrity(msg: impl Into<String>) -> Self {
        Self::Integrity(msg.into())
    }

    /// Create an encoding error
    pub fn invalid_encoding(reason: impl Into<String>) -> Self {
        Self::InvalidEncoding {
            reason: reason.into(),
        }
    }

    /// Whether the caller can fix this by changing its input.
    ///
    /// Only `Integrity` is fatal: it indicates a bug in the static table.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Integrity(_))
    }

    /// Setting name this error is about, if any
    pub fn setting(&self) -> Option<&str> {
        match self {
            Self::UnknownSetting { name, .. } => Some(name),
            Self::TypeMismatch { setting, .. }
            | Self::InvalidChoice { setting, .. }
            | Self::Conflict { setting, .. }
            | Self::TruncatedEncoding { setting } => Some(setting),
            _ => None,
        }
    }
}
