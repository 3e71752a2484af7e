//! Setting provenance
//!
//! Records where each value of an active configuration came from: registry
//! default, named preset, override document, settings string or a
//! command-line assignment. Settings without a record are at their default.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

static DEFAULT_SOURCE: SettingSource = SettingSource::Default;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigProvenance {
    /// Preset the configuration started from, if any
    base_preset: Option<String>,

    /// setting name → source
    sources: HashMap<String, SettingSource>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SettingSource {
    Default,
    Preset(String),
    Override { document: String },
    SettingsString,
    CommandLine,
}

impl ConfigProvenance {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_preset(name: impl Into<String>) -> Self {
        Self {
            base_preset: Some(name.into()),
            sources: HashMap::new(),
        }
    }

    pub fn base_preset(&self) -> Option<&str> {
        self.base_preset.as_deref()
    }

    /// Record (or replace) the source of one setting
    pub fn track(&mut self, setting: &str, source: SettingSource) {
        self.sources.insert(setting.to_string(), source);
    }

    /// Source of `setting`; untracked settings report `Default`
    pub fn source_of(&self, setting: &str) -> &SettingSource {
        self.sources.get(setting).unwrap_or(&DEFAULT_SOURCE)
    }

    pub fn tracked(&self) -> &HashMap<String, SettingSource> {
        &self.sources
    }

    /// Human-readable summary, sorted by setting name
    pub fn summary(&self) -> String {
        let mut lines = vec![match &self.base_preset {
            Some(name) => format!("Base preset: {}", name),
            None => "Base preset: (defaults)".to_string(),
        }];

        if !self.sources.is_empty() {
            lines.push("Changed settings:".to_string());
            let mut sorted: Vec<_> = self.sources.iter().collect();
            sorted.sort_by_key(|(name, _)| *name);
            for (name, source) in sorted {
                lines.push(format!("  {} ← {}", name, source));
            }
        }

        lines.join("\n")
    }
}

impl SettingSource {
    /// Short machine-friendly form (`preset:beginner`)
    pub fn describe(&self) -> String {
        match self {
            Self::Default => "default".to_string(),
            Self::Preset(name) => format!("preset:{}", name),
            Self::Override { document } => format!("override:{}", document),
            Self::SettingsString => "settings-string".to_string(),
            Self::CommandLine => "command-line".to_string(),
        }
    }
}

impl fmt::Display for SettingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => write!(f, "default"),
            Self::Preset(name) => write!(f, "preset '{}'", name),
            Self::Override { document } => write!(f, "{}", document),
            Self::SettingsString => write!(f, "settings string"),
            Self::CommandLine => write!(f, "command line"),
        }
    }
}
