//! Settings layout document
//!
//! Groups setting names into sections nested in tabs. The core only uses it
//! to resolve group-valued disable targets and to check that every
//! GUI-visible setting is placed somewhere.
//!
//! ```json
//! { "Tabs": [ { "name": "main_tab", "text": "Main Rules",
//!               "sections": [ { "name": "open_section", "settings": ["open_forest"] } ] } ] }
//! ```

use crate::errors::SettingsResult;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SettingsLayout {
    #[serde(rename = "Tabs")]
    pub tabs: Vec<LayoutTab>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutTab {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default)]
    pub sections: Vec<LayoutSection>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSection {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default)]
    pub settings: Vec<String>,
}

impl SettingsLayout {
    pub fn from_json_str(json: &str) -> SettingsResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Settings of the first section with this name, in layout order
    pub fn settings_in_section(&self, section_name: &str) -> Option<Vec<&str>> {
        self.tabs
            .iter()
            .flat_map(|tab| tab.sections.iter())
            .find(|section| section.name == section_name)
            .map(|section| section.settings.iter().map(String::as_str).collect())
    }

    /// Settings of every section of the first tab with this name
    pub fn settings_in_tab(&self, tab_name: &str) -> Option<Vec<&str>> {
        self.tabs.iter().find(|tab| tab.name == tab_name).map(|tab| {
            tab.sections
                .iter()
                .flat_map(|section| section.settings.iter().map(String::as_str))
                .collect()
        })
    }

    /// Whether the setting appears in any section
    pub fn is_mapped(&self, setting_name: &str) -> bool {
        self.tabs
            .iter()
            .flat_map(|tab| tab.sections.iter())
            .any(|section| section.settings.iter().any(|s| s == setting_name))
    }

    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.tabs
            .iter()
            .flat_map(|tab| tab.sections.iter().map(|s| s.name.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAYOUT: &str = r#"{
        "Tabs": [
            { "name": "main_tab", "text": "Main Rules", "sections": [
                { "name": "open_section", "settings": ["open_forest", "open_kakariko"] },
                { "name": "shuffle_section", "settings": ["shuffle_song_items"] }
            ]},
            { "name": "other_tab", "sections": [
                { "name": "hints_section", "settings": ["hints"] }
            ]}
        ]
    }"#;

    #[test]
    fn test_parse_and_query_sections() {
        let layout = SettingsLayout::from_json_str(LAYOUT).unwrap();
        assert_eq!(
            layout.settings_in_section("open_section"),
            Some(vec!["open_forest", "open_kakariko"])
        );
        assert_eq!(layout.settings_in_section("missing"), None);
    }

    #[test]
    fn test_tab_flattens_sections_in_order() {
        let layout = SettingsLayout::from_json_str(LAYOUT).unwrap();
        assert_eq!(
            layout.settings_in_tab("main_tab"),
            Some(vec!["open_forest", "open_kakariko", "shuffle_song_items"])
        );
        assert_eq!(layout.settings_in_tab("cosmetics_tab"), None);
    }

    #[test]
    fn test_is_mapped() {
        let layout = SettingsLayout::from_json_str(LAYOUT).unwrap();
        assert!(layout.is_mapped("hints"));
        assert!(!layout.is_mapped("hint_dist_user"));
    }

    #[test]
    fn test_malformed_layout_is_json_error() {
        let err = SettingsLayout::from_json_str("{\"tabs\": []}").unwrap_err();
        assert!(err.to_string().contains("JSON parsing error"));
    }
}
