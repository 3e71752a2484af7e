//! Registry and configuration fixtures

use settings_core::catalog::shared_registry;
use settings_core::layout::{LayoutSection, LayoutTab};
use settings_core::{
    ChoiceSpec, Configuration, DisableRule, SettingBuilder, SettingValue, SettingsLayout,
    SettingsRegistry,
};

/// The standard table, built once per test binary
pub fn standard() -> &'static SettingsRegistry {
    shared_registry().unwrap()
}

/// Single tab, single section layout holding `settings`
pub fn flat_layout(settings: &[&str]) -> SettingsLayout {
    SettingsLayout {
        tabs: vec![LayoutTab {
            name: "main_tab".to_string(),
            text: None,
            sections: vec![LayoutSection {
                name: "main_section".to_string(),
                text: None,
                settings: settings.iter().map(|s| s.to_string()).collect(),
            }],
        }],
    }
}

/// `gate` (checkbutton) disables `target` (x/y/z, disabled default x);
/// `door` ("!open") disables `room`
pub fn rule_registry() -> SettingsRegistry {
    SettingsRegistry::builder(flat_layout(&["gate", "target", "door", "room"]))
        .setting(
            SettingBuilder::checkbutton("gate")
                .shared()
                .disable(DisableRule::when(true).settings(["target"])),
        )
        .setting(
            SettingBuilder::combobox("target", ChoiceSpec::plain(["x", "y", "z"]))
                .shared()
                .default("y")
                .disabled_default("x"),
        )
        .setting(
            SettingBuilder::combobox("door", ChoiceSpec::plain(["open", "closed", "ajar"]))
                .shared()
                .default("open")
                .disable(DisableRule::from_key("!open").settings(["room"])),
        )
        .setting(SettingBuilder::checkbutton("room").shared())
        .build()
        .unwrap()
}

/// Defaults with `overrides` applied on top
pub fn defaults_with(
    registry: &SettingsRegistry,
    overrides: &[(&str, SettingValue)],
) -> Configuration {
    let mut config = Configuration::defaults(registry);
    for (name, value) in overrides {
        config.insert(*name, value.clone());
    }
    config
}

/// Plain string list value
pub fn list(values: &[&str]) -> SettingValue {
    SettingValue::List(values.iter().map(|v| SettingValue::from(*v)).collect())
}
