//! Cosmetics tab. Nothing here is shared.

use crate::schema::{ChoiceSpec, DisableRule, SettingBuilder};

const TUNIC_COLORS: [&str; 8] = [
    "Random Choice",
    "Completely Random",
    "Kokiri Green",
    "Goron Red",
    "Zora Blue",
    "Black",
    "White",
    "Purple",
];

fn tunic(name: &str, text: &str, default: &str) -> SettingBuilder {
    SettingBuilder::combobox(name, ChoiceSpec::plain(TUNIC_COLORS))
        .gui_text(text)
        .cosmetic()
        .default(default)
        .randomize_key("randomize_all_cosmetics")
        .distribution([("Completely Random", 1)])
}

pub(super) fn settings() -> Vec<SettingBuilder> {
    vec![
        SettingBuilder::checkbutton("randomize_all_cosmetics")
            .gui_text("Randomize All Cosmetics")
            .cosmetic()
            .disable(DisableRule::when(true).sections(["tunic_color_section"])),
        tunic("kokiri_color", "Kokiri Tunic", "Kokiri Green"),
        tunic("goron_color", "Goron Tunic", "Goron Red"),
        tunic("zora_color", "Zora Tunic", "Zora Blue"),
        SettingBuilder::combobox(
            "background_music",
            ChoiceSpec::labeled([
                ("normal", "Normal"),
                ("off", "No Music"),
                ("random", "Random"),
            ]),
        )
        .gui_text("Background Music")
        .cosmetic()
        .default("normal"),
    ]
}
