//! Other tab: timesavers, hints, difficulty

use crate::schema::{ChoiceSpec, DisableRule, SettingBuilder, SettingValue, ValueType};

pub(super) fn settings() -> Vec<SettingBuilder> {
    vec![
        SettingBuilder::checkbutton("no_escape_sequence")
            .gui_text("Skip Tower Escape Sequence")
            .shared(),
        SettingBuilder::checkbutton("fast_chests")
            .gui_text("Fast Chest Cutscenes")
            .shared()
            .default(true),
        SettingBuilder::checkbutton("free_scarecrow")
            .gui_text("Free Scarecrow's Song")
            .shared(),
        SettingBuilder::checkbutton("chicken_count_random")
            .gui_text("Random Cucco Count")
            .shared()
            .disable(DisableRule::when(true).settings(["chicken_count"])),
        SettingBuilder::scale("chicken_count", 0, 7)
            .gui_text("Cucco Count")
            .shared()
            .default(SettingValue::Int(7)),
        SettingBuilder::combobox(
            "hints",
            ChoiceSpec::labeled([
                ("none", "No Hints"),
                ("mask", "Hints; Need Mask of Truth"),
                ("agony", "Hints; Need Stone of Agony"),
                ("always", "Hints; Need Nothing"),
            ]),
        )
        .gui_text("Gossip Stones")
        .shared()
        .default("always"),
        SettingBuilder::combobox(
            "hint_dist",
            ChoiceSpec::labeled([
                ("balanced", "Balanced"),
                ("bingo", "Bingo"),
                ("strong", "Strong"),
                ("tournament", "Tournament"),
                ("useless", "Useless"),
                ("very_strong", "Very Strong"),
            ]),
        )
        .gui_text("Hint Distribution")
        .shared()
        .default("balanced")
        .disable(DisableRule::from_key("!bingo").settings(["bingosync_url"])),
        SettingBuilder::text_input("bingosync_url").gui_text("Bingosync URL"),
        SettingBuilder::combobox(
            "damage_multiplier",
            ChoiceSpec::labeled([
                ("half", "Half"),
                ("normal", "Normal"),
                ("double", "Double"),
                ("quadruple", "Quadruple"),
                ("ohko", "OHKO"),
            ]),
        )
        .gui_text("Damage Multiplier")
        .shared()
        .default("normal"),
        SettingBuilder::combobox(
            "item_pool_value",
            ChoiceSpec::labeled([
                ("ludicrous", "Ludicrous"),
                ("plentiful", "Plentiful"),
                ("balanced", "Balanced"),
                ("scarce", "Scarce"),
                ("minimal", "Minimal"),
            ]),
        )
        .gui_text("Item Pool")
        .shared()
        .default("balanced"),
        // Custom hint distribution document, never shown in the GUI
        SettingBuilder::new("hint_dist_user", ValueType::Map),
    ]
}
