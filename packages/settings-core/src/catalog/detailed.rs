//! Detailed logic tab: tricks, exclusions, starting inventory

use crate::names::NameKind;
use crate::schema::{ChoiceSpec, GuiKind, SettingBuilder, SettingValue, ValueType};

const TRICKS: [(&str, &str); 8] = [
    ("logic_fewer_tunic_requirements", "Fewer Tunic Requirements"),
    ("logic_grottos_without_agony", "Hidden Grottos without Stone of Agony"),
    ("logic_child_deadhand", "Child Dead Hand without Kokiri Sword"),
    ("logic_man_on_roof", "Man on Roof without Hookshot"),
    ("logic_dc_jump", "Dodongo's Cavern Spike Trap Room Jump"),
    ("logic_rusted_switches", "Hammer Rusted Switches Through Walls"),
    ("logic_windmill_poh", "Windmill PoH as Adult with Nothing"),
    ("logic_crater_bean_poh_with_hovers", "Crater's Bean PoH with Hover Boots"),
];

const LOCATIONS: [&str; 8] = [
    "Deku Theater Mask of Truth",
    "Queen Gohma",
    "Song from Impa",
    "Sheik in Ice Cavern",
    "Kak 50 Gold Skulltula Reward",
    "Market Treasure Chest Game Reward",
    "ZR Frogs Ocarina Game",
    "GF HBA 1500 Points",
];

const EQUIPMENT: [(&str, &str); 6] = [
    ("kokiri_sword", "Kokiri Sword"),
    ("giants_knife", "Giant's Knife"),
    ("deku_shield", "Deku Shield"),
    ("hylian_shield", "Hylian Shield"),
    ("goron_tunic", "Goron Tunic"),
    ("zora_tunic", "Zora Tunic"),
];

const SONGS: [(&str, &str); 6] = [
    ("lullaby", "Zelda's Lullaby"),
    ("eponas_song", "Epona's Song"),
    ("sarias_song", "Saria's Song"),
    ("suns_song", "Sun's Song"),
    ("song_of_time", "Song of Time"),
    ("song_of_storms", "Song of Storms"),
];

const INVENTORY: [(&str, &str); 8] = [
    ("deku_stick", "Deku Sticks"),
    ("deku_nut", "Deku Nuts"),
    ("bombs", "Bombs"),
    ("bow", "Fairy Bow"),
    ("slingshot", "Fairy Slingshot"),
    ("bombchus", "Bombchus"),
    ("hookshot", "Hookshot"),
    ("ocarina", "Ocarina"),
];

pub(super) fn settings() -> Vec<SettingBuilder> {
    vec![
        SettingBuilder::multiple_select("allowed_tricks", ChoiceSpec::labeled(TRICKS))
            .gui(GuiKind::SearchBox)
            .gui_text("Enable Tricks")
            .shared(),
        SettingBuilder::new("tricks_list_msg", ValueType::Text)
            .gui(GuiKind::Textbox)
            .gui_text("Your current logic setting does not support the enabling of tricks."),
        SettingBuilder::multiple_select("disabled_locations", ChoiceSpec::plain(LOCATIONS))
            .gui(GuiKind::SearchBox)
            .gui_text("Exclude Locations")
            .shared()
            .names_from(NameKind::Location),
        SettingBuilder::multiple_select("starting_equipment", ChoiceSpec::labeled(EQUIPMENT))
            .gui(GuiKind::SearchBox)
            .gui_text("Starting Equipment")
            .shared(),
        SettingBuilder::multiple_select("starting_songs", ChoiceSpec::labeled(SONGS))
            .gui(GuiKind::SearchBox)
            .gui_text("Starting Songs")
            .shared(),
        // Override documents may give per-item counts instead of a list
        SettingBuilder::new("starting_items", ValueType::ListOrMap)
            .gui(GuiKind::SearchBox)
            .gui_text("Starting Items")
            .choices(ChoiceSpec::labeled(INVENTORY))
            .shared()
            .names_from(NameKind::Item),
        SettingBuilder::scale("starting_hearts", 3, 20)
            .gui_text("Starting Hearts")
            .shared()
            .default(SettingValue::Int(3)),
        SettingBuilder::checkbutton("start_with_consumables")
            .gui_text("Start with Consumables")
            .shared(),
    ]
}
