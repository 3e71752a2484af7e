//! Main rules tab

use crate::schema::{ChoiceSpec, DisableRule, SettingBuilder, SettingValue};

const RANDOMIZE_KEY: &str = "randomize_settings";

const KEY_PLACEMENT: [(&str, &str); 7] = [
    ("remove", "Remove (Keysy)"),
    ("vanilla", "Vanilla Locations"),
    ("dungeon", "Own Dungeon"),
    ("regional", "Regional"),
    ("overworld", "Overworld Only"),
    ("any_dungeon", "Any Dungeon"),
    ("keysanity", "Anywhere (Keysanity)"),
];

pub(super) fn settings() -> Vec<SettingBuilder> {
    let mut settings = rules_section();
    settings.extend(open_section());
    settings.extend(world_section());
    settings.extend(shuffle_section());
    settings.extend(dungeon_items_section());
    settings
}

fn rules_section() -> Vec<SettingBuilder> {
    vec![
        SettingBuilder::checkbutton("randomize_settings")
            .gui_text("Randomize Main Rule Settings")
            .tooltip("Randomizes most settings on the 'Main Rules' tab.")
            .shared()
            .disable(
                DisableRule::when(true).sections(["shuffle_section"]).settings([
                    "open_forest",
                    "open_kakariko",
                    "open_door_of_time",
                    "zora_fountain",
                    "gerudo_fortress",
                    "bridge",
                    "bridge_medallions",
                    "bridge_stones",
                    "bridge_rewards",
                    "trials_random",
                    "trials",
                    "starting_age",
                    "shuffle_interior_entrances",
                    "shuffle_dungeon_entrances",
                    "shuffle_overworld_entrances",
                    "owl_drops",
                    "warp_songs",
                    "triforce_hunt",
                    "triforce_count_per_world",
                    "triforce_goal_per_world",
                    "shuffle_mapcompass",
                    "shuffle_smallkeys",
                    "shuffle_hideoutkeys",
                    "shuffle_bosskeys",
                    "shuffle_ganon_bosskey",
                ]),
            ),
        SettingBuilder::combobox(
            "logic_rules",
            ChoiceSpec::labeled([
                ("glitchless", "Glitchless"),
                ("glitched", "Glitched"),
                ("none", "No Logic"),
            ]),
        )
        .gui_text("Logic Rules")
        .tooltip("Rules the generator uses to guarantee a beatable seed.")
        .shared()
        .default("glitchless")
        .disable(DisableRule::when("glitchless").settings(["tricks_list_msg"]))
        .disable(DisableRule::when("glitched").settings([
            "allowed_tricks",
            "shuffle_interior_entrances",
            "shuffle_dungeon_entrances",
            "shuffle_overworld_entrances",
            "owl_drops",
            "warp_songs",
            "mq_dungeons_mode",
            "mq_dungeons_specific",
            "mq_dungeons_count",
        ]))
        .disable(DisableRule::when("none").settings(["allowed_tricks", "reachable_locations"])),
        SettingBuilder::combobox(
            "reachable_locations",
            ChoiceSpec::labeled([
                ("all", "All"),
                ("goals", "All Goals"),
                ("beatable", "Required Only"),
            ]),
        )
        .gui_text("Guarantee Reachable Locations")
        .shared()
        .default("all"),
        SettingBuilder::checkbutton("triforce_hunt")
            .gui_text("Triforce Hunt")
            .tooltip("Find pieces of the Triforce to beat the game.")
            .shared()
            .randomize_key(RANDOMIZE_KEY)
            .disable(DisableRule::when(true).settings(["shuffle_ganon_bosskey"]))
            .disable(
                DisableRule::when(false)
                    .settings(["triforce_count_per_world", "triforce_goal_per_world"]),
            ),
        SettingBuilder::scale("triforce_count_per_world", 1, 999)
            .gui_text("Triforces Per World")
            .shared()
            .default(SettingValue::Int(30)),
        SettingBuilder::scale("triforce_goal_per_world", 1, 999)
            .gui_text("Required Triforces Per World")
            .shared()
            .default(SettingValue::Int(20)),
    ]
}

fn open_section() -> Vec<SettingBuilder> {
    vec![
        SettingBuilder::combobox(
            "open_forest",
            ChoiceSpec::labeled([
                ("open", "Open Forest"),
                ("closed_deku", "Closed Deku"),
                ("closed", "Closed Forest"),
            ]),
        )
        .gui_text("Forest")
        .shared()
        .default("closed")
        .randomize_key(RANDOMIZE_KEY)
        .disable(DisableRule::when("closed").settings(["starting_age"])),
        SettingBuilder::combobox(
            "open_kakariko",
            ChoiceSpec::labeled([
                ("open", "Open Gate"),
                ("zelda", "Zelda's Letter Opens Gate"),
                ("closed", "Closed Gate"),
            ]),
        )
        .gui_text("Kakariko Gate")
        .shared()
        .default("closed")
        .randomize_key(RANDOMIZE_KEY),
        SettingBuilder::checkbutton("open_door_of_time")
            .gui_text("Open Door of Time")
            .shared()
            .randomize_key(RANDOMIZE_KEY),
        SettingBuilder::combobox(
            "zora_fountain",
            ChoiceSpec::labeled([
                ("closed", "Default Behavior (Closed)"),
                ("adult", "Open For Adult"),
                ("open", "Always Open"),
            ]),
        )
        .gui_text("Zora's Fountain")
        .shared()
        .default("closed")
        .randomize_key(RANDOMIZE_KEY),
        SettingBuilder::combobox(
            "gerudo_fortress",
            ChoiceSpec::labeled([
                ("normal", "Default Behavior"),
                ("fast", "Rescue One Carpenter"),
                ("open", "Open Gerudo's Fortress"),
            ]),
        )
        .gui_text("Gerudo's Fortress")
        .shared()
        .default("normal")
        .randomize_key(RANDOMIZE_KEY)
        .disable(DisableRule::when("open").settings(["shuffle_hideoutkeys"])),
        SettingBuilder::combobox(
            "bridge",
            ChoiceSpec::labeled([
                ("open", "Always Open"),
                ("vanilla", "Vanilla Requirements"),
                ("stones", "Spiritual Stones"),
                ("medallions", "Medallions"),
                ("dungeons", "Dungeons"),
                ("tokens", "Gold Skulltula Tokens"),
                ("hearts", "Hearts"),
            ]),
        )
        .gui_text("Rainbow Bridge Requirement")
        .shared()
        .default("medallions")
        .randomize_key(RANDOMIZE_KEY)
        .distribution([
            ("open", 1),
            ("vanilla", 1),
            ("stones", 1),
            ("medallions", 1),
            ("dungeons", 1),
            ("tokens", 0),
            ("hearts", 0),
        ])
        .disable(DisableRule::from_key("!stones").settings(["bridge_stones"]))
        .disable(DisableRule::from_key("!medallions").settings(["bridge_medallions"]))
        .disable(DisableRule::from_key("!dungeons").settings(["bridge_rewards"]))
        .disable(DisableRule::from_key("!tokens").settings(["bridge_tokens"]))
        .disable(DisableRule::from_key("!hearts").settings(["bridge_hearts"])),
        SettingBuilder::scale("bridge_medallions", 1, 6)
            .gui_text("Medallions Required for Bridge")
            .shared()
            .default(SettingValue::Int(6))
            .randomize_key(RANDOMIZE_KEY)
            .distribution([(SettingValue::Int(6), 1)]),
        SettingBuilder::scale("bridge_stones", 1, 3)
            .gui_text("Spiritual Stones Required for Bridge")
            .shared()
            .default(SettingValue::Int(3))
            .randomize_key(RANDOMIZE_KEY)
            .distribution([(SettingValue::Int(3), 1)]),
        SettingBuilder::scale("bridge_rewards", 1, 9)
            .gui_text("Dungeon Rewards Required for Bridge")
            .shared()
            .default(SettingValue::Int(9))
            .randomize_key(RANDOMIZE_KEY)
            .distribution([(SettingValue::Int(9), 1)]),
        SettingBuilder::scale("bridge_tokens", 1, 999)
            .gui_text("Skulltulas Required for Bridge")
            .shared()
            .default(SettingValue::Int(100)),
        SettingBuilder::scale("bridge_hearts", 4, 20)
            .gui_text("Hearts Required for Bridge")
            .shared()
            .default(SettingValue::Int(20)),
        SettingBuilder::checkbutton("trials_random")
            .gui_text("Random Number of Ganon's Trials")
            .shared()
            .randomize_key(RANDOMIZE_KEY)
            .distribution([(true, 1)])
            .disable(DisableRule::when(true).settings(["trials"])),
        SettingBuilder::scale("trials", 0, 6)
            .gui_text("Ganon's Trials Count")
            .shared()
            .default(SettingValue::Int(6)),
    ]
}

fn world_section() -> Vec<SettingBuilder> {
    let dungeons = [
        ("Deku Tree", "Deku Tree"),
        ("Dodongos Cavern", "Dodongo's Cavern"),
        ("Jabu Jabus Belly", "Jabu Jabu's Belly"),
        ("Forest Temple", "Forest Temple"),
        ("Fire Temple", "Fire Temple"),
        ("Water Temple", "Water Temple"),
        ("Shadow Temple", "Shadow Temple"),
        ("Spirit Temple", "Spirit Temple"),
        ("Bottom of the Well", "Bottom of the Well"),
        ("Ice Cavern", "Ice Cavern"),
        ("Gerudo Training Ground", "Gerudo Training Ground"),
        ("Ganons Castle", "Ganon's Castle"),
    ];

    vec![
        SettingBuilder::combobox(
            "starting_age",
            ChoiceSpec::labeled([("child", "Child"), ("adult", "Adult"), ("random", "Random")]),
        )
        .gui_text("Starting Age")
        .shared()
        .default("child")
        .randomize_key(RANDOMIZE_KEY)
        .distribution([("random", 1)]),
        SettingBuilder::combobox(
            "mq_dungeons_mode",
            ChoiceSpec::labeled([
                ("vanilla", "Vanilla"),
                ("mq", "Master Quest"),
                ("specific", "Specific Dungeons"),
                ("count", "Count"),
                ("random", "Completely Random"),
            ]),
        )
        .gui_text("MQ Dungeon Mode")
        .shared()
        .default("vanilla")
        .distribution([("random", 1)])
        .disable(DisableRule::when("vanilla").settings(["mq_dungeons_count", "mq_dungeons_specific"]))
        .disable(DisableRule::when("mq").settings(["mq_dungeons_count", "mq_dungeons_specific"]))
        .disable(DisableRule::when("specific").settings(["mq_dungeons_count"]))
        .disable(DisableRule::when("count").settings(["mq_dungeons_specific"]))
        .disable(DisableRule::when("random").settings(["mq_dungeons_count", "mq_dungeons_specific"])),
        SettingBuilder::multiple_select("mq_dungeons_specific", ChoiceSpec::labeled(dungeons))
            .gui_text("MQ Dungeons")
            .shared(),
        SettingBuilder::scale("mq_dungeons_count", 0, 12)
            .gui_text("MQ Dungeon Count")
            .shared()
            .default(SettingValue::Int(0)),
        SettingBuilder::combobox(
            "shuffle_interior_entrances",
            ChoiceSpec::labeled([
                ("off", "Off"),
                ("simple", "Simple Interiors"),
                ("all", "All Interiors"),
            ]),
        )
        .gui_text("Shuffle Interior Entrances")
        .shared()
        .default("off")
        .randomize_key(RANDOMIZE_KEY)
        .distribution([("off", 2), ("simple", 1), ("all", 1)]),
        SettingBuilder::combobox(
            "shuffle_dungeon_entrances",
            ChoiceSpec::labeled([
                ("off", "Off"),
                ("simple", "Dungeon"),
                ("all", "Dungeon and Ganon"),
            ]),
        )
        .gui_text("Shuffle Dungeon Entrances")
        .shared()
        .default("off")
        .randomize_key(RANDOMIZE_KEY)
        .distribution([("off", 2), ("simple", 1), ("all", 1)]),
        SettingBuilder::checkbutton("shuffle_overworld_entrances")
            .gui_text("Shuffle Overworld Entrances")
            .shared()
            .randomize_key(RANDOMIZE_KEY),
        SettingBuilder::checkbutton("owl_drops")
            .gui_text("Randomize Owl Drops")
            .shared()
            .randomize_key(RANDOMIZE_KEY),
        SettingBuilder::checkbutton("warp_songs")
            .gui_text("Randomize Warp Song Destinations")
            .shared()
            .randomize_key(RANDOMIZE_KEY),
    ]
}

fn shuffle_section() -> Vec<SettingBuilder> {
    vec![
        SettingBuilder::combobox(
            "shuffle_song_items",
            ChoiceSpec::labeled([
                ("song", "Song Locations"),
                ("dungeon", "Dungeon Rewards"),
                ("any", "Anywhere"),
            ]),
        )
        .gui_text("Shuffle Songs")
        .shared()
        .default("song")
        .randomize_key(RANDOMIZE_KEY)
        .distribution([("song", 2), ("dungeon", 1), ("any", 1)]),
        SettingBuilder::combobox(
            "shopsanity",
            ChoiceSpec::labeled([
                ("off", "Off"),
                ("0", "0 Items Per Shop"),
                ("1", "1 Item Per Shop"),
                ("2", "2 Items Per Shop"),
                ("3", "3 Items Per Shop"),
                ("4", "4 Items Per Shop"),
                ("random", "Random # of Items Per Shop"),
            ]),
        )
        .gui_text("Shopsanity")
        .shared()
        .default("off")
        .randomize_key(RANDOMIZE_KEY)
        .distribution([
            ("off", 6),
            ("0", 1),
            ("1", 1),
            ("2", 1),
            ("3", 1),
            ("4", 1),
            ("random", 1),
        ]),
        SettingBuilder::combobox(
            "tokensanity",
            ChoiceSpec::labeled([
                ("off", "Off"),
                ("dungeons", "Dungeons Only"),
                ("overworld", "Overworld Only"),
                ("all", "All Tokens"),
            ]),
        )
        .gui_text("Tokensanity")
        .shared()
        .default("off")
        .randomize_key(RANDOMIZE_KEY),
        SettingBuilder::combobox(
            "shuffle_scrubs",
            ChoiceSpec::labeled([
                ("off", "Off"),
                ("low", "On (Affordable)"),
                ("regular", "On (Expensive)"),
                ("random", "On (Random Prices)"),
            ]),
        )
        .gui_text("Scrub Shuffle")
        .shared()
        .default("off")
        .randomize_key(RANDOMIZE_KEY)
        .distribution([("off", 1), ("low", 1)]),
        SettingBuilder::checkbutton("shuffle_kokiri_sword")
            .gui_text("Shuffle Kokiri Sword")
            .shared()
            .default(true)
            .randomize_key(RANDOMIZE_KEY),
        SettingBuilder::checkbutton("shuffle_ocarinas")
            .gui_text("Shuffle Ocarinas")
            .shared()
            .randomize_key(RANDOMIZE_KEY),
        SettingBuilder::checkbutton("shuffle_cows")
            .gui_text("Shuffle Cows")
            .shared()
            .randomize_key(RANDOMIZE_KEY),
    ]
}

fn dungeon_items_section() -> Vec<SettingBuilder> {
    let mut ganon_choices = KEY_PLACEMENT.to_vec();
    ganon_choices.extend([
        ("on_lacs", "Light Arrow Cutscene"),
        ("triforce", "Triforce Hunt"),
    ]);

    vec![
        SettingBuilder::combobox(
            "shuffle_mapcompass",
            ChoiceSpec::labeled([
                ("remove", "Remove"),
                ("startwith", "Start With"),
                ("vanilla", "Vanilla Locations"),
                ("dungeon", "Own Dungeon"),
                ("regional", "Regional"),
                ("overworld", "Overworld Only"),
                ("any_dungeon", "Any Dungeon"),
                ("keysanity", "Anywhere"),
            ]),
        )
        .gui_text("Maps & Compasses")
        .shared()
        .default("dungeon")
        .randomize_key(RANDOMIZE_KEY),
        SettingBuilder::combobox("shuffle_smallkeys", ChoiceSpec::labeled(KEY_PLACEMENT))
            .gui_text("Small Keys")
            .shared()
            .default("dungeon")
            .randomize_key(RANDOMIZE_KEY),
        SettingBuilder::combobox(
            "shuffle_hideoutkeys",
            ChoiceSpec::labeled([
                ("vanilla", "Vanilla Locations"),
                ("fortress", "Gerudo Fortress Region"),
                ("regional", "Regional"),
                ("overworld", "Overworld Only"),
                ("any_dungeon", "Any Dungeon"),
                ("keysanity", "Anywhere (Keysanity)"),
            ]),
        )
        .gui_text("Thieves' Hideout Keys")
        .shared()
        .default("vanilla")
        .randomize_key(RANDOMIZE_KEY),
        SettingBuilder::combobox("shuffle_bosskeys", ChoiceSpec::labeled(KEY_PLACEMENT))
            .gui_text("Boss Keys")
            .shared()
            .default("dungeon")
            .randomize_key(RANDOMIZE_KEY),
        SettingBuilder::combobox("shuffle_ganon_bosskey", ChoiceSpec::labeled(ganon_choices))
            .gui_text("Ganon's Boss Key")
            .shared()
            .default("dungeon")
            .disabled_default("triforce")
            .randomize_key(RANDOMIZE_KEY)
            .distribution([
                ("remove", 4),
                ("dungeon", 2),
                ("vanilla", 2),
                ("keysanity", 4),
                ("on_lacs", 1),
            ]),
    ]
}
