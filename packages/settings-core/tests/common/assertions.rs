//! Error-shape assertions

use settings_core::{SettingsError, SettingsResult};

pub fn assert_unknown_setting<T: std::fmt::Debug>(result: SettingsResult<T>, expected_hint: &str) {
    match result {
        Err(SettingsError::UnknownSetting { suggestion, .. }) => {
            assert!(
                suggestion.contains(expected_hint),
                "suggestion {suggestion:?} does not mention {expected_hint:?}"
            );
        }
        other => panic!("expected UnknownSetting, got {other:?}"),
    }
}

pub fn assert_invalid_choice<T: std::fmt::Debug>(result: SettingsResult<T>, setting: &str) {
    match result {
        Err(SettingsError::InvalidChoice { setting: s, .. }) => assert_eq!(s, setting),
        other => panic!("expected InvalidChoice for {setting}, got {other:?}"),
    }
}

pub fn assert_conflict<T: std::fmt::Debug>(result: SettingsResult<T>, source: &str, target: &str) {
    match result {
        Err(SettingsError::Conflict {
            setting,
            other_setting,
            ..
        }) => {
            assert_eq!(setting, source);
            assert_eq!(other_setting, target);
        }
        other => panic!("expected Conflict {source} -> {target}, got {other:?}"),
    }
}
