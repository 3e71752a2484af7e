//! Settings string codec
//!
//! Packs every shared setting, in registry declaration order, into a
//! compact base-32 string that can be exchanged between players.
//!
//! # Field encoding
//! ```text
//! bool            1 → true
//! text            choice index (unknown value → default's index)
//! int + range     (value - min) / step, clamped
//! int, no range   choice index
//! list            element codes (choice index + 1), ascending, then
//!                   0         additive: codes are the selection
//!                   all ones  subtractive: codes are the exclusions
//! ```
//! A list is written subtractively when more than half of its choices are
//! selected. Encoding trusts its input: validate first.

pub mod bits;

use crate::configuration::Configuration;
use crate::errors::{SettingsError, SettingsResult};
use crate::provenance::{ConfigProvenance, SettingSource};
use crate::registry::SettingsRegistry;
use crate::schema::{SettingDescriptor, SettingValue, ValueType};
use bits::{BitReader, BitWriter};
use tracing::{debug, warn};

/// Encoder/decoder bound to one registry
#[derive(Debug, Clone, Copy)]
pub struct SettingsCodec<'r> {
    registry: &'r SettingsRegistry,
}

impl<'r> SettingsCodec<'r> {
    pub fn new(registry: &'r SettingsRegistry) -> Self {
        Self { registry }
    }

    /// Encode `config`; absent settings encode their default
    pub fn encode(&self, config: &Configuration) -> String {
        let mut writer = BitWriter::new();
        for descriptor in self.registry.encoded_descriptors() {
            let value = config
                .get(descriptor.name())
                .unwrap_or_else(|| descriptor.default_value());
            encode_field(&mut writer, descriptor, value);
        }
        debug!("encoded {} bits", writer.len());
        writer.into_text()
    }

    /// Decode a settings string into a complete configuration
    pub fn decode(&self, text: &str) -> SettingsResult<Configuration> {
        let mut reader = BitReader::from_text(text.trim())?;
        let mut config = Configuration::new();
        for descriptor in self.registry.iter() {
            let value = if descriptor.shared() && descriptor.bit_width() > 0 {
                decode_field(&mut reader, descriptor)?
            } else {
                descriptor.default_value().clone()
            };
            config.insert(descriptor.name(), value);
        }
        if !reader.only_padding_left() {
            warn!(
                "settings string has {} unused trailing bits",
                reader.remaining()
            );
        }
        Ok(config)
    }

    /// Decode, recording every setting the string moves off its default
    pub fn decode_tracked(&self, text: &str) -> SettingsResult<(Configuration, ConfigProvenance)> {
        let config = self.decode(text)?;
        let mut provenance = ConfigProvenance::new();
        for descriptor in self.registry.encoded_descriptors() {
            if config.get(descriptor.name()) != Some(descriptor.default_value()) {
                provenance.track(descriptor.name(), SettingSource::SettingsString);
            }
        }
        Ok((config, provenance))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Encoding
// ═══════════════════════════════════════════════════════════════════════════

fn encode_field(writer: &mut BitWriter, descriptor: &SettingDescriptor, value: &SettingValue) {
    let width = descriptor.bit_width();
    match descriptor.value_type() {
        ValueType::Bool => {
            let bit = value
                .as_bool()
                .or_else(|| descriptor.default_value().as_bool())
                .unwrap_or(false);
            writer.write(u64::from(bit), width);
        }
        ValueType::List | ValueType::ListOrMap => encode_list(writer, descriptor, value),
        ValueType::Int if descriptor.range().is_some() => {
            writer.write(range_code(descriptor, value), width);
        }
        _ => writer.write(choice_code(descriptor, value), width),
    }
}

fn choice_code(descriptor: &SettingDescriptor, value: &SettingValue) -> u64 {
    let choices = descriptor.choices();
    choices
        .index_of(value)
        .or_else(|| choices.index_of(descriptor.default_value()))
        .unwrap_or(0) as u64
}

fn range_code(descriptor: &SettingDescriptor, value: &SettingValue) -> u64 {
    let Some(range) = descriptor.range() else {
        return 0;
    };
    let step = range.step.max(1);
    let value = value
        .as_int()
        .or_else(|| descriptor.default_value().as_int())
        .unwrap_or(range.min)
        .clamp(range.min, range.max.max(range.min));
    ((value - range.min) / step) as u64
}

/// Selected choice indices, ascending, without duplicates
fn selected_indices(descriptor: &SettingDescriptor, value: &SettingValue) -> Vec<usize> {
    let choices = descriptor.choices();
    let mut indices: Vec<usize> = match value {
        SettingValue::List(items) => items.iter().filter_map(|v| choices.index_of(v)).collect(),
        SettingValue::Map(map) => map
            .keys()
            .filter_map(|k| choices.index_of(&SettingValue::from(k.as_str())))
            .collect(),
        _ => Vec::new(),
    };
    indices.sort_unstable();
    indices.dedup();
    indices
}

fn encode_list(writer: &mut BitWriter, descriptor: &SettingDescriptor, value: &SettingValue) {
    let width = descriptor.bit_width();
    let total = descriptor.choices().len();
    let selected = selected_indices(descriptor, value);

    let (codes, terminator): (Vec<usize>, u64) = if selected.len() * 2 > total {
        let excluded = (0..total).filter(|i| selected.binary_search(i).is_err()).collect();
        (excluded, max_code(width))
    } else {
        (selected, 0)
    };

    for index in codes {
        writer.write(index as u64 + 1, width);
    }
    writer.write(terminator, width);
}

fn max_code(width: u32) -> u64 {
    if width >= u64::BITS {
        u64::MAX
    } else {
        (1u64 << width) - 1
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Decoding
// ═══════════════════════════════════════════════════════════════════════════

fn truncated(descriptor: &SettingDescriptor) -> SettingsError {
    SettingsError::TruncatedEncoding {
        setting: descriptor.name().to_string(),
    }
}

fn decode_field(reader: &mut BitReader, descriptor: &SettingDescriptor) -> SettingsResult<SettingValue> {
    let width = descriptor.bit_width();
    match descriptor.value_type() {
        ValueType::Bool => {
            let code = reader.read(width).ok_or_else(|| truncated(descriptor))?;
            Ok(SettingValue::Bool(code == 1))
        }
        ValueType::List | ValueType::ListOrMap => decode_list(reader, descriptor),
        ValueType::Int if descriptor.range().is_some() => {
            let code = reader.read(width).ok_or_else(|| truncated(descriptor))?;
            decode_range(descriptor, code)
        }
        _ => {
            let code = reader.read(width).ok_or_else(|| truncated(descriptor))?;
            decode_choice(descriptor, code)
        }
    }
}

fn decode_choice(descriptor: &SettingDescriptor, code: u64) -> SettingsResult<SettingValue> {
    descriptor
        .choices()
        .get(code as usize)
        .map(|choice| choice.value.clone())
        .ok_or_else(|| {
            SettingsError::invalid_encoding(format!(
                "index {} is out of range for '{}'",
                code,
                descriptor.name()
            ))
        })
}

fn decode_range(descriptor: &SettingDescriptor, code: u64) -> SettingsResult<SettingValue> {
    let out_of_range = || {
        SettingsError::invalid_encoding(format!(
            "value code {} is out of range for '{}'",
            code,
            descriptor.name()
        ))
    };
    let range = descriptor.range().ok_or_else(out_of_range)?;
    let offset = i64::try_from(code)
        .ok()
        .and_then(|c| c.checked_mul(range.step.max(1)))
        .ok_or_else(out_of_range)?;
    let value = range.min.checked_add(offset).ok_or_else(out_of_range)?;
    if !range.contains(value) {
        return Err(out_of_range());
    }
    Ok(SettingValue::Int(value))
}

fn decode_list(reader: &mut BitReader, descriptor: &SettingDescriptor) -> SettingsResult<SettingValue> {
    let width = descriptor.bit_width();
    let choices = descriptor.choices();
    let total = choices.len();
    let terminator = max_code(width);

    let mut indices = Vec::new();
    let subtractive = loop {
        let code = reader.read(width).ok_or_else(|| truncated(descriptor))?;
        if code == 0 {
            break false;
        }
        if code == terminator {
            break true;
        }
        let index = (code - 1) as usize;
        if index >= total {
            return Err(SettingsError::invalid_encoding(format!(
                "list code {} is out of range for '{}'",
                code,
                descriptor.name()
            )));
        }
        indices.push(index);
    };

    indices.sort_unstable();
    indices.dedup();
    let picked: Vec<usize> = if subtractive {
        (0..total).filter(|i| indices.binary_search(i).is_err()).collect()
    } else {
        indices
    };

    Ok(SettingValue::List(
        picked
            .into_iter()
            .filter_map(|i| choices.get(i).map(|c| c.value.clone()))
            .collect(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::SettingsLayout;
    use crate::schema::{ChoiceSpec, SettingBuilder};

    fn dungeons() -> Vec<&'static str> {
        vec!["Deku Tree", "Dodongos Cavern", "Jabu Jabus Belly", "Forest Temple", "Fire Temple"]
    }

    fn registry() -> SettingsRegistry {
        SettingsRegistry::builder(SettingsLayout::default())
            .setting(SettingBuilder::checkbutton("flag").shared().default(true))
            .setting(
                SettingBuilder::combobox("mode", ChoiceSpec::plain(["a", "b", "c"]))
                    .shared()
                    .default("b"),
            )
            .setting(
                SettingBuilder::multiple_select("dungeons", ChoiceSpec::plain(dungeons()))
                    .shared(),
            )
            .setting(
                SettingBuilder::scale("count", 0, 20)
                    .step(5)
                    .shared()
                    .default(SettingValue::Int(10)),
            )
            .setting(SettingBuilder::numeric("tokens", 1, 100).shared().default(SettingValue::Int(50)))
            .setting(SettingBuilder::checkbutton("local_only").default(true))
            .build()
            .unwrap()
    }

    fn list(items: &[&str]) -> SettingValue {
        SettingValue::List(items.iter().map(|s| SettingValue::from(*s)).collect())
    }

    #[test]
    fn test_default_roundtrip() {
        let registry = registry();
        let codec = SettingsCodec::new(&registry);
        let defaults = Configuration::defaults(&registry);
        let text = codec.encode(&defaults);
        assert_eq!(codec.decode(&text).unwrap(), defaults);
    }

    #[test]
    fn test_bit_layout_of_first_fields() {
        let registry = registry();
        let codec = SettingsCodec::new(&registry);
        // flag=1 (1 bit), mode=b → 1 (2 bits), dungeons additive empty → 0 (3 bits)
        // first char bits: 1,1,0,0,0 → 0b00011 = 3 → 'D'
        let text = codec.encode(&Configuration::defaults(&registry));
        assert!(text.starts_with('D'), "{text}");
    }

    #[test]
    fn test_additive_list() {
        let registry = registry();
        let codec = SettingsCodec::new(&registry);
        let config = Configuration::new().with("dungeons", list(&["Fire Temple", "Deku Tree"]));
        let decoded = codec.decode(&codec.encode(&config)).unwrap();
        // decoded in choice-table order
        assert_eq!(decoded.get("dungeons"), Some(&list(&["Deku Tree", "Fire Temple"])));
    }

    #[test]
    fn test_subtractive_list_is_shorter() {
        let registry = registry();
        let codec = SettingsCodec::new(&registry);
        let most = list(&["Deku Tree", "Dodongos Cavern", "Jabu Jabus Belly", "Forest Temple"]);
        let config = Configuration::new().with("dungeons", most.clone());
        let subtractive = codec.encode(&config);
        assert_eq!(codec.decode(&subtractive).unwrap().get("dungeons"), Some(&most));

        let all = Configuration::new().with("dungeons", list(&dungeons()));
        let encoded_all = codec.encode(&all);
        assert_eq!(codec.decode(&encoded_all).unwrap().get("dungeons"), Some(&list(&dungeons())));
        // all selected: just the terminator
        assert_eq!(encoded_all.len(), codec.encode(&Configuration::defaults(&registry)).len());
    }

    #[test]
    fn test_map_value_encodes_known_keys() {
        let registry = registry();
        let codec = SettingsCodec::new(&registry);
        let config = Configuration::from_json_str(r#"{"dungeons": {"Forest Temple": 1, "Nowhere": 2}}"#).unwrap();
        let decoded = codec.decode(&codec.encode(&config)).unwrap();
        assert_eq!(decoded.get("dungeons"), Some(&list(&["Forest Temple"])));
    }

    #[test]
    fn test_stepped_range() {
        let registry = registry();
        let codec = SettingsCodec::new(&registry);
        let config = Configuration::new().with("count", 15i64).with("tokens", 100i64);
        let decoded = codec.decode(&codec.encode(&config)).unwrap();
        assert_eq!(decoded.get("count"), Some(&SettingValue::Int(15)));
        assert_eq!(decoded.get("tokens"), Some(&SettingValue::Int(100)));
    }

    #[test]
    fn test_unshared_settings_decode_to_default() {
        let registry = registry();
        let codec = SettingsCodec::new(&registry);
        let config = Configuration::new().with("local_only", false);
        let decoded = codec.decode(&codec.encode(&config)).unwrap();
        assert_eq!(decoded.get("local_only"), Some(&SettingValue::Bool(true)));
        assert_eq!(decoded.len(), registry.len());
    }

    #[test]
    fn test_truncated_string() {
        let registry = registry();
        let codec = SettingsCodec::new(&registry);
        let err = codec.decode("D").unwrap_err();
        assert!(matches!(err, SettingsError::TruncatedEncoding { .. }), "{err}");
    }

    #[test]
    fn test_invalid_character() {
        let registry = registry();
        let codec = SettingsCodec::new(&registry);
        assert!(matches!(
            codec.decode("D0AAA"),
            Err(SettingsError::InvalidEncoding { .. })
        ));
    }

    #[test]
    fn test_out_of_range_choice_index() {
        let registry = registry();
        let codec = SettingsCodec::new(&registry);
        // flag=1, mode=3 (bits 1,1) → first char bits 1,1,1,0,0 → 7 → 'H'
        assert!(matches!(
            codec.decode("HAAA"),
            Err(SettingsError::InvalidEncoding { .. })
        ));
    }

    #[test]
    fn test_decode_tracked_marks_changed_settings() {
        let registry = registry();
        let codec = SettingsCodec::new(&registry);
        let text = codec.encode(&Configuration::new().with("mode", "c"));

        let (config, provenance) = codec.decode_tracked(&text).unwrap();
        assert_eq!(config.get("mode"), Some(&SettingValue::from("c")));
        assert_eq!(provenance.source_of("mode"), &SettingSource::SettingsString);
        assert_eq!(provenance.source_of("flag"), &SettingSource::Default);
        assert_eq!(provenance.tracked().len(), 1);
    }
}
