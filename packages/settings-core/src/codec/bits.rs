//! Bit stream and base-32 text form
//!
//! Values are written least-significant bit first. The text form packs
//! five bits per character, LSB first, over a 32-letter alphabet without
//! the easily confused `I`, `O`, `0` and `1`.

use crate::errors::{SettingsError, SettingsResult};
use once_cell::sync::Lazy;

pub const ALPHABET: &[u8; 32] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

pub const BITS_PER_CHAR: usize = 5;

/// ASCII → 5-bit index
static CHAR_INDEX: Lazy<[Option<u8>; 128]> = Lazy::new(|| {
    let mut table = [None; 128];
    for (index, &ch) in ALPHABET.iter().enumerate() {
        table[ch as usize] = Some(index as u8);
    }
    table
});

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitWriter {
    bits: Vec<bool>,
}

impl BitWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the low `width` bits of `value`, LSB first
    pub fn write(&mut self, value: u64, width: u32) {
        for i in 0..width {
            self.bits.push((value >> i) & 1 == 1);
        }
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Pad with zeros to a whole number of characters and render
    pub fn into_text(mut self) -> String {
        let rem = self.bits.len() % BITS_PER_CHAR;
        if rem != 0 {
            self.bits
                .extend(std::iter::repeat(false).take(BITS_PER_CHAR - rem));
        }
        self.bits
            .chunks(BITS_PER_CHAR)
            .map(|chunk| {
                let index = chunk
                    .iter()
                    .enumerate()
                    .fold(0usize, |acc, (i, &bit)| acc | (usize::from(bit) << i));
                char::from(ALPHABET[index])
            })
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct BitReader {
    bits: Vec<bool>,
    pos: usize,
}

impl BitReader {
    /// Parse the text form; rejects characters outside the alphabet
    pub fn from_text(text: &str) -> SettingsResult<Self> {
        let mut bits = Vec::with_capacity(text.len() * BITS_PER_CHAR);
        for (offset, ch) in text.chars().enumerate() {
            let index = u32::from(ch)
                .try_into()
                .ok()
                .and_then(|code: usize| CHAR_INDEX.get(code).copied().flatten())
                .ok_or_else(|| {
                    SettingsError::invalid_encoding(format!(
                        "character '{}' at position {} is not part of the settings alphabet",
                        ch, offset
                    ))
                })?;
            for i in 0..BITS_PER_CHAR {
                bits.push((index >> i) & 1 == 1);
            }
        }
        Ok(Self { bits, pos: 0 })
    }

    pub fn from_bits(bits: Vec<bool>) -> Self {
        Self { bits, pos: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.bits.len() - self.pos
    }

    /// Read `width` bits, LSB first; `None` when the stream is too short
    pub fn read(&mut self, width: u32) -> Option<u64> {
        let width = width as usize;
        if self.remaining() < width {
            return None;
        }
        let value = self.bits[self.pos..self.pos + width]
            .iter()
            .enumerate()
            .fold(0u64, |acc, (i, &bit)| acc | (u64::from(bit) << i));
        self.pos += width;
        Some(value)
    }

    /// Whether everything left is padding
    pub fn only_padding_left(&self) -> bool {
        self.remaining() < BITS_PER_CHAR && self.bits[self.pos..].iter().all(|&b| !b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lsb_first_single_char() {
        let mut writer = BitWriter::new();
        writer.write(1, 1);
        // 1 then four padding zeros → index 1
        assert_eq!(writer.into_text(), "B");

        let mut writer = BitWriter::new();
        writer.write(0b11111, 5);
        assert_eq!(writer.into_text(), "9");
    }

    #[test]
    fn test_empty_stream_renders_empty() {
        assert_eq!(BitWriter::new().into_text(), "");
    }

    #[test]
    fn test_multi_field_packing() {
        let mut writer = BitWriter::new();
        writer.write(0b10, 2);
        writer.write(0b101, 3);
        writer.write(1, 1);
        assert_eq!(writer.len(), 6);
        let text = writer.into_text();
        assert_eq!(text.len(), 2);

        let mut reader = BitReader::from_text(&text).unwrap();
        assert_eq!(reader.read(2), Some(0b10));
        assert_eq!(reader.read(3), Some(0b101));
        assert_eq!(reader.read(1), Some(1));
        assert!(reader.only_padding_left());
        assert_eq!(reader.read(5), None);
    }

    #[test]
    fn test_rejects_confusable_characters() {
        for bad in ["AAI", "O", "A0", "1", "a", "é"] {
            let err = BitReader::from_text(bad).unwrap_err();
            assert!(matches!(err, SettingsError::InvalidEncoding { .. }), "{bad}");
        }
    }

    #[test]
    fn test_zero_width_read() {
        let mut reader = BitReader::from_bits(Vec::new());
        assert_eq!(reader.read(0), Some(0));
    }
}
