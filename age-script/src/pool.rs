//! String and array payloads that live after the instruction stream.
//!
//! Strings are stored with every code unit inverted and end with an all-ones unit; generation 4
//! uses bytes in a legacy codepage, generation 5 uses UTF-16LE units. Arrays are a count word
//! followed by that many words.

use std::io::{Read, Seek, SeekFrom};

use age_nls::{Decoder, Encoding, TextDecoder, TextEncoder};
use byteorder::{LittleEndian, ReadBytesExt};

use crate::error::{Result, ScriptError};
use crate::header::Generation;

const SENTINEL: u8 = 0xFF;

/// Text conversion for one script, fixed by its generation.
#[derive(Debug, Clone, Copy)]
pub struct TextCodec {
    decoder: Decoder,
}

impl TextCodec {
    /// `legacy` is only consulted for generation 4.
    pub fn new(generation: Generation, legacy: Encoding) -> Self {
        let enc = match generation {
            Generation::Gen4 => legacy,
            Generation::Gen5 => Encoding::Utf16Le,
        };
        Self {
            decoder: Decoder::new(enc),
        }
    }

    #[inline]
    fn unit_width(&self) -> usize {
        self.decoder.encoding().unit_width()
    }

    fn encoding_name(&self) -> &'static str {
        self.decoder.encoding().as_encoding_rs().name()
    }

    /// Read the string starting at absolute byte `offset`, restoring the reader position after.
    pub fn read_at<R: Read + Seek>(
        &self,
        reader: &mut R,
        offset: u64,
        stream_len: u64,
    ) -> Result<String> {
        if offset >= stream_len {
            return Err(ScriptError::OutOfBounds {
                what: "string",
                offset,
            });
        }

        let resume = reader.stream_position()?;
        reader.seek(SeekFrom::Start(offset))?;

        let width = self.unit_width();
        let mut raw = Vec::with_capacity(32);
        let mut unit = [0u8; 2];
        loop {
            reader.read_exact(&mut unit[..width])?;
            if unit[..width].iter().all(|&b| b == SENTINEL) {
                break;
            }
            raw.extend(unit[..width].iter().map(|b| b ^ SENTINEL));
        }
        reader.seek(SeekFrom::Start(resume))?;

        let converted = self.decoder.decode(&raw);
        if converted.had_errors {
            log::warn!(
                "string at 0x{:X} has bytes that are not valid {}, they were replaced",
                offset,
                self.encoding_name()
            );
        }
        let text = converted.value.into_owned();
        if !fits_quoted(&text) {
            return Err(ScriptError::UnquotableText { offset, text });
        }
        log::trace!("string at 0x{offset:X}: {text:?}");
        Ok(text)
    }

    /// Encode `text` as a pool entry: inverted units, the sentinel unit, then `0xFF` bytes until
    /// `cursor` (absolute byte position of the entry) plus the entry length is 4-aligned. Always at
    /// least one padding byte is written.
    pub fn encode_entry(&self, text: &str, cursor: u64, out: &mut Vec<u8>) -> Result<()> {
        let converted = self.decoder.encode(text);
        let width = self.unit_width();
        let invalid = || ScriptError::InvalidText {
            offset: cursor,
            encoding: self.encoding_name(),
        };
        if converted.had_errors {
            return Err(invalid());
        }
        // A NUL unit would invert to the sentinel and cut the string short.
        if converted
            .value
            .chunks(width)
            .any(|unit| unit.iter().all(|&b| b == 0))
        {
            return Err(invalid());
        }

        let start = out.len();
        out.extend(converted.value.iter().map(|b| b ^ SENTINEL));
        out.extend(std::iter::repeat(SENTINEL).take(width));

        let end = cursor + (out.len() - start) as u64;
        let padding = 4 - (end % 4) as usize;
        out.extend(std::iter::repeat(SENTINEL).take(padding));
        Ok(())
    }
}

/// Whether `text` reads back unchanged from a `"..."` argument: no line breaks, and no quote
/// followed by whitespace, since that ends the argument.
pub fn fits_quoted(text: &str) -> bool {
    !text.contains(['\n', '\r'])
        && !text
            .split('"')
            .skip(1)
            .any(|after| after.starts_with(char::is_whitespace))
}

/// Read the footer array at absolute byte `offset`, restoring the reader position after.
pub fn read_array_at<R: Read + Seek>(
    reader: &mut R,
    offset: u64,
    stream_len: u64,
) -> Result<Vec<u32>> {
    if offset + 4 > stream_len {
        return Err(ScriptError::OutOfBounds {
            what: "array",
            offset,
        });
    }

    let resume = reader.stream_position()?;
    reader.seek(SeekFrom::Start(offset))?;
    let count = reader.read_u32::<LittleEndian>()?;
    if offset + 4 + u64::from(count) * 4 > stream_len {
        return Err(ScriptError::OutOfBounds {
            what: "array",
            offset,
        });
    }
    let mut elements = vec![0u32; count as usize];
    reader.read_u32_into::<LittleEndian>(&mut elements)?;
    reader.seek(SeekFrom::Start(resume))?;

    log::trace!("array at 0x{offset:X}: {count} elements");
    Ok(elements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn gen4_entry_layout() {
        let codec = TextCodec::new(Generation::Gen4, Encoding::ShiftJis);
        let mut out = Vec::new();
        codec.encode_entry("AB", 0x40, &mut out).unwrap();
        // 2 text bytes + sentinel + 1 padding
        assert_eq!(out, [!b'A', !b'B', 0xFF, 0xFF]);

        out.clear();
        codec.encode_entry("ABC", 0x40, &mut out).unwrap();
        // already aligned after the sentinel, so a full word of padding follows
        assert_eq!(out, [!b'A', !b'B', !b'C', 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]);
    }

    #[test]
    fn padding_always_realigns() {
        let codec = TextCodec::new(Generation::Gen4, Encoding::ShiftJis);
        let mut out = Vec::new();
        let base = 60u64;
        for text in ["", "a", "ab", "abc", "abcd", "あいう"] {
            let before = out.len();
            codec.encode_entry(text, base + out.len() as u64, &mut out).unwrap();
            assert_eq!((base + out.len() as u64) % 4, 0, "{text:?}");
            assert!(out.len() - before >= 2);
            assert_eq!(out.last(), Some(&0xFF));
        }
    }

    #[test]
    fn gen5_entry_layout() {
        let codec = TextCodec::new(Generation::Gen5, Encoding::ShiftJis);
        let mut out = Vec::new();
        codec.encode_entry("A", 0x44, &mut out).unwrap();
        // unit + sentinel unit lands on a boundary, so four padding bytes follow
        assert_eq!(out, [0xBEu8, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]);

        out.clear();
        codec.encode_entry("あい", 0x44, &mut out).unwrap();
        assert_eq!(out, [0xBDu8, 0xCF, 0xBB, 0xCF, 0xFF, 0xFF, 0xFF, 0xFF]);
    }

    #[test]
    fn read_back_entries() {
        for generation in [Generation::Gen4, Generation::Gen5] {
            let codec = TextCodec::new(generation, Encoding::ShiftJis);
            let mut data = vec![0u8; 8];
            codec.encode_entry("テスト", 8, &mut data).unwrap();

            let len = data.len() as u64;
            let mut reader = Cursor::new(data);
            reader.set_position(4);
            assert_eq!(codec.read_at(&mut reader, 8, len).unwrap(), "テスト");
            assert_eq!(reader.position(), 4);
        }
    }

    #[test]
    fn quoting_limits() {
        assert!(fits_quoted(""));
        assert!(fits_quoted("say \"hi\""));
        assert!(fits_quoted("\"a\"b"));
        assert!(!fits_quoted("he said \"hi\" ok"));
        assert!(!fits_quoted("tab\"\tafter"));
        assert!(!fits_quoted("line1\nline2"));

        let codec = TextCodec::new(Generation::Gen4, Encoding::ShiftJis);
        let mut data = Vec::new();
        data.extend("a\" b".bytes().map(|b| !b));
        data.push(0xFF);
        let len = data.len() as u64;
        let err = codec.read_at(&mut Cursor::new(data), 0, len).unwrap_err();
        assert!(matches!(err, ScriptError::UnquotableText { offset: 0, ref text } if text == "a\" b"));
    }

    #[test]
    fn nul_cannot_be_encoded() {
        let codec = TextCodec::new(Generation::Gen4, Encoding::ShiftJis);
        let err = codec.encode_entry("a\0b", 0x40, &mut Vec::new()).unwrap_err();
        assert!(matches!(err, ScriptError::InvalidText { offset: 0x40, .. }));
    }

    #[test]
    fn unmappable_text_is_rejected() {
        let codec = TextCodec::new(Generation::Gen4, Encoding::ShiftJis);
        let err = codec.encode_entry("🦀", 0x40, &mut Vec::new()).unwrap_err();
        assert!(matches!(err, ScriptError::InvalidText { .. }));
    }

    #[test]
    fn arrays() {
        let mut data = Vec::new();
        for word in [0xAAAA_AAAAu32, 3, 1, 2, 0x30] {
            data.extend_from_slice(&word.to_le_bytes());
        }
        let len = data.len() as u64;
        let mut reader = Cursor::new(data);
        assert_eq!(read_array_at(&mut reader, 4, len).unwrap(), vec![1, 2, 0x30]);
        assert_eq!(reader.position(), 0);

        let err = read_array_at(&mut reader, 0, len).unwrap_err();
        assert!(matches!(err, ScriptError::OutOfBounds { what: "array", offset: 0 }));
    }
}
