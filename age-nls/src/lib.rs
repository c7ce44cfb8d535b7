use anyhow::{bail, Result};
use encoding_rs::{Encoding as RsEncoding, GB18030, GBK, SHIFT_JIS, UTF_16LE, UTF_8};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::str::FromStr;

/// Result of a conversion, together with whether the codepage had to substitute anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Converted<T> {
    pub value: T,
    pub had_errors: bool,
}

pub trait TextDecoder {
    fn decode<'a>(&self, bytes: &'a [u8]) -> Converted<Cow<'a, str>>;
}

pub trait TextEncoder {
    fn encode<'a>(&self, text: &'a str) -> Converted<Cow<'a, [u8]>>;
}

/// Deserializes from any name [`FromStr`] accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Encoding {
    #[default]
    ShiftJis,
    Gbk,
    Gb18030,
    Utf8,
    /// Little-endian UTF-16 without BOM, as stored by generation 5 scripts.
    Utf16Le,
}

impl Encoding {
    #[inline]
    pub fn as_encoding_rs(self) -> &'static RsEncoding {
        match self {
            Encoding::ShiftJis => SHIFT_JIS,
            Encoding::Gbk => GBK,
            Encoding::Gb18030 => GB18030,
            Encoding::Utf8 => UTF_8,
            Encoding::Utf16Le => UTF_16LE,
        }
    }

    /// Width in bytes of one code unit.
    #[inline]
    pub fn unit_width(self) -> usize {
        match self {
            Encoding::Utf16Le => 2,
            _ => 1,
        }
    }
}

impl FromStr for Encoding {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_ascii_lowercase();
        match lower.as_str() {
            "sjis" | "shiftjis" | "shift_jis" | "shift-jis" | "cp932" => Ok(Encoding::ShiftJis),
            "gbk" | "cp936" => Ok(Encoding::Gbk),
            "gb18030" => Ok(Encoding::Gb18030),
            "utf8" | "utf-8" => Ok(Encoding::Utf8),
            "utf16" | "utf-16" | "utf16le" | "utf-16le" => Ok(Encoding::Utf16Le),
            other => bail!("unsupported nls: {other}"),
        }
    }
}

impl TryFrom<String> for Encoding {
    type Error = anyhow::Error;

    fn try_from(name: String) -> Result<Self> {
        name.parse()
    }
}

/// A codec bound to one encoding.
#[derive(Debug, Clone, Copy, Default)]
pub struct Decoder {
    enc: Encoding,
}

impl Decoder {
    #[inline]
    pub fn new(enc: Encoding) -> Self {
        Self { enc }
    }

    #[inline]
    pub fn encoding(&self) -> Encoding {
        self.enc
    }

    /// Same as [`TextEncoder::encode`], but always returns an owned buffer.
    pub fn encode_owned(&self, text: &str) -> Converted<Vec<u8>> {
        let Converted { value, had_errors } = self.encode(text);
        Converted {
            value: value.into_owned(),
            had_errors,
        }
    }
}

impl TextDecoder for Decoder {
    fn decode<'a>(&self, bytes: &'a [u8]) -> Converted<Cow<'a, str>> {
        let (value, had_errors) = self
            .enc
            .as_encoding_rs()
            .decode_without_bom_handling(bytes);
        Converted { value, had_errors }
    }
}

impl TextEncoder for Decoder {
    fn encode<'a>(&self, text: &'a str) -> Converted<Cow<'a, [u8]>> {
        match self.enc {
            // encoding_rs only ever encodes to UTF-8 for the UTF-16 family.
            Encoding::Utf16Le => Converted {
                value: Cow::Owned(text.encode_utf16().flat_map(u16::to_le_bytes).collect()),
                had_errors: false,
            },
            Encoding::Utf8 => Converted {
                value: Cow::Borrowed(text.as_bytes()),
                had_errors: false,
            },
            _ => {
                let (value, _, had_errors) = self.enc.as_encoding_rs().encode(text);
                Converted { value, had_errors }
            }
        }
    }
}
