use std::fmt::Write as _;
use std::io::{Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use itertools::Itertools;

use crate::error::{Result, ScriptError};

pub const SUB_HEADER_LENGTH: u32 = 0x1C;

const GEN4_MAGIC: &[u8; 4] = b"SYS4";
const GEN5_MAGIC: &[u8; 8] = b"S\0Y\0S\x005\0";

const PROLOGUE_BANNER: &str = "==Binary Information - do not edit==";
const PROLOGUE_END: &str = "====";
const SIGNATURE_PREFIX: &str = "signature = ";
const VARS_PREFIX: &str = "local_vars = {";
const VARS_SUFFIX: &str = "}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Generation {
    /// 60-byte header, narrow signature, single-byte strings.
    Gen4,
    /// 68-byte header, UTF-16 signature, UTF-16 strings.
    Gen5,
}

impl Generation {
    pub fn header_len(self) -> u32 {
        match self {
            Generation::Gen4 => 60,
            Generation::Gen5 => 68,
        }
    }

    fn from_signature(signature: &[u8]) -> Option<Self> {
        if signature.starts_with(GEN4_MAGIC) {
            Some(Generation::Gen4)
        } else if signature.starts_with(b"SYS5") {
            Some(Generation::Gen5)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableDescriptor {
    pub length: u32,
    pub offset: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub generation: Generation,
    /// Narrow form; generation 5 files store it widened to UTF-16.
    pub signature: [u8; 8],
    pub local_vars: [u32; 6],
    pub sub_header_length: u32,
    /// Word offsets of `0x71`, `0x3` and `0x8F` instructions, in that order.
    pub tables: [TableDescriptor; 3],
}

impl Header {
    pub fn new(generation: Generation, signature: [u8; 8], local_vars: [u32; 6]) -> Self {
        Self {
            generation,
            signature,
            local_vars,
            sub_header_length: SUB_HEADER_LENGTH,
            tables: Default::default(),
        }
    }

    #[inline]
    pub fn header_len(&self) -> u32 {
        self.generation.header_len()
    }

    /// Byte offset of the first instruction-stream byte past the header.
    ///
    /// Strings and arrays can pull the real end further down.
    pub fn tables_start(&self) -> u64 {
        let min_word = self.tables.iter().map(|t| t.offset).min().unwrap_or(0);
        self.word_to_byte(min_word)
    }

    /// Absolute byte offset of a header-relative word offset.
    #[inline]
    pub fn word_to_byte(&self, word: u32) -> u64 {
        u64::from(self.header_len()) + (u64::from(word) << 2)
    }

    pub fn decode<R: Read>(reader: &mut R) -> Result<Self> {
        let mut magic = [0u8; 4];
        reader.read_exact(&mut magic)?;

        let mut signature = [0u8; 8];
        let generation = if &magic == GEN4_MAGIC {
            signature[..4].copy_from_slice(&magic);
            reader.read_exact(&mut signature[4..])?;
            Generation::Gen4
        } else if magic == GEN5_MAGIC[..4] {
            let mut wide = [0u8; 16];
            wide[..4].copy_from_slice(&magic);
            reader.read_exact(&mut wide[4..])?;
            if wide[..8] != GEN5_MAGIC[..] {
                return Err(ScriptError::BadMagic { magic });
            }
            for (narrow, unit) in signature.iter_mut().zip(wide.chunks_exact(2)) {
                let unit = u16::from_le_bytes([unit[0], unit[1]]);
                *narrow = u8::try_from(unit).map_err(|_| ScriptError::BadSignature {
                    signature: String::from_utf16_lossy(
                        &wide
                            .chunks_exact(2)
                            .map(|c| u16::from_le_bytes([c[0], c[1]]))
                            .collect::<Vec<_>>(),
                    ),
                })?;
            }
            Generation::Gen5
        } else {
            return Err(ScriptError::BadMagic { magic });
        };

        if signature
            .iter()
            .any(|&b| !b.is_ascii() || b == b'\n' || b == b'\r')
        {
            return Err(ScriptError::BadSignature {
                signature: String::from_utf8_lossy(&signature).into_owned(),
            });
        }

        let mut local_vars = [0u32; 6];
        reader.read_u32_into::<LittleEndian>(&mut local_vars)?;

        let sub_header_length = reader.read_u32::<LittleEndian>()?;
        if sub_header_length != SUB_HEADER_LENGTH {
            log::warn!(
                "sub-header length is 0x{:X}, it will be written back as 0x{:X}",
                sub_header_length,
                SUB_HEADER_LENGTH
            );
        }

        let mut tables = [TableDescriptor::default(); 3];
        for table in &mut tables {
            table.length = reader.read_u32::<LittleEndian>()?;
            table.offset = reader.read_u32::<LittleEndian>()?;
        }

        Ok(Self {
            generation,
            signature,
            local_vars,
            sub_header_length,
            tables,
        })
    }

    pub fn encode<W: Write>(&self, writer: &mut W) -> Result<()> {
        match self.generation {
            Generation::Gen4 => writer.write_all(&self.signature)?,
            Generation::Gen5 => {
                for &b in &self.signature {
                    writer.write_u16::<LittleEndian>(u16::from(b))?;
                }
            }
        }

        for &var in &self.local_vars {
            writer.write_u32::<LittleEndian>(var)?;
        }
        writer.write_u32::<LittleEndian>(SUB_HEADER_LENGTH)?;
        for table in &self.tables {
            writer.write_u32::<LittleEndian>(table.length)?;
            writer.write_u32::<LittleEndian>(table.offset)?;
        }
        Ok(())
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(self.header_len() as usize);
        self.encode(&mut out)?;
        Ok(out)
    }

    /// Text block that opens every disassembly. The signature was checked to be ASCII when
    /// the header was decoded.
    pub fn write_prologue(&self, out: &mut String) {
        let _ = writeln!(out, "{PROLOGUE_BANNER}");
        let _ = writeln!(
            out,
            "{SIGNATURE_PREFIX}{}",
            String::from_utf8_lossy(&self.signature)
        );
        let _ = writeln!(
            out,
            "{VARS_PREFIX} {} {VARS_SUFFIX}",
            self.local_vars.iter().map(|v| format!("{v:x}")).join(" ")
        );
        let _ = writeln!(out, "{PROLOGUE_END}");
        out.push('\n');
    }

    /// Parse the prologue from numbered lines, leaving the iterator on the first line after it.
    pub fn parse_prologue<'a, I>(lines: &mut I) -> Result<Self>
    where
        I: Iterator<Item = (usize, &'a str)>,
    {
        let mut next = |what: &str| -> Result<(usize, &'a str)> {
            lines.next().ok_or_else(|| ScriptError::BadPrologue {
                line: 0,
                message: format!("file ends before the {what}"),
            })
        };

        // Editors on Windows like to prepend a byte order mark.
        let (line, banner) = loop {
            let (line, text) = next("banner")?;
            let text = text.trim_start_matches('\u{FEFF}');
            if !text.trim().is_empty() {
                break (line, text);
            }
        };
        if banner.trim_end() != PROLOGUE_BANNER {
            return Err(ScriptError::BadPrologue {
                line,
                message: format!("expected `{PROLOGUE_BANNER}`"),
            });
        }

        let (line, text) = next("signature")?;
        let raw = text
            .strip_prefix(SIGNATURE_PREFIX)
            .ok_or_else(|| ScriptError::BadPrologue {
                line,
                message: format!("expected `{SIGNATURE_PREFIX}<8 characters>`"),
            })?;
        let signature: [u8; 8] =
            raw.as_bytes()
                .try_into()
                .map_err(|_| ScriptError::BadPrologue {
                    line,
                    message: format!("signature `{raw}` must be exactly 8 bytes"),
                })?;
        let generation =
            Generation::from_signature(&signature).ok_or_else(|| ScriptError::BadPrologue {
                line,
                message: format!("signature `{raw}` names no known format generation"),
            })?;

        let (line, text) = next("local_vars")?;
        let vars = text
            .trim_end()
            .strip_prefix(VARS_PREFIX)
            .and_then(|rest| rest.strip_suffix(VARS_SUFFIX))
            .ok_or_else(|| ScriptError::BadPrologue {
                line,
                message: format!("expected `{VARS_PREFIX} ... {VARS_SUFFIX}`"),
            })?;
        let vars = vars
            .split_whitespace()
            .map(|v| u32::from_str_radix(v, 16))
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| ScriptError::BadPrologue {
                line,
                message: format!("bad local_vars value: {e}"),
            })?;
        let local_vars: [u32; 6] = vars.try_into().map_err(|v: Vec<u32>| {
            ScriptError::BadPrologue {
                line,
                message: format!("there should be 6 local_vars, found {}", v.len()),
            }
        })?;

        let (line, text) = next("closing delimiter")?;
        if text.trim_end() != PROLOGUE_END {
            return Err(ScriptError::BadPrologue {
                line,
                message: format!("expected `{PROLOGUE_END}`"),
            });
        }

        Ok(Header::new(generation, signature, local_vars))
    }
}
