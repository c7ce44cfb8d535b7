use std::io::Write;

use byteorder::{LittleEndian, WriteBytesExt};

use crate::argument::Argument;
use crate::catalog::InstructionDefinition;
use crate::error::Result;
use crate::header::Header;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    pub definition: &'static InstructionDefinition,
    pub arguments: Vec<Argument>,
    /// Position in words after the header.
    pub word_offset: u32,
}

impl Instruction {
    #[inline]
    pub fn opcode(&self) -> u32 {
        self.definition.opcode
    }

    #[inline]
    pub fn mnemonic(&self) -> &'static str {
        self.definition.mnemonic
    }

    /// Word offset of the instruction that follows this one.
    #[inline]
    pub fn next_word_offset(&self) -> u32 {
        self.word_offset + self.definition.encoded_len() / 4
    }

    pub fn encode<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_u32::<LittleEndian>(self.opcode())?;
        for arg in &self.arguments {
            let (tag, raw) = arg.encoded_pair();
            writer.write_u32::<LittleEndian>(tag)?;
            writer.write_u32::<LittleEndian>(raw)?;
        }
        Ok(())
    }
}

/// A decoded script: the header and the instruction stream in file order.
///
/// String and array payloads travel inside the arguments; the pools and index tables are
/// rebuilt on assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    pub header: Header,
    pub instructions: Vec<Instruction>,
}

impl Script {
    /// Instruction starting at `word_offset`, if any. Instructions are sorted by offset.
    pub fn instruction_at(&self, word_offset: u32) -> Option<&Instruction> {
        self.instructions
            .binary_search_by_key(&word_offset, |i| i.word_offset)
            .ok()
            .map(|idx| &self.instructions[idx])
    }

    /// Word offset just past the last instruction.
    pub fn code_end(&self) -> u32 {
        self.instructions
            .last()
            .map(Instruction::next_word_offset)
            .unwrap_or(0)
    }
}
