use std::collections::HashSet;
use std::fmt::Write as _;
use std::io::{Cursor, Read, Seek, SeekFrom, Write};

use byteorder::{LittleEndian, ReadBytesExt};
use itertools::Itertools;

use crate::argument::{Argument, ArgumentType};
use crate::catalog::{self, ARRAY_ARGUMENT_INDEX, OP_COPY_LOCAL_ARRAY};
use crate::error::{Result, ScriptError};
use crate::header::Header;
use crate::instruction::{Instruction, Script};
use crate::pool::{self, TextCodec};
use crate::CodecOptions;

/// Walks the instruction stream of one binary script.
struct Disassembler<R> {
    reader: R,
    header: Header,
    codec: TextCodec,
    stream_len: u64,
    /// Absolute byte offset where the instruction stream stops. Shrinks as string and array
    /// payloads are discovered.
    data_array_end: u64,
}

impl<R: Read + Seek> Disassembler<R> {
    fn new(mut reader: R, options: &CodecOptions) -> Result<Self> {
        let stream_len = reader.seek(SeekFrom::End(0))?;
        reader.seek(SeekFrom::Start(0))?;

        let header = Header::decode(&mut reader)?;
        let data_array_end = header.tables_start();
        log::debug!(
            "{:?} header, signature {:?}, instruction stream ends at or before 0x{:X}",
            header.generation,
            String::from_utf8_lossy(&header.signature),
            data_array_end
        );

        Ok(Self {
            codec: TextCodec::new(header.generation, options.encoding),
            reader,
            header,
            stream_len,
            data_array_end,
        })
    }

    fn read_instruction(&mut self, offset: u64) -> Result<Instruction> {
        let opcode = self.reader.read_u32::<LittleEndian>()?;
        let definition = catalog::lookup_by_opcode(opcode)
            .ok_or(ScriptError::UnknownOpcode { opcode, offset })?;

        let mut arguments = Vec::with_capacity(definition.argument_count as usize);
        for index in 0..definition.argument_count as usize {
            let tag = self.reader.read_u32::<LittleEndian>()?;
            let raw = self.reader.read_u32::<LittleEndian>()?;
            let ty = ArgumentType::from_tag(tag).ok_or(ScriptError::UnknownArgumentType {
                tag,
                raw,
                opcode,
                index,
                offset,
            })?;

            let argument = match ty {
                ArgumentType::String => {
                    let at = self.header.word_to_byte(raw);
                    self.data_array_end = self.data_array_end.min(at);
                    let text = self.codec.read_at(&mut self.reader, at, self.stream_len)?;
                    Argument::Text { text, raw }
                }
                ArgumentType::Plain
                    if opcode == OP_COPY_LOCAL_ARRAY && index == ARRAY_ARGUMENT_INDEX =>
                {
                    let at = self.header.word_to_byte(raw);
                    self.data_array_end = self.data_array_end.min(at);
                    let elements = pool::read_array_at(&mut self.reader, at, self.stream_len)?;
                    Argument::Array { elements, raw }
                }
                ty => Argument::Value { ty, raw },
            };
            arguments.push(argument);
        }

        let word_offset = ((offset - u64::from(self.header.header_len())) >> 2) as u32;
        Ok(Instruction {
            definition,
            arguments,
            word_offset,
        })
    }

    fn run(mut self) -> Result<Script> {
        let mut instructions = Vec::new();
        let mut offset = u64::from(self.header.header_len());
        while offset < self.data_array_end {
            let instruction = self.read_instruction(offset)?;
            offset += u64::from(instruction.definition.encoded_len());
            instructions.push(instruction);
        }
        log::debug!(
            "decoded {} instructions, stream ends at 0x{:X}",
            instructions.len(),
            offset
        );

        Ok(Script {
            header: self.header,
            instructions,
        })
    }
}

/// Decode a binary script. Address arguments stay plain values; see [`resolve_labels`].
pub fn decode_script<R: Read + Seek>(reader: R, options: &CodecOptions) -> Result<Script> {
    Disassembler::new(reader, options)?.run()
}

/// Turn every plain address argument that points at an instruction into a [`Argument::Label`].
///
/// Addresses that miss an instruction boundary, and the "no target" sentinel, stay plain so the
/// text still assembles to the same bytes.
pub fn resolve_labels(script: &mut Script) {
    let starts: HashSet<u32> = script.instructions.iter().map(|i| i.word_offset).collect();
    let mut resolved = 0usize;

    for instruction in &mut script.instructions {
        let opcode = instruction.opcode();
        if !catalog::is_control_flow(opcode) {
            continue;
        }
        for (index, argument) in instruction.arguments.iter_mut().enumerate() {
            if let Argument::Value {
                ty: ArgumentType::Plain,
                raw,
            } = *argument
            {
                if catalog::is_address_argument(opcode, index, raw) && starts.contains(&raw) {
                    *argument = Argument::Label { target: raw };
                    resolved += 1;
                }
            }
        }
    }
    log::debug!("resolved {resolved} label references");
}

fn write_argument(out: &mut String, header: &Header, argument: &Argument) {
    let _ = match argument {
        Argument::Value { ty, raw } => match ty.scope_name() {
            Some(name) => write!(out, "({name} {raw:x})"),
            None => write!(out, "{raw:x}"),
        },
        Argument::Text { text, .. } => write!(out, "\"{text}\""),
        Argument::Array { elements, .. } => {
            write!(out, "[{}]", elements.iter().map(|e| format!("{e:x}")).join(" "))
        }
        Argument::Label { target } => write!(out, "label_{:08x}", header.word_to_byte(*target)),
    };
}

/// Render a script to its text form.
pub fn render_script(script: &Script) -> String {
    let targets: HashSet<u32> = script
        .instructions
        .iter()
        .flat_map(|i| &i.arguments)
        .filter_map(|a| match a {
            Argument::Label { target } => Some(*target),
            _ => None,
        })
        .collect();

    let mut out = String::with_capacity(64 + script.instructions.len() * 32);
    script.header.write_prologue(&mut out);

    for instruction in &script.instructions {
        if targets.contains(&instruction.word_offset) {
            let _ = writeln!(
                out,
                "\nlabel_{:08x}",
                script.header.word_to_byte(instruction.word_offset)
            );
        }
        out.push_str(instruction.mnemonic());
        for argument in &instruction.arguments {
            out.push(' ');
            write_argument(&mut out, &script.header, argument);
        }
        out.push('\n');
    }
    out
}

/// Disassemble a whole binary script from `reader` into `writer`.
pub fn disassemble<R, W>(reader: R, mut writer: W, options: &CodecOptions) -> Result<()>
where
    R: Read + Seek,
    W: Write,
{
    let mut script = decode_script(reader, options)?;
    resolve_labels(&mut script);
    writer.write_all(render_script(&script).as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// In-memory [`disassemble`] with default options.
pub fn disassemble_bytes(bytes: &[u8]) -> Result<String> {
    let mut script = decode_script(Cursor::new(bytes), &CodecOptions::default())?;
    resolve_labels(&mut script);
    Ok(render_script(&script))
}
