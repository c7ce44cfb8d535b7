use std::collections::HashMap;
use std::io::{BufRead, Cursor, Seek, SeekFrom, Write};

use byteorder::{LittleEndian, WriteBytesExt};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::argument::{Argument, ArgumentType};
use crate::catalog::{self, ARRAY_ARGUMENT_INDEX, INDEXED_OPCODES, OP_COPY_LOCAL_ARRAY};
use crate::error::{Result, ScriptError};
use crate::header::{Header, TableDescriptor};
use crate::instruction::{Instruction, Script};
use crate::pool::TextCodec;
use crate::CodecOptions;

static LABEL_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^label_([0-9a-fA-F]+)$").unwrap());

static MNEMONIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\w-]+").unwrap());

// Alternatives in priority order. A string ends at the first quote followed by whitespace or the
// end of the line.
static ARGUMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^(?:",
        r"\((?P<scope>\w+(?:-\w+)*) (?P<scoped>[0-9a-fA-F]+)\)",
        r#"|"(?P<text>.*?)"(?:\s|$)"#,
        r"|label_(?P<label>[0-9a-fA-F]+)",
        r"|\[(?P<array>.*?)\]",
        r"|(?P<value>[0-9a-fA-F]+)",
        r")"
    ))
    .unwrap()
});

fn parse_hex(line: usize, digits: &str) -> Result<u32> {
    u32::from_str_radix(digits, 16)
        .map_err(|e| ScriptError::syntax(line, format!("bad hex value `{digits}`: {e}")))
}

/// One argument token, before label resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Argument(Argument),
    LabelRef(u32),
}

fn token_from(line: usize, caps: &Captures<'_>) -> Result<Token> {
    if let (Some(scope), Some(value)) = (caps.name("scope"), caps.name("scoped")) {
        let ty = ArgumentType::from_scope_name(scope.as_str()).ok_or_else(|| {
            ScriptError::UnknownScopeType {
                line,
                name: scope.as_str().to_owned(),
            }
        })?;
        return Ok(Token::Argument(Argument::Value {
            ty,
            raw: parse_hex(line, value.as_str())?,
        }));
    }
    if let Some(text) = caps.name("text") {
        return Ok(Token::Argument(Argument::Text {
            text: text.as_str().to_owned(),
            raw: 0,
        }));
    }
    if let Some(label) = caps.name("label") {
        return Ok(Token::LabelRef(parse_hex(line, label.as_str())?));
    }
    if let Some(array) = caps.name("array") {
        let elements = array
            .as_str()
            .split_whitespace()
            .map(|e| parse_hex(line, e))
            .collect::<Result<Vec<_>>>()?;
        return Ok(Token::Argument(Argument::Array { elements, raw: 0 }));
    }
    match caps.name("value") {
        Some(value) => Ok(Token::Argument(Argument::plain(parse_hex(line, value.as_str())?))),
        None => Err(ScriptError::syntax(line, "unparsable argument")),
    }
}

/// Split the text after a mnemonic into argument tokens.
fn tokenize_arguments(line: usize, mut rest: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    loop {
        rest = rest.trim_start();
        if rest.is_empty() {
            return Ok(tokens);
        }
        let caps = ARGUMENT
            .captures(rest)
            .ok_or_else(|| ScriptError::syntax(line, format!("cannot parse argument at `{rest}`")))?;
        let matched = caps.get(0).map_or(0, |m| m.end());
        tokens.push(token_from(line, &caps)?);

        let after = &rest[matched..];
        // The string alternative consumes its trailing separator itself.
        if !after.is_empty()
            && !after.starts_with(char::is_whitespace)
            && !rest[..matched].ends_with(char::is_whitespace)
        {
            return Err(ScriptError::syntax(
                line,
                format!("unexpected text after argument: `{after}`"),
            ));
        }
        rest = after;
    }
}

struct LabelFixup {
    instruction: usize,
    argument: usize,
    label: u32,
    line: usize,
}

/// First pass: parse the text into a script whose label references are already word offsets.
/// String and array offsets are assigned later by [`layout`].
pub fn parse_script(text: &str) -> Result<Script> {
    let mut lines = text.lines().enumerate().map(|(i, l)| (i + 1, l));
    let header = Header::parse_prologue(&mut lines)?;

    let mut instructions: Vec<Instruction> = Vec::new();
    let mut labels: HashMap<u32, (u32, usize)> = HashMap::new();
    let mut fixups = Vec::new();
    let mut cursor = 0u32;

    while let Some((mut line, raw_line)) = lines.next() {
        let mut content = raw_line.trim();

        if let Some(opened) = content.strip_prefix("/*") {
            let mut current = opened;
            let rest = loop {
                if let Some(end) = current.find("*/") {
                    break Some(&current[end + 2..]);
                }
                match lines.next() {
                    Some((next_line, next)) => {
                        line = next_line;
                        current = next;
                    }
                    None => break None,
                }
            };
            match rest {
                Some(rest) => content = rest.trim(),
                // unterminated comment runs to the end of the file
                None => break,
            }
        }
        if content.is_empty() || content.starts_with("//") {
            continue;
        }

        if let Some(caps) = LABEL_LINE.captures(content) {
            let label = parse_hex(line, &caps[1])?;
            if let Some(&(_, first)) = labels.get(&label) {
                return Err(ScriptError::DuplicateLabel { line, label, first });
            }
            labels.insert(label, (cursor, line));
            continue;
        }

        let mnemonic = MNEMONIC
            .find(content)
            .map(|m| m.as_str())
            .ok_or_else(|| ScriptError::syntax(line, format!("expected a mnemonic: `{content}`")))?;
        let rest = &content[mnemonic.len()..];
        if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
            return Err(ScriptError::syntax(line, format!("bad mnemonic in `{content}`")));
        }
        let definition =
            catalog::lookup_by_mnemonic(mnemonic).ok_or_else(|| ScriptError::UnknownMnemonic {
                line,
                mnemonic: mnemonic.to_owned(),
            })?;

        let tokens = tokenize_arguments(line, rest)?;
        if tokens.len() != definition.argument_count as usize {
            return Err(ScriptError::ArgumentCountMismatch {
                line,
                mnemonic: definition.mnemonic,
                expected: definition.argument_count,
                found: tokens.len(),
            });
        }

        let mut arguments = Vec::with_capacity(tokens.len());
        for (index, token) in tokens.into_iter().enumerate() {
            let array_slot =
                definition.opcode == OP_COPY_LOCAL_ARRAY && index == ARRAY_ARGUMENT_INDEX;
            let argument = match token {
                Token::LabelRef(label) => {
                    fixups.push(LabelFixup {
                        instruction: instructions.len(),
                        argument: index,
                        label,
                        line,
                    });
                    Argument::Label { target: 0 }
                }
                Token::Argument(arg) => arg,
            };
            match (&argument, array_slot) {
                (Argument::Array { .. }, false) => {
                    return Err(ScriptError::syntax(
                        line,
                        format!(
                            "array literals are only valid as argument {} of copy-local-array",
                            ARRAY_ARGUMENT_INDEX + 1
                        ),
                    ))
                }
                (Argument::Label { .. }, true)
                | (
                    Argument::Value {
                        ty: ArgumentType::Plain,
                        ..
                    },
                    true,
                ) => {
                    return Err(ScriptError::syntax(
                        line,
                        format!("argument {} of {} must be an array literal", index + 1, mnemonic),
                    ))
                }
                _ => {}
            }
            arguments.push(argument);
        }

        instructions.push(Instruction {
            definition,
            arguments,
            word_offset: cursor,
        });
        cursor = cursor
            .checked_add(definition.encoded_len() / 4)
            .ok_or(ScriptError::TooLarge {
                what: "instruction stream",
            })?;
    }

    for fixup in fixups {
        let (target, _) = *labels
            .get(&fixup.label)
            .ok_or(ScriptError::UnresolvedLabel {
                line: fixup.line,
                label: fixup.label,
            })?;
        instructions[fixup.instruction].arguments[fixup.argument] = Argument::Label { target };
    }
    log::debug!(
        "parsed {} instructions and {} labels",
        instructions.len(),
        labels.len()
    );

    Ok(Script {
        header,
        instructions,
    })
}

/// Everything that follows the instruction stream.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Footer {
    pub strings: Vec<u8>,
    /// Arrays followed by the three index tables.
    pub words: Vec<u32>,
}

fn to_u32(value: u64, what: &'static str) -> Result<u32> {
    u32::try_from(value).map_err(|_| ScriptError::TooLarge { what })
}

/// Second pass: assign string and array offsets, build the index tables and fill the header.
pub fn layout(script: &mut Script, options: &CodecOptions) -> Result<Footer> {
    let header_len = u64::from(script.header.header_len());
    let codec = TextCodec::new(script.header.generation, options.encoding);
    let mut footer = Footer::default();

    let code_end = header_len + 4 * u64::from(script.code_end());
    for instruction in &mut script.instructions {
        for argument in &mut instruction.arguments {
            if let Argument::Text { text, raw } = argument {
                let cursor = code_end + footer.strings.len() as u64;
                *raw = to_u32((cursor - header_len) >> 2, "string pool")?;
                codec.encode_entry(text, cursor, &mut footer.strings)?;
            }
        }
    }

    let mut word = to_u32(
        (code_end + footer.strings.len() as u64 - header_len) >> 2,
        "string pool",
    )?;
    for instruction in &mut script.instructions {
        for argument in &mut instruction.arguments {
            if let Argument::Array { elements, raw } = argument {
                *raw = word;
                let count = to_u32(elements.len() as u64, "array")?;
                footer.words.push(count);
                footer.words.extend_from_slice(elements);
                word = word
                    .checked_add(count + 1)
                    .ok_or(ScriptError::TooLarge { what: "array pool" })?;
            }
        }
    }

    for (table, opcode) in script.header.tables.iter_mut().zip(INDEXED_OPCODES) {
        let mut offsets: Vec<u32> = script
            .instructions
            .iter()
            .filter(|i| i.opcode() == opcode)
            .map(|i| i.word_offset)
            .collect();
        offsets.sort_unstable();

        let length = to_u32(offsets.len() as u64, "index table")?;
        *table = TableDescriptor {
            length,
            offset: word,
        };
        footer.words.extend(offsets);
        word = word
            .checked_add(length)
            .ok_or(ScriptError::TooLarge { what: "index table" })?;
    }

    log::debug!(
        "layout: {} string bytes, {} footer words, tables {:?}",
        footer.strings.len(),
        footer.words.len(),
        script.header.tables
    );
    Ok(footer)
}

/// Write a laid-out script. The header goes first as a placeholder and is rewritten once
/// everything after it is on disk.
pub fn write_script<W: Write + Seek>(script: &Script, footer: &Footer, writer: &mut W) -> Result<()> {
    let start = writer.stream_position()?;
    let mut placeholder = script.header.clone();
    placeholder.tables = Default::default();
    placeholder.encode(writer)?;

    for instruction in &script.instructions {
        instruction.encode(writer)?;
    }
    writer.write_all(&footer.strings)?;
    for &word in &footer.words {
        writer.write_u32::<LittleEndian>(word)?;
    }

    let end = writer.stream_position()?;
    writer.seek(SeekFrom::Start(start))?;
    script.header.encode(writer)?;
    writer.seek(SeekFrom::Start(end))?;
    writer.flush()?;
    Ok(())
}

/// Assemble a text script from `reader` into `writer`.
pub fn assemble<R, W>(mut reader: R, mut writer: W, options: &CodecOptions) -> Result<()>
where
    R: BufRead,
    W: Write + Seek,
{
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    let mut script = parse_script(&text)?;
    let footer = layout(&mut script, options)?;
    write_script(&script, &footer, &mut writer)
}

/// In-memory [`assemble`] with default options.
pub fn assemble_str(text: &str) -> Result<Vec<u8>> {
    let mut out = Cursor::new(Vec::new());
    assemble(text.as_bytes(), &mut out, &CodecOptions::default())?;
    Ok(out.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const PROLOGUE: &str = "==Binary Information - do not edit==\n\
                            signature = SYS40000\n\
                            local_vars = { 0 0 0 0 0 0 }\n\
                            ====\n\n";

    fn tokens(s: &str) -> Vec<Token> {
        tokenize_arguments(1, s).unwrap()
    }

    #[test]
    fn tokenizer_priority() {
        assert_eq!(
            tokens(" (local-int 1f) \"a b\" label_0000003c [1 2] ff"),
            vec![
                Token::Argument(Argument::Value {
                    ty: ArgumentType::LocalInt,
                    raw: 0x1F
                }),
                Token::Argument(Argument::Text {
                    text: "a b".into(),
                    raw: 0
                }),
                Token::LabelRef(0x3C),
                Token::Argument(Argument::Array {
                    elements: vec![1, 2],
                    raw: 0
                }),
                Token::Argument(Argument::plain(0xFF)),
            ]
        );
    }

    #[test]
    fn string_ends_at_quote_before_space() {
        assert_eq!(
            tokens(r#""say "hi"" 1"#),
            vec![
                Token::Argument(Argument::Text {
                    text: r#"say "hi""#.into(),
                    raw: 0
                }),
                Token::Argument(Argument::plain(1)),
            ]
        );
        assert_eq!(
            tokens(r#""""#),
            vec![Token::Argument(Argument::Text {
                text: String::new(),
                raw: 0
            })]
        );
    }

    #[test]
    fn tabs_separate_arguments() {
        assert_eq!(
            tokens("\t(local-int 0)\t5"),
            vec![
                Token::Argument(Argument::Value {
                    ty: ArgumentType::LocalInt,
                    raw: 0
                }),
                Token::Argument(Argument::plain(5)),
            ]
        );
        assert_eq!(
            tokens("\"a b\"\t1"),
            vec![
                Token::Argument(Argument::Text {
                    text: "a b".into(),
                    raw: 0
                }),
                Token::Argument(Argument::plain(1)),
            ]
        );
        assert_eq!(
            assemble_str(&format!("{PROLOGUE}mov\t(local-int 0)\t5\n")).unwrap(),
            assemble_str(&format!("{PROLOGUE}mov (local-int 0) 5\n")).unwrap()
        );
    }

    #[test]
    fn empty_array() {
        assert_eq!(
            tokens("[]"),
            vec![Token::Argument(Argument::Array {
                elements: vec![],
                raw: 0
            })]
        );
    }

    #[test]
    fn leftover_text_is_an_error() {
        assert!(matches!(
            tokenize_arguments(3, "12xyz"),
            Err(ScriptError::Syntax { line: 3, .. })
        ));
        assert!(matches!(
            tokenize_arguments(3, "(local-int zz)"),
            Err(ScriptError::Syntax { line: 3, .. })
        ));
    }

    #[test]
    fn unknown_scope() {
        assert!(matches!(
            tokenize_arguments(9, "(local-thing 1)"),
            Err(ScriptError::UnknownScopeType { line: 9, ref name }) if name == "local-thing"
        ));
    }

    #[test]
    fn comments_are_skipped() {
        let text = format!(
            "{PROLOGUE}// a comment\n/* block\nstill comment\n*/ jmp label_0000003c\n\nlabel_0000003c\nret\n"
        );
        let script = parse_script(&text).unwrap();
        assert_eq!(script.instructions.len(), 2);
        assert_eq!(script.instructions[0].arguments, vec![Argument::Label { target: 3 }]);
        assert_eq!(script.instructions[1].word_offset, 3);
    }

    #[test]
    fn duplicate_label() {
        let text = format!("{PROLOGUE}label_10\nret\nlabel_10\nret\n");
        let err = parse_script(&text).unwrap_err();
        assert!(
            matches!(err, ScriptError::DuplicateLabel { line: 8, label: 0x10, first: 6 }),
            "{err}"
        );
    }

    #[test]
    fn unresolved_label() {
        let text = format!("{PROLOGUE}ret\njmp label_99\n");
        let err = parse_script(&text).unwrap_err();
        assert!(matches!(err, ScriptError::UnresolvedLabel { line: 7, label: 0x99 }), "{err}");
    }

    #[test]
    fn argument_count() {
        let text = format!("{PROLOGUE}mov 1\n");
        let err = parse_script(&text).unwrap_err();
        assert!(
            matches!(
                err,
                ScriptError::ArgumentCountMismatch {
                    line: 6,
                    mnemonic: "mov",
                    expected: 2,
                    found: 1
                }
            ),
            "{err}"
        );
    }

    #[test]
    fn array_only_where_expected() {
        let text = format!("{PROLOGUE}mov (local-int 0) [1 2]\n");
        assert!(matches!(parse_script(&text), Err(ScriptError::Syntax { line: 6, .. })));
        let text = format!("{PROLOGUE}copy-local-array (local-int 0) 5\n");
        assert!(matches!(parse_script(&text), Err(ScriptError::Syntax { line: 6, .. })));
    }

    #[test]
    fn layout_orders_pools_and_tables() {
        let text = format!(
            "{PROLOGUE}call-script \"a\"\n\
             copy-local-array (local-int 0) [7 8]\n\
             call label_3c\n\
             label_3c\n\
             comment \"bcd\"\n\
             copy-local-array (local-int 1) []\n"
        );
        let mut script = parse_script(&text).unwrap();
        let footer = layout(&mut script, &CodecOptions::default()).unwrap();

        // 3 + 5 + 3 + 3 + 5 words of code
        let code_end = 19;
        let raws: Vec<u32> = script
            .instructions
            .iter()
            .flat_map(|i| &i.arguments)
            .filter(|a| matches!(a, Argument::Text { .. } | Argument::Array { .. }))
            .map(Argument::raw)
            .collect();
        // "a": 1 + 1 + 2 padding, "bcd": 3 + 1 + 4 padding
        assert_eq!(raws, vec![code_end, code_end + 3, code_end + 1, code_end + 6]);
        assert_eq!(footer.strings.len(), 12);
        assert_eq!(footer.words, vec![2, 7, 8, 0, 0, 8]);
        assert_eq!(
            script.header.tables,
            [
                TableDescriptor {
                    length: 0,
                    offset: code_end + 7
                },
                TableDescriptor {
                    length: 1,
                    offset: code_end + 7
                },
                TableDescriptor {
                    length: 1,
                    offset: code_end + 8
                },
            ]
        );
    }
}
